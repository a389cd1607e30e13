//! Decimal Big Int \
//! This crate provides:
//! - [`BigInt`]: arbitrary-precision signed integers kept as decimal digits, with the
//!   usual arithmetic, comparison and increment/decrement surface of a native integer.
//! - [`BigIntError`]: the two ways an operation can fail, a malformed decimal string or
//!   a zero divisor.
//!
//! Division truncates toward zero and `%` takes the sign of the dividend, so
//! `-10 / 3 == -3` and `-10 % 3 == -1`.

mod big_int;
mod big_num_cache;
mod big_num_constants;
mod errors;

pub use big_int::BigInt;
pub use errors::BigIntError;

#[cfg(test)]
mod tests {
    use crate::{BigInt, BigIntError};
    use claims::{assert_err_eq, assert_ok_eq};

    #[test]
    fn it_works() {
        let a = BigInt::from(12345);
        let b: BigInt = "-67890".parse().unwrap();
        let c: BigInt = "0".parse().unwrap();
        let d = a.clone();
        println!("a = {}, b = {}, c = {}, d = {}", a, b, c, d);
        println!("a + b = {}", &a + &b);
        println!("a - b = {}", &a - &b);
        println!("a * b = {}", &a * &b);
        println!("b / a = {}", &b / &a);
        println!("a % 100 = {}", &a % &BigInt::from(100));
        assert_eq!((&a + &b).to_string(), "-55545");
        assert_eq!((&a - &b).to_string(), "80235");
        assert_eq!((&a * &b).to_string(), "-838102050");
        assert_eq!((&b / &a).to_string(), "-5");
        assert_eq!((&a % &BigInt::from(100)).to_string(), "45");
    }

    #[test]
    fn errors() {
        let one = BigInt::from(1);
        let zero = BigInt::from(0);
        assert_err_eq!(one.checked_div(&zero), BigIntError::DivisionByZero);
        assert_err_eq!(one.checked_rem(&zero), BigIntError::DivisionByZero);
        assert_ok_eq!(zero.checked_div(&one), BigInt::zero());
        assert_eq!(BigIntError::DivisionByZero.to_string(), "Division by zero");

        let err = "12a3".parse::<BigInt>().unwrap_err();
        assert_eq!(err, BigIntError::InvalidFormat { character: 'a', position: 2 });
        assert_eq!(err.to_string(), "Invalid character 'a' at position 2 in BigInt string");
        assert_err_eq!(BigInt::try_from("--5"), BigIntError::InvalidFormat { character: '-', position: 1 });
    }
}
