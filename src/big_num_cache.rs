use lazy_static::*;

use crate::BigInt;
use crate::big_num_constants::*;

lazy_static! {
    pub static ref POS_CACHE: [BigInt; MAX_CONSTANT + 1] =
        std::array::from_fn(|n| BigInt::from_u64_digits(n as u64, false));
    pub static ref NEG_CACHE: [BigInt; MAX_CONSTANT + 1] =
        std::array::from_fn(|n| BigInt::from_u64_digits(n as u64, true));
    pub static ref ZERO: BigInt = POS_CACHE[0].clone();
    pub static ref ONE: BigInt = POS_CACHE[1].clone();
}

#[test]
fn test_cache_is_canonical() {
    assert_eq!(ZERO.to_string(), "0");
    assert!(!NEG_CACHE[0].is_negative());
    assert_eq!(NEG_CACHE[0], *ZERO);
    for n in 1..=MAX_CONSTANT {
        assert_eq!(POS_CACHE[n].to_string(), n.to_string());
        assert_eq!(NEG_CACHE[n].to_string(), format!("-{}", n));
    }
}
