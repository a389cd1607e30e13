//! # BigInt
//! Arbitrary-precision signed integers stored as decimal digits.
//! Division truncates toward zero and the remainder takes the sign of the dividend.
//! # Example
//! ```
//! use decimal_bigint::BigInt;
//!
//! let a: BigInt = "10000000000000".parse().unwrap();
//! let b = BigInt::from(-900000000000_i64);
//! println!("a = {}", a);
//! println!("a + b = {}", &a + &b);
//! println!("a - b = {}", &a - &b);
//! println!("a * b = {}", &a * &b);
//! println!("a / b = {}", &a / &b);
//! println!("a % b = {}", &a % &b);
//! ```
//!

use std::fmt::{self, Display};
use std::io::{self, BufRead};
use std::str::FromStr;
use std::ops::{
    Add, AddAssign,
    Sub, SubAssign,
    Mul, MulAssign,
    Div, DivAssign,
    Rem, RemAssign,
    Neg,
};
use std::cmp::Ordering;

use log::trace;

use crate::big_num_constants::*;
use crate::big_num_cache::*;
use crate::errors::BigIntError;

macro_rules! skip_leading_zero {
    ($vec: expr) => {
        {
            $vec
                .into_iter()
                .skip_while(|x| *x == 0)
                .collect::<Vec<u8>>()
        }
    };
}

/// A signed integer of unbounded size.
///
/// The magnitude is kept as decimal digit values, most significant first,
/// with no leading zeros. Zero is `[0]` and is never negative, so two equal
/// values always share one representation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BigInt {
    negative: bool,
    mag: Vec<u8>,
}

// 规范化
impl BigInt {
    fn new(mag: Vec<u8>, negative: bool) -> Self {
        let mut val = BigInt { negative, mag };
        val.normalize();
        val
    }
    /// Strips leading zeros, and makes zero non-negative.
    fn normalize(&mut self) {
        let leading = self.mag.iter().take_while(|d| **d == 0).count();
        if leading == self.mag.len() {
            self.mag.clear();
            self.mag.push(0);
            self.negative = false;
        } else if leading > 0 {
            self.mag.drain(..leading);
        }
    }
}

// 实现构造
impl BigInt {
    /// The canonical zero.
    pub fn zero() -> BigInt {
        ZERO.clone()
    }
    /// Parses an optionally signed decimal string.
    ///
    /// The empty string and a bare sign both parse as zero. Whitespace is
    /// not skipped.
    pub fn parse(val: &str) -> Result<BigInt, BigIntError> {
        if val.is_empty() || val == "0" || val == "+0" || val == "-0" {
            return Ok(BigInt::zero());
        }

        let (negative, digits) = match val.as_bytes()[0] {
            b'-' => (true, &val[1..]),
            b'+' => (false, &val[1..]),
            _ => (false, val),
        };
        let offset = val.len() - digits.len();

        let mut mag = Vec::with_capacity(digits.len());
        for (pos, c) in digits.char_indices() {
            match c.to_digit(RADIX) {
                Some(d) => mag.push(d as u8),
                None => return Err(BigIntError::InvalidFormat {
                    character: c,
                    position: offset + pos,
                }),
            }
        }

        Ok(BigInt::new(mag, negative))
    }
    /// Reads the next whitespace-delimited token from `reader` and parses it.
    ///
    /// Leading whitespace is skipped and the delimiter after the token is
    /// left unread. A malformed token is reported as
    /// [`io::ErrorKind::InvalidData`] wrapping the [`BigIntError`].
    pub fn read_from<R: BufRead>(reader: &mut R) -> io::Result<BigInt> {
        let mut token: Vec<u8> = Vec::new();
        loop {
            let buf = reader.fill_buf()?;
            if buf.is_empty() {
                break;
            }
            let mut used = 0;
            let mut done = false;
            for &b in buf {
                if b.is_ascii_whitespace() {
                    if !token.is_empty() {
                        done = true;
                        break;
                    }
                } else {
                    token.push(b);
                }
                used += 1;
            }
            reader.consume(used);
            if done {
                break;
            }
        }

        if token.is_empty() {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "no BigInt token before end of input"));
        }
        let token = String::from_utf8(token)
            .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))?;
        BigInt::parse(&token)
            .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))
    }
    /// Decomposes `val` by repeated division, without consulting the cache.
    pub(crate) fn from_u64_digits(mut val: u64, negative: bool) -> BigInt {
        let mut mag = Vec::with_capacity(MAX_U64_DIGITS);
        while val > 0 {
            mag.push((val % RADIX as u64) as u8);
            val /= RADIX as u64;
        }
        mag.reverse();
        BigInt::new(mag, negative)
    }
    fn value_of(val: u64, negative: bool) -> BigInt {
        if val <= MAX_CONSTANT as u64 {
            if negative {
                NEG_CACHE[val as usize].clone()
            } else {
                POS_CACHE[val as usize].clone()
            }
        } else {
            BigInt::from_u64_digits(val, negative)
        }
    }
    fn from_i64(val: i64) -> BigInt {
        if val == i64::MIN {
            // negating would overflow
            let mag = I64_MIN_MAGNITUDE.bytes().map(|b| b - b'0').collect();
            return BigInt { negative: true, mag };
        }
        if val < 0 {
            BigInt::value_of((-val) as u64, true)
        } else {
            BigInt::value_of(val as u64, false)
        }
    }
}

impl Default for BigInt {
    fn default() -> Self {
        BigInt::zero()
    }
}

impl FromStr for BigInt {
    type Err = BigIntError;

    fn from_str(val: &str) -> Result<Self, Self::Err> {
        BigInt::parse(val)
    }
}

impl TryFrom<&str> for BigInt {
    type Error = BigIntError;

    fn try_from(val: &str) -> Result<Self, Self::Error> {
        BigInt::parse(val)
    }
}

macro_rules! impl_unsigned_to_big_int {
    ($($u: ty),*) => {
    $(
    impl From<$u> for BigInt {
        fn from(val: $u) -> Self {
            BigInt::value_of(val as u64, false)
        }
    }
    )*
    };
}

macro_rules! impl_signed_to_big_int {
    ($($i: ty),*) => {
    $(
    impl From<$i> for BigInt {
        fn from(val: $i) -> Self {
            BigInt::from_i64(val as i64)
        }
    }
    )*
    };
}
impl_unsigned_to_big_int!(u8, u16, u32, usize, u64);
impl_signed_to_big_int!(i8, i16, i32, isize, i64);

// 实现打印
impl Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits: String = self.mag.iter().map(|d| DIGITS[*d as usize]).collect();
        f.pad_integral(!self.negative, "", &digits)
    }
}

// 杂项
impl BigInt {
    pub fn is_zero(&self) -> bool {
        self.mag.len() == 1 && self.mag[0] == 0
    }
    pub fn is_negative(&self) -> bool {
        self.negative
    }
    pub fn is_positive(&self) -> bool {
        !self.negative && !self.is_zero()
    }
    /// `-1`, `0` or `1`.
    pub fn signum(&self) -> i8 {
        if self.negative {
            -1
        } else if self.is_zero() {
            0
        } else {
            1
        }
    }
    /// Number of decimal digits in the magnitude; zero has one.
    pub fn num_digits(&self) -> usize {
        self.mag.len()
    }
    pub fn abs(&self) -> BigInt {
        BigInt { negative: false, mag: self.mag.clone() }
    }
    /// Unary plus.
    pub fn pos(&self) -> BigInt {
        self.clone()
    }
    pub fn to_u64(&self) -> Option<u64> {
        if self.negative || self.mag.len() > MAX_U64_DIGITS {
            return None;
        }
        self.mag.iter().try_fold(0_u64, |acc, d| {
            acc.checked_mul(RADIX as u64)?.checked_add(*d as u64)
        })
    }
    pub fn to_i64(&self) -> Option<i64> {
        let val = self.abs().to_u64()?;
        if !self.negative {
            i64::try_from(val).ok()
        } else if val == i64::MIN.unsigned_abs() {
            Some(i64::MIN)
        } else {
            i64::try_from(val).ok().map(|v| -v)
        }
    }
}

// 实现大小比较
impl BigInt {
    /// Compares magnitudes without leading zeros.
    fn compare_mag(x: &[u8], y: &[u8]) -> Ordering {
        x.len().cmp(&y.len()).then_with(|| x.cmp(y))
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.negative, other.negative) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            (false, false) => BigInt::compare_mag(&self.mag, &other.mag),
            (true, true) => BigInt::compare_mag(&self.mag, &other.mag).reverse(),
        }
    }
}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// 实现取反
impl Neg for BigInt {
    type Output = BigInt;

    fn neg(mut self) -> Self::Output {
        if !self.is_zero() {
            self.negative = !self.negative;
        }
        self
    }
}

impl Neg for &BigInt {
    type Output = BigInt;

    fn neg(self) -> Self::Output {
        self.clone().neg()
    }
}

// 实现加减法
impl BigInt {
    /// Adds a value given as sign and magnitude.
    /// Subtraction passes the right operand with its sign flipped.
    fn add_signed(&mut self, mag: &[u8], negative: bool) {
        if self.negative == negative {
            self.mag = BigInt::add_mag(&self.mag, mag);
        } else {
            match BigInt::compare_mag(&self.mag, mag) {
                Ordering::Equal => self.mag.clear(),
                Ordering::Greater => {
                    self.mag = BigInt::sub_mag(&self.mag, mag);
                },
                Ordering::Less => {
                    self.mag = BigInt::sub_mag(mag, &self.mag);
                    self.negative = negative;
                },
            }
        }
        self.normalize();
    }
    fn add_assign_ref(&mut self, rhs: &BigInt) {
        self.add_signed(&rhs.mag, rhs.negative);
    }
    fn sub_assign_ref(&mut self, rhs: &BigInt) {
        self.add_signed(&rhs.mag, !rhs.negative);
    }
    /// Result may carry one digit more than the longer input; the leading
    /// digit is zero when there was no final carry.
    fn add_mag<'a>(mut x: &'a [u8], mut y: &'a [u8]) -> Vec<u8> {
        if x.len() < y.len() {
            std::mem::swap(&mut x, &mut y);
        }

        let mut result = vec![0u8; x.len() + 1];
        let mut y_index = y.len();
        let mut carry = 0;
        for x_index in (0..x.len()).rev() {
            let y_digit = if y_index > 0 {
                y_index -= 1;
                y[y_index]
            } else {
                0
            };
            let sum = x[x_index] + y_digit + carry;
            result[x_index + 1] = sum % RADIX as u8;
            carry = sum / RADIX as u8;
        }
        result[0] = carry;

        result
    }
    /// Requires `|big| >= |little|`.
    fn sub_mag(big: &[u8], little: &[u8]) -> Vec<u8> {
        let mut result = vec![0u8; big.len()];
        let mut little_index = little.len();
        let mut borrow = 0;
        for big_index in (0..big.len()).rev() {
            let little_digit = if little_index > 0 {
                little_index -= 1;
                little[little_index] as i8
            } else {
                0
            };
            let mut difference = big[big_index] as i8 - little_digit - borrow;
            if difference < 0 {
                difference += RADIX as i8;
                borrow = 1;
            } else {
                borrow = 0;
            }
            result[big_index] = difference as u8;
        }

        result
    }
}

// 实现乘法
impl BigInt {
    fn mul_assign_ref(&mut self, rhs: &BigInt) {
        if self.is_zero() || rhs.is_zero() {
            *self = BigInt::zero();
            return;
        }
        self.mag = BigInt::mul_mag(&self.mag, &rhs.mag);
        self.negative = self.negative != rhs.negative;
        self.normalize();
    }
    /// Schoolbook product into `x.len() + y.len()` digits.
    fn mul_mag(x: &[u8], y: &[u8]) -> Vec<u8> {
        let mut result = vec![0u8; x.len() + y.len()];
        for i in (0..x.len()).rev() {
            let mut carry: u32 = 0;
            for j in (0..y.len()).rev() {
                let product = x[i] as u32 * y[j] as u32 + result[i + j + 1] as u32 + carry;
                result[i + j + 1] = (product % RADIX) as u8;
                carry = product / RADIX;
            }
            result[i] += carry as u8;
        }
        result
    }
    pub fn square(&self) -> BigInt {
        self * self
    }
}

// 实现除法
impl BigInt {
    /// Truncating division. Fails when `rhs` is zero.
    pub fn checked_div(&self, rhs: &BigInt) -> Result<BigInt, BigIntError> {
        if rhs.is_zero() {
            return Err(BigIntError::DivisionByZero);
        }
        let negative = self.negative != rhs.negative;
        if BigInt::compare_mag(&self.mag, &rhs.mag).is_lt() {
            return Ok(BigInt::zero());
        }
        let (quotient, _) = BigInt::div_rem_mag(&self.mag, &rhs.mag);
        Ok(BigInt::new(quotient, negative))
    }
    /// Remainder of truncating division; non-zero results take the sign of `self`.
    pub fn checked_rem(&self, rhs: &BigInt) -> Result<BigInt, BigIntError> {
        let quotient = self.checked_div(rhs)?;
        let mut result = self - &(&quotient * rhs);
        if !result.is_zero() {
            result.negative = self.negative;
        }
        Ok(result)
    }
    /// Quotient and remainder from a single long-division pass.
    pub fn div_rem(&self, rhs: &BigInt) -> Result<(BigInt, BigInt), BigIntError> {
        if rhs.is_zero() {
            return Err(BigIntError::DivisionByZero);
        }
        if BigInt::compare_mag(&self.mag, &rhs.mag).is_lt() {
            return Ok((BigInt::zero(), self.clone()));
        }
        let (quotient, remainder) = BigInt::div_rem_mag(&self.mag, &rhs.mag);
        Ok((
            BigInt::new(quotient, self.negative != rhs.negative),
            BigInt::new(remainder, self.negative),
        ))
    }
    /// Long division by repeated subtraction, one quotient digit per
    /// dividend digit. The divisor must be non-zero.
    fn div_rem_mag(dividend: &[u8], divisor: &[u8]) -> (Vec<u8>, Vec<u8>) {
        trace!("long division: {} digits by {} digits", dividend.len(), divisor.len());

        let mut quotient = Vec::with_capacity(dividend.len());
        // empty while zero, otherwise free of leading zeros
        let mut remainder: Vec<u8> = Vec::with_capacity(divisor.len() + 1);
        for &digit in dividend {
            remainder.push(digit);
            if remainder[0] == 0 {
                remainder.remove(0);
            }

            let mut count = 0;
            while BigInt::compare_mag(&remainder, divisor).is_ge() {
                remainder = skip_leading_zero!(BigInt::sub_mag(&remainder, divisor));
                count += 1;
            }
            quotient.push(count);
        }

        trace!("long division: {} quotient digits before normalizing", quotient.len());
        (quotient, remainder)
    }
    fn div_assign_ref(&mut self, rhs: &BigInt) {
        match self.checked_div(rhs) {
            Ok(quotient) => *self = quotient,
            Err(err) => panic!("{}", err),
        }
    }
    fn rem_assign_ref(&mut self, rhs: &BigInt) {
        match self.checked_rem(rhs) {
            Ok(remainder) => *self = remainder,
            Err(err) => panic!("{}", err),
        }
    }
}

// 实现自增自减
impl BigInt {
    /// `++x`: adds one and returns the updated value.
    pub fn increment(&mut self) -> &mut Self {
        self.add_assign_ref(&ONE);
        self
    }
    /// `x++`: adds one and returns the value from before.
    pub fn post_increment(&mut self) -> BigInt {
        let before = self.clone();
        self.add_assign_ref(&ONE);
        before
    }
    /// `--x`: subtracts one and returns the updated value.
    pub fn decrement(&mut self) -> &mut Self {
        self.sub_assign_ref(&ONE);
        self
    }
    /// `x--`: subtracts one and returns the value from before.
    pub fn post_decrement(&mut self) -> BigInt {
        let before = self.clone();
        self.sub_assign_ref(&ONE);
        before
    }
}

// 实现运算符
//
// `Div` and `Rem` panic on a zero divisor, as the primitive integers do.
// Use `checked_div`, `checked_rem` or `div_rem` to get a `Result` instead.
macro_rules! impl_bin_op {
    ($($imp: ident, $method: ident, $assign_imp: ident, $assign_method: ident, $kernel: ident;)*) => {
    $(
    impl $assign_imp<&BigInt> for BigInt {
        fn $assign_method(&mut self, rhs: &BigInt) {
            self.$kernel(rhs);
        }
    }

    impl $assign_imp for BigInt {
        fn $assign_method(&mut self, rhs: BigInt) {
            self.$kernel(&rhs);
        }
    }

    impl $imp<&BigInt> for BigInt {
        type Output = BigInt;

        fn $method(mut self, rhs: &BigInt) -> Self::Output {
            self.$kernel(rhs);
            self
        }
    }

    impl $imp for BigInt {
        type Output = BigInt;

        fn $method(mut self, rhs: BigInt) -> Self::Output {
            self.$kernel(&rhs);
            self
        }
    }

    impl $imp<&BigInt> for &BigInt {
        type Output = BigInt;

        fn $method(self, rhs: &BigInt) -> Self::Output {
            let mut result = self.clone();
            result.$kernel(rhs);
            result
        }
    }

    impl $imp<BigInt> for &BigInt {
        type Output = BigInt;

        fn $method(self, rhs: BigInt) -> Self::Output {
            let mut result = self.clone();
            result.$kernel(&rhs);
            result
        }
    }
    )*
    };
}

impl_bin_op! {
    Add, add, AddAssign, add_assign, add_assign_ref;
    Sub, sub, SubAssign, sub_assign, sub_assign_ref;
    Mul, mul, MulAssign, mul_assign, mul_assign_ref;
    Div, div, DivAssign, div_assign, div_assign_ref;
    Rem, rem, RemAssign, rem_assign, rem_assign_ref;
}

#[cfg(test)]
fn big(val: &str) -> BigInt {
    BigInt::parse(val).unwrap()
}

#[test]
fn test_from() {
    let num: i8 = 12;
    let big_num: BigInt = num.into();
    assert_eq!(big_num.to_string(), "12");

    let num: i16 = -100;
    let big_num: BigInt = num.into();
    assert_eq!(big_num.to_string(), "-100");
    assert!(big_num.is_negative());

    let num: isize = -10000;
    let big_num: BigInt = num.into();
    assert_eq!(big_num.to_string(), "-10000");

    assert_eq!(BigInt::from(0_i64), BigInt::zero());
    assert_eq!(BigInt::from(i8::MIN).to_string(), "-128");
    assert_eq!(BigInt::from(i32::MIN).to_string(), "-2147483648");
    assert_eq!(BigInt::from(i64::MAX).to_string(), "9223372036854775807");
    assert_eq!(BigInt::from(i64::MIN).to_string(), "-9223372036854775808");
    assert_eq!(BigInt::from(u64::MAX).to_string(), "18446744073709551615");
    assert_eq!(BigInt::from(-16_i32), NEG_CACHE[16]);
    assert_eq!(BigInt::from(17_u8).to_string(), "17");
}

#[test]
fn test_parse() {
    assert_eq!(big(""), BigInt::zero());
    assert_eq!(big("+0"), BigInt::zero());
    assert_eq!(big("-0"), BigInt::zero());
    assert_eq!(big("-000"), BigInt::zero());
    assert!(!big("-000").is_negative());
    assert_eq!(big("-"), BigInt::zero());
    assert_eq!(big("+"), BigInt::zero());
    assert_eq!(big("+00123").to_string(), "123");
    assert_eq!(big("-00123").to_string(), "-123");
    assert_eq!(big("-67890").to_string(), "-67890");

    assert_eq!(
        BigInt::parse("12a3"),
        Err(BigIntError::InvalidFormat { character: 'a', position: 2 }),
    );
    assert_eq!(
        BigInt::parse("--5"),
        Err(BigIntError::InvalidFormat { character: '-', position: 1 }),
    );
    assert_eq!(
        BigInt::parse("5."),
        Err(BigIntError::InvalidFormat { character: '.', position: 1 }),
    );
    assert!(BigInt::parse(" 5").is_err());
    assert!(BigInt::parse("٣").is_err());
}

#[test]
fn test_normalize() {
    let val = BigInt::new(vec![0, 0, 4, 2], true);
    assert_eq!(val.mag, vec![4, 2]);
    assert!(val.negative);

    let val = BigInt::new(vec![], true);
    assert_eq!(val.mag, vec![0]);
    assert!(!val.negative);
}

#[test]
fn test_display() {
    assert_eq!(big("-0042").to_string(), "-42");
    assert_eq!(format!("{:>6}", big("-42")), "   -42");
    assert_eq!(format!("{:+}", big("42")), "+42");
    assert_eq!(format!("{:05}", big("-42")), "-0042");
}

#[test]
fn test_add() {
    assert_eq!((BigInt::from(12345) + big("-67890")).to_string(), "-55545");
    assert_eq!((big("999") + big("1")).to_string(), "1000");
    assert_eq!((big("-999") + big("-1")).to_string(), "-1000");
    assert_eq!((big("-5") + big("5")), BigInt::zero());
    assert_eq!((big("5") + big("-3")).to_string(), "2");
    assert_eq!(
        (big("12345678901234567890") + big("98765432109876543210")).to_string(),
        "111111111011111111100",
    );

    let mut a = big("1");
    a += big("-10");
    assert_eq!(a.to_string(), "-9");
    a += &big("9");
    assert_eq!(a, BigInt::zero());
    assert!(!a.is_negative());
}

#[test]
fn test_add_mag_either_order() {
    assert_eq!(BigInt::add_mag(&[9, 9, 9], &[1]), vec![1, 0, 0, 0]);
    assert_eq!(BigInt::add_mag(&[1], &[9, 9, 9]), vec![1, 0, 0, 0]);
    assert_eq!(BigInt::add_mag(&[1, 2], &[3, 4, 5]), vec![0, 3, 5, 7]);
    assert_eq!(
        (BigInt::from(i64::MIN) + BigInt::from(i64::MIN)).to_string(),
        "-18446744073709551616",
    );
    assert_eq!((big("7") + big("123456789012345678901234567890")).to_string(), "123456789012345678901234567897");
}

#[test]
fn test_sub() {
    let a = BigInt::from(12345);
    let b = big("-67890");
    assert_eq!((&a - &b).to_string(), "80235");
    assert_eq!((&b - &a).to_string(), "-80235");
    assert_eq!((big("1000") - big("1")).to_string(), "999");
    assert_eq!((big("1") - big("1000")).to_string(), "-999");
    assert_eq!((big("-1") - big("-1000")).to_string(), "999");
    assert_eq!((big("-1000") - big("-1")).to_string(), "-999");
    assert_eq!(big("-7") - big("-7"), BigInt::zero());
    assert_eq!((BigInt::zero() - big("7")).to_string(), "-7");
    assert_eq!(big("7") - BigInt::zero(), big("7"));

    let mut c = big("100000000000000000000");
    c -= &big("1");
    assert_eq!(c.to_string(), "99999999999999999999");
}

#[test]
fn test_mul() {
    assert_eq!(
        (big("12345678901234567890") * big("98765432109876543210")).to_string(),
        "1219326311370217952237463801111263526900",
    );
    assert_eq!((BigInt::from(-5) * BigInt::from(3)).to_string(), "-15");
    assert_eq!((BigInt::from(-5) * BigInt::from(-3)).to_string(), "15");
    assert_eq!(BigInt::from(-5) * BigInt::zero(), BigInt::zero());
    assert!(!(BigInt::from(-5) * BigInt::zero()).is_negative());
    assert_eq!((BigInt::from(12345) * big("-67890")).to_string(), "-838102050");

    let a: BigInt = "10000000000000000".parse().unwrap();
    let b: BigInt = "3001".parse().unwrap();
    assert_eq!((&a * &b).to_string(), "30010000000000000000");
    assert_eq!(&b * &a, &a * &b);

    let mut c = big("9");
    c *= big("9");
    assert_eq!(c.to_string(), "81");
}

#[test]
fn test_square() {
    assert_eq!(big("3").square(), big("9"));
    assert_eq!(big("-3").square(), big("9"));
    assert_eq!(
        big("1267650600228229401496703205376").square().to_string(),
        "1606938044258990275541962092341162602522202993782792835301376",
    );
}

#[test]
fn test_div() {
    let a = big("120");
    let b = big("13");
    assert_eq!(a / b, big("9"));

    let a = big("10000000000000000000000000000000000");
    let b = big("1000");
    assert_eq!(a / b, big("10000000000000000000000000000000"));

    let a = big("124871287894782164876238905710532895792830741278950327951074309571023759712087492109591287094780219747214567876543245678976547897654367543567654678987654321456789087654325678908765432567890876543245678908765432567890876543876543245678907654356789");
    let b = big("5678987654678976543587654678976546789087657876545678976543256789765432456789234567890854376");
    let c = big("21988300642263136800048566126805476040703295625345756336585704044222781621158596876349726562910906651562104831721609088222205401883168960593370061500432215");
    assert_eq!(a / b, c);

    assert_eq!((BigInt::from(-10) / BigInt::from(3)).to_string(), "-3");
    assert_eq!((BigInt::from(10) / BigInt::from(-3)).to_string(), "-3");
    assert_eq!((BigInt::from(-10) / BigInt::from(-3)).to_string(), "3");
    assert_eq!((big("-67890") / BigInt::from(12345)).to_string(), "-5");
    assert_eq!(BigInt::from(-2) / BigInt::from(3), BigInt::zero());
    assert!(!(BigInt::from(-2) / BigInt::from(3)).is_negative());
    assert_eq!(BigInt::from(7) / BigInt::from(7), big("1"));
}

#[test]
fn test_mod() {
    assert_eq!(big("12") % big("8"), big("4"));
    assert_eq!(big("10000000000000000") % big("10"), BigInt::zero());
    assert_eq!(BigInt::from(12345) % BigInt::from(100), big("45"));

    let a = big("23456789873625348759607098765432345678909876325346546543456453573434839063464369876543245");
    let b = big("526738495607659438721653478560954837265378495607");
    let r = big("393707270751296419349581795408095683999332705291");
    assert_eq!(a % b, r);

    assert_eq!((BigInt::from(-10) % BigInt::from(3)).to_string(), "-1");
    assert_eq!((BigInt::from(10) % BigInt::from(-3)).to_string(), "1");
    assert_eq!((BigInt::from(-10) % BigInt::from(-3)).to_string(), "-1");
    assert_eq!(BigInt::from(-9) % BigInt::from(3), BigInt::zero());
    assert_eq!((BigInt::from(-2) % BigInt::from(3)).to_string(), "-2");
}

#[test]
fn test_div_rem() {
    let (q, r) = big("-67890").div_rem(&BigInt::from(12345)).unwrap();
    assert_eq!(q.to_string(), "-5");
    assert_eq!(r.to_string(), "-6165");

    let (q, r) = big("3").div_rem(&big("-10")).unwrap();
    assert_eq!(q, BigInt::zero());
    assert_eq!(r, big("3"));

    let a = big("124871287894782164876238905710532895792830741278950327951074309571023759712087492109591287094780219747214567876543245678976547897654367543567654678987654321456789087654325678908765432567890876543245678908765432567890876543876543245678907654356789");
    let b = big("5678987654678976543587654678976546789087657876545678976543256789765432456789234567890854376");
    let (q, r) = a.div_rem(&b).unwrap();
    assert_eq!(r.to_string(), "1193100845153944161348506284633422837373178517256300220003478173303874237852253838030233949");
    assert_eq!(&q * &b + &r, a);
    assert_eq!(r, a.checked_rem(&b).unwrap());
}

#[test]
fn test_division_by_zero() {
    let one = big("1");
    let zero = BigInt::zero();
    assert_eq!(one.checked_div(&zero), Err(BigIntError::DivisionByZero));
    assert_eq!(one.checked_rem(&zero), Err(BigIntError::DivisionByZero));
    assert_eq!(zero.checked_div(&zero), Err(BigIntError::DivisionByZero));
    assert_eq!(one.div_rem(&big("-0")), Err(BigIntError::DivisionByZero));
}

#[test]
#[should_panic(expected = "Division by zero")]
fn test_div_operator_by_zero() {
    let _ = big("1") / BigInt::zero();
}

#[test]
#[should_panic(expected = "Division by zero")]
fn test_rem_assign_by_zero() {
    let mut a = big("1");
    a %= BigInt::zero();
}

#[test]
fn test_failed_assign_leaves_receiver() {
    let mut a = big("-123");
    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        a /= BigInt::zero();
    }));
    assert!(result.is_err());
    assert_eq!(a, big("-123"));
}

#[test]
fn test_compare() {
    let a = BigInt::from(12345);
    let b = big("-67890");
    let d = a.clone();
    assert!(a == d);
    assert!(a != b);
    assert!(!(a < b));
    assert!(a > b);
    assert!(b <= a);
    assert!(a >= d);
    assert!(big("-2") < big("-1"));
    assert!(big("-10") < big("-9"));
    assert!(big("9") < big("10"));
    assert!(big("-1") < BigInt::zero());
    assert_eq!(big("-0").cmp(&big("0")), Ordering::Equal);
    assert_eq!(BigInt::compare_mag(&[1, 2], &[1, 3]), Ordering::Less);
    assert_eq!(BigInt::compare_mag(&[2], &[1, 0]), Ordering::Less);
    assert_eq!(BigInt::compare_mag(&[9, 9], &[9, 9]), Ordering::Equal);
}

#[test]
fn test_neg() {
    let a = BigInt::from(12345);
    assert_eq!((-&a).to_string(), "-12345");
    assert_eq!(-(-a.clone()), a);
    assert_eq!(-BigInt::zero(), BigInt::zero());
    assert!(!(-BigInt::zero()).is_negative());
    assert_eq!(a.pos(), a);

    let min = BigInt::from(i64::MIN);
    assert_eq!((-&min).to_string(), "9223372036854775808");
    assert_eq!(-(-min.clone()), min);
}

#[test]
fn test_increment_decrement() {
    let mut a = big("999");
    assert_eq!(a.increment().to_string(), "1000");
    assert_eq!(a.to_string(), "1000");

    let mut b = big("1000");
    assert_eq!(b.post_decrement().to_string(), "1000");
    assert_eq!(b.to_string(), "999");

    let mut c = BigInt::from(12345);
    assert_eq!(c.increment().to_string(), "12346");
    assert_eq!(c.post_decrement().to_string(), "12346");
    assert_eq!(c.to_string(), "12345");

    let mut d = BigInt::zero();
    assert_eq!(d.decrement().to_string(), "-1");
    assert_eq!(d.post_increment().to_string(), "-1");
    assert_eq!(d, BigInt::zero());
}

#[test]
fn test_to_u64() {
    let a = big("123456789110");
    assert_eq!(a.to_u64(), Some(123456789110));
    assert_eq!(big("18446744073709551615").to_u64(), Some(u64::MAX));
    assert_eq!(big("18446744073709551616").to_u64(), None);
    assert_eq!(big("-1").to_u64(), None);
}

#[test]
fn test_to_i64() {
    assert_eq!(big("-9223372036854775808").to_i64(), Some(i64::MIN));
    assert_eq!(big("9223372036854775807").to_i64(), Some(i64::MAX));
    assert_eq!(big("9223372036854775808").to_i64(), None);
    assert_eq!(big("-9223372036854775809").to_i64(), None);
    assert_eq!(big("-42").to_i64(), Some(-42));
    assert_eq!(BigInt::zero().to_i64(), Some(0));
}

#[test]
fn test_misc() {
    assert_eq!(big("-42").signum(), -1);
    assert_eq!(BigInt::zero().signum(), 0);
    assert_eq!(big("42").signum(), 1);
    assert!(big("42").is_positive());
    assert!(!BigInt::zero().is_positive());
    assert_eq!(big("-42").abs(), big("42"));
    assert_eq!(big("-12345").num_digits(), 5);
    assert_eq!(BigInt::zero().num_digits(), 1);
    assert_eq!(BigInt::default(), BigInt::zero());
}

#[test]
fn test_clone_is_independent() {
    let a = big("12345");
    let mut b = a.clone();
    b += big("1");
    assert_eq!(a.to_string(), "12345");
    assert_eq!(b.to_string(), "12346");
}

#[test]
fn test_read_from() {
    let mut input = io::Cursor::new("  12345\n-67890 +0\t12a3");
    assert_eq!(BigInt::read_from(&mut input).unwrap(), big("12345"));
    assert_eq!(BigInt::read_from(&mut input).unwrap(), big("-67890"));
    assert_eq!(BigInt::read_from(&mut input).unwrap(), BigInt::zero());

    let err = BigInt::read_from(&mut input).unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    assert_eq!(err.to_string(), "Invalid character 'a' at position 2 in BigInt string");

    let err = BigInt::read_from(&mut input).unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
}
