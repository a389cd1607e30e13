pub const RADIX: u32 = 10;

pub const DIGITS: [char; RADIX as usize] = [
    '0' , '1' , '2' , '3' , '4' ,
    '5' , '6' , '7' , '8' , '9' ,
];

/// Largest value served from the small-value cache.
pub const MAX_CONSTANT: usize = 16;

/// `|i64::MIN|`, which has no `i64` representation of its own.
pub const I64_MIN_MAGNITUDE: &str = "9223372036854775808";

/// Decimal digits in `u64::MAX`.
pub const MAX_U64_DIGITS: usize = 20;
