//! Error types returned by [`BigInt`](crate::BigInt) operations.

use thiserror::Error as ThisError;

/// Every way a [`BigInt`](crate::BigInt) operation can fail.
#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[non_exhaustive]
pub enum BigIntError {
    /// The input string holds something other than an optional leading sign
    /// followed by decimal digits.
    #[error("Invalid character {character:?} at position {position} in BigInt string")]
    InvalidFormat {
        character: char,
        /// Byte offset into the original input, sign included.
        position: usize,
    },

    /// The right-hand operand of a division or modulus is zero.
    #[error("Division by zero")]
    DivisionByZero,
}
