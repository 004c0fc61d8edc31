//! Commission errors

use rust_decimal::Decimal;
use thiserror::Error;

/// Reasons a commission assignment is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommissionError {
    /// Value is missing, not a number, not finite or negative.
    #[error("commission value must be a number greater than or equal to zero")]
    MissingOrInvalidValue,

    /// Percentage outside its bounds.
    #[error("commission percentage must be between {min} and {max}")]
    OutOfRange {
        /// Lower bound, inclusive.
        min: Decimal,

        /// Upper bound, inclusive.
        max: Decimal,
    },

    /// Type other than `percentage` or `amount`.
    #[error("unknown commission type \"{0}\", expected \"percentage\" or \"amount\"")]
    UnknownCommissionType(String),

    /// Commission calculation exceeded the decimal range.
    #[error("commission calculation overflowed")]
    Overflow,
}
