//! Variation errors

use rust_decimal::Decimal;
use thiserror::Error;

/// Reasons a variation list cannot be accepted. The messages are shown to
/// sellers as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VariationError {
    /// The product has no variations at all.
    #[error("product must have at least one variation")]
    NoVariations,

    /// Neither a value nor a title was given.
    #[error("variation {index} has no value or title")]
    MalformedVariation {
        /// Position of the variation in the submitted list.
        index: usize,
    },

    /// Price is zero or negative.
    #[error("price for variation \"{label}\" must be greater than zero, got {price}")]
    InvalidPrice {
        /// Label the seller submitted.
        label: String,

        /// Offending price.
        price: Decimal,
    },

    /// Discounted price above the full price.
    #[error(
        "discount price ({disc_price}) for variation \"{label}\" cannot be greater than its price ({price})"
    )]
    InvalidDiscount {
        /// Label the seller submitted.
        label: String,

        /// Offending discounted price.
        disc_price: Decimal,

        /// Full price.
        price: Decimal,
    },
}
