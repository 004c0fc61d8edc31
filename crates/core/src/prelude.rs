//! Tiffin prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    commissions::{
        AmountInput, CommissionConfig, CommissionError, CommissionInput, CommissionType,
        toggle_status, validate,
    },
    variations::{
        NormalizedVariations, RawVariation, StockInput, StockUpdate, Variation, VariationError,
        VariationStatus,
        normalize::{normalize, normalize_with},
        policy::{FirstVariation, LowestPrice, PriceSelectionPolicy},
    },
};
