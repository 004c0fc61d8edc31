//! Variation normalization
//!
//! Applies defaults to submitted variations, validates them and projects the
//! product-level price, discounted price and stock.

use rust_decimal::Decimal;

use crate::variations::{
    DEFAULT_VARIATION_NAME, RawVariation, Variation, VariationError,
    policy::{FirstVariation, PriceSelectionPolicy},
    stock::parse_stock,
};

/// Normalized variations together with the product fields derived from them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedVariations {
    /// Variations in submitted order.
    pub variations: Vec<Variation>,

    /// Product list price.
    pub price: Decimal,

    /// Product discounted price.
    pub disc_price: Decimal,

    /// Total units across all variations.
    pub stock: u64,
}

/// Normalize variations, taking product prices from the first variation.
///
/// # Errors
///
/// - [`VariationError::NoVariations`]: the list is empty.
/// - [`VariationError::MalformedVariation`]: a variation has neither value nor title.
/// - [`VariationError::InvalidPrice`]: a price is not positive.
/// - [`VariationError::InvalidDiscount`]: a discounted price exceeds its price.
pub fn normalize(raw: &[RawVariation]) -> Result<NormalizedVariations, VariationError> {
    normalize_with(raw, &FirstVariation)
}

/// Normalize variations, taking product prices from the variation `policy` selects.
///
/// # Errors
///
/// See [`normalize`].
pub fn normalize_with<P>(
    raw: &[RawVariation],
    policy: &P,
) -> Result<NormalizedVariations, VariationError>
where
    P: PriceSelectionPolicy + ?Sized,
{
    let variations = raw
        .iter()
        .enumerate()
        .map(|(index, raw)| apply_defaults(index, raw))
        .collect::<Result<Vec<_>, _>>()?;

    for (raw, variation) in raw.iter().zip(&variations) {
        validate(raw, variation)?;
    }

    let selected = policy
        .select(&variations)
        .ok_or(VariationError::NoVariations)?;

    let price = selected.price;
    let disc_price = selected.disc_price;
    let stock = variations.iter().map(|v| u64::from(v.stock)).sum();

    Ok(NormalizedVariations {
        variations,
        price,
        disc_price,
        stock,
    })
}

fn apply_defaults(index: usize, raw: &RawVariation) -> Result<Variation, VariationError> {
    let value = raw
        .resolved_value()
        .ok_or(VariationError::MalformedVariation { index })?;

    Ok(Variation {
        name: raw
            .name
            .clone()
            .unwrap_or_else(|| DEFAULT_VARIATION_NAME.to_string()),
        value: value.to_string(),
        price: raw.price,
        disc_price: raw.disc_price.unwrap_or(Decimal::ZERO),
        stock: parse_stock(raw.stock.as_ref()),
        status: raw.status.unwrap_or_default(),
    })
}

fn validate(raw: &RawVariation, variation: &Variation) -> Result<(), VariationError> {
    if variation.price <= Decimal::ZERO {
        return Err(VariationError::InvalidPrice {
            label: raw.display_label().to_string(),
            price: variation.price,
        });
    }

    if variation.disc_price > variation.price {
        return Err(VariationError::InvalidDiscount {
            label: raw.display_label().to_string(),
            disc_price: variation.disc_price,
            price: variation.price,
        });
    }

    Ok(())
}
