//! Products Data

use std::collections::HashSet;

use rust_decimal::Decimal;
use tiffin::variations::{RawVariation, StockUpdate, VariationError, normalize::normalize};

use crate::domain::{
    products::records::{ProductUuid, ProductVariation, VariationUuid},
    restaurants::records::RestaurantUuid,
};

/// Variation as submitted for a create or replace. Variations without a UUID
/// are assigned a fresh one.
#[derive(Debug, Clone, PartialEq)]
pub struct NewVariation {
    pub uuid: Option<VariationUuid>,
    pub raw: RawVariation,
}

/// New Product Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub uuid: ProductUuid,
    pub restaurant: RestaurantUuid,
    pub name: String,
    pub variations: Vec<NewVariation>,
}

/// Product Update Data
///
/// Replaces the product name and its whole variation list.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductUpdate {
    pub name: String,
    pub variations: Vec<NewVariation>,
}

/// One entry of a bulk stock update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariationStockUpdate {
    pub product: ProductUuid,
    pub variation: VariationUuid,
    pub update: StockUpdate,
}

/// Normalized variations ready to be written, with the derived product fields.
#[derive(Debug, Clone)]
pub(crate) struct VariationSet {
    pub variations: Vec<ProductVariation>,
    pub price: Decimal,
    pub disc_price: Decimal,
    pub stock: u64,
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum VariationSetError {
    Variation(VariationError),
    DuplicateUuid(VariationUuid),
}

impl VariationSet {
    /// Normalize submitted variations, assigning UUIDs to new ones.
    pub(crate) fn from_new(variations: Vec<NewVariation>) -> Result<Self, VariationSetError> {
        let mut seen = HashSet::with_capacity(variations.len());
        let mut uuids = Vec::with_capacity(variations.len());
        let mut raws = Vec::with_capacity(variations.len());

        for variation in variations {
            let uuid = variation.uuid.unwrap_or_default();

            if !seen.insert(uuid) {
                return Err(VariationSetError::DuplicateUuid(uuid));
            }

            uuids.push(uuid);
            raws.push(variation.raw);
        }

        Self::build(uuids, &raws)
    }

    /// Re-normalize already persisted variations after an in-place change.
    pub(crate) fn from_existing(variations: &[ProductVariation]) -> Result<Self, VariationSetError> {
        let uuids = variations.iter().map(|v| v.uuid).collect();
        let raws: Vec<RawVariation> = variations
            .iter()
            .map(|v| RawVariation::from(&v.variation))
            .collect();

        Self::build(uuids, &raws)
    }

    fn build(uuids: Vec<VariationUuid>, raws: &[RawVariation]) -> Result<Self, VariationSetError> {
        let normalized = normalize(raws).map_err(VariationSetError::Variation)?;

        let variations = uuids
            .into_iter()
            .zip(normalized.variations)
            .map(|(uuid, variation)| ProductVariation { uuid, variation })
            .collect();

        Ok(Self {
            variations,
            price: normalized.price,
            disc_price: normalized.disc_price,
            stock: normalized.stock,
        })
    }
}
