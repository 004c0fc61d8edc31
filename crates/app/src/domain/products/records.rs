//! Product Records

use jiff::Timestamp;
use rust_decimal::Decimal;
use tiffin::variations::Variation;

use crate::{domain::restaurants::records::RestaurantUuid, uuids::TypedUuid};

/// Product UUID
pub type ProductUuid = TypedUuid<ProductRecord>;

/// Variation UUID
pub type VariationUuid = TypedUuid<ProductVariation>;

/// Product Record
///
/// `price`, `disc_price` and `stock` are derived from `variations` on every
/// write and are never updated on their own.
#[derive(Debug, Clone)]
pub struct ProductRecord {
    pub uuid: ProductUuid,
    pub restaurant: RestaurantUuid,
    pub name: String,
    pub variations: Vec<ProductVariation>,
    pub price: Decimal,
    pub disc_price: Decimal,
    pub stock: u64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub deleted_at: Option<Timestamp>,
}

impl ProductRecord {
    pub(crate) fn variation_mut(&mut self, uuid: VariationUuid) -> Option<&mut ProductVariation> {
        self.variations
            .iter_mut()
            .find(|variation| variation.uuid == uuid)
    }
}

/// A persisted, addressable variation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductVariation {
    pub uuid: VariationUuid,
    pub variation: Variation,
}
