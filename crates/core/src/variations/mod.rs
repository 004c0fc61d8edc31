//! Product variations
//!
//! A product is sold through one or more variations ("Small", "Large", ...). The
//! product's list price, discounted price and stock are never stored on their
//! own: they are projected from the variation list every time it changes.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

mod errors;
pub mod normalize;
pub mod policy;
mod stock;

pub use errors::VariationError;
pub use normalize::NormalizedVariations;
pub use stock::{StockInput, StockUpdate};

/// Label given to variations submitted without a name.
pub const DEFAULT_VARIATION_NAME: &str = "Variation";

/// Availability of a single variation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VariationStatus {
    /// Can be ordered.
    #[default]
    Available,

    /// Out of stock.
    #[serde(rename = "Sold out", alias = "Sold Out")]
    SoldOut,

    /// Withdrawn by the seller. Stock changes never move a variation out of
    /// this status.
    Discontinued,
}

impl VariationStatus {
    /// The status as it is shown to customers and stored.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "Available",
            Self::SoldOut => "Sold out",
            Self::Discontinued => "Discontinued",
        }
    }
}

/// Variation as submitted by a seller, before any defaults are applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawVariation {
    /// Variation group label, e.g. "Size".
    #[serde(default)]
    pub name: Option<String>,

    /// Selectable option text, e.g. "Large".
    #[serde(default)]
    pub value: Option<String>,

    /// Legacy option text, used when `value` is missing.
    #[serde(default)]
    pub title: Option<String>,

    /// Full price.
    pub price: Decimal,

    /// Discounted price, zero when there is no discount.
    #[serde(default)]
    pub disc_price: Option<Decimal>,

    /// Stock count in whatever shape the client sent it.
    #[serde(default)]
    pub stock: Option<StockInput>,

    /// Explicit availability.
    #[serde(default)]
    pub status: Option<VariationStatus>,
}

impl RawVariation {
    /// Label used when reporting problems with this variation back to the
    /// seller: the legacy title when present, otherwise the value.
    #[must_use]
    pub fn display_label(&self) -> &str {
        self.title
            .as_deref()
            .filter(|title| !title.is_empty())
            .or(self.value.as_deref())
            .unwrap_or_default()
    }

    fn resolved_value(&self) -> Option<&str> {
        self.value
            .as_deref()
            .filter(|value| !value.is_empty())
            .or_else(|| self.title.as_deref().filter(|title| !title.is_empty()))
    }
}

/// Variation after defaults have been applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Variation {
    /// Variation group label.
    pub name: String,

    /// Selectable option text.
    pub value: String,

    /// Full price.
    pub price: Decimal,

    /// Discounted price.
    pub disc_price: Decimal,

    /// Units in stock.
    pub stock: u32,

    /// Availability.
    pub status: VariationStatus,
}

impl Variation {
    /// Price a customer actually pays: the discounted price when one is set,
    /// otherwise the full price.
    #[must_use]
    pub fn effective_price(&self) -> Decimal {
        if self.disc_price > Decimal::ZERO {
            self.disc_price
        } else {
            self.price
        }
    }
}

impl From<&Variation> for RawVariation {
    fn from(variation: &Variation) -> Self {
        RawVariation {
            name: Some(variation.name.clone()),
            value: Some(variation.value.clone()),
            title: None,
            price: variation.price,
            disc_price: Some(variation.disc_price),
            stock: Some(StockInput::Count(i64::from(variation.stock))),
            status: Some(variation.status),
        }
    }
}
