//! Price selection policies
//!
//! List views show a single price per product. A policy picks which variation
//! supplies it.

use crate::variations::Variation;

/// Picks the variation whose prices represent the whole product.
pub trait PriceSelectionPolicy {
    /// Returns `None` only for an empty list.
    fn select<'a>(&self, variations: &'a [Variation]) -> Option<&'a Variation>;
}

/// The first variation in seller order.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstVariation;

impl PriceSelectionPolicy for FirstVariation {
    fn select<'a>(&self, variations: &'a [Variation]) -> Option<&'a Variation> {
        variations.first()
    }
}

/// The variation a customer can buy most cheaply; earlier variations win ties.
#[derive(Debug, Clone, Copy, Default)]
pub struct LowestPrice;

impl PriceSelectionPolicy for LowestPrice {
    fn select<'a>(&self, variations: &'a [Variation]) -> Option<&'a Variation> {
        variations.iter().reduce(|cheapest, candidate| {
            if candidate.effective_price() < cheapest.effective_price() {
                candidate
            } else {
                cheapest
            }
        })
    }
}
