//! Stock counts and stock-driven status transitions.

use serde::{Deserialize, Serialize};

use crate::variations::{Variation, VariationStatus};

/// Stock count as sent by a client: a JSON number or a string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StockInput {
    /// Whole number.
    Count(i64),

    /// Number with a fractional part; truncated.
    Fractional(f64),

    /// Free text; its leading integer is used.
    Text(String),
}

impl StockInput {
    /// Parse into a stock count.
    ///
    /// Anything that does not start with an integer counts as zero, and
    /// negative counts clamp to zero.
    #[must_use]
    pub fn to_count(&self) -> u32 {
        match self {
            Self::Count(count) => clamp(*count),
            Self::Fractional(count) => {
                if count.is_finite() && *count >= 1.0 {
                    #[expect(
                        clippy::cast_possible_truncation,
                        clippy::cast_sign_loss,
                        reason = "value is finite and positive; float to int casts saturate"
                    )]
                    let truncated = count.trunc() as u32;

                    truncated
                } else {
                    0
                }
            }
            Self::Text(text) => leading_integer(text),
        }
    }
}

impl From<u32> for StockInput {
    fn from(count: u32) -> Self {
        Self::Count(i64::from(count))
    }
}

/// Parse a count from absent input.
#[must_use]
pub(crate) fn parse_stock(input: Option<&StockInput>) -> u32 {
    input.map_or(0, StockInput::to_count)
}

fn clamp(count: i64) -> u32 {
    u32::try_from(count.max(0)).unwrap_or(u32::MAX)
}

fn leading_integer(text: &str) -> u32 {
    let trimmed = text.trim_start();

    let (negative, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let digits: String = digits.chars().take_while(char::is_ascii_digit).collect();

    if negative || digits.is_empty() {
        return 0;
    }

    digits.parse::<u32>().unwrap_or(u32::MAX)
}

/// Stock change for a single variation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StockUpdate {
    /// New stock count.
    pub stock: u32,

    /// Status to force regardless of the new count.
    pub status: Option<VariationStatus>,
}

impl StockUpdate {
    /// Build an update from client input.
    #[must_use]
    pub fn new(stock: &StockInput, status: Option<VariationStatus>) -> Self {
        Self {
            stock: stock.to_count(),
            status,
        }
    }
}

impl Variation {
    /// Apply a stock change.
    ///
    /// Only the sold out / available pair moves with stock: an empty variation
    /// becomes sold out and a restocked sold out variation becomes available.
    /// An explicit status in the update is applied last.
    pub fn apply_stock_update(&mut self, update: &StockUpdate) {
        self.stock = update.stock;

        if update.stock == 0 {
            self.status = VariationStatus::SoldOut;
        } else if self.status == VariationStatus::SoldOut {
            self.status = VariationStatus::Available;
        }

        if let Some(status) = update.status {
            self.status = status;
        }
    }
}
