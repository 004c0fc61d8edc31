//! Restaurant commissions
//!
//! The platform takes a commission from each restaurant's orders, either as a
//! percentage of the subtotal or as a fixed amount per order.

use std::{fmt, str::FromStr};

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{
    Deserialize, Deserializer, Serialize,
    de::IgnoredAny,
};

mod errors;

pub use errors::CommissionError;

/// How a commission value is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommissionType {
    /// Percentage of the order subtotal, 0 to 100.
    Percentage,

    /// Fixed amount per order.
    Amount,
}

impl CommissionType {
    /// Wire and storage name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Percentage => "percentage",
            Self::Amount => "amount",
        }
    }
}

impl fmt::Display for CommissionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CommissionType {
    type Err = CommissionError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "percentage" => Ok(Self::Percentage),
            "amount" => Ok(Self::Amount),
            other => Err(CommissionError::UnknownCommissionType(other.to_string())),
        }
    }
}

/// Commission value as sent by a client: a number or a numeric string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AmountInput {
    /// Already numeric.
    Decimal(Decimal),

    /// Anything else; parsed leniently.
    Text(String),

    /// Neither a number nor a string (`true`, `{}`, `[]`). Never valid.
    #[serde(deserialize_with = "ignore_value", skip_serializing)]
    Unsupported,
}

fn ignore_value<'de, D>(deserializer: D) -> Result<(), D::Error>
where
    D: Deserializer<'de>,
{
    IgnoredAny::deserialize(deserializer).map(|_ignored| ())
}

impl AmountInput {
    fn to_decimal(&self) -> Option<Decimal> {
        match self {
            Self::Decimal(value) => Some(*value),
            Self::Text(text) => Decimal::from_str(text.trim()).ok(),
            Self::Unsupported => None,
        }
    }
}

impl From<Decimal> for AmountInput {
    fn from(value: Decimal) -> Self {
        Self::Decimal(value)
    }
}

/// Unvalidated commission assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommissionInput {
    /// `percentage` or `amount`.
    #[serde(rename = "type", default)]
    pub kind: String,

    /// Commission value.
    #[serde(default)]
    pub value: Option<AmountInput>,
}

/// A validated commission.
///
/// Only [`validate`] produces a fresh config. Stored configs are restored with
/// [`CommissionConfig::from_parts`] and are not re-checked, so a disabled
/// config may carry values that would no longer validate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommissionConfig {
    #[serde(rename = "type")]
    kind: CommissionType,
    value: Decimal,
    notes: Option<String>,
    status: bool,
}

const PERCENT_MIN: Decimal = Decimal::ZERO;
const PERCENT_MAX: Decimal = Decimal::ONE_HUNDRED;

/// Validate a commission assignment.
///
/// # Errors
///
/// - [`CommissionError::MissingOrInvalidValue`]: the value is missing, unparseable or negative.
/// - [`CommissionError::OutOfRange`]: a percentage above 100.
/// - [`CommissionError::UnknownCommissionType`]: the type is not `percentage` or `amount`.
pub fn validate(input: &CommissionInput) -> Result<CommissionConfig, CommissionError> {
    let value = input
        .value
        .as_ref()
        .and_then(AmountInput::to_decimal)
        .filter(|value| *value >= Decimal::ZERO)
        .ok_or(CommissionError::MissingOrInvalidValue)?;

    let kind = CommissionType::from_str(&input.kind)?;

    if kind == CommissionType::Percentage && !(PERCENT_MIN..=PERCENT_MAX).contains(&value) {
        return Err(CommissionError::OutOfRange {
            min: PERCENT_MIN,
            max: PERCENT_MAX,
        });
    }

    Ok(CommissionConfig {
        kind,
        value: value.normalize(),
        notes: None,
        status: true,
    })
}

/// Flip a commission between enabled and disabled without touching anything else.
#[must_use]
pub fn toggle_status(config: CommissionConfig) -> CommissionConfig {
    CommissionConfig {
        status: !config.status,
        ..config
    }
}

impl CommissionConfig {
    /// Restore a stored config.
    #[must_use]
    pub fn from_parts(
        kind: CommissionType,
        value: Decimal,
        notes: Option<String>,
        status: bool,
    ) -> Self {
        Self {
            kind,
            value,
            notes,
            status,
        }
    }

    /// Attach free-text notes.
    #[must_use]
    pub fn with_notes(self, notes: Option<String>) -> Self {
        Self { notes, ..self }
    }

    /// Set whether the commission is enabled.
    #[must_use]
    pub fn with_status(self, status: bool) -> Self {
        Self { status, ..self }
    }

    /// Commission type.
    #[must_use]
    pub const fn kind(&self) -> CommissionType {
        self.kind
    }

    /// Commission value.
    #[must_use]
    pub const fn value(&self) -> Decimal {
        self.value
    }

    /// Notes, if any.
    #[must_use]
    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    /// Whether the commission is enabled.
    #[must_use]
    pub const fn status(&self) -> bool {
        self.status
    }

    /// Commission owed on an order subtotal, rounded to two decimal places.
    ///
    /// Disabled commissions and non-positive subtotals owe nothing. A fixed
    /// amount never exceeds the subtotal.
    ///
    /// # Errors
    ///
    /// Returns [`CommissionError::Overflow`] if the calculation overflows.
    pub fn commission_on(&self, subtotal: Decimal) -> Result<Decimal, CommissionError> {
        if !self.status || subtotal <= Decimal::ZERO {
            return Ok(Decimal::ZERO);
        }

        let owed = match self.kind {
            CommissionType::Percentage => subtotal
                .checked_mul(self.value)
                .and_then(|product| product.checked_div(Decimal::ONE_HUNDRED))
                .ok_or(CommissionError::Overflow)?,
            CommissionType::Amount => self.value.min(subtotal),
        };

        Ok(owed.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::dec;
    use testresult::TestResult;

    use super::*;

    fn input(kind: &str, value: Decimal) -> CommissionInput {
        CommissionInput {
            kind: kind.to_string(),
            value: Some(value.into()),
        }
    }

    #[test]
    fn percentage_upper_bound() -> TestResult {
        assert_eq!(
            validate(&input("percentage", dec!(101))),
            Err(CommissionError::OutOfRange {
                min: Decimal::ZERO,
                max: Decimal::ONE_HUNDRED,
            })
        );

        let config = validate(&input("percentage", dec!(100)))?;

        assert_eq!(config.kind(), CommissionType::Percentage);
        assert_eq!(config.value(), dec!(100));

        Ok(())
    }

    #[test]
    fn amount_has_no_upper_bound() -> TestResult {
        let config = validate(&input("amount", dec!(100000)))?;

        assert_eq!(config.kind(), CommissionType::Amount);
        assert_eq!(config.value(), dec!(100000));

        Ok(())
    }

    #[test]
    fn negative_values_are_invalid() {
        assert_eq!(
            validate(&input("amount", dec!(-1))),
            Err(CommissionError::MissingOrInvalidValue)
        );
        assert_eq!(
            validate(&input("percentage", dec!(-0.5))),
            Err(CommissionError::MissingOrInvalidValue)
        );
    }

    #[test]
    fn missing_value_is_invalid() {
        let input = CommissionInput {
            kind: "amount".to_string(),
            value: None,
        };

        assert_eq!(validate(&input), Err(CommissionError::MissingOrInvalidValue));
    }

    #[test]
    fn unknown_type_is_rejected() {
        assert_eq!(
            validate(&input("flat", dec!(5))),
            Err(CommissionError::UnknownCommissionType("flat".to_string()))
        );
    }

    #[test]
    fn numeric_strings_are_coerced() -> TestResult {
        let input: CommissionInput =
            serde_json::from_str(r#"{ "type": "percentage", "value": " 12.50 " }"#)?;

        let config = validate(&input)?;

        assert_eq!(config.value(), dec!(12.5));

        Ok(())
    }

    #[test]
    fn non_numeric_strings_are_invalid() -> TestResult {
        let input: CommissionInput =
            serde_json::from_str(r#"{ "type": "percentage", "value": "ten" }"#)?;

        assert_eq!(validate(&input), Err(CommissionError::MissingOrInvalidValue));

        Ok(())
    }

    #[test]
    fn non_scalar_values_are_invalid_not_unparseable() -> TestResult {
        for value in ["true", "{}", "[1]"] {
            let input: CommissionInput = serde_json::from_str(&format!(
                r#"{{ "type": "amount", "value": {value} }}"#
            ))?;

            assert_eq!(input.value, Some(AmountInput::Unsupported), "{value}");
            assert_eq!(
                validate(&input),
                Err(CommissionError::MissingOrInvalidValue),
                "{value}"
            );
        }

        Ok(())
    }

    #[test]
    fn fresh_configs_are_enabled_without_notes() -> TestResult {
        let config = validate(&input("amount", dec!(25)))?;

        assert!(config.status());
        assert_eq!(config.notes(), None);

        Ok(())
    }

    #[test]
    fn toggle_only_flips_status() -> TestResult {
        let config = validate(&input("percentage", dec!(15)))?.with_notes(Some("launch".into()));

        let toggled = toggle_status(config.clone());

        assert!(!toggled.status());
        assert_eq!(toggled.kind(), config.kind());
        assert_eq!(toggled.value(), config.value());
        assert_eq!(toggled.notes(), Some("launch"));
        assert_eq!(toggle_status(toggled), config);

        Ok(())
    }

    #[test]
    fn toggle_does_not_revalidate_stale_values() {
        let stale = CommissionConfig::from_parts(CommissionType::Percentage, dec!(150), None, false);

        let enabled = toggle_status(stale);

        assert!(enabled.status());
        assert_eq!(enabled.value(), dec!(150));
    }

    #[test]
    fn percentage_commission_rounds_half_away_from_zero() -> TestResult {
        let config = validate(&input("percentage", dec!(12.5)))?;

        assert_eq!(config.commission_on(dec!(19.99))?, dec!(2.50));
        assert_eq!(config.commission_on(dec!(200))?, dec!(25));

        Ok(())
    }

    #[test]
    fn amount_commission_is_capped_by_subtotal() -> TestResult {
        let config = validate(&input("amount", dec!(30)))?;

        assert_eq!(config.commission_on(dec!(100))?, dec!(30));
        assert_eq!(config.commission_on(dec!(20))?, dec!(20));

        Ok(())
    }

    #[test]
    fn disabled_commission_owes_nothing() -> TestResult {
        let config = toggle_status(validate(&input("percentage", dec!(10)))?);

        assert_eq!(config.commission_on(dec!(100))?, Decimal::ZERO);

        Ok(())
    }

    #[test]
    fn overflow_is_reported() -> TestResult {
        let config = validate(&input("percentage", dec!(100)))?;

        assert_eq!(
            config.commission_on(Decimal::MAX),
            Err(CommissionError::Overflow)
        );

        Ok(())
    }
}
