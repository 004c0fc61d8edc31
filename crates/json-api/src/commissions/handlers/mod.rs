//! Commission Handlers

pub(crate) mod create;
pub(crate) mod delete;
pub(crate) mod get;
pub(crate) mod index;
pub(crate) mod quote;
pub(crate) mod toggle;
pub(crate) mod update;

use rust_decimal::Decimal;
use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use tiffin::commissions::{AmountInput, CommissionInput};

/// Commission type and value as submitted.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CommissionRequest {
    /// `percentage` or `amount`
    #[serde(rename = "type", default)]
    pub kind: String,

    /// Number or numeric string; 0 to 100 for percentages
    #[salvo(schema(value_type = Option<f64>))]
    pub value: Option<AmountInput>,
}

impl From<CommissionRequest> for CommissionInput {
    fn from(request: CommissionRequest) -> Self {
        CommissionInput {
            kind: request.kind,
            value: request.value,
        }
    }
}

/// Stored commission type and value.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CommissionValue {
    /// `percentage` or `amount`
    #[serde(rename = "type")]
    pub kind: String,

    /// Commission value
    #[salvo(schema(value_type = String))]
    pub value: Decimal,
}
