//! Commissions Data

use tiffin::commissions::CommissionInput;

use crate::domain::{commissions::records::CommissionUuid, restaurants::records::RestaurantUuid};

/// New Commission Data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCommission {
    pub uuid: CommissionUuid,
    pub restaurant: RestaurantUuid,
    pub commission: CommissionInput,
    pub notes: Option<String>,
}

/// Commission Update Data
///
/// Replaces type, value and notes. The enabled flag is left as it is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommissionUpdate {
    pub commission: CommissionInput,
    pub notes: Option<String>,
}
