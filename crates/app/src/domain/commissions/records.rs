//! Commission Records

use jiff::Timestamp;
use tiffin::commissions::CommissionConfig;

use crate::{domain::restaurants::records::RestaurantUuid, uuids::TypedUuid};

/// Commission UUID
pub type CommissionUuid = TypedUuid<CommissionRecord>;

/// A restaurant's commission. Each restaurant has at most one live record.
#[derive(Debug, Clone)]
pub struct CommissionRecord {
    pub uuid: CommissionUuid,
    pub restaurant: RestaurantUuid,
    pub config: CommissionConfig,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub deleted_at: Option<Timestamp>,
}
