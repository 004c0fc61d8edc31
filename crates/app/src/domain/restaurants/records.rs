//! Restaurant Records

use jiff::Timestamp;

use crate::uuids::TypedUuid;

/// Restaurant UUID
pub type RestaurantUuid = TypedUuid<RestaurantRecord>;

/// Restaurant Record
#[derive(Debug, Clone)]
pub struct RestaurantRecord {
    pub uuid: RestaurantUuid,
    pub name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub deleted_at: Option<Timestamp>,
}
