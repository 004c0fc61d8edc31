//! Tenant Records

use jiff::Timestamp;

use crate::{domain::restaurants::records::RestaurantRecord, uuids::TypedUuid};

/// Tenant UUID
pub type TenantUuid = TypedUuid<TenantRecord>;

/// A restaurant group owning its own restaurants, products and commissions.
#[derive(Debug, Clone)]
pub struct TenantRecord {
    pub uuid: TenantUuid,
    pub name: String,
    pub created_at: Timestamp,
}

/// A freshly onboarded tenant and the restaurants created with it.
#[derive(Debug, Clone)]
pub struct OnboardedTenant {
    pub tenant: TenantRecord,
    pub restaurants: Vec<RestaurantRecord>,
}
