//! Tenant Data

use crate::domain::{
    restaurants::{data::NewRestaurant, records::RestaurantUuid},
    tenants::records::TenantUuid,
};

/// Tenant onboarding request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTenant {
    pub uuid: TenantUuid,
    pub name: String,

    /// Restaurants to create under the tenant in the same transaction.
    pub restaurants: Vec<NewRestaurant>,
}

impl NewTenant {
    /// Onboard a tenant with one freshly identified restaurant per name.
    #[must_use]
    pub fn with_restaurant_names<I, S>(uuid: TenantUuid, name: String, restaurants: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            uuid,
            name,
            restaurants: restaurants
                .into_iter()
                .map(|restaurant| NewRestaurant {
                    uuid: RestaurantUuid::new(),
                    name: restaurant.into(),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn restaurant_names_get_distinct_uuids() {
        let tenant = NewTenant::with_restaurant_names(
            TenantUuid::new(),
            "Northside Kitchens".to_string(),
            ["Thali House", "Dosa Corner"],
        );

        let names: Vec<&str> = tenant.restaurants.iter().map(|r| r.name.as_str()).collect();

        assert_eq!(names, ["Thali House", "Dosa Corner"]);
        assert_ne!(
            tenant.restaurants.first().map(|r| r.uuid),
            tenant.restaurants.get(1).map(|r| r.uuid),
            "each restaurant needs its own uuid"
        );
    }
}
