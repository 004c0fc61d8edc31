//! Restaurants Data

use crate::domain::restaurants::records::RestaurantUuid;

/// New Restaurant Data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRestaurant {
    pub uuid: RestaurantUuid,
    pub name: String,
}
