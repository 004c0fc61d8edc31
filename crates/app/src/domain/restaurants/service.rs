//! Restaurants service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::{
        restaurants::{
            data::NewRestaurant,
            errors::RestaurantsServiceError,
            records::{RestaurantRecord, RestaurantUuid},
            repository::PgRestaurantsRepository,
        },
        tenants::records::TenantUuid,
    },
};

#[derive(Debug, Clone)]
pub struct PgRestaurantsService {
    db: Db,
    repository: PgRestaurantsRepository,
}

impl PgRestaurantsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgRestaurantsRepository::new(),
        }
    }
}

#[async_trait]
impl RestaurantsService for PgRestaurantsService {
    async fn list_restaurants(
        &self,
        tenant: TenantUuid,
    ) -> Result<Vec<RestaurantRecord>, RestaurantsServiceError> {
        let mut tx = self.db.begin_tenant_transaction(tenant).await?;

        let restaurants = self.repository.list_restaurants(&mut tx).await?;

        tx.commit().await?;

        Ok(restaurants)
    }

    async fn get_restaurant(
        &self,
        tenant: TenantUuid,
        restaurant: RestaurantUuid,
    ) -> Result<RestaurantRecord, RestaurantsServiceError> {
        let mut tx = self.db.begin_tenant_transaction(tenant).await?;

        let restaurant = self.repository.get_restaurant(&mut tx, restaurant).await?;

        tx.commit().await?;

        Ok(restaurant)
    }

    async fn create_restaurant(
        &self,
        tenant: TenantUuid,
        restaurant: NewRestaurant,
    ) -> Result<RestaurantRecord, RestaurantsServiceError> {
        let mut tx = self.db.begin_tenant_transaction(tenant).await?;

        let created = self.repository.create_restaurant(&mut tx, restaurant).await?;

        tx.commit().await?;

        Ok(created)
    }
}

#[automock]
#[async_trait]
pub trait RestaurantsService: Send + Sync {
    /// Retrieves all restaurants visible to the tenant.
    async fn list_restaurants(
        &self,
        tenant: TenantUuid,
    ) -> Result<Vec<RestaurantRecord>, RestaurantsServiceError>;

    /// Retrieve a single restaurant.
    async fn get_restaurant(
        &self,
        tenant: TenantUuid,
        restaurant: RestaurantUuid,
    ) -> Result<RestaurantRecord, RestaurantsServiceError>;

    /// Creates a new restaurant.
    async fn create_restaurant(
        &self,
        tenant: TenantUuid,
        restaurant: NewRestaurant,
    ) -> Result<RestaurantRecord, RestaurantsServiceError>;
}
