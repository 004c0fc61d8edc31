//! Tenants service.

use async_trait::async_trait;
use mockall::automock;
use sqlx::PgPool;
use tracing::info;

use crate::{
    database::Db,
    domain::{
        restaurants::repository::PgRestaurantsRepository,
        tenants::{
            data::NewTenant, errors::TenantsServiceError, records::OnboardedTenant,
            repository::PgTenantsRepository,
        },
    },
};

#[derive(Debug, Clone)]
pub struct PgTenantsService {
    db: Db,
    tenants: PgTenantsRepository,
    restaurants: PgRestaurantsRepository,
}

impl PgTenantsService {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self {
            db: Db::new(pool),
            tenants: PgTenantsRepository::new(),
            restaurants: PgRestaurantsRepository::new(),
        }
    }
}

#[async_trait]
impl TenantsService for PgTenantsService {
    async fn create_tenant(
        &self,
        tenant: NewTenant,
    ) -> Result<OnboardedTenant, TenantsServiceError> {
        // Scoping the transaction to the new tenant lets its restaurants pass
        // the row-level security check before the tenant row is committed.
        let mut tx = self.db.begin_tenant_transaction(tenant.uuid).await?;

        let created = self.tenants.insert_tenant(&mut tx, &tenant).await?;

        let mut restaurants = Vec::with_capacity(tenant.restaurants.len());

        for restaurant in tenant.restaurants {
            restaurants.push(self.restaurants.create_restaurant(&mut tx, restaurant).await?);
        }

        tx.commit().await?;

        info!(
            tenant = %created.uuid,
            restaurants = restaurants.len(),
            "tenant onboarded"
        );

        Ok(OnboardedTenant {
            tenant: created,
            restaurants,
        })
    }
}

#[automock]
#[async_trait]
/// Tenant onboarding.
pub trait TenantsService: Send + Sync {
    /// Creates a tenant together with its initial restaurants, atomically.
    async fn create_tenant(
        &self,
        tenant: NewTenant,
    ) -> Result<OnboardedTenant, TenantsServiceError>;
}
