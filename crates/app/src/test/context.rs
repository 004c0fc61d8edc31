//! Test context for service-level integration tests.

use sqlx::{Connection, PgConnection, PgPool, query};

use crate::{
    database::Db,
    domain::{
        commissions::PgCommissionsService,
        products::PgProductsService,
        restaurants::{
            PgRestaurantsService, RestaurantsService, RestaurantsServiceError,
            data::NewRestaurant, records::RestaurantUuid,
        },
        tenants::{PgTenantsService, TenantsService, data::NewTenant, records::TenantUuid},
    },
};

use super::db::{SUPERUSER, SUPERUSER_PASSWORD, TestDb};

/// Non-superuser role the services connect as, so row-level security applies.
const APP_ROLE: &str = "tiffin_app_test";
const APP_ROLE_PASSWORD: &str = "tiffin_app_test_pass";

pub struct TestContext {
    pub db: TestDb,
    pub tenant_uuid: TenantUuid,
    pub restaurants: PgRestaurantsService,
    pub products: PgProductsService,
    pub commissions: PgCommissionsService,
}

impl TestContext {
    pub async fn new() -> Self {
        let test_db = TestDb::new().await;
        let db = Db::new(Self::app_pool(&test_db).await);

        let tenant_uuid = create_tenant(test_db.pool(), "Test Tenant").await;

        Self {
            restaurants: PgRestaurantsService::new(db.clone()),
            products: PgProductsService::new(db.clone()),
            commissions: PgCommissionsService::new(db),
            tenant_uuid,
            db: test_db,
        }
    }

    /// Create an additional tenant for isolation tests.
    pub async fn create_tenant(&self, name: &str) -> TenantUuid {
        create_tenant(self.db.pool(), name).await
    }

    /// Create a restaurant under the default tenant.
    pub async fn create_restaurant(
        &self,
        name: &str,
    ) -> Result<RestaurantUuid, RestaurantsServiceError> {
        let restaurant = self
            .restaurants
            .create_restaurant(
                self.tenant_uuid,
                NewRestaurant {
                    uuid: RestaurantUuid::new(),
                    name: name.to_string(),
                },
            )
            .await?;

        Ok(restaurant.uuid)
    }

    /// Connect as the restricted app role, creating it on first use.
    ///
    /// Superusers bypass row-level security even when it is forced.
    async fn app_pool(test_db: &TestDb) -> PgPool {
        let mut conn = PgConnection::connect(&test_db.superuser_url)
            .await
            .expect("Failed to connect to test database for role setup");

        // Roles are server wide and tests run in parallel, so creation can race.
        let created = query(&format!(
            "CREATE ROLE {APP_ROLE} WITH LOGIN PASSWORD '{APP_ROLE_PASSWORD}' \
             NOSUPERUSER NOCREATEDB NOCREATEROLE NOBYPASSRLS"
        ))
        .execute(&mut conn)
        .await;

        match created {
            Ok(_) => {}
            Err(sqlx::Error::Database(ref error))
                if matches!(error.code().as_deref(), Some("42710" | "23505")) => {}
            Err(error) => panic!("Failed to create app role: {error}"),
        }

        for statement in [
            format!("GRANT CONNECT ON DATABASE \"{}\" TO {APP_ROLE}", test_db.name),
            format!("GRANT USAGE ON SCHEMA public TO {APP_ROLE}"),
            format!(
                "GRANT SELECT, INSERT, UPDATE, DELETE ON ALL TABLES IN SCHEMA public TO {APP_ROLE}"
            ),
            format!("GRANT EXECUTE ON ALL FUNCTIONS IN SCHEMA public TO {APP_ROLE}"),
        ] {
            query(&statement)
                .execute(&mut conn)
                .await
                .expect("Failed to grant privileges to app role");
        }

        conn.close().await.expect("Failed to close setup connection");

        let app_url = test_db.superuser_url.replacen(
            &format!("{SUPERUSER}:{SUPERUSER_PASSWORD}"),
            &format!("{APP_ROLE}:{APP_ROLE_PASSWORD}"),
            1,
        );

        PgPool::connect(&app_url)
            .await
            .expect("Failed to create app pool")
    }
}

async fn create_tenant(pool: &PgPool, name: &str) -> TenantUuid {
    PgTenantsService::new(pool.clone())
        .create_tenant(NewTenant::with_restaurant_names(
            TenantUuid::new(),
            name.to_string(),
            Vec::<String>::new(),
        ))
        .await
        .expect("Failed to create test tenant")
        .tenant
        .uuid
}
