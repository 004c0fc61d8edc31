//! App Context

use std::sync::Arc;

use thiserror::Error;

use crate::{
    auth::{AuthService, PgAuthService},
    database::{self, Db},
    domain::{
        commissions::{CommissionsService, PgCommissionsService},
        products::{PgProductsService, ProductsService},
        restaurants::{PgRestaurantsService, RestaurantsService},
    },
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),
}

/// Services shared by every request handler.
#[derive(Clone)]
pub struct AppContext {
    pub restaurants: Arc<dyn RestaurantsService>,
    pub products: Arc<dyn ProductsService>,
    pub commissions: Arc<dyn CommissionsService>,
    pub auth: Arc<dyn AuthService>,
}

impl AppContext {
    /// Build application context from a database URL.
    ///
    /// # Errors
    ///
    /// Returns an error when establishing a database connection fails.
    pub async fn from_database_url(url: &str) -> Result<Self, AppInitError> {
        let pool = database::connect(url)
            .await
            .map_err(AppInitError::Database)?;

        let db = Db::new(pool.clone());

        Ok(Self {
            restaurants: Arc::new(PgRestaurantsService::new(db.clone())),
            products: Arc::new(PgProductsService::new(db.clone())),
            commissions: Arc::new(PgCommissionsService::new(db)),
            auth: Arc::new(PgAuthService::new(pool)),
        })
    }
}
