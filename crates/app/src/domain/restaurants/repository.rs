//! Restaurants Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as};

use crate::domain::restaurants::{
    data::NewRestaurant,
    records::{RestaurantRecord, RestaurantUuid},
};

const LIST_RESTAURANTS_SQL: &str = include_str!("sql/list_restaurants.sql");
const GET_RESTAURANT_SQL: &str = include_str!("sql/get_restaurant.sql");
const CREATE_RESTAURANT_SQL: &str = include_str!("sql/create_restaurant.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgRestaurantsRepository;

impl PgRestaurantsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_restaurants(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Vec<RestaurantRecord>, sqlx::Error> {
        query_as::<Postgres, RestaurantRecord>(LIST_RESTAURANTS_SQL)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn get_restaurant(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        restaurant: RestaurantUuid,
    ) -> Result<RestaurantRecord, sqlx::Error> {
        query_as::<Postgres, RestaurantRecord>(GET_RESTAURANT_SQL)
            .bind(restaurant.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn create_restaurant(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        restaurant: NewRestaurant,
    ) -> Result<RestaurantRecord, sqlx::Error> {
        query_as::<Postgres, RestaurantRecord>(CREATE_RESTAURANT_SQL)
            .bind(restaurant.uuid.into_uuid())
            .bind(restaurant.name)
            .fetch_one(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for RestaurantRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: RestaurantUuid::from_uuid(row.try_get("uuid")?),
            name: row.try_get("name")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
            deleted_at: row
                .try_get::<Option<SqlxTimestamp>, _>("deleted_at")?
                .map(SqlxTimestamp::to_jiff),
        })
    }
}
