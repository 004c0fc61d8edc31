//! Products Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as, types::Json};
use tiffin::variations::{Variation, VariationStatus};
use uuid::Uuid;

use crate::domain::{
    products::{
        data::VariationSet,
        records::{ProductRecord, ProductUuid, ProductVariation, VariationUuid},
    },
    restaurants::records::RestaurantUuid,
};

const LIST_PRODUCTS_SQL: &str = include_str!("sql/list_products.sql");
const GET_PRODUCT_SQL: &str = include_str!("sql/get_product.sql");
const LOCK_PRODUCT_SQL: &str = include_str!("sql/lock_product.sql");
const CREATE_PRODUCT_SQL: &str = include_str!("sql/create_product.sql");
const UPDATE_PRODUCT_SQL: &str = include_str!("sql/update_product.sql");
const DELETE_PRODUCT_SQL: &str = include_str!("sql/delete_product.sql");

/// JSONB shape of a stored variation.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredVariation {
    uuid: Uuid,
    name: String,
    value: String,
    price: Decimal,
    disc_price: Decimal,
    stock: u32,
    status: VariationStatus,
}

impl From<&ProductVariation> for StoredVariation {
    fn from(stored: &ProductVariation) -> Self {
        Self {
            uuid: stored.uuid.into_uuid(),
            name: stored.variation.name.clone(),
            value: stored.variation.value.clone(),
            price: stored.variation.price,
            disc_price: stored.variation.disc_price,
            stock: stored.variation.stock,
            status: stored.variation.status,
        }
    }
}

impl From<StoredVariation> for ProductVariation {
    fn from(stored: StoredVariation) -> Self {
        Self {
            uuid: VariationUuid::from_uuid(stored.uuid),
            variation: Variation {
                name: stored.name,
                value: stored.value,
                price: stored.price,
                disc_price: stored.disc_price,
                stock: stored.stock,
                status: stored.status,
            },
        }
    }
}

fn stored_variations(set: &VariationSet) -> Json<Vec<StoredVariation>> {
    Json(set.variations.iter().map(StoredVariation::from).collect())
}

fn stock_i64(stock: u64) -> Result<i64, sqlx::Error> {
    i64::try_from(stock).map_err(|e| sqlx::Error::Encode(Box::new(e)))
}

#[derive(Debug, Clone, Default)]
pub(crate) struct PgProductsRepository;

impl PgProductsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_products(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        restaurant: Option<RestaurantUuid>,
    ) -> Result<Vec<ProductRecord>, sqlx::Error> {
        query_as::<Postgres, ProductRecord>(LIST_PRODUCTS_SQL)
            .bind(restaurant.map(RestaurantUuid::into_uuid))
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn get_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductUuid,
    ) -> Result<ProductRecord, sqlx::Error> {
        query_as::<Postgres, ProductRecord>(GET_PRODUCT_SQL)
            .bind(product.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    /// Fetch a product and hold its row lock until the transaction ends.
    pub(crate) async fn lock_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductUuid,
    ) -> Result<ProductRecord, sqlx::Error> {
        query_as::<Postgres, ProductRecord>(LOCK_PRODUCT_SQL)
            .bind(product.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn create_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductUuid,
        restaurant: RestaurantUuid,
        name: &str,
        set: &VariationSet,
    ) -> Result<ProductRecord, sqlx::Error> {
        query_as::<Postgres, ProductRecord>(CREATE_PRODUCT_SQL)
            .bind(product.into_uuid())
            .bind(restaurant.into_uuid())
            .bind(name)
            .bind(stored_variations(set))
            .bind(set.price)
            .bind(set.disc_price)
            .bind(stock_i64(set.stock)?)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn update_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductUuid,
        name: &str,
        set: &VariationSet,
    ) -> Result<ProductRecord, sqlx::Error> {
        query_as::<Postgres, ProductRecord>(UPDATE_PRODUCT_SQL)
            .bind(product.into_uuid())
            .bind(name)
            .bind(stored_variations(set))
            .bind(set.price)
            .bind(set.disc_price)
            .bind(stock_i64(set.stock)?)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn delete_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductUuid,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_PRODUCT_SQL)
            .bind(product.into_uuid())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

impl<'r> FromRow<'r, PgRow> for ProductRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let stock_i64: i64 = row.try_get("stock")?;

        let stock = u64::try_from(stock_i64).map_err(|e| sqlx::Error::ColumnDecode {
            index: "stock".to_string(),
            source: Box::new(e),
        })?;

        let Json(variations) = row.try_get::<Json<Vec<StoredVariation>>, _>("variations")?;

        Ok(Self {
            uuid: ProductUuid::from_uuid(row.try_get("uuid")?),
            restaurant: RestaurantUuid::from_uuid(row.try_get("restaurant_uuid")?),
            name: row.try_get("name")?,
            variations: variations.into_iter().map(ProductVariation::from).collect(),
            price: row.try_get("price")?,
            disc_price: row.try_get("disc_price")?,
            stock,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
            deleted_at: row
                .try_get::<Option<SqlxTimestamp>, _>("deleted_at")?
                .map(SqlxTimestamp::to_jiff),
        })
    }
}
