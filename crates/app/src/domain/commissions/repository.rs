//! Commissions Repository

use std::str::FromStr;

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as};
use tiffin::commissions::{CommissionConfig, CommissionType};

use crate::domain::{
    commissions::records::{CommissionRecord, CommissionUuid},
    restaurants::records::RestaurantUuid,
};

const LIST_COMMISSIONS_SQL: &str = include_str!("sql/list_commissions.sql");
const GET_COMMISSION_SQL: &str = include_str!("sql/get_commission.sql");
const LOCK_COMMISSION_SQL: &str = include_str!("sql/lock_commission.sql");
const CREATE_COMMISSION_SQL: &str = include_str!("sql/create_commission.sql");
const UPDATE_COMMISSION_SQL: &str = include_str!("sql/update_commission.sql");
const DELETE_COMMISSION_SQL: &str = include_str!("sql/delete_commission.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgCommissionsRepository;

impl PgCommissionsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_commissions(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Vec<CommissionRecord>, sqlx::Error> {
        query_as::<Postgres, CommissionRecord>(LIST_COMMISSIONS_SQL)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn get_commission(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        commission: CommissionUuid,
    ) -> Result<CommissionRecord, sqlx::Error> {
        query_as::<Postgres, CommissionRecord>(GET_COMMISSION_SQL)
            .bind(commission.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn lock_commission(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        commission: CommissionUuid,
    ) -> Result<CommissionRecord, sqlx::Error> {
        query_as::<Postgres, CommissionRecord>(LOCK_COMMISSION_SQL)
            .bind(commission.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn create_commission(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        commission: CommissionUuid,
        restaurant: RestaurantUuid,
        config: &CommissionConfig,
    ) -> Result<CommissionRecord, sqlx::Error> {
        query_as::<Postgres, CommissionRecord>(CREATE_COMMISSION_SQL)
            .bind(commission.into_uuid())
            .bind(restaurant.into_uuid())
            .bind(config.kind().as_str())
            .bind(config.value())
            .bind(config.notes())
            .bind(config.status())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn update_commission(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        commission: CommissionUuid,
        config: &CommissionConfig,
    ) -> Result<CommissionRecord, sqlx::Error> {
        query_as::<Postgres, CommissionRecord>(UPDATE_COMMISSION_SQL)
            .bind(commission.into_uuid())
            .bind(config.kind().as_str())
            .bind(config.value())
            .bind(config.notes())
            .bind(config.status())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn delete_commission(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        commission: CommissionUuid,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_COMMISSION_SQL)
            .bind(commission.into_uuid())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

impl<'r> FromRow<'r, PgRow> for CommissionRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let kind: String = row.try_get("commission_type")?;

        let kind = CommissionType::from_str(&kind).map_err(|e| sqlx::Error::ColumnDecode {
            index: "commission_type".to_string(),
            source: Box::new(e),
        })?;

        let config = CommissionConfig::from_parts(
            kind,
            row.try_get("value")?,
            row.try_get("notes")?,
            row.try_get("status")?,
        );

        Ok(Self {
            uuid: CommissionUuid::from_uuid(row.try_get("uuid")?),
            restaurant: RestaurantUuid::from_uuid(row.try_get("restaurant_uuid")?),
            config,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
            deleted_at: row
                .try_get::<Option<SqlxTimestamp>, _>("deleted_at")?
                .map(SqlxTimestamp::to_jiff),
        })
    }
}
