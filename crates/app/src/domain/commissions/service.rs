//! Commissions service.

use async_trait::async_trait;
use mockall::automock;
use tiffin::commissions::{toggle_status, validate};
use tracing::info;

use crate::{
    database::Db,
    domain::{
        commissions::{
            data::{CommissionUpdate, NewCommission},
            errors::CommissionsServiceError,
            records::{CommissionRecord, CommissionUuid},
            repository::PgCommissionsRepository,
        },
        tenants::records::TenantUuid,
    },
};

#[derive(Debug, Clone)]
pub struct PgCommissionsService {
    db: Db,
    repository: PgCommissionsRepository,
}

impl PgCommissionsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgCommissionsRepository::new(),
        }
    }
}

#[async_trait]
impl CommissionsService for PgCommissionsService {
    async fn list_commissions(
        &self,
        tenant: TenantUuid,
    ) -> Result<Vec<CommissionRecord>, CommissionsServiceError> {
        let mut tx = self.db.begin_tenant_transaction(tenant).await?;

        let commissions = self.repository.list_commissions(&mut tx).await?;

        tx.commit().await?;

        Ok(commissions)
    }

    async fn get_commission(
        &self,
        tenant: TenantUuid,
        commission: CommissionUuid,
    ) -> Result<CommissionRecord, CommissionsServiceError> {
        let mut tx = self.db.begin_tenant_transaction(tenant).await?;

        let commission = self.repository.get_commission(&mut tx, commission).await?;

        tx.commit().await?;

        Ok(commission)
    }

    async fn create_commission(
        &self,
        tenant: TenantUuid,
        commission: NewCommission,
    ) -> Result<CommissionRecord, CommissionsServiceError> {
        let config = validate(&commission.commission)?.with_notes(commission.notes);

        let mut tx = self.db.begin_tenant_transaction(tenant).await?;

        let created = self
            .repository
            .create_commission(&mut tx, commission.uuid, commission.restaurant, &config)
            .await?;

        tx.commit().await?;

        Ok(created)
    }

    async fn update_commission(
        &self,
        tenant: TenantUuid,
        commission: CommissionUuid,
        update: CommissionUpdate,
    ) -> Result<CommissionRecord, CommissionsServiceError> {
        let validated = validate(&update.commission)?;

        let mut tx = self.db.begin_tenant_transaction(tenant).await?;

        let current = self.repository.lock_commission(&mut tx, commission).await?;

        let config = validated
            .with_notes(update.notes)
            .with_status(current.config.status());

        let updated = self
            .repository
            .update_commission(&mut tx, commission, &config)
            .await?;

        tx.commit().await?;

        Ok(updated)
    }

    async fn toggle_commission(
        &self,
        tenant: TenantUuid,
        commission: CommissionUuid,
    ) -> Result<CommissionRecord, CommissionsServiceError> {
        let mut tx = self.db.begin_tenant_transaction(tenant).await?;

        let current = self.repository.lock_commission(&mut tx, commission).await?;

        let toggled = self
            .repository
            .update_commission(&mut tx, commission, &toggle_status(current.config))
            .await?;

        tx.commit().await?;

        info!(
            commission = %toggled.uuid,
            enabled = toggled.config.status(),
            "commission status toggled"
        );

        Ok(toggled)
    }

    async fn delete_commission(
        &self,
        tenant: TenantUuid,
        commission: CommissionUuid,
    ) -> Result<(), CommissionsServiceError> {
        let mut tx = self.db.begin_tenant_transaction(tenant).await?;

        let rows_affected = self
            .repository
            .delete_commission(&mut tx, commission)
            .await?;

        if rows_affected == 0 {
            return Err(CommissionsServiceError::NotFound);
        }

        tx.commit().await?;

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait CommissionsService: Send + Sync {
    /// Retrieves all restaurant commissions.
    async fn list_commissions(
        &self,
        tenant: TenantUuid,
    ) -> Result<Vec<CommissionRecord>, CommissionsServiceError>;

    /// Retrieve a single commission.
    async fn get_commission(
        &self,
        tenant: TenantUuid,
        commission: CommissionUuid,
    ) -> Result<CommissionRecord, CommissionsServiceError>;

    /// Validates and stores a restaurant's commission. A restaurant can only
    /// have one.
    async fn create_commission(
        &self,
        tenant: TenantUuid,
        commission: NewCommission,
    ) -> Result<CommissionRecord, CommissionsServiceError>;

    /// Revalidates and replaces a commission's type, value and notes.
    async fn update_commission(
        &self,
        tenant: TenantUuid,
        commission: CommissionUuid,
        update: CommissionUpdate,
    ) -> Result<CommissionRecord, CommissionsServiceError>;

    /// Flips a commission between enabled and disabled.
    async fn toggle_commission(
        &self,
        tenant: TenantUuid,
        commission: CommissionUuid,
    ) -> Result<CommissionRecord, CommissionsServiceError>;

    /// Soft deletes a commission.
    async fn delete_commission(
        &self,
        tenant: TenantUuid,
        commission: CommissionUuid,
    ) -> Result<(), CommissionsServiceError>;
}
