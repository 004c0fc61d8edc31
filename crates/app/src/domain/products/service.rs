//! Products service.

use std::collections::BTreeMap;

use async_trait::async_trait;
use mockall::automock;
use sqlx::{Postgres, Transaction};
use tiffin::variations::StockUpdate;
use tracing::debug;

use crate::{
    database::Db,
    domain::{
        products::{
            data::{NewProduct, ProductUpdate, VariationSet, VariationStockUpdate},
            errors::ProductsServiceError,
            records::{ProductRecord, ProductUuid, VariationUuid},
            repository::PgProductsRepository,
        },
        restaurants::records::RestaurantUuid,
        tenants::records::TenantUuid,
    },
};

#[derive(Debug, Clone)]
pub struct PgProductsService {
    db: Db,
    repository: PgProductsRepository,
}

impl PgProductsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgProductsRepository::new(),
        }
    }

    /// Recompute a locked product's derived fields from its variations and
    /// write it back.
    async fn persist_variations(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: &ProductRecord,
    ) -> Result<ProductRecord, ProductsServiceError> {
        let set = VariationSet::from_existing(&product.variations)?;

        let updated = self
            .repository
            .update_product(tx, product.uuid, &product.name, &set)
            .await?;

        Ok(updated)
    }
}

fn apply_to_variation(
    product: &mut ProductRecord,
    variation: VariationUuid,
    update: &StockUpdate,
) -> Result<(), ProductsServiceError> {
    let target = product
        .variation_mut(variation)
        .ok_or(ProductsServiceError::VariationNotFound(variation))?;

    target.variation.apply_stock_update(update);

    Ok(())
}

#[async_trait]
impl ProductsService for PgProductsService {
    async fn list_products(
        &self,
        tenant: TenantUuid,
        restaurant: Option<RestaurantUuid>,
    ) -> Result<Vec<ProductRecord>, ProductsServiceError> {
        let mut tx = self.db.begin_tenant_transaction(tenant).await?;

        let products = self.repository.list_products(&mut tx, restaurant).await?;

        tx.commit().await?;

        Ok(products)
    }

    async fn get_product(
        &self,
        tenant: TenantUuid,
        product: ProductUuid,
    ) -> Result<ProductRecord, ProductsServiceError> {
        let mut tx = self.db.begin_tenant_transaction(tenant).await?;

        let product = self.repository.get_product(&mut tx, product).await?;

        tx.commit().await?;

        Ok(product)
    }

    async fn create_product(
        &self,
        tenant: TenantUuid,
        product: NewProduct,
    ) -> Result<ProductRecord, ProductsServiceError> {
        let set = VariationSet::from_new(product.variations)?;

        let mut tx = self.db.begin_tenant_transaction(tenant).await?;

        let created = self
            .repository
            .create_product(&mut tx, product.uuid, product.restaurant, &product.name, &set)
            .await?;

        tx.commit().await?;

        Ok(created)
    }

    async fn update_product(
        &self,
        tenant: TenantUuid,
        product: ProductUuid,
        update: ProductUpdate,
    ) -> Result<ProductRecord, ProductsServiceError> {
        let mut tx = self.db.begin_tenant_transaction(tenant).await?;

        self.repository.lock_product(&mut tx, product).await?;

        let set = VariationSet::from_new(update.variations)?;

        let updated = self
            .repository
            .update_product(&mut tx, product, &update.name, &set)
            .await?;

        tx.commit().await?;

        Ok(updated)
    }

    async fn delete_product(
        &self,
        tenant: TenantUuid,
        product: ProductUuid,
    ) -> Result<(), ProductsServiceError> {
        let mut tx = self.db.begin_tenant_transaction(tenant).await?;

        let rows_affected = self.repository.delete_product(&mut tx, product).await?;

        if rows_affected == 0 {
            return Err(ProductsServiceError::NotFound);
        }

        tx.commit().await?;

        Ok(())
    }

    async fn update_variation_stock(
        &self,
        tenant: TenantUuid,
        product: ProductUuid,
        variation: VariationUuid,
        update: StockUpdate,
    ) -> Result<ProductRecord, ProductsServiceError> {
        let mut tx = self.db.begin_tenant_transaction(tenant).await?;

        let mut locked = self.repository.lock_product(&mut tx, product).await?;

        apply_to_variation(&mut locked, variation, &update)?;

        let updated = self.persist_variations(&mut tx, &locked).await?;

        tx.commit().await?;

        Ok(updated)
    }

    async fn bulk_update_stock(
        &self,
        tenant: TenantUuid,
        updates: Vec<VariationStockUpdate>,
    ) -> Result<Vec<ProductRecord>, ProductsServiceError> {
        if updates.is_empty() {
            return Err(ProductsServiceError::EmptyStockUpdate);
        }

        let mut tx = self.db.begin_tenant_transaction(tenant).await?;

        // Each product is locked once and written once, however many of its
        // variations the batch touches. Locks are taken in uuid order so
        // overlapping batches cannot deadlock; updates apply in submitted order.
        let mut locked: BTreeMap<ProductUuid, ProductRecord> = BTreeMap::new();

        for uuid in lock_order(&updates) {
            let product = self.repository.lock_product(&mut tx, uuid).await?;

            locked.insert(uuid, product);
        }

        let mut order = Vec::new();

        for entry in &updates {
            let product = locked
                .get_mut(&entry.product)
                .ok_or(ProductsServiceError::NotFound)?;

            apply_to_variation(product, entry.variation, &entry.update)?;

            if !order.contains(&entry.product) {
                order.push(entry.product);
            }
        }

        let mut updated = Vec::with_capacity(order.len());

        for uuid in order {
            let product = locked.get(&uuid).ok_or(ProductsServiceError::NotFound)?;

            updated.push(self.persist_variations(&mut tx, product).await?);
        }

        tx.commit().await?;

        debug!(
            entries = updates.len(),
            products = updated.len(),
            "bulk stock update applied"
        );

        Ok(updated)
    }
}

/// Distinct products touched by a batch, ascending.
fn lock_order(updates: &[VariationStockUpdate]) -> Vec<ProductUuid> {
    let mut products: Vec<ProductUuid> = updates.iter().map(|entry| entry.product).collect();

    products.sort_unstable();
    products.dedup();

    products
}

#[automock]
#[async_trait]
pub trait ProductsService: Send + Sync {
    /// Retrieves all products, optionally only those of one restaurant.
    async fn list_products(
        &self,
        tenant: TenantUuid,
        restaurant: Option<RestaurantUuid>,
    ) -> Result<Vec<ProductRecord>, ProductsServiceError>;

    /// Retrieve a single product.
    async fn get_product(
        &self,
        tenant: TenantUuid,
        product: ProductUuid,
    ) -> Result<ProductRecord, ProductsServiceError>;

    /// Creates a new product, deriving its price and stock from its variations.
    async fn create_product(
        &self,
        tenant: TenantUuid,
        product: NewProduct,
    ) -> Result<ProductRecord, ProductsServiceError>;

    /// Replaces a product's name and variations.
    async fn update_product(
        &self,
        tenant: TenantUuid,
        product: ProductUuid,
        update: ProductUpdate,
    ) -> Result<ProductRecord, ProductsServiceError>;

    /// Soft deletes a product.
    async fn delete_product(
        &self,
        tenant: TenantUuid,
        product: ProductUuid,
    ) -> Result<(), ProductsServiceError>;

    /// Sets the stock of one variation and recomputes the product.
    async fn update_variation_stock(
        &self,
        tenant: TenantUuid,
        product: ProductUuid,
        variation: VariationUuid,
        update: StockUpdate,
    ) -> Result<ProductRecord, ProductsServiceError>;

    /// Applies many stock updates in one transaction. Any failing entry
    /// aborts the whole batch.
    async fn bulk_update_stock(
        &self,
        tenant: TenantUuid,
        updates: Vec<VariationStockUpdate>,
    ) -> Result<Vec<ProductRecord>, ProductsServiceError>;
}
