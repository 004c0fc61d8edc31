//! Product Handlers

pub(crate) mod bulk_stock;
pub(crate) mod create;
pub(crate) mod delete;
pub(crate) mod get;
pub(crate) mod index;
pub(crate) mod stock;
pub(crate) mod update;
