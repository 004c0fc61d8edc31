//! Tenant-scoped persistence services for restaurants, products and
//! commissions, plus API token authentication.

pub mod auth;
pub mod context;
pub mod database;
pub mod domain;

#[cfg(test)]
mod test;

pub mod uuids;
