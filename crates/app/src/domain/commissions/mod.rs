//! Restaurant Commissions

pub mod data;
pub mod errors;
pub mod records;
mod repository;
pub mod service;

pub use errors::CommissionsServiceError;
pub use service::*;
