//! Tiffin Domain Concerns

pub mod commissions;
pub mod products;
pub mod restaurants;
pub mod tenants;
