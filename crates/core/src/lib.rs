//! Tiffin
//!
//! Derived-state rules for the Tiffin food-delivery platform: product variation
//! aggregation, stock status transitions and restaurant commission validation.

pub mod commissions;
pub mod prelude;
pub mod variations;
