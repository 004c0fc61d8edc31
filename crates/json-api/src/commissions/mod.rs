//! Restaurant Commissions

mod errors;
mod handlers;

pub(crate) use handlers::*;
