//! # Entries Module
//!
//! Meals and diet entries, which share one contract:
//! - Owner-scoped create, list, get, partial update and delete
//! - Diet adherence metrics (totals and longest in-diet streak)

pub mod handlers;
pub mod metrics;
pub mod models;
pub mod routes;
pub mod services;
pub mod validators;


pub use models::EntryKind;
pub use routes::{diets_routes, meals_routes};
