//! # Auth Module
//!
//! Users and sessions:
//! - Signup with session cookie issuance
//! - Session token resolution (`SessionResolver`)
//! - `SessionUser` extractor for protected routes

pub mod extractors;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
pub mod validators;


pub use extractors::SessionUser;
pub use routes::auth_routes;
pub use services::SessionResolver;
