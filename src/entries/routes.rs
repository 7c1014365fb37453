// src/entries/routes.rs

use axum::{extract::Extension, routing::get, Router};

use super::handlers;
use super::models::EntryKind;

pub fn meals_routes() -> Router {
    entry_routes(EntryKind::Meal)
}

pub fn diets_routes() -> Router {
    entry_routes(EntryKind::Diet)
}

/// `/{table}`, `/{table}/metrics` and `/{table}/:id` for one kind.
/// The static `metrics` segment takes precedence over `:id`.
fn entry_routes(kind: EntryKind) -> Router {
    let base = format!("/{}", kind.table());

    Router::new()
        .route(
            &base,
            get(handlers::list_entries).post(handlers::create_entry),
        )
        .route(&format!("{base}/metrics"), get(handlers::entry_metrics))
        .route(
            &format!("{base}/:id"),
            get(handlers::get_entry)
                .put(handlers::update_entry)
                .delete(handlers::delete_entry),
        )
        .layer(Extension(kind))
}
