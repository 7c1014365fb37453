// src/entries/services.rs

use sqlx::SqlitePool;
use tracing::{debug, error, info};

use super::metrics::longest_streak;
use super::models::{
    CreateEntryRequest, DietMetrics, Entry, EntryKind, EntryRow, UpdateEntryRequest,
};
use super::validators::EntryValidator;
use crate::common::helpers::{format_timestamp, now_timestamp};
use crate::common::validation::parse_timestamp;
use crate::common::{generate_entry_id, ApiError, Validator};

/// Scan order for lists and the streak: chronological, ties by insertion.
const SCAN_ORDER: &str = "ORDER BY dateTime ASC, rowid ASC";

/// CRUD and metrics for one entry kind.
///
/// Every query carries the `userId = ?` ownership filter; rows belonging to
/// other users behave exactly like missing rows.
pub struct EntriesService {
    db: SqlitePool,
    kind: EntryKind,
}

impl EntriesService {
    pub fn new(db: SqlitePool, kind: EntryKind) -> Self {
        Self { db, kind }
    }

    fn not_found(&self) -> ApiError {
        ApiError::NotFound(format!("No {} found!", self.kind))
    }

    // ============================================================================
    // CRUD Operations
    // ============================================================================

    pub async fn create(
        &self,
        user_id: &str,
        request: &CreateEntryRequest,
    ) -> Result<Entry, ApiError> {
        EntryValidator.validate(request).into_result()?;

        let date_time = parse_timestamp(&request.date_time)
            .ok_or_else(|| ApiError::ValidationError("dateTime: Invalid date".to_string()))?;
        let entry_id = generate_entry_id();
        let now = now_timestamp();

        sqlx::query(&format!(
            r#"
            INSERT INTO {} (id, name, description, dateTime, isInDiet, created_at, updated_at, userId)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
            self.kind.table()
        ))
        .bind(&entry_id)
        .bind(&request.name)
        .bind(&request.description)
        .bind(format_timestamp(&date_time))
        .bind(request.is_in_diet)
        .bind(&now)
        .bind(&now)
        .bind(user_id)
        .execute(&self.db)
        .await
        .map_err(|e| {
            error!(
                error = %e,
                user_id = %user_id,
                kind = %self.kind,
                "Database error creating entry"
            );
            ApiError::DatabaseError(e)
        })?;

        info!(
            user_id = %user_id,
            entry_id = %entry_id,
            kind = %self.kind,
            is_in_diet = request.is_in_diet,
            "Entry created"
        );

        self.get(user_id, &entry_id).await
    }

    /// An owner with no entries is reported as `NotFound`, not an empty list.
    pub async fn list(&self, user_id: &str) -> Result<Vec<Entry>, ApiError> {
        let rows = sqlx::query_as::<_, EntryRow>(&format!(
            "SELECT * FROM {} WHERE userId = ? {}",
            self.kind.table(),
            SCAN_ORDER
        ))
        .bind(user_id)
        .fetch_all(&self.db)
        .await
        .map_err(|e| {
            error!(
                error = %e,
                user_id = %user_id,
                kind = %self.kind,
                "Database error listing entries"
            );
            ApiError::DatabaseError(e)
        })?;

        if rows.is_empty() {
            debug!(user_id = %user_id, kind = %self.kind, "No entries for user");
            return Err(ApiError::NotFound(format!(
                "No {} found for this user!",
                self.kind.table()
            )));
        }

        debug!(
            user_id = %user_id,
            kind = %self.kind,
            count = rows.len(),
            "Fetched entries"
        );

        rows.into_iter().map(Entry::try_from).collect()
    }

    pub async fn get(&self, user_id: &str, entry_id: &str) -> Result<Entry, ApiError> {
        self.fetch_owned(user_id, entry_id)
            .await?
            .ok_or_else(|| self.not_found())
            .and_then(Entry::try_from)
    }

    /// Omitted fields keep their stored value; `updated_at` is always refreshed.
    pub async fn update(
        &self,
        user_id: &str,
        entry_id: &str,
        request: &UpdateEntryRequest,
    ) -> Result<Entry, ApiError> {
        EntryValidator.validate(request).into_result()?;

        let date_time = match &request.date_time {
            Some(raw) => Some(parse_timestamp(raw).ok_or_else(|| {
                ApiError::ValidationError("dateTime: Invalid date".to_string())
            })?),
            None => None,
        };

        let result = sqlx::query(&format!(
            r#"
            UPDATE {}
            SET name = COALESCE(?, name),
                description = COALESCE(?, description),
                dateTime = COALESCE(?, dateTime),
                isInDiet = COALESCE(?, isInDiet),
                updated_at = ?
            WHERE id = ? AND userId = ?
            "#,
            self.kind.table()
        ))
        .bind(request.name.as_deref())
        .bind(request.description.as_deref())
        .bind(date_time.as_ref().map(format_timestamp))
        .bind(request.is_in_diet)
        .bind(now_timestamp())
        .bind(entry_id)
        .bind(user_id)
        .execute(&self.db)
        .await
        .map_err(|e| {
            error!(
                error = %e,
                user_id = %user_id,
                entry_id = %entry_id,
                kind = %self.kind,
                "Database error updating entry"
            );
            ApiError::DatabaseError(e)
        })?;

        if result.rows_affected() == 0 {
            debug!(
                user_id = %user_id,
                entry_id = %entry_id,
                kind = %self.kind,
                "Update target not found or not owned"
            );
            return Err(self.not_found());
        }

        info!(user_id = %user_id, entry_id = %entry_id, kind = %self.kind, "Entry updated");

        self.get(user_id, entry_id).await
    }

    pub async fn delete(&self, user_id: &str, entry_id: &str) -> Result<(), ApiError> {
        let result = sqlx::query(&format!(
            "DELETE FROM {} WHERE id = ? AND userId = ?",
            self.kind.table()
        ))
        .bind(entry_id)
        .bind(user_id)
        .execute(&self.db)
        .await
        .map_err(|e| {
            error!(
                error = %e,
                user_id = %user_id,
                entry_id = %entry_id,
                kind = %self.kind,
                "Database error deleting entry"
            );
            ApiError::DatabaseError(e)
        })?;

        if result.rows_affected() == 0 {
            return Err(self.not_found());
        }

        info!(user_id = %user_id, entry_id = %entry_id, kind = %self.kind, "Entry deleted");

        Ok(())
    }

    // ============================================================================
    // Metrics
    // ============================================================================

    pub async fn metrics(&self, user_id: &str) -> Result<DietMetrics, ApiError> {
        let (total, in_diet) = sqlx::query_as::<_, (i64, i64)>(&format!(
            "SELECT COUNT(*), COALESCE(SUM(isInDiet), 0) FROM {} WHERE userId = ?",
            self.kind.table()
        ))
        .bind(user_id)
        .fetch_one(&self.db)
        .await
        .map_err(|e| {
            error!(
                error = %e,
                user_id = %user_id,
                kind = %self.kind,
                "Database error aggregating entries"
            );
            ApiError::DatabaseError(e)
        })?;

        if total == 0 {
            return Ok(DietMetrics::default());
        }

        let flags = sqlx::query_scalar::<_, bool>(&format!(
            "SELECT isInDiet FROM {} WHERE userId = ? {}",
            self.kind.table(),
            SCAN_ORDER
        ))
        .bind(user_id)
        .fetch_all(&self.db)
        .await
        .map_err(|e| {
            error!(
                error = %e,
                user_id = %user_id,
                kind = %self.kind,
                "Database error scanning entries for streak"
            );
            ApiError::DatabaseError(e)
        })?;

        let metrics = DietMetrics::new(total, in_diet, longest_streak(flags));

        debug!(
            user_id = %user_id,
            kind = %self.kind,
            total = metrics.total_meals,
            best = metrics.best,
            "Computed diet metrics"
        );

        Ok(metrics)
    }

    async fn fetch_owned(
        &self,
        user_id: &str,
        entry_id: &str,
    ) -> Result<Option<EntryRow>, ApiError> {
        sqlx::query_as::<_, EntryRow>(&format!(
            "SELECT * FROM {} WHERE id = ? AND userId = ?",
            self.kind.table()
        ))
        .bind(entry_id)
        .bind(user_id)
        .fetch_optional(&self.db)
        .await
        .map_err(|e| {
            error!(
                error = %e,
                user_id = %user_id,
                entry_id = %entry_id,
                kind = %self.kind,
                "Database error fetching entry"
            );
            ApiError::DatabaseError(e)
        })
    }
}
