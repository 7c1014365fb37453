// src/entries/models.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;

use crate::common::helpers::parse_stored_timestamp;
use crate::common::ApiError;

// ============================================================================
// Entry Kinds
// ============================================================================

/// Meals and diet entries share one shape and one set of operations; the
/// kind only selects the table and the JSON keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Meal,
    Diet,
}

impl EntryKind {
    pub const ALL: [EntryKind; 2] = [EntryKind::Meal, EntryKind::Diet];

    /// Table name, also the collection key in list responses
    pub fn table(self) -> &'static str {
        match self {
            EntryKind::Meal => "meals",
            EntryKind::Diet => "diets",
        }
    }

    /// Key for single-entry responses
    pub fn singular(self) -> &'static str {
        match self {
            EntryKind::Meal => "meal",
            EntryKind::Diet => "diet",
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.singular())
    }
}

// ============================================================================
// Entry Models
// ============================================================================

#[derive(Debug, Clone, FromRow)]
pub struct EntryRow {
    pub id: String,
    pub name: String,
    pub description: String,
    #[sqlx(rename = "dateTime")]
    pub date_time: String,
    #[sqlx(rename = "isInDiet")]
    pub is_in_diet: bool,
    pub created_at: String,
    pub updated_at: String,
    #[sqlx(rename = "userId")]
    pub user_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(rename = "dateTime")]
    pub date_time: DateTime<Utc>,
    #[serde(rename = "isInDiet")]
    pub is_in_diet: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(rename = "userId")]
    pub user_id: String,
}

impl TryFrom<EntryRow> for Entry {
    type Error = ApiError;

    fn try_from(row: EntryRow) -> Result<Self, Self::Error> {
        Ok(Entry {
            date_time: parse_stored_timestamp("dateTime", &row.date_time)?,
            created_at: parse_stored_timestamp("created_at", &row.created_at)?,
            updated_at: parse_stored_timestamp("updated_at", &row.updated_at)?,
            id: row.id,
            name: row.name,
            description: row.description,
            is_in_diet: row.is_in_diet,
            user_id: row.user_id,
        })
    }
}

// Request models. `dateTime` arrives as text and is parsed by the validator.
#[derive(Debug, Deserialize)]
pub struct CreateEntryRequest {
    pub name: String,
    pub description: String,
    #[serde(rename = "dateTime")]
    pub date_time: String,
    #[serde(rename = "isInDiet")]
    pub is_in_diet: bool,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateEntryRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "dateTime")]
    pub date_time: Option<String>,
    #[serde(rename = "isInDiet")]
    pub is_in_diet: Option<bool>,
}

// ============================================================================
// Metrics
// ============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DietMetrics {
    pub total_meals: i64,
    pub total_meals_in_diet: i64,
    pub total_meals_out_diet: i64,
    pub best: i64,
}
