use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A named, dated organizational term. Cadence numbers are unique.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Cadence {
    pub id: Uuid,
    pub number: i32,
    pub is_end: bool,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CadenceDraft {
    pub number: i32,
    pub is_end: bool,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
}
