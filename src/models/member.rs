use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A member of the organization. Email is unique; name/faculty/group fields
/// are stored lowercased, clothing size uppercased.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub id: Uuid,
    pub email: String,
    pub best_email: Option<String>,
    pub full_name: String,
    pub middle_name: String,
    pub surname: String,
    pub birthday: NaiveDate,
    pub faculty: String,
    #[serde(rename = "group")]
    pub group_name: String,
    pub clothing_size: Option<String>,
    pub home_address: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberDraft {
    pub email: String,
    #[serde(default)]
    pub best_email: Option<String>,
    pub full_name: String,
    pub middle_name: String,
    pub surname: String,
    pub birthday: NaiveDate,
    pub faculty: String,
    #[serde(rename = "group")]
    pub group_name: String,
    #[serde(default)]
    pub clothing_size: Option<String>,
    #[serde(default)]
    pub home_address: Option<String>,
}
