use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// UI translation string, keyed by message key and language code.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Translation {
    pub id: i64,
    pub key: String,
    pub lang: String,
    pub value: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationDraft {
    pub key: String,
    pub lang: String,
    pub value: String,
}
