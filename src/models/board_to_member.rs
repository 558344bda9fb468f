use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Membership of a member on a board, scoped to a cadence.
/// The (memberId, boardId, cadenceId) triple is unique among live records.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct BoardToMember {
    pub id: i64,
    pub member_id: Uuid,
    pub board_id: i64,
    pub cadence_id: Uuid,
    pub excluded: bool,
    pub excluded_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardToMemberDraft {
    pub member_id: Uuid,
    pub board_id: i64,
    pub cadence_id: Uuid,
    pub excluded: bool,
    #[serde(default)]
    pub excluded_date: Option<DateTime<Utc>>,
}

/// List projection: id + foreign keys + exclusion flags, no timestamps.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardToMemberRow {
    pub id: i64,
    pub member_id: Uuid,
    pub board_id: i64,
    pub cadence_id: Uuid,
    pub excluded: bool,
    pub excluded_date: Option<DateTime<Utc>>,
}

impl From<BoardToMember> for BoardToMemberRow {
    fn from(record: BoardToMember) -> Self {
        Self {
            id: record.id,
            member_id: record.member_id,
            board_id: record.board_id,
            cadence_id: record.cadence_id,
            excluded: record.excluded,
            excluded_date: record.excluded_date,
        }
    }
}
