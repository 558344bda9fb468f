use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Assignment of a member to a coordinator, scoped to a cadence.
/// The (memberId, coordinatorId, cadenceId) triple is unique among live records.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct CoordinatorToMember {
    pub id: i64,
    pub member_id: Uuid,
    pub coordinator_id: i64,
    pub cadence_id: Uuid,
    pub excluded: bool,
    pub excluded_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoordinatorToMemberDraft {
    pub member_id: Uuid,
    pub coordinator_id: i64,
    pub cadence_id: Uuid,
    pub excluded: bool,
    #[serde(default)]
    pub excluded_date: Option<DateTime<Utc>>,
}

/// List projection: id + foreign keys + exclusion flags, no timestamps.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoordinatorToMemberRow {
    pub id: i64,
    pub member_id: Uuid,
    pub coordinator_id: i64,
    pub cadence_id: Uuid,
    pub excluded: bool,
    pub excluded_date: Option<DateTime<Utc>>,
}

impl From<CoordinatorToMember> for CoordinatorToMemberRow {
    fn from(record: CoordinatorToMember) -> Self {
        Self {
            id: record.id,
            member_id: record.member_id,
            coordinator_id: record.coordinator_id,
            cadence_id: record.cadence_id,
            excluded: record.excluded,
            excluded_date: record.excluded_date,
        }
    }
}
