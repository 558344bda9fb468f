use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Membership of a member in a committee, scoped to a cadence.
/// The (memberId, committeeId, cadenceId) triple is unique among live records.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct CommitteeToMember {
    pub id: Uuid,
    pub member_id: Uuid,
    pub committee_id: Uuid,
    pub cadence_id: Uuid,
    pub excluded: bool,
    pub excluded_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommitteeToMemberDraft {
    pub member_id: Uuid,
    pub committee_id: Uuid,
    pub cadence_id: Uuid,
    pub excluded: bool,
    #[serde(default)]
    pub excluded_date: Option<DateTime<Utc>>,
}

/// List projection: id + foreign keys + exclusion flags, no timestamps.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommitteeToMemberRow {
    pub id: Uuid,
    pub member_id: Uuid,
    pub committee_id: Uuid,
    pub cadence_id: Uuid,
    pub excluded: bool,
    pub excluded_date: Option<DateTime<Utc>>,
}

impl From<CommitteeToMember> for CommitteeToMemberRow {
    fn from(record: CommitteeToMember) -> Self {
        Self {
            id: record.id,
            member_id: record.member_id,
            committee_id: record.committee_id,
            cadence_id: record.cadence_id,
            excluded: record.excluded,
            excluded_date: record.excluded_date,
        }
    }
}
