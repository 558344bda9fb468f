pub mod board;
pub mod board_to_member;
pub mod cadence;
pub mod committee;
pub mod committee_to_member;
pub mod coordinator;
pub mod coordinator_to_member;
pub mod member;
pub mod translation;

pub use board::{Board, BoardDraft};
pub use board_to_member::{BoardToMember, BoardToMemberDraft, BoardToMemberRow};
pub use cadence::{Cadence, CadenceDraft};
pub use committee::{Committee, CommitteeDraft};
pub use committee_to_member::{CommitteeToMember, CommitteeToMemberDraft, CommitteeToMemberRow};
pub use coordinator::{Coordinator, CoordinatorDraft};
pub use coordinator_to_member::{
    CoordinatorToMember, CoordinatorToMemberDraft, CoordinatorToMemberRow,
};
pub use member::{Member, MemberDraft};
pub use translation::{Translation, TranslationDraft};

use serde::{Deserialize, Serialize};

/// Minimal reply for create/update/delete: just the record id
#[derive(Debug, Clone, Serialize)]
pub struct RecordId<Id> {
    pub id: Id,
}

/// Reply for bulk deletes: how many records were actually removed
#[derive(Debug, Clone, Serialize)]
pub struct DeleteCount {
    pub count: u64,
}

/// Position-correlated bulk delete reply: one entry per input id,
/// null where that id could not be deleted
#[derive(Debug, Clone, Serialize)]
pub struct DeletedIds<Id> {
    pub id: Vec<Option<Id>>,
}

/// Request body for bulk deletes: `{ "id": [...] }`
#[derive(Debug, Clone, Deserialize)]
pub struct IdList<Id> {
    pub id: Vec<Id>,
}

/// Update request body: the record id plus the full replacement payload
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateInput<Id, D> {
    pub id: Id,
    #[serde(flatten)]
    pub data: D,
}
