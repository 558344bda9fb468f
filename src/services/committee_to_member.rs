use std::sync::Arc;
use uuid::Uuid;

use crate::error::ApiError;
use crate::models::{
    CommitteeToMember, CommitteeToMemberDraft, CommitteeToMemberRow, DeleteCount, RecordId,
};
use crate::services::{CadenceService, CommitteeService, MemberService};
use crate::store::{guarded, CommitteeToMemberStore};

/// Committee membership per cadence. UUID-keyed, unlike the serial-keyed
/// board and coordinator links.
///
/// Same write discipline as the other association services: uniqueness of the
/// (member, committee, cadence) triple first, then ordered existence checks
/// member -> committee -> cadence, short-circuiting on the first failure.
pub struct CommitteeToMemberService {
    store: Arc<dyn CommitteeToMemberStore>,
    members: Arc<MemberService>,
    committees: Arc<CommitteeService>,
    cadences: Arc<CadenceService>,
}

impl CommitteeToMemberService {
    pub fn new(
        store: Arc<dyn CommitteeToMemberStore>,
        members: Arc<MemberService>,
        committees: Arc<CommitteeService>,
        cadences: Arc<CadenceService>,
    ) -> Self {
        Self {
            store,
            members,
            committees,
            cadences,
        }
    }

    async fn check_references(&self, draft: &CommitteeToMemberDraft) -> Result<(), ApiError> {
        self.members.check_by_id(draft.member_id).await?;
        self.committees.check_by_id(draft.committee_id).await?;
        self.cadences.check_by_id(draft.cadence_id).await?;
        Ok(())
    }

    pub async fn get_list(&self) -> Result<Vec<CommitteeToMemberRow>, ApiError> {
        let records = guarded(self.store.find_many()).await?;
        Ok(records.into_iter().map(CommitteeToMemberRow::from).collect())
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<CommitteeToMember, ApiError> {
        guarded(self.store.find_unique(id))
            .await?
            .ok_or_else(|| ApiError::not_found("committee to member not found"))
    }

    pub async fn get_by_member_id(
        &self,
        member_id: Uuid,
    ) -> Result<Vec<CommitteeToMember>, ApiError> {
        guarded(self.store.find_by_member(member_id)).await
    }

    pub async fn get_by_committee_id(
        &self,
        committee_id: Uuid,
    ) -> Result<Vec<CommitteeToMember>, ApiError> {
        guarded(self.store.find_by_committee(committee_id)).await
    }

    pub async fn get_by_cadence_id(
        &self,
        cadence_id: Uuid,
    ) -> Result<Vec<CommitteeToMember>, ApiError> {
        guarded(self.store.find_by_cadence(cadence_id)).await
    }

    pub async fn create(
        &self,
        input: CommitteeToMemberDraft,
    ) -> Result<RecordId<Uuid>, ApiError> {
        let existing = guarded(self.store.find_link(
            input.member_id,
            input.committee_id,
            input.cadence_id,
        ))
        .await?;
        if existing.is_some() {
            return Err(ApiError::conflict("committee to member already exists"));
        }

        self.check_references(&input).await?;

        let created = guarded(self.store.create(input)).await?;
        Ok(RecordId { id: created.id })
    }

    pub async fn update(
        &self,
        id: Uuid,
        input: CommitteeToMemberDraft,
    ) -> Result<RecordId<Uuid>, ApiError> {
        guarded(self.store.find_unique(id))
            .await?
            .ok_or_else(|| ApiError::not_found("committee to member not found"))?;

        // re-validated even when unchanged from the stored values
        self.check_references(&input).await?;

        let updated = guarded(self.store.update(id, input)).await?;
        Ok(RecordId { id: updated.id })
    }

    pub async fn delete_by_id(&self, id: Uuid) -> Result<RecordId<Uuid>, ApiError> {
        guarded(self.store.find_unique(id))
            .await?
            .ok_or_else(|| ApiError::not_found("committee to member not found"))?;

        let deleted = guarded(self.store.delete(id)).await?;
        Ok(RecordId { id: deleted.id })
    }

    /// Bulk delete; ids that do not exist are silently skipped.
    pub async fn delete_array(&self, ids: Vec<Uuid>) -> Result<DeleteCount, ApiError> {
        let count = guarded(self.store.delete_many(ids)).await?;
        Ok(DeleteCount { count })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::AppState;
    use crate::testing::{committee_link_draft, seed_cadence, seed_committee, seed_member};

    #[tokio::test]
    async fn create_and_duplicate() {
        let state = AppState::in_memory();
        let member = seed_member(&state).await;
        let committee = seed_committee(&state).await;
        let cadence = seed_cadence(&state, 1).await;

        let created = state
            .committee_links
            .create(committee_link_draft(member.id, committee.id, cadence.id))
            .await
            .unwrap();

        let record = state.committee_links.get_by_id(created.id).await.unwrap();
        assert_eq!(record.committee_id, committee.id);

        let err = state
            .committee_links
            .create(committee_link_draft(member.id, committee.id, cadence.id))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Conflict(_)));
    }

    #[tokio::test]
    async fn validation_order_reports_member_first() {
        let state = AppState::in_memory();
        let cadence = seed_cadence(&state, 1).await;

        // member and committee both invalid: member wins
        let err = state
            .committee_links
            .create(committee_link_draft(Uuid::new_v4(), Uuid::new_v4(), cadence.id))
            .await
            .unwrap_err();
        assert_eq!(err.message(), "member not found");

        let member = seed_member(&state).await;
        let err = state
            .committee_links
            .create(committee_link_draft(member.id, Uuid::new_v4(), cadence.id))
            .await
            .unwrap_err();
        assert_eq!(err.message(), "committee not found");
    }

    #[tokio::test]
    async fn delete_by_id_is_strict() {
        let state = AppState::in_memory();
        let err = state
            .committee_links
            .delete_by_id(Uuid::new_v4())
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::NotFound(_)));
    }
}
