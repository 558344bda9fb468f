use std::sync::Arc;
use uuid::Uuid;

use crate::error::ApiError;
use crate::models::{
    CoordinatorToMember, CoordinatorToMemberDraft, CoordinatorToMemberRow, DeleteCount, RecordId,
};
use crate::services::{CadenceService, CoordinatorService, MemberService};
use crate::store::{guarded, CoordinatorToMemberStore};

/// Coordinator assignment per cadence.
///
/// Same write discipline as the other association services: uniqueness of the
/// (member, coordinator, cadence) triple first, then ordered existence checks
/// member -> coordinator -> cadence, short-circuiting on the first failure.
pub struct CoordinatorToMemberService {
    store: Arc<dyn CoordinatorToMemberStore>,
    members: Arc<MemberService>,
    coordinators: Arc<CoordinatorService>,
    cadences: Arc<CadenceService>,
}

impl CoordinatorToMemberService {
    pub fn new(
        store: Arc<dyn CoordinatorToMemberStore>,
        members: Arc<MemberService>,
        coordinators: Arc<CoordinatorService>,
        cadences: Arc<CadenceService>,
    ) -> Self {
        Self {
            store,
            members,
            coordinators,
            cadences,
        }
    }

    async fn check_references(&self, draft: &CoordinatorToMemberDraft) -> Result<(), ApiError> {
        self.members.check_by_id(draft.member_id).await?;
        self.coordinators.check_by_id(draft.coordinator_id).await?;
        self.cadences.check_by_id(draft.cadence_id).await?;
        Ok(())
    }

    pub async fn get_list(&self) -> Result<Vec<CoordinatorToMemberRow>, ApiError> {
        let records = guarded(self.store.find_many()).await?;
        Ok(records
            .into_iter()
            .map(CoordinatorToMemberRow::from)
            .collect())
    }

    pub async fn get_by_id(&self, id: i64) -> Result<CoordinatorToMember, ApiError> {
        guarded(self.store.find_unique(id))
            .await?
            .ok_or_else(|| ApiError::not_found("coordinator to member not found"))
    }

    pub async fn get_by_member_id(
        &self,
        member_id: Uuid,
    ) -> Result<Vec<CoordinatorToMember>, ApiError> {
        guarded(self.store.find_by_member(member_id)).await
    }

    pub async fn get_by_coordinator_id(
        &self,
        coordinator_id: i64,
    ) -> Result<Vec<CoordinatorToMember>, ApiError> {
        guarded(self.store.find_by_coordinator(coordinator_id)).await
    }

    pub async fn get_by_cadence_id(
        &self,
        cadence_id: Uuid,
    ) -> Result<Vec<CoordinatorToMember>, ApiError> {
        guarded(self.store.find_by_cadence(cadence_id)).await
    }

    pub async fn create(
        &self,
        input: CoordinatorToMemberDraft,
    ) -> Result<RecordId<i64>, ApiError> {
        let existing = guarded(self.store.find_link(
            input.member_id,
            input.coordinator_id,
            input.cadence_id,
        ))
        .await?;
        if existing.is_some() {
            return Err(ApiError::conflict("coordinator to member already exists"));
        }

        self.check_references(&input).await?;

        let created = guarded(self.store.create(input)).await?;
        Ok(RecordId { id: created.id })
    }

    pub async fn update(
        &self,
        id: i64,
        input: CoordinatorToMemberDraft,
    ) -> Result<RecordId<i64>, ApiError> {
        guarded(self.store.find_unique(id))
            .await?
            .ok_or_else(|| ApiError::not_found("coordinator to member not found"))?;

        // re-validated even when unchanged from the stored values
        self.check_references(&input).await?;

        let updated = guarded(self.store.update(id, input)).await?;
        Ok(RecordId { id: updated.id })
    }

    pub async fn delete_by_id(&self, id: i64) -> Result<RecordId<i64>, ApiError> {
        guarded(self.store.find_unique(id))
            .await?
            .ok_or_else(|| ApiError::not_found("coordinator to member not found"))?;

        let deleted = guarded(self.store.delete(id)).await?;
        Ok(RecordId { id: deleted.id })
    }

    /// Bulk delete; ids that do not exist are silently skipped.
    pub async fn delete_array(&self, ids: Vec<i64>) -> Result<DeleteCount, ApiError> {
        let count = guarded(self.store.delete_many(ids)).await?;
        Ok(DeleteCount { count })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::AppState;
    use crate::testing::{coordinator_link_draft, seed_cadence, seed_coordinator, seed_member};

    #[tokio::test]
    async fn create_and_duplicate() {
        let state = AppState::in_memory();
        let member = seed_member(&state).await;
        let coordinator = seed_coordinator(&state).await;
        let cadence = seed_cadence(&state, 1).await;

        let created = state
            .coordinator_links
            .create(coordinator_link_draft(member.id, coordinator.id, cadence.id))
            .await
            .unwrap();

        let record = state.coordinator_links.get_by_id(created.id).await.unwrap();
        assert_eq!(record.coordinator_id, coordinator.id);

        let err = state
            .coordinator_links
            .create(coordinator_link_draft(member.id, coordinator.id, cadence.id))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Conflict(_)));
    }

    #[tokio::test]
    async fn validation_order_reports_member_first() {
        let state = AppState::in_memory();
        let cadence = seed_cadence(&state, 1).await;

        // member and coordinator both invalid: member wins
        let err = state
            .coordinator_links
            .create(coordinator_link_draft(Uuid::new_v4(), 77, cadence.id))
            .await
            .unwrap_err();
        assert_eq!(err.message(), "member not found");

        let member = seed_member(&state).await;
        let err = state
            .coordinator_links
            .create(coordinator_link_draft(member.id, 77, cadence.id))
            .await
            .unwrap_err();
        assert_eq!(err.message(), "coordinator not found");
    }

    #[tokio::test]
    async fn filtered_read_by_coordinator() {
        let state = AppState::in_memory();
        let member = seed_member(&state).await;
        let coordinator = seed_coordinator(&state).await;
        let cadence = seed_cadence(&state, 1).await;

        state
            .coordinator_links
            .create(coordinator_link_draft(member.id, coordinator.id, cadence.id))
            .await
            .unwrap();

        let rows = state
            .coordinator_links
            .get_by_coordinator_id(coordinator.id)
            .await
            .unwrap();
        assert_eq!(rows.len(), 1);
        assert!(state
            .coordinator_links
            .get_by_coordinator_id(coordinator.id + 1)
            .await
            .unwrap()
            .is_empty());
    }
}
