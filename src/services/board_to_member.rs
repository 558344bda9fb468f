use std::sync::Arc;
use uuid::Uuid;

use crate::error::ApiError;
use crate::models::{
    BoardToMember, BoardToMemberDraft, BoardToMemberRow, DeleteCount, RecordId,
};
use crate::services::{BoardService, CadenceService, MemberService};
use crate::store::{guarded, BoardToMemberStore};

/// Board membership per cadence.
///
/// Writes go through two gates: the (member, board, cadence) triple must not
/// already be linked, and every foreign key must pass its own service's
/// existence check. Checks run in a fixed order - member, then board, then
/// cadence - and the first failure is reported; remaining checks do not run.
pub struct BoardToMemberService {
    store: Arc<dyn BoardToMemberStore>,
    members: Arc<MemberService>,
    boards: Arc<BoardService>,
    cadences: Arc<CadenceService>,
}

impl BoardToMemberService {
    pub fn new(
        store: Arc<dyn BoardToMemberStore>,
        members: Arc<MemberService>,
        boards: Arc<BoardService>,
        cadences: Arc<CadenceService>,
    ) -> Self {
        Self {
            store,
            members,
            boards,
            cadences,
        }
    }

    async fn check_references(&self, draft: &BoardToMemberDraft) -> Result<(), ApiError> {
        self.members.check_by_id(draft.member_id).await?;
        self.boards.check_by_id(draft.board_id).await?;
        self.cadences.check_by_id(draft.cadence_id).await?;
        Ok(())
    }

    pub async fn get_list(&self) -> Result<Vec<BoardToMemberRow>, ApiError> {
        let records = guarded(self.store.find_many()).await?;
        Ok(records.into_iter().map(BoardToMemberRow::from).collect())
    }

    pub async fn get_by_id(&self, id: i64) -> Result<BoardToMember, ApiError> {
        guarded(self.store.find_unique(id))
            .await?
            .ok_or_else(|| ApiError::not_found("board to member not found"))
    }

    pub async fn get_by_member_id(&self, member_id: Uuid) -> Result<Vec<BoardToMember>, ApiError> {
        guarded(self.store.find_by_member(member_id)).await
    }

    pub async fn get_by_board_id(&self, board_id: i64) -> Result<Vec<BoardToMember>, ApiError> {
        guarded(self.store.find_by_board(board_id)).await
    }

    pub async fn get_by_cadence_id(
        &self,
        cadence_id: Uuid,
    ) -> Result<Vec<BoardToMember>, ApiError> {
        guarded(self.store.find_by_cadence(cadence_id)).await
    }

    pub async fn create(&self, input: BoardToMemberDraft) -> Result<RecordId<i64>, ApiError> {
        let existing = guarded(self.store.find_link(
            input.member_id,
            input.board_id,
            input.cadence_id,
        ))
        .await?;
        if existing.is_some() {
            return Err(ApiError::conflict("board to member already exists"));
        }

        self.check_references(&input).await?;

        let created = guarded(self.store.create(input)).await?;
        Ok(RecordId { id: created.id })
    }

    pub async fn update(
        &self,
        id: i64,
        input: BoardToMemberDraft,
    ) -> Result<RecordId<i64>, ApiError> {
        guarded(self.store.find_unique(id))
            .await?
            .ok_or_else(|| ApiError::not_found("board to member not found"))?;

        // re-validated even when unchanged from the stored values
        self.check_references(&input).await?;

        let updated = guarded(self.store.update(id, input)).await?;
        Ok(RecordId { id: updated.id })
    }

    pub async fn delete_by_id(&self, id: i64) -> Result<RecordId<i64>, ApiError> {
        guarded(self.store.find_unique(id))
            .await?
            .ok_or_else(|| ApiError::not_found("board to member not found"))?;

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
    use crate::testing::{board_link_draft, seed_board, seed_cadence, seed_member};

    #[tokio::test]
    async fn create_then_get_by_id_round_trips() {
        let state = AppState::in_memory();
        let member = seed_member(&state).await;
        let board = seed_board(&state).await;
        let cadence = seed_cadence(&state, 1).await;

        let created = state
            .board_links
            .create(board_link_draft(member.id, board.id, cadence.id))
            .await
            .unwrap();

        let record = state.board_links.get_by_id(created.id).await.unwrap();
        assert_eq!(record.member_id, member.id);
        assert_eq!(record.board_id, board.id);
        assert_eq!(record.cadence_id, cadence.id);
        assert!(!record.excluded);
        assert_eq!(record.excluded_date, None);
    }

    #[tokio::test]
    async fn duplicate_link_conflicts_without_writing() {
        let state = AppState::in_memory();
        let member = seed_member(&state).await;
        let board = seed_board(&state).await;
        let cadence = seed_cadence(&state, 1).await;

        state
            .board_links
            .create(board_link_draft(member.id, board.id, cadence.id))
            .await
            .unwrap();

        let err = state
            .board_links
            .create(board_link_draft(member.id, board.id, cadence.id))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Conflict(_)));

        // no second record was written
        assert_eq!(state.board_links.get_list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn same_member_and_board_in_other_cadence_is_allowed() {
        let state = AppState::in_memory();
        let member = seed_member(&state).await;
        let board = seed_board(&state).await;
        let first = seed_cadence(&state, 1).await;
        let second = seed_cadence(&state, 2).await;

        state
            .board_links
            .create(board_link_draft(member.id, board.id, first.id))
            .await
            .unwrap();
        state
            .board_links
            .create(board_link_draft(member.id, board.id, second.id))
            .await
            .unwrap();

        assert_eq!(state.board_links.get_list().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn missing_references_fail_in_member_board_cadence_order() {
        let state = AppState::in_memory();
        let member = seed_member(&state).await;
        let board = seed_board(&state).await;
        let cadence = seed_cadence(&state, 1).await;

        // member and board both missing: the member failure is the one reported
        let err = state
            .board_links
            .create(board_link_draft(Uuid::new_v4(), board.id + 100, cadence.id))
            .await
            .unwrap_err();
        assert_eq!(err.message(), "member not found");

        let err = state
            .board_links
            .create(board_link_draft(member.id, board.id + 100, cadence.id))
            .await
            .unwrap_err();
        assert_eq!(err.message(), "board not found");

        let err = state
            .board_links
            .create(board_link_draft(member.id, board.id, Uuid::new_v4()))
            .await
            .unwrap_err();
        assert_eq!(err.message(), "cadence not found");

        // nothing was written along the way
        assert!(state.board_links.get_list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_revalidates_references() {
        let state = AppState::in_memory();
        let member = seed_member(&state).await;
        let board = seed_board(&state).await;
        let cadence = seed_cadence(&state, 1).await;

        let created = state
            .board_links
            .create(board_link_draft(member.id, board.id, cadence.id))
            .await
            .unwrap();

        let mut draft = board_link_draft(member.id, board.id, cadence.id);
        draft.board_id = board.id + 100;
        let err = state.board_links.update(created.id, draft).await.unwrap_err();
        assert_eq!(err.message(), "board not found");

        // unchanged references pass and the replace succeeds
        let mut draft = board_link_draft(member.id, board.id, cadence.id);
        draft.excluded = true;
        let updated = state.board_links.update(created.id, draft).await.unwrap();
        assert_eq!(updated.id, created.id);
        assert!(state
            .board_links
            .get_by_id(created.id)
            .await
            .unwrap()
            .excluded);
    }

    #[tokio::test]
    async fn update_of_missing_record_is_not_found() {
        let state = AppState::in_memory();
        let member = seed_member(&state).await;
        let board = seed_board(&state).await;
        let cadence = seed_cadence(&state, 1).await;

        let err = state
            .board_links
            .update(404, board_link_draft(member.id, board.id, cadence.id))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::NotFound(_)));
    }

    #[tokio::test]
    async fn filtered_reads_return_empty_not_error() {
        let state = AppState::in_memory();
        assert!(state
            .board_links
            .get_by_member_id(Uuid::new_v4())
            .await
            .unwrap()
            .is_empty());
        assert!(state.board_links.get_by_board_id(9).await.unwrap().is_empty());
        assert!(state
            .board_links
            .get_by_cadence_id(Uuid::new_v4())
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn delete_is_strict_bulk_delete_is_not() {
        let state = AppState::in_memory();
        let member = seed_member(&state).await;
        let board = seed_board(&state).await;
        let cadence = seed_cadence(&state, 1).await;

        let created = state
            .board_links
            .create(board_link_draft(member.id, board.id, cadence.id))
            .await
            .unwrap();

        let err = state.board_links.delete_by_id(created.id + 1).await.unwrap_err();
        assert!(matches!(err, ApiError::NotFound(_)));

        let deleted = state
            .board_links
            .delete_array(vec![created.id, created.id + 1])
            .await
            .unwrap();
        assert_eq!(deleted.count, 1);

        // idempotent: the second pass removes nothing and does not error
        let deleted = state
            .board_links
            .delete_array(vec![created.id, created.id + 1])
            .await
            .unwrap();
        assert_eq!(deleted.count, 0);
    }
}
