use uuid::Uuid;

use crate::error::ApiError;
use crate::models::{
    Board, BoardDraft, Committee, CommitteeDraft, Coordinator, CoordinatorDraft, DeleteCount,
    Translation, TranslationDraft,
};
use crate::store::{guarded, DynRecordStore};

/// CRUD service for a primary entity with no rules beyond field presence.
///
/// Besides the usual operations it exposes `check_by_id`, the existence-check
/// guard association services validate their foreign keys against. The guard
/// fails with NotFound naming the entity; callers discard the returned record.
pub struct EntityService<R, Id, Draft> {
    label: &'static str,
    store: DynRecordStore<R, Id, Draft>,
}

pub type BoardService = EntityService<Board, i64, BoardDraft>;
pub type CoordinatorService = EntityService<Coordinator, i64, CoordinatorDraft>;
pub type CommitteeService = EntityService<Committee, Uuid, CommitteeDraft>;
pub type TranslationService = EntityService<Translation, i64, TranslationDraft>;

impl<R, Id, Draft> EntityService<R, Id, Draft>
where
    R: Send + Sync + 'static,
    Id: Copy + Send + Sync + 'static,
    Draft: Send + Sync + 'static,
{
    pub fn new(label: &'static str, store: DynRecordStore<R, Id, Draft>) -> Self {
        Self { label, store }
    }

    pub async fn get_list(&self) -> Result<Vec<R>, ApiError> {
        guarded(self.store.find_many()).await
    }

    pub async fn get_by_id(&self, id: Id) -> Result<R, ApiError> {
        guarded(self.store.find_unique(id))
            .await?
            .ok_or_else(|| ApiError::not_found(format!("{} not found", self.label)))
    }

    /// Existence guard for association services.
    pub async fn check_by_id(&self, id: Id) -> Result<R, ApiError> {
        self.get_by_id(id).await
    }

    pub async fn create(&self, data: Draft) -> Result<R, ApiError> {
        guarded(self.store.create(data)).await
    }

    pub async fn update(&self, id: Id, data: Draft) -> Result<R, ApiError> {
        guarded(self.store.find_unique(id))
            .await?
            .ok_or_else(|| ApiError::not_found(format!("{} not found", self.label)))?;

        guarded(self.store.update(id, data)).await
    }

    pub async fn delete_by_id(&self, id: Id) -> Result<R, ApiError> {
        guarded(self.store.find_unique(id))
            .await?
            .ok_or_else(|| ApiError::not_found(format!("{} not found", self.label)))?;

        guarded(self.store.delete(id)).await
    }

    /// Bulk delete; ids that do not exist are silently skipped.
    pub async fn delete_array(&self, ids: Vec<Id>) -> Result<DeleteCount, ApiError> {
        let count = guarded(self.store.delete_many(ids)).await?;
        Ok(DeleteCount { count })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::MemStore;
    use std::sync::Arc;

    fn boards() -> BoardService {
        EntityService::new("board", Arc::new(MemStore::<Board>::new()))
    }

    #[tokio::test]
    async fn get_by_id_names_the_entity() {
        let service = boards();
        let err = service.get_by_id(7).await.unwrap_err();
        assert!(matches!(err, ApiError::NotFound(_)));
        assert_eq!(err.message(), "board not found");
    }

    #[tokio::test]
    async fn create_then_check_by_id() {
        let service = boards();
        let board = service
            .create(BoardDraft {
                name: "outreach".to_string(),
            })
            .await
            .unwrap();

        let checked = service.check_by_id(board.id).await.unwrap();
        assert_eq!(checked.id, board.id);
        assert_eq!(checked.name, "outreach");
    }

    #[tokio::test]
    async fn update_requires_existing_record() {
        let service = boards();
        let err = service
            .update(
                42,
                BoardDraft {
                    name: "nope".to_string(),
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::NotFound(_)));
    }

    #[tokio::test]
    async fn bulk_delete_skips_missing_ids() {
        let service = boards();
        let a = service
            .create(BoardDraft {
                name: "a".to_string(),
            })
            .await
            .unwrap();
        let b = service
            .create(BoardDraft {
                name: "b".to_string(),
            })
            .await
            .unwrap();

        let deleted = service.delete_array(vec![a.id, 999, b.id]).await.unwrap();
        assert_eq!(deleted.count, 2);

        // second run removes nothing and does not error
        let deleted = service.delete_array(vec![a.id, 999, b.id]).await.unwrap();
        assert_eq!(deleted.count, 0);
    }
}
