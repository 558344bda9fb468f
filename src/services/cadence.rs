use std::sync::Arc;
use uuid::Uuid;

use crate::error::ApiError;
use crate::models::{Cadence, CadenceDraft, DeleteCount};
use crate::store::{guarded, CadenceStore};

/// Cadence management. Cadence numbers are unique; deletion is bulk-only.
pub struct CadenceService {
    store: Arc<dyn CadenceStore>,
}

impl CadenceService {
    pub fn new(store: Arc<dyn CadenceStore>) -> Self {
        Self { store }
    }

    pub async fn get_list(&self) -> Result<Vec<Cadence>, ApiError> {
        guarded(self.store.find_many()).await
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Cadence, ApiError> {
        guarded(self.store.find_unique(id))
            .await?
            .ok_or_else(|| ApiError::not_found("cadence not found"))
    }

    /// Existence guard for association services.
    pub async fn check_by_id(&self, id: Uuid) -> Result<Cadence, ApiError> {
        self.get_by_id(id).await
    }

    pub async fn create(&self, input: CadenceDraft) -> Result<Cadence, ApiError> {
        if guarded(self.store.find_by_number(input.number)).await?.is_some() {
            return Err(ApiError::conflict("cadence already exists"));
        }

        guarded(self.store.create(input)).await
    }

    pub async fn update(&self, id: Uuid, input: CadenceDraft) -> Result<Cadence, ApiError> {
        guarded(self.store.find_unique(id))
            .await?
            .ok_or_else(|| ApiError::not_found("cadence not found"))?;

        // the number may stay with its own record, but not move to another
        if let Some(other) = guarded(self.store.find_by_number(input.number)).await? {
            if other.id != id {
                return Err(ApiError::conflict("cadence already exists"));
            }
        }

        guarded(self.store.update(id, input)).await
    }

    /// Bulk delete; ids that do not exist are silently skipped.
    pub async fn delete(&self, ids: Vec<Uuid>) -> Result<DeleteCount, ApiError> {
        let count = guarded(self.store.delete_many(ids)).await?;
        Ok(DeleteCount { count })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::MemStore;
    use crate::testing::cadence_draft;

    fn cadences() -> CadenceService {
        CadenceService::new(Arc::new(MemStore::<Cadence>::new()))
    }

    #[tokio::test]
    async fn duplicate_number_conflicts() {
        let service = cadences();
        service.create(cadence_draft(12)).await.unwrap();

        let err = service.create(cadence_draft(12)).await.unwrap_err();
        assert!(matches!(err, ApiError::Conflict(_)));
    }

    #[tokio::test]
    async fn update_keeps_own_number() {
        let service = cadences();
        let cadence = service.create(cadence_draft(12)).await.unwrap();

        let mut draft = cadence_draft(12);
        draft.is_end = true;
        let updated = service.update(cadence.id, draft).await.unwrap();
        assert!(updated.is_end);
    }

    #[tokio::test]
    async fn update_rejects_taken_number() {
        let service = cadences();
        service.create(cadence_draft(12)).await.unwrap();
        let other = service.create(cadence_draft(13)).await.unwrap();

        let err = service.update(other.id, cadence_draft(12)).await.unwrap_err();
        assert!(matches!(err, ApiError::Conflict(_)));
    }

    #[tokio::test]
    async fn bulk_delete_counts_only_removed() {
        let service = cadences();
        let cadence = service.create(cadence_draft(12)).await.unwrap();

        let deleted = service
            .delete(vec![cadence.id, Uuid::new_v4()])
            .await
            .unwrap();
        assert_eq!(deleted.count, 1);
    }
}
