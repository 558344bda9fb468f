use std::sync::Arc;
use uuid::Uuid;

use crate::error::ApiError;
use crate::models::{DeletedIds, Member, MemberDraft};
use crate::store::{guarded, MemberStore};

/// Member management. Emails are unique and stored lowercased along with the
/// name/faculty/group fields; clothing sizes are stored uppercased.
pub struct MemberService {
    store: Arc<dyn MemberStore>,
}

impl MemberService {
    pub fn new(store: Arc<dyn MemberStore>) -> Self {
        Self { store }
    }

    fn normalize(draft: &mut MemberDraft) {
        draft.email = draft.email.to_lowercase();
        if let Some(best_email) = &draft.best_email {
            draft.best_email = Some(best_email.to_lowercase());
        }
        draft.full_name = draft.full_name.to_lowercase();
        draft.middle_name = draft.middle_name.to_lowercase();
        draft.surname = draft.surname.to_lowercase();
        draft.faculty = draft.faculty.to_lowercase();
        draft.group_name = draft.group_name.to_lowercase();
        if let Some(size) = &draft.clothing_size {
            draft.clothing_size = Some(size.to_uppercase());
        }
        if let Some(address) = &draft.home_address {
            draft.home_address = Some(address.to_lowercase());
        }
    }

    pub async fn get_list(&self) -> Result<Vec<Member>, ApiError> {
        guarded(self.store.find_many()).await
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Member, ApiError> {
        guarded(self.store.find_unique(id))
            .await?
            .ok_or_else(|| ApiError::not_found("member not found"))
    }

    /// Existence guard for association services.
    pub async fn check_by_id(&self, id: Uuid) -> Result<Member, ApiError> {
        self.get_by_id(id).await
    }

    pub async fn create(&self, mut input: MemberDraft) -> Result<Member, ApiError> {
        Self::normalize(&mut input);

        if guarded(self.store.find_by_email(&input.email)).await?.is_some() {
            return Err(ApiError::conflict("member already exists"));
        }

        guarded(self.store.create(input)).await
    }

    pub async fn update(&self, id: Uuid, mut input: MemberDraft) -> Result<Member, ApiError> {
        guarded(self.store.find_unique(id))
            .await?
            .ok_or_else(|| ApiError::not_found("member not found"))?;

        Self::normalize(&mut input);

        if let Some(other) = guarded(self.store.find_by_email(&input.email)).await? {
            if other.id != id {
                return Err(ApiError::conflict("member already exists"));
            }
        }

        guarded(self.store.update(id, input)).await
    }

    pub async fn delete_by_id(&self, id: Uuid) -> Result<DeletedIds<Uuid>, ApiError> {
        guarded(self.store.find_unique(id))
            .await?
            .ok_or_else(|| ApiError::not_found("member not found"))?;

        let member = guarded(self.store.delete(id)).await?;
        Ok(DeletedIds {
            id: vec![Some(member.id)],
        })
    }

    /// Bulk delete, processed sequentially. A failed id does not abort the
    /// rest of the batch; the reply holds one entry per input id, null where
    /// the deletion failed, so callers can correlate failures by position.
    pub async fn delete_array_by_id(&self, ids: Vec<Uuid>) -> Result<DeletedIds<Uuid>, ApiError> {
        let mut deleted = Vec::with_capacity(ids.len());

        for id in ids {
            match self.store.delete(id).await {
                Ok(member) => deleted.push(Some(member.id)),
                Err(err) => {
                    tracing::error!(error = %err, member_id = %id, "failed to delete member");
                    deleted.push(None);
                }
            }
        }

        Ok(DeletedIds { id: deleted })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::MemStore;
    use crate::testing::member_draft;

    fn members() -> MemberService {
        MemberService::new(Arc::new(MemStore::<Member>::new()))
    }

    #[tokio::test]
    async fn create_normalizes_fields() {
        let service = members();
        let mut draft = member_draft("Ada.Lovelace@Example.COM");
        draft.full_name = "Ada".to_string();
        draft.clothing_size = Some("m".to_string());

        let member = service.create(draft).await.unwrap();
        assert_eq!(member.email, "ada.lovelace@example.com");
        assert_eq!(member.full_name, "ada");
        assert_eq!(member.clothing_size.as_deref(), Some("M"));
    }

    #[tokio::test]
    async fn duplicate_email_conflicts() {
        let service = members();
        service.create(member_draft("ada@example.com")).await.unwrap();

        let err = service
            .create(member_draft("ADA@example.com"))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Conflict(_)));
    }

    #[tokio::test]
    async fn update_allows_own_email_but_not_foreign() {
        let service = members();
        let ada = service.create(member_draft("ada@example.com")).await.unwrap();
        let grace = service
            .create(member_draft("grace@example.com"))
            .await
            .unwrap();

        // keeping your own email is fine
        service
            .update(ada.id, member_draft("ada@example.com"))
            .await
            .unwrap();

        // taking someone else's is not
        let err = service
            .update(grace.id, member_draft("ada@example.com"))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Conflict(_)));
    }

    #[tokio::test]
    async fn delete_array_reports_failures_by_position() {
        let service = members();
        let a = service.create(member_draft("a@example.com")).await.unwrap();
        let c = service.create(member_draft("c@example.com")).await.unwrap();
        let missing = Uuid::new_v4();

        let result = service
            .delete_array_by_id(vec![a.id, missing, c.id])
            .await
            .unwrap();
        assert_eq!(result.id, vec![Some(a.id), None, Some(c.id)]);
    }

    #[tokio::test]
    async fn delete_array_is_idempotent() {
        let service = members();
        let a = service.create(member_draft("a@example.com")).await.unwrap();

        let first = service.delete_array_by_id(vec![a.id]).await.unwrap();
        assert_eq!(first.id, vec![Some(a.id)]);

        let second = service.delete_array_by_id(vec![a.id]).await.unwrap();
        assert_eq!(second.id, vec![None]);
    }

    #[tokio::test]
    async fn single_delete_is_strict() {
        let service = members();
        let err = service.delete_by_id(Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, ApiError::NotFound(_)));
    }
}
