//! In-memory record store.
//!
//! Keeps rows in insertion order behind an async RwLock. Used by the test
//! suite and for database-less local runs; the per-entity id family (v4 UUID
//! vs auto-increment integer) is declared through [`FreshId`].

use async_trait::async_trait;
use chrono::Utc;
use std::sync::atomic::{AtomicI64, Ordering};
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{
    BoardToMemberStore, CadenceStore, CommitteeToMemberStore, CoordinatorToMemberStore,
    MemberStore, RecordStore, StoreError,
};
use crate::models::{
    Board, BoardDraft, BoardToMember, BoardToMemberDraft, Cadence, CadenceDraft, Committee,
    CommitteeDraft, CommitteeToMember, CommitteeToMemberDraft, Coordinator, CoordinatorDraft,
    CoordinatorToMember, CoordinatorToMemberDraft, Member, MemberDraft, Translation,
    TranslationDraft,
};

/// Id families: serial integers draw from the store's counter, UUIDs are
/// generated fresh.
pub trait FreshId: Sized {
    fn fresh(seq: &AtomicI64) -> Self;
}

impl FreshId for i64 {
    fn fresh(seq: &AtomicI64) -> Self {
        seq.fetch_add(1, Ordering::Relaxed)
    }
}

impl FreshId for Uuid {
    fn fresh(_seq: &AtomicI64) -> Self {
        Uuid::new_v4()
    }
}

/// Glue between a record type and the generic store: id access, building a
/// row from a draft, and the full-replace update.
pub trait MemRecord: Clone + Send + Sync + 'static {
    type Id: FreshId + Copy + PartialEq + Send + Sync + 'static;
    type Draft: Send + 'static;

    fn id(&self) -> Self::Id;

    fn materialize(id: Self::Id, draft: Self::Draft) -> Self;

    /// Replace all mutable fields; id and creation timestamp are kept.
    fn overwrite(&mut self, draft: Self::Draft);
}

pub struct MemStore<R: MemRecord> {
    rows: RwLock<Vec<R>>,
    seq: AtomicI64,
}

impl<R: MemRecord> MemStore<R> {
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(Vec::new()),
            seq: AtomicI64::new(1),
        }
    }
}

impl<R: MemRecord> Default for MemStore<R> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<R: MemRecord> RecordStore<R, R::Id, R::Draft> for MemStore<R> {
    async fn find_unique(&self, id: R::Id) -> Result<Option<R>, StoreError> {
        let rows = self.rows.read().await;
        Ok(rows.iter().find(|row| row.id() == id).cloned())
    }

    async fn find_many(&self) -> Result<Vec<R>, StoreError> {
        let rows = self.rows.read().await;
        Ok(rows.clone())
    }

    async fn create(&self, data: R::Draft) -> Result<R, StoreError> {
        let record = R::materialize(R::Id::fresh(&self.seq), data);
        let mut rows = self.rows.write().await;
        rows.push(record.clone());
        Ok(record)
    }

    async fn update(&self, id: R::Id, data: R::Draft) -> Result<R, StoreError> {
        let mut rows = self.rows.write().await;
        match rows.iter_mut().find(|row| row.id() == id) {
            Some(row) => {
                row.overwrite(data);
                Ok(row.clone())
            }
            None => Err(StoreError::RowNotFound),
        }
    }

    async fn delete(&self, id: R::Id) -> Result<R, StoreError> {
        let mut rows = self.rows.write().await;
        match rows.iter().position(|row| row.id() == id) {
            Some(index) => Ok(rows.remove(index)),
            None => Err(StoreError::RowNotFound),
        }
    }

    async fn delete_many(&self, ids: Vec<R::Id>) -> Result<u64, StoreError> {
        let mut rows = self.rows.write().await;
        let before = rows.len();
        rows.retain(|row| !ids.contains(&row.id()));
        Ok((before - rows.len()) as u64)
    }
}

impl MemRecord for Member {
    type Id = Uuid;
    type Draft = MemberDraft;

    fn id(&self) -> Uuid {
        self.id
    }

    fn materialize(id: Uuid, draft: MemberDraft) -> Self {
        Self {
            id,
            email: draft.email,
            best_email: draft.best_email,
            full_name: draft.full_name,
            middle_name: draft.middle_name,
            surname: draft.surname,
            birthday: draft.birthday,
            faculty: draft.faculty,
            group_name: draft.group_name,
            clothing_size: draft.clothing_size,
            home_address: draft.home_address,
            created_at: Utc::now(),
        }
    }

    fn overwrite(&mut self, draft: MemberDraft) {
        self.email = draft.email;
        self.best_email = draft.best_email;
        self.full_name = draft.full_name;
        self.middle_name = draft.middle_name;
        self.surname = draft.surname;
        self.birthday = draft.birthday;
        self.faculty = draft.faculty;
        self.group_name = draft.group_name;
        self.clothing_size = draft.clothing_size;
        self.home_address = draft.home_address;
    }
}

#[async_trait]
impl MemberStore for MemStore<Member> {
    async fn find_by_email(&self, email: &str) -> Result<Option<Member>, StoreError> {
        let rows = self.rows.read().await;
        Ok(rows.iter().find(|row| row.email == email).cloned())
    }
}

impl MemRecord for Cadence {
    type Id = Uuid;
    type Draft = CadenceDraft;

    fn id(&self) -> Uuid {
        self.id
    }

    fn materialize(id: Uuid, draft: CadenceDraft) -> Self {
        let now = Utc::now();
        Self {
            id,
            number: draft.number,
            is_end: draft.is_end,
            start_date: draft.start_date,
            end_date: draft.end_date,
            created_at: now,
            updated_at: now,
        }
    }

    fn overwrite(&mut self, draft: CadenceDraft) {
        self.number = draft.number;
        self.is_end = draft.is_end;
        self.start_date = draft.start_date;
        self.end_date = draft.end_date;
        self.updated_at = Utc::now();
    }
}

#[async_trait]
impl CadenceStore for MemStore<Cadence> {
    async fn find_by_number(&self, number: i32) -> Result<Option<Cadence>, StoreError> {
        let rows = self.rows.read().await;
        Ok(rows.iter().find(|row| row.number == number).cloned())
    }
}

impl MemRecord for Board {
    type Id = i64;
    type Draft = BoardDraft;

    fn id(&self) -> i64 {
        self.id
    }

    fn materialize(id: i64, draft: BoardDraft) -> Self {
        Self {
            id,
            name: draft.name,
            created_at: Utc::now(),
        }
    }

    fn overwrite(&mut self, draft: BoardDraft) {
        self.name = draft.name;
    }
}

impl MemRecord for Coordinator {
    type Id = i64;
    type Draft = CoordinatorDraft;

    fn id(&self) -> i64 {
        self.id
    }

    fn materialize(id: i64, draft: CoordinatorDraft) -> Self {
        Self {
            id,
            name: draft.name,
            created_at: Utc::now(),
        }
    }

    fn overwrite(&mut self, draft: CoordinatorDraft) {
        self.name = draft.name;
    }
}

impl MemRecord for Committee {
    type Id = Uuid;
    type Draft = CommitteeDraft;

    fn id(&self) -> Uuid {
        self.id
    }

    fn materialize(id: Uuid, draft: CommitteeDraft) -> Self {
        Self {
            id,
            name: draft.name,
            created_at: Utc::now(),
        }
    }

    fn overwrite(&mut self, draft: CommitteeDraft) {
        self.name = draft.name;
    }
}

impl MemRecord for Translation {
    type Id = i64;
    type Draft = TranslationDraft;

    fn id(&self) -> i64 {
        self.id
    }

    fn materialize(id: i64, draft: TranslationDraft) -> Self {
        Self {
            id,
            key: draft.key,
            lang: draft.lang,
            value: draft.value,
        }
    }

    fn overwrite(&mut self, draft: TranslationDraft) {
        self.key = draft.key;
        self.lang = draft.lang;
        self.value = draft.value;
    }
}

impl MemRecord for BoardToMember {
    type Id = i64;
    type Draft = BoardToMemberDraft;

    fn id(&self) -> i64 {
        self.id
    }

    fn materialize(id: i64, draft: BoardToMemberDraft) -> Self {
        Self {
            id,
            member_id: draft.member_id,
            board_id: draft.board_id,
            cadence_id: draft.cadence_id,
            excluded: draft.excluded,
            excluded_date: draft.excluded_date,
            created_at: Utc::now(),
        }
    }

    fn overwrite(&mut self, draft: BoardToMemberDraft) {
        self.member_id = draft.member_id;
        self.board_id = draft.board_id;
        self.cadence_id = draft.cadence_id;
        self.excluded = draft.excluded;
        self.excluded_date = draft.excluded_date;
    }
}

#[async_trait]
impl BoardToMemberStore for MemStore<BoardToMember> {
    async fn find_link(
        &self,
        member_id: Uuid,
        board_id: i64,
        cadence_id: Uuid,
    ) -> Result<Option<BoardToMember>, StoreError> {
        let rows = self.rows.read().await;
        Ok(rows
            .iter()
            .find(|row| {
                row.member_id == member_id
                    && row.board_id == board_id
                    && row.cadence_id == cadence_id
            })
            .cloned())
    }

    async fn find_by_member(&self, member_id: Uuid) -> Result<Vec<BoardToMember>, StoreError> {
        let rows = self.rows.read().await;
        Ok(rows
            .iter()
            .filter(|row| row.member_id == member_id)
            .cloned()
            .collect())
    }

    async fn find_by_board(&self, board_id: i64) -> Result<Vec<BoardToMember>, StoreError> {
        let rows = self.rows.read().await;
        Ok(rows
            .iter()
            .filter(|row| row.board_id == board_id)
            .cloned()
            .collect())
    }

    async fn find_by_cadence(&self, cadence_id: Uuid) -> Result<Vec<BoardToMember>, StoreError> {
        let rows = self.rows.read().await;
        Ok(rows
            .iter()
            .filter(|row| row.cadence_id == cadence_id)
            .cloned()
            .collect())
    }
}

impl MemRecord for CoordinatorToMember {
    type Id = i64;
    type Draft = CoordinatorToMemberDraft;

    fn id(&self) -> i64 {
        self.id
    }

    fn materialize(id: i64, draft: CoordinatorToMemberDraft) -> Self {
        Self {
            id,
            member_id: draft.member_id,
            coordinator_id: draft.coordinator_id,
            cadence_id: draft.cadence_id,
            excluded: draft.excluded,
            excluded_date: draft.excluded_date,
            created_at: Utc::now(),
        }
    }

    fn overwrite(&mut self, draft: CoordinatorToMemberDraft) {
        self.member_id = draft.member_id;
        self.coordinator_id = draft.coordinator_id;
        self.cadence_id = draft.cadence_id;
        self.excluded = draft.excluded;
        self.excluded_date = draft.excluded_date;
    }
}

#[async_trait]
impl CoordinatorToMemberStore for MemStore<CoordinatorToMember> {
    async fn find_link(
        &self,
        member_id: Uuid,
        coordinator_id: i64,
        cadence_id: Uuid,
    ) -> Result<Option<CoordinatorToMember>, StoreError> {
        let rows = self.rows.read().await;
        Ok(rows
            .iter()
            .find(|row| {
                row.member_id == member_id
                    && row.coordinator_id == coordinator_id
                    && row.cadence_id == cadence_id
            })
            .cloned())
    }

    async fn find_by_member(
        &self,
        member_id: Uuid,
    ) -> Result<Vec<CoordinatorToMember>, StoreError> {
        let rows = self.rows.read().await;
        Ok(rows
            .iter()
            .filter(|row| row.member_id == member_id)
            .cloned()
            .collect())
    }

    async fn find_by_coordinator(
        &self,
        coordinator_id: i64,
    ) -> Result<Vec<CoordinatorToMember>, StoreError> {
        let rows = self.rows.read().await;
        Ok(rows
            .iter()
            .filter(|row| row.coordinator_id == coordinator_id)
            .cloned()
            .collect())
    }

    async fn find_by_cadence(
        &self,
        cadence_id: Uuid,
    ) -> Result<Vec<CoordinatorToMember>, StoreError> {
        let rows = self.rows.read().await;
        Ok(rows
            .iter()
            .filter(|row| row.cadence_id == cadence_id)
            .cloned()
            .collect())
    }
}

impl MemRecord for CommitteeToMember {
    type Id = Uuid;
    type Draft = CommitteeToMemberDraft;

    fn id(&self) -> Uuid {
        self.id
    }

    fn materialize(id: Uuid, draft: CommitteeToMemberDraft) -> Self {
        Self {
            id,
            member_id: draft.member_id,
            committee_id: draft.committee_id,
            cadence_id: draft.cadence_id,
            excluded: draft.excluded,
            excluded_date: draft.excluded_date,
            created_at: Utc::now(),
        }
    }

    fn overwrite(&mut self, draft: CommitteeToMemberDraft) {
        self.member_id = draft.member_id;
        self.committee_id = draft.committee_id;
        self.cadence_id = draft.cadence_id;
        self.excluded = draft.excluded;
        self.excluded_date = draft.excluded_date;
    }
}

#[async_trait]
impl CommitteeToMemberStore for MemStore<CommitteeToMember> {
    async fn find_link(
        &self,
        member_id: Uuid,
        committee_id: Uuid,
        cadence_id: Uuid,
    ) -> Result<Option<CommitteeToMember>, StoreError> {
        let rows = self.rows.read().await;
        Ok(rows
            .iter()
            .find(|row| {
                row.member_id == member_id
                    && row.committee_id == committee_id
                    && row.cadence_id == cadence_id
            })
            .cloned())
    }

    async fn find_by_member(&self, member_id: Uuid) -> Result<Vec<CommitteeToMember>, StoreError> {
        let rows = self.rows.read().await;
        Ok(rows
            .iter()
            .filter(|row| row.member_id == member_id)
            .cloned()
            .collect())
    }

    async fn find_by_committee(
        &self,
        committee_id: Uuid,
    ) -> Result<Vec<CommitteeToMember>, StoreError> {
        let rows = self.rows.read().await;
        Ok(rows
            .iter()
            .filter(|row| row.committee_id == committee_id)
            .cloned()
            .collect())
    }

    async fn find_by_cadence(
        &self,
        cadence_id: Uuid,
    ) -> Result<Vec<CommitteeToMember>, StoreError> {
        let rows = self.rows.read().await;
        Ok(rows
            .iter()
            .filter(|row| row.cadence_id == cadence_id)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_draft(name: &str) -> BoardDraft {
        BoardDraft {
            name: name.to_string(),
        }
    }

    #[tokio::test]
    async fn serial_ids_increment() {
        let store = MemStore::<Board>::new();
        let first = store.create(board_draft("hr")).await.unwrap();
        let second = store.create(board_draft("it")).await.unwrap();
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[tokio::test]
    async fn uuid_ids_are_distinct() {
        let store = MemStore::<Committee>::new();
        let a = store
            .create(CommitteeDraft {
                name: "events".to_string(),
            })
            .await
            .unwrap();
        let b = store
            .create(CommitteeDraft {
                name: "design".to_string(),
            })
            .await
            .unwrap();
        assert_ne!(a.id, b.id);
    }

    #[tokio::test]
    async fn delete_is_strict_delete_many_is_not() {
        let store = MemStore::<Board>::new();
        let board = store.create(board_draft("hr")).await.unwrap();

        assert!(matches!(
            store.delete(board.id + 100).await,
            Err(StoreError::RowNotFound)
        ));

        let count = store.delete_many(vec![board.id, board.id + 100]).await.unwrap();
        assert_eq!(count, 1);
        let count = store.delete_many(vec![board.id]).await.unwrap();
        assert_eq!(count, 0);
    }

    #[tokio::test]
    async fn update_replaces_fields_and_keeps_id() {
        let store = MemStore::<Board>::new();
        let board = store.create(board_draft("hr")).await.unwrap();
        let updated = store.update(board.id, board_draft("people")).await.unwrap();
        assert_eq!(updated.id, board.id);
        assert_eq!(updated.name, "people");
    }
}
