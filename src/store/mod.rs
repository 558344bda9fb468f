//! Record Store seam.
//!
//! Services talk to persistence exclusively through these traits. Two
//! implementations exist: [`pg`] over a Postgres pool and [`memory`] for
//! tests and local runs. Application-level invariants (uniqueness before
//! create, referential checks) are enforced by the services issuing reads
//! before writes; the store's own constraints are a backstop.

pub mod memory;
pub mod pg;

use async_trait::async_trait;
use std::future::Future;
use thiserror::Error;
use uuid::Uuid;

use crate::error::ApiError;
use crate::models::{
    BoardToMember, BoardToMemberDraft, Cadence, CadenceDraft, CommitteeToMember,
    CommitteeToMemberDraft, CoordinatorToMember, CoordinatorToMemberDraft, Member, MemberDraft,
};

/// Errors from a record store implementation
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("no rows matched the given filter")]
    RowNotFound,

    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

/// Wraps a store call. Success passes through unchanged; any underlying
/// failure is logged with its original cause and re-raised as an opaque
/// internal error, so callers can only distinguish it from the
/// application-level NotFound/Conflict errors raised before the store is
/// ever reached.
pub async fn guarded<T>(op: impl Future<Output = Result<T, StoreError>>) -> Result<T, ApiError> {
    match op.await {
        Ok(value) => Ok(value),
        Err(err) => {
            tracing::error!(error = %err, "record store call failed");
            Err(ApiError::internal_server_error("DB error"))
        }
    }
}

/// CRUD contract every entity store provides, parameterized by the record
/// type, its id family and its create/update payload.
///
/// `update` and `delete` fail with [`StoreError::RowNotFound`] when the id
/// does not exist; `delete_many` never fails on zero matches and reports the
/// number of rows actually removed.
#[async_trait]
pub trait RecordStore<R, Id, Draft>: Send + Sync {
    async fn find_unique(&self, id: Id) -> Result<Option<R>, StoreError>;

    async fn find_many(&self) -> Result<Vec<R>, StoreError>;

    async fn create(&self, data: Draft) -> Result<R, StoreError>;

    /// Full replace of the mutable fields, not a partial merge.
    async fn update(&self, id: Id, data: Draft) -> Result<R, StoreError>;

    async fn delete(&self, id: Id) -> Result<R, StoreError>;

    async fn delete_many(&self, ids: Vec<Id>) -> Result<u64, StoreError>;
}

#[async_trait]
pub trait MemberStore: RecordStore<Member, Uuid, MemberDraft> {
    async fn find_by_email(&self, email: &str) -> Result<Option<Member>, StoreError>;
}

#[async_trait]
pub trait CadenceStore: RecordStore<Cadence, Uuid, CadenceDraft> {
    async fn find_by_number(&self, number: i32) -> Result<Option<Cadence>, StoreError>;
}

/// Shared handle type for stores without entity-specific lookups
/// (boards, coordinators, committees, translations).
pub type DynRecordStore<R, Id, Draft> = std::sync::Arc<dyn RecordStore<R, Id, Draft>>;

#[async_trait]
pub trait BoardToMemberStore: RecordStore<BoardToMember, i64, BoardToMemberDraft> {
    /// First live record matching the association triple, if any.
    async fn find_link(
        &self,
        member_id: Uuid,
        board_id: i64,
        cadence_id: Uuid,
    ) -> Result<Option<BoardToMember>, StoreError>;

    async fn find_by_member(&self, member_id: Uuid) -> Result<Vec<BoardToMember>, StoreError>;

    async fn find_by_board(&self, board_id: i64) -> Result<Vec<BoardToMember>, StoreError>;

    async fn find_by_cadence(&self, cadence_id: Uuid) -> Result<Vec<BoardToMember>, StoreError>;
}

#[async_trait]
pub trait CoordinatorToMemberStore:
    RecordStore<CoordinatorToMember, i64, CoordinatorToMemberDraft>
{
    async fn find_link(
        &self,
        member_id: Uuid,
        coordinator_id: i64,
        cadence_id: Uuid,
    ) -> Result<Option<CoordinatorToMember>, StoreError>;

    async fn find_by_member(&self, member_id: Uuid)
        -> Result<Vec<CoordinatorToMember>, StoreError>;

    async fn find_by_coordinator(
        &self,
        coordinator_id: i64,
    ) -> Result<Vec<CoordinatorToMember>, StoreError>;

    async fn find_by_cadence(
        &self,
        cadence_id: Uuid,
    ) -> Result<Vec<CoordinatorToMember>, StoreError>;
}

#[async_trait]
pub trait CommitteeToMemberStore:
    RecordStore<CommitteeToMember, Uuid, CommitteeToMemberDraft>
{
    async fn find_link(
        &self,
        member_id: Uuid,
        committee_id: Uuid,
        cadence_id: Uuid,
    ) -> Result<Option<CommitteeToMember>, StoreError>;

    async fn find_by_member(&self, member_id: Uuid) -> Result<Vec<CommitteeToMember>, StoreError>;

    async fn find_by_committee(
        &self,
        committee_id: Uuid,
    ) -> Result<Vec<CommitteeToMember>, StoreError>;

    async fn find_by_cadence(&self, cadence_id: Uuid)
        -> Result<Vec<CommitteeToMember>, StoreError>;
}
