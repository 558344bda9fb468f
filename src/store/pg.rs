//! Postgres-backed record stores.
//!
//! One store struct per entity over a shared [`PgPool`]. SQL is plain strings
//! bound through `sqlx::query_as`, so the crate builds without a live
//! database. UUID-family ids are generated application-side; serial ids are
//! assigned by the database.

use async_trait::async_trait;
use sqlx::PgPool;
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

/// Surface a missing row from `fetch_one` as the store-level variant.
fn row_not_found(err: sqlx::Error) -> StoreError {
    match err {
        sqlx::Error::RowNotFound => StoreError::RowNotFound,
        other => StoreError::Sqlx(other),
    }
}

pub struct PgMemberStore {
    pool: PgPool,
}

impl PgMemberStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RecordStore<Member, Uuid, MemberDraft> for PgMemberStore {
    async fn find_unique(&self, id: Uuid) -> Result<Option<Member>, StoreError> {
        let row = sqlx::query_as::<_, Member>("SELECT * FROM members WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn find_many(&self) -> Result<Vec<Member>, StoreError> {
        let rows = sqlx::query_as::<_, Member>("SELECT * FROM members ORDER BY created_at")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn create(&self, data: MemberDraft) -> Result<Member, StoreError> {
        let row = sqlx::query_as::<_, Member>(
            "INSERT INTO members \
             (id, email, best_email, full_name, middle_name, surname, birthday, faculty, group_name, clothing_size, home_address) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11) \
             RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(data.email)
        .bind(data.best_email)
        .bind(data.full_name)
        .bind(data.middle_name)
        .bind(data.surname)
        .bind(data.birthday)
        .bind(data.faculty)
        .bind(data.group_name)
        .bind(data.clothing_size)
        .bind(data.home_address)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn update(&self, id: Uuid, data: MemberDraft) -> Result<Member, StoreError> {
        let row = sqlx::query_as::<_, Member>(
            "UPDATE members SET \
             email = $2, best_email = $3, full_name = $4, middle_name = $5, surname = $6, \
             birthday = $7, faculty = $8, group_name = $9, clothing_size = $10, home_address = $11 \
             WHERE id = $1 \
             RETURNING *",
        )
        .bind(id)
        .bind(data.email)
        .bind(data.best_email)
        .bind(data.full_name)
        .bind(data.middle_name)
        .bind(data.surname)
        .bind(data.birthday)
        .bind(data.faculty)
        .bind(data.group_name)
        .bind(data.clothing_size)
        .bind(data.home_address)
        .fetch_one(&self.pool)
        .await
        .map_err(row_not_found)?;
        Ok(row)
    }

    async fn delete(&self, id: Uuid) -> Result<Member, StoreError> {
        let row = sqlx::query_as::<_, Member>("DELETE FROM members WHERE id = $1 RETURNING *")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(row_not_found)?;
        Ok(row)
    }

    async fn delete_many(&self, ids: Vec<Uuid>) -> Result<u64, StoreError> {
        let result = sqlx::query("DELETE FROM members WHERE id = ANY($1)")
            .bind(ids)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}

#[async_trait]
impl MemberStore for PgMemberStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<Member>, StoreError> {
        let row = sqlx::query_as::<_, Member>("SELECT * FROM members WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }
}

pub struct PgCadenceStore {
    pool: PgPool,
}

impl PgCadenceStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RecordStore<Cadence, Uuid, CadenceDraft> for PgCadenceStore {
    async fn find_unique(&self, id: Uuid) -> Result<Option<Cadence>, StoreError> {
        let row = sqlx::query_as::<_, Cadence>("SELECT * FROM cadences WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn find_many(&self) -> Result<Vec<Cadence>, StoreError> {
        let rows = sqlx::query_as::<_, Cadence>("SELECT * FROM cadences ORDER BY number")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn create(&self, data: CadenceDraft) -> Result<Cadence, StoreError> {
        let row = sqlx::query_as::<_, Cadence>(
            "INSERT INTO cadences (id, number, is_end, start_date, end_date) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(data.number)
        .bind(data.is_end)
        .bind(data.start_date)
        .bind(data.end_date)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn update(&self, id: Uuid, data: CadenceDraft) -> Result<Cadence, StoreError> {
        let row = sqlx::query_as::<_, Cadence>(
            "UPDATE cadences SET \
             number = $2, is_end = $3, start_date = $4, end_date = $5, updated_at = now() \
             WHERE id = $1 \
             RETURNING *",
        )
        .bind(id)
        .bind(data.number)
        .bind(data.is_end)
        .bind(data.start_date)
        .bind(data.end_date)
        .fetch_one(&self.pool)
        .await
        .map_err(row_not_found)?;
        Ok(row)
    }

    async fn delete(&self, id: Uuid) -> Result<Cadence, StoreError> {
        let row = sqlx::query_as::<_, Cadence>("DELETE FROM cadences WHERE id = $1 RETURNING *")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(row_not_found)?;
        Ok(row)
    }

    async fn delete_many(&self, ids: Vec<Uuid>) -> Result<u64, StoreError> {
        let result = sqlx::query("DELETE FROM cadences WHERE id = ANY($1)")
            .bind(ids)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}

#[async_trait]
impl CadenceStore for PgCadenceStore {
    async fn find_by_number(&self, number: i32) -> Result<Option<Cadence>, StoreError> {
        let row = sqlx::query_as::<_, Cadence>("SELECT * FROM cadences WHERE number = $1")
            .bind(number)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }
}

pub struct PgBoardStore {
    pool: PgPool,
}

impl PgBoardStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RecordStore<Board, i64, BoardDraft> for PgBoardStore {
    async fn find_unique(&self, id: i64) -> Result<Option<Board>, StoreError> {
        let row = sqlx::query_as::<_, Board>("SELECT * FROM boards WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn find_many(&self) -> Result<Vec<Board>, StoreError> {
        let rows = sqlx::query_as::<_, Board>("SELECT * FROM boards ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn create(&self, data: BoardDraft) -> Result<Board, StoreError> {
        let row = sqlx::query_as::<_, Board>("INSERT INTO boards (name) VALUES ($1) RETURNING *")
            .bind(data.name)
            .fetch_one(&self.pool)
            .await?;
        Ok(row)
    }

    async fn update(&self, id: i64, data: BoardDraft) -> Result<Board, StoreError> {
        let row =
            sqlx::query_as::<_, Board>("UPDATE boards SET name = $2 WHERE id = $1 RETURNING *")
                .bind(id)
                .bind(data.name)
                .fetch_one(&self.pool)
                .await
                .map_err(row_not_found)?;
        Ok(row)
    }

    async fn delete(&self, id: i64) -> Result<Board, StoreError> {
        let row = sqlx::query_as::<_, Board>("DELETE FROM boards WHERE id = $1 RETURNING *")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(row_not_found)?;
        Ok(row)
    }

    async fn delete_many(&self, ids: Vec<i64>) -> Result<u64, StoreError> {
        let result = sqlx::query("DELETE FROM boards WHERE id = ANY($1)")
            .bind(ids)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}

pub struct PgCoordinatorStore {
    pool: PgPool,
}

impl PgCoordinatorStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RecordStore<Coordinator, i64, CoordinatorDraft> for PgCoordinatorStore {
    async fn find_unique(&self, id: i64) -> Result<Option<Coordinator>, StoreError> {
        let row = sqlx::query_as::<_, Coordinator>("SELECT * FROM coordinators WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn find_many(&self) -> Result<Vec<Coordinator>, StoreError> {
        let rows = sqlx::query_as::<_, Coordinator>("SELECT * FROM coordinators ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn create(&self, data: CoordinatorDraft) -> Result<Coordinator, StoreError> {
        let row = sqlx::query_as::<_, Coordinator>(
            "INSERT INTO coordinators (name) VALUES ($1) RETURNING *",
        )
        .bind(data.name)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn update(&self, id: i64, data: CoordinatorDraft) -> Result<Coordinator, StoreError> {
        let row = sqlx::query_as::<_, Coordinator>(
            "UPDATE coordinators SET name = $2 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(data.name)
        .fetch_one(&self.pool)
        .await
        .map_err(row_not_found)?;
        Ok(row)
    }

    async fn delete(&self, id: i64) -> Result<Coordinator, StoreError> {
        let row =
            sqlx::query_as::<_, Coordinator>("DELETE FROM coordinators WHERE id = $1 RETURNING *")
                .bind(id)
                .fetch_one(&self.pool)
                .await
                .map_err(row_not_found)?;
        Ok(row)
    }

    async fn delete_many(&self, ids: Vec<i64>) -> Result<u64, StoreError> {
        let result = sqlx::query("DELETE FROM coordinators WHERE id = ANY($1)")
            .bind(ids)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}

pub struct PgCommitteeStore {
    pool: PgPool,
}

impl PgCommitteeStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RecordStore<Committee, Uuid, CommitteeDraft> for PgCommitteeStore {
    async fn find_unique(&self, id: Uuid) -> Result<Option<Committee>, StoreError> {
        let row = sqlx::query_as::<_, Committee>("SELECT * FROM committees WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn find_many(&self) -> Result<Vec<Committee>, StoreError> {
        let rows = sqlx::query_as::<_, Committee>("SELECT * FROM committees ORDER BY created_at")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn create(&self, data: CommitteeDraft) -> Result<Committee, StoreError> {
        let row = sqlx::query_as::<_, Committee>(
            "INSERT INTO committees (id, name) VALUES ($1, $2) RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(data.name)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn update(&self, id: Uuid, data: CommitteeDraft) -> Result<Committee, StoreError> {
        let row = sqlx::query_as::<_, Committee>(
            "UPDATE committees SET name = $2 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(data.name)
        .fetch_one(&self.pool)
        .await
        .map_err(row_not_found)?;
        Ok(row)
    }

    async fn delete(&self, id: Uuid) -> Result<Committee, StoreError> {
        let row =
            sqlx::query_as::<_, Committee>("DELETE FROM committees WHERE id = $1 RETURNING *")
                .bind(id)
                .fetch_one(&self.pool)
                .await
                .map_err(row_not_found)?;
        Ok(row)
    }

    async fn delete_many(&self, ids: Vec<Uuid>) -> Result<u64, StoreError> {
        let result = sqlx::query("DELETE FROM committees WHERE id = ANY($1)")
            .bind(ids)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}

pub struct PgTranslationStore {
    pool: PgPool,
}

impl PgTranslationStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RecordStore<Translation, i64, TranslationDraft> for PgTranslationStore {
    async fn find_unique(&self, id: i64) -> Result<Option<Translation>, StoreError> {
        let row = sqlx::query_as::<_, Translation>("SELECT * FROM translations WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn find_many(&self) -> Result<Vec<Translation>, StoreError> {
        let rows = sqlx::query_as::<_, Translation>("SELECT * FROM translations ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn create(&self, data: TranslationDraft) -> Result<Translation, StoreError> {
        let row = sqlx::query_as::<_, Translation>(
            "INSERT INTO translations (key, lang, value) VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(data.key)
        .bind(data.lang)
        .bind(data.value)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn update(&self, id: i64, data: TranslationDraft) -> Result<Translation, StoreError> {
        let row = sqlx::query_as::<_, Translation>(
            "UPDATE translations SET key = $2, lang = $3, value = $4 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(data.key)
        .bind(data.lang)
        .bind(data.value)
        .fetch_one(&self.pool)
        .await
        .map_err(row_not_found)?;
        Ok(row)
    }

    async fn delete(&self, id: i64) -> Result<Translation, StoreError> {
        let row =
            sqlx::query_as::<_, Translation>("DELETE FROM translations WHERE id = $1 RETURNING *")
                .bind(id)
                .fetch_one(&self.pool)
                .await
                .map_err(row_not_found)?;
        Ok(row)
    }

    async fn delete_many(&self, ids: Vec<i64>) -> Result<u64, StoreError> {
        let result = sqlx::query("DELETE FROM translations WHERE id = ANY($1)")
            .bind(ids)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}

pub struct PgBoardToMemberStore {
    pool: PgPool,
}

impl PgBoardToMemberStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RecordStore<BoardToMember, i64, BoardToMemberDraft> for PgBoardToMemberStore {
    async fn find_unique(&self, id: i64) -> Result<Option<BoardToMember>, StoreError> {
        let row =
            sqlx::query_as::<_, BoardToMember>("SELECT * FROM board_to_member WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(row)
    }

    async fn find_many(&self) -> Result<Vec<BoardToMember>, StoreError> {
        let rows = sqlx::query_as::<_, BoardToMember>("SELECT * FROM board_to_member ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn create(&self, data: BoardToMemberDraft) -> Result<BoardToMember, StoreError> {
        let row = sqlx::query_as::<_, BoardToMember>(
            "INSERT INTO board_to_member (member_id, board_id, cadence_id, excluded, excluded_date) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING *",
        )
        .bind(data.member_id)
        .bind(data.board_id)
        .bind(data.cadence_id)
        .bind(data.excluded)
        .bind(data.excluded_date)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn update(&self, id: i64, data: BoardToMemberDraft) -> Result<BoardToMember, StoreError> {
        let row = sqlx::query_as::<_, BoardToMember>(
            "UPDATE board_to_member SET \
             member_id = $2, board_id = $3, cadence_id = $4, excluded = $5, excluded_date = $6 \
             WHERE id = $1 \
             RETURNING *",
        )
        .bind(id)
        .bind(data.member_id)
        .bind(data.board_id)
        .bind(data.cadence_id)
        .bind(data.excluded)
        .bind(data.excluded_date)
        .fetch_one(&self.pool)
        .await
        .map_err(row_not_found)?;
        Ok(row)
    }

    async fn delete(&self, id: i64) -> Result<BoardToMember, StoreError> {
        let row = sqlx::query_as::<_, BoardToMember>(
            "DELETE FROM board_to_member WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await
        .map_err(row_not_found)?;
        Ok(row)
    }

    async fn delete_many(&self, ids: Vec<i64>) -> Result<u64, StoreError> {
        let result = sqlx::query("DELETE FROM board_to_member WHERE id = ANY($1)")
            .bind(ids)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}

#[async_trait]
impl BoardToMemberStore for PgBoardToMemberStore {
    async fn find_link(
        &self,
        member_id: Uuid,
        board_id: i64,
        cadence_id: Uuid,
    ) -> Result<Option<BoardToMember>, StoreError> {
        let row = sqlx::query_as::<_, BoardToMember>(
            "SELECT * FROM board_to_member \
             WHERE member_id = $1 AND board_id = $2 AND cadence_id = $3 \
             LIMIT 1",
        )
        .bind(member_id)
        .bind(board_id)
        .bind(cadence_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn find_by_member(&self, member_id: Uuid) -> Result<Vec<BoardToMember>, StoreError> {
        let rows = sqlx::query_as::<_, BoardToMember>(
            "SELECT * FROM board_to_member WHERE member_id = $1",
        )
        .bind(member_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn find_by_board(&self, board_id: i64) -> Result<Vec<BoardToMember>, StoreError> {
        let rows =
            sqlx::query_as::<_, BoardToMember>("SELECT * FROM board_to_member WHERE board_id = $1")
                .bind(board_id)
                .fetch_all(&self.pool)
                .await?;
        Ok(rows)
    }

    async fn find_by_cadence(&self, cadence_id: Uuid) -> Result<Vec<BoardToMember>, StoreError> {
        let rows = sqlx::query_as::<_, BoardToMember>(
            "SELECT * FROM board_to_member WHERE cadence_id = $1",
        )
        .bind(cadence_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}

pub struct PgCoordinatorToMemberStore {
    pool: PgPool,
}

impl PgCoordinatorToMemberStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RecordStore<CoordinatorToMember, i64, CoordinatorToMemberDraft>
    for PgCoordinatorToMemberStore
{
    async fn find_unique(&self, id: i64) -> Result<Option<CoordinatorToMember>, StoreError> {
        let row = sqlx::query_as::<_, CoordinatorToMember>(
            "SELECT * FROM coordinator_to_member WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn find_many(&self) -> Result<Vec<CoordinatorToMember>, StoreError> {
        let rows = sqlx::query_as::<_, CoordinatorToMember>(
            "SELECT * FROM coordinator_to_member ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn create(
        &self,
        data: CoordinatorToMemberDraft,
    ) -> Result<CoordinatorToMember, StoreError> {
        let row = sqlx::query_as::<_, CoordinatorToMember>(
            "INSERT INTO coordinator_to_member (member_id, coordinator_id, cadence_id, excluded, excluded_date) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING *",
        )
        .bind(data.member_id)
        .bind(data.coordinator_id)
        .bind(data.cadence_id)
        .bind(data.excluded)
        .bind(data.excluded_date)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn update(
        &self,
        id: i64,
        data: CoordinatorToMemberDraft,
    ) -> Result<CoordinatorToMember, StoreError> {
        let row = sqlx::query_as::<_, CoordinatorToMember>(
            "UPDATE coordinator_to_member SET \
             member_id = $2, coordinator_id = $3, cadence_id = $4, excluded = $5, excluded_date = $6 \
             WHERE id = $1 \
             RETURNING *",
        )
        .bind(id)
        .bind(data.member_id)
        .bind(data.coordinator_id)
        .bind(data.cadence_id)
        .bind(data.excluded)
        .bind(data.excluded_date)
        .fetch_one(&self.pool)
        .await
        .map_err(row_not_found)?;
        Ok(row)
    }

    async fn delete(&self, id: i64) -> Result<CoordinatorToMember, StoreError> {
        let row = sqlx::query_as::<_, CoordinatorToMember>(
            "DELETE FROM coordinator_to_member WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await
        .map_err(row_not_found)?;
        Ok(row)
    }

    async fn delete_many(&self, ids: Vec<i64>) -> Result<u64, StoreError> {
        let result = sqlx::query("DELETE FROM coordinator_to_member WHERE id = ANY($1)")
            .bind(ids)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}

#[async_trait]
impl CoordinatorToMemberStore for PgCoordinatorToMemberStore {
    async fn find_link(
        &self,
        member_id: Uuid,
        coordinator_id: i64,
        cadence_id: Uuid,
    ) -> Result<Option<CoordinatorToMember>, StoreError> {
        let row = sqlx::query_as::<_, CoordinatorToMember>(
            "SELECT * FROM coordinator_to_member \
             WHERE member_id = $1 AND coordinator_id = $2 AND cadence_id = $3 \
             LIMIT 1",
        )
        .bind(member_id)
        .bind(coordinator_id)
        .bind(cadence_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn find_by_member(
        &self,
        member_id: Uuid,
    ) -> Result<Vec<CoordinatorToMember>, StoreError> {
        let rows = sqlx::query_as::<_, CoordinatorToMember>(
            "SELECT * FROM coordinator_to_member WHERE member_id = $1",
        )
        .bind(member_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn find_by_coordinator(
        &self,
        coordinator_id: i64,
    ) -> Result<Vec<CoordinatorToMember>, StoreError> {
        let rows = sqlx::query_as::<_, CoordinatorToMember>(
            "SELECT * FROM coordinator_to_member WHERE coordinator_id = $1",
        )
        .bind(coordinator_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn find_by_cadence(
        &self,
        cadence_id: Uuid,
    ) -> Result<Vec<CoordinatorToMember>, StoreError> {
        let rows = sqlx::query_as::<_, CoordinatorToMember>(
            "SELECT * FROM coordinator_to_member WHERE cadence_id = $1",
        )
        .bind(cadence_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}

pub struct PgCommitteeToMemberStore {
    pool: PgPool,
}

impl PgCommitteeToMemberStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RecordStore<CommitteeToMember, Uuid, CommitteeToMemberDraft> for PgCommitteeToMemberStore {
    async fn find_unique(&self, id: Uuid) -> Result<Option<CommitteeToMember>, StoreError> {
        let row = sqlx::query_as::<_, CommitteeToMember>(
            "SELECT * FROM committee_to_member WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn find_many(&self) -> Result<Vec<CommitteeToMember>, StoreError> {
        let rows = sqlx::query_as::<_, CommitteeToMember>(
            "SELECT * FROM committee_to_member ORDER BY created_at",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn create(&self, data: CommitteeToMemberDraft) -> Result<CommitteeToMember, StoreError> {
        let row = sqlx::query_as::<_, CommitteeToMember>(
            "INSERT INTO committee_to_member (id, member_id, committee_id, cadence_id, excluded, excluded_date) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(data.member_id)
        .bind(data.committee_id)
        .bind(data.cadence_id)
        .bind(data.excluded)
        .bind(data.excluded_date)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn update(
        &self,
        id: Uuid,
        data: CommitteeToMemberDraft,
    ) -> Result<CommitteeToMember, StoreError> {
        let row = sqlx::query_as::<_, CommitteeToMember>(
            "UPDATE committee_to_member SET \
             member_id = $2, committee_id = $3, cadence_id = $4, excluded = $5, excluded_date = $6 \
             WHERE id = $1 \
             RETURNING *",
        )
        .bind(id)
        .bind(data.member_id)
        .bind(data.committee_id)
        .bind(data.cadence_id)
        .bind(data.excluded)
        .bind(data.excluded_date)
        .fetch_one(&self.pool)
        .await
        .map_err(row_not_found)?;
        Ok(row)
    }

    async fn delete(&self, id: Uuid) -> Result<CommitteeToMember, StoreError> {
        let row = sqlx::query_as::<_, CommitteeToMember>(
            "DELETE FROM committee_to_member WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await
        .map_err(row_not_found)?;
        Ok(row)
    }

    async fn delete_many(&self, ids: Vec<Uuid>) -> Result<u64, StoreError> {
        let result = sqlx::query("DELETE FROM committee_to_member WHERE id = ANY($1)")
            .bind(ids)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}

#[async_trait]
impl CommitteeToMemberStore for PgCommitteeToMemberStore {
    async fn find_link(
        &self,
        member_id: Uuid,
        committee_id: Uuid,
        cadence_id: Uuid,
    ) -> Result<Option<CommitteeToMember>, StoreError> {
        let row = sqlx::query_as::<_, CommitteeToMember>(
            "SELECT * FROM committee_to_member \
             WHERE member_id = $1 AND committee_id = $2 AND cadence_id = $3 \
             LIMIT 1",
        )
        .bind(member_id)
        .bind(committee_id)
        .bind(cadence_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn find_by_member(&self, member_id: Uuid) -> Result<Vec<CommitteeToMember>, StoreError> {
        let rows = sqlx::query_as::<_, CommitteeToMember>(
            "SELECT * FROM committee_to_member WHERE member_id = $1",
        )
        .bind(member_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn find_by_committee(
        &self,
        committee_id: Uuid,
    ) -> Result<Vec<CommitteeToMember>, StoreError> {
        let rows = sqlx::query_as::<_, CommitteeToMember>(
            "SELECT * FROM committee_to_member WHERE committee_id = $1",
        )
        .bind(committee_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn find_by_cadence(
        &self,
        cadence_id: Uuid,
    ) -> Result<Vec<CommitteeToMember>, StoreError> {
        let rows = sqlx::query_as::<_, CommitteeToMember>(
            "SELECT * FROM committee_to_member WHERE cadence_id = $1",
        )
        .bind(cadence_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}
