use axum::{routing::get, Json, Router};
use serde_json::{json, Value};
use sqlx::PgPool;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use uuid::Uuid;

use crate::handlers;
use crate::models::{
    Board, BoardDraft, BoardToMember, Cadence, Committee, CommitteeDraft, CommitteeToMember,
    Coordinator, CoordinatorDraft, CoordinatorToMember, Member, Translation, TranslationDraft,
};
use crate::services::{
    BoardToMemberService, CadenceService, CommitteeToMemberService, CoordinatorToMemberService,
    EntityService, MemberService,
};
use crate::store::memory::MemStore;
use crate::store::pg::{
    PgBoardStore, PgBoardToMemberStore, PgCadenceStore, PgCommitteeStore,
    PgCommitteeToMemberStore, PgCoordinatorStore, PgCoordinatorToMemberStore, PgMemberStore,
    PgTranslationStore,
};
use crate::store::{
    BoardToMemberStore, CadenceStore, CommitteeToMemberStore, CoordinatorToMemberStore,
    DynRecordStore, MemberStore,
};

/// Shared service graph handed to every handler.
///
/// Association services hold their sibling entity services; entity services
/// never reference an association service, keeping the dependency graph
/// one-directional.
#[derive(Clone)]
pub struct AppState {
    pub members: Arc<MemberService>,
    pub cadences: Arc<CadenceService>,
    pub boards: Arc<EntityService<Board, i64, BoardDraft>>,
    pub coordinators: Arc<EntityService<Coordinator, i64, CoordinatorDraft>>,
    pub committees: Arc<EntityService<Committee, Uuid, CommitteeDraft>>,
    pub translations: Arc<EntityService<Translation, i64, TranslationDraft>>,
    pub board_links: Arc<BoardToMemberService>,
    pub coordinator_links: Arc<CoordinatorToMemberService>,
    pub committee_links: Arc<CommitteeToMemberService>,
}

struct Stores {
    members: Arc<dyn MemberStore>,
    cadences: Arc<dyn CadenceStore>,
    boards: DynRecordStore<Board, i64, BoardDraft>,
    coordinators: DynRecordStore<Coordinator, i64, CoordinatorDraft>,
    committees: DynRecordStore<Committee, Uuid, CommitteeDraft>,
    translations: DynRecordStore<Translation, i64, TranslationDraft>,
    board_links: Arc<dyn BoardToMemberStore>,
    coordinator_links: Arc<dyn CoordinatorToMemberStore>,
    committee_links: Arc<dyn CommitteeToMemberStore>,
}

impl AppState {
    /// Production wiring over a Postgres pool.
    pub fn with_postgres(pool: PgPool) -> Self {
        Self::wire(Stores {
            members: Arc::new(PgMemberStore::new(pool.clone())),
            cadences: Arc::new(PgCadenceStore::new(pool.clone())),
            boards: Arc::new(PgBoardStore::new(pool.clone())),
            coordinators: Arc::new(PgCoordinatorStore::new(pool.clone())),
            committees: Arc::new(PgCommitteeStore::new(pool.clone())),
            translations: Arc::new(PgTranslationStore::new(pool.clone())),
            board_links: Arc::new(PgBoardToMemberStore::new(pool.clone())),
            coordinator_links: Arc::new(PgCoordinatorToMemberStore::new(pool.clone())),
            committee_links: Arc::new(PgCommitteeToMemberStore::new(pool)),
        })
    }

    /// Database-less wiring, used by the test suite and local runs.
    pub fn in_memory() -> Self {
        Self::wire(Stores {
            members: Arc::new(MemStore::<Member>::new()),
            cadences: Arc::new(MemStore::<Cadence>::new()),
            boards: Arc::new(MemStore::<Board>::new()),
            coordinators: Arc::new(MemStore::<Coordinator>::new()),
            committees: Arc::new(MemStore::<Committee>::new()),
            translations: Arc::new(MemStore::<Translation>::new()),
            board_links: Arc::new(MemStore::<BoardToMember>::new()),
            coordinator_links: Arc::new(MemStore::<CoordinatorToMember>::new()),
            committee_links: Arc::new(MemStore::<CommitteeToMember>::new()),
        })
    }

    fn wire(stores: Stores) -> Self {
        let members = Arc::new(MemberService::new(stores.members));
        let cadences = Arc::new(CadenceService::new(stores.cadences));
        let boards = Arc::new(EntityService::new("board", stores.boards));
        let coordinators = Arc::new(EntityService::new("coordinator", stores.coordinators));
        let committees = Arc::new(EntityService::new("committee", stores.committees));
        let translations = Arc::new(EntityService::new("translation", stores.translations));

        let board_links = Arc::new(BoardToMemberService::new(
            stores.board_links,
            members.clone(),
            boards.clone(),
            cadences.clone(),
        ));
        let coordinator_links = Arc::new(CoordinatorToMemberService::new(
            stores.coordinator_links,
            members.clone(),
            coordinators.clone(),
            cadences.clone(),
        ));
        let committee_links = Arc::new(CommitteeToMemberService::new(
            stores.committee_links,
            members.clone(),
            committees.clone(),
            cadences.clone(),
        ));

        Self {
            members,
            cadences,
            boards,
            coordinators,
            committees,
            translations,
            board_links,
            coordinator_links,
            committee_links,
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        // Public
        .route("/", get(root))
        .route("/health", get(health))
        // Entities
        .merge(handlers::member::routes())
        .merge(handlers::cadence::routes())
        .merge(handlers::board::routes())
        .merge(handlers::coordinator::routes())
        .merge(handlers::committee::routes())
        .merge(handlers::translation::routes())
        // Associations
        .merge(handlers::board_to_member::routes())
        .merge(handlers::coordinator_to_member::routes())
        .merge(handlers::committee_to_member::routes())
        // Global middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn root() -> Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    Json(json!({
        "success": true,
        "data": {
            "name": "CRM API (Rust)",
            "version": version,
            "description": "Membership CRM backend built with Rust (Axum)",
            "endpoints": {
                "home": "/",
                "health": "/health",
                "entities": "/member, /cadence, /board, /coordinator, /committee, /translation",
                "associations": "/board-to-member, /coordinator-to-member, /committee-to-member",
            }
        }
    }))
}

async fn health() -> Json<Value> {
    Json(json!({
        "success": true,
        "data": {
            "status": "ok",
            "timestamp": chrono::Utc::now(),
        }
    }))
}
