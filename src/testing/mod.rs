//! Draft factories and seed helpers for the unit tests. Everything runs
//! against [`AppState::in_memory`], so no database is required.

use chrono::{NaiveDate, TimeZone, Utc};
use uuid::Uuid;

use crate::app::AppState;
use crate::models::{
    Board, BoardDraft, BoardToMemberDraft, Cadence, CadenceDraft, Committee, CommitteeDraft,
    CommitteeToMemberDraft, Coordinator, CoordinatorDraft, CoordinatorToMemberDraft, Member,
    MemberDraft,
};

pub fn member_draft(email: &str) -> MemberDraft {
    MemberDraft {
        email: email.to_string(),
        best_email: None,
        full_name: "ada".to_string(),
        middle_name: "augusta".to_string(),
        surname: "lovelace".to_string(),
        birthday: NaiveDate::from_ymd_opt(2002, 5, 17).unwrap(),
        faculty: "informatics".to_string(),
        group_name: "ki-41".to_string(),
        clothing_size: None,
        home_address: None,
    }
}

pub fn cadence_draft(number: i32) -> CadenceDraft {
    CadenceDraft {
        number,
        is_end: false,
        start_date: Utc.with_ymd_and_hms(2025, 9, 1, 0, 0, 0).unwrap(),
        end_date: Utc.with_ymd_and_hms(2026, 8, 31, 0, 0, 0).unwrap(),
    }
}

pub fn board_link_draft(member_id: Uuid, board_id: i64, cadence_id: Uuid) -> BoardToMemberDraft {
    BoardToMemberDraft {
        member_id,
        board_id,
        cadence_id,
        excluded: false,
        excluded_date: None,
    }
}

pub fn coordinator_link_draft(
    member_id: Uuid,
    coordinator_id: i64,
    cadence_id: Uuid,
) -> CoordinatorToMemberDraft {
    CoordinatorToMemberDraft {
        member_id,
        coordinator_id,
        cadence_id,
        excluded: false,
        excluded_date: None,
    }
}

pub fn committee_link_draft(
    member_id: Uuid,
    committee_id: Uuid,
    cadence_id: Uuid,
) -> CommitteeToMemberDraft {
    CommitteeToMemberDraft {
        member_id,
        committee_id,
        cadence_id,
        excluded: false,
        excluded_date: None,
    }
}

pub async fn seed_member(state: &AppState) -> Member {
    let email = format!("{}@example.com", Uuid::new_v4().simple());
    state.members.create(member_draft(&email)).await.unwrap()
}

pub async fn seed_cadence(state: &AppState, number: i32) -> Cadence {
    state.cadences.create(cadence_draft(number)).await.unwrap()
}

pub async fn seed_board(state: &AppState) -> Board {
    state
        .boards
        .create(BoardDraft {
            name: "hr".to_string(),
        })
        .await
        .unwrap()
}

pub async fn seed_coordinator(state: &AppState) -> Coordinator {
    state
        .coordinators
        .create(CoordinatorDraft {
            name: "lead".to_string(),
        })
        .await
        .unwrap()
}

pub async fn seed_committee(state: &AppState) -> Committee {
    state
        .committees
        .create(CommitteeDraft {
            name: "events".to_string(),
        })
        .await
        .unwrap()
}
