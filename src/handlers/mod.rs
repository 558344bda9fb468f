pub mod board;
pub mod board_to_member;
pub mod cadence;
pub mod committee;
pub mod committee_to_member;
pub mod coordinator;
pub mod coordinator_to_member;
pub mod member;
pub mod translation;
