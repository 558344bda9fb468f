pub mod board_to_member;
pub mod cadence;
pub mod committee_to_member;
pub mod coordinator_to_member;
pub mod entity;
pub mod member;

pub use board_to_member::BoardToMemberService;
pub use cadence::CadenceService;
pub use committee_to_member::CommitteeToMemberService;
pub use coordinator_to_member::CoordinatorToMemberService;
pub use entity::{BoardService, CommitteeService, CoordinatorService, EntityService, TranslationService};
pub use member::MemberService;
