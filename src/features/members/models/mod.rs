mod member;

pub use member::{Member, MemberStatus, MemberSummary, MemberWithCooperative};
