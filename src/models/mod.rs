// Models module - Database entity representations

pub mod checkin;
pub mod member;

pub use checkin::Checkin;
pub use member::Member;
