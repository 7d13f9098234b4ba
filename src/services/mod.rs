// Services module - Business logic

pub mod audit;
pub mod checkin;
pub mod directory;
pub mod eligibility;
