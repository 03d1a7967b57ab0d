pub mod report;
pub mod user;
pub mod weekly_operation;
