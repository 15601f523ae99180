pub mod pending;
pub mod report;
