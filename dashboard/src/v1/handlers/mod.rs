pub mod dashboard;
pub mod facilities;
