pub mod demand;
pub mod events;
pub mod reporting;
