pub mod blockers;
pub mod clean;
pub mod full;
pub mod search;
pub mod summary;
