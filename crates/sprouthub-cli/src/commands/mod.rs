pub mod config;
pub mod factors;
pub mod schedule;
pub mod season;
