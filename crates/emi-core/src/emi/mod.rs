pub mod analysis;
pub mod calculator;
pub mod schedule;
pub mod validation;
