pub mod config;
pub mod emi;
