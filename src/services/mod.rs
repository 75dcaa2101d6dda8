// src/services/mod.rs
pub mod dataset;
pub mod metrics;
pub mod dashboard;
pub mod export;
