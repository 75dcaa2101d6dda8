// src/handlers/mod.rs
pub mod error;
pub mod series;
pub mod metrics;
pub mod summary;
