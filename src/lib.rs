// src/lib.rs
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod handlers;
pub mod routes;

pub use error::MetricsError;
