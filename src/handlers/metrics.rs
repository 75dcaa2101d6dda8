// src/handlers/metrics.rs
use warp::reply::Json;
use warp::Rejection;
use crate::services::dashboard::build_dashboard;
use crate::services::dataset::load_dataset;
use super::error::ApiError;
use log::{debug, error, info};

pub async fn get_metrics() -> Result<Json, Rejection> {
    info!("Handling request to compute dashboard metrics");

    let dashboard = load_dataset()
        .and_then(|dataset| build_dashboard(&dataset))
        .map_err(|e| {
            error!("Failed to compute dashboard metrics: {}", e);
            warp::reject::custom(ApiError::from(e))
        })?;

    debug!("Returning metrics for {}-{}", dashboard.base_year, dashboard.final_year);
    Ok(warp::reply::json(&dashboard))
}
