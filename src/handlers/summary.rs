// src/handlers/summary.rs
use warp::reply::Json;
use warp::Rejection;
use serde::Serialize;
use crate::models::SummaryTable;
use crate::services::dashboard::build_dashboard;
use crate::services::dataset::load_dataset;
use super::error::ApiError;
use log::{error, info};

#[derive(Serialize)]
struct Kpis {
    final_ppp_ratio: f64,
    cumulative_growth_a: f64,
    cumulative_growth_b: f64,
    cumulative_inflation_a: f64,
    cumulative_inflation_b: f64,
}

#[derive(Serialize)]
struct SummaryResponse {
    kpis: Kpis,
    table: SummaryTable,
}

pub async fn get_summary() -> Result<Json, Rejection> {
    info!("Handling request to get summary");

    let dashboard = load_dataset()
        .and_then(|dataset| build_dashboard(&dataset))
        .map_err(|e| {
            error!("Failed to build summary: {}", e);
            warp::reject::custom(ApiError::from(e))
        })?;

    let response = SummaryResponse {
        kpis: Kpis {
            final_ppp_ratio: dashboard.final_ppp_ratio,
            cumulative_growth_a: dashboard.entity_a.cumulative_growth,
            cumulative_growth_b: dashboard.entity_b.cumulative_growth,
            cumulative_inflation_a: dashboard.entity_a.cumulative_inflation,
            cumulative_inflation_b: dashboard.entity_b.cumulative_inflation,
        },
        table: dashboard.summary,
    };

    Ok(warp::reply::json(&response))
}
