// src/handlers/series.rs
use warp::http::header::CONTENT_TYPE;
use warp::reply::Json;
use warp::{Rejection, Reply};
use crate::models::Entity;
use crate::services::dataset::{load_dataset, Dataset, Series};
use crate::services::export::series_table_csv;
use super::error::ApiError;
use log::{error, info};

fn dataset() -> Result<Dataset, Rejection> {
    load_dataset().map_err(|e| {
        error!("Failed to load dataset: {}", e);
        warp::reject::custom(ApiError::from(e))
    })
}

fn find_series(dataset: &Dataset, slug: &str) -> Result<Series, Rejection> {
    Entity::from_slug(slug)
        .and_then(|entity| dataset.series(entity))
        .cloned()
        .ok_or_else(|| warp::reject::custom(ApiError::not_found(format!("Unknown entity: {}", slug))))
}

pub async fn get_all_series() -> Result<Json, Rejection> {
    info!("Handling request to get both series");
    let dataset = dataset()?;
    Ok(warp::reply::json(&[dataset.entity_a(), dataset.entity_b()]))
}

pub async fn get_series(slug: String) -> Result<Json, Rejection> {
    info!("Handling request to get series for {}", slug);
    let dataset = dataset()?;
    let series = find_series(&dataset, &slug)?;
    Ok(warp::reply::json(&series))
}

pub async fn get_series_csv(slug: String) -> Result<impl Reply, Rejection> {
    info!("Handling request to export {} as CSV", slug);
    let dataset = dataset()?;
    let series = find_series(&dataset, &slug)?;

    let body = series_table_csv(&series).map_err(|e| {
        error!("Failed to export {} as CSV: {:#}", slug, e);
        warp::reject::custom(ApiError::new(e.to_string()))
    })?;

    Ok(warp::reply::with_header(body, CONTENT_TYPE, "text/csv"))
}
