// src/routes.rs
use crate::handlers::{metrics::get_metrics, series::get_all_series, series::get_series,
                     series::get_series_csv, summary::get_summary};
use log::info;

use std::convert::Infallible;
use warp::http::StatusCode;
use warp::reject::Rejection;
use warp::{Filter, Reply};
use crate::handlers::error::ApiError;

async fn handle_rejection(err: Rejection) -> Result<impl Reply, Infallible> {
    let code;
    let message;

    if let Some(api_error) = err.find::<ApiError>() {
        code = api_error.status;
        message = api_error.message.as_str();
    } else if err.is_not_found() {
        code = StatusCode::NOT_FOUND;
        message = "Not Found";
    } else if err.find::<warp::reject::MethodNotAllowed>().is_some() {
        code = StatusCode::METHOD_NOT_ALLOWED;
        message = "Method Not Allowed";
    } else {
        code = StatusCode::INTERNAL_SERVER_ERROR;
        message = "Internal Server Error";
    }

    Ok(warp::reply::with_status(
        warp::reply::json(&serde_json::json!({
            "error": message,
        })),
        code,
    ))
}

pub fn routes() -> impl Filter<Extract = impl Reply, Error = Infallible> + Clone {
    info!("Configuring routes...");

    let all_series_route = warp::path!("api" / "v1" / "series")
        .and(warp::get())
        .and_then(get_all_series);

    let series_route = warp::path!("api" / "v1" / "series" / String)
        .and(warp::get())
        .and_then(get_series);

    let series_csv_route = warp::path!("api" / "v1" / "series" / String / "csv")
        .and(warp::get())
        .and_then(get_series_csv);

    let metrics_route = warp::path!("api" / "v1" / "metrics")
        .and(warp::get())
        .and_then(get_metrics);

    let summary_route = warp::path!("api" / "v1" / "summary")
        .and(warp::get())
        .and_then(get_summary);

    info!("All routes configured successfully.");

    all_series_route
        .or(series_route)
        .or(series_csv_route)
        .or(metrics_route)
        .or(summary_route)
        .recover(handle_rejection)
}
