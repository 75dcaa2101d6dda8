use log::{error, info};
use std::net::SocketAddr;
use std::process;
use warp::Filter;

use gdp_comparison_dashboard::config::ServerConfig;
use gdp_comparison_dashboard::routes;
use gdp_comparison_dashboard::services::dataset::load_dataset;

#[tokio::main]
async fn main() {
    // Initialize the logger
    env_logger::init();
    info!("Logger initialized. Starting the application...");

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid configuration: {:#}", e);
            process::exit(1);
        }
    };

    // Fail at startup rather than on the first request if the bundled data is inconsistent
    if let Err(e) = load_dataset() {
        error!("Dataset failed validation: {}", e);
        process::exit(1);
    }

    let addr: SocketAddr = ([0, 0, 0, 0], config.port).into();
    info!("Will bind to: {}", addr);

    let cors = warp::cors()
        .allow_any_origin()
        .allow_header("content-type")
        .allow_methods(vec!["GET"]);

    let api = routes::routes().with(cors);
    info!("Routes configured successfully with CORS.");

    info!("Starting server on {}", addr);
    warp::serve(api)
        .run(addr)
        .await;
}
