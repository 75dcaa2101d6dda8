// src/config.rs
use anyhow::{Context, Result};
use log::{info, warn};
use std::env;

const DEFAULT_PORT: u16 = 3030;

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub port: u16,
}

impl ServerConfig {
    /// Reads `PORT` from the environment (after `.env`, if present).
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();
        Self::from_port_var(env::var("PORT").ok())
    }

    fn from_port_var(port: Option<String>) -> Result<Self> {
        let port = match port {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .with_context(|| format!("PORT must be a number, got {:?}", raw))?,
            None => {
                warn!("$PORT not set, defaulting to {}", DEFAULT_PORT);
                DEFAULT_PORT
            }
        };
        info!("Using PORT: {}", port);
        Ok(ServerConfig { port })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_port_missing() {
        assert_eq!(ServerConfig::from_port_var(None).unwrap().port, 3030);
    }

    #[test]
    fn parses_port() {
        assert_eq!(ServerConfig::from_port_var(Some(" 8080 ".into())).unwrap().port, 8080);
    }

    #[test]
    fn rejects_non_numeric_port() {
        let err = ServerConfig::from_port_var(Some("abc".into())).unwrap_err();
        assert!(err.to_string().contains("PORT must be a number"));
    }
}
