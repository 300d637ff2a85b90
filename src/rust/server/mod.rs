//! Prediction HTTP server
//!
//! A single `POST /` route that takes `{"product": "..."}` and answers with
//! the product, its predicted type and the type's UUID:
//!
//! ```text
//! POST /  {"product": "Butter"}
//! 200     {"product": "Butter", "type": "dairy & chilled", "uuid": "36298b3b-..."}
//! ```

mod handlers;

pub use handlers::predict;

use std::net::SocketAddr;
use std::sync::Arc;
use axum::{routing::post, Router};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use log::info;

use crate::artifact::{self, ArtifactError};
use crate::classifier::Pipeline;
use crate::config::ServerConfig;

/// Server errors
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Bind error on {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Artifact error: {0}")]
    Artifact(#[from] ArtifactError),
}

/// Result type for server operations
pub type Result<T> = std::result::Result<T, ServerError>;

/// Shared, read-only state of the server
#[derive(Debug, Clone)]
pub struct AppState {
    pub pipeline: Arc<Pipeline>,
}

impl AppState {
    pub fn new(pipeline: Pipeline) -> Self {
        Self {
            pipeline: Arc::new(pipeline),
        }
    }
}

/// Prediction request body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictRequest {
    pub product: String,
}

/// Prediction response body. `uuid` is null when the predicted type has no entry in the category table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictResponse {
    pub product: String,
    #[serde(rename = "type")]
    pub label: String,
    pub uuid: Option<String>,
}

/// Error body returned when prediction fails
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
}

/// Builds the router with the single prediction route
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", post(handlers::predict))
        .with_state(state)
}

/// Loads the artifact named in the config and serves until Ctrl-C
pub async fn serve(config: ServerConfig) -> Result<()> {
    let pipeline = artifact::load(&config.model_path)?;
    info!("Loaded pipeline: {:?}", pipeline);
    run(AppState::new(pipeline), config.addr).await
}

/// Serves an already loaded pipeline on `addr` until Ctrl-C
pub async fn run(state: AppState, addr: SocketAddr) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;
    info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_serializes_type_field() {
        let response = PredictResponse {
            product: "Butter".into(),
            label: "dairy & chilled".into(),
            uuid: None,
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"product": "Butter", "type": "dairy & chilled", "uuid": null})
        );
    }

    #[test]
    fn test_request_deserialize() {
        let req: PredictRequest = serde_json::from_str(r#"{"product": "Müsli"}"#).unwrap();
        assert_eq!(req.product, "Müsli");
    }
}
