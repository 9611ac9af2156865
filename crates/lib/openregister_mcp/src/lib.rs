//! # openregister_mcp
//!
//! MCP (Model Context Protocol) server for OpenRegister company lookups.
//!
//! The server can be served over stdio ([`serve_stdio`]) or mounted as a
//! Streamable HTTP endpoint in an Axum router ([`mcp_router`]).
//! `openregister_server` wires up one or the other.

pub mod auth;
pub mod server;
pub mod tools;

use std::sync::Arc;

use rmcp::ServiceExt;
use rmcp::transport::streamable_http_server::{
    StreamableHttpServerConfig, StreamableHttpService, session::local::LocalSessionManager,
};
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::info;

pub use server::OpenRegisterMcpServer;

/// Errors raised while running the MCP server.
#[derive(Debug, Error)]
pub enum ServeError {
    #[error("MCP initialization failed: {0}")]
    Initialize(String),

    #[error("MCP service task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Serve `server` over stdin/stdout until the peer disconnects.
pub async fn serve_stdio(server: OpenRegisterMcpServer) -> Result<(), ServeError> {
    let service = server
        .serve(rmcp::transport::stdio())
        .await
        .map_err(|e| ServeError::Initialize(e.to_string()))?;

    let reason = service.waiting().await?;
    info!(?reason, "stdio MCP session ended");
    Ok(())
}

/// Build an Axum router that serves the MCP Streamable HTTP endpoint at `/mcp`.
///
/// When `token` is set, every request must carry `Authorization: Bearer <token>`.
///
/// # Arguments
///
/// * `server`: handler cloned into every MCP session.
/// * `token`: optional bearer token guarding the endpoint.
/// * `ct`: cancellation token for graceful shutdown of SSE streams.
pub fn mcp_router(
    server: OpenRegisterMcpServer,
    token: Option<String>,
    ct: CancellationToken,
) -> axum::Router {
    let service: StreamableHttpService<OpenRegisterMcpServer, LocalSessionManager> =
        StreamableHttpService::new(
            move || Ok(server.clone()),
            Arc::new(LocalSessionManager::default()),
            StreamableHttpServerConfig {
                stateful_mode: true,
                cancellation_token: ct,
                ..Default::default()
            },
        );

    let router = axum::Router::new().nest_service("/mcp", service);

    match token {
        Some(token) => router.layer(axum::middleware::from_fn_with_state(
            Arc::<str>::from(token),
            auth::mcp_auth_middleware,
        )),
        None => router,
    }
}
