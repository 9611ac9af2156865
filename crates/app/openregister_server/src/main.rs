//! OpenRegister MCP server binary.
//!
//! Serves the company lookup tools over stdio (for MCP hosts that spawn the
//! server as a child process) or over Streamable HTTP.

use std::sync::Arc;

use clap::{Parser, ValueEnum};
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

use openregister_core::{RegistryClient, RegistryConfig, config};
use openregister_mcp::OpenRegisterMcpServer;

/// MCP transport to serve on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Transport {
    Stdio,
    Http,
}

/// CLI arguments for the OpenRegister MCP server.
#[derive(Parser, Debug)]
#[command(name = "openregister_server", version, about = "OpenRegister MCP server")]
struct Args {
    /// Transport to serve MCP on.
    #[arg(long, value_enum, default_value_t = Transport::Stdio)]
    transport: Transport,

    /// Address to bind when using the HTTP transport.
    #[arg(long, default_value = "127.0.0.1:8000")]
    bind: String,

    /// Bearer token required by the HTTP transport. Unset = no authentication.
    #[arg(long, env = "OPENREGISTER_MCP_TOKEN", hide_env_values = true)]
    mcp_token: Option<String>,

    /// OpenRegister API base URL (overrides `OPENREGISTER_API_URL`).
    #[arg(long)]
    api_url: Option<String>,

    /// OpenRegister API key (overrides `OPENREGISTER_API_KEY`).
    #[arg(long)]
    api_key: Option<String>,

    /// Request timeout in seconds (overrides `OPENREGISTER_TIMEOUT_SECS`).
    #[arg(long)]
    timeout_secs: Option<String>,

    /// Shareholder request timeout in seconds
    /// (overrides `OPENREGISTER_SHAREHOLDERS_TIMEOUT_SECS`).
    #[arg(long)]
    shareholders_timeout_secs: Option<String>,
}

impl Args {
    /// Resolve the registry config: environment first, then CLI overrides.
    fn registry_config(&self) -> Result<RegistryConfig, openregister_core::ConfigError> {
        let mut registry = RegistryConfig::from_env()?;
        if let Some(url) = &self.api_url {
            registry.base_url = config::normalize_base_url(url)?;
        }
        if let Some(key) = &self.api_key {
            registry.api_key = Some(key.clone()).filter(|k| !k.is_empty());
        }
        if let Some(raw) = &self.timeout_secs {
            registry.timeout = config::parse_timeout("--timeout-secs", raw)?;
        }
        if let Some(raw) = &self.shareholders_timeout_secs {
            registry.shareholders_timeout =
                config::parse_timeout("--shareholders-timeout-secs", raw)?;
        }
        Ok(registry)
    }
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // Write logs to stderr so stdout is reserved for the stdio MCP channel.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "info,openregister_core=debug,openregister_mcp=debug".into()
            }),
        )
        .init();

    if let Err(e) = run(Args::parse()).await {
        error!("{e}");
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let registry = args.registry_config()?;

    info!(
        base_url = %registry.base_url,
        api_key_set = registry.api_key.is_some(),
        timeout = ?registry.timeout,
        shareholders_timeout = ?registry.shareholders_timeout,
        transport = ?args.transport,
        "starting openregister_server v{}",
        openregister_core::version()
    );

    let server = OpenRegisterMcpServer::new(Arc::new(RegistryClient::new(registry)));

    match args.transport {
        Transport::Stdio => openregister_mcp::serve_stdio(server).await?,
        Transport::Http => serve_http(server, &args.bind, args.mcp_token).await?,
    }

    Ok(())
}

async fn serve_http(
    server: OpenRegisterMcpServer,
    bind: &str,
    token: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let ct = CancellationToken::new();
    let auth_enabled = token.is_some();
    let app = openregister_mcp::mcp_router(server, token, ct.clone());

    let listener = tokio::net::TcpListener::bind(bind).await?;
    let addr = listener.local_addr()?;
    info!(addr = %addr, auth_enabled, "MCP server listening at /mcp");

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            let _ = tokio::signal::ctrl_c().await;
            info!("shutdown requested");
            ct.cancel();
        })
        .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_stdio_transport() {
        let args = Args::try_parse_from(["openregister_server"]).unwrap();
        assert_eq!(args.transport, Transport::Stdio);
        assert_eq!(args.bind, "127.0.0.1:8000");
    }

    #[test]
    fn parses_http_transport_options() {
        let args = Args::try_parse_from([
            "openregister_server",
            "--transport",
            "http",
            "--bind",
            "0.0.0.0:9100",
            "--mcp-token",
            "abc",
        ])
        .unwrap();
        assert_eq!(args.transport, Transport::Http);
        assert_eq!(args.bind, "0.0.0.0:9100");
        assert_eq!(args.mcp_token.as_deref(), Some("abc"));
    }

    #[test]
    fn cli_overrides_registry_config() {
        let args = Args::try_parse_from([
            "openregister_server",
            "--api-url",
            "http://localhost:4010/v0/",
            "--api-key",
            "cli-key",
            "--timeout-secs",
            "12",
            "--shareholders-timeout-secs",
            "75",
        ])
        .unwrap();
        let registry = args.registry_config().unwrap();
        assert_eq!(registry.base_url, "http://localhost:4010/v0");
        assert_eq!(registry.api_key.as_deref(), Some("cli-key"));
        assert_eq!(registry.timeout.as_secs(), 12);
        assert_eq!(registry.shareholders_timeout.as_secs(), 75);
    }

    #[test]
    fn rejects_invalid_timeout_override() {
        let args =
            Args::try_parse_from(["openregister_server", "--timeout-secs", "0"]).unwrap();
        assert!(args.registry_config().is_err());
    }
}
