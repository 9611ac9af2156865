//! MCP bearer token authentication middleware for the HTTP transport.
//!
//! Validates `Authorization: Bearer <token>` headers against the single
//! token configured at startup.

use std::sync::Arc;

use axum::{
    extract::State,
    http::{Request, StatusCode, header::AUTHORIZATION},
    middleware::Next,
    response::Response,
};
use sha2::{Digest, Sha256};
use tracing::debug;

/// SHA-256 digest of a token.
fn token_digest(token: &str) -> [u8; 32] {
    Sha256::digest(token.as_bytes()).into()
}

/// Compare two tokens in time independent of where they differ.
///
/// Both sides are hashed first, so length differences do not shorten the
/// comparison either.
pub(crate) fn tokens_match(presented: &str, expected: &str) -> bool {
    let a = token_digest(presented);
    let b = token_digest(expected);
    a.iter().zip(b.iter()).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

/// Axum middleware: validates the MCP bearer token.
///
/// Returns 401 if the header is missing, malformed, or carries the wrong token.
pub async fn mcp_auth_middleware(
    State(expected): State<Arc<str>>,
    request: Request<axum::body::Body>,
    next: Next,
) -> Result<Response, StatusCode> {
    let auth_header = request.headers().get(AUTHORIZATION);

    let token = match auth_header {
        Some(header) => {
            let header_str = header.to_str().unwrap_or("");
            match header_str.strip_prefix("Bearer ") {
                Some(t) => t,
                None => {
                    debug!("MCP auth: missing Bearer prefix");
                    return Err(StatusCode::UNAUTHORIZED);
                }
            }
        }
        None => {
            debug!("MCP auth: no Authorization header");
            return Err(StatusCode::UNAUTHORIZED);
        }
    };

    if !tokens_match(token, &expected) {
        debug!("MCP auth: token mismatch");
        return Err(StatusCode::UNAUTHORIZED);
    }

    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_tokens_match() {
        assert!(tokens_match("s3cret", "s3cret"));
        assert!(tokens_match("", ""));
    }

    #[test]
    fn differing_tokens_do_not_match() {
        assert!(!tokens_match("s3cret", "s3creT"));
        assert!(!tokens_match("s3cret", "s3cret "));
        assert!(!tokens_match("", "s3cret"));
    }
}
