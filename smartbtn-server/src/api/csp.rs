//! Per-response Content Security Policy nonce.
//!
//! Runs ahead of the button handler: it mints a fresh nonce, hands it to the
//! handler through a request extension, and stamps the matching
//! `Content-Security-Policy` header on the way out.

use axum::{
    extract::Request,
    http::{HeaderValue, header::CONTENT_SECURITY_POLICY},
    middleware::Next,
    response::Response,
};

/// Number of random bytes behind each nonce.
const NONCE_BYTES: usize = 16;

/// The nonce for the response currently being built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CspNonce(pub String);

impl CspNonce {
    /// Generate a new random nonce, base64 encoded.
    pub fn generate() -> Self {
        let bytes: [u8; NONCE_BYTES] = rand::random();
        Self(fast32::base64::RFC4648.encode(&bytes))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn policy(&self) -> String {
        format!(
            "script-src 'self' 'nonce-{nonce}'; style-src 'self' 'nonce-{nonce}'",
            nonce = self.0
        )
    }
}

/// Middleware attaching a [`CspNonce`] to the request and its policy to the response.
pub async fn csp_nonce(mut req: Request, next: Next) -> Response {
    let nonce = CspNonce::generate();
    let policy = nonce.policy();
    req.extensions_mut().insert(nonce);

    let mut response = next.run(req).await;
    match HeaderValue::from_str(&policy) {
        Ok(value) => {
            response.headers_mut().insert(CONTENT_SECURITY_POLICY, value);
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to build Content-Security-Policy header");
        }
    }
    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nonce_is_base64_of_16_bytes() {
        let nonce = CspNonce::generate();
        // 16 bytes -> 24 chars with padding
        assert_eq!(nonce.as_str().len(), 24);
        assert!(nonce.as_str().ends_with("=="));
        let decoded = fast32::base64::RFC4648.decode_str(nonce.as_str()).unwrap();
        assert_eq!(decoded.len(), NONCE_BYTES);
    }

    #[test]
    fn test_nonces_differ() {
        assert_ne!(CspNonce::generate(), CspNonce::generate());
    }

    #[test]
    fn test_policy_mentions_nonce_twice() {
        let nonce = CspNonce("abc".to_owned());
        assert_eq!(
            nonce.policy(),
            "script-src 'self' 'nonce-abc'; style-src 'self' 'nonce-abc'"
        );
    }
}
