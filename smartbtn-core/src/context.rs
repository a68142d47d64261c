//! Read-only views over the incoming request and the outgoing response.
//!
//! The normalizer only ever reads through these traits, so it can be driven
//! by the HTTP layer or by plain values in tests.

/// What the normalizer reads from the incoming request.
pub trait RequestContext {
    /// The value of a query parameter, if it was sent exactly once.
    fn query(&self, key: &str) -> Option<&str>;

    /// The raw `Cookie` header.
    fn cookies(&self) -> Option<&str>;
}

/// What the normalizer reads from the response being prepared.
pub trait ResponseContext {
    /// Per-response CSP nonce set by an upstream layer.
    fn nonce(&self) -> Option<&str>;
}

/// Owned request snapshot: query pairs in arrival order plus the cookie header.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ButtonRequest {
    query: Vec<(String, String)>,
    cookie: Option<String>,
}

impl ButtonRequest {
    pub fn new(query: Vec<(String, String)>, cookie: Option<String>) -> Self {
        Self { query, cookie }
    }

    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    pub fn with_cookie(mut self, cookie: impl Into<String>) -> Self {
        self.cookie = Some(cookie.into());
        self
    }
}

impl RequestContext for ButtonRequest {
    fn query(&self, key: &str) -> Option<&str> {
        let mut values = self
            .query
            .iter()
            .filter(|(name, _)| name == key)
            .map(|(_, value)| value.as_str());
        let first = values.next()?;
        // A repeated key is a list, not a single string.
        if values.next().is_some() {
            return None;
        }
        Some(first)
    }

    fn cookies(&self) -> Option<&str> {
        self.cookie.as_deref()
    }
}

/// Response-local values populated before the normalizer runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResponseLocals {
    pub nonce: Option<String>,
}

impl ResponseContext for ResponseLocals {
    fn nonce(&self) -> Option<&str> {
        self.nonce.as_deref()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_query_single_value() {
        let request = ButtonRequest::default()
            .with_query("clientID", "xyz")
            .with_query("currency", "USD");
        assert_eq!(request.query("clientID"), Some("xyz"));
        assert_eq!(request.query("intent"), None);
    }

    #[test]
    fn test_repeated_query_is_not_a_string() {
        let request = ButtonRequest::default()
            .with_query("fundingEligibility", "a")
            .with_query("fundingEligibility", "b");
        assert_eq!(request.query("fundingEligibility"), None);
    }

    #[test]
    fn test_cookies_and_locals() {
        let request = ButtonRequest::default().with_cookie("pwv=1");
        assert_eq!(request.cookies(), Some("pwv=1"));
        assert_eq!(ButtonRequest::default().cookies(), None);

        let locals = ResponseLocals {
            nonce: Some("abc".to_owned()),
        };
        assert_eq!(locals.nonce(), Some("abc"));
    }
}
