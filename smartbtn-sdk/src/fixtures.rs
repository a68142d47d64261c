//! Declarative mock API endpoints for exercising checkout flows in tests.
//!
//! Each [`MockEndpoint`] pairs a method and a URI pattern with the JSON body it
//! answers with. A [`MockRegistry`] resolves requests to the first enabled
//! endpoint that matches and counts calls, so a test can assert that an
//! endpoint it expected to be hit actually was.

use regex::Regex;
use serde_json::{Value, json};

/// HTTP method of a mocked endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// How a mocked endpoint matches request paths.
#[derive(Debug, Clone)]
pub enum UriPattern {
    Exact(String),
    /// Unanchored: matches if the expression occurs anywhere in the path.
    Regex(Regex),
}

impl UriPattern {
    pub fn matches(&self, path: &str) -> bool {
        match self {
            UriPattern::Exact(uri) => uri == path,
            UriPattern::Regex(re) => re.is_match(path),
        }
    }
}

/// A single mocked endpoint.
#[derive(Debug, Clone)]
pub struct MockEndpoint {
    pub method: Method,
    pub uri: UriPattern,
    pub data: Value,
    pub enabled: bool,
    expect_calls: bool,
    calls: usize,
}

/// Raised by [`MockRegistry::done`] when expected calls never happened.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("expected calls to mocked endpoints were not made: {0:?}")]
pub struct UncalledEndpoints(pub Vec<String>);

impl MockEndpoint {
    pub fn new(method: Method, uri: UriPattern, data: Value) -> Self {
        Self {
            method,
            uri,
            data,
            enabled: true,
            expect_calls: false,
            calls: 0,
        }
    }

    fn exact(method: Method, uri: impl Into<String>, data: Value) -> Self {
        Self::new(method, UriPattern::Exact(uri.into()), data)
    }

    fn pattern(method: Method, pattern: &str, data: Value) -> Self {
        // Patterns are compile-time literals in this module.
        #[allow(clippy::expect_used)]
        let re = Regex::new(pattern).expect("valid mock endpoint pattern");
        Self::new(method, UriPattern::Regex(re), data)
    }

    /// Replace the response body.
    pub fn with_data(mut self, data: Value) -> Self {
        self.data = data;
        self
    }

    /// Mark the endpoint as one that must be called before [`MockRegistry::done`].
    pub fn expect_calls(mut self) -> Self {
        self.expect_calls = true;
        self
    }

    pub fn enable(&mut self) {
        self.enabled = true;
    }

    pub fn disable(&mut self) {
        self.enabled = false;
    }

    pub fn calls(&self) -> usize {
        self.calls
    }

    pub fn matches(&self, method: Method, path: &str) -> bool {
        self.enabled && self.method == method && self.uri.matches(path)
    }

    fn describe(&self) -> String {
        let uri = match &self.uri {
            UriPattern::Exact(uri) => uri.clone(),
            UriPattern::Regex(re) => re.as_str().to_owned(),
        };
        format!("{:?} {}", self.method, uri)
    }
}

fn success(data: Value) -> Value {
    json!({ "ack": "success", "data": data })
}

pub fn create_access_token() -> MockEndpoint {
    MockEndpoint::exact(
        Method::Post,
        "/v1/oauth2/token",
        json!({ "access_token": "abc123" }),
    )
}

pub fn create_order() -> MockEndpoint {
    MockEndpoint::pattern(
        Method::Post,
        "/v2/checkout/orders",
        json!({ "id": "ABCDEFG0123456789" }),
    )
}

pub fn get_order() -> MockEndpoint {
    MockEndpoint::pattern(Method::Get, "/smart/api/order/[^/]+", success(json!({})))
}

pub fn capture_order() -> MockEndpoint {
    MockEndpoint::pattern(
        Method::Post,
        "/smart/api/order/[^/]+/capture",
        success(json!({})),
    )
}

pub fn authorize_order() -> MockEndpoint {
    MockEndpoint::pattern(
        Method::Post,
        "/smart/api/order/[^/]+/authorize",
        success(json!({})),
    )
}

pub fn map_billing_token() -> MockEndpoint {
    MockEndpoint::pattern(
        Method::Post,
        "/smart/api/payment/[^/]+/ectoken",
        success(json!({ "token": "ABCDEFG12345" })),
    )
}

pub fn patch_order() -> MockEndpoint {
    MockEndpoint::pattern(
        Method::Post,
        "/smart/api/order/[^/]+/patch",
        success(json!({})),
    )
}

pub fn subscription_id_to_cart_id(subscription_id: &str, cart_id: &str) -> MockEndpoint {
    MockEndpoint::exact(
        Method::Post,
        format!("/smart/api/billagmt/subscriptions/{subscription_id}/cartid"),
        success(json!({ "token": cart_id })),
    )
}

pub fn get_subscription(subscription_id: &str) -> MockEndpoint {
    MockEndpoint::exact(
        Method::Get,
        format!("/smart/api/billagmt/subscriptions/{subscription_id}"),
        success(json!({
            "status": "APPROVAL_PENDING",
            "id": subscription_id,
            "create_time": "2019-05-13T13:50:17Z"
        })),
    )
}

pub fn create_subscription(subscription_id: &str) -> MockEndpoint {
    MockEndpoint::exact(
        Method::Post,
        "v1/billing/subscriptions",
        json!({
            "status": "APPROVAL_PENDING",
            "id": subscription_id,
            "create_time": "2019-05-10T13:50:17Z"
        }),
    )
}

pub fn revise_subscription(subscription_id: &str) -> MockEndpoint {
    MockEndpoint::exact(
        Method::Post,
        format!("v1/billing/subscriptions/{subscription_id}/revise"),
        json!({
            "status": "APPROVAL_PENDING",
            "id": subscription_id,
            "create_time": "2019-05-10T13:50:17Z"
        }),
    )
}

pub fn activate_subscription(subscription_id: &str) -> MockEndpoint {
    MockEndpoint::exact(
        Method::Post,
        format!("/smart/api/billagmt/subscriptions/{subscription_id}/activate"),
        success(json!({})),
    )
}

pub fn graphql() -> MockEndpoint {
    MockEndpoint::exact(
        Method::Post,
        "/graphql",
        json!({
            "data": {
                "checkoutSession": {
                    "cart": {
                        "intent": "capture",
                        "amounts": { "total": { "currencyCode": "USD" } }
                    }
                }
            }
        }),
    )
}

pub fn logger() -> MockEndpoint {
    MockEndpoint::exact(Method::Post, "/xoplatform/logger/api/logger", json!({}))
}

pub fn validate_payment_method() -> MockEndpoint {
    MockEndpoint::pattern(
        Method::Post,
        "/v2/checkout/orders/[^/]+/validate-payment-method",
        json!({}),
    )
}

/// Ordered set of mocked endpoints. Earlier registrations win.
#[derive(Debug, Clone, Default)]
pub struct MockRegistry {
    endpoints: Vec<MockEndpoint>,
}

impl MockRegistry {
    /// Registry with the endpoints every checkout test listens on.
    pub fn with_defaults() -> Self {
        let mut registry = Self::default();
        for endpoint in [
            create_access_token(),
            create_order(),
            get_order(),
            capture_order(),
            authorize_order(),
            map_billing_token(),
            patch_order(),
            subscription_id_to_cart_id("I-SUBSCRIPTIONID", "CARTIDOFSUBSCRIPTIONS"),
            graphql(),
            logger(),
            validate_payment_method(),
        ] {
            registry.register(endpoint);
        }
        registry
    }

    /// Register an endpoint; returns its index for later enable/disable.
    pub fn register(&mut self, endpoint: MockEndpoint) -> usize {
        self.endpoints.push(endpoint);
        self.endpoints.len() - 1
    }

    /// Register an endpoint ahead of all existing ones, overriding them.
    pub fn register_override(&mut self, endpoint: MockEndpoint) {
        self.endpoints.insert(0, endpoint);
    }

    pub fn endpoint_mut(&mut self, index: usize) -> Option<&mut MockEndpoint> {
        self.endpoints.get_mut(index)
    }

    /// Resolve a request to the response body of the first matching endpoint.
    pub fn find(&mut self, method: Method, path: &str) -> Option<&Value> {
        let endpoint = self
            .endpoints
            .iter_mut()
            .find(|endpoint| endpoint.matches(method, path))?;
        endpoint.calls += 1;
        Some(&endpoint.data)
    }

    /// Check that every endpoint registered with `expect_calls` was hit.
    pub fn done(&self) -> Result<(), UncalledEndpoints> {
        let uncalled: Vec<String> = self
            .endpoints
            .iter()
            .filter(|endpoint| endpoint.expect_calls && endpoint.calls == 0)
            .map(MockEndpoint::describe)
            .collect();
        if uncalled.is_empty() {
            Ok(())
        } else {
            Err(UncalledEndpoints(uncalled))
        }
    }
}
