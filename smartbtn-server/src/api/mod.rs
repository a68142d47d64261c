//! HTTP API handlers.
//!
//! - [`buttons`]: the smart button page
//! - [`csp`]: per-response CSP nonce middleware

pub mod buttons;
pub mod csp;
