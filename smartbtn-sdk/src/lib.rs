//! Shared types for the smart payment buttons renderer.
//!
//! - [`objects`] holds the wire and render types (funding sources, eligibility
//!   records, locales, render parameters).
//! - [`codec`] encodes and decodes the base64 `fundingEligibility` payload.
//! - [`fixtures`] holds the declarative mock API catalog used by button tests.

pub mod codec;
pub mod fixtures;
pub mod objects;
