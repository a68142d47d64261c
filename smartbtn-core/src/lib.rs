#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![forbid(unsafe_code)]

pub mod context;
pub mod eligibility;
pub mod locale;
pub mod markup;
pub mod nonce;
pub mod params;
pub mod render;
pub mod style;
