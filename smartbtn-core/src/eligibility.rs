//! Funding eligibility resolution for a single request.

use smartbtn_sdk::codec::{CodecError, FUNDING_ELIGIBILITY_PARAM, decode_funding_eligibility};
use smartbtn_sdk::objects::{FundingEligibility, FundingSource};
use tracing::debug;

use crate::context::RequestContext;

/// Cookie substring that marks a browser as Venmo-capable.
pub const VENMO_COOKIE_MARKER: &str = "pwv";

/// Errors that can occur while resolving eligibility.
#[derive(Debug, thiserror::Error)]
pub enum EligibilityError {
    #[error("malformed fundingEligibility parameter: {0}")]
    Malformed(#[from] CodecError),
}

/// Resolve the funding eligibility for a request.
///
/// Without a `fundingEligibility` query value only PayPal is eligible. A
/// `pwv` cookie forces Venmo eligible on top of whatever was decoded.
pub fn resolve_funding_eligibility(
    req: &impl RequestContext,
) -> Result<FundingEligibility, EligibilityError> {
    let eligibility = match req
        .query(FUNDING_ELIGIBILITY_PARAM)
        .filter(|encoded| !encoded.is_empty())
    {
        Some(encoded) => decode_funding_eligibility(encoded)?,
        None => FundingEligibility::paypal_only(),
    };

    let venmo_cookie = req
        .cookies()
        .is_some_and(|cookies| cookies.contains(VENMO_COOKIE_MARKER));
    if venmo_cookie {
        debug!("Venmo cookie present, forcing venmo eligible");
        return Ok(eligibility.with_eligible(FundingSource::Venmo));
    }

    Ok(eligibility)
}
