//! Codec for the `fundingEligibility` query parameter.
//!
//! The parameter carries base64-encoded UTF-8 JSON. Both the standard and the
//! URL-safe alphabet are accepted and padding is optional, since callers
//! build the value with whatever encoder their platform ships.

use crate::objects::FundingEligibility;

/// Query parameter carrying the encoded eligibility.
pub const FUNDING_ELIGIBILITY_PARAM: &str = "fundingEligibility";

/// Errors produced while decoding an eligibility payload.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    #[error("invalid base64 encoding")]
    InvalidBase64,
    #[error("payload is not valid utf-8")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
    #[error("invalid json: {0}")]
    Json(#[from] serde_json::Error),
}

/// Decode a base64 JSON payload into a typed [`FundingEligibility`].
pub fn decode_funding_eligibility(encoded: &str) -> Result<FundingEligibility, CodecError> {
    let json = String::from_utf8(decode_base64(encoded)?)?;
    Ok(serde_json::from_str(&json)?)
}

/// Encode eligibility the way the button SDK sends it (standard alphabet, padded).
pub fn encode_funding_eligibility(
    eligibility: &FundingEligibility,
) -> Result<String, serde_json::Error> {
    let json = serde_json::to_string(eligibility)?;
    Ok(fast32::base64::RFC4648.encode(json.as_bytes()))
}

fn decode_base64(encoded: &str) -> Result<Vec<u8>, CodecError> {
    // MIME encoders wrap lines; whitespace anywhere is not part of the payload.
    let compact: String = encoded
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();
    let unpadded = compact.trim_end_matches('=');
    let url_safe = unpadded.contains(['-', '_']);
    let decoded = if url_safe {
        fast32::base64::RFC4648_URL_NOPAD.decode_str(unpadded)
    } else {
        fast32::base64::RFC4648_NOPAD.decode_str(unpadded)
    };
    decoded.map_err(|_| CodecError::InvalidBase64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objects::{CardBrand, CardVendorEligibility, FundingSource, FundingSourceEligibility};

    fn sample() -> FundingEligibility {
        FundingEligibility::paypal_only().with_source(
            FundingSource::Card,
            FundingSourceEligibility::eligible()
                .with_vendor(CardBrand::Visa, CardVendorEligibility::eligible()),
        )
    }

    #[test]
    fn test_encode_then_decode_is_identity() {
        let encoded = encode_funding_eligibility(&sample()).unwrap();
        assert_eq!(decode_funding_eligibility(&encoded).unwrap(), sample());
    }

    #[test]
    fn test_decode_known_payload() {
        // {"paypal":{"eligible":true}}
        let decoded = decode_funding_eligibility("eyJwYXlwYWwiOnsiZWxpZ2libGUiOnRydWV9fQ==").unwrap();
        assert_eq!(decoded, FundingEligibility::paypal_only());

        let unpadded = decode_funding_eligibility("eyJwYXlwYWwiOnsiZWxpZ2libGUiOnRydWV9fQ").unwrap();
        assert_eq!(unpadded, FundingEligibility::paypal_only());
    }

    #[test]
    fn test_decode_url_safe_alphabet() {
        let standard = encode_funding_eligibility(&sample()).unwrap();
        let url_safe = standard.replace('+', "-").replace('/', "_");
        assert_eq!(decode_funding_eligibility(&url_safe).unwrap(), sample());
    }

    #[test]
    fn test_decode_line_wrapped_payload() {
        let wrapped = "eyJwYXlwYWwiOnsi\r\nZWxpZ2libGUiOnRy\n dWV9fQ==\n";
        assert_eq!(
            decode_funding_eligibility(wrapped).unwrap(),
            FundingEligibility::paypal_only()
        );
    }

    #[test]
    fn test_decode_errors() {
        assert!(matches!(
            decode_funding_eligibility("not*base64"),
            Err(CodecError::InvalidBase64)
        ));

        let not_json = fast32::base64::RFC4648.encode(b"{paypal");
        assert!(matches!(
            decode_funding_eligibility(&not_json),
            Err(CodecError::Json(_))
        ));

        let not_utf8 = fast32::base64::RFC4648.encode(&[0xff, 0xfe, 0xfd]);
        assert!(matches!(
            decode_funding_eligibility(&not_utf8),
            Err(CodecError::InvalidUtf8(_))
        ));
    }
}
