//! Button page rendering.

use smartbtn_sdk::objects::ResolvedParams;

use crate::markup::{ButtonEntry, button_entries};
use crate::style::BUTTON_STYLE;

/// Element id of the JSON script carrying the render parameters.
pub const PARAMS_SCRIPT_ID: &str = "smart-buttons-params";

/// Render the full button page for `params`.
///
/// Buttons follow the eligibility order, minus disabled funding sources and
/// disabled card brands. The parameters are embedded as JSON for the client
/// script; the client access token is never included.
pub fn render_button_page(params: &ResolvedParams) -> Result<String, serde_json::Error> {
    let nonce = escape_html(&params.csp_nonce);
    let env = params.env.as_str();

    let buttons = button_entries(&params.funding_eligibility)
        .into_iter()
        .filter(|entry| is_enabled(entry, params))
        .map(|entry| entry.to_html())
        .collect::<Vec<_>>()
        .join("\n");

    let json = script_safe_json(&serde_json::to_string(params)?);

    Ok(format!(
        r#"<!DOCTYPE html>
<html lang="{lang}">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<style nonce="{nonce}">{BUTTON_STYLE}</style>
</head>
<body>
<div class="buttons-container">
<div class="paypal-button-container paypal-button-env-{env}" data-button-session-id="{session}">
{buttons}
</div>
</div>
<div class="card-fields-container" id="card-fields-container"></div>
<script nonce="{nonce}" type="application/json" id="{PARAMS_SCRIPT_ID}">{json}</script>
</body>
</html>
"#,
        lang = escape_html(params.lang.as_str()),
        session = escape_html(&params.button_session_id),
    ))
}

fn is_enabled(entry: &ButtonEntry<'_>, params: &ResolvedParams) -> bool {
    if params.disable_funding.contains(&entry.funding_source) {
        return false;
    }
    entry
        .card
        .is_none_or(|card| !params.disable_card.contains(&card))
}

/// Keep a JSON document from terminating the surrounding `<script>` element.
fn script_safe_json(json: &str) -> String {
    json.replace('<', "\\u003c")
        .replace('>', "\\u003e")
        .replace('&', "\\u0026")
}

/// Escape text for use in HTML content or a quoted attribute value.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use smartbtn_sdk::objects::{
        CardBrand, CardVendorEligibility, Env, FundingEligibility, FundingSource,
        FundingSourceEligibility, Intent,
    };

    fn params() -> ResolvedParams {
        ResolvedParams {
            env: Env::Sandbox,
            client_id: "xyz".to_owned(),
            country: "US".into(),
            lang: "en".into(),
            buyer_country: None,
            currency: "USD".into(),
            intent: Intent::Capture,
            commit: true,
            vault: false,
            disable_funding: vec![],
            disable_card: vec![],
            merchant_id: None,
            button_session_id: "session-1".to_owned(),
            client_access_token: Some("secret-token".to_owned()),
            csp_nonce: "abc123".to_owned(),
            funding_eligibility: FundingEligibility::paypal_only()
                .with_source(FundingSource::Venmo, FundingSourceEligibility::eligible())
                .with_source(
                    FundingSource::Card,
                    FundingSourceEligibility::eligible()
                        .with_vendor(CardBrand::Visa, CardVendorEligibility::eligible())
                        .with_vendor(CardBrand::Amex, CardVendorEligibility::eligible()),
                ),
            debug: false,
        }
    }

    #[test]
    fn test_renders_container_and_buttons() {
        let html = render_button_page(&params()).unwrap();

        assert!(html.contains(r#"<html lang="en">"#));
        assert!(html.contains(r#"class="paypal-button-container paypal-button-env-sandbox""#));
        assert!(html.contains(r#"<style nonce="abc123">"#));
        assert!(html.contains(BUTTON_STYLE));
        assert!(html.contains(r#"<button data-funding-source="paypal"></button>"#));
        assert!(html.contains(r#"<button data-funding-source="venmo"></button>"#));
        assert!(html.contains(r#"data-card="visa""#));
        assert!(html.contains(r#"data-card="amex""#));
    }

    #[test]
    fn test_disabled_sources_and_cards_are_skipped() {
        let params = ResolvedParams {
            disable_funding: vec![FundingSource::Venmo],
            disable_card: vec![CardBrand::Amex],
            ..params()
        };
        let html = render_button_page(&params).unwrap();

        assert!(!html.contains(r#"data-funding-source="venmo""#));
        assert!(!html.contains(r#"data-card="amex""#));
        assert!(html.contains(r#"data-card="visa""#));
    }

    #[test]
    fn test_embedded_params_exclude_access_token() {
        let html = render_button_page(&params()).unwrap();

        assert!(html.contains(r#"<script nonce="abc123" type="application/json" id="smart-buttons-params">"#));
        assert!(html.contains(r#""clientID":"xyz""#));
        assert!(html.contains(r#""cspNonce":"abc123""#));
        assert!(!html.contains("secret-token"));
    }

    #[test]
    fn test_embedded_json_cannot_close_the_script() {
        let params = ResolvedParams {
            button_session_id: "</script><script>alert(1)".to_owned(),
            ..params()
        };
        let html = render_button_page(&params).unwrap();
        assert_eq!(html.matches("</script>").count(), 1);
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
    }
}
