//! Smart button page handler.
//!
//! # Endpoints
//!
//! - `GET /smart/buttons` – render the button page for a client
//!
//! The query string carries the caller configuration. Anything it leaves
//! out falls back to the configured [`ButtonDefaults`].

use axum::{
    Extension, Router,
    extract::{Query, State},
    http::{HeaderMap, StatusCode, header::COOKIE},
    response::{Html, IntoResponse},
    routing::get,
};
use kanau::processor::Processor;
use smartbtn_core::context::{ButtonRequest, RequestContext, ResponseLocals};
use smartbtn_core::params::{NormalizeParams, ParamsError};
use smartbtn_core::render::render_button_page;
use smartbtn_sdk::objects::{
    CardBrand, Country, Env, FundingSource, Intent, Lang, LocaleConfig, RawConfig,
};
use std::borrow::Cow;
use std::str::FromStr;
use uuid::Uuid;

use crate::api::csp::CspNonce;
use crate::config::runtime::ButtonDefaults;
use crate::state::AppState;

/// Build the button router.
pub fn router() -> Router<AppState> {
    Router::new().route("/smart/buttons", get(get_buttons))
}

/// Errors that can occur while serving the button page.
#[derive(Debug, thiserror::Error)]
pub enum ButtonApiError {
    #[error("missing clientID")]
    MissingClientId,
    #[error("invalid {name}: {value}")]
    InvalidParameter { name: &'static str, value: String },
    #[error(transparent)]
    Params(#[from] ParamsError),
    #[error("failed to serialize button parameters: {0}")]
    Render(serde_json::Error),
}

impl IntoResponse for ButtonApiError {
    fn into_response(self) -> axum::response::Response {
        match self {
            ButtonApiError::Render(e) => {
                tracing::error!(error = %e, "Button page render error");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal server error").into_response()
            }
            other => {
                tracing::debug!(error = %other, "Rejected button request");
                (StatusCode::BAD_REQUEST, other.to_string()).into_response()
            }
        }
    }
}

/// `GET /smart/buttons`: render the smart button page.
async fn get_buttons(
    state: State<AppState>,
    Query(query): Query<Vec<(String, String)>>,
    headers: HeaderMap,
    Extension(nonce): Extension<CspNonce>,
) -> Result<impl IntoResponse, ButtonApiError> {
    let request = ButtonRequest::new(query, cookie_header(&headers));

    // One snapshot, so defaults and locales come from the same config generation.
    let buttons = state.buttons().await;
    let config = build_raw_config(&request, &buttons.defaults)?;

    let params = buttons
        .normalizer()
        .process(NormalizeParams {
            config,
            request,
            response: ResponseLocals {
                nonce: Some(nonce.0),
            },
        })
        .await?;

    tracing::info!(
        client_id = %params.client_id,
        button_session_id = %params.button_session_id,
        country = %params.country,
        lang = %params.lang,
        "Rendering smart buttons"
    );

    let html = render_button_page(&params).map_err(ButtonApiError::Render)?;
    Ok(Html(html))
}

/// Join every `Cookie` header into one string, the way a single header would carry them.
///
/// Browsers send UTF-8 cookie values, so non-ASCII bytes are decoded lossily
/// rather than dropping the whole header.
fn cookie_header(headers: &HeaderMap) -> Option<String> {
    let cookies: Vec<Cow<'_, str>> = headers
        .get_all(COOKIE)
        .iter()
        .map(|value| String::from_utf8_lossy(value.as_bytes()))
        .collect();
    if cookies.is_empty() {
        None
    } else {
        Some(cookies.join("; "))
    }
}

/// Assemble the caller configuration from the query string.
pub fn build_raw_config(
    request: &ButtonRequest,
    defaults: &ButtonDefaults,
) -> Result<RawConfig, ButtonApiError> {
    let client_id = request
        .query("clientID")
        .filter(|id| !id.is_empty())
        .ok_or(ButtonApiError::MissingClientId)?;

    let country = request.query("locale.country").map(Country::from);
    let lang = request.query("locale.lang").map(Lang::from);
    let locale = (country.is_some() || lang.is_some()).then_some(LocaleConfig { country, lang });

    let button_session_id = match request.query("buttonSessionID") {
        Some(id) if !id.is_empty() => id.to_owned(),
        _ => Uuid::new_v4().to_string(),
    };

    Ok(RawConfig {
        env: parse_param::<Env>(request, "env")?.unwrap_or(defaults.env),
        client_id: client_id.to_owned(),
        locale,
        buyer_country: request.query("buyerCountry").map(Country::from),
        currency: request
            .query("currency")
            .map(Into::into)
            .unwrap_or_else(|| defaults.currency.clone()),
        intent: parse_param::<Intent>(request, "intent")?.unwrap_or(defaults.intent),
        commit: parse_param::<bool>(request, "commit")?.unwrap_or(defaults.commit),
        vault: parse_param::<bool>(request, "vault")?.unwrap_or(defaults.vault),
        disable_funding: parse_list::<FundingSource>(request, "disable-funding")?,
        disable_card: parse_list::<CardBrand>(request, "disable-card")?,
        merchant_id: request.query("merchantID").map(str::to_owned),
        button_session_id,
        client_access_token: request.query("clientAccessToken").map(str::to_owned),
        debug: parse_param::<bool>(request, "debug")?,
    })
}

fn parse_param<T: FromStr>(
    request: &ButtonRequest,
    name: &'static str,
) -> Result<Option<T>, ButtonApiError> {
    request
        .query(name)
        .map(|value| {
            value.parse().map_err(|_| ButtonApiError::InvalidParameter {
                name,
                value: value.to_owned(),
            })
        })
        .transpose()
}

fn parse_list<T: FromStr>(
    request: &ButtonRequest,
    name: &'static str,
) -> Result<Vec<T>, ButtonApiError> {
    let Some(list) = request.query(name) else {
        return Ok(Vec::new());
    };
    list.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(|item| {
            item.parse().map_err(|_| ButtonApiError::InvalidParameter {
                name,
                value: item.to_owned(),
            })
        })
        .collect()
}
