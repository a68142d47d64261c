//! Parameter normalization: merges caller configuration, request state and
//! response-local state into the [`ResolvedParams`] the page renderer consumes.

use kanau::processor::Processor;
use smartbtn_sdk::objects::{Country, RawConfig, ResolvedParams};
use std::sync::Arc;
use tracing::warn;

use crate::context::{ButtonRequest, RequestContext, ResponseContext, ResponseLocals};
use crate::eligibility::{EligibilityError, resolve_funding_eligibility};
use crate::locale::LocaleTable;
use crate::nonce::resolve_nonce;

/// Errors that can occur while resolving render parameters.
#[derive(Debug, thiserror::Error)]
pub enum ParamsError {
    #[error(transparent)]
    Eligibility(#[from] EligibilityError),
    #[error("no languages registered for country {0}")]
    UnsupportedCountry(Country),
}

/// Resolve the render context for one request.
///
/// `country` falls back to the table's default country and `lang` to the
/// first language registered for the resolved country. Every other field of
/// `config` is copied through unchanged.
pub fn get_params(
    config: &RawConfig,
    req: &impl RequestContext,
    res: &impl ResponseContext,
    locales: &LocaleTable,
) -> Result<ResolvedParams, ParamsError> {
    let locale = config.locale.clone().unwrap_or_default();
    let debug = config.debug.unwrap_or(false);

    let country = locale
        .country
        .unwrap_or_else(|| locales.default_country().clone());
    let lang = match locale.lang {
        Some(lang) => {
            if !locales.supports(&country, &lang) {
                warn!(%country, %lang, "Language is not registered for country, passing through");
            }
            lang
        }
        None => locales
            .default_lang(&country)
            .cloned()
            .ok_or_else(|| ParamsError::UnsupportedCountry(country.clone()))?,
    };

    let csp_nonce = resolve_nonce(res);
    let funding_eligibility = resolve_funding_eligibility(req)?;

    Ok(ResolvedParams {
        env: config.env,
        client_id: config.client_id.clone(),
        country,
        lang,
        buyer_country: config.buyer_country.clone(),
        currency: config.currency.clone(),
        intent: config.intent,
        commit: config.commit,
        vault: config.vault,
        disable_funding: config.disable_funding.clone(),
        disable_card: config.disable_card.clone(),
        merchant_id: config.merchant_id.clone(),
        button_session_id: config.button_session_id.clone(),
        client_access_token: config.client_access_token.clone(),
        csp_nonce,
        funding_eligibility,
        debug,
    })
}

/// Input for [`ParamsNormalizer`].
#[derive(Debug, Clone)]
pub struct NormalizeParams {
    pub config: RawConfig,
    pub request: ButtonRequest,
    pub response: ResponseLocals,
}

/// Runs [`get_params`] against a shared locale table.
#[derive(Debug, Clone)]
pub struct ParamsNormalizer {
    locales: Arc<LocaleTable>,
}

impl ParamsNormalizer {
    pub fn new(locales: Arc<LocaleTable>) -> Self {
        Self { locales }
    }

    pub fn locales(&self) -> &LocaleTable {
        &self.locales
    }
}

impl Processor<NormalizeParams> for ParamsNormalizer {
    type Output = ResolvedParams;
    type Error = ParamsError;
    #[tracing::instrument(skip_all, err, name = "NormalizeParams")]
    async fn process(&self, input: NormalizeParams) -> Result<ResolvedParams, ParamsError> {
        get_params(
            &input.config,
            &input.request,
            &input.response,
            &self.locales,
        )
    }
}
