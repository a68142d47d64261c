//! Render parameters: what the caller supplies and what the renderer consumes.

use compact_str::CompactString;
use serde::{Deserialize, Serialize};

use super::eligibility::FundingEligibility;
use super::funding::{CardBrand, FundingSource, str_enum_impls};
use super::locale::{Country, Lang, LocaleConfig};

/// Deployment environment the buttons talk to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Env {
    Local,
    Stage,
    Sandbox,
    Production,
    Test,
}

impl Env {
    pub const ALL: [Env; 5] = [Env::Local, Env::Stage, Env::Sandbox, Env::Production, Env::Test];

    pub const fn as_str(self) -> &'static str {
        match self {
            Env::Local => "local",
            Env::Stage => "stage",
            Env::Sandbox => "sandbox",
            Env::Production => "production",
            Env::Test => "test",
        }
    }
}

/// What the merchant intends to do with the order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intent {
    Capture,
    Authorize,
    Order,
    Tokenize,
    Subscription,
}

impl Intent {
    pub const ALL: [Intent; 5] = [
        Intent::Capture,
        Intent::Authorize,
        Intent::Order,
        Intent::Tokenize,
        Intent::Subscription,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Intent::Capture => "capture",
            Intent::Authorize => "authorize",
            Intent::Order => "order",
            Intent::Tokenize => "tokenize",
            Intent::Subscription => "subscription",
        }
    }
}

str_enum_impls!(Env, "env");
str_enum_impls!(Intent, "intent");

/// Caller-supplied button configuration, provided once per render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawConfig {
    pub env: Env,
    #[serde(rename = "clientID")]
    pub client_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<LocaleConfig>,
    #[serde(default)]
    pub buyer_country: Option<Country>,
    pub currency: CompactString,
    pub intent: Intent,
    pub commit: bool,
    pub vault: bool,
    #[serde(default)]
    pub disable_funding: Vec<FundingSource>,
    #[serde(default)]
    pub disable_card: Vec<CardBrand>,
    #[serde(default, rename = "merchantID")]
    pub merchant_id: Option<String>,
    #[serde(rename = "buttonSessionID")]
    pub button_session_id: String,
    #[serde(default)]
    pub client_access_token: Option<String>,
    #[serde(default)]
    pub debug: Option<bool>,
}

/// Fully resolved render context, consumed once by the page renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedParams {
    pub env: Env,
    #[serde(rename = "clientID")]
    pub client_id: String,
    pub country: Country,
    pub lang: Lang,
    pub buyer_country: Option<Country>,
    pub currency: CompactString,
    pub intent: Intent,
    pub commit: bool,
    pub vault: bool,
    pub disable_funding: Vec<FundingSource>,
    pub disable_card: Vec<CardBrand>,
    #[serde(rename = "merchantID")]
    pub merchant_id: Option<String>,
    #[serde(rename = "buttonSessionID")]
    pub button_session_id: String,
    /// Never embedded in rendered pages.
    #[serde(skip_serializing)]
    pub client_access_token: Option<String>,
    pub csp_nonce: String,
    pub funding_eligibility: FundingEligibility,
    pub debug: bool,
}
