use compact_str::CompactString;
use serde::{Deserialize, Serialize};
use std::fmt;

/// ISO 3166 alpha-2 country code, e.g. `US`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Country(CompactString);

/// Two-letter language code, e.g. `en`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Lang(CompactString);

macro_rules! code_newtype {
    ($name:ident) => {
        impl $name {
            pub fn new(code: impl Into<CompactString>) -> Self {
                Self(code.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(code: &str) -> Self {
                Self::new(code)
            }
        }
    };
}

code_newtype!(Country);
code_newtype!(Lang);

/// Caller-supplied locale; either half may be left for the renderer to fill.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocaleConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<Country>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lang: Option<Lang>,
}

impl LocaleConfig {
    pub fn new(country: impl Into<Country>, lang: impl Into<Lang>) -> Self {
        Self {
            country: Some(country.into()),
            lang: Some(lang.into()),
        }
    }
}
