//! Country to language lookup table.
//!
//! The table is injected into the normalizer rather than read from a global,
//! and it is validated when built: every registered country has at least one
//! language and the default country is registered. Lookups against a valid
//! table can then only fail for countries the caller supplied.

use smartbtn_sdk::objects::{Country, Lang};
use std::collections::HashMap;

/// Errors raised while building a [`LocaleTable`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LocaleTableError {
    #[error("default country {0} has no registered languages")]
    DefaultCountryMissing(Country),
    #[error("country {0} has an empty language list")]
    EmptyLanguages(Country),
}

/// Immutable country → ordered language list mapping plus a default country.
///
/// The first language of each list is that country's default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleTable {
    default_country: Country,
    languages: HashMap<Country, Vec<Lang>>,
}

const DEFAULT_COUNTRY: &str = "US";

const BUILTIN_LANGUAGES: &[(&str, &[&str])] = &[
    ("AD", &["en", "fr", "es", "zh"]),
    ("AE", &["en", "fr", "es", "zh", "ar"]),
    ("AR", &["es", "en"]),
    ("AT", &["de", "en"]),
    ("AU", &["en"]),
    ("BE", &["en", "nl", "fr"]),
    ("BG", &["bg", "en"]),
    ("BR", &["pt", "en"]),
    ("CA", &["en", "fr"]),
    ("CH", &["de", "fr", "en"]),
    ("CL", &["es", "en"]),
    ("CN", &["zh"]),
    ("CO", &["es", "en"]),
    ("CZ", &["cs", "en", "fr", "es", "zh"]),
    ("DE", &["de", "en"]),
    ("DK", &["da", "en"]),
    ("EE", &["et", "en", "ru"]),
    ("ES", &["es", "en"]),
    ("FI", &["fi", "en", "fr", "es", "zh"]),
    ("FR", &["fr", "en"]),
    ("GB", &["en"]),
    ("GR", &["el", "en"]),
    ("HK", &["en", "zh"]),
    ("HU", &["hu", "en"]),
    ("ID", &["id", "en"]),
    ("IE", &["en"]),
    ("IL", &["he", "en"]),
    ("IN", &["en"]),
    ("IT", &["it", "en"]),
    ("JP", &["ja", "en"]),
    ("KR", &["ko", "en"]),
    ("LT", &["lt", "en", "ru", "zh"]),
    ("LU", &["en", "de", "fr", "es", "zh"]),
    ("LV", &["lv", "en", "ru"]),
    ("MX", &["es", "en"]),
    ("MY", &["en"]),
    ("NL", &["nl", "en"]),
    ("NO", &["no", "en"]),
    ("NZ", &["en"]),
    ("PH", &["en"]),
    ("PL", &["pl", "en"]),
    ("PT", &["pt", "en"]),
    ("RO", &["ro", "en", "fr", "es", "zh"]),
    ("RU", &["ru", "en"]),
    ("SE", &["sv", "en"]),
    ("SG", &["en"]),
    ("SI", &["sl", "en", "fr", "es", "zh"]),
    ("SK", &["sk", "en", "fr", "es", "zh"]),
    ("TH", &["th", "en"]),
    ("TR", &["tr", "en"]),
    ("TW", &["zh", "en"]),
    ("US", &["en", "fr", "es", "zh"]),
    ("VN", &["en"]),
    ("ZA", &["en", "fr", "es", "zh"]),
];

impl LocaleTable {
    /// Build and validate a table.
    pub fn new(
        default_country: Country,
        languages: HashMap<Country, Vec<Lang>>,
    ) -> Result<Self, LocaleTableError> {
        let mut countries: Vec<&Country> = languages.keys().collect();
        countries.sort();
        if let Some(empty) = countries
            .into_iter()
            .find(|country| languages.get(*country).is_some_and(Vec::is_empty))
        {
            return Err(LocaleTableError::EmptyLanguages(empty.clone()));
        }
        if !languages.contains_key(&default_country) {
            return Err(LocaleTableError::DefaultCountryMissing(default_country));
        }
        Ok(Self {
            default_country,
            languages,
        })
    }

    /// The table shipped with the renderer.
    pub fn builtin() -> Self {
        let languages = BUILTIN_LANGUAGES
            .iter()
            .map(|(country, langs)| {
                (
                    Country::from(*country),
                    langs.iter().copied().map(Lang::from).collect(),
                )
            })
            .collect();
        Self {
            default_country: Country::from(DEFAULT_COUNTRY),
            languages,
        }
    }

    pub fn default_country(&self) -> &Country {
        &self.default_country
    }

    /// Registered languages for `country`, default first.
    pub fn languages(&self, country: &Country) -> Option<&[Lang]> {
        self.languages.get(country).map(Vec::as_slice)
    }

    pub fn default_lang(&self, country: &Country) -> Option<&Lang> {
        self.languages(country)?.first()
    }

    pub fn supports(&self, country: &Country, lang: &Lang) -> bool {
        self.languages(country)
            .is_some_and(|langs| langs.contains(lang))
    }

    pub fn len(&self) -> usize {
        self.languages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }
}

impl Default for LocaleTable {
    fn default() -> Self {
        Self::builtin()
    }
}
