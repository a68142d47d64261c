//! Funding eligibility records.
//!
//! The wire shape is a JSON object keyed by funding source id:
//!
//! ```text
//! { "<source>": { "eligible": bool,
//!                 "vaultedInstruments"?: [{ "id": string }],
//!                 "vendors"?: { "<brand>": { "eligible": bool, "vaultedInstruments"?: [...] } } } }
//! ```
//!
//! Decoding is strict about the shape of known entries and lenient about
//! everything else: unknown source or brand keys are dropped, `null`
//! entries are treated as absent and a missing `eligible` reads as `false`.
//! Anything absent from the map is ineligible.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;

use super::funding::{CardBrand, FundingSource};

/// A previously stored payment method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VaultedInstrument {
    pub id: String,
}

impl VaultedInstrument {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

/// Eligibility of a single card brand under the `card` funding source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardVendorEligibility {
    #[serde(default, deserialize_with = "null_as_false")]
    pub eligible: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vaulted_instruments: Option<Vec<VaultedInstrument>>,
}

impl CardVendorEligibility {
    pub fn eligible() -> Self {
        Self {
            eligible: true,
            vaulted_instruments: None,
        }
    }

    pub fn with_vaulted(mut self, instruments: Vec<VaultedInstrument>) -> Self {
        self.vaulted_instruments = Some(instruments);
        self
    }

    /// Vaulted instruments in list order; empty when none were sent.
    pub fn vaulted(&self) -> &[VaultedInstrument] {
        self.vaulted_instruments.as_deref().unwrap_or_default()
    }
}

/// Eligibility record for one funding source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FundingSourceEligibility {
    #[serde(default, deserialize_with = "null_as_false")]
    pub eligible: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vaulted_instruments: Option<Vec<VaultedInstrument>>,
    /// Per-brand eligibility; only meaningful for [`FundingSource::Card`].
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "optional_known_entries"
    )]
    pub vendors: Option<BTreeMap<CardBrand, CardVendorEligibility>>,
}

impl FundingSourceEligibility {
    pub fn eligible() -> Self {
        Self {
            eligible: true,
            ..Self::default()
        }
    }

    pub fn ineligible() -> Self {
        Self::default()
    }

    pub fn with_vaulted(mut self, instruments: Vec<VaultedInstrument>) -> Self {
        self.vaulted_instruments = Some(instruments);
        self
    }

    pub fn with_vendor(mut self, brand: CardBrand, vendor: CardVendorEligibility) -> Self {
        self.vendors
            .get_or_insert_with(BTreeMap::new)
            .insert(brand, vendor);
        self
    }

    /// Vaulted instruments in list order; empty when none were sent.
    pub fn vaulted(&self) -> &[VaultedInstrument] {
        self.vaulted_instruments.as_deref().unwrap_or_default()
    }

    pub fn vendor(&self, brand: CardBrand) -> Option<&CardVendorEligibility> {
        self.vendors.as_ref()?.get(&brand)
    }
}

/// Mapping from funding source to its eligibility record.
///
/// Iterates in [`FundingSource`] declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FundingEligibility(BTreeMap<FundingSource, FundingSourceEligibility>);

impl FundingEligibility {
    /// Eligibility used when the request carries none: only PayPal.
    pub fn paypal_only() -> Self {
        Self::default().with_source(FundingSource::Paypal, FundingSourceEligibility::eligible())
    }

    pub fn with_source(mut self, source: FundingSource, record: FundingSourceEligibility) -> Self {
        self.0.insert(source, record);
        self
    }

    /// Return a copy with `source` marked eligible, creating the entry if it
    /// was absent. Every other field of the entry is kept.
    pub fn with_eligible(mut self, source: FundingSource) -> Self {
        self.0.entry(source).or_default().eligible = true;
        self
    }

    pub fn get(&self, source: FundingSource) -> Option<&FundingSourceEligibility> {
        self.0.get(&source)
    }

    pub fn is_eligible(&self, source: FundingSource) -> bool {
        self.get(source).is_some_and(|record| record.eligible)
    }

    pub fn iter(&self) -> impl Iterator<Item = (FundingSource, &FundingSourceEligibility)> {
        self.0.iter().map(|(source, record)| (*source, record))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(FundingSource, FundingSourceEligibility)> for FundingEligibility {
    fn from_iter<I: IntoIterator<Item = (FundingSource, FundingSourceEligibility)>>(
        iter: I,
    ) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'de> Deserialize<'de> for FundingEligibility {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        known_entries(deserializer).map(Self)
    }
}

fn null_as_false<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(false))
}

fn known_entries<'de, D, K, V>(deserializer: D) -> Result<BTreeMap<K, V>, D::Error>
where
    D: Deserializer<'de>,
    K: FromStr + Ord,
    V: Deserialize<'de>,
{
    let raw = BTreeMap::<String, Option<V>>::deserialize(deserializer)?;
    Ok(retain_known(raw))
}

fn optional_known_entries<'de, D, K, V>(deserializer: D) -> Result<Option<BTreeMap<K, V>>, D::Error>
where
    D: Deserializer<'de>,
    K: FromStr + Ord,
    V: Deserialize<'de>,
{
    let raw = Option::<BTreeMap<String, Option<V>>>::deserialize(deserializer)?;
    Ok(raw.map(retain_known))
}

fn retain_known<K, V>(raw: BTreeMap<String, Option<V>>) -> BTreeMap<K, V>
where
    K: FromStr + Ord,
{
    raw.into_iter()
        .filter_map(|(key, value)| Some((key.parse().ok()?, value?)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_paypal_only() {
        let eligibility = FundingEligibility::paypal_only();
        assert_eq!(
            serde_json::to_value(&eligibility).unwrap(),
            json!({ "paypal": { "eligible": true } })
        );
        assert!(eligibility.is_eligible(FundingSource::Paypal));
        assert!(!eligibility.is_eligible(FundingSource::Venmo));
    }

    #[test]
    fn test_decode_nested_card_vendors() {
        let eligibility: FundingEligibility = serde_json::from_value(json!({
            "paypal": { "eligible": true },
            "card": {
                "eligible": true,
                "vendors": {
                    "visa": { "eligible": true, "vaultedInstruments": [{ "id": "v1" }] },
                    "amex": { "eligible": false }
                }
            }
        }))
        .unwrap();

        let card = eligibility.get(FundingSource::Card).unwrap();
        assert!(card.eligible);
        assert_eq!(card.vendor(CardBrand::Visa).unwrap().vaulted()[0].id, "v1");
        assert!(!card.vendor(CardBrand::Amex).unwrap().eligible);
        assert!(card.vendor(CardBrand::Mastercard).is_none());
    }

    #[test]
    fn test_decode_drops_unknown_and_null_entries() {
        let eligibility: FundingEligibility = serde_json::from_value(json!({
            "paypal": { "eligible": true },
            "applepay": { "eligible": true },
            "venmo": null,
            "card": { "eligible": true, "vendors": { "diners": { "eligible": true }, "visa": null } }
        }))
        .unwrap();

        assert_eq!(eligibility.len(), 2);
        assert!(eligibility.get(FundingSource::Venmo).is_none());
        assert_eq!(
            eligibility.get(FundingSource::Card).unwrap().vendors,
            Some(BTreeMap::new())
        );
    }

    #[test]
    fn test_missing_or_null_eligible_reads_false() {
        let eligibility: FundingEligibility = serde_json::from_value(json!({
            "paypal": {},
            "credit": { "eligible": null }
        }))
        .unwrap();
        assert!(!eligibility.is_eligible(FundingSource::Paypal));
        assert!(!eligibility.is_eligible(FundingSource::Credit));
        assert_eq!(eligibility.len(), 2);
    }

    #[test]
    fn test_rejects_malformed_known_entry() {
        let result = serde_json::from_value::<FundingEligibility>(json!({
            "paypal": { "eligible": "yes" }
        }));
        assert!(result.is_err());
        assert!(serde_json::from_value::<FundingEligibility>(json!([1, 2])).is_err());
    }

    #[test]
    fn test_with_eligible_keeps_other_fields() {
        let original = FundingEligibility::default().with_source(
            FundingSource::Venmo,
            FundingSourceEligibility::ineligible()
                .with_vaulted(vec![VaultedInstrument::new("abc")]),
        );
        let forced = original.clone().with_eligible(FundingSource::Venmo);

        assert!(!original.is_eligible(FundingSource::Venmo));
        let venmo = forced.get(FundingSource::Venmo).unwrap();
        assert!(venmo.eligible);
        assert_eq!(venmo.vaulted()[0].id, "abc");
    }

    #[test]
    fn test_iterates_in_render_order() {
        let eligibility: FundingEligibility = [
            (FundingSource::Card, FundingSourceEligibility::eligible()),
            (FundingSource::Paypal, FundingSourceEligibility::eligible()),
            (FundingSource::Venmo, FundingSourceEligibility::eligible()),
        ]
        .into_iter()
        .collect();

        let order: Vec<_> = eligibility.iter().map(|(source, _)| source).collect();
        assert_eq!(
            order,
            vec![FundingSource::Paypal, FundingSource::Venmo, FundingSource::Card]
        );
    }
}
