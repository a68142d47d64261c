//! Button enumeration driven by funding eligibility.
//!
//! Entries come out in a fixed order: funding source (declaration order),
//! then that source's vaulted instruments (list order), then, for `card`
//! only, each eligible brand (declaration order) followed by the brand's
//! vaulted instruments. Sources and brands that are absent or ineligible are
//! skipped.

use smartbtn_sdk::objects::{CardBrand, FundingEligibility, FundingSource};

use crate::render::escape_html;

/// One button to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonEntry<'a> {
    pub funding_source: FundingSource,
    pub card: Option<CardBrand>,
    pub payment_method_id: Option<&'a str>,
}

impl ButtonEntry<'_> {
    /// Render the entry as a `<button>` carrying its data attributes.
    pub fn to_html(&self) -> String {
        let mut html = format!(r#"<button data-funding-source="{}""#, self.funding_source);
        if let Some(card) = self.card {
            html.push_str(&format!(r#" data-card="{card}""#));
        }
        if let Some(id) = self.payment_method_id {
            html.push_str(&format!(
                r#" data-payment-method-id="{}""#,
                escape_html(id)
            ));
        }
        html.push_str("></button>");
        html
    }
}

/// Enumerate the buttons `eligibility` allows, in render order.
pub fn button_entries(eligibility: &FundingEligibility) -> Vec<ButtonEntry<'_>> {
    let mut entries = Vec::new();

    for funding_source in FundingSource::ALL {
        let Some(record) = eligibility.get(funding_source).filter(|r| r.eligible) else {
            continue;
        };

        entries.push(ButtonEntry {
            funding_source,
            card: None,
            payment_method_id: None,
        });
        entries.extend(record.vaulted().iter().map(|instrument| ButtonEntry {
            funding_source,
            card: None,
            payment_method_id: Some(instrument.id.as_str()),
        }));

        if funding_source != FundingSource::Card {
            continue;
        }

        for card in CardBrand::ALL {
            let Some(vendor) = record.vendor(card).filter(|v| v.eligible) else {
                continue;
            };
            entries.push(ButtonEntry {
                funding_source,
                card: Some(card),
                payment_method_id: None,
            });
            entries.extend(vendor.vaulted().iter().map(|instrument| ButtonEntry {
                funding_source,
                card: Some(card),
                payment_method_id: Some(instrument.id.as_str()),
            }));
        }
    }

    entries
}

/// Eligibility used by button fixtures when a test does not supply one.
pub fn default_funding_eligibility() -> FundingEligibility {
    FundingEligibility::paypal_only()
}

/// Fixture markup: one `<button>` per entry, newline separated.
pub fn create_button_html(eligibility: &FundingEligibility) -> String {
    button_entries(eligibility)
        .iter()
        .map(ButtonEntry::to_html)
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use smartbtn_sdk::objects::{
        CardVendorEligibility, FundingSourceEligibility, VaultedInstrument,
    };

    fn full_eligibility() -> FundingEligibility {
        [
            (
                FundingSource::Card,
                FundingSourceEligibility::eligible()
                    .with_vaulted(vec![VaultedInstrument::new("card-1")])
                    .with_vendor(
                        CardBrand::Amex,
                        CardVendorEligibility::eligible(),
                    )
                    .with_vendor(
                        CardBrand::Visa,
                        CardVendorEligibility::eligible().with_vaulted(vec![
                            VaultedInstrument::new("visa-1"),
                            VaultedInstrument::new("visa-2"),
                        ]),
                    )
                    .with_vendor(CardBrand::Mastercard, CardVendorEligibility::default()),
            ),
            (FundingSource::Credit, FundingSourceEligibility::ineligible()),
            (
                FundingSource::Paypal,
                FundingSourceEligibility::eligible()
                    .with_vaulted(vec![VaultedInstrument::new("pp-1")]),
            ),
            (FundingSource::Venmo, FundingSourceEligibility::eligible()),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_default_fixture_renders_paypal_only() {
        assert_eq!(
            create_button_html(&default_funding_eligibility()),
            r#"<button data-funding-source="paypal"></button>"#
        );
    }

    #[test]
    fn test_entry_order() {
        let eligibility = full_eligibility();
        let rendered: Vec<(FundingSource, Option<CardBrand>, Option<&str>)> =
            button_entries(&eligibility)
                .into_iter()
                .map(|entry| (entry.funding_source, entry.card, entry.payment_method_id))
                .collect();

        assert_eq!(
            rendered,
            vec![
                (FundingSource::Paypal, None, None),
                (FundingSource::Paypal, None, Some("pp-1")),
                (FundingSource::Venmo, None, None),
                (FundingSource::Card, None, None),
                (FundingSource::Card, None, Some("card-1")),
                (FundingSource::Card, Some(CardBrand::Visa), None),
                (FundingSource::Card, Some(CardBrand::Visa), Some("visa-1")),
                (FundingSource::Card, Some(CardBrand::Visa), Some("visa-2")),
                (FundingSource::Card, Some(CardBrand::Amex), None),
            ]
        );
    }

    #[test]
    fn test_card_without_vendors() {
        let eligibility = FundingEligibility::default()
            .with_source(FundingSource::Card, FundingSourceEligibility::eligible());
        assert_eq!(
            create_button_html(&eligibility),
            r#"<button data-funding-source="card"></button>"#
        );
    }

    #[test]
    fn test_ineligible_card_hides_its_brands() {
        let eligibility = FundingEligibility::default().with_source(
            FundingSource::Card,
            FundingSourceEligibility::ineligible()
                .with_vendor(CardBrand::Visa, CardVendorEligibility::eligible()),
        );
        assert!(button_entries(&eligibility).is_empty());
        assert_eq!(create_button_html(&eligibility), "");
    }

    #[test]
    fn test_html_attributes() {
        let eligibility = FundingEligibility::default().with_source(
            FundingSource::Card,
            FundingSourceEligibility::eligible().with_vendor(
                CardBrand::Visa,
                CardVendorEligibility::eligible()
                    .with_vaulted(vec![VaultedInstrument::new("a\"><script>")]),
            ),
        );
        let html = create_button_html(&eligibility);
        let lines: Vec<&str> = html.lines().collect();
        assert_eq!(
            lines,
            vec![
                r#"<button data-funding-source="card"></button>"#,
                r#"<button data-funding-source="card" data-card="visa"></button>"#,
                r#"<button data-funding-source="card" data-card="visa" data-payment-method-id="a&quot;&gt;&lt;script&gt;"></button>"#,
            ]
        );
    }
}
