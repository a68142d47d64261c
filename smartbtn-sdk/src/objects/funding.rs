use serde::{Deserialize, Serialize};

/// `Display` and `FromStr` for an enum with `ALL` and `as_str`.
macro_rules! str_enum_impls {
    ($name:ident, $kind:literal) => {
        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::objects::funding::UnknownVariant;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $name::ALL
                    .into_iter()
                    .find(|variant| variant.as_str() == s)
                    .ok_or_else(|| $crate::objects::funding::UnknownVariant {
                        kind: $kind,
                        value: s.to_owned(),
                    })
            }
        }
    };
}

pub(crate) use str_enum_impls;

/// Payment method categories that can be offered as a button.
///
/// Declaration order is the canonical render order; `Ord` follows it, so
/// ordered maps keyed by `FundingSource` iterate in render order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FundingSource {
    Paypal,
    Venmo,
    Itau,
    Credit,
    Paylater,
    Card,
    Ideal,
    Sepa,
    Bancontact,
    Giropay,
    Sofort,
    Eps,
    Mybank,
    P24,
    Zimpler,
    Blik,
    Maxima,
    Boleto,
    Oxxo,
    Mercadopago,
    Trustly,
    Verkkopankki,
}

impl FundingSource {
    /// Every funding source, in render order.
    pub const ALL: [FundingSource; 22] = [
        FundingSource::Paypal,
        FundingSource::Venmo,
        FundingSource::Itau,
        FundingSource::Credit,
        FundingSource::Paylater,
        FundingSource::Card,
        FundingSource::Ideal,
        FundingSource::Sepa,
        FundingSource::Bancontact,
        FundingSource::Giropay,
        FundingSource::Sofort,
        FundingSource::Eps,
        FundingSource::Mybank,
        FundingSource::P24,
        FundingSource::Zimpler,
        FundingSource::Blik,
        FundingSource::Maxima,
        FundingSource::Boleto,
        FundingSource::Oxxo,
        FundingSource::Mercadopago,
        FundingSource::Trustly,
        FundingSource::Verkkopankki,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            FundingSource::Paypal => "paypal",
            FundingSource::Venmo => "venmo",
            FundingSource::Itau => "itau",
            FundingSource::Credit => "credit",
            FundingSource::Paylater => "paylater",
            FundingSource::Card => "card",
            FundingSource::Ideal => "ideal",
            FundingSource::Sepa => "sepa",
            FundingSource::Bancontact => "bancontact",
            FundingSource::Giropay => "giropay",
            FundingSource::Sofort => "sofort",
            FundingSource::Eps => "eps",
            FundingSource::Mybank => "mybank",
            FundingSource::P24 => "p24",
            FundingSource::Zimpler => "zimpler",
            FundingSource::Blik => "blik",
            FundingSource::Maxima => "maxima",
            FundingSource::Boleto => "boleto",
            FundingSource::Oxxo => "oxxo",
            FundingSource::Mercadopago => "mercadopago",
            FundingSource::Trustly => "trustly",
            FundingSource::Verkkopankki => "verkkopankki",
        }
    }
}

str_enum_impls!(FundingSource, "funding source");

/// Card brands offered under the `card` funding source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardBrand {
    Visa,
    Mastercard,
    Amex,
    Discover,
    Hiper,
    Elo,
    Jcb,
    Cup,
}

impl CardBrand {
    /// Every card brand, in render order.
    pub const ALL: [CardBrand; 8] = [
        CardBrand::Visa,
        CardBrand::Mastercard,
        CardBrand::Amex,
        CardBrand::Discover,
        CardBrand::Hiper,
        CardBrand::Elo,
        CardBrand::Jcb,
        CardBrand::Cup,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            CardBrand::Visa => "visa",
            CardBrand::Mastercard => "mastercard",
            CardBrand::Amex => "amex",
            CardBrand::Discover => "discover",
            CardBrand::Hiper => "hiper",
            CardBrand::Elo => "elo",
            CardBrand::Jcb => "jcb",
            CardBrand::Cup => "cup",
        }
    }
}

str_enum_impls!(CardBrand, "card brand");

/// A string did not name any variant of an enumeration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind}: {value}")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}
