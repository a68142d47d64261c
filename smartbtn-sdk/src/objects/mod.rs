pub mod eligibility;
pub mod funding;
pub mod locale;
pub mod params;

pub use eligibility::{
    CardVendorEligibility, FundingEligibility, FundingSourceEligibility, VaultedInstrument,
};
pub use funding::{CardBrand, FundingSource, UnknownVariant};
pub use locale::{Country, Lang, LocaleConfig};
pub use params::{Env, Intent, RawConfig, ResolvedParams};
