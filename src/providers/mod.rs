use std::collections::HashMap;
use std::fmt;

use strum::{EnumIter, IntoEnumIterator};

/// The four mobile network operators recognized by this library.
///
/// The set is closed and fixed at compile time; prefix allocations for each
/// operator live in [`Provider::prefixes`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum Provider {
    Mtn,
    Glo,
    Airtel,
    NineMobile,
}

impl Provider {
    /// The market name of the operator, e.g. `"MTN"`.
    pub fn name(&self) -> &'static str {
        match self {
            Provider::Mtn => "MTN",
            Provider::Glo => "GLO",
            Provider::Airtel => "AIRTEL",
            Provider::NineMobile => "9MOBILE",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Provider::Mtn => "MTN Nigeria Communications",
            Provider::Glo => "Globacom Limited",
            Provider::Airtel => "Airtel Networks Limited",
            Provider::NineMobile => "Emerging Markets Telecommunication Services (9mobile)",
        }
    }

    /// Number prefixes allocated to the operator, in local form.
    ///
    /// Most allocations are 4 digits. The 5-digit entries (`07025`, `07026`)
    /// share the `0702` head with no 4-digit owner, so lookup must probe the
    /// 5-digit slice before falling back to the 4-digit one.
    pub fn prefixes(&self) -> &'static [&'static str] {
        match self {
            Provider::Mtn => &[
                "0803", "0806", "0703", "0704", "0706", "0810", "0813", "0814", "0816", "0903",
                "0906", "0913", "0916", "07025", "07026",
            ],
            Provider::Glo => &["0805", "0807", "0705", "0811", "0815", "0905", "0915"],
            Provider::Airtel => &[
                "0802", "0808", "0701", "0708", "0812", "0901", "0902", "0904", "0907", "0911",
                "0912",
            ],
            Provider::NineMobile => &["0809", "0817", "0818", "0908", "0909"],
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Builds the flat prefix-to-provider index from the allocation tables.
///
/// The tables must not attribute one prefix to two operators; the last
/// insertion would win silently otherwise, so a debug assertion guards it.
pub(crate) fn build_prefix_index() -> HashMap<&'static str, Provider> {
    let mut index = HashMap::new();
    for provider in Provider::iter() {
        for prefix in provider.prefixes() {
            let previous = index.insert(*prefix, provider);
            debug_assert!(
                previous.is_none(),
                "prefix {} attributed to both {:?} and {:?}",
                prefix,
                previous,
                provider,
            );
        }
    }
    index
}
