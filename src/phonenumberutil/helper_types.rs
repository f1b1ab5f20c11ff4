use std::fmt;

use crate::providers::Provider;

use super::enums::PhoneNumberFormat;
use super::helper_constants::COUNTRY_CODE_PREFIX;

/// A phone number proven to be in canonical `+234` + 10 digit form.
///
/// Values can only be produced by the normalization engine, so holding a
/// `CanonicalNumber` is itself the proof that validation ran.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CanonicalNumber(String);

impl CanonicalNumber {
    /// Callers must have verified the canonical shape already.
    pub(super) fn new_unchecked(value: String) -> Self {
        Self(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// Local-form rendering, `0` plus the ten subscriber digits.
    pub fn to_local(&self) -> String {
        fast_cat::concat_str!("0", self.subscriber_number())
    }

    /// The ten digits following the `+234` head.
    pub fn subscriber_number(&self) -> &str {
        &self.0[COUNTRY_CODE_PREFIX.len()..]
    }
}

impl fmt::Display for CanonicalNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Descriptive record derived from one raw input.
///
/// Built once by `PhoneNumberUtil::get_info` and never mutated afterwards;
/// the cache hands out shared references to the same record. For invalid
/// inputs `normalized`, `prefix` and `number` are empty, `provider` is
/// `None` and `format` is the default tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneInfo {
    /// The raw input exactly as supplied.
    pub original: String,
    /// Canonical `+234` form, or empty when the input failed normalization.
    pub normalized: String,
    pub provider: Option<Provider>,
    pub is_valid: bool,
    /// Input format detected from the raw input's leading character.
    pub format: PhoneNumberFormat,
    /// The matched telco prefix in local form, possibly empty.
    pub prefix: String,
    /// The subscriber digits following the canonical `+234` head.
    pub number: String,
}

/// Components of a valid number as split by `PhoneNumberUtil::split_parts`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneParts {
    pub prefix: String,
    pub provider: Option<Provider>,
    pub number: String,
}

/// Sizes of the internal tables, for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    pub info_entries: usize,
    pub info_capacity: usize,
    pub prefix_entries: usize,
    pub regex_entries: usize,
}
