pub(super) const PLUS_SIGN: &str = "+";

/// Nigeria's country calling code, without the leading plus.
pub(super) const COUNTRY_CODE: &str = "234";

/// Canonical head every normalized number starts with.
pub(super) const COUNTRY_CODE_PREFIX: &str = "+234";

/// Length of the bare subscriber number, no country or local prefix.
pub(super) const SUBSCRIBER_LENGTH: usize = 10;

/// Length of a local-form number, leading `0` plus ten digits.
pub(super) const LOCAL_LENGTH: usize = 11;

/// Bounds on the cleaned input length; anything outside is rejected before
/// classification.
pub(super) const MIN_CLEANED_LENGTH: usize = 10;
pub(super) const MAX_CLEANED_LENGTH: usize = 14;

/// Default entry bound for the derived-info cache.
pub(super) const DEFAULT_CACHE_CAPACITY: usize = 100;

pub(super) const CANONICAL_PATTERN: &str = r"^\+234\d{10}$";
pub(super) const LOCAL_PATTERN: &str = r"^0\d{10}$";
pub(super) const INTERNATIONAL_PATTERN: &str = r"^\+?234\d{10}$";
