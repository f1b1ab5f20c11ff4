use std::sync::Arc;

use regex::Regex;

use crate::regexp_cache::RegexCache;

use super::helper_constants::{CANONICAL_PATTERN, INTERNATIONAL_PATTERN, LOCAL_PATTERN};

/// Holds the compiled shape patterns together with the cache they came from.
///
/// All patterns are constants, so compilation failures indicate a library
/// bug rather than a runtime condition.
pub(super) struct PhoneRegExps {
    /// `+234` followed by exactly ten digits.
    pub canonical_pattern: Arc<Regex>,
    /// Leading `0` followed by exactly ten digits.
    pub local_pattern: Arc<Regex>,
    /// Bare country code form, with or without the plus sign.
    pub international_pattern: Arc<Regex>,

    pub regexp_cache: RegexCache,
}

impl PhoneRegExps {
    pub fn new() -> Self {
        let regexp_cache = RegexCache::new();
        let canonical_pattern = regexp_cache
            .get_regex(CANONICAL_PATTERN)
            .expect("Invalid constant pattern!");
        let local_pattern = regexp_cache
            .get_regex(LOCAL_PATTERN)
            .expect("Invalid constant pattern!");
        let international_pattern = regexp_cache
            .get_regex(INTERNATIONAL_PATTERN)
            .expect("Invalid constant pattern!");
        Self {
            canonical_pattern,
            local_pattern,
            international_pattern,
            regexp_cache,
        }
    }
}
