use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use log::trace;
use rand::Rng;
use strum::IntoEnumIterator;

use crate::{
    lru_cache::LruCache,
    providers::{self, Provider},
    regex_util::RegexFullMatch,
};

use super::{
    enums::PhoneNumberFormat,
    errors::NormalizeError,
    helper_constants::{
        COUNTRY_CODE, COUNTRY_CODE_PREFIX, DEFAULT_CACHE_CAPACITY, LOCAL_LENGTH,
        MAX_CLEANED_LENGTH, MIN_CLEANED_LENGTH, PLUS_SIGN, SUBSCRIBER_LENGTH,
    },
    helper_functions::{clean_input, detect_input_format},
    helper_types::{CacheStats, CanonicalNumber, PhoneInfo, PhoneParts},
    phone_regexps::PhoneRegExps,
};

// Helper type for Result
pub type Result<T> = std::result::Result<T, NormalizeError>;

/// The entry point for normalizing, validating and classifying Nigerian
/// mobile numbers.
///
/// Owns all state the operations need: the compiled shape patterns, the
/// prefix-to-provider index built from the static allocation tables, and
/// the bounded cache of derived records. Construct one per scope that needs
/// isolated caches, or use the process-wide [`super::PHONE_NUMBER_UTIL`].
pub struct PhoneNumberUtil {
    /// Helper struct holding the compiled shape patterns.
    reg_exps: PhoneRegExps,

    /// Flat longest-prefix-match index from local-form prefix to operator.
    /// Read-only after construction.
    prefix_to_provider: HashMap<&'static str, Provider>,

    /// Derived-info records keyed by the raw input string. Two spellings of
    /// the same logical number occupy separate slots; see `get_info`.
    info_cache: Mutex<LruCache<String, Arc<PhoneInfo>>>,
}

impl PhoneNumberUtil {
    pub fn new() -> Self {
        Self::with_cache_capacity(DEFAULT_CACHE_CAPACITY)
    }

    pub fn with_cache_capacity(capacity: usize) -> Self {
        Self {
            reg_exps: PhoneRegExps::new(),
            prefix_to_provider: providers::build_prefix_index(),
            info_cache: Mutex::new(LruCache::new(capacity)),
        }
    }

    /// Parses `input` into its canonical representation.
    ///
    /// Holding a [`CanonicalNumber`] proves validation ran; use `normalize`
    /// when a rendered string is all that is needed.
    pub fn parse(&self, input: &str) -> Result<CanonicalNumber> {
        self.normalize_to_canonical(input)
    }

    /// Normalizes `input` and renders it in the requested format.
    ///
    /// This is the error-propagating entry point; `safe_normalize` is its
    /// message-carrying twin over the same fallible core.
    pub fn normalize(&self, input: &str, format: PhoneNumberFormat) -> Result<String> {
        let canonical = self.normalize_to_canonical(input)?;
        Ok(Self::format_canonical(&canonical, format))
    }

    /// Like `normalize`, but folds the failure into a plain message so batch
    /// callers can collect per-item outcomes without an error type.
    pub fn safe_normalize(
        &self,
        input: &str,
        format: PhoneNumberFormat,
    ) -> std::result::Result<String, String> {
        self.normalize(input, format).map_err(|err| err.to_string())
    }

    pub fn is_valid_number(&self, input: &str) -> bool {
        self.normalize_to_canonical(input).is_ok()
    }

    /// Detects the operator a number belongs to.
    ///
    /// Never errors: inputs that fail normalization, and valid numbers with
    /// an unrecognized prefix, both yield `None`.
    pub fn detect_provider(&self, input: &str) -> Option<Provider> {
        let canonical = match self.normalize_to_canonical(input) {
            Ok(canonical) => canonical,
            Err(err) => {
                trace!("Provider detection skipped for unparseable input: {err}");
                return None;
            }
        };
        self.lookup_prefix(&canonical.to_local())
            .map(|(_, provider)| provider)
    }

    /// Returns the derived-info record for `input`, consulting the cache
    /// first. Never fails; invalid inputs produce a record with
    /// `is_valid == false` and empty derived fields.
    ///
    /// The cache key is the raw input string, so distinct spellings of one
    /// logical number occupy separate slots. Lookup and insertion are two
    /// lock acquisitions; a concurrent caller may compute the same record
    /// twice, which is harmless since records are immutable.
    pub fn get_info(&self, input: &str) -> Arc<PhoneInfo> {
        if let Some(info) = self
            .info_cache
            .lock()
            .expect("info cache lock poisoned")
            .get(&input.to_string())
        {
            return info;
        }
        let info = Arc::new(self.build_info(input));
        self.info_cache
            .lock()
            .expect("info cache lock poisoned")
            .insert(input.to_string(), Arc::clone(&info));
        info
    }

    /// Splits a number into its matched prefix, operator and subscriber
    /// digits. Fails with the normalization taxonomy on malformed input.
    pub fn split_parts(&self, input: &str) -> Result<PhoneParts> {
        let canonical = self.normalize_to_canonical(input)?;
        Ok(self.split_canonical(&canonical))
    }

    /// Generates a random valid number, constrained to `provider` when one
    /// is given, and returns it in e164 form.
    pub fn generate_random(&self, provider: Option<Provider>) -> String {
        let mut rng = rand::rng();
        let provider = provider.unwrap_or_else(|| {
            let all: Vec<Provider> = Provider::iter().collect();
            all[rng.random_range(0..all.len())]
        });
        let prefixes = provider.prefixes();
        let prefix = prefixes[rng.random_range(0..prefixes.len())];

        let mut local = String::with_capacity(LOCAL_LENGTH);
        local.push_str(prefix);
        while local.len() < LOCAL_LENGTH {
            let digit: u8 = rng.random_range(0..10);
            local.push(char::from(b'0' + digit));
        }
        // A local-form string assembled from a declared prefix always
        // normalizes; failing here indicates a broken allocation table.
        self.normalize(&local, PhoneNumberFormat::E164)
            .expect("generated number must normalize")
    }

    pub fn batch_normalize<S: AsRef<str>>(
        &self,
        inputs: &[S],
        format: PhoneNumberFormat,
    ) -> Vec<std::result::Result<String, String>> {
        inputs
            .iter()
            .map(|input| self.safe_normalize(input.as_ref(), format))
            .collect()
    }

    pub fn batch_detect_provider<S: AsRef<str>>(&self, inputs: &[S]) -> Vec<Option<Provider>> {
        inputs
            .iter()
            .map(|input| self.detect_provider(input.as_ref()))
            .collect()
    }

    pub fn batch_validate<S: AsRef<str>>(&self, inputs: &[S]) -> Vec<bool> {
        inputs
            .iter()
            .map(|input| self.is_valid_number(input.as_ref()))
            .collect()
    }

    pub fn to_local(&self, input: &str) -> Result<String> {
        self.normalize(input, PhoneNumberFormat::Local)
    }

    pub fn to_international(&self, input: &str) -> Result<String> {
        self.normalize(input, PhoneNumberFormat::International)
    }

    /// Whether the cleaned input already has the shape of the given format.
    /// Punctuation is stripped before matching, so `"0803 123 4567"` still
    /// matches the local shape.
    pub fn matches_format(&self, input: &str, format: PhoneNumberFormat) -> bool {
        let cleaned = clean_input(input.trim());
        let pattern = match format {
            PhoneNumberFormat::Local => &self.reg_exps.local_pattern,
            PhoneNumberFormat::International => &self.reg_exps.international_pattern,
            PhoneNumberFormat::E164 => &self.reg_exps.canonical_pattern,
        };
        pattern.full_match(&cleaned)
    }

    pub fn cache_stats(&self) -> CacheStats {
        let info_cache = self.info_cache.lock().expect("info cache lock poisoned");
        CacheStats {
            info_entries: info_cache.len(),
            info_capacity: info_cache.capacity(),
            prefix_entries: self.prefix_to_provider.len(),
            regex_entries: self.reg_exps.regexp_cache.len(),
        }
    }

    pub fn clear_caches(&self) {
        self.info_cache
            .lock()
            .expect("info cache lock poisoned")
            .clear();
    }

    /// The fallible core: cleanup, length gate, first-character
    /// classification and the defensive canonical shape check.
    fn normalize_to_canonical(&self, input: &str) -> Result<CanonicalNumber> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(NormalizeError::EmptyInput);
        }

        let cleaned = clean_input(trimmed);
        let len = cleaned.len();
        if !(MIN_CLEANED_LENGTH..=MAX_CLEANED_LENGTH).contains(&len) {
            return Err(NormalizeError::InvalidLength(len));
        }

        let canonical = match cleaned.as_bytes()[0] {
            b'+' => {
                if !cleaned.starts_with(COUNTRY_CODE_PREFIX) {
                    return Err(NormalizeError::InvalidCountryCode);
                }
                cleaned
            }
            b'2' => {
                if !cleaned.starts_with(COUNTRY_CODE) {
                    return Err(NormalizeError::InvalidCountryCode);
                }
                fast_cat::concat_str!(PLUS_SIGN, &cleaned)
            }
            b'0' => match len {
                LOCAL_LENGTH => fast_cat::concat_str!(COUNTRY_CODE_PREFIX, &cleaned[1..]),
                // A local number without its leading zero is ambiguous, so
                // it is rejected rather than repaired.
                SUBSCRIBER_LENGTH => return Err(NormalizeError::InvalidLocalNumber),
                _ => return Err(NormalizeError::InvalidLength(len)),
            },
            _ => {
                if len != SUBSCRIBER_LENGTH {
                    return Err(NormalizeError::InvalidFormat);
                }
                fast_cat::concat_str!(COUNTRY_CODE_PREFIX, &cleaned)
            }
        };

        if !self.reg_exps.canonical_pattern.full_match(&canonical) {
            return Err(NormalizeError::InvalidNigerianNumber);
        }
        Ok(CanonicalNumber::new_unchecked(canonical))
    }

    fn format_canonical(canonical: &CanonicalNumber, format: PhoneNumberFormat) -> String {
        match format {
            PhoneNumberFormat::Local => canonical.to_local(),
            // International and e164 render identically in this domain.
            PhoneNumberFormat::International | PhoneNumberFormat::E164 => {
                canonical.as_str().to_owned()
            }
        }
    }

    /// Longest-prefix-match over the local form: probe the 5-digit head
    /// first, then fall back to the 4-digit one.
    fn lookup_prefix(&self, local: &str) -> Option<(&'static str, Provider)> {
        self.prefix_to_provider
            .get_key_value(&local[..5])
            .or_else(|| self.prefix_to_provider.get_key_value(&local[..4]))
            .map(|(prefix, provider)| (*prefix, *provider))
    }

    fn split_canonical(&self, canonical: &CanonicalNumber) -> PhoneParts {
        let local = canonical.to_local();
        let (prefix, provider) = match self.lookup_prefix(&local) {
            Some((prefix, provider)) => (prefix.to_owned(), Some(provider)),
            None => {
                trace!("No declared prefix matches '{local}'");
                (String::new(), None)
            }
        };
        PhoneParts {
            prefix,
            provider,
            // The subscriber digits are always everything after the 4-char
            // canonical head, whether a 4- or 5-digit prefix matched.
            number: canonical.subscriber_number().to_owned(),
        }
    }

    fn build_info(&self, raw: &str) -> PhoneInfo {
        match self.normalize_to_canonical(raw) {
            Ok(canonical) => {
                let parts = self.split_canonical(&canonical);
                PhoneInfo {
                    original: raw.to_owned(),
                    normalized: canonical.into_string(),
                    provider: parts.provider,
                    is_valid: true,
                    format: detect_input_format(raw),
                    prefix: parts.prefix,
                    number: parts.number,
                }
            }
            Err(err) => {
                trace!("Building invalid info record for '{raw}': {err}");
                PhoneInfo {
                    original: raw.to_owned(),
                    normalized: String::new(),
                    provider: None,
                    is_valid: false,
                    format: PhoneNumberFormat::default(),
                    prefix: String::new(),
                    number: String::new(),
                }
            }
        }
    }
}

impl Default for PhoneNumberUtil {
    fn default() -> Self {
        Self::new()
    }
}
