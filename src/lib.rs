mod lru_cache;
mod phonenumberutil;
mod regexp_cache;
pub mod providers;
pub(crate) mod regex_util;

pub use phonenumberutil::{
    CacheStats, CanonicalNumber, PhoneInfo, PhoneNumberFormat, PhoneNumberUtil, PhoneParts,
    PHONE_NUMBER_UTIL,
};
pub use phonenumberutil::errors::NormalizeError;
pub use providers::Provider;

#[cfg(test)]
mod tests;
