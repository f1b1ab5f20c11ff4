mod helper_constants;
mod helper_functions;
pub mod errors;
pub mod enums;
pub mod phonenumberutil;
mod phone_regexps;
pub(self) mod helper_types;

use std::sync::LazyLock;

pub use enums::PhoneNumberFormat;
pub use helper_types::{CacheStats, CanonicalNumber, PhoneInfo, PhoneParts};
pub use phonenumberutil::PhoneNumberUtil;

pub static PHONE_NUMBER_UTIL: LazyLock<PhoneNumberUtil> = LazyLock::new(|| {
    PhoneNumberUtil::new()
});
