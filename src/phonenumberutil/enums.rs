use std::fmt;

/// The representations a Nigerian mobile number can be rendered in.
///
/// `E164` is the canonical form everything else derives from; for this
/// single-country domain `International` renders identically to `E164` and
/// only `Local` differs.
///
/// - **E164**: `+2348031234567`
/// - **International**: `+2348031234567`
/// - **Local**: `08031234567`
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhoneNumberFormat {
    /// Domestic dialing form, leading `0` plus ten subscriber digits.
    Local,
    /// International dialing form with the `+234` country code.
    International,
    /// E.164 form, `+234` plus ten digits with no separators.
    #[default]
    E164,
}

impl fmt::Display for PhoneNumberFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            PhoneNumberFormat::Local => "local",
            PhoneNumberFormat::International => "international",
            PhoneNumberFormat::E164 => "e164",
        };
        f.write_str(tag)
    }
}
