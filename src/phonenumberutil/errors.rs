use thiserror::Error;

/// Everything that can go wrong while normalizing a raw input string.
///
/// All variants describe terminal, caller-correctable conditions tied to a
/// single input; none are retryable. The absorbing entry points
/// (`safe_normalize`, `get_info`, `detect_provider`, `is_valid_number` and
/// the batch operations) fold these into boolean or message-carrying
/// results instead of propagating them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NormalizeError {
    /// The input was empty, or reduced to nothing after trimming.
    #[error("Input is empty")]
    EmptyInput,
    /// The cleaned digit string falls outside the accepted 10..=14 range.
    #[error("Cleaned number has {0} characters, expected between 10 and 14")]
    InvalidLength(usize),
    /// The input claims a country code other than Nigeria's 234.
    #[error("Number does not carry the Nigerian country code 234")]
    InvalidCountryCode,
    /// A ten-digit string starting with a subscriber digit was given where a
    /// local number was expected; the missing leading zero is ambiguous and
    /// is rejected rather than silently repaired.
    #[error("Local number is missing its leading zero")]
    InvalidLocalNumber,
    /// The cleaned string fits none of the recognized shapes.
    #[error("Number does not match any recognized Nigerian format")]
    InvalidFormat,
    /// Post-canonicalization shape check failed. Reaching this variant means
    /// the classifier accepted something the canonical pattern does not.
    #[error("Normalized result is not a valid Nigerian number")]
    InvalidNigerianNumber,
}
