use super::enums::PhoneNumberFormat;

/// Strips every character that is not an ASCII digit, keeping a single plus
/// sign only when it precedes all digits. Interior spaces, hyphens,
/// parentheses and the like collapse away.
pub(super) fn clean_input(raw: &str) -> String {
    let mut cleaned = String::with_capacity(raw.len());
    for c in raw.chars() {
        if c.is_ascii_digit() {
            cleaned.push(c);
        } else if c == '+' && cleaned.is_empty() {
            cleaned.push(c);
        }
    }
    cleaned
}

/// Tags the format the caller wrote the number in, judged from the raw
/// input's first meaningful character rather than the canonical form.
pub(super) fn detect_input_format(raw: &str) -> PhoneNumberFormat {
    match raw.trim_start().as_bytes().first() {
        Some(b'+') => PhoneNumberFormat::E164,
        Some(b'2') => PhoneNumberFormat::International,
        Some(b'0') => PhoneNumberFormat::Local,
        _ => PhoneNumberFormat::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_input_collapses_punctuation() {
        assert_eq!(clean_input("0803 123 4567"), "08031234567");
        assert_eq!(clean_input("(0803) 123-4567"), "08031234567");
        assert_eq!(clean_input("+234-803-123-4567"), "+2348031234567");
    }

    #[test]
    fn clean_input_keeps_plus_only_in_front() {
        assert_eq!(clean_input("(+234) 803 123 4567"), "+2348031234567");
        assert_eq!(clean_input("0803+1234567"), "08031234567");
    }

    #[test]
    fn detect_input_format_uses_leading_character() {
        assert_eq!(detect_input_format("+234803"), PhoneNumberFormat::E164);
        assert_eq!(detect_input_format("234803"), PhoneNumberFormat::International);
        assert_eq!(detect_input_format(" 0803"), PhoneNumberFormat::Local);
        assert_eq!(detect_input_format("garbage"), PhoneNumberFormat::E164);
    }
}
