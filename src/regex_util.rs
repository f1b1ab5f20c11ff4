use regex::Regex;

/// Anchored whole-string matching over `regex::Regex`, which only offers
/// substring search out of the box.
pub trait RegexFullMatch {
    fn full_match(&self, s: &str) -> bool;
}

impl RegexFullMatch for Regex {
    fn full_match(&self, s: &str) -> bool {
        if let Some(matched) = self.find(s) {
            return matched.start() == 0 && matched.end() == s.len();
        }
        false
    }
}
