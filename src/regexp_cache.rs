use std::sync::Arc;

use dashmap::DashMap;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
#[error("An error occurred while trying to create regex: {0}")]
pub struct InvalidRegexError(String);

pub struct RegexCache {
    cache: DashMap<String, Arc<regex::Regex>>,
}

impl RegexCache {
    pub fn new() -> Self {
        Self {
            cache: DashMap::new(),
        }
    }

    pub fn get_regex(&self, pattern: &str) -> Result<Arc<regex::Regex>, InvalidRegexError> {
        if let Some(regex) = self.cache.get(pattern) {
            Ok(regex.value().clone())
        } else {
            let entry = self
                .cache
                .entry(pattern.to_string())
                .or_try_insert_with(|| {
                    regex::Regex::new(pattern)
                        .map(Arc::new)
                        .map_err(|err| InvalidRegexError(err.to_string()))
                })?;
            Ok(entry.value().clone())
        }
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn clear(&self) {
        self.cache.clear();
    }
}
