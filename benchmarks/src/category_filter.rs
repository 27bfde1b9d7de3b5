//! Trace category filters
//!
//! A category filter selects which trace-event categories are recorded while a
//! benchmark runs. The textual form is the comma-separated list understood by
//! Chrome's tracing backend, e.g. `-*,v8,disabled-by-default-v8.gc`.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{BenchmarkError, Result};

const DISABLED_BY_DEFAULT_PREFIX: &str = "disabled-by-default-";
const DELAY_PREFIX: &str = "DELAY(";

/// Categories recorded by the no-overhead filter
const NO_OVERHEAD_CATEGORIES: &[&str] = &[
    "toplevel",
    "benchmark",
    "webkit.console",
    "blink.console",
    "trace_event_overhead",
];

/// Parsed trace category filter
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryFilter {
    included: BTreeSet<String>,
    disabled_by_default: BTreeSet<String>,
    excluded: BTreeSet<String>,
    synthetic_delays: BTreeSet<String>,
}

impl CategoryFilter {
    /// Parse a comma-separated filter string
    pub fn parse(filter_string: &str) -> Result<Self> {
        let mut filter = CategoryFilter::default();

        for item in filter_string.split(',') {
            let item = item.trim();
            if item.is_empty() {
                continue;
            }

            if let Some(rest) = item.strip_prefix(DELAY_PREFIX) {
                let delay = rest
                    .strip_suffix(')')
                    .ok_or_else(|| BenchmarkError::invalid_category(item, "unterminated DELAY("))?;
                if delay.trim().is_empty() {
                    return Err(BenchmarkError::invalid_category(item, "empty synthetic delay"));
                }
                filter.add_synthetic_delay(delay);
                continue;
            }

            if item.chars().any(char::is_whitespace) {
                return Err(BenchmarkError::invalid_category(item, "whitespace inside category"));
            }

            if let Some(excluded) = item.strip_prefix('-') {
                if excluded.is_empty() {
                    return Err(BenchmarkError::invalid_category(item, "missing category after '-'"));
                }
                filter.excluded.insert(excluded.to_string());
            } else if item.starts_with(DISABLED_BY_DEFAULT_PREFIX) {
                filter.disabled_by_default.insert(item.to_string());
            } else {
                filter.included.insert(item.to_string());
            }
        }

        Ok(filter)
    }

    /// Empty filter: the tracing backend records its default categories.
    pub fn minimal_overhead() -> Self {
        Self::default()
    }

    /// Filter recording only benchmark markers and console timestamps
    pub fn no_overhead() -> Self {
        let mut filter = Self::default();
        for category in NO_OVERHEAD_CATEGORIES {
            filter.add_included_category(category);
        }
        filter
    }

    /// Build a filter from a list of items
    pub fn from_categories<I, S>(categories: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let joined = categories
            .into_iter()
            .map(|c| c.as_ref().to_string())
            .collect::<Vec<_>>()
            .join(",");
        Self::parse(&joined)
    }

    pub fn add_included_category(&mut self, category: &str) {
        if category.starts_with(DISABLED_BY_DEFAULT_PREFIX) {
            self.disabled_by_default.insert(category.to_string());
        } else {
            self.included.insert(category.to_string());
        }
        self.excluded.remove(category);
    }

    pub fn add_excluded_category(&mut self, category: &str) {
        self.included.remove(category);
        self.excluded.insert(category.to_string());
    }

    pub fn add_synthetic_delay(&mut self, delay: &str) {
        self.synthetic_delays.insert(delay.to_string());
    }

    pub fn included_categories(&self) -> impl Iterator<Item = &str> {
        self.included.iter().map(String::as_str)
    }

    pub fn disabled_by_default_categories(&self) -> impl Iterator<Item = &str> {
        self.disabled_by_default.iter().map(String::as_str)
    }

    pub fn excluded_categories(&self) -> impl Iterator<Item = &str> {
        self.excluded.iter().map(String::as_str)
    }

    pub fn synthetic_delays(&self) -> impl Iterator<Item = &str> {
        self.synthetic_delays.iter().map(String::as_str)
    }

    /// Whether a category is explicitly enabled (either list)
    pub fn includes(&self, category: &str) -> bool {
        self.included.contains(category) || self.disabled_by_default.contains(category)
    }

    pub fn excludes(&self, category: &str) -> bool {
        self.excluded.contains(category)
    }

    pub fn is_empty(&self) -> bool {
        self.included.is_empty()
            && self.disabled_by_default.is_empty()
            && self.excluded.is_empty()
            && self.synthetic_delays.is_empty()
    }

    /// Render the stable, sorted filter string
    pub fn filter_string(&self) -> String {
        let mut items: Vec<String> = Vec::new();
        items.extend(self.included.iter().cloned());
        items.extend(self.disabled_by_default.iter().cloned());
        items.extend(self.excluded.iter().map(|c| format!("-{}", c)));
        items.extend(self.synthetic_delays.iter().map(|d| format!("DELAY({})", d)));
        items.join(",")
    }
}

impl FromStr for CategoryFilter {
    type Err = BenchmarkError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.filter_string())
    }
}
