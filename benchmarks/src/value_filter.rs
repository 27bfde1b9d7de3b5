//! Result value filtering
//!
//! Timeline metrics emit far more values than the dashboard can take. Each
//! benchmark keeps a subset by looking at the value name only.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use tracing::trace;

/// Statistic suffixes dropped from memory values.
///
/// Dump counts and per-process statistics are exempt; those are matched on the
/// text in front of the suffix since `regex` has no lookbehind.
static IGNORED_STATS_SUFFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"_(std|count|min|sum|pct_\d{4}(_\d+)?)$").expect("Could not parse regex")
});

const EXEMPT_STAT_PREFIXES: &[&str] = &["dump", "process"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueFilter {
    KeepAll,
    /// Keep only names containing the substring
    RequireSubstring(&'static str),
    /// Memory values: V8 and Chrome totals, averages and maxima
    MemoryCodeSize,
}

impl ValueFilter {
    /// Whether a value with this name goes into the report
    pub fn value_can_be_added(&self, value_name: &str, _is_first_result: bool) -> bool {
        let keep = match self {
            ValueFilter::KeepAll => true,
            ValueFilter::RequireSubstring(needle) => value_name.contains(*needle),
            ValueFilter::MemoryCodeSize => keep_memory_value(value_name),
        };
        if !keep {
            trace!(value = value_name, filter = ?self, "Dropped value");
        }
        keep
    }
}

fn keep_memory_value(name: &str) -> bool {
    if !name.contains("memory") {
        return true;
    }
    if (name.contains("subsystem") || name.contains("reported_by_chrome")) && !name.contains("v8") {
        return false;
    }
    !is_ignored_statistic(name)
}

fn is_ignored_statistic(name: &str) -> bool {
    match IGNORED_STATS_SUFFIX.find(name) {
        Some(suffix) => {
            let prefix = &name[..suffix.start()];
            !EXEMPT_STAT_PREFIXES.iter().any(|exempt| prefix.ends_with(*exempt))
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keep_all() {
        assert!(ValueFilter::KeepAll.value_can_be_added("anything_std", true));
    }

    #[test]
    fn test_require_substring() {
        let filter = ValueFilter::RequireSubstring("v8");
        assert!(filter.value_can_be_added("v8_gc_full_mark_compactor", false));
        assert!(filter.value_can_be_added("memory:chrome:renderer:v8", false));
        assert!(!filter.value_can_be_added("frame_time_discrepancy", false));
    }

    #[test]
    fn test_memory_non_memory_values_kept() {
        let filter = ValueFilter::MemoryCodeSize;
        assert!(filter.value_can_be_added("cpu_time_std", true));
        assert!(filter.value_can_be_added("subsystem_count", true));
    }

    #[test]
    fn test_memory_non_v8_chrome_values_dropped() {
        let filter = ValueFilter::MemoryCodeSize;
        assert!(!filter.value_can_be_added(
            "memory:chrome:all_processes:reported_by_chrome:malloc:effective_size_avg",
            true
        ));
        assert!(!filter.value_can_be_added("memory:chrome:renderer:subsystem:cc:size_max", true));
        assert!(filter.value_can_be_added(
            "memory:chrome:all_processes:reported_by_chrome:v8:effective_size_avg",
            true
        ));
    }

    #[test]
    fn test_memory_statistic_suffixes() {
        let filter = ValueFilter::MemoryCodeSize;
        for dropped in [
            "memory:chrome:renderer:v8:code_size_std",
            "memory:chrome:renderer:v8:code_size_count",
            "memory:chrome:renderer:v8:code_size_min",
            "memory:chrome:renderer:v8:code_size_sum",
            "memory:chrome:renderer:v8:code_size_pct_0950",
            "memory:chrome:renderer:v8:code_size_pct_0990_5",
        ] {
            assert!(!filter.value_can_be_added(dropped, true), "{} should be dropped", dropped);
        }
        for kept in [
            "memory:chrome:renderer:v8:code_size_avg",
            "memory:chrome:renderer:v8:code_size_max",
            "memory:chrome:all_processes:dump_count",
            "memory:chrome:all_processes:process_count",
            "memory:chrome:all_processes:process_std",
            "memory:chrome:renderer:v8:code_size_pct_95",
        ] {
            assert!(filter.value_can_be_added(kept, true), "{} should be kept", kept);
        }
    }
}
