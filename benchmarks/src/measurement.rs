//! Measurement strategies
//!
//! A benchmark is measured either by a legacy page test, which computes its
//! values while the page runs, or by timeline-based measurement, which records
//! a trace and hands it to a named metric afterwards. The shared option
//! builders below are used by several catalog entries.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::category_filter::CategoryFilter;
use crate::error::Result;
use crate::trace_config::{ChromeTraceConfig, DumpMode, MemoryDumpConfig};

/// Interval between light memory dumps in the code-size benchmarks
pub const CODE_SIZE_DUMP_INTERVAL_MS: u64 = 20;

const V8_CATEGORIES: &[&str] = &[
    "blink.console",
    "disabled-by-default-v8.gc",
    "renderer.scheduler",
    "v8",
    "webkit.console",
];
const SMOOTHNESS_CATEGORIES: &[&str] = &[
    "webkit.console",
    "blink.console",
    "benchmark",
    "trace_event_overhead",
];
const MEMORY_CATEGORIES: &[&str] = &["blink.console", "disabled-by-default-memory-infra"];

/// Page tests that predate timeline-based measurement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LegacyPageTest {
    V8GcTimes,
    V8DetachedContextAgeInGc,
}

impl fmt::Display for LegacyPageTest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LegacyPageTest::V8GcTimes => write!(f, "v8_gc_times"),
            LegacyPageTest::V8DetachedContextAgeInGc => write!(f, "v8_detached_context_age_in_gc"),
        }
    }
}

/// Options for timeline-based measurement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineBasedOptions {
    pub category_filter: CategoryFilter,
    pub config: ChromeTraceConfig,
    pub timeline_based_metric: Option<String>,
}

impl TimelineBasedOptions {
    pub fn new(category_filter: CategoryFilter) -> Self {
        Self {
            category_filter,
            config: ChromeTraceConfig::default(),
            timeline_based_metric: None,
        }
    }

    pub fn set_timeline_based_metric(&mut self, metric: &str) {
        self.timeline_based_metric = Some(metric.to_string());
    }

    pub fn trace_config_json(&self) -> Value {
        self.config.to_devtools_json(&self.category_filter)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Measurement {
    PageTest(LegacyPageTest),
    TimelineBased(TimelineBasedOptions),
}

impl Measurement {
    pub fn timeline_based_options(&self) -> Option<&TimelineBasedOptions> {
        match self {
            Measurement::TimelineBased(options) => Some(options),
            Measurement::PageTest(_) => None,
        }
    }

    pub fn metric_name(&self) -> String {
        match self {
            Measurement::PageTest(test) => test.to_string(),
            Measurement::TimelineBased(options) => options
                .timeline_based_metric
                .clone()
                .unwrap_or_else(|| "none".to_string()),
        }
    }
}

/// Which shared option builder a timeline-based benchmark uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeasurementKind {
    PageTest(LegacyPageTest),
    V8Execution,
    InfiniteScroll,
    MemoryCodeSize,
}

impl MeasurementKind {
    pub fn create(self) -> Result<Measurement> {
        let options = match self {
            MeasurementKind::PageTest(test) => return Ok(Measurement::PageTest(test)),
            MeasurementKind::V8Execution => v8_execution_options(),
            MeasurementKind::InfiniteScroll => infinite_scroll_options()?,
            MeasurementKind::MemoryCodeSize => memory_code_size_options()?,
        };
        Ok(Measurement::TimelineBased(options))
    }
}

/// V8 execution metrics over the default categories plus `v8`
pub fn v8_execution_options() -> TimelineBasedOptions {
    let mut category_filter = CategoryFilter::minimal_overhead();
    category_filter.add_included_category("v8");
    category_filter.add_included_category("blink.console");
    let mut options = TimelineBasedOptions::new(category_filter);
    options.set_timeline_based_metric("executionMetric");
    options
}

/// GC, smoothness and memory-infra categories for infinite scrolling
pub fn infinite_scroll_options() -> Result<TimelineBasedOptions> {
    let categories = std::iter::once("-*")
        .chain(V8_CATEGORIES.iter().copied())
        .chain(SMOOTHNESS_CATEGORIES.iter().copied())
        .chain(MEMORY_CATEGORIES.iter().copied());
    let category_filter = CategoryFilter::from_categories(categories)?;
    let mut options = TimelineBasedOptions::new(category_filter);
    // TODO: add frame time discrepancy once it is available as a timeline metric.
    options.set_timeline_based_metric("v8AndMemoryMetrics");
    Ok(options)
}

/// Memory-infra with V8 code stats and periodic light dumps
pub fn memory_code_size_options() -> Result<TimelineBasedOptions> {
    // Code stats are enabled here only, they slow down detailed dumps elsewhere.
    let category_filter = CategoryFilter::parse(
        "-*, disabled-by-default-memory-infra,disabled-by-default-memory-infra.v8.code_stats",
    )?;
    let mut options = TimelineBasedOptions::new(category_filter);

    let mut memory_dump_config = MemoryDumpConfig::new();
    memory_dump_config.add_trigger(DumpMode::Light, CODE_SIZE_DUMP_INTERVAL_MS)?;
    options.config.set_memory_dump_config(memory_dump_config);

    options.set_timeline_based_metric("memoryMetric");
    Ok(options)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_v8_execution_options() {
        let options = v8_execution_options();
        assert_eq!(options.category_filter.filter_string(), "blink.console,v8");
        assert_eq!(options.timeline_based_metric.as_deref(), Some("executionMetric"));
        assert!(options.config.memory_dump_config.is_none());
    }

    #[test]
    fn test_infinite_scroll_options() {
        let options = infinite_scroll_options().unwrap();
        let filter = &options.category_filter;

        assert!(filter.excludes("*"));
        for category in V8_CATEGORIES.iter().chain(SMOOTHNESS_CATEGORIES).chain(MEMORY_CATEGORIES) {
            assert!(filter.includes(category), "missing {}", category);
        }
        assert_eq!(
            filter.filter_string(),
            "benchmark,blink.console,renderer.scheduler,trace_event_overhead,v8,webkit.console,\
             disabled-by-default-memory-infra,disabled-by-default-v8.gc,-*"
        );
        assert_eq!(options.timeline_based_metric.as_deref(), Some("v8AndMemoryMetrics"));
    }

    #[test]
    fn test_memory_code_size_options() {
        let options = memory_code_size_options().unwrap();
        assert_eq!(
            options.category_filter.filter_string(),
            "disabled-by-default-memory-infra,disabled-by-default-memory-infra.v8.code_stats,-*"
        );

        let dumps = options.config.memory_dump_config.as_ref().unwrap();
        assert_eq!(dumps.triggers().len(), 1);
        assert_eq!(dumps.triggers()[0].mode, DumpMode::Light);
        assert_eq!(dumps.triggers()[0].periodic_interval_ms, 20);
        assert_eq!(options.timeline_based_metric.as_deref(), Some("memoryMetric"));
    }

    #[test]
    fn test_page_test_measurement() {
        let measurement = MeasurementKind::PageTest(LegacyPageTest::V8GcTimes).create().unwrap();
        assert!(measurement.timeline_based_options().is_none());
        assert_eq!(measurement.metric_name(), "v8_gc_times");
    }
}
