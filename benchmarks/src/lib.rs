//! V8 Benchmark Declarations
//!
//! This crate declares the benchmarks that measure V8 garbage collection,
//! memory usage and execution while real web pages load and scroll. Each
//! benchmark pairs a page set with a measurement and a few environment
//! toggles:
//!
//! - trace category filters and periodic memory dumps
//! - browser switches appended to the runner's base set
//! - platform and device rules deciding whether to run at all
//! - a story teardown policy
//! - a predicate deciding which result values reach the report
//!
//! Launching the browser, recording traces and computing metrics are left to
//! the runner that consumes these descriptors.

pub mod benchmark;
pub mod browser_options;
pub mod catalog;
pub mod category_filter;
pub mod config;
pub mod enablement;
pub mod error;
pub mod measurement;
pub mod page_set;
pub mod platform;
pub mod registry;
pub mod trace_config;
pub mod value_filter;

pub use benchmark::{BenchmarkDescriptor, RunOptions};
pub use browser_options::{BrowserOptions, BrowserOverride};
pub use category_filter::CategoryFilter;
pub use config::Config;
pub use enablement::{Decorator, Enablement, ShouldDisable};
pub use error::{BenchmarkError, Result};
pub use measurement::{LegacyPageTest, Measurement, MeasurementKind, TimelineBasedOptions};
pub use page_set::PageSet;
pub use platform::{BrowserType, PlatformInfo, PossibleBrowser};
pub use registry::Registry;
pub use trace_config::{ChromeTraceConfig, DumpMode, MemoryDumpConfig};
pub use value_filter::ValueFilter;

/// Look up a declared benchmark by name
pub fn find(name: &str) -> Result<&'static BenchmarkDescriptor> {
    Registry::global().require(name)
}

/// Compose a benchmark's launch switches on top of the runner's base set
pub fn browser_args_for<I, S>(name: &str, base_args: I) -> Result<Vec<String>>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let benchmark = find(name)?;
    let mut options = BrowserOptions::with_base_args(base_args);
    benchmark.set_extra_browser_options(&mut options);
    Ok(options.extra_browser_args().to_vec())
}
