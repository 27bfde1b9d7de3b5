//! Benchmark descriptors
//!
//! A descriptor is an immutable record pairing a page set with a measurement
//! and the environment toggles around it. Everything the runner asks of a
//! benchmark is answered from these fields.

use serde::Serialize;

use crate::browser_options::{apply_overrides, BrowserOptions, BrowserOverride};
use crate::enablement::{self, Decorator, Enablement, ShouldDisable};
use crate::error::Result;
use crate::measurement::{Measurement, MeasurementKind};
use crate::page_set::PageSet;
use crate::platform::PossibleBrowser;
use crate::value_filter::ValueFilter;

/// Runner options a benchmark pins
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunOptions {
    pub pageset_repeat: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BenchmarkDescriptor {
    pub name: &'static str,
    pub description: &'static str,
    pub page_set: PageSet,
    pub measurement: MeasurementKind,
    pub browser_overrides: &'static [BrowserOverride],
    pub decorators: &'static [Decorator],
    pub should_disable: ShouldDisable,
    pub tear_down_after_each_story: bool,
    pub value_filter: ValueFilter,
    pub run_options: RunOptions,
}

impl BenchmarkDescriptor {
    /// Defaults shared by every entry: no overrides, always enabled, no
    /// teardown, all values kept.
    pub const fn new(
        name: &'static str,
        description: &'static str,
        page_set: PageSet,
        measurement: MeasurementKind,
    ) -> Self {
        Self {
            name,
            description,
            page_set,
            measurement,
            browser_overrides: &[],
            decorators: &[],
            should_disable: ShouldDisable::Never,
            tear_down_after_each_story: false,
            value_filter: ValueFilter::KeepAll,
            run_options: RunOptions { pageset_repeat: None },
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn create_measurement_options(&self) -> Result<Measurement> {
        self.measurement.create()
    }

    /// Append this benchmark's switches to the runner's options
    pub fn set_extra_browser_options(&self, options: &mut BrowserOptions) {
        apply_overrides(self.browser_overrides, options);
    }

    /// The device/build predicate alone
    pub fn should_disable(&self, browser: &PossibleBrowser) -> bool {
        self.should_disable.evaluate(browser)
    }

    /// Decorators and predicate together
    pub fn enablement(&self, browser: &PossibleBrowser) -> Enablement {
        enablement::evaluate(self.name, self.decorators, &self.should_disable, browser)
    }

    pub fn is_enabled_for(&self, browser: &PossibleBrowser) -> bool {
        self.enablement(browser).is_enabled()
    }

    pub fn should_tear_down_state_after_each_story_run(&self) -> bool {
        self.tear_down_after_each_story
    }

    pub fn value_can_be_added(&self, value_name: &str, is_first_result: bool) -> bool {
        self.value_filter.value_can_be_added(value_name, is_first_result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measurement::LegacyPageTest;
    use crate::platform::{BrowserType, PlatformInfo};

    fn sample() -> BenchmarkDescriptor {
        BenchmarkDescriptor::new(
            "sample",
            "Sample benchmark",
            PageSet::Named("SamplePageSet"),
            MeasurementKind::PageTest(LegacyPageTest::V8GcTimes),
        )
    }

    #[test]
    fn test_defaults() {
        let descriptor = sample();
        let browser = PossibleBrowser::new(BrowserType::Reference, PlatformInfo::new("win"));

        assert_eq!(descriptor.name(), "sample");
        assert!(!descriptor.should_disable(&browser));
        assert!(descriptor.is_enabled_for(&browser));
        assert!(!descriptor.should_tear_down_state_after_each_story_run());
        assert!(descriptor.value_can_be_added("anything", true));

        let mut options = BrowserOptions::with_base_args(["--base"]);
        descriptor.set_extra_browser_options(&mut options);
        assert_eq!(options.extra_browser_args(), &["--base"]);
    }

    #[test]
    fn test_overrides_applied() {
        let descriptor = BenchmarkDescriptor {
            browser_overrides: &[BrowserOverride::ExtraArgs(&["--x"]), BrowserOverride::Ignition],
            ..sample()
        };
        let mut options = BrowserOptions::new();
        descriptor.set_extra_browser_options(&mut options);
        assert_eq!(options.extra_browser_args(), &["--x", "--js-flags=--ignition"]);
    }
}
