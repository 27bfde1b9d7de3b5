//! Platform enable/disable rules

use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::platform::PossibleBrowser;

/// Class-level enable/disable tags checked before any predicate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Decorator {
    /// Run only when one of the tags matches
    Enabled(&'static [&'static str]),
    /// Skip when any of the tags matches
    Disabled(&'static [&'static str]),
}

impl Decorator {
    fn skip_reason(&self, browser: &PossibleBrowser) -> Option<String> {
        match self {
            Decorator::Enabled(tags) => {
                if tags.iter().any(|tag| browser.matches_tag(tag)) {
                    None
                } else {
                    Some(format!("enabled only on [{}]", tags.join(", ")))
                }
            }
            Decorator::Disabled(tags) => tags
                .iter()
                .find(|tag| browser.matches_tag(tag))
                .map(|tag| format!("disabled on '{}'", tag)),
        }
    }
}

/// Hard-coded device and build checks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ShouldDisable {
    Never,
    /// Reference builds on the named device
    ReferenceOnDevice(&'static str),
    /// Svelte builds, or any of the named devices
    SvelteOrDevices(&'static [&'static str]),
}

impl ShouldDisable {
    pub fn evaluate(&self, browser: &PossibleBrowser) -> bool {
        self.reason(browser).is_some()
    }

    fn reason(&self, browser: &PossibleBrowser) -> Option<String> {
        match self {
            ShouldDisable::Never => None,
            ShouldDisable::ReferenceOnDevice(device) => {
                if browser.browser_type.as_str() == "reference" && browser.device_type_name() == *device {
                    Some(format!("reference build on {}", device))
                } else {
                    None
                }
            }
            ShouldDisable::SvelteOrDevices(devices) => {
                if browser.is_svelte() {
                    Some("svelte build".to_string())
                } else {
                    devices
                        .iter()
                        .find(|device| browser.device_type_name() == **device)
                        .map(|device| format!("device {}", device))
                }
            }
        }
    }
}

/// Outcome of the enablement check
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "reason", rename_all = "snake_case")]
pub enum Enablement {
    Enabled,
    Disabled(String),
}

impl Enablement {
    pub fn is_enabled(&self) -> bool {
        matches!(self, Enablement::Enabled)
    }
}

impl fmt::Display for Enablement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Enablement::Enabled => write!(f, "enabled"),
            Enablement::Disabled(reason) => write!(f, "disabled ({})", reason),
        }
    }
}

/// Decorators first, then the predicate
pub fn evaluate(
    name: &str,
    decorators: &[Decorator],
    should_disable: &ShouldDisable,
    browser: &PossibleBrowser,
) -> Enablement {
    let reason = decorators
        .iter()
        .find_map(|decorator| decorator.skip_reason(browser))
        .or_else(|| should_disable.reason(browser));

    match reason {
        Some(reason) => {
            debug!(benchmark = name, %reason, "Benchmark disabled for browser");
            Enablement::Disabled(reason)
        }
        None => Enablement::Enabled,
    }
}
