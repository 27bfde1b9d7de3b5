//! Browser and platform descriptors
//!
//! The runner describes each candidate browser with its build type and the
//! platform it runs on. Benchmarks decide from these fields alone whether to
//! run, so the types here are plain data.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Build flavor of the browser under test
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum BrowserType {
    Release,
    Reference,
    Debug,
    Canary,
    AndroidChromium,
    AndroidChrome,
    Exact,
    Other(String),
}

impl BrowserType {
    pub fn as_str(&self) -> &str {
        match self {
            BrowserType::Release => "release",
            BrowserType::Reference => "reference",
            BrowserType::Debug => "debug",
            BrowserType::Canary => "canary",
            BrowserType::AndroidChromium => "android-chromium",
            BrowserType::AndroidChrome => "android-chrome",
            BrowserType::Exact => "exact",
            BrowserType::Other(name) => name,
        }
    }
}

impl FromStr for BrowserType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_lowercase().as_str() {
            "release" => BrowserType::Release,
            "reference" => BrowserType::Reference,
            "debug" => BrowserType::Debug,
            "canary" => BrowserType::Canary,
            "android-chromium" => BrowserType::AndroidChromium,
            "android-chrome" => BrowserType::AndroidChrome,
            "exact" => BrowserType::Exact,
            other => BrowserType::Other(other.to_string()),
        })
    }
}

impl From<String> for BrowserType {
    fn from(s: String) -> Self {
        match s.parse() {
            Ok(browser_type) => browser_type,
            Err(never) => match never {},
        }
    }
}

impl From<BrowserType> for String {
    fn from(browser_type: BrowserType) -> Self {
        browser_type.as_str().to_string()
    }
}

impl fmt::Display for BrowserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Platform the browser runs on
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformInfo {
    /// `linux`, `mac`, `win`, `android`, `chromeos`
    pub os_name: String,
    /// e.g. `yosemite`, `win10`, `marshmallow`
    pub os_version_name: Option<String>,
    /// Device model, e.g. `Nexus 5X`; empty on desktop
    pub device_type_name: String,
    /// Android low-memory build
    pub is_svelte: bool,
}

impl PlatformInfo {
    pub fn new(os_name: &str) -> Self {
        Self {
            os_name: os_name.to_lowercase(),
            os_version_name: None,
            device_type_name: String::new(),
            is_svelte: false,
        }
    }

    pub fn with_os_version(mut self, version: &str) -> Self {
        self.os_version_name = Some(version.to_lowercase());
        self
    }

    pub fn with_device(mut self, device_type_name: &str) -> Self {
        self.device_type_name = device_type_name.to_string();
        self
    }

    pub fn svelte(mut self, is_svelte: bool) -> Self {
        self.is_svelte = is_svelte;
        self
    }

    pub fn is_android(&self) -> bool {
        self.os_name == "android"
    }
}

/// A browser the runner could launch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PossibleBrowser {
    pub browser_type: BrowserType,
    pub platform: PlatformInfo,
}

impl PossibleBrowser {
    pub fn new(browser_type: BrowserType, platform: PlatformInfo) -> Self {
        Self {
            browser_type,
            platform,
        }
    }

    pub fn device_type_name(&self) -> &str {
        &self.platform.device_type_name
    }

    /// Svelte builds only exist on Android
    pub fn is_svelte(&self) -> bool {
        self.platform.is_android() && self.platform.is_svelte
    }

    /// Whether a decorator tag names this browser or its platform
    pub fn matches_tag(&self, tag: &str) -> bool {
        let tag = tag.to_lowercase();
        tag == "all"
            || tag == self.browser_type.as_str()
            || tag == self.platform.os_name
            || self.platform.os_version_name.as_deref() == Some(tag.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_browser_type_round_trip_through_str() {
        for name in ["release", "reference", "android-chrome", "content-shell"] {
            let parsed: BrowserType = name.parse().unwrap();
            assert_eq!(parsed.as_str(), name);
        }
        assert_eq!("Reference".parse::<BrowserType>().unwrap(), BrowserType::Reference);
    }

    #[test]
    fn test_matches_tag() {
        let browser = PossibleBrowser::new(
            BrowserType::Reference,
            PlatformInfo::new("Mac").with_os_version("Yosemite"),
        );
        assert!(browser.matches_tag("reference"));
        assert!(browser.matches_tag("mac"));
        assert!(browser.matches_tag("yosemite"));
        assert!(browser.matches_tag("all"));
        assert!(!browser.matches_tag("win"));
        assert!(!browser.matches_tag("android"));
    }

    #[test]
    fn test_svelte_requires_android() {
        let desktop = PossibleBrowser::new(BrowserType::Release, PlatformInfo::new("linux").svelte(true));
        assert!(!desktop.is_svelte());

        let phone = PossibleBrowser::new(
            BrowserType::AndroidChrome,
            PlatformInfo::new("android").with_device("Nexus 5").svelte(true),
        );
        assert!(phone.is_svelte());
        assert_eq!(phone.device_type_name(), "Nexus 5");
    }
}
