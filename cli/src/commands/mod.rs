pub mod browser_args;
pub mod check;
pub mod config;
pub mod filter;
pub mod list;
pub mod show;
pub mod trace_config;

pub use browser_args::BrowserArgsArgs;
pub use check::CheckArgs;
pub use config::ConfigArgs;
pub use filter::FilterArgs;
pub use list::ListArgs;
pub use show::ShowArgs;
pub use trace_config::TraceConfigArgs;

use clap::Args;
use v8_benchmarks::{Config, PossibleBrowser};

/// Browser description overriding the configured one
#[derive(Args, Debug, Default, Clone)]
pub struct BrowserSelection {
    /// Browser build type (release, reference, canary, android-chrome, ...)
    #[arg(long)]
    pub browser_type: Option<String>,

    /// Operating system name (linux, mac, win, android, chromeos)
    #[arg(long)]
    pub os: Option<String>,

    /// OS version name (e.g. yosemite, win10)
    #[arg(long)]
    pub os_version: Option<String>,

    /// Device model, e.g. "Nexus 5X"
    #[arg(long)]
    pub device: Option<String>,

    /// Treat the build as an Android low-memory (svelte) build
    #[arg(long)]
    pub svelte: bool,
}

impl BrowserSelection {
    pub fn is_empty(&self) -> bool {
        self.browser_type.is_none()
            && self.os.is_none()
            && self.os_version.is_none()
            && self.device.is_none()
            && !self.svelte
    }

    /// Apply the flags on top of the configured browser
    pub fn resolve(&self, config: &Config) -> PossibleBrowser {
        let mut config = config.clone();
        if let Some(browser_type) = &self.browser_type {
            config.browser.browser_type = browser_type.clone();
        }
        if let Some(os) = &self.os {
            config.browser.os_name = os.clone();
        }
        if let Some(version) = &self.os_version {
            config.browser.os_version_name = Some(version.clone());
        }
        if let Some(device) = &self.device {
            config.browser.device_type_name = device.clone();
        }
        if self.svelte {
            config.browser.svelte = true;
        }
        config.possible_browser()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use v8_benchmarks::BrowserType;

    #[test]
    fn test_resolve_overrides_config() {
        let selection = BrowserSelection {
            browser_type: Some("reference".to_string()),
            os: Some("android".to_string()),
            device: Some("Nexus 5X".to_string()),
            ..Default::default()
        };
        let browser = selection.resolve(&Config::default());
        assert_eq!(browser.browser_type, BrowserType::Reference);
        assert_eq!(browser.platform.os_name, "android");
        assert_eq!(browser.device_type_name(), "Nexus 5X");
        assert!(!selection.is_empty());
        assert!(BrowserSelection::default().is_empty());
    }
}
