//! Configuration management for the benchmark tooling

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{BenchmarkError, Result};
use crate::platform::{BrowserType, PlatformInfo, PossibleBrowser};
use crate::registry::Registry;

/// Main configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub browser: BrowserSettings,
    pub selection: SelectionSettings,
    pub output: OutputSettings,
}

/// The browser benchmarks are evaluated against
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrowserSettings {
    pub browser_type: String,
    pub os_name: String,
    pub os_version_name: Option<String>,
    pub device_type_name: String,
    pub svelte: bool,
    /// Switches the runner always passes
    pub base_args: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectionSettings {
    /// Benchmarks to consider; empty means all
    pub include: Vec<String>,
    pub exclude: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    pub format: OutputFormat,
    pub color: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Table,
    Json,
    Yaml,
    Raw,
}

impl std::str::FromStr for OutputFormat {
    type Err = BenchmarkError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            "yaml" => Ok(OutputFormat::Yaml),
            "raw" => Ok(OutputFormat::Raw),
            other => Err(BenchmarkError::Config(format!("Unknown output format: {}", other))),
        }
    }
}

impl Default for BrowserSettings {
    fn default() -> Self {
        Self {
            browser_type: "release".to_string(),
            os_name: std::env::consts::OS.replace("windows", "win").replace("macos", "mac"),
            os_version_name: None,
            device_type_name: String::new(),
            svelte: false,
            base_args: Vec::new(),
        }
    }
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            format: OutputFormat::Table,
            color: true,
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: Config = toml::from_str(&content)?;
        debug!("Loaded configuration from {}", path.as_ref().display());
        Ok(config)
    }

    /// Save configuration to file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load defaults, then apply environment overrides
    pub fn load_from_env() -> Result<Self> {
        let mut config = Config::default();
        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Override fields from `V8BENCH_*` environment variables
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(browser_type) = std::env::var("V8BENCH_BROWSER_TYPE") {
            self.browser.browser_type = browser_type;
        }

        if let Ok(os_name) = std::env::var("V8BENCH_OS") {
            self.browser.os_name = os_name;
        }

        if let Ok(device) = std::env::var("V8BENCH_DEVICE") {
            self.browser.device_type_name = device;
        }

        if let Ok(svelte) = std::env::var("V8BENCH_SVELTE") {
            self.browser.svelte = svelte
                .parse()
                .map_err(|_| BenchmarkError::Config(format!("V8BENCH_SVELTE must be true or false, got '{}'", svelte)))?;
        }

        if let Ok(format) = std::env::var("V8BENCH_OUTPUT_FORMAT") {
            self.output.format = format.parse()?;
        }

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.browser.browser_type.trim().is_empty() {
            return Err(BenchmarkError::Config("Browser type must not be empty".to_string()));
        }

        if self.browser.os_name.trim().is_empty() {
            return Err(BenchmarkError::Config("OS name must not be empty".to_string()));
        }

        let registry = Registry::global();
        for name in self.selection.include.iter().chain(&self.selection.exclude) {
            if !registry.contains(name) {
                return Err(BenchmarkError::Config(format!("Unknown benchmark in selection: {}", name)));
            }
        }

        Ok(())
    }

    /// The configured browser as the runner would describe it
    pub fn possible_browser(&self) -> PossibleBrowser {
        let mut platform = PlatformInfo::new(&self.browser.os_name)
            .with_device(&self.browser.device_type_name)
            .svelte(self.browser.svelte);
        if let Some(version) = &self.browser.os_version_name {
            platform = platform.with_os_version(version);
        }
        let browser_type: BrowserType = self.browser.browser_type.clone().into();
        PossibleBrowser::new(browser_type, platform)
    }

    /// Whether the selection lists admit a benchmark
    pub fn is_selected(&self, name: &str) -> bool {
        let included = self.selection.include.is_empty() || self.selection.include.iter().any(|n| n == name);
        included && !self.selection.exclude.iter().any(|n| n == name)
    }
}
