//! Browser launch flag composition
//!
//! Benchmarks only ever append flags: the base set handed in by the runner is
//! kept intact and in order. V8 flags travel in a single `--js-flags=` switch,
//! so appending V8 flags extends that switch in place.

use serde::{Deserialize, Serialize};
use tracing::trace;

const JS_FLAGS_PREFIX: &str = "--js-flags=";

/// Extra command-line switches passed to the browser at launch
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrowserOptions {
    extra_browser_args: Vec<String>,
}

impl BrowserOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from the runner's base switches
    pub fn with_base_args<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut options = Self::new();
        options.append_extra_browser_args(args);
        options
    }

    pub fn extra_browser_args(&self) -> &[String] {
        &self.extra_browser_args
    }

    /// Append switches, skipping ones already present
    pub fn append_extra_browser_args<I, S>(&mut self, args: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for arg in args {
            let arg = arg.into();
            if !self.extra_browser_args.contains(&arg) {
                self.extra_browser_args.push(arg);
            }
        }
    }

    /// Current value of the `--js-flags=` switch, if any
    pub fn js_flags(&self) -> Option<&str> {
        self.extra_browser_args
            .iter()
            .find_map(|arg| arg.strip_prefix(JS_FLAGS_PREFIX))
    }

    /// Add V8 flags to the single `--js-flags=` switch, skipping flags it already has
    pub fn append_js_flags(&mut self, js_flags: &str) {
        let index = match self
            .extra_browser_args
            .iter()
            .position(|arg| arg.starts_with(JS_FLAGS_PREFIX))
        {
            Some(index) => index,
            None => {
                if js_flags.split_whitespace().next().is_none() {
                    return;
                }
                self.extra_browser_args.push(JS_FLAGS_PREFIX.to_string());
                self.extra_browser_args.len() - 1
            }
        };

        let existing = &mut self.extra_browser_args[index];
        let mut flags: Vec<String> = existing[JS_FLAGS_PREFIX.len()..]
            .split_whitespace()
            .map(str::to_string)
            .collect();
        for flag in js_flags.split_whitespace() {
            if !flags.iter().any(|f| f == flag) {
                flags.push(flag.to_string());
            }
        }
        *existing = format!("{}{}", JS_FLAGS_PREFIX, flags.join(" "));
        trace!(js_flags = ?self.js_flags(), "Appended V8 flags");
    }

    /// Run V8 with the Ignition interpreter
    pub fn enable_ignition(&mut self) {
        self.append_js_flags("--ignition");
    }
}

/// One declarative step applied to the browser options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BrowserOverride {
    ExtraArgs(&'static [&'static str]),
    JsFlags(&'static str),
    Ignition,
    /// A shared table applied in place
    Steps(&'static [BrowserOverride]),
}

impl BrowserOverride {
    pub fn apply(&self, options: &mut BrowserOptions) {
        match self {
            BrowserOverride::ExtraArgs(args) => options.append_extra_browser_args(args.iter().copied()),
            BrowserOverride::JsFlags(flags) => options.append_js_flags(flags),
            BrowserOverride::Ignition => options.enable_ignition(),
            BrowserOverride::Steps(steps) => apply_overrides(steps, options),
        }
    }
}

/// Apply override steps in declaration order
pub fn apply_overrides(overrides: &[BrowserOverride], options: &mut BrowserOptions) {
    for step in overrides {
        step.apply(options);
    }
}

/// Switches used by the infinite-scroll benchmarks
pub const INFINITE_SCROLL_OVERRIDES: &[BrowserOverride] = &[
    // Also disables periodic memory dumps, which would skew the GC numbers.
    BrowserOverride::ExtraArgs(&["--enable-memory-benchmarking", "--disable-notifications"]),
    BrowserOverride::JsFlags("--heap-growing-percent=10"),
];
