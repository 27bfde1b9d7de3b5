//! Chrome trace configuration and periodic memory dumps

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use crate::category_filter::CategoryFilter;
use crate::error::{BenchmarkError, Result};

/// Level of detail captured by a memory dump
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DumpMode {
    Light,
    Detailed,
}

impl fmt::Display for DumpMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DumpMode::Light => write!(f, "light"),
            DumpMode::Detailed => write!(f, "detailed"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryDumpTrigger {
    pub mode: DumpMode,
    pub periodic_interval_ms: u64,
}

/// Periodic memory dump triggers requested for a run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryDumpConfig {
    triggers: Vec<MemoryDumpTrigger>,
}

impl MemoryDumpConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_trigger(&mut self, mode: DumpMode, periodic_interval_ms: u64) -> Result<()> {
        if periodic_interval_ms == 0 {
            return Err(BenchmarkError::InvalidDumpInterval(periodic_interval_ms));
        }
        self.triggers.push(MemoryDumpTrigger {
            mode,
            periodic_interval_ms,
        });
        Ok(())
    }

    pub fn triggers(&self) -> &[MemoryDumpTrigger] {
        &self.triggers
    }

    fn to_json(&self) -> Value {
        let triggers: Vec<Value> = self
            .triggers
            .iter()
            .map(|t| {
                json!({
                    "mode": t.mode.to_string(),
                    "periodicIntervalMs": t.periodic_interval_ms,
                })
            })
            .collect();
        json!({ "triggers": triggers })
    }
}

/// How the tracing backend buffers events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RecordMode {
    RecordUntilFull,
    RecordContinuously,
    RecordAsMuchAsPossible,
}

impl Default for RecordMode {
    fn default() -> Self {
        RecordMode::RecordAsMuchAsPossible
    }
}

impl fmt::Display for RecordMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordMode::RecordUntilFull => write!(f, "record-until-full"),
            RecordMode::RecordContinuously => write!(f, "record-continuously"),
            RecordMode::RecordAsMuchAsPossible => write!(f, "record-as-much-as-possible"),
        }
    }
}

/// Chrome-side trace configuration attached to a measurement
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChromeTraceConfig {
    pub record_mode: RecordMode,
    pub memory_dump_config: Option<MemoryDumpConfig>,
}

impl ChromeTraceConfig {
    pub fn set_memory_dump_config(&mut self, config: MemoryDumpConfig) {
        self.memory_dump_config = Some(config);
    }

    /// Render the DevTools `Tracing.start` trace config for a category filter
    pub fn to_devtools_json(&self, filter: &CategoryFilter) -> Value {
        let mut result = Map::new();
        result.insert("recordMode".to_string(), json!(self.record_mode.to_string()));

        let included: Vec<&str> = filter
            .included_categories()
            .chain(filter.disabled_by_default_categories())
            .collect();
        if !included.is_empty() {
            result.insert("includedCategories".to_string(), json!(included));
        }

        let excluded: Vec<&str> = filter.excluded_categories().collect();
        if !excluded.is_empty() {
            result.insert("excludedCategories".to_string(), json!(excluded));
        }

        let delays: Vec<&str> = filter.synthetic_delays().collect();
        if !delays.is_empty() {
            result.insert("syntheticDelays".to_string(), json!(delays));
        }

        if let Some(memory_dump_config) = &self.memory_dump_config {
            result.insert("memoryDumpConfig".to_string(), memory_dump_config.to_json());
        }

        Value::Object(result)
    }
}
