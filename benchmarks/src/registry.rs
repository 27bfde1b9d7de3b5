//! Process-wide benchmark registry
//!
//! Built once from the catalog on first use and read-only afterwards.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use tracing::{debug, error};

use crate::benchmark::BenchmarkDescriptor;
use crate::catalog;
use crate::error::{BenchmarkError, Result};
use crate::platform::PossibleBrowser;

static GLOBAL: Lazy<Registry> = Lazy::new(|| {
    // Names are literals in the catalog; a clash is caught by its tests.
    Registry::from_descriptors(catalog::benchmarks()).unwrap_or_else(|e| {
        error!("Benchmark catalog rejected: {}", e);
        Registry::default()
    })
});

#[derive(Debug, Default)]
pub struct Registry {
    benchmarks: Vec<BenchmarkDescriptor>,
    by_name: HashMap<&'static str, usize>,
}

impl Registry {
    /// The registry holding every declared benchmark
    pub fn global() -> &'static Registry {
        &GLOBAL
    }

    /// Register descriptors, rejecting duplicate names
    pub fn from_descriptors(descriptors: Vec<BenchmarkDescriptor>) -> Result<Self> {
        let mut by_name = HashMap::with_capacity(descriptors.len());
        for (index, descriptor) in descriptors.iter().enumerate() {
            if by_name.insert(descriptor.name, index).is_some() {
                return Err(BenchmarkError::DuplicateName {
                    name: descriptor.name.to_string(),
                });
            }
        }
        debug!("Registered {} benchmarks", descriptors.len());
        Ok(Self {
            benchmarks: descriptors,
            by_name,
        })
    }

    pub fn get(&self, name: &str) -> Option<&BenchmarkDescriptor> {
        self.by_name.get(name).map(|&index| &self.benchmarks[index])
    }

    /// Like `get`, but a missing name is an error
    pub fn require(&self, name: &str) -> Result<&BenchmarkDescriptor> {
        self.get(name).ok_or_else(|| BenchmarkError::UnknownBenchmark {
            name: name.to_string(),
        })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &BenchmarkDescriptor> {
        self.benchmarks.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.benchmarks.iter().map(|b| b.name)
    }

    pub fn len(&self) -> usize {
        self.benchmarks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.benchmarks.is_empty()
    }

    /// Benchmarks whose name contains `pattern`
    pub fn matching<'a>(&'a self, pattern: &'a str) -> impl Iterator<Item = &'a BenchmarkDescriptor> + 'a {
        self.benchmarks.iter().filter(move |b| b.name.contains(pattern))
    }

    /// Benchmarks that would run on this browser
    pub fn enabled_for<'a>(
        &'a self,
        browser: &'a PossibleBrowser,
    ) -> impl Iterator<Item = &'a BenchmarkDescriptor> + 'a {
        self.benchmarks.iter().filter(move |b| b.is_enabled_for(browser))
    }
}
