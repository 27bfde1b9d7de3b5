use crate::commands::BrowserSelection;
use crate::error::Result;
use crate::output::{BenchmarkSummary, OutputManager};
use clap::Args;
use tracing::debug;
use v8_benchmarks::{BenchmarkDescriptor, Config, Registry};

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Only list benchmarks whose name contains this text
    #[arg(short, long)]
    pub filter: Option<String>,

    /// Show whether each benchmark runs on the configured browser
    #[arg(long)]
    pub state: bool,

    /// Hide benchmarks disabled on the configured browser
    #[arg(long)]
    pub enabled: bool,

    /// Ignore the include/exclude lists from the configuration
    #[arg(long)]
    pub all: bool,

    #[command(flatten)]
    pub browser: BrowserSelection,
}

pub fn run(args: ListArgs, config: &Config, output: &OutputManager) -> Result<()> {
    let registry = Registry::global();
    let browser = args.browser.resolve(config);
    let with_state = args.state || args.enabled || !args.browser.is_empty();

    let rows: Vec<BenchmarkSummary> = registry
        .matching(args.filter.as_deref().unwrap_or(""))
        .filter(|b| args.all || config.is_selected(b.name))
        .filter(|b| !args.enabled || b.is_enabled_for(&browser))
        .map(|b| summarize(b, with_state.then(|| b.enablement(&browser))))
        .collect();

    debug!("Listing {} of {} benchmarks", rows.len(), registry.len());
    output.print_benchmark_list(&rows)
}

fn summarize(benchmark: &BenchmarkDescriptor, enablement: Option<v8_benchmarks::Enablement>) -> BenchmarkSummary {
    let metric = match benchmark.create_measurement_options() {
        Ok(measurement) => measurement.metric_name(),
        Err(e) => format!("invalid ({})", e),
    };
    BenchmarkSummary {
        name: benchmark.name.to_string(),
        page_set: benchmark.page_set.to_string(),
        metric,
        enablement,
    }
}
