use crate::error::Result;
use crate::output::OutputManager;
use clap::Args;
use serde_json::json;
use v8_benchmarks::{find, Measurement};

#[derive(Args, Debug)]
pub struct TraceConfigArgs {
    /// Benchmark name
    pub name: String,
}

pub fn run(args: TraceConfigArgs, output: &OutputManager) -> Result<()> {
    let benchmark = find(&args.name)?;

    let value = match benchmark.create_measurement_options()? {
        Measurement::TimelineBased(options) => json!({
            "benchmark": benchmark.name,
            "categoryFilter": options.category_filter.filter_string(),
            "timelineBasedMetric": options.timeline_based_metric,
            "traceConfig": options.trace_config_json(),
        }),
        Measurement::PageTest(test) => json!({
            "benchmark": benchmark.name,
            "pageTest": test.to_string(),
        }),
    };

    if !output.print_structured(&value)? {
        // Table and raw output are still JSON; the trace config has no flat form.
        println!("{}", serde_json::to_string_pretty(&value)?);
    }
    Ok(())
}
