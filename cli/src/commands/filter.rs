use crate::error::Result;
use crate::output::OutputManager;
use crate::utils;
use clap::Args;
use serde::Serialize;
use tracing::debug;
use v8_benchmarks::find;

#[derive(Args, Debug)]
pub struct FilterArgs {
    /// Benchmark name
    pub name: String,

    /// Value names to check; read from stdin, one per line, when omitted
    pub values: Vec<String>,

    /// Treat the values as coming from a repeated story run
    #[arg(long)]
    pub not_first_result: bool,

    /// Print dropped values instead of kept ones
    #[arg(long)]
    pub dropped: bool,
}

#[derive(Debug, Serialize)]
struct FilterOutcome {
    kept: Vec<String>,
    dropped: Vec<String>,
}

pub fn run(args: FilterArgs, output: &OutputManager) -> Result<()> {
    let benchmark = find(&args.name)?;
    let values = if args.values.is_empty() {
        utils::read_stdin_lines()?
    } else {
        args.values
    };

    let is_first_result = !args.not_first_result;
    let (kept, dropped): (Vec<String>, Vec<String>) = values
        .into_iter()
        .partition(|value| benchmark.value_can_be_added(value, is_first_result));
    debug!(
        benchmark = benchmark.name,
        kept = kept.len(),
        dropped = dropped.len(),
        "Filtered values"
    );

    let outcome = FilterOutcome { kept, dropped };
    if output.print_structured(&outcome)? {
        return Ok(());
    }
    output.print_lines(if args.dropped { &outcome.dropped } else { &outcome.kept })
}
