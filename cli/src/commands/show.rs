use crate::error::Result;
use crate::output::OutputManager;
use clap::Args;
use v8_benchmarks::{catalog, find};

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Benchmark name
    pub name: String,
}

pub fn run(args: ShowArgs, output: &OutputManager) -> Result<()> {
    let benchmark = find(&args.name)?;
    output.print_benchmark(benchmark, catalog::documentation_url(benchmark.name))
}
