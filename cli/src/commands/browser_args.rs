use crate::error::Result;
use crate::output::OutputManager;
use clap::Args;
use v8_benchmarks::{browser_args_for, Config};

#[derive(Args, Debug)]
pub struct BrowserArgsArgs {
    /// Benchmark name
    pub name: String,

    /// Extra base switch, appended after the configured base switches
    #[arg(long = "base", value_name = "ARG", allow_hyphen_values = true)]
    pub base: Vec<String>,
}

pub fn run(args: BrowserArgsArgs, config: &Config, output: &OutputManager) -> Result<()> {
    let base = config
        .browser
        .base_args
        .iter()
        .cloned()
        .chain(args.base);
    let composed = browser_args_for(&args.name, base)?;
    output.print_lines(&composed)
}
