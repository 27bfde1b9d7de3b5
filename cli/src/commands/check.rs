use crate::commands::BrowserSelection;
use crate::error::Result;
use crate::output::OutputManager;
use clap::Args;
use serde_json::json;
use v8_benchmarks::{find, Config, Enablement};

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Benchmark name
    pub name: String,

    #[command(flatten)]
    pub browser: BrowserSelection,
}

pub fn run(args: CheckArgs, config: &Config, output: &OutputManager) -> Result<()> {
    let benchmark = find(&args.name)?;
    let browser = args.browser.resolve(config);
    let enablement = benchmark.enablement(&browser);

    let value = json!({
        "benchmark": benchmark.name,
        "browser": browser,
        "should_disable": benchmark.should_disable(&browser),
        "enablement": enablement,
    });
    if output.print_structured(&value)? {
        return Ok(());
    }

    let target = format!(
        "{} on {}{}",
        browser.browser_type,
        browser.platform.os_name,
        if browser.device_type_name().is_empty() {
            String::new()
        } else {
            format!(" ({})", browser.device_type_name())
        }
    );
    match &enablement {
        Enablement::Enabled => output.print_success(&format!("{} runs for {}", benchmark.name, target)),
        Enablement::Disabled(reason) => {
            output.print_warning(&format!("{} is skipped for {}: {}", benchmark.name, target, reason))
        }
    }
    Ok(())
}
