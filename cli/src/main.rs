use clap::{CommandFactory, Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use v8_benchmarks::config::OutputFormat;
use v8_benchmarks::Config;

mod commands;
mod error;
mod output;
mod utils;

use commands::*;
use error::Result;
use output::OutputManager;

#[derive(Parser)]
#[command(name = "v8benchctl")]
#[command(about = "V8 benchmark CLI - inspect the declared V8 GC, memory and execution benchmarks")]
#[command(version)]
#[command(long_about = "
v8benchctl shows the V8 benchmark declarations the way the benchmark runner
sees them: measurement options, browser switches, platform rules and result
value filtering.

Examples:
  v8benchctl list --state                             # List benchmarks and whether they run here
  v8benchctl show v8.infinite_scroll                  # Show one declaration
  v8benchctl browser-args v8.todomvc-ignition         # Composed browser switches
  v8benchctl check v8.top_25_smooth --browser-type reference --os android --device \"Nexus 5X\"
  v8benchctl filter top_10_mobile_memory memory:chrome:renderer:v8:code_size_std
")]
struct Cli {
    /// Output format
    #[arg(long, global = true, value_enum)]
    format: Option<OutputFormatArg>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Configuration file path
    #[arg(long, global = true, env = "V8BENCH_CONFIG")]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum OutputFormatArg {
    Table,
    Json,
    Yaml,
    Raw,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Table => OutputFormat::Table,
            OutputFormatArg::Json => OutputFormat::Json,
            OutputFormatArg::Yaml => OutputFormat::Yaml,
            OutputFormatArg::Raw => OutputFormat::Raw,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// List declared benchmarks
    List(ListArgs),

    /// Show a benchmark declaration
    Show(ShowArgs),

    /// Print the browser switches a benchmark launches with
    BrowserArgs(BrowserArgsArgs),

    /// Print the trace configuration of a benchmark
    TraceConfig(TraceConfigArgs),

    /// Check whether a benchmark runs on a browser and platform
    Check(CheckArgs),

    /// Apply a benchmark's result value filter to value names
    Filter(FilterArgs),

    /// Manage v8benchctl configuration
    Config(ConfigArgs),

    /// Generate shell completions
    Completions {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

fn main() {
    let cli = Cli::parse();

    init_logging(&cli);

    if let Commands::Completions { shell } = cli.command {
        generate_completions(shell);
        return;
    }

    if let Err(e) = run_command(cli) {
        eprintln!("{}", error::format_error(&e));
        process::exit(e.exit_code());
    }
}

fn run_command(cli: Cli) -> Result<()> {
    let config_path = match &cli.config {
        Some(path) => PathBuf::from(path),
        None => utils::get_config_file()?,
    };
    // Repairing or checking another file must not depend on the current one parsing.
    let config = match &cli.command {
        Commands::Config(args) if !args.action.reads_config() => None,
        _ => Some(load_config(&config_path)?),
    };

    let settings = config.as_ref().map(|c| c.output.clone()).unwrap_or_default();
    let format = cli.format.map(OutputFormat::from).unwrap_or(settings.format);
    let colored = settings.color && !cli.no_color && console::colors_enabled();
    let output = OutputManager::new(format, colored);
    let config = config.unwrap_or_default();

    match cli.command {
        Commands::List(args) => list::run(args, &config, &output),
        Commands::Show(args) => show::run(args, &output),
        Commands::BrowserArgs(args) => browser_args::run(args, &config, &output),
        Commands::TraceConfig(args) => trace_config::run(args, &output),
        Commands::Check(args) => check::run(args, &config, &output),
        Commands::Filter(args) => filter::run(args, &output),
        Commands::Config(args) => {
            let loaded = args.action.reads_config().then_some(&config);
            config::run(args, loaded, &config_path, &output)
        }
        Commands::Completions { .. } => Ok(()),
    }
}

fn init_logging(cli: &Cli) {
    let log_level = if cli.debug {
        "debug"
    } else if cli.verbose {
        "info"
    } else if cli.quiet {
        "error"
    } else {
        "warn"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("v8benchctl={},v8_benchmarks={}", log_level, log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Configuration file, environment overrides on top
fn load_config(config_path: &Path) -> Result<Config> {
    if !config_path.exists() {
        warn!("Configuration file not found: {}", config_path.display());
        return Ok(Config::load_from_env()?);
    }

    let mut config = Config::load_from_file(config_path)?;
    info!("Loaded configuration from: {}", config_path.display());
    config.apply_env_overrides()?;
    Ok(config)
}

fn generate_completions(shell: clap_complete::Shell) {
    use clap_complete::{generate, Generator};
    use std::io;

    fn print_completions<G: Generator>(gen: G, cmd: &mut clap::Command) {
        generate(gen, cmd, cmd.get_name().to_string(), &mut io::stdout());
    }

    let mut cmd = Cli::command();
    eprintln!("Generating completion file for {shell}...");
    print_completions(shell, &mut cmd);
}
