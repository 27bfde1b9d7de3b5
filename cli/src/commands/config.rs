use crate::error::{CliError, Result};
use crate::output::OutputManager;
use clap::Args;
use std::path::{Path, PathBuf};
use v8_benchmarks::Config;

#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Configuration action
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(clap::Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration
    Show {
        /// Show configuration file path
        #[arg(long)]
        path: bool,
    },

    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Validate configuration
    Validate {
        /// Configuration file path (optional)
        #[arg(short, long)]
        file: Option<String>,
    },
}

impl ConfigAction {
    /// Whether the action needs the current configuration loaded
    pub fn reads_config(&self) -> bool {
        matches!(
            self,
            ConfigAction::Show { path: false } | ConfigAction::Validate { file: None }
        )
    }
}

/// `config` is `None` only for actions where `reads_config()` is false
pub fn run(args: ConfigArgs, config: Option<&Config>, config_path: &Path, output: &OutputManager) -> Result<()> {
    match (args.action, config) {
        (ConfigAction::Show { path: true }, _) => {
            output.print_key_value("Config File", &config_path.display().to_string());
            Ok(())
        }
        (ConfigAction::Init { force }, _) => init_config(config_path, force, output),
        (ConfigAction::Validate { file: Some(file) }, _) => {
            let path = PathBuf::from(file);
            validate_config(&Config::load_from_file(&path)?, &path, output)
        }
        (ConfigAction::Show { .. }, Some(config)) => show_config(config, output),
        (ConfigAction::Validate { file: None }, Some(config)) => validate_config(config, config_path, output),
        (_, None) => Err(CliError::Validation("Configuration was not loaded".to_string())),
    }
}

fn show_config(config: &Config, output: &OutputManager) -> Result<()> {
    if output.print_structured(config)? {
        return Ok(());
    }
    let rendered = toml::to_string_pretty(config).map_err(v8_benchmarks::BenchmarkError::from)?;
    print!("{}", rendered);
    Ok(())
}

fn init_config(config_path: &Path, force: bool, output: &OutputManager) -> Result<()> {
    if config_path.exists() && !force {
        return Err(CliError::Validation(format!(
            "{} already exists, use --force to overwrite",
            config_path.display()
        )));
    }
    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    Config::default().save_to_file(config_path)?;
    output.print_success(&format!("Wrote default configuration to {}", config_path.display()));
    Ok(())
}

fn validate_config(config: &Config, source: &Path, output: &OutputManager) -> Result<()> {
    config.validate()?;
    output.print_success(&format!("Configuration is valid ({})", source.display()));
    Ok(())
}
