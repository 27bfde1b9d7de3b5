use crate::error::{CliError, Result};
use std::env;
use std::io::{self, BufRead};
use std::path::PathBuf;

/// Get the configuration directory
pub fn get_config_dir() -> Result<PathBuf> {
    if let Ok(dir) = env::var("V8BENCH_CONFIG_DIR") {
        Ok(PathBuf::from(dir))
    } else if let Some(home_dir) = dirs::home_dir() {
        Ok(home_dir.join(".v8bench"))
    } else {
        Err(CliError::Validation(
            "Unable to determine home directory".to_string(),
        ))
    }
}

/// Get the configuration file path
pub fn get_config_file() -> Result<PathBuf> {
    Ok(get_config_dir()?.join("config.toml"))
}

/// Non-empty trimmed lines from stdin
pub fn read_stdin_lines() -> Result<Vec<String>> {
    let stdin = io::stdin();
    let mut lines = Vec::new();
    for line in stdin.lock().lines() {
        let line = line?;
        let line = line.trim();
        if !line.is_empty() {
            lines.push(line.to_string());
        }
    }
    Ok(lines)
}
