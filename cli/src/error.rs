use thiserror::Error;
use v8_benchmarks::BenchmarkError;

#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Benchmark(#[from] BenchmarkError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl CliError {
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Benchmark(BenchmarkError::Config(_))
            | CliError::Benchmark(BenchmarkError::TomlDe(_))
            | CliError::Benchmark(BenchmarkError::TomlSer(_)) => 1,
            CliError::Io(_) | CliError::Benchmark(BenchmarkError::Io(_)) => 2,
            CliError::Benchmark(BenchmarkError::UnknownBenchmark { .. }) => 3,
            CliError::Validation(_) => 4,
            _ => 1, // Generic error
        }
    }
}

pub type Result<T> = std::result::Result<T, CliError>;

/// Format error for user-friendly display
pub fn format_error(error: &CliError) -> String {
    match error {
        CliError::Benchmark(BenchmarkError::UnknownBenchmark { name }) => {
            format!("Unknown Benchmark: {}\n\nRun 'v8benchctl list' to see the declared benchmarks.", name)
        }
        CliError::Benchmark(BenchmarkError::Config(msg)) => {
            format!("Configuration Error: {}\n\nTry running 'v8benchctl config show' to check your configuration.", msg)
        }
        CliError::Benchmark(BenchmarkError::TomlDe(e)) => {
            format!("Configuration Error: {}\n\nThe configuration file is not valid TOML.", e)
        }
        CliError::Validation(msg) => {
            format!("Validation Error: {}", msg)
        }
        _ => error.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        let unknown = CliError::from(BenchmarkError::UnknownBenchmark {
            name: "x".to_string(),
        });
        assert_eq!(unknown.exit_code(), 3);
        assert_eq!(CliError::Validation("bad".to_string()).exit_code(), 4);
        assert_eq!(
            CliError::from(BenchmarkError::Config("bad".to_string())).exit_code(),
            1
        );
    }

    #[test]
    fn test_format_unknown_benchmark() {
        let error = CliError::from(BenchmarkError::UnknownBenchmark {
            name: "v8.nope".to_string(),
        });
        let message = format_error(&error);
        assert!(message.contains("v8.nope"));
        assert!(message.contains("v8benchctl list"));
    }
}
