use crate::error::Result;
use console::{style, Style};
use serde::Serialize;
use v8_benchmarks::config::OutputFormat;
use v8_benchmarks::{BenchmarkDescriptor, Enablement};

/// One row of `list` output
#[derive(Debug, Clone, Serialize)]
pub struct BenchmarkSummary {
    pub name: String,
    pub page_set: String,
    pub metric: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enablement: Option<Enablement>,
}

pub struct OutputManager {
    format: OutputFormat,
    colored: bool,
}

impl OutputManager {
    pub fn new(format: OutputFormat, colored: bool) -> Self {
        Self { format, colored }
    }

    /// Print any serializable value in the structured formats
    pub fn print_structured<T: Serialize>(&self, value: &T) -> Result<bool> {
        match self.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(value)?);
                Ok(true)
            }
            OutputFormat::Yaml => {
                print!("{}", serde_yaml::to_string(value)?);
                Ok(true)
            }
            OutputFormat::Table | OutputFormat::Raw => Ok(false),
        }
    }

    pub fn print_benchmark_list(&self, rows: &[BenchmarkSummary]) -> Result<()> {
        if self.print_structured(&rows)? {
            return Ok(());
        }

        if self.format == OutputFormat::Raw {
            for row in rows {
                println!("{}", row.name);
            }
            return Ok(());
        }

        if rows.is_empty() {
            if self.colored {
                println!("{}", style("No benchmarks selected").yellow());
            } else {
                println!("No benchmarks selected");
            }
            return Ok(());
        }

        println!("{:<32} {:<30} {:<30} {}", "Name", "Page Set", "Metric", "State");
        println!("{:-<32} {:-<30} {:-<30} {:-<12}", "", "", "", "");

        for row in rows {
            let state = row
                .enablement
                .as_ref()
                .map(|e| e.to_string())
                .unwrap_or_else(|| "-".to_string());
            let page_set = truncate(&row.page_set, 30);

            if self.colored {
                let state_style = match &row.enablement {
                    Some(Enablement::Enabled) => Style::new().green(),
                    Some(Enablement::Disabled(_)) => Style::new().red(),
                    None => Style::new().dim(),
                };
                println!(
                    "{:<32} {:<30} {:<30} {}",
                    style(&row.name).cyan(),
                    page_set,
                    row.metric,
                    state_style.apply_to(state)
                );
            } else {
                println!("{:<32} {:<30} {:<30} {}", row.name, page_set, row.metric, state);
            }
        }

        println!("\nTotal: {} benchmarks", rows.len());
        Ok(())
    }

    pub fn print_benchmark(&self, benchmark: &BenchmarkDescriptor, doc_url: Option<&str>) -> Result<()> {
        if self.print_structured(benchmark)? {
            return Ok(());
        }

        let overrides = if benchmark.browser_overrides.is_empty() {
            "none".to_string()
        } else {
            benchmark
                .browser_overrides
                .iter()
                .map(|o| format!("{:?}", o))
                .collect::<Vec<_>>()
                .join(", ")
        };
        let decorators = benchmark
            .decorators
            .iter()
            .map(|d| format!("{:?}", d))
            .collect::<Vec<_>>()
            .join(", ");

        let mut fields = vec![
            ("Description", benchmark.description.to_string()),
            ("Page Set", benchmark.page_set.to_string()),
            ("Measurement", format!("{:?}", benchmark.measurement)),
            ("Browser Overrides", overrides),
            ("Decorators", if decorators.is_empty() { "none".to_string() } else { decorators }),
            ("Should Disable", format!("{:?}", benchmark.should_disable)),
            ("Tear Down Per Story", benchmark.tear_down_after_each_story.to_string()),
            ("Value Filter", format!("{:?}", benchmark.value_filter)),
        ];
        if let Some(repeat) = benchmark.run_options.pageset_repeat {
            fields.push(("Pageset Repeat", repeat.to_string()));
        }
        if let Some(url) = doc_url {
            fields.push(("Documentation", url.to_string()));
        }

        if self.colored && self.format == OutputFormat::Table {
            println!("{}", style(benchmark.name).bold().underlined());
        } else {
            println!("{}", benchmark.name);
        }
        for (key, value) in fields {
            self.print_key_value(key, &value);
        }
        Ok(())
    }

    pub fn print_lines(&self, lines: &[String]) -> Result<()> {
        if self.print_structured(&lines)? {
            return Ok(());
        }
        for line in lines {
            println!("{}", line);
        }
        Ok(())
    }

    pub fn print_key_value(&self, key: &str, value: &str) {
        if self.colored && self.format == OutputFormat::Table {
            println!("{}: {}", style(key).bold().blue(), style(value).green());
        } else {
            println!("{}: {}", key, value);
        }
    }

    pub fn print_success(&self, message: &str) {
        if self.colored {
            println!("{} {}", style("✓").green().bold(), message);
        } else {
            println!("✓ {}", message);
        }
    }

    pub fn print_warning(&self, message: &str) {
        if self.colored {
            println!("{} {}", style("⚠").yellow().bold(), message);
        } else {
            println!("⚠ {}", message);
        }
    }
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", cut)
    }
}
