use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Command isolated from the user's configuration
fn v8benchctl(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("v8benchctl").unwrap();
    cmd.env("V8BENCH_CONFIG_DIR", config_dir.path())
        .env_remove("V8BENCH_CONFIG")
        .env_remove("V8BENCH_BROWSER_TYPE")
        .env_remove("V8BENCH_OS")
        .env_remove("V8BENCH_DEVICE")
        .env_remove("V8BENCH_SVELTE")
        .env_remove("V8BENCH_OUTPUT_FORMAT")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_cli_help() {
    let dir = TempDir::new().unwrap();
    v8benchctl(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("V8 benchmark CLI"));
}

#[test]
fn test_cli_version() {
    let dir = TempDir::new().unwrap();
    v8benchctl(&dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("v8benchctl"));
}

#[test]
fn test_list_raw() {
    let dir = TempDir::new().unwrap();
    v8benchctl(&dir)
        .args(["--format", "raw", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("v8.top_25_smooth"))
        .stdout(predicate::str::contains("top_10_mobile_memory_ignition"))
        .stdout(predicate::str::contains("v8.google"));
}

#[test]
fn test_list_filter_json() {
    let dir = TempDir::new().unwrap();
    let output = v8benchctl(&dir)
        .args(["--format", "json", "list", "--filter", "infinite_scroll"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let rows: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let names: Vec<&str> = rows
        .as_array()
        .unwrap()
        .iter()
        .map(|row| row["name"].as_str().unwrap())
        .collect();
    assert_eq!(
        names,
        vec![
            "v8.infinite_scroll",
            "v8.infinite_scroll-ignition",
            "v8.mobile_infinite_scroll",
        ]
    );
}

#[test]
fn test_list_enabled_for_reference_nexus_5x() {
    let dir = TempDir::new().unwrap();
    v8benchctl(&dir)
        .args([
            "--format",
            "raw",
            "list",
            "--enabled",
            "--browser-type",
            "reference",
            "--os",
            "android",
            "--device",
            "Nexus 5X",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("v8.detached_context_age_in_gc"))
        .stdout(predicate::str::contains("v8.top_25_smooth").not())
        .stdout(predicate::str::contains("v8.mobile_infinite_scroll").not())
        .stdout(predicate::str::contains("v8.todomvc-ignition").not());
}

#[test]
fn test_browser_args() {
    let dir = TempDir::new().unwrap();
    v8benchctl(&dir)
        .args(["--format", "raw", "browser-args", "v8.infinite_scroll-ignition", "--base", "--no-sandbox"])
        .assert()
        .success()
        .stdout(predicate::str::diff(
            "--no-sandbox\n--enable-memory-benchmarking\n--disable-notifications\n--js-flags=--heap-growing-percent=10 --ignition\n",
        ));
}

#[test]
fn test_trace_config_for_code_size() {
    let dir = TempDir::new().unwrap();
    let output = v8benchctl(&dir)
        .args(["trace-config", "top_10_mobile_memory"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["timelineBasedMetric"], "memoryMetric");
    assert_eq!(
        value["traceConfig"]["memoryDumpConfig"]["triggers"][0]["periodicIntervalMs"],
        20
    );
}

#[test]
fn test_trace_config_for_page_test() {
    let dir = TempDir::new().unwrap();
    v8benchctl(&dir)
        .args(["trace-config", "v8.detached_context_age_in_gc"])
        .assert()
        .success()
        .stdout(predicate::str::contains("v8_detached_context_age_in_gc"));
}

#[test]
fn test_check_disabled() {
    let dir = TempDir::new().unwrap();
    v8benchctl(&dir)
        .args([
            "--no-color",
            "check",
            "v8.google",
            "--os",
            "android",
            "--device",
            "Nexus 7",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("skipped"))
        .stdout(predicate::str::contains("Nexus 7"));
}

#[test]
fn test_filter_values() {
    let dir = TempDir::new().unwrap();
    v8benchctl(&dir)
        .args([
            "--format",
            "raw",
            "filter",
            "top_10_mobile_memory",
            "memory:chrome:renderer:v8:code_size_avg",
            "memory:chrome:renderer:v8:code_size_std",
            "memory:chrome:all_processes:dump_count",
        ])
        .assert()
        .success()
        .stdout(predicate::str::diff(
            "memory:chrome:renderer:v8:code_size_avg\nmemory:chrome:all_processes:dump_count\n",
        ));
}

#[test]
fn test_filter_values_from_stdin() {
    let dir = TempDir::new().unwrap();
    v8benchctl(&dir)
        .args(["--format", "raw", "filter", "v8.infinite_scroll", "--dropped"])
        .write_stdin("v8_gc_scavenger\nframe_times\n\n")
        .assert()
        .success()
        .stdout(predicate::str::diff("frame_times\n"));
}

#[test]
fn test_unknown_benchmark_exit_code() {
    let dir = TempDir::new().unwrap();
    v8benchctl(&dir)
        .args(["show", "v8.nope"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Unknown Benchmark"));
}

#[test]
fn test_config_init_and_validate() {
    let dir = TempDir::new().unwrap();
    v8benchctl(&dir)
        .args(["--no-color", "config", "init"])
        .assert()
        .success();
    assert!(dir.path().join("config.toml").exists());

    v8benchctl(&dir)
        .args(["--no-color", "config", "init"])
        .assert()
        .code(4);

    v8benchctl(&dir)
        .args(["--no-color", "config", "validate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration is valid"));
}

#[test]
fn test_config_excludes_from_list() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("config.toml"),
        "[selection]\nexclude = [\"v8.google\"]\n",
    )
    .unwrap();

    v8benchctl(&dir)
        .args(["--format", "raw", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("v8.google").not());

    v8benchctl(&dir)
        .args(["--format", "raw", "list", "--all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("v8.google"));
}

#[test]
fn test_invalid_config_file() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("config.toml"), "[browser\n").unwrap();

    v8benchctl(&dir)
        .arg("list")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("not valid TOML"));
}

#[test]
fn test_config_init_force_repairs_broken_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[browser\n").unwrap();

    v8benchctl(&dir)
        .args(["--no-color", "config", "init", "--force"])
        .assert()
        .success();

    v8benchctl(&dir)
        .args(["--format", "raw", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("v8.google"));
}

#[test]
fn test_config_validate_other_file_ignores_broken_default() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("config.toml"), "[browser\n").unwrap();
    let other = dir.path().join("other.toml");
    std::fs::write(&other, "[browser]\nbrowser_type = \"canary\"\n").unwrap();

    v8benchctl(&dir)
        .args(["--no-color", "config", "validate", "--file"])
        .arg(&other)
        .assert()
        .success()
        .stdout(predicate::str::contains("other.toml"));
}

#[test]
fn test_config_validate_reports_config_flag_path() {
    let dir = TempDir::new().unwrap();
    let other = dir.path().join("other.toml");
    std::fs::write(&other, "[selection]\ninclude = [\"v8.todomvc\"]\n").unwrap();

    v8benchctl(&dir)
        .arg("--no-color")
        .arg("--config")
        .arg(&other)
        .args(["config", "validate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("other.toml"))
        .stdout(predicate::str::contains("config.toml").not());
}

#[test]
fn test_env_overrides_select_browser() {
    let dir = TempDir::new().unwrap();
    v8benchctl(&dir)
        .env("V8BENCH_BROWSER_TYPE", "reference")
        .env("V8BENCH_OS", "android")
        .env("V8BENCH_DEVICE", "Nexus 5X")
        .args(["--format", "raw", "list", "--enabled"])
        .assert()
        .success()
        .stdout(predicate::str::contains("v8.detached_context_age_in_gc"))
        .stdout(predicate::str::contains("v8.top_25_smooth").not());
}

#[test]
fn test_env_overrides_apply_on_top_of_file() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("config.toml"),
        "[browser]\nbrowser_type = \"release\"\nos_name = \"android\"\n",
    )
    .unwrap();

    v8benchctl(&dir)
        .env("V8BENCH_DEVICE", "Nexus 7")
        .args(["--no-color", "check", "v8.google"])
        .assert()
        .success()
        .stdout(predicate::str::contains("skipped"));

    v8benchctl(&dir)
        .env("V8BENCH_SVELTE", "true")
        .args(["--no-color", "check", "v8.google"])
        .assert()
        .success()
        .stdout(predicate::str::contains("svelte build"));
}

#[test]
fn test_env_output_format() {
    let dir = TempDir::new().unwrap();
    v8benchctl(&dir)
        .env("V8BENCH_OUTPUT_FORMAT", "raw")
        .args(["list", "--filter", "todomvc"])
        .assert()
        .success()
        .stdout(predicate::str::diff("v8.todomvc\nv8.todomvc-ignition\n"));
}

#[test]
fn test_invalid_env_values_rejected() {
    let dir = TempDir::new().unwrap();
    v8benchctl(&dir)
        .env("V8BENCH_SVELTE", "maybe")
        .arg("list")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("V8BENCH_SVELTE"));

    v8benchctl(&dir)
        .env("V8BENCH_OUTPUT_FORMAT", "xml")
        .arg("list")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Unknown output format"));
}
