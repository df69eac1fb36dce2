//! Basic CLI E2E tests.
//!
//! Tests invoke the built binary with an isolated config directory and
//! verify outputs.

use std::process::Command;

/// Run a CLI command against `config_dir` and return (stdout, stderr, exit code).
fn run_cli_in(config_dir: &std::path::Path, args: &[&str]) -> (String, String, i32) {
    let output = Command::new(env!("CARGO_BIN_EXE_sprouthub-cli"))
        .args(args)
        .env("SPROUTHUB_CONFIG_DIR", config_dir)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

fn run_cli(args: &[&str]) -> (String, String, i32) {
    let dir = tempfile::tempdir().unwrap();
    run_cli_in(dir.path(), args)
}

const SUCCULENT: &[&str] = &[
    "schedule",
    "calculate",
    "--base-days",
    "14",
    "--plant-size",
    "large",
    "--light-level",
    "low",
    "--temperature",
    "cool",
    "--humidity",
    "normal",
    "--season",
    "winter",
    "--care-style",
    "minimal",
    "--soil-type",
    "retaining",
];

#[test]
fn test_schedule_calculate_text() {
    let (stdout, _, code) = run_cli(SUCCULENT);
    assert_eq!(code, 0, "Schedule calculate failed");
    assert!(stdout.contains("water every 20 days"));
    assert!(stdout.contains("Confidence: low"));
    assert!(stdout.contains("Winter dormancy significantly reduces water needs"));
}

#[test]
fn test_schedule_calculate_json() {
    let mut args = SUCCULENT.to_vec();
    args.push("--json");
    let (stdout, _, code) = run_cli(&args);
    assert_eq!(code, 0, "Schedule calculate JSON failed");

    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["recommendedDays"], 20);
    assert_eq!(parsed["baseDays"], 14);
    assert_eq!(parsed["totalAdjustment"], 6);
    assert_eq!(parsed["confidence"], "low");
    assert_eq!(parsed["adjustmentReasons"].as_array().unwrap().len(), 6);
}

#[test]
fn test_schedule_calculate_defaults_season() {
    let (stdout, _, code) = run_cli(&[
        "schedule",
        "calculate",
        "--plant-size",
        "medium",
        "--light-level",
        "medium",
        "--temperature",
        "normal",
        "--humidity",
        "normal",
        "--care-style",
        "balanced",
        "--soil-type",
        "regular",
    ]);
    assert_eq!(code, 0, "Schedule calculate without season failed");
    assert!(stdout.contains("(from today's date)"));
}

#[test]
fn test_schedule_calculate_rejects_unknown_value() {
    let mut args = SUCCULENT.to_vec();
    let idx = args.iter().position(|a| *a == "winter").unwrap();
    args[idx] = "autumn";
    let (_, stderr, code) = run_cli(&args);
    assert_ne!(code, 0);
    assert!(stderr.contains("autumn"));
}

#[test]
fn test_schedule_calculate_rejects_zero_base() {
    let mut args = SUCCULENT.to_vec();
    args[3] = "0";
    let (_, stderr, code) = run_cli(&args);
    assert_eq!(code, 1);
    assert!(stderr.contains("base_days"));
}

#[test]
fn test_strict_base_policy_from_config() {
    let dir = tempfile::tempdir().unwrap();
    let (_, _, code) = run_cli_in(
        dir.path(),
        &["config", "set", "watering.base_interval_policy", "reject"],
    );
    assert_eq!(code, 0, "Config set failed");

    let mut args = SUCCULENT.to_vec();
    args[3] = "60";
    let (_, stderr, code) = run_cli_in(dir.path(), &args);
    assert_eq!(code, 1);
    assert!(stderr.contains("outside the allowed range"));
}

#[test]
fn test_schedule_next() {
    let (stdout, _, code) = run_cli(&[
        "schedule",
        "next",
        "--last-watered",
        "2024-06-01",
        "--interval",
        "7",
        "--today",
        "2024-06-10",
        "--json",
    ]);
    assert_eq!(code, 0, "Schedule next failed");
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["nextWateringDate"], "2024-06-08");
    assert_eq!(parsed["daysUntil"], -2);
    assert_eq!(parsed["status"], "overdue");
    assert_eq!(parsed["needsWater"], true);
}

#[test]
fn test_schedule_next_upcoming_text() {
    let (stdout, _, code) = run_cli(&[
        "schedule",
        "next",
        "--last-watered",
        "2024-06-01",
        "--interval",
        "7",
        "--today",
        "2024-06-05",
    ]);
    assert_eq!(code, 0, "Schedule next failed");
    assert!(stdout.contains("Next watering: 2024-06-08"));
    assert!(stdout.contains("Status: due in 3 days"));
    assert!(!stdout.contains("Water now"));
}

#[test]
fn test_season_current() {
    let (stdout, _, code) = run_cli(&["season", "current", "--date", "2024-01-15"]);
    assert_eq!(code, 0, "Season current failed");
    assert_eq!(stdout.trim(), "winter");

    let (stdout, _, _) = run_cli(&["season", "current", "--date", "2024-06-01"]);
    assert_eq!(stdout.trim(), "summer");
}

#[test]
fn test_factors_list_json() {
    let (stdout, _, code) = run_cli(&["factors", "list", "--json"]);
    assert_eq!(code, 0, "Factors list failed");
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let factors = parsed.as_array().unwrap();
    assert_eq!(factors.len(), 7);
    assert_eq!(factors[0]["key"], "plant_size");
    assert_eq!(factors[0]["options"][0]["label"], "Small (up to 6\")");
}

#[test]
fn test_config_get_set_list() {
    let dir = tempfile::tempdir().unwrap();

    let (stdout, _, code) = run_cli_in(dir.path(), &["config", "get", "watering.max_days"]);
    assert_eq!(code, 0, "Config get failed");
    assert_eq!(stdout.trim(), "45");

    let (_, _, code) = run_cli_in(dir.path(), &["config", "set", "watering.max_days", "30"]);
    assert_eq!(code, 0, "Config set failed");

    let (stdout, _, code) = run_cli_in(dir.path(), &["config", "list"]);
    assert_eq!(code, 0, "Config list failed");
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["watering"]["max_days"], 30);
    assert!(dir.path().join("config.toml").exists());
}

#[test]
fn test_config_rejects_unknown_key() {
    let (_, stderr, code) = run_cli(&["config", "set", "watering.nope", "1"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("watering.nope"));
}

#[test]
fn test_completions() {
    let (stdout, _, code) = run_cli(&["completions", "bash"]);
    assert_eq!(code, 0, "Completions failed");
    assert!(stdout.contains("sprouthub-cli"));
}
