use std::process::Command;

fn temp_path(label: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!(
        "ricebowl-cli-{label}-{}",
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos()
    ))
}

#[test]
fn cli_list_scenarios_writes_output() {
    let exe = env!("CARGO_BIN_EXE_ricebowl-tester");
    let output_path = temp_path("list");
    let status = Command::new(exe)
        .args(["scenarios", "--list-scenarios", "--output"])
        .arg(&output_path)
        .status()
        .expect("run cli");
    assert!(status.success());
    let content = std::fs::read_to_string(output_path).expect("read output");
    assert!(content.contains("Available scenarios"));
    assert!(content.contains("day-count"));
}

#[test]
fn cli_battle_prints_grouped_result() {
    let exe = env!("CARGO_BIN_EXE_ricebowl-tester");
    let output = Command::new(exe)
        .args([
            "battle",
            "--me",
            "2026-10-18",
            "--opponent",
            "2025-10-19",
            "--me-name",
            "A",
            "--opponent-name",
            "B",
            "--seed",
            "5",
            "--now",
            "2026-10-19T00:00:00",
        ])
        .env("NO_COLOR", "1")
        .output()
        .expect("run cli");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Rice Bowl Battle"));
    assert!(stdout.contains("1,095 그릇"));
    assert!(stdout.contains("1,092 그릇 차이가 나네요!"));
    assert!(stdout.contains("winner: B"));
}

#[test]
fn cli_battle_without_opponent_fails() {
    let exe = env!("CARGO_BIN_EXE_ricebowl-tester");
    let output = Command::new(exe)
        .args(["battle", "--me", "2000-01-01"])
        .output()
        .expect("run cli");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("cannot start the battle"));
}

#[test]
fn cli_runs_all_scenarios_with_json_report() {
    let exe = env!("CARGO_BIN_EXE_ricebowl-tester");
    let output_path = temp_path("json");
    let output = Command::new(exe)
        .args([
            "scenarios",
            "--scenarios",
            "all",
            "--iterations",
            "2",
            "--seeds",
            "1,2",
            "--report",
            "json",
            "--output",
        ])
        .arg(&output_path)
        .output()
        .expect("run cli");
    assert!(output.status.success());
    let content = std::fs::read_to_string(output_path).expect("read output");
    let parsed: serde_json::Value = serde_json::from_str(&content).expect("json report");
    let entries = parsed.as_array().expect("array");
    assert_eq!(entries.len(), 12);
    assert!(entries.iter().all(|e| e["passed"] == serde_json::Value::Bool(true)));
}
