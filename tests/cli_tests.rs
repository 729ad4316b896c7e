mod common;
use common::{pa, pa_bare};
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

#[test]
fn test_users_table() {
    let home = tempfile::tempdir().unwrap();

    pa(home.path())
        .arg("users")
        .assert()
        .success()
        .stdout(contains("User 10"))
        .stdout(contains("User 12"))
        .stdout(contains("https://intranet.example.com/api/images/users/11"));
}

#[test]
fn test_stats_table_formats_times() {
    let home = tempfile::tempdir().unwrap();

    pa(home.path())
        .args(["stats", "presence_start_end", "10"])
        .assert()
        .success()
        .stdout(contains("Tue"))
        .stdout(contains("09:39:05"))
        .stdout(contains("17:59:52"));
}

#[test]
fn test_stats_json_is_endpoint_payload() {
    let home = tempfile::tempdir().unwrap();

    pa(home.path())
        .args(["stats", "monthly_presence", "10", "--json"])
        .assert()
        .success()
        .stdout(contains(r#"[["Month","Presence (s)"],["2013.09",78217]]"#));
}

#[test]
fn test_stats_for_user_without_data() {
    let home = tempfile::tempdir().unwrap();

    pa(home.path())
        .args(["stats", "mean_time_weekday", "12", "--json"])
        .assert()
        .success()
        .stdout(predicates::str::diff("0\n"));

    pa(home.path())
        .args(["stats", "mean_time_weekday", "12"])
        .assert()
        .success()
        .stdout(contains("No data for user 12."));
}

#[test]
fn test_unknown_kind_is_rejected() {
    let home = tempfile::tempdir().unwrap();

    pa(home.path())
        .args(["stats", "hourly", "10"])
        .assert()
        .failure();
}

#[test]
fn test_chart_renders_placeholder_and_table() {
    let home = tempfile::tempdir().unwrap();

    pa(home.path())
        .args(["chart", "presence_weekday", "12"])
        .assert()
        .success()
        .stdout(contains("No data for this user."));

    pa(home.path())
        .args(["chart", "mean_time_weekday", "10"])
        .assert()
        .success()
        .stdout(contains("\"chart_type\": \"ColumnChart\""))
        .stdout(contains("Date(1901, 1, 1, 8, 20, 47)"))
        .stdout(contains("No data for this user.").not());
}

#[test]
fn test_interval_command() {
    let home = tempfile::tempdir().unwrap();

    pa_bare(home.path())
        .args(["interval", "28800"])
        .assert()
        .success()
        .stdout(predicates::str::diff("08:00:00\n"));

    pa_bare(home.path())
        .args(["interval", "90000"])
        .assert()
        .success()
        .stdout(contains("01:00:00 (+1 day)"));
}

#[test]
fn test_export_csv_and_json() {
    let home = tempfile::tempdir().unwrap();
    let csv_out = home.path().join("weekday.csv");
    let json_out = home.path().join("weekday.json");

    pa(home.path())
        .args([
            "export",
            "--kind",
            "presence_weekday",
            "--user",
            "11",
            "--format",
            "csv",
            "--file",
            csv_out.to_str().unwrap(),
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&csv_out).expect("read exported csv");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines[0], "Weekday,Presence (s)");
    assert_eq!(lines[1], "Mon,24123");
    assert_eq!(lines.len(), 8);

    pa(home.path())
        .args([
            "export",
            "--kind",
            "presence_weekday",
            "--user",
            "11",
            "--format",
            "json",
            "--file",
            json_out.to_str().unwrap(),
        ])
        .assert()
        .success();

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&json_out).unwrap()).unwrap();
    assert_eq!(json[0], serde_json::json!(["Weekday", "Presence (s)"]));
    assert_eq!(json[4], serde_json::json!(["Thu", 45968]));
}

#[test]
fn test_export_refuses_overwrite_without_force() {
    let home = tempfile::tempdir().unwrap();
    let out = home.path().join("existing.csv");
    fs::write(&out, "keep me").unwrap();

    pa(home.path())
        .args([
            "export", "--kind", "monthly_presence", "--user", "10", "--file",
            out.to_str().unwrap(),
        ])
        .write_stdin("n\n")
        .assert()
        .failure()
        .stderr(contains("export cancelled"));
    assert_eq!(fs::read_to_string(&out).unwrap(), "keep me");

    pa(home.path())
        .args([
            "export", "--kind", "monthly_presence", "--user", "10", "--file",
            out.to_str().unwrap(), "--force",
        ])
        .assert()
        .success();
    assert!(fs::read_to_string(&out).unwrap().contains("2013.09,78217"));
}

#[test]
fn test_init_writes_config_once() {
    let home = tempfile::tempdir().unwrap();
    let conf = home
        .path()
        .join(".presence-analyzer")
        .join("presence-analyzer.conf");

    pa_bare(home.path())
        .arg("init")
        .assert()
        .success()
        .stdout(contains("Config file"));
    assert!(conf.exists());

    fs::write(&conf, "port: 8081\n").unwrap();
    pa_bare(home.path())
        .arg("init")
        .assert()
        .success()
        .stdout(contains("already present"));
    assert_eq!(fs::read_to_string(&conf).unwrap(), "port: 8081\n");
}

#[test]
fn test_config_print_and_check() {
    let home = tempfile::tempdir().unwrap();
    let dir = home.path().join(".presence-analyzer");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("presence-analyzer.conf"), "port: 8081\ndatabase: x\n").unwrap();

    pa_bare(home.path())
        .args(["config", "--print"])
        .assert()
        .success()
        .stdout(contains("port: 8081"))
        .stdout(contains("cache_ttl_secs: 600"));

    pa_bare(home.path())
        .args(["config", "--check"])
        .assert()
        .success()
        .stdout(contains("Missing key 'data_csv'"))
        .stdout(contains("Unknown key 'database'"));
}

#[test]
fn test_missing_data_file_fails() {
    let home = tempfile::tempdir().unwrap();

    pa_bare(home.path())
        .args(["--csv", "/nonexistent/presence.csv", "stats", "presence_weekday", "10"])
        .assert()
        .failure()
        .stderr(contains("Error"));
}
