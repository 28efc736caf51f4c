use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;
use std::path::Path;

mod common;
use common::{att, data_lines, path_str, read, temp_table};

#[test]
fn test_init_creates_table_without_touching_config_in_test_mode() {
    let (dir, table) = temp_table("cli_init");
    let t = path_str(&table);

    att(dir.path())
        .args(["--test", "--table", &t, "--schema", "daily", "init"])
        .assert()
        .success()
        .stdout(contains("Table created"));

    assert_eq!(
        read(&table).trim_end(),
        "Date,Day,Activity,LoginTime,LogoutTime"
    );
    assert!(!dir.path().join("attendlog.conf").exists());

    // Second run is a no-op.
    att(dir.path())
        .args(["--test", "--table", &t, "--schema", "daily", "init"])
        .assert()
        .success()
        .stdout(contains("already initialized"));
}

#[test]
fn test_init_writes_config_used_by_later_commands() {
    let (dir, table) = temp_table("cli_config");
    let t = path_str(&table);

    att(dir.path())
        .args(["--table", &t, "--schema", "daily", "init"])
        .assert()
        .success();

    let conf = read(&dir.path().join("attendlog.conf"));
    assert!(conf.contains("schema: daily"));
    assert!(conf.contains("cli_config.csv"));

    // No overrides: the configured table and schema are used.
    att(dir.path())
        .args(["login", "-a", "Study", "-d", "2024-01-01", "-t", "20:00"])
        .assert()
        .success();

    assert_eq!(
        data_lines(&table),
        vec!["2024-01-01,Monday,Study,20:00,".to_string()]
    );

    att(dir.path())
        .args(["config", "--print"])
        .assert()
        .success()
        .stdout(contains("schema: daily"));
}

#[test]
fn test_daily_login_logout_flow() {
    let (dir, table) = temp_table("cli_daily");
    let t = path_str(&table);
    let base = ["--test", "--table", &t, "--schema", "daily"];

    att(dir.path())
        .args(base)
        .args(["login", "-a", "Study", "-d", "2024-01-01", "-t", "20:00"])
        .assert()
        .success()
        .stdout(contains("Logged in").and(contains("1 open")));

    att(dir.path())
        .args(base)
        .args(["logout", "-d", "2024-01-01", "-t", "22:10"])
        .assert()
        .success()
        .stdout(contains("Logged out").and(contains("22:10")));

    assert_eq!(
        data_lines(&table),
        vec!["2024-01-01,Monday,Study,20:00,22:10".to_string()]
    );
}

#[test]
fn test_logout_without_login_warns_with_exit_code_2() {
    let (dir, table) = temp_table("cli_no_session");
    let t = path_str(&table);

    att(dir.path())
        .args(["--test", "--table", &t, "--schema", "daily"])
        .args(["logout", "-d", "2024-01-01", "-t", "09:00"])
        .assert()
        .code(2)
        .stdout(contains("please login first"));

    assert!(data_lines(&table).is_empty());
}

#[test]
fn test_duplicate_activity_login_is_informational() {
    let (dir, table) = temp_table("cli_duplicate");
    let t = path_str(&table);
    let base = ["--test", "--table", &t, "--schema", "activity"];

    att(dir.path())
        .args(base)
        .args(["login", "-a", "Fitness Session", "-d", "2024-02-02", "-t", "07:00"])
        .assert()
        .success();

    att(dir.path())
        .args(base)
        .args(["login", "-a", "Fitness Session", "-d", "2024-02-02", "-t", "07:05"])
        .assert()
        .success()
        .stdout(contains("Already logged in"));

    assert_eq!(data_lines(&table).len(), 1);

    // Policy override from the command line lets the second login through.
    att(dir.path())
        .args(base)
        .args(["--allow-duplicates", "true"])
        .args(["login", "-a", "Fitness Session", "-d", "2024-02-02", "-t", "07:10"])
        .assert()
        .success();

    assert_eq!(data_lines(&table).len(), 2);
}

#[test]
fn test_missing_activity_is_a_validation_warning() {
    let (dir, table) = temp_table("cli_validation");
    let t = path_str(&table);

    att(dir.path())
        .args(["--test", "--table", &t, "--schema", "daily", "login"])
        .assert()
        .code(2)
        .stdout(contains("activity is required"));
}

#[test]
fn test_remark_flow() {
    let (dir, table) = temp_table("cli_remark");
    let t = path_str(&table);
    let base = ["--test", "--table", &t, "--schema", "activity"];

    att(dir.path())
        .args(base)
        .args(["login", "-a", "Reading", "-d", "2024-02-02", "-t", "21:00"])
        .assert()
        .success();

    // No text: silently aborted.
    att(dir.path())
        .args(base)
        .args(["remark", "-d", "2024-02-02", "-a", "Reading"])
        .assert()
        .success()
        .stdout(contains("nothing to do"));

    att(dir.path())
        .args(base)
        .args(["remark", "-d", "2024-02-02", "-a", "Reading", "two chapters"])
        .assert()
        .success()
        .stdout(contains("Remark saved"));

    assert_eq!(
        data_lines(&table),
        vec!["2024-02-02,Friday,Reading,21:00,,two chapters".to_string()]
    );

    att(dir.path())
        .args(base)
        .args(["remark", "-d", "2024-02-09", "-a", "Reading", "x"])
        .assert()
        .code(2)
        .stdout(contains("No record found"));
}

#[test]
fn test_list_filters_and_json() {
    let (dir, table) = temp_table("cli_list");
    let t = path_str(&table);
    let base = ["--test", "--table", &t, "--schema", "daily"];

    for (date, time) in [("2024-01-01", "08:00"), ("2024-01-02", "08:30"), ("2024-02-01", "09:00")] {
        att(dir.path())
            .args(base)
            .args(["login", "-a", "Study", "-d", date, "-t", time])
            .assert()
            .success();
    }
    att(dir.path())
        .args(base)
        .args(["logout", "-d", "2024-01-01", "-t", "10:00"])
        .assert()
        .success();

    att(dir.path())
        .args(base)
        .args(["list", "--open"])
        .assert()
        .success()
        .stdout(contains("2024-01-02").and(contains("2024-01-01").not()));

    att(dir.path())
        .args(base)
        .args(["list", "--period", "2024-01"])
        .assert()
        .success()
        .stdout(contains("2024-01-01").and(contains("2024-02-01").not()));

    let out = att(dir.path())
        .args(base)
        .args(["list", "--date", "2024-01-01", "--json"])
        .output()
        .expect("run list --json");
    assert!(out.status.success());

    let json: serde_json::Value = serde_json::from_slice(&out.stdout).expect("valid json");
    let rows = json.as_array().expect("array");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["logout_time"], "10:00");
}

#[test]
fn test_schema_mismatch_is_fatal() {
    let (dir, table) = temp_table("cli_mismatch");
    let t = path_str(&table);

    att(dir.path())
        .args(["--test", "--table", &t, "--schema", "daily", "init"])
        .assert()
        .success();

    att(dir.path())
        .args(["--test", "--table", &t, "--schema", "activity", "list"])
        .assert()
        .code(1)
        .stderr(contains("does not match"));
}

#[test]
fn test_export_csv_and_json() {
    let (dir, table) = temp_table("cli_export");
    let t = path_str(&table);
    let base = ["--test", "--table", &t, "--schema", "activity"];

    att(dir.path())
        .args(base)
        .args(["login", "-a", "Study", "-d", "2024-02-02", "-t", "08:00"])
        .assert()
        .success();

    let csv_out = path_str(&dir.path().join("out.csv"));
    att(dir.path())
        .args(base)
        .args(["export", "--format", "csv", "--file", &csv_out, "--force"])
        .assert()
        .success()
        .stdout(contains("CSV export completed"));
    assert_eq!(read(Path::new(&csv_out)), read(&table));

    let json_out = path_str(&dir.path().join("out.json"));
    att(dir.path())
        .args(base)
        .args(["export", "--format", "json", "--file", &json_out, "--range", "2024"])
        .assert()
        .success();
    let content = fs::read_to_string(&json_out).expect("read exported json");
    assert!(content.contains("\"activity\": \"Study\""));
}

#[test]
fn test_declined_overwrite_keeps_existing_export() {
    let (dir, table) = temp_table("cli_export_keep");
    let t = path_str(&table);
    let base = ["--test", "--table", &t, "--schema", "daily"];

    att(dir.path())
        .args(base)
        .args(["login", "-a", "Study", "-d", "2024-01-01", "-t", "08:00"])
        .assert()
        .success();

    let out = dir.path().join("keep.csv");
    fs::write(&out, "previous export\n").expect("seed export file");
    let o = path_str(&out);

    att(dir.path())
        .args(base)
        .args(["export", "--file", &o])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("Export cancelled").and(contains("nothing to do")));
    assert_eq!(read(&out), "previous export\n");

    att(dir.path())
        .args(base)
        .args(["export", "--file", &o])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(contains("CSV export completed"));
    assert_eq!(read(&out), read(&table));
}

#[test]
fn test_log_print_shows_operations() {
    let (dir, table) = temp_table("cli_log");
    let t = path_str(&table);
    let base = ["--test", "--table", &t, "--schema", "daily"];

    att(dir.path())
        .args(base)
        .args(["login", "-a", "Study", "-d", "2024-01-01", "-t", "08:00"])
        .assert()
        .success();

    att(dir.path())
        .args(base)
        .args(["log", "--print"])
        .assert()
        .success()
        .stdout(contains("login").and(contains("Logged in at 08:00")));
}

#[test]
fn test_activities_lists_fixed_entries() {
    let (dir, _table) = temp_table("cli_activities");

    att(dir.path())
        .args(["activities"])
        .assert()
        .success()
        .stdout(contains("Fitness Session").and(contains("13. ")));
}
