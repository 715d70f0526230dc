// Integration tests for the `joinprobe` binary.
// Run with: cargo test -p joinprobe-cli --test probe_tests -- --nocapture

use std::path::Path;
use std::process::{Command, Output};

const IMDB: &str = "\
title,director,genre,year
Heat,Michael Mann,\"Action,Crime,Drama\",1995
Ronin,John Frankenheimer,\"Action,Crime,Thriller\",1998
Alien,Ridley Scott,\"Horror,Sci-Fi\",1979
";

const OMDB: &str = "\
Title,Director,Genre,Year
Heat,Michael Mann,\"Action,Crime,Drama\",1995
Ronin,John Frankenheimer,\"Action,Crime,Thriller\",1998
Rush Hour,Brett Ratner,\"Action,Comedy\",1998
";

fn joinprobe(dir: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_joinprobe"));
    cmd.current_dir(dir);
    cmd.env("RUST_LOG", "warn");
    cmd.env_remove("JOINPROBE_DIR");
    cmd
}

fn write_inputs(dir: &Path) {
    std::fs::write(dir.join("imdb.csv"), IMDB).unwrap();
    std::fs::write(dir.join("omdb.csv"), OMDB).unwrap();
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

// ---------------------------------------------------------------------------
// Default run: current directory, fixed file names
// ---------------------------------------------------------------------------

#[test]
fn default_run_prints_ranking_and_row_counts() {
    let dir = tempfile::tempdir().unwrap();
    write_inputs(dir.path());

    let output = joinprobe(dir.path()).output().expect("run joinprobe");
    assert!(output.status.success(), "exit code was {:?}", output.status);

    let text = stdout(&output);
    assert!(text.contains("Potential join columns ranked by M-to-N score:"), "{text}");
    assert!(text.contains("Number of rows in IMDB dataset: 3"), "{text}");
    assert!(text.contains("Number of rows in OMDB dataset: 3"), "{text}");

    // title, director, genre, year have counts files; cast and writer are absent
    for column in ["title", "director", "genre", "year"] {
        assert!(dir.path().join(format!("{column}_counts.csv")).exists(), "{column}");
    }
    assert!(!dir.path().join("cast_counts.csv").exists());
    assert!(!dir.path().join("writer_counts.csv").exists());
    assert!(!text.contains("cast:"));
}

#[test]
fn counts_file_has_expected_header() {
    let dir = tempfile::tempdir().unwrap();
    write_inputs(dir.path());

    let output = joinprobe(dir.path()).output().unwrap();
    assert!(output.status.success());

    let content = std::fs::read_to_string(dir.path().join("genre_counts.csv")).unwrap();
    let mut lines = content.lines();
    assert_eq!(lines.next(), Some("Genre,IMDB Count,OMDB Count"));
    // Action, Comedy, Crime, Drama, Horror, Sci-Fi, Thriller
    assert_eq!(lines.count(), 7);
}

// ---------------------------------------------------------------------------
// --json / --output
// ---------------------------------------------------------------------------

#[test]
fn json_report_goes_to_stdout() {
    let dir = tempfile::tempdir().unwrap();
    write_inputs(dir.path());

    let output = joinprobe(dir.path()).arg("--json").output().unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_str(&stdout(&output)).expect("valid JSON");
    assert_eq!(report["meta"]["left"]["rows"], 3);
    assert_eq!(report["columns"].as_array().unwrap().len(), 6);

    let ranked = report["ranked"].as_array().unwrap();
    let scores: Vec<f64> = ranked.iter().map(|c| c["score"].as_f64().unwrap()).collect();
    assert!(scores.windows(2).all(|w| w[0] >= w[1]), "{scores:?}");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Number of rows in OMDB dataset: 3"));
}

#[test]
fn output_flag_writes_json_file() {
    let dir = tempfile::tempdir().unwrap();
    write_inputs(dir.path());
    let out_path = dir.path().join("report.json");

    let output = joinprobe(dir.path())
        .args(["--output", out_path.to_str().unwrap()])
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&out_path).unwrap()).unwrap();
    assert!(report["ranked"].is_array());
}

// ---------------------------------------------------------------------------
// --dir, --left/--right, --config
// ---------------------------------------------------------------------------

#[test]
fn dir_and_file_overrides() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("a.csv"), IMDB).unwrap();
    std::fs::write(dir.path().join("b.csv"), OMDB).unwrap();
    let elsewhere = tempfile::tempdir().unwrap();

    let output = joinprobe(elsewhere.path())
        .args(["--dir", dir.path().to_str().unwrap(), "--left", "a.csv", "--right", "b.csv"])
        .output()
        .unwrap();
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    assert!(dir.path().join("year_counts.csv").exists());
}

#[test]
fn config_file_selects_columns_and_labels() {
    let dir = tempfile::tempdir().unwrap();
    write_inputs(dir.path());
    std::fs::write(
        dir.path().join("probe.toml"),
        r#"
columns = ["genre"]

[left]
label = "Catalog"
file = "imdb.csv"

[right]
label = "Feed"
file = "omdb.csv"
"#,
    )
    .unwrap();

    let output = joinprobe(dir.path()).args(["--config", "probe.toml"]).output().unwrap();
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let text = stdout(&output);
    assert!(text.contains("genre: Catalog unique: 6, Feed unique: 5"), "{text}");
    assert!(!dir.path().join("title_counts.csv").exists());

    let content = std::fs::read_to_string(dir.path().join("genre_counts.csv")).unwrap();
    assert!(content.starts_with("Genre,Catalog Count,Feed Count\n"));
}

// ---------------------------------------------------------------------------
// Failures
// ---------------------------------------------------------------------------

#[test]
fn unparseable_input_exits_with_input_code() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("imdb.csv"), "").unwrap();
    std::fs::write(dir.path().join("omdb.csv"), OMDB).unwrap();

    let output = joinprobe(dir.path()).output().unwrap();
    assert_eq!(output.status.code(), Some(4));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("any of the attempted encodings"), "{stderr}");
}

#[test]
fn missing_input_exits_with_input_code() {
    let dir = tempfile::tempdir().unwrap();
    let output = joinprobe(dir.path()).output().unwrap();
    assert_eq!(output.status.code(), Some(4));
}

#[test]
fn invalid_config_exits_with_config_code() {
    let dir = tempfile::tempdir().unwrap();
    write_inputs(dir.path());
    std::fs::write(dir.path().join("bad.toml"), "columns = []\n").unwrap();

    let output = joinprobe(dir.path()).args(["--config", "bad.toml"]).output().unwrap();
    assert_eq!(output.status.code(), Some(3));
}

#[test]
fn dir_that_is_not_a_directory_is_usage_error() {
    let dir = tempfile::tempdir().unwrap();
    let output = joinprobe(dir.path())
        .args(["--dir", "no/such/place"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn dropped_rows_do_not_fail_the_run() {
    let dir = tempfile::tempdir().unwrap();
    let ragged = format!("{IMDB}Thief,Michael Mann,Crime,1981,extra\n");
    std::fs::write(dir.path().join("imdb.csv"), ragged).unwrap();
    std::fs::write(dir.path().join("omdb.csv"), OMDB).unwrap();

    let output = joinprobe(dir.path()).arg("--json").output().unwrap();
    assert_eq!(output.status.code(), Some(0));

    let report: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(report["meta"]["left"]["rows"], 3);
    assert_eq!(report["meta"]["left"]["skipped_rows"], 1);

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!stderr.contains("error:"), "{stderr}");
    assert!(stderr.contains("Number of rows in IMDB dataset: 3"), "{stderr}");
}

#[test]
fn long_version_names_commit_and_target() {
    let dir = tempfile::tempdir().unwrap();
    let output = joinprobe(dir.path()).arg("--version").output().unwrap();
    assert!(output.status.success());

    let text = stdout(&output);
    assert!(text.contains(env!("CARGO_PKG_VERSION")), "{text}");
    assert!(text.contains("target:"), "{text}");
}
