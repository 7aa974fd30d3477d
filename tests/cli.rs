use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;

fn sample_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("samples")
        .join(name)
}

fn notes_file(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".notes")
        .tempfile()
        .expect("temp file");
    file.write_all(contents.as_bytes()).expect("write notes");
    file
}

#[test]
fn outline_is_the_default_format() {
    let mut cmd = cargo_bin_cmd!("tinker");
    cmd.arg(sample_path("contextual-01-basic.notes"));

    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with("n  a note before any header\n\n[work]\n"));
}

#[test]
fn flat_flag_rejects_headers() {
    let mut cmd = cargo_bin_cmd!("tinker");
    cmd.arg("--flat").arg(sample_path("contextual-01-basic.notes"));

    cmd.assert().failure().code(1).stderr(
        predicate::str::contains("line 3").and(predicate::str::contains("flat format")),
    );
}

#[test]
fn flatten_and_json() {
    let file = notes_file("[work]\nn  task\n");
    let mut cmd = cargo_bin_cmd!("tinker");
    cmd.arg(file.path()).arg("--flatten").arg("--format").arg("json");

    cmd.assert().success().stdout(
        predicate::str::contains("\"value\": \".\"").and(predicate::str::contains("\"task\"")),
    );
}

#[test]
fn parse_errors_exit_with_code_one() {
    let file = notes_file("n  ok\n   m  bad\n");
    let mut cmd = cargo_bin_cmd!("tinker");
    cmd.arg(file.path());

    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("line 2: notes must be indented"));
}

#[test]
fn missing_file() {
    let mut cmd = cargo_bin_cmd!("tinker");
    cmd.arg("/nonexistent/file.notes");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("cannot open"));
}

#[test]
fn unknown_format_lists_available_ones() {
    let mut cmd = cargo_bin_cmd!("tinker");
    cmd.arg(sample_path("flat-01-basic.notes")).arg("-f").arg("docx");

    cmd.assert()
        .failure()
        .stderr(
            predicate::str::contains("unknown format 'docx'")
                .and(predicate::str::contains("treeviz")),
        );
}

#[test]
fn reads_stdin() {
    let mut cmd = cargo_bin_cmd!("tinker");
    cmd.arg("-").arg("--flat").write_stdin("n  root\n\tm  child\n");

    cmd.assert().success().stdout("n  root\n    m  child\n");
}

#[test]
fn config_file_sets_defaults() {
    let mut config = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .expect("temp file");
    writeln!(config, "[output]\nformat = \"treeviz\"\n[treeviz]\nshow_keys = true")
        .expect("write config");

    let mut cmd = cargo_bin_cmd!("tinker");
    cmd.arg(sample_path("flat-02-keys.notes"))
        .arg("--flat")
        .arg("--config")
        .arg(config.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with("⧉ Document (flat, 2 notes)").and(
            predicate::str::contains("(00001:00002)"),
        ));
}

#[test]
fn list_formats() {
    let mut cmd = cargo_bin_cmd!("tinker");
    cmd.arg("--list-formats");

    cmd.assert().success().stdout(
        predicate::str::contains("outline")
            .and(predicate::str::contains("json"))
            .and(predicate::str::contains("yaml"))
            .and(predicate::str::contains("treeviz")),
    );
}
