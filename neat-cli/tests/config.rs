use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn respects_width_from_config() {
    let dir = tempdir().unwrap();
    let input_path = dir.path().join("doc.txt");
    fs::write(&input_path, "aa bb cc dd ee\n").unwrap();

    let config_path = dir.path().join("neat.toml");
    fs::write(
        &config_path,
        r#"[formatting.rules]
max_line_len = 8
"#,
    )
    .unwrap();

    let mut cmd = cargo_bin_cmd!("neat");
    cmd.arg(input_path.as_os_str())
        .arg("--config")
        .arg(config_path.as_os_str());

    let output = cmd.assert().success().get_output().stdout.clone();
    let stdout = String::from_utf8(output).unwrap();
    assert!(stdout.contains("aa bb cc\ndd ee"));
}

#[test]
fn width_flag_beats_config() {
    let dir = tempdir().unwrap();
    let input_path = dir.path().join("doc.txt");
    fs::write(&input_path, "aa bb cc dd\n").unwrap();

    let config_path = dir.path().join("neat.toml");
    fs::write(&config_path, "[formatting.rules]\nmax_line_len = 8\n").unwrap();

    let mut cmd = cargo_bin_cmd!("neat");
    cmd.arg(input_path.as_os_str())
        .arg("--config")
        .arg(config_path.as_os_str())
        .arg("-w")
        .arg("72");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("aa bb cc dd"));
}

#[test]
fn comment_prefix_from_config() {
    let dir = tempdir().unwrap();
    let input_path = dir.path().join("comment.txt");
    fs::write(&input_path, "// one two\n// three\n").unwrap();

    let config_path = dir.path().join("neat.toml");
    fs::write(&config_path, "[comment]\nprefix = \"// \"\n").unwrap();

    let mut cmd = cargo_bin_cmd!("neat");
    cmd.arg(input_path.as_os_str())
        .arg("--comment")
        .arg("--config")
        .arg(config_path.as_os_str());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("// one two three"));
}

#[test]
fn reports_missing_config_file() {
    let mut cmd = cargo_bin_cmd!("neat");
    cmd.arg("--config").arg("no-such-config.toml").write_stdin("x\n");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load configuration"));
}
