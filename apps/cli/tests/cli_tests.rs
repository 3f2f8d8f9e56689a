//! maqueen-cli 端到端测试

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

fn cli() -> Command {
    Command::cargo_bin("maqueen-cli").unwrap()
}

#[test]
fn test_frame_run_prints_hex() {
    cli()
        .args(["frame", "run", "left", "ccw", "255"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0x10 0001ff"));
}

#[test]
fn test_frame_stop_all_prints_two_frames() {
    cli()
        .args(["frame", "stop", "all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0x10 000000"))
        .stdout(predicate::str::contains("0x10 020000"));
}

#[test]
fn test_frame_rejects_unknown_motor() {
    cli().args(["frame", "run", "middle", "cw", "10"]).assert().failure();
}

#[test]
fn test_range_reference_conversion() {
    cli()
        .args(["range", "--echo-us", "20000", "--temperature", "20"])
        .assert()
        .success()
        .stdout("343\n");
}

#[test]
fn test_range_microseconds() {
    cli()
        .args(["range", "--echo-us", "580", "--unit", "us"])
        .assert()
        .success()
        .stdout("580\n");
}

#[test]
fn test_simulate_press_b() {
    cli()
        .args(["simulate", "--ticks", "1", "--press", "b", "--echo-us", "580"])
        .assert()
        .success()
        .stdout(predicate::str::contains("frame: 0001c8"))
        .stdout(predicate::str::contains("frame: 0201c8"))
        .stdout(predicate::str::contains("tick 0: 9 cm"));
}

#[test]
fn test_simulate_without_echo_reports_timeout() {
    cli()
        .args(["simulate", "--ticks", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("tick 0: timeout"));
}

#[test]
fn test_simulate_with_config_file() {
    let path = std::env::temp_dir().join(format!("maqueen-cli-{}.toml", std::process::id()));
    fs::write(
        &path,
        "[pins]\ntrigger = 3\necho = 4\n\n[ranger]\ntimeout_us = 30000\n",
    )
    .unwrap();

    cli()
        .arg("--config")
        .arg(&path)
        .args(["simulate", "--ticks", "1", "--echo-us", "20000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("tick 0: 343 cm"));

    fs::remove_file(&path).ok();
}

#[test]
fn test_invalid_config_fails() {
    let path = std::env::temp_dir().join(format!("maqueen-cli-bad-{}.toml", std::process::id()));
    fs::write(&path, "[pins]\ntrigger = 1\necho = 1\n").unwrap();

    cli()
        .arg("--config")
        .arg(&path)
        .args(["simulate", "--ticks", "1"])
        .assert()
        .failure();

    fs::remove_file(&path).ok();
}
