//! Tests for argument handling and errors raised before any secret is fetched.

use crate::support::*;

#[test]
fn test_help_lists_commands() {
    let t = Test::new();

    let output = t.cmd().arg("--help").output().unwrap();
    assert_success(&output);
    let out = stdout(&output);
    assert!(out.contains("run"));
    assert!(out.contains("export"));
    assert!(out.contains("check"));
}

#[test]
fn test_version_flag() {
    let t = Test::new();

    let output = t.cmd().arg("--version").output().unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "smei");
}

#[test]
fn test_unknown_command_fails() {
    let t = Test::new();

    let output = t.cmd().arg("unknown-command").output().unwrap();
    assert_failure(&output);
}

#[test]
fn test_no_secrets_configured() {
    let t = Test::new();

    let output = t.check(&[]);
    assert_failure(&output);
    assert_stderr_contains(&output, "no secrets configured");
    assert_stderr_contains(&output, "--secret NAME");
}

#[test]
fn test_missing_explicit_config() {
    let t = Test::new();

    let output = t
        .cmd()
        .args(["--config", "missing.toml", "check"])
        .output()
        .unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "config file not found");
}

#[test]
fn test_malformed_config() {
    let t = Test::new();
    t.write_config("region = [\n");

    let output = t.check(&[]);
    assert_failure(&output);
    assert_stderr_contains(&output, "failed to parse config");
}

#[test]
fn test_invalid_prefix_rejected_by_parser() {
    let t = Test::new();

    let output = t.check(&["prod/app,BAD-PREFIX"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "invalid prefix");
}

#[test]
fn test_empty_secret_name_rejected() {
    let t = Test::new();

    let output = t.check(&[",APP"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "secret name cannot be empty");
}

#[test]
fn test_run_without_command_fails() {
    let t = Test::new();

    let output = t.cmd().args(["run", "--secret", "prod/app"]).output().unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "no command specified");
}

#[test]
fn test_completions_bash_outputs_script() {
    let t = Test::new();

    let output = t.cmd().args(["completions", "bash"]).output().unwrap();
    assert_success(&output);
    let out = stdout(&output);
    assert!(out.contains("_smei") || out.contains("complete"));
}

#[test]
fn test_completions_invalid_shell_fails() {
    let t = Test::new();

    let output = t.cmd().args(["completions", "tcsh"]).output().unwrap();
    assert_failure(&output);
}
