//! Tests for `smei export`.

use crate::support::*;

#[test]
fn test_export_env_format() {
    let t = Test::with_store(STANDARD_STORE);

    let output = t.export(&["prod/db"]);
    assert_success(&output);
    assert_eq!(
        stdout(&output),
        "DB_HOST=db.internal\nDB_PASSWORD=\"s3cr3t pass\"\nDB_USER=app\n"
    );
}

#[test]
fn test_export_json() {
    let t = Test::with_store(STANDARD_STORE);

    let output = t.export_json(&["prod/db", "prod/stripe,STRIPE"]);
    assert_success(&output);

    let parsed: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(parsed["DB_HOST"], "db.internal");
    assert_eq!(parsed["STRIPE_API_KEY"], "sk_test_123");
    assert_eq!(parsed["STRIPE_WEBHOOK_SECRET"], "whsec_456");
    assert_eq!(parsed.as_object().unwrap().len(), 5);
}

#[test]
fn test_export_invalid_json_secret() {
    let t = Test::with_store(STANDARD_STORE);

    let output = t.export(&["prod/plain"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "is not valid JSON");
    assert!(stdout(&output).is_empty());
}

#[test]
fn test_export_reads_config_file() {
    let t = Test::with_store(STANDARD_STORE);
    t.write_config(
        r#"
region = "eu-west-1"

[[secrets]]
name = "prod/stripe"
prefix = "PAY"
"#,
    );

    let output = t.export(&["prod/db"]);
    assert_success(&output);
    assert_stdout_contains(&output, "PAY_API_KEY=sk_test_123\n");
    assert_stdout_contains(&output, "DB_USER=app\n");
}

#[test]
fn test_export_config_then_cli_order_reports_cli_duplicate() {
    let t = Test::with_store(STANDARD_STORE);
    t.write_config("[[secrets]]\nname = \"prod/db-copy\"\n");

    let output = t.export(&["prod/db"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "secret \"db_user\" is duplicated");
}

#[test]
fn test_export_without_mock_store_env_fails() {
    let t = Test::with_store(STANDARD_STORE);

    let output = t
        .cmd()
        .env_remove("SMEI_MOCK_STORE")
        .args(["export", "--secret", "prod/db"])
        .output()
        .unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "SMEI_MOCK_STORE is not set");
}

#[cfg(target_os = "linux")]
#[test]
fn test_export_fails_when_stdout_is_full() {
    let t = Test::with_store(STANDARD_STORE);
    let full = std::fs::OpenOptions::new()
        .write(true)
        .open("/dev/full")
        .unwrap();

    for json in [false, true] {
        let mut cmd = t.std_cmd();
        cmd.args(["export", "--secret", "prod/db"]);
        if json {
            cmd.arg("--json");
        }
        let output = cmd
            .stdout(full.try_clone().unwrap())
            .stderr(std::process::Stdio::piped())
            .output()
            .unwrap();

        assert_failure(&output);
        assert_stderr_contains(&output, "No space left on device");
    }
}
