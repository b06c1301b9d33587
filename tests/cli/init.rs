use anyhow::{Context, Result};
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::{CliTest, stderr_of, stdout_of};

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("init").output()?;
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "\u{2713} Created .gosiftrc.json\n");
    assert!(test.root().join(".gosiftrc.json").exists());

    let content = test.read_file(".gosiftrc.json")?;
    let parsed: Value = serde_json::from_str(&content).context("Config should be valid JSON")?;
    assert_eq!(parsed["skipFiles"], serde_json::json!(["bindata.go"]));
    assert_eq!(parsed["sourceRoot"], ".");
    assert!(content.contains("\n  \""), "Config should use 2-space indentation");

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::with_file(".gosiftrc.json", "{}")?;

    let output = test.command().arg("init").output()?;
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stderr_of(&output), "error: .gosiftrc.json already exists\n");
    assert_eq!(test.read_file(".gosiftrc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;
    test.command().arg("init").output()?;
    test.write_file("main.go", "// $ make assets\npackage main\n")?;

    let output = test.scan_command().output()?;
    assert!(
        output.status.success(),
        "Scan should work with initialized config. stderr: {}",
        stderr_of(&output)
    );
    assert!(stdout_of(&output).contains("command: make assets"));

    Ok(())
}
