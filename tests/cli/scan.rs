use anyhow::Result;
use insta::assert_snapshot;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

use crate::{CliTest, stderr_of, stdout_of};

const WEB_MAIN: &str = r#"package main

import "github.com/kataras/iris/v12"

// $ go-bindata -fs ./assets/...
func main() {
	app := iris.New()
	app.HandleDir("/static", "./assets", iris.DirOptions{Asset: Asset, AssetNames: AssetNames})
	app.Listen(":8080")
}
"#;

const BINDATA: &str = r#"package main

// $ never reported
func Asset(name string) ([]byte, error) { return nil, nil }
"#;

#[test]
fn test_scan_current_directory() -> Result<()> {
    let test = CliTest::with_file("main.go", WEB_MAIN)?;
    test.write_file("bindata.go", BINDATA)?;

    let output = test.scan_command().output()?;
    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    assert_snapshot!(stdout_of(&output), @r#"
    command: go-bindata -fs ./assets/...
      --> .
    asset dir: "./assets"  generated bundle

    ✓ Found 1 command, 1 asset directory
    "#);

    Ok(())
}

#[test]
fn test_scan_json_output() -> Result<()> {
    let test = CliTest::with_file("cmd/web/main.go", WEB_MAIN)?;

    let output = test
        .scan_command()
        .args(["cmd/web", "--format", "json"])
        .output()?;
    assert!(output.status.success(), "stderr: {}", stderr_of(&output));

    let value: Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(
        value,
        json!({
            "assetDirs": [{ "dir": "./assets", "shouldGenerated": true }],
            "commands": [{
                "dir": "cmd/web",
                "name": "go-bindata",
                "args": ["-fs", "./assets/..."]
            }]
        })
    );

    Ok(())
}

#[test]
fn test_scan_single_file_uses_its_directory() -> Result<()> {
    let test = CliTest::with_file("web/server.go", "// $ npm run build\npackage web\n")?;

    let output = test.scan_command().arg("web/server.go").output()?;
    assert!(output.status.success());
    assert!(stdout_of(&output).starts_with("command: npm run build\n  --> web\n"));

    Ok(())
}

#[test]
fn test_scan_inline_source() -> Result<()> {
    let test = CliTest::new()?;

    let output = test
        .scan_command()
        .arg("package main\n\nvar dir = `./public`\n\nfunc main() { app.HandleDir(\"/\", dir) }\n")
        .output()?;
    assert!(output.status.success());
    assert_eq!(
        stdout_of(&output),
        "asset dir: \"./public\"\n\n\u{2713} Found 0 commands, 1 asset directory\n"
    );

    Ok(())
}

#[test]
fn test_scan_stdin() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.run_with_stdin(
        {
            let mut cmd = test.scan_command();
            cmd.args(["--stdin", "--format", "json"]);
            cmd
        },
        b"package main\n\n/* $ make */\n",
    )?;
    assert!(output.status.success(), "stderr: {}", stderr_of(&output));

    let value: Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(
        value["commands"],
        json!([{ "dir": ".", "name": "make", "args": [] }])
    );

    Ok(())
}

#[test]
fn test_scan_syntax_error_is_a_failure() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.scan_command().arg("foo := 1").output()?;
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert_snapshot!(stderr_of(&output), @r"
    error: expected 'package', found foo
     --> <source>:1:1
      |
    1 | foo := 1
      | ^
    ");

    Ok(())
}

#[test]
fn test_scan_directory_with_broken_file_fails() -> Result<()> {
    let test = CliTest::with_file("a.go", WEB_MAIN)?;
    test.write_file("b.go", "package main\n\nfunc main() {\n")?;

    let output = test.scan_command().output()?;
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(stderr_of(&output).contains("b.go:"));

    Ok(())
}

#[test]
fn test_scan_empty_result() -> Result<()> {
    let test = CliTest::with_file("util.go", "package util\n\nfunc Add(a, b int) int { return a + b }\n")?;

    let output = test.scan_command().output()?;
    assert!(output.status.success());
    assert_eq!(
        stdout_of(&output),
        "\u{2713} No commands or asset directories found\n"
    );

    Ok(())
}

#[test]
fn test_scan_respects_config() -> Result<()> {
    let test = CliTest::with_file(
        ".gosiftrc.json",
        r#"{ "skipFiles": ["zz_*.go"], "sourceRoot": "server" }"#,
    )?;
    test.write_file("server/bindata.go", BINDATA)?;
    test.write_file("server/zz_generated.go", "package main\n\n// $ skipped\n")?;

    let output = test.scan_command().args(["--format", "json"]).output()?;
    assert!(output.status.success(), "stderr: {}", stderr_of(&output));

    let value: Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(value["commands"][0]["name"], "never");
    assert_eq!(value["commands"].as_array().map(Vec::len), Some(1));

    Ok(())
}

#[test]
fn test_scan_explicit_config_file() -> Result<()> {
    let test = CliTest::with_file("ci/gosift.json", r#"{ "skipFiles": [] }"#)?;
    test.write_file("bindata.go", BINDATA)?;

    let output = test
        .scan_command()
        .args(["--config", "ci/gosift.json", "--format", "json"])
        .output()?;
    assert!(output.status.success(), "stderr: {}", stderr_of(&output));

    let value: Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(value["commands"][0]["name"], "never");

    Ok(())
}

#[test]
fn test_scan_invalid_config_is_an_error() -> Result<()> {
    let test = CliTest::with_file(".gosiftrc.json", r#"{ "skipFiles": ["[invalid"] }"#)?;

    let output = test.scan_command().output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr_of(&output).contains("Invalid glob pattern in 'skipFiles'"));

    Ok(())
}

#[test]
fn test_no_command_prints_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().output()?;
    assert!(output.status.success());
    let stdout = stdout_of(&output);
    assert!(stdout.contains("Usage:"));
    assert!(stdout.contains("scan"));
    assert!(stdout.contains("init"));

    Ok(())
}
