use anyhow::{Context, Result};
use serde_json::Value;

use crate::{CliTest, stderr, stdout};

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("init").output()?;
    assert!(output.status.success());
    assert!(stdout(&output).contains("Created .langpackrc.json"));

    let content = test.read_file(".langpackrc.json")?;
    let parsed: Value = serde_json::from_str(&content).context("Config should be valid JSON")?;
    assert_eq!(parsed["langRoot"], "lang");
    assert_eq!(parsed["defaultLanguage"], "en");
    assert!(parsed.get("clientSideKeys").is_some());
    assert!(content.contains("  "), "Config should use 2-space indentation");

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".langpackrc.json", "{}")?;

    let output = test.command().arg("init").output()?;
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains(".langpackrc.json already exists"));
    assert_eq!(test.read_file(".langpackrc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;
    test.command().arg("init").output()?;
    test.write_file("lang/en.json", crate::EN)?;

    let output = test.command().args(["get", "General", "Save"]).output()?;
    assert!(
        output.status.success(),
        "get should work with initialized config. stderr: {}",
        stderr(&output)
    );
    assert!(test.root().join(".langpackrc.json").exists());

    Ok(())
}
