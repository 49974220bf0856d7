use anyhow::{Context, Result};
use insta_cmd::assert_cmd_snapshot;
use serde_json::Value;

use crate::CliTest;

/// Validates config file structure and default values.
fn assert_config_content(content: &str) -> Result<()> {
    let parsed: Value = serde_json::from_str(content).context("Config should be valid JSON")?;

    assert!(
        parsed.get("globPattern").is_some(),
        "Config should have 'globPattern' field"
    );
    assert!(
        parsed.get("keyNameProperty").is_some(),
        "Config should have 'keyNameProperty' field"
    );
    assert!(
        parsed.get("platforms").is_some(),
        "Config should have 'platforms' field"
    );

    Ok(())
}

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.command().arg("init"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Created .glotpushrc.json

    ----- stderr -----
    ");

    // Verify file exists
    assert!(test.root().join(".glotpushrc.json").exists());

    // Verify content is valid and has expected structure
    let content = test.read_file(".glotpushrc.json")?;
    assert_config_content(&content)?;

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".glotpushrc.json", "{}")?;

    assert_cmd_snapshot!(test.command().arg("init"), @r"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    Error: .glotpushrc.json already exists
    ");

    Ok(())
}
