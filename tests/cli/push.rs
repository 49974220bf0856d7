//! Push paths that fail (or finish) before any network call is made.
//!
//! Everything past settings resolution and file discovery needs a Lokalise
//! project, so the happy path is covered by unit tests on the pipeline
//! stages instead.

use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;

use crate::CliTest;

#[test]
fn test_push_requires_a_project_id() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.push_command().args(["--api-token", "token"]), @r#"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    Error: No project id provided. Pass --project-id or set "projectId" in .glotpushrc.json.
    "#);

    Ok(())
}

#[test]
fn test_push_rejects_invalid_glob_pattern() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(
        test.push_command().args([
            "--api-token",
            "token",
            "--project-id",
            "123.abc",
            "--glob-pattern",
            "[invalid",
        ]),
        @r#"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    Error: Invalid glob pattern: "[invalid"
    "#
    );

    Ok(())
}

#[test]
fn test_push_with_no_matching_files_is_a_noop() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(
        test.push_command()
            .args(["--api-token", "token", "--project-id", "123.abc"]),
        @r"
    success: true
    exit_code: 0
    ----- stdout -----
    No message files matched the glob pattern.

    ----- stderr -----
    "
    );

    Ok(())
}

#[test]
fn test_push_rejects_invalid_config_platform() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".glotpushrc.json",
        r#"{ "projectId": "123.abc", "platforms": ["desktop"] }"#,
    )?;

    assert_cmd_snapshot!(test.push_command().args(["--api-token", "token"]), @r#"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    Error: Unknown platform in 'platforms': "desktop" (expected one of: ios, android, web, other)
    "#);

    Ok(())
}
