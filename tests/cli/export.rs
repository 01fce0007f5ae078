use anyhow::Result;

use crate::{CliTest, stderr, stdout};

#[test]
fn test_export_configured_keys() -> Result<()> {
    let test = CliTest::with_languages()?;
    test.write_file(
        ".langpackrc.json",
        r#"{ "clientSideKeys": ["General_Save", "Goals_AddNewGoal"] }"#,
    )?;

    let output = test.command().args(["export", "--lang", "fr"]).output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let script = stdout(&output);
    assert!(script.starts_with(
        r#"var translations = {"General_Save":"Enregistrer","Goals_AddNewGoal":"Add a new goal"};"#
    ));
    assert!(script.contains("var langpack_translations = new Object;"));
    assert!(script.contains("function _lp_translate(translationStringId)"));

    Ok(())
}

#[test]
fn test_export_extra_keys_and_names() -> Result<()> {
    let test = CliTest::with_languages()?;
    test.write_file(
        ".langpackrc.json",
        r#"{ "clientGlobal": "app_translations", "clientFunction": "_t" }"#,
    )?;

    let output = test
        .command()
        .args(["export", "--key", "General_Cancel", "--key", "General_Cancel"])
        .output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let script = stdout(&output);
    assert!(script.starts_with(r#"var translations = {"General_Cancel":"Cancel"};"#));
    assert!(script.contains("function _t(translationStringId)"));

    Ok(())
}

#[test]
fn test_export_missing_key_warns() -> Result<()> {
    let test = CliTest::with_languages()?;

    let output = test
        .command()
        .args(["export", "--key", "General_Save", "--key", "General_Unknown"])
        .output()?;

    // The build succeeds; the client lookup returns a placeholder for the missing key.
    assert!(output.status.success());
    assert!(stdout(&output).starts_with(r#"var translations = {"General_Save":"Save"};"#));
    assert!(stderr(&output).contains("\"General_Unknown\" is not in the catalog"));

    Ok(())
}

#[test]
fn test_export_strict_missing_key_fails() -> Result<()> {
    let test = CliTest::with_languages()?;

    let output = test
        .command()
        .args(["export", "--strict", "--key", "General_Unknown"])
        .output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("translation \"General_Unknown\" is not loaded"));
    assert!(stdout(&output).is_empty());

    Ok(())
}

#[test]
fn test_export_malformed_key_fails() -> Result<()> {
    let test = CliTest::with_languages()?;

    let output = test.command().args(["export", "--key", "Save"]).output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("\"Save\" has no namespace separator"));

    Ok(())
}
