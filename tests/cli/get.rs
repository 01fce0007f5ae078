use anyhow::Result;

use crate::{CliTest, stderr, stdout};

#[test]
fn test_get_default_language() -> Result<()> {
    let test = CliTest::with_languages()?;

    let output = test.command().args(["get", "General", "Save"]).output()?;
    assert!(output.status.success());
    assert_eq!(stdout(&output), "Save\n");

    Ok(())
}

#[test]
fn test_get_requested_language_wins() -> Result<()> {
    let test = CliTest::with_languages()?;

    let output = test
        .command()
        .args(["get", "General", "Save", "--lang", "fr"])
        .output()?;
    assert_eq!(stdout(&output), "Enregistrer\n");

    // Keys the French catalog lacks come from the English baseline.
    let output = test
        .command()
        .args(["get", "General", "Cancel", "--lang", "fr"])
        .output()?;
    assert_eq!(stdout(&output), "Cancel\n");

    Ok(())
}

#[test]
fn test_get_language_from_env() -> Result<()> {
    let test = CliTest::with_languages()?;

    let output = test
        .command()
        .env("LANGPACK_LANGUAGE", "fr")
        .args(["get", "General", "Save"])
        .output()?;
    assert_eq!(stdout(&output), "Enregistrer\n");

    Ok(())
}

#[test]
fn test_get_missing_entry() -> Result<()> {
    let test = CliTest::with_languages()?;

    let output = test.command().args(["get", "General", "Nope"]).output()?;
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("General.Nope is not translated in \"en\""));

    Ok(())
}

#[test]
fn test_get_unknown_language() -> Result<()> {
    let test = CliTest::with_languages()?;

    let output = test
        .command()
        .args(["get", "General", "Save", "--lang", "zz"])
        .output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("language file not found for \"zz\""));

    Ok(())
}

#[test]
fn test_get_path_traversal() -> Result<()> {
    let test = CliTest::with_languages()?;
    test.write_file("secret.json", crate::EN)?;

    let output = test
        .command()
        .args(["get", "General", "Save", "--lang", "../secret"])
        .output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("invalid language code \"../secret\""));

    Ok(())
}

#[test]
fn test_get_plugin_translation() -> Result<()> {
    let test = CliTest::with_languages()?;
    test.write_file(".langpackrc.json", r#"{ "pluginsRoot": "plugins" }"#)?;
    test.write_file(
        "plugins/Goals/lang/en.json",
        r#"{"Goals": {"PluginTitle": "Goals"}}"#,
    )?;
    test.write_file(
        "plugins/Goals/lang/fr.json",
        r#"{"Goals": {"PluginTitle": "Objectifs"}}"#,
    )?;

    let output = test
        .command()
        .args(["get", "Goals", "PluginTitle", "--lang", "fr"])
        .output()?;
    assert_eq!(stdout(&output), "Objectifs\n");

    Ok(())
}
