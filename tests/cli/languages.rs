use anyhow::Result;

use crate::{CliTest, stderr, stdout};

#[test]
fn test_languages_lists_catalogs() -> Result<()> {
    let test = CliTest::with_languages()?;
    test.write_file("lang/notes.txt", "ignored")?;

    let output = test.command().arg("languages").output()?;
    assert!(output.status.success());
    assert_eq!(stdout(&output), "en (default)\nfr\n");

    Ok(())
}

#[test]
fn test_languages_empty_root() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("languages").output()?;
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("No language files found"));

    Ok(())
}

#[test]
fn test_languages_lang_root_override() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("i18n/de.json", "{}")?;

    let output = test
        .command()
        .args(["languages", "--lang-root", "i18n", "--default-language", "de"])
        .output()?;
    assert_eq!(stdout(&output), "de (default)\n");

    Ok(())
}
