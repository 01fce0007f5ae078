//! Terminal output for CLI commands.
//!
//! Kept out of the command handlers so the library stays usable without a terminal.

use std::io::{self, Write};

use colored::Colorize;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

pub fn print_success(message: &str) {
    let _ = writeln!(
        io::stdout().lock(),
        "{} {}",
        SUCCESS_MARK.green(),
        message.green()
    );
}

pub fn print_failure(message: &str) {
    print_failure_to(message, &mut io::stderr().lock());
}

pub fn print_failure_to<W: Write>(message: &str, writer: &mut W) {
    let _ = writeln!(writer, "{} {}", FAILURE_MARK.red(), message.red());
}

/// List languages, marking the default one.
pub fn print_languages_to<W: Write>(languages: &[String], default_language: &str, writer: &mut W) {
    for language in languages {
        if language == default_language {
            let _ = writeln!(writer, "{} {}", language, "(default)".dimmed());
        } else {
            let _ = writeln!(writer, "{}", language);
        }
    }
}

/// Warn about client-side keys that were requested but not loaded.
pub fn print_missing_keys_to<W: Write>(missing: &[String], writer: &mut W) {
    for key in missing {
        let _ = writeln!(
            writer,
            "{} \"{}\" is not in the catalog and will show a placeholder",
            "warning:".bold().yellow(),
            key.cyan()
        );
    }
}

#[cfg(test)]
mod tests {
    use crate::cli::report::*;

    fn render(f: impl FnOnce(&mut Vec<u8>)) -> String {
        colored::control::set_override(false);
        let mut out = Vec::new();
        f(&mut out);
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_print_languages_marks_default() {
        let languages = vec!["en".to_string(), "fr".to_string()];
        let output = render(|w| print_languages_to(&languages, "en", w));
        assert_eq!(output, "en (default)\nfr\n");
    }

    #[test]
    fn test_print_missing_keys() {
        let output = render(|w| print_missing_keys_to(&["General_Nope".to_string()], w));
        assert_eq!(
            output,
            "warning: \"General_Nope\" is not in the catalog and will show a placeholder\n"
        );
    }

    #[test]
    fn test_print_failure() {
        let output = render(|w| print_failure_to("boom", w));
        assert_eq!(output, format!("{} boom\n", FAILURE_MARK));
    }
}
