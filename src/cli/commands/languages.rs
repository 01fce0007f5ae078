use std::io;

use anyhow::Result;

use super::super::args::LanguagesCommand;
use super::super::exit_status::ExitStatus;
use super::super::report::{print_failure, print_languages_to};
use super::CommandContext;

pub fn languages(cmd: LanguagesCommand) -> Result<ExitStatus> {
    let context = CommandContext::new(&cmd.common, &[])?;
    let available = context.translator.available_languages();

    if available.is_empty() {
        print_failure(&format!(
            "No language files found in {}",
            context.translator.loader().lang_root().display()
        ));
        return Ok(ExitStatus::Failure);
    }

    print_languages_to(
        &available,
        context.translator.default_language(),
        &mut io::stdout().lock(),
    );
    Ok(ExitStatus::Success)
}
