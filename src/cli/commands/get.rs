use anyhow::Result;

use super::super::args::GetCommand;
use super::super::exit_status::ExitStatus;
use super::super::report::print_failure;
use super::CommandContext;

pub fn get(cmd: GetCommand) -> Result<ExitStatus> {
    let context = CommandContext::new(&cmd.common, &[])?;
    let language = context.reload(cmd.lang.as_deref())?;

    match context.translator.translate(&cmd.namespace, &cmd.key) {
        Some(value) => {
            println!("{}", value);
            Ok(ExitStatus::Success)
        }
        None => {
            print_failure(&format!(
                "{}.{} is not translated in \"{}\"",
                cmd.namespace, cmd.key, language
            ));
            Ok(ExitStatus::Failure)
        }
    }
}
