use std::io;

use anyhow::Result;

use super::super::args::ExportCommand;
use super::super::exit_status::ExitStatus;
use super::super::report::print_missing_keys_to;
use super::CommandContext;

pub fn export(cmd: ExportCommand) -> Result<ExitStatus> {
    let context = CommandContext::new(&cmd.common, &cmd.keys)?;
    context.reload(cmd.lang.as_deref())?;

    let export = context.translator.client_export()?;
    if cmd.strict {
        export.ensure_complete()?;
    }

    print_missing_keys_to(&export.missing, &mut io::stderr().lock());
    println!("{}", export.to_script(&context.config.config.script_options()));

    Ok(ExitStatus::Success)
}
