//! Shell completion and man page output

use std::io;

use clap::CommandFactory;

use crate::cli::{Cli, CompletionsArgs};
use crate::error::Result;

/// Print completions for the requested shell
pub fn run(args: CompletionsArgs) -> Result<()> {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(args.shell, &mut command, name, &mut io::stdout());
    Ok(())
}

/// Print the roff man page
pub fn man() -> Result<()> {
    let page = clap_mangen::Man::new(Cli::command());
    page.render(&mut io::stdout())?;
    Ok(())
}
