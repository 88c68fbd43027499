use crate::cli::{Cli, Command};
use crate::commands;
use crate::context::AppContext;
use crate::error::AppResult;
use crate::logging;

pub fn run(cli: Cli) -> AppResult<()> {
    let Cli {
        config,
        json,
        verbose,
        command,
    } = cli;

    logging::init(verbose);
    let ctx = AppContext::bootstrap(config, json)?;

    match command {
        Command::Create(args) => commands::create::run(&ctx, args),
        Command::Templates => commands::templates::run(&ctx),
    }
}
