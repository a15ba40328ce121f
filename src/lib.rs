mod cli;
mod config;
mod error;
mod git;
mod github;
mod matcher;
mod prompt;
mod report;
mod resolver;

mod commands {
    pub mod completions;
    pub mod grab;
    pub mod setup;
}

pub use error::Error;

use commands::completions::Completions;
use commands::grab::Grab;
use commands::setup::Setup;

use config::Config;
use prompt::Terminal;
use std::env::Args;

pub async fn handle(args: Args) -> Result<(), Error> {
    let matches = cli::cli().get_matches_from(args);

    if let Some(shell) = matches.get_one::<String>("completions") {
        Completions::handle(shell);
        return Ok(());
    }

    let mut prompter = Terminal;

    if matches.get_flag("reconfigure") {
        return Setup::handle(&mut prompter);
    }

    let keyword: &String = matches.get_one("keyword").unwrap();
    let mut config = Config::load_or_init(&mut prompter)?;

    Grab::handle(keyword, &mut config, &mut prompter).await
}
