mod cli;
mod config;
mod delete;
mod error;
mod github;
mod list;
mod logging;
mod output;
mod prompt;
mod select;
mod types;

use anyhow::Result;
use clap::Parser;
use cli::{Args, Command};
use config::Config;
use github::GitHubClient;
use prompt::StdinReader;
use std::io;

fn connect() -> error::Result<GitHubClient> {
    let config = Config::from_env()?;
    tracing::debug!(?config, "resolved configuration");
    GitHubClient::new(&config)
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Diagnostics go to stderr, user-facing output to stdout
    logging::init(args.verbose);

    let mut stdout = io::stdout();

    match args.command {
        None => {
            println!("gitcleaner: Use 'gitcleaner list' or 'gitcleaner delete' commands.");
        }
        Some(Command::Version) => {
            println!("gitcleaner v{}", env!("CARGO_PKG_VERSION"));
        }
        Some(Command::List { json }) => {
            list::run(connect, json, &mut stdout, &mut io::stderr())?;
        }
        Some(command @ Command::Delete { .. }) => {
            if let Some(options) = command.delete_options() {
                let outcome = delete::run(connect, &options, &mut StdinReader, &mut stdout)?;
                tracing::debug!(outcome = %outcome.summary(), "delete finished");
            }
        }
    }

    Ok(())
}
