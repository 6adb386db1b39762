use crate::config::DeleteOptions;
use crate::types::SelectionMode;
use clap::{Parser, Subcommand};

/// List and bulk-delete your GitHub repositories
#[derive(Parser, Debug)]
#[command(name = "gitcleaner")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Print debug logs to stderr
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List all your GitHub repositories
    List {
        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },

    /// Delete repositories in bulk
    Delete {
        /// Delete all repositories
        #[arg(long, short, conflicts_with_all = ["only", "except"])]
        all: bool,

        /// Delete only these repositories (comma-separated)
        #[arg(long, short, value_name = "NAMES", conflicts_with_all = ["all", "except"])]
        only: Option<String>,

        /// Delete all repositories except these (comma-separated)
        #[arg(long, short, value_name = "NAMES", conflicts_with_all = ["all", "only"])]
        except: Option<String>,

        /// Preview deletions without actually deleting
        #[arg(long, short)]
        dry_run: bool,
    },

    /// Show the current version of gitcleaner
    Version,
}

impl Command {
    /// Options of a `delete` invocation, or `None` for other commands
    pub fn delete_options(&self) -> Option<DeleteOptions> {
        match self {
            Command::Delete {
                all,
                only,
                except,
                dry_run,
            } => Some(DeleteOptions {
                mode: SelectionMode::from_flags(*all, only.as_deref(), except.as_deref()),
                dry_run: *dry_run,
            }),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Args, clap::Error> {
        Args::try_parse_from(std::iter::once("gitcleaner").chain(args.iter().copied()))
    }

    #[test]
    fn test_no_subcommand() {
        assert!(parse(&[]).unwrap().command.is_none());
    }

    #[test]
    fn test_delete_short_flags() {
        let args = parse(&["delete", "-o", "a,b", "-d"]).unwrap();
        let options = args.command.unwrap().delete_options().unwrap();
        assert_eq!(options.mode, SelectionMode::Only(vec!["a".into(), "b".into()]));
        assert!(options.dry_run);

        let args = parse(&["delete", "-a"]).unwrap();
        let options = args.command.unwrap().delete_options().unwrap();
        assert_eq!(options.mode, SelectionMode::All);
        assert!(!options.dry_run);

        let args = parse(&["delete", "--except", "keep"]).unwrap();
        let options = args.command.unwrap().delete_options().unwrap();
        assert_eq!(options.mode, SelectionMode::Except(vec!["keep".into()]));
    }

    #[test]
    fn test_delete_without_mode_parses() {
        let args = parse(&["delete", "--dry-run"]).unwrap();
        let options = args.command.unwrap().delete_options().unwrap();
        assert_eq!(options.mode, SelectionMode::Unspecified);
    }

    #[test]
    fn test_modes_conflict() {
        assert!(parse(&["delete", "--all", "--only", "a"]).is_err());
        assert!(parse(&["delete", "-o", "a", "-e", "b"]).is_err());
    }

    #[test]
    fn test_list_json() {
        let args = parse(&["list", "--json"]).unwrap();
        assert!(matches!(args.command, Some(Command::List { json: true })));
        assert!(args.command.unwrap().delete_options().is_none());
    }
}
