use crate::error::Result;
use crate::github::PlatformClient;
use crate::output;
use colored::Colorize;
use std::io::{self, Write};

/// Run the `list` command.
///
/// Like `delete::run`, failures are reported rather than returned. With
/// `json` they go to `err` so `out` carries nothing but the JSON document.
pub fn run<C, F, W, E>(connect: F, json: bool, out: &mut W, err: &mut E) -> io::Result<()>
where
    C: PlatformClient,
    F: FnOnce() -> Result<C>,
    W: Write,
    E: Write,
{
    let diag: &mut dyn Write = if json { err } else { &mut *out };

    let client = match connect() {
        Ok(c) => c,
        Err(e) => return writeln!(diag, "{}: {}", "Warning".yellow(), e),
    };

    if !json {
        writeln!(diag, "Fetching your repositories...")?;
    }
    let listing = match client.list_repositories() {
        Ok(l) => l,
        Err(e) => return writeln!(diag, "{}: Error while fetching repos: {}", "Error".red(), e),
    };
    if listing.truncated {
        output::print_truncated_warning(diag)?;
    }

    output::print_repositories(out, &listing.repositories, json)
}
