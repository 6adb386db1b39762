use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Please set your GITHUB_TOKEN environment variable first.")]
    MissingCredential,

    #[error("GITHUB_TOKEN contains characters that are not valid in an HTTP header.")]
    InvalidCredential,

    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("GitHub API returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Please specify a flag: --all, --only, or --except")]
    NoModeSelected,

    #[error("Unknown repositories: {}", .0.join(", "))]
    UnknownRepository(Vec<String>),

    #[error("Invalid input {0:?}. Please enter 'y' or 'n'.")]
    InvalidConfirmation(String),

    #[error("Failed to delete {name}: {source}")]
    DeleteFailed {
        name: String,
        #[source]
        source: Box<Error>,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
