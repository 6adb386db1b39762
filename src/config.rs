use crate::error::{Error, Result};
use crate::types::SelectionMode;

pub const TOKEN_VAR: &str = "GITHUB_TOKEN";
pub const API_URL_VAR: &str = "GITHUB_API_URL";
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Settings resolved from the environment once per invocation
#[derive(Clone)]
pub struct Config {
    pub token: String,
    pub api_url: String,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("token", &"<redacted>")
            .field("api_url", &self.api_url)
            .finish()
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Resolve settings through `lookup`, so callers other than the process
    /// environment can supply values
    pub fn from_vars<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let token = lookup(TOKEN_VAR)
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .ok_or(Error::MissingCredential)?;

        let api_url = lookup(API_URL_VAR)
            .map(|u| u.trim().trim_end_matches('/').to_string())
            .filter(|u| !u.is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        Ok(Self { token, api_url })
    }
}

/// Flags of the `delete` command, parsed once at the CLI boundary
#[derive(Debug, Clone)]
pub struct DeleteOptions {
    pub mode: SelectionMode,
    pub dry_run: bool,
}
