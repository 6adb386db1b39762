use crate::config::Config;
use crate::error::{Error, Result};
use crate::types::{Listing, Repository, User};
use reqwest::blocking::{Client, Response};
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue, LINK, USER_AGENT};
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};

/// Repositories requested from the single list call (GitHub's maximum page size)
pub const PER_PAGE: usize = 100;
const API_VERSION: &str = "2022-11-28";

/// The three platform operations the commands rely on
pub trait PlatformClient {
    /// Repositories owned by the authenticated identity, as far as one page reaches
    fn list_repositories(&self) -> Result<Listing>;

    /// Login of the authenticated identity
    fn current_user(&self) -> Result<String>;

    fn delete_repository(&self, owner: &str, name: &str) -> Result<()>;
}

/// GitHub REST API adapter
pub struct GitHubClient {
    http: Client,
    api_url: String,
}

#[derive(Deserialize)]
struct ApiErrorBody {
    message: String,
}

impl GitHubClient {
    pub fn new(config: &Config) -> Result<Self> {
        let mut headers = HeaderMap::new();
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", config.token))
            .map_err(|_| Error::InvalidCredential)?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);
        headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github+json"));
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static(concat!("gitcleaner/", env!("CARGO_PKG_VERSION"))),
        );
        headers.insert("X-GitHub-Api-Version", HeaderValue::from_static(API_VERSION));

        let http = Client::builder()
            .default_headers(headers)
            .connect_timeout(Duration::from_secs(30))
            .timeout(Duration::from_secs(60))
            .build()?;

        Ok(Self {
            http,
            api_url: config.api_url.clone(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_url, path)
    }
}

/// Whether the `Link` header points at a further page
fn has_next_page(headers: &HeaderMap) -> bool {
    headers
        .get(LINK)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.contains("rel=\"next\""))
}

/// Turn a non-success response into `Error::Api`, using the JSON `message` when there is one
fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().unwrap_or_default();
    let message = serde_json::from_str::<ApiErrorBody>(&body)
        .map(|b| b.message)
        .unwrap_or_else(|_| {
            status
                .canonical_reason()
                .unwrap_or("unexpected response")
                .to_string()
        });
    warn!(status = status.as_u16(), %message, "GitHub API request failed");

    Err(Error::Api {
        status: status.as_u16(),
        message,
    })
}

impl PlatformClient for GitHubClient {
    fn list_repositories(&self) -> Result<Listing> {
        let url = self.url("/user/repos");
        debug!(%url, per_page = PER_PAGE, "listing repositories");

        // owned repos only, collaborator and org repos live under another owner
        let per_page = PER_PAGE.to_string();
        let response = self
            .http
            .get(&url)
            .query(&[("affiliation", "owner"), ("per_page", per_page.as_str())])
            .send()?;
        let response = check_status(response)?;
        let next_page = has_next_page(response.headers());
        let repositories: Vec<Repository> = response.json()?;

        let truncated = next_page || repositories.len() >= PER_PAGE;
        debug!(count = repositories.len(), truncated, "listed repositories");
        Ok(Listing {
            repositories,
            truncated,
        })
    }

    fn current_user(&self) -> Result<String> {
        let url = self.url("/user");
        debug!(%url, "fetching current user");

        let response = self.http.get(&url).send()?;
        let user: User = check_status(response)?.json()?;
        Ok(user.login)
    }

    fn delete_repository(&self, owner: &str, name: &str) -> Result<()> {
        let url = self.url(&format!("/repos/{owner}/{name}"));
        debug!(%url, "deleting repository");

        let response = self.http.delete(&url).send()?;
        check_status(response)?;
        Ok(())
    }
}
