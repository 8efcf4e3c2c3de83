//! GitHub gist API client implementation using reqwest.

use std::collections::HashSet;
use std::time::Duration;

use reqwest::StatusCode;
use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, LINK, USER_AGENT};
use url::Url;

use crate::domain::{AppError, Gist, GistApiConfig};
use crate::ports::GistClient;

const GITHUB_JSON: &str = "application/vnd.github+json";
const PER_PAGE: &str = "100";
const DEFAULT_STATUS_MESSAGE: &str = "GitHub API request failed";

/// HTTP transport for the GitHub gists API.
///
/// Each call issues plain requests with no retry; listing follows `Link`
/// pagination until the last page.
#[derive(Clone)]
pub struct HttpGistClient {
    token: String,
    api_url: Url,
    client: Client,
}

impl std::fmt::Debug for HttpGistClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpGistClient")
            .field("api_url", &self.api_url)
            .field("token", &"[REDACTED]")
            .finish()
    }
}

impl HttpGistClient {
    /// Create a new HTTP client with the given access token and configuration.
    pub fn new(token: String, config: &GistApiConfig) -> Result<Self, AppError> {
        config.validate()?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| {
                AppError::api_error(format!("Failed to create HTTP client: {}", e), None)
            })?;

        Ok(Self { token, api_url: config.api_url.clone(), client })
    }

    /// Resolve an API path below the configured base URL.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, AppError> {
        let mut url = self.api_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                AppError::config_error(format!("api_url '{}' cannot be a base", self.api_url))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        builder
            .header(AUTHORIZATION, format!("token {}", self.token))
            .header(ACCEPT, GITHUB_JSON)
            .header(USER_AGENT, concat!("gist-sweep/", env!("CARGO_PKG_VERSION")))
    }

    /// Accept a pagination link only if it stays on the API host and has not
    /// been fetched already; the token is never sent anywhere else.
    fn follow_page(&self, link: Url, visited: &HashSet<Url>) -> Result<Url, AppError> {
        if link.origin() != self.api_url.origin() {
            let origin = link.origin().ascii_serialization();
            return Err(AppError::api_error(
                format!("Refusing to follow pagination link to {}", origin),
                None,
            ));
        }
        if visited.contains(&link) {
            return Err(AppError::api_error(
                format!("Pagination link {} points at a page already fetched", link),
                None,
            ));
        }
        Ok(link)
    }

    fn send(&self, builder: RequestBuilder) -> Result<Response, AppError> {
        let response = self
            .authorized(builder)
            .send()
            .map_err(|e| AppError::api_error(format!("HTTP request failed: {}", e), None))?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body_text = response.text().unwrap_or_default();
        Err(AppError::api_error(error_message(status, &body_text), Some(status.as_u16())))
    }
}

impl GistClient for HttpGistClient {
    fn list_gists(&self, username: &str) -> Result<Vec<Gist>, AppError> {
        let mut next = Some({
            let mut url = self.endpoint(&["users", username, "gists"])?;
            url.query_pairs_mut().append_pair("per_page", PER_PAGE);
            url
        });
        let mut gists = Vec::new();
        let mut visited = HashSet::new();

        while let Some(url) = next.take() {
            tracing::debug!(%url, "listing gists");
            let response = self.send(self.client.get(url.clone()))?;
            let status = response.status();
            visited.insert(url);
            next = next_page(response.headers())
                .map(|link| self.follow_page(link, &visited))
                .transpose()?;

            let status = Some(status.as_u16());
            let body_text = response.text().map_err(|e| {
                AppError::api_error(format!("Failed to read response: {}", e), status)
            })?;
            let page: Vec<Gist> = serde_json::from_str(&body_text).map_err(|e| {
                AppError::api_error(format!("Failed to parse response: {}", e), status)
            })?;

            tracing::debug!(count = page.len(), more = next.is_some(), "received gist page");
            gists.extend(page);
        }

        Ok(gists)
    }

    fn delete_gist(&self, id: &str) -> Result<(), AppError> {
        let url = self.endpoint(&["gists", id])?;
        tracing::debug!(%url, "deleting gist");
        self.send(self.client.delete(url))?;
        Ok(())
    }
}

fn error_message(status: StatusCode, body: &str) -> String {
    extract_error_message(body).unwrap_or_else(|| {
        if !body.trim().is_empty() {
            body.trim().to_string()
        } else if status == StatusCode::UNAUTHORIZED {
            "Bad credentials".to_string()
        } else if status == StatusCode::NOT_FOUND {
            "Not Found".to_string()
        } else if status.is_server_error() {
            "Server error".to_string()
        } else {
            DEFAULT_STATUS_MESSAGE.to_string()
        }
    })
}

fn extract_error_message(body: &str) -> Option<String> {
    if body.trim().is_empty() {
        return None;
    }

    let parsed = serde_json::from_str::<serde_json::Value>(body).ok()?;
    parsed.get("message").and_then(|message| message.as_str()).map(ToOwned::to_owned)
}

/// Extract the `rel="next"` target from a GitHub `Link` header.
fn next_page(headers: &HeaderMap) -> Option<Url> {
    let link = headers.get(LINK)?.to_str().ok()?;

    link.split(',').find_map(|entry| {
        let mut parts = entry.split(';');
        let target = parts.next()?.trim().strip_prefix('<')?.strip_suffix('>')?;
        let is_next = parts.any(|param| param.trim() == r#"rel="next""#);
        if is_next { Url::parse(target).ok() } else { None }
    })
}
