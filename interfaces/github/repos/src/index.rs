use reqwest::{Client, StatusCode};
use thiserror::Error;
use tracing::debug;

use crate::models::Repository;

pub const GITHUB_API_BASE_URL: &str = "https://api.github.com";

const USER_AGENT: &str = "rust-client";

/// Fetches the first page of `username`'s public repositories, most recently
/// updated first.
pub async fn fetch_user_repos(
    base_url: &str,
    username: &str,
) -> Result<Vec<Repository>, FetchUserReposError> {
    let url = format!(
        "{}/users/{username}/repos?sort=updated",
        base_url.trim_end_matches('/')
    );

    let client = Client::builder()
        .user_agent(USER_AGENT)
        .build()
        .map_err(|source| FetchUserReposError::ClientBuild { source })?;

    debug!(%url, "requesting repository list");

    let response = client
        .get(&url)
        .send()
        .await
        .map_err(|source| FetchUserReposError::RequestSend { source })?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchUserReposError::UnexpectedStatus { status });
    }

    let body = response
        .text()
        .await
        .map_err(|source| FetchUserReposError::ResponseRead { source })?;

    serde_json::from_str(&body)
        .map_err(|source| FetchUserReposError::DeserializeResponseBody { source })
}

#[derive(Debug, Error)]
pub enum FetchUserReposError {
    #[error("ClientBuild: {source}")]
    ClientBuild {
        source: reqwest::Error,
    },

    #[error("RequestSend: {source}")]
    RequestSend {
        source: reqwest::Error,
    },

    #[error("UnexpectedStatus: {status}")]
    UnexpectedStatus {
        status: StatusCode,
    },

    #[error("ResponseRead: {source}")]
    ResponseRead {
        source: reqwest::Error,
    },

    #[error("DeserializeResponseBody: {source}")]
    DeserializeResponseBody {
        source: serde_json::Error,
    },
}

impl FetchUserReposError {
    /// True when the body arrived but was not a list of repository records.
    pub fn is_parse_error(&self) -> bool {
        matches!(self, FetchUserReposError::DeserializeResponseBody { .. })
    }
}
