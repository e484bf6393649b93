use std::sync::Arc;

use log::{debug, error, info, warn};

use crate::{
    FetchError, GITHUB_API_ENDPOINT, HttpTransport, Repository, RepositoryFetcher, Request,
    Response, Username,
};

/// The only status accepted as a successful answer.
const HTTP_STATUS_OK: u16 = 200;

/// Fetches the public repositories of a user from the GitHub REST API.
pub struct GithubRestFetcher {
    transport: Arc<dyn HttpTransport>,
    endpoint: String,
}

impl GithubRestFetcher {
    /// Creates a new `GithubRestFetcher` targeting the given API endpoint.
    pub fn new(transport: Arc<dyn HttpTransport>, endpoint: &str) -> Self {
        Self {
            transport,
            endpoint: endpoint.to_string(),
        }
    }

    /// Creates a new `GithubRestFetcher` targeting the production GitHub API.
    pub fn github(transport: Arc<dyn HttpTransport>) -> Self {
        Self::new(transport, GITHUB_API_ENDPOINT)
    }

    fn check_status(response: &Response) -> Result<(), FetchError> {
        if response.status() != HTTP_STATUS_OK {
            warn!("Unexpected response status: {}", response.status());
            return Err(FetchError::Server(response.status()));
        }

        Ok(())
    }

    fn decode(body: &[u8]) -> Result<Vec<Repository>, FetchError> {
        serde_json::from_slice::<Vec<Repository>>(body).map_err(|e| {
            error!("Failed to decode repositories: {e}");
            FetchError::Decoding(e)
        })
    }
}

#[async_trait::async_trait]
impl RepositoryFetcher for GithubRestFetcher {
    async fn fetch(&self, username: &str) -> Result<Vec<Repository>, FetchError> {
        let username = Username::try_from(username)?;
        let request = Request::user_repositories(&self.endpoint, &username);
        debug!("Sending {request}");

        let response = self.transport.send(&request).await.map_err(|e| {
            error!("Transport failed for {request}: {e}");
            FetchError::Transport(e)
        })?;
        Self::check_status(&response)?;
        let repositories = Self::decode(response.body())?;
        for repository in &repositories {
            debug!("Fetched {repository}");
        }
        info!(
            "Fetched {} repositories for user {username}",
            repositories.len()
        );

        Ok(repositories)
    }
}
