use crate::{FetchError, Repository};

/// A trait for fetching the public repositories of a user from the API.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait RepositoryFetcher: Sync + Send {
    /// Fetches the repositories of the given user.
    async fn fetch(&self, username: &str) -> Result<Vec<Repository>, FetchError>;
}
