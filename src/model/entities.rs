use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// The name of a repository.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RepositoryName(pub String);

impl Display for RepositoryName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A public repository of a GitHub user.
///
/// Only `name` and `description` are read from the API payload, any other key
/// is ignored.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Repository {
    /// The name of the repository.
    name: RepositoryName,

    /// The description of the repository, if any.
    description: Option<String>,
}

impl Repository {
    /// Creates a new `Repository` instance.
    pub fn new(name: &str, description: Option<&str>) -> Self {
        Self {
            name: RepositoryName(name.to_string()),
            description: description.map(str::to_string),
        }
    }

    /// Retrieves the repository name.
    pub fn name(&self) -> &RepositoryName {
        &self.name
    }

    /// Retrieves the repository description.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Creates a dummy `Repository` for testing purposes.
    #[cfg(test)]
    pub(crate) fn dummy() -> Self {
        Self::new("test-repo", Some("test-description"))
    }
}

impl Display for Repository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.description {
            Some(description) => write!(
                f,
                "Repository: {}, Description: {description}",
                self.name
            ),
            None => write!(f, "Repository: {}", self.name),
        }
    }
}

/// The observable state of a repositories fetch.
///
/// `results` and `error_message` always describe the same (latest completed)
/// fetch: a success clears the error, a failure clears the results. Starting a
/// new attempt clears the error as well.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchState {
    /// Repositories of the latest successful fetch
    results: Vec<Repository>,

    /// Whether a fetch is in flight
    is_loading: bool,

    /// Displayable message of the latest failed fetch
    error_message: Option<String>,
}

impl FetchState {
    /// Retrieves the fetched repositories.
    pub fn results(&self) -> &[Repository] {
        &self.results
    }

    /// Whether a fetch is in flight.
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Retrieves the error message of the latest failed fetch.
    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// Marks a new attempt in flight, the error of a previous attempt is cleared.
    pub(crate) fn start_loading(&mut self) {
        self.is_loading = true;
        self.error_message = None;
    }

    pub(crate) fn stop_loading(&mut self) {
        self.is_loading = false;
    }

    /// Replaces the results with a successful outcome.
    pub(crate) fn succeed(&mut self, repositories: Vec<Repository>) {
        self.results = repositories;
        self.error_message = None;
        self.is_loading = false;
    }

    /// Clears the results and records a failed outcome.
    pub(crate) fn fail(&mut self, error_message: String) {
        self.results = vec![];
        self.error_message = Some(error_message);
        self.is_loading = false;
    }
}

impl Display for FetchState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "FetchState: results={}, loading={}, error={:?}",
            self.results.len(),
            self.is_loading,
            self.error_message
        )
    }
}
