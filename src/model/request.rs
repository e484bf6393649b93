use std::fmt::Display;

use super::Username;

/// The GitHub REST API production endpoint.
pub const GITHUB_API_ENDPOINT: &str = "https://api.github.com";

/// The HTTP method of a request
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum HttpMethod {
    /// A GET request
    Get,
}

impl Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HttpMethod::Get => write!(f, "GET"),
        }
    }
}

/// A request being made to the GitHub API
#[derive(Debug, PartialEq, Eq, Clone, Hash)]
pub struct Request {
    /// The HTTP method.
    pub(crate) method: HttpMethod,

    /// The absolute target URL.
    pub(crate) url: String,
}

impl Request {
    /// Creates a new GET `Request` for the given URL.
    pub fn get(url: &str) -> Self {
        Self {
            method: HttpMethod::Get,
            url: url.to_string(),
        }
    }

    /// Creates the request listing the public repositories of a user.
    pub fn user_repositories(endpoint: &str, username: &Username) -> Self {
        Self::get(&format!(
            "{}/users/{username}/repos",
            endpoint.trim_end_matches('/')
        ))
    }

    /// Retrieves the HTTP method.
    pub fn method(&self) -> HttpMethod {
        self.method
    }

    /// Retrieves the target URL.
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Display for Request {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Request: {} {}", self.method, self.url)
    }
}
