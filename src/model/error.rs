use thiserror::Error;

/// The standard result type used throughout the application.
pub type StdResult<T> = Result<T, anyhow::Error>;

/// Transport error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// The request did not complete in time
    #[error("The request timed out.")]
    TimedOut,
    /// The remote host could not be reached
    #[error("Could not connect to the server: {0}")]
    CannotConnect(String),
    /// Any other failure before a full response was received
    #[error("The network connection failed: {0}")]
    Network(String),
}

/// Fetch error
///
/// The `Display` text of each variant is the message shown to the user.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The username is empty or contains a non alphanumeric character
    #[error("Invalid username '{0}': only letters and digits are allowed.")]
    InvalidUsername(String),
    /// The transport failed to produce a response
    #[error("{0}")]
    Transport(#[from] TransportError),
    /// The server answered with a status other than 200
    #[error("The server responded with an unexpected status: {0}.")]
    Server(u16),
    /// The response body is not a list of repositories
    #[error("The data couldn't be read because it isn't in the correct format: {0}")]
    Decoding(#[from] serde_json::Error),
}
