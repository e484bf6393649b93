//! Fetches the public repositories of a GitHub user and exposes the fetch as an
//! observable loading/error state.
//!
//! The pipeline is split in three layers:
//! - [`HttpTransport`] sends a request, [`ReqwestTransport`] is the production implementation.
//! - [`RepositoryFetcher`] validates the username, calls the API and decodes the repositories.
//! - [`FetchStateController`] runs a fetch and publishes a [`FetchState`] to its subscribers.

mod infrastructure;
mod interface;
mod model;

pub use infrastructure::*;
pub use interface::*;
pub use model::*;
