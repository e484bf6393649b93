use crate::{Request, Response, TransportError};

/// A trait for sending HTTP requests.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait HttpTransport: Sync + Send {
    /// Sends the request and waits for the full response.
    ///
    /// A transport error takes precedence over anything received so far, a
    /// partial body is discarded.
    async fn send(&self, request: &Request) -> Result<Response, TransportError>;
}
