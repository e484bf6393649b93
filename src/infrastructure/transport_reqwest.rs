use std::time::Duration;

use log::debug;
use reqwest::{Client, Method};

use crate::{HttpMethod, HttpTransport, Request, Response, StdResult, TransportError};

/// The user agent sent with every request, the GitHub API rejects requests without one.
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

impl From<reqwest::Error> for TransportError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            TransportError::TimedOut
        } else if error.is_connect() {
            TransportError::CannotConnect(error.to_string())
        } else {
            TransportError::Network(error.to_string())
        }
    }
}

/// Sends HTTP requests with a reqwest client.
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Creates a new `ReqwestTransport` instance with an optional request timeout.
    pub fn try_new(timeout: Option<Duration>) -> StdResult<Self> {
        let mut builder = Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
        })
    }
}

#[async_trait::async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: &Request) -> Result<Response, TransportError> {
        let method = match request.method() {
            HttpMethod::Get => Method::GET,
        };
        let response = self.client.request(method, request.url()).send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?;
        debug!("Received status {status} with {} bytes", body.len());

        Ok(Response::new(status, body.to_vec()))
    }
}

#[cfg(test)]
mod tests {
    use httpmock::MockServer;

    use super::*;

    #[tokio::test]
    async fn send_returns_status_and_body() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method("GET")
                    .path("/users/octocat/repos")
                    .header("User-Agent", USER_AGENT);
                then.status(200).body("[]");
            })
            .await;
        let transport = ReqwestTransport::try_new(None).unwrap();

        let response = transport
            .send(&Request::get(&server.url("/users/octocat/repos")))
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(Response::ok(b"[]".to_vec()), response);
    }

    #[tokio::test]
    async fn send_returns_non_success_status_as_response() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method("GET");
                then.status(500);
            })
            .await;
        let transport = ReqwestTransport::try_new(None).unwrap();

        let response = transport
            .send(&Request::get(&server.url("/users/octocat/repos")))
            .await
            .unwrap();

        assert_eq!(500, response.status());
        assert!(response.body().is_empty());
    }

    #[tokio::test]
    async fn send_fails_with_timeout() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method("GET");
                then.status(200).delay(Duration::from_millis(500)).body("[]");
            })
            .await;
        let transport = ReqwestTransport::try_new(Some(Duration::from_millis(50))).unwrap();

        let error = transport
            .send(&Request::get(&server.url("/users/octocat/repos")))
            .await
            .expect_err("Send should time out");

        assert_eq!(TransportError::TimedOut, error);
    }

    #[tokio::test]
    async fn send_fails_when_host_is_unreachable() {
        let transport = ReqwestTransport::try_new(None).unwrap();

        let error = transport
            .send(&Request::get("http://127.0.0.1:1/users/octocat/repos"))
            .await
            .expect_err("Send should fail on a closed port");

        assert!(matches!(error, TransportError::CannotConnect(_)));
    }

    #[tokio::test]
    async fn send_fails_with_invalid_url() {
        let transport = ReqwestTransport::try_new(None).unwrap();

        let error = transport
            .send(&Request::get("not a url"))
            .await
            .expect_err("Send should fail with an invalid URL");

        assert!(matches!(error, TransportError::Network(_)));
    }
}
