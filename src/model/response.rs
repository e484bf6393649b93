/// A response received from the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// The HTTP status code
    pub(crate) status: u16,

    /// The raw body bytes, possibly empty
    pub(crate) body: Vec<u8>,
}

impl Response {
    /// Creates a new `Response` instance with the given status and body.
    pub fn new(status: u16, body: Vec<u8>) -> Self {
        Self { status, body }
    }

    /// Creates a `200 OK` response with the given body.
    pub fn ok(body: Vec<u8>) -> Self {
        Self::new(200, body)
    }

    /// Retrieves the HTTP status code.
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Retrieves the body.
    pub fn body(&self) -> &[u8] {
        &self.body
    }
}
