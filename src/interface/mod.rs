mod fetcher;
mod transport;

pub use fetcher::*;
pub use transport::*;
