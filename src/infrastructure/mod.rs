mod controller;
mod fetcher_github;
mod transport_reqwest;

pub use controller::*;
pub use fetcher_github::*;
pub use transport_reqwest::*;
