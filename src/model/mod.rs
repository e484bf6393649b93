mod entities;
mod error;
mod request;
mod response;
mod username;

pub use entities::*;
pub use error::*;
pub use request::*;
pub use response::*;
pub use username::*;
