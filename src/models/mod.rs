pub mod auth;
pub mod envelope;
pub mod property;

pub use auth::{Credentials, LoginData, TokenStatus};
pub use envelope::{status_flag, Envelope};
pub use property::{Property, PropertyId};
