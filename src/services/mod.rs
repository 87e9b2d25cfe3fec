pub mod api_client;
pub mod error;
pub mod http;
pub mod session_store;

pub use api_client::ApiClient;
pub use error::ApiError;
pub use http::{GlooTransport, HttpRequest, HttpResponse, HttpTransport, Method};
pub use session_store::{BrowserStorage, MemoryStorage, SessionStore, TokenStorage};
