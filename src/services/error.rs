/// Failures surfaced by the portal API client
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// Credentials rejected by `/user/login`
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// `/user/check` answered that the token is not valid
    #[error("Token is invalid")]
    TokenInvalid,

    /// `/user/check` returned 404; a deployment problem, not a credential one
    #[error("Token verification endpoint not found")]
    EndpointMissing,

    /// Non-2xx response on a data endpoint
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    /// 2xx response whose envelope breaks the contract
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// The request could not complete
    #[error("Network error: {0}")]
    Network(String),
}
