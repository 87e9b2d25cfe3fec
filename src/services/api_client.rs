// ============================================================================
// API CLIENT - Portal REST endpoints (stateless)
// ============================================================================
// No business logic here: build the request, interpret the envelope.
// ============================================================================

use std::rc::Rc;

use serde_json::Value;

use crate::config::CONFIG;
use crate::models::{status_flag, Credentials, Envelope, LoginData, Property, TokenStatus};
use crate::services::error::ApiError;
use crate::services::http::{GlooTransport, HttpRequest, HttpResponse, HttpTransport};

pub struct ApiClient<T: HttpTransport = GlooTransport> {
    base_url: String,
    transport: Rc<T>,
}

impl<T: HttpTransport> Clone for ApiClient<T> {
    fn clone(&self) -> Self {
        Self {
            base_url: self.base_url.clone(),
            transport: Rc::clone(&self.transport),
        }
    }
}

impl ApiClient<GlooTransport> {
    pub fn new() -> Self {
        Self::with_transport(&CONFIG.api_base_url, Rc::new(GlooTransport))
    }
}

impl Default for ApiClient<GlooTransport> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: HttpTransport> ApiClient<T> {
    pub fn with_transport(base_url: &str, transport: Rc<T>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            transport,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// `POST /user/login`
    pub async fn login(&self, credentials: &Credentials) -> Result<LoginData, ApiError> {
        let body = serde_json::to_string(credentials)
            .map_err(|e| ApiError::MalformedResponse(format!("Serialization error: {}", e)))?;

        log::info!("🔐 [API] Login request for {}", credentials.email);

        let response = self.transport
            .send(HttpRequest::post_json(self.url("/user/login"), body))
            .await?;

        if !response.ok() {
            let message = server_message(&response)
                .unwrap_or_else(|| "Login failed".to_string());
            log::warn!("⚠️ [API] Login rejected with HTTP {}: {}", response.status, message);
            return Err(ApiError::Authentication(message));
        }

        // Failure envelopes carry arbitrary `data`, so decode it only on success
        let envelope: Envelope<Value> = serde_json::from_str(&response.body)
            .map_err(|e| ApiError::MalformedResponse(format!("Login response: {}", e)))?;

        if !envelope.status {
            let message = envelope.message().unwrap_or("Login failed").to_string();
            log::warn!("⚠️ [API] Login refused by server: {}", message);
            return Err(ApiError::Authentication(message));
        }

        let data: LoginData = match envelope.data {
            Some(data) if !data.is_null() => serde_json::from_value(data)
                .map_err(|e| ApiError::MalformedResponse(format!("Login data: {}", e)))?,
            _ => return Err(ApiError::MalformedResponse("Login response without data".to_string())),
        };

        log::info!("✅ [API] Login accepted (user {:?}, role {:?})", data.user_id, data.role);
        Ok(data)
    }

    /// `GET /user/check`. A 404 means the endpoint itself is gone, which is
    /// reported as `Unknown` rather than `Invalid`.
    pub async fn verify(&self, token: &str) -> Result<TokenStatus, ApiError> {
        let response = self.transport
            .send(HttpRequest::get(self.url("/user/check")).bearer(token))
            .await?;

        if response.status == 404 {
            log::error!("❌ [API] Token verification endpoint not found");
            return Ok(TokenStatus::Unknown);
        }

        if !response.ok() {
            log::warn!("⚠️ [API] Token verification failed with HTTP {}", response.status);
            return Ok(TokenStatus::Invalid);
        }

        // The check endpoint is loose about the flag's type (1, "true", ...)
        let valid = serde_json::from_str::<Value>(&response.body)
            .ok()
            .and_then(|body| body.get("status").or_else(|| body.get("success")).map(status_flag))
            .unwrap_or(false);

        Ok(if valid { TokenStatus::Valid } else { TokenStatus::Invalid })
    }

    /// `GET /property/list`
    pub async fn list_properties(&self, token: &str) -> Result<Vec<Property>, ApiError> {
        let response = self.transport
            .send(HttpRequest::get(self.url("/property/list")).bearer(token))
            .await?;

        if !response.ok() {
            let status = response.status;
            let message = server_message(&response)
                .unwrap_or_else(|| format!("Failed to fetch properties: {}", status));
            return Err(ApiError::Http { status, message });
        }

        let envelope: Envelope<Value> = serde_json::from_str(&response.body)
            .map_err(|e| ApiError::MalformedResponse(format!("Property list: {}", e)))?;

        let items = match envelope.data {
            Some(data @ Value::Array(_)) if envelope.status => data,
            _ => {
                return Err(ApiError::MalformedResponse(
                    "Property list envelope without status or data array".to_string(),
                ))
            }
        };

        let properties: Vec<Property> = serde_json::from_value(items)
            .map_err(|e| ApiError::MalformedResponse(format!("Property record: {}", e)))?;

        log::info!("🏠 [API] {} properties received", properties.len());
        Ok(properties)
    }
}

impl TokenStatus {
    /// Maps anything but `Valid` onto the matching error
    pub fn require_valid(self) -> Result<(), ApiError> {
        match self {
            TokenStatus::Valid => Ok(()),
            TokenStatus::Invalid => Err(ApiError::TokenInvalid),
            TokenStatus::Unknown => Err(ApiError::EndpointMissing),
        }
    }
}

fn server_message(response: &HttpResponse) -> Option<String> {
    serde_json::from_str::<Envelope<Value>>(&response.body)
        .ok()
        .and_then(|envelope| envelope.message().map(str::to_string))
}
