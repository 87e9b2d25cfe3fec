// ============================================================================
// LISTING VIEWMODEL - Token check + property fetch
// ============================================================================
// CheckingToken -> NoToken | InvalidToken | VerificationUnavailable
//               -> FetchingProperties -> Loaded | FetchFailed
// ============================================================================

use crate::models::{Property, TokenStatus};
use crate::services::{ApiClient, ApiError, GlooTransport, HttpTransport, SessionStore};
use crate::state::{MountGeneration, Navigator, ReactiveState, Route};

pub const CHECKING_MESSAGE: &str = "Loading...";
pub const NO_TOKEN_MESSAGE: &str = "No token found. Please log in.";
pub const INVALID_TOKEN_MESSAGE: &str = "Token is invalid. Please log in again.";
pub const VERIFICATION_UNAVAILABLE_MESSAGE: &str =
    "Token verification is unavailable (endpoint not found). Please try again later.";
pub const FETCHING_MESSAGE: &str = "Token is valid. Fetching properties...";
pub const EMPTY_MESSAGE: &str = "No properties available.";
pub const VERIFICATION_FAILED_MESSAGE: &str = "Token verification failed. Please log in again.";
pub const UNEXPECTED_DATA_MESSAGE: &str = "Received unexpected data structure from API";

#[derive(Clone, Debug, PartialEq, Default)]
pub enum ListingState {
    #[default]
    CheckingToken,
    NoToken,
    InvalidToken,
    /// `/user/check` is missing; not the same thing as a bad token
    VerificationUnavailable,
    FetchingProperties,
    Loaded(Vec<Property>),
    FetchFailed(String),
}

impl ListingState {
    /// Text shown instead of the list, if any
    pub fn message(&self) -> Option<&str> {
        match self {
            ListingState::CheckingToken => Some(CHECKING_MESSAGE),
            ListingState::NoToken => Some(NO_TOKEN_MESSAGE),
            ListingState::InvalidToken => Some(INVALID_TOKEN_MESSAGE),
            ListingState::VerificationUnavailable => Some(VERIFICATION_UNAVAILABLE_MESSAGE),
            ListingState::FetchingProperties => Some(FETCHING_MESSAGE),
            ListingState::Loaded(properties) if properties.is_empty() => Some(EMPTY_MESSAGE),
            ListingState::Loaded(_) => None,
            ListingState::FetchFailed(message) => Some(message.as_str()),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(
            self,
            ListingState::InvalidToken
                | ListingState::VerificationUnavailable
                | ListingState::FetchFailed(_)
        )
    }

    pub fn properties(&self) -> &[Property] {
        match self {
            ListingState::Loaded(properties) => properties.as_slice(),
            _ => &[],
        }
    }
}

pub struct ListingViewModel<T: HttpTransport = GlooTransport> {
    api: ApiClient<T>,
    session: SessionStore,
    navigate: Navigator,
    state: ReactiveState<ListingState>,
    generation: MountGeneration,
}

impl<T: HttpTransport> ListingViewModel<T> {
    pub fn new(api: ApiClient<T>, session: SessionStore, navigate: Navigator) -> Self {
        Self {
            api,
            session,
            navigate,
            state: ReactiveState::new(ListingState::default()),
            generation: MountGeneration::new(),
        }
    }

    pub fn state(&self) -> &ReactiveState<ListingState> {
        &self.state
    }

    /// Runs the full check on mount
    pub async fn load(&self) {
        let mount = self.generation.current();
        self.state.set(ListingState::CheckingToken);

        let Some(token) = self.session.read() else {
            log::warn!("⚠️ [LISTING] No token stored, redirecting to login");
            self.state.set(ListingState::NoToken);
            (self.navigate)(Route::Login);
            return;
        };

        let verified = self.api.verify(&token).await.and_then(TokenStatus::require_valid);
        if !self.generation.is_current(mount) {
            return;
        }

        match verified {
            Ok(()) => {}
            Err(ApiError::TokenInvalid) => {
                log::warn!("⚠️ [LISTING] Token rejected, clearing session");
                self.session.clear();
                self.state.set(ListingState::InvalidToken);
                return;
            }
            Err(ApiError::EndpointMissing) => {
                self.state.set(ListingState::VerificationUnavailable);
                return;
            }
            Err(e) => {
                log::error!("❌ [LISTING] Token verification error: {}", e);
                self.state.set(ListingState::FetchFailed(VERIFICATION_FAILED_MESSAGE.to_string()));
                return;
            }
        }

        self.state.set(ListingState::FetchingProperties);
        let result = self.api.list_properties(&token).await;
        if !self.generation.is_current(mount) {
            return;
        }

        match result {
            Ok(properties) => {
                log::info!("✅ [LISTING] {} properties loaded", properties.len());
                self.state.set(ListingState::Loaded(properties));
            }
            Err(e) => {
                log::error!("❌ [LISTING] {}", e);
                self.state.set(ListingState::FetchFailed(fetch_error_message(&e)));
            }
        }
    }

    pub fn logout(&self) {
        log::info!("👋 [LISTING] Logout");
        self.generation.invalidate();
        self.session.clear();
        (self.navigate)(Route::Login);
    }

    pub fn dispose(&self) {
        self.generation.invalidate();
    }
}

fn fetch_error_message(error: &ApiError) -> String {
    match error {
        ApiError::Http { message, .. } => message.clone(),
        ApiError::MalformedResponse(_) => UNEXPECTED_DATA_MESSAGE.to_string(),
        ApiError::Network(detail) => format!("Failed to fetch properties: {}", detail),
        other => format!("Failed to fetch properties: {}", other),
    }
}
