// ============================================================================
// LOGIN VIEWMODEL - Idle -> Submitting -> (Navigated | Idle + error)
// ============================================================================

use std::cell::RefCell;

use crate::models::Credentials;
use crate::services::{ApiClient, ApiError, GlooTransport, HttpTransport, SessionStore};
use crate::state::{MountGeneration, Navigator, ReactiveState, Route};

pub const MISSING_FIELDS_MESSAGE: &str = "Please fill in all fields.";
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid email or password.";
pub const UNREACHABLE_MESSAGE: &str = "Unable to reach the server. Please try again.";
pub const LOGIN_FAILED_MESSAGE: &str = "Login failed. Please try again.";
pub const STORAGE_FAILED_MESSAGE: &str = "Could not save your session. Please check your browser storage settings.";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LoginPhase {
    #[default]
    Idle,
    Submitting,
    Navigated,
}

#[derive(Clone, Debug, PartialEq, Default)]
pub struct LoginState {
    pub phase: LoginPhase,
    pub error: Option<String>,
}

pub struct LoginViewModel<T: HttpTransport = GlooTransport> {
    api: ApiClient<T>,
    session: SessionStore,
    navigate: Navigator,
    state: ReactiveState<LoginState>,
    // Typing does not notify, so a re-render never eats keystrokes
    form: RefCell<Credentials>,
    generation: MountGeneration,
}

impl<T: HttpTransport> LoginViewModel<T> {
    pub fn new(api: ApiClient<T>, session: SessionStore, navigate: Navigator) -> Self {
        Self {
            api,
            session,
            navigate,
            state: ReactiveState::new(LoginState::default()),
            form: RefCell::new(Credentials::default()),
            generation: MountGeneration::new(),
        }
    }

    pub fn state(&self) -> &ReactiveState<LoginState> {
        &self.state
    }

    pub fn is_submitting(&self) -> bool {
        self.state.with(|s| s.phase == LoginPhase::Submitting)
    }

    pub fn set_email(&self, email: String) {
        self.form.borrow_mut().email = email;
    }

    pub fn set_password(&self, password: String) {
        self.form.borrow_mut().password = password;
    }

    pub fn email(&self) -> String {
        self.form.borrow().email.clone()
    }

    pub fn password(&self) -> String {
        self.form.borrow().password.clone()
    }

    pub async fn submit(&self) {
        if self.is_submitting() {
            log::warn!("⚠️ [LOGIN] Submit ignored, a login is already in flight");
            return;
        }

        let credentials = {
            let form = self.form.borrow();
            Credentials::new(form.email.trim(), form.password.clone())
        };

        if !credentials.is_complete() {
            self.state.set(LoginState {
                phase: LoginPhase::Idle,
                error: Some(MISSING_FIELDS_MESSAGE.to_string()),
            });
            return;
        }

        let mount = self.generation.current();
        self.state.set(LoginState {
            phase: LoginPhase::Submitting,
            error: None,
        });

        log::info!("🔐 [LOGIN] Submitting credentials...");
        let result = self.api.login(&credentials).await;

        if !self.generation.is_current(mount) {
            log::debug!("[LOGIN] Screen disposed, dropping login result");
            return;
        }

        let data = match result {
            Ok(data) => data,
            Err(e) => {
                log::error!("❌ [LOGIN] {}", e);
                self.fail(login_error_message(&e));
                return;
            }
        };

        if let Err(e) = self.session.save(&data.access_token) {
            log::error!("❌ [LOGIN] Error storing token: {}", e);
            self.fail(STORAGE_FAILED_MESSAGE);
            return;
        }

        self.form.borrow_mut().password.clear();
        self.state.set(LoginState {
            phase: LoginPhase::Navigated,
            error: None,
        });
        log::info!("✅ [LOGIN] Logged in, opening property list");
        (self.navigate)(Route::Properties);
    }

    /// Called when the screen goes away; pending work is discarded
    pub fn dispose(&self) {
        self.generation.invalidate();
    }

    fn fail(&self, message: &str) {
        self.state.set(LoginState {
            phase: LoginPhase::Idle,
            error: Some(message.to_string()),
        });
    }
}

fn login_error_message(error: &ApiError) -> &'static str {
    match error {
        ApiError::Authentication(_) => INVALID_CREDENTIALS_MESSAGE,
        ApiError::Network(_) => UNREACHABLE_MESSAGE,
        _ => LOGIN_FAILED_MESSAGE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::http::mock::MockTransport;
    use crate::services::session_store::tests::BrokenStorage;
    use futures::executor::block_on;
    use std::rc::Rc;

    struct Fixture {
        vm: Rc<LoginViewModel<MockTransport>>,
        transport: Rc<MockTransport>,
        session: SessionStore,
        routes: Rc<RefCell<Vec<Route>>>,
    }

    fn fixture_with(session: SessionStore) -> Fixture {
        let transport = Rc::new(MockTransport::new());
        let routes = Rc::new(RefCell::new(Vec::new()));
        let navigate: Navigator = {
            let routes = Rc::clone(&routes);
            Rc::new(move |route| routes.borrow_mut().push(route))
        };
        let api = ApiClient::with_transport("https://portal.test/api/v1", Rc::clone(&transport));
        let vm = Rc::new(LoginViewModel::new(api, session.clone(), navigate));
        Fixture { vm, transport, session, routes }
    }

    fn fixture() -> Fixture {
        fixture_with(SessionStore::in_memory())
    }

    const ACCEPTED: &str = r#"{"status":true,"message":"ok","data":{"accessToken":"tok-9","role":1,"userId":3}}"#;

    #[test]
    fn accepted_credentials_store_token_and_navigate_once() {
        let f = fixture();
        f.transport.respond(200, ACCEPTED);
        f.vm.set_email("  guest@imah.com ".to_string());
        f.vm.set_password("pw".to_string());

        block_on(f.vm.submit());

        assert_eq!(f.session.read().as_deref(), Some("tok-9"));
        assert_eq!(*f.routes.borrow(), vec![Route::Properties]);
        assert_eq!(f.vm.state().get(), LoginState { phase: LoginPhase::Navigated, error: None });

        let body = f.transport.requests()[0].body.clone().unwrap();
        assert!(body.contains(r#""email":"guest@imah.com""#));
    }

    #[test]
    fn rejected_credentials_show_error_without_token_or_navigation() {
        for (status, body) in [
            (200, r#"{"status":false,"message":"Invalid password"}"#),
            (401, r#"{"status":false,"message":"Unauthorized"}"#),
        ] {
            let f = fixture();
            f.transport.respond(status, body);
            f.vm.set_email("guest@imah.com".to_string());
            f.vm.set_password("bad".to_string());

            block_on(f.vm.submit());

            let state = f.vm.state().get();
            assert_eq!(state.phase, LoginPhase::Idle);
            assert_eq!(state.error.as_deref(), Some(INVALID_CREDENTIALS_MESSAGE));
            assert_eq!(f.session.read(), None);
            assert!(f.routes.borrow().is_empty());
        }
    }

    #[test]
    fn network_failure_is_reported() {
        let f = fixture();
        f.transport.fail(ApiError::Network("connection refused".to_string()));
        f.vm.set_email("guest@imah.com".to_string());
        f.vm.set_password("pw".to_string());

        block_on(f.vm.submit());

        assert_eq!(f.vm.state().get().error.as_deref(), Some(UNREACHABLE_MESSAGE));
        assert!(f.routes.borrow().is_empty());
    }

    #[test]
    fn missing_fields_never_hit_the_api() {
        let f = fixture();
        f.vm.set_email("guest@imah.com".to_string());

        block_on(f.vm.submit());

        assert_eq!(f.vm.state().get().error.as_deref(), Some(MISSING_FIELDS_MESSAGE));
        assert!(f.transport.requests().is_empty());
    }

    #[test]
    fn overlapping_submits_send_one_request() {
        let f = fixture();
        f.transport.respond(200, ACCEPTED);
        let release = f.transport.hold();
        f.vm.set_email("guest@imah.com".to_string());
        f.vm.set_password("pw".to_string());

        let first = f.vm.submit();
        let second = async {
            // First submit is parked on the pending request by now
            assert!(f.vm.is_submitting());
            f.vm.submit().await;
            assert_eq!(f.transport.requests().len(), 1);
            let _ = release.send(());
        };
        block_on(async { futures::join!(first, second) });

        assert_eq!(f.transport.requests().len(), 1);
        assert_eq!(*f.routes.borrow(), vec![Route::Properties]);
        assert_eq!(f.session.read().as_deref(), Some("tok-9"));
        assert_eq!(f.vm.state().get().phase, LoginPhase::Navigated);
    }

    #[test]
    fn error_clears_on_next_attempt() {
        let f = fixture();
        f.transport
            .respond(200, r#"{"status":false,"message":"nope"}"#)
            .respond(200, ACCEPTED);
        f.vm.set_email("guest@imah.com".to_string());
        f.vm.set_password("pw".to_string());

        block_on(f.vm.submit());
        assert!(f.vm.state().get().error.is_some());

        block_on(f.vm.submit());
        assert_eq!(f.vm.state().get().error, None);
        assert_eq!(f.routes.borrow().len(), 1);
    }

    #[test]
    fn storage_failure_keeps_user_on_login() {
        let f = fixture_with(SessionStore::new(Rc::new(BrokenStorage), "accessToken"));
        f.transport.respond(200, ACCEPTED);
        f.vm.set_email("guest@imah.com".to_string());
        f.vm.set_password("pw".to_string());

        block_on(f.vm.submit());

        assert_eq!(f.vm.state().get().error.as_deref(), Some(STORAGE_FAILED_MESSAGE));
        assert!(f.routes.borrow().is_empty());
    }

    #[test]
    fn result_after_dispose_is_dropped() {
        let f = fixture();
        f.transport.respond(200, ACCEPTED);
        f.vm.set_email("guest@imah.com".to_string());
        f.vm.set_password("pw".to_string());

        // Dispose as soon as the request leaves, before the response is handled
        {
            let vm = Rc::clone(&f.vm);
            let disposed = Rc::new(std::cell::Cell::new(false));
            let flag = Rc::clone(&disposed);
            f.vm.state().subscribe(move || {
                if vm.is_submitting() && !flag.get() {
                    flag.set(true);
                    vm.dispose();
                }
            });
        }

        block_on(f.vm.submit());

        assert_eq!(f.session.read(), None);
        assert!(f.routes.borrow().is_empty());
    }
}
