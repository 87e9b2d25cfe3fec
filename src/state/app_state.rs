// ============================================================================
// APP STATE - Route + session shared by the whole application
// ============================================================================

use std::rc::Rc;

use crate::services::SessionStore;
use crate::state::ReactiveState;

/// Screens reachable in the app
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    Login,
    Properties,
}

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Route::Login => "/",
            Route::Properties => "/properties",
        }
    }

    /// Unknown paths land on the login screen
    pub fn from_path(path: &str) -> Self {
        match path.trim_end_matches('/') {
            "/properties" | "/home" => Route::Properties,
            _ => Route::Login,
        }
    }
}

/// Callback used by viewmodels to change screen
pub type Navigator = Rc<dyn Fn(Route)>;

#[derive(Clone)]
pub struct AppState {
    pub route: ReactiveState<Route>,
    pub session: SessionStore,
}

impl AppState {
    pub fn new(session: SessionStore, initial: Route) -> Self {
        Self {
            route: ReactiveState::new(initial),
            session,
        }
    }

    pub fn current_route(&self) -> Route {
        self.route.get()
    }

    /// Switch screen; subscribers fire only on an actual change
    pub fn navigate(&self, route: Route) {
        if self.current_route() == route {
            return;
        }
        log::info!("🧭 [APP] Navigating to {}", route.path());
        self.route.set(route);
    }

    pub fn subscribe_to_changes<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.route.subscribe(callback);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn route_paths_round_trip() {
        assert_eq!(Route::from_path(Route::Login.path()), Route::Login);
        assert_eq!(Route::from_path(Route::Properties.path()), Route::Properties);
        assert_eq!(Route::from_path("/properties/"), Route::Properties);
        assert_eq!(Route::from_path("/home"), Route::Properties);
        assert_eq!(Route::from_path("/whatever"), Route::Login);
    }

    #[test]
    fn navigate_notifies_only_on_change() {
        let state = AppState::new(SessionStore::in_memory(), Route::Login);
        let changes = Rc::new(Cell::new(0));
        {
            let changes = Rc::clone(&changes);
            state.subscribe_to_changes(move || changes.set(changes.get() + 1));
        }

        state.navigate(Route::Login);
        state.navigate(Route::Properties);
        state.navigate(Route::Properties);

        assert_eq!(state.current_route(), Route::Properties);
        assert_eq!(changes.get(), 1);
    }
}
