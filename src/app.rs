// ============================================================================
// APP - Screen mounting + full re-render on state change
// ============================================================================

use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{append_child, current_path, get_element_by_id, push_path, set_inner_html, Listeners};
use crate::services::{ApiClient, SessionStore};
use crate::state::{AppState, Navigator, Route};
use crate::utils::constants::APP_ROOT_ID;
use crate::viewmodels::{ListingViewModel, LoginViewModel};
use crate::views::{render_login, render_property_list};

/// The mounted screen and its viewmodel
enum Screen {
    Login(Rc<LoginViewModel>),
    Listing(Rc<ListingViewModel>),
}

impl Screen {
    fn route(&self) -> Route {
        match self {
            Screen::Login(_) => Route::Login,
            Screen::Listing(_) => Route::Properties,
        }
    }

    fn dispose(&self) {
        match self {
            Screen::Login(vm) => vm.dispose(),
            Screen::Listing(vm) => vm.dispose(),
        }
    }
}

pub struct App {
    state: AppState,
    root: Element,
    screen: Option<Screen>,
    // Handlers of the DOM currently under `root`
    listeners: Listeners,
}

impl App {
    pub fn new() -> Result<Self, JsValue> {
        let root = get_element_by_id(APP_ROOT_ID)
            .ok_or_else(|| JsValue::from_str("No #app element found"))?;

        let state = AppState::new(SessionStore::browser(), Route::from_path(&current_path()));

        // Batch route changes into one render on the next tick
        state.subscribe_to_changes(schedule_rerender);

        Ok(Self {
            state,
            root,
            screen: None,
            listeners: Listeners::new(),
        })
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn render(&mut self) -> Result<(), JsValue> {
        let route = self.state.current_route();
        if self.screen.as_ref().map(Screen::route) != Some(route) {
            self.mount(route);
        }

        let mut listeners = Listeners::new();
        let view = match &self.screen {
            Some(Screen::Login(vm)) => render_login(vm, &mut listeners)?,
            Some(Screen::Listing(vm)) => render_property_list(vm, &mut listeners)?,
            None => return Ok(()),
        };

        set_inner_html(&self.root, "");
        append_child(&self.root, &view)?;

        // Old DOM is detached now, so its handlers can go (and the
        // viewmodel Rcs they hold with them)
        self.listeners = listeners;
        Ok(())
    }

    /// Swap the screen: the old viewmodel is disposed so its in-flight
    /// requests can no longer touch state
    fn mount(&mut self, route: Route) {
        if let Some(previous) = self.screen.take() {
            previous.dispose();
        }

        if let Err(e) = push_path(route.path()) {
            log::warn!("⚠️ [APP] Could not update history: {:?}", e);
        }

        let api = ApiClient::new();
        let session = self.state.session.clone();
        let navigate = self.navigator();

        let screen = match route {
            Route::Login => {
                let vm = Rc::new(LoginViewModel::new(api, session, navigate));
                vm.state().subscribe(schedule_rerender);
                Screen::Login(vm)
            }
            Route::Properties => {
                let vm = Rc::new(ListingViewModel::new(api, session, navigate));
                vm.state().subscribe(schedule_rerender);
                let loader = Rc::clone(&vm);
                spawn_local(async move {
                    loader.load().await;
                });
                Screen::Listing(vm)
            }
        };

        log::info!("🎬 [APP] Mounted {}", route.path());
        self.screen = Some(screen);
    }

    fn navigator(&self) -> Navigator {
        let state = self.state.clone();
        Rc::new(move |route| state.navigate(route))
    }
}

fn schedule_rerender() {
    Timeout::new(0, crate::rerender_app).forget();
}
