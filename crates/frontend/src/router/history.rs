//! Browser history driver.
//!
//! Every navigation goes resolve → guard → commit. The guard runs before the
//! address bar or the current-route signal change, so a cancelled navigation
//! never renders the target view.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::window;

use super::guard::NavigationDecision;
use super::matcher::{ResolvedRoute, RouteTable};
use crate::store::AppStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HistoryMode {
    Push,
    Replace,
    /// The browser already moved (back/forward button).
    Pop,
}

#[derive(Clone, Copy)]
pub struct Router {
    table: StoredValue<RouteTable>,
    current: RwSignal<Option<ResolvedRoute>>,
    store: AppStore,
    home_path: StoredValue<String>,
}

impl Router {
    pub fn new(table: RouteTable, store: AppStore) -> Self {
        let home_path = table.path_of("home").unwrap_or("/").to_string();
        Self {
            table: StoredValue::new(table),
            current: RwSignal::new(None),
            store,
            home_path: StoredValue::new(home_path),
        }
    }

    /// Resolve the page URL and start listening to back/forward.
    /// Call once, after the router is in context.
    pub fn start(&self) {
        self.navigate(&location_url(), HistoryMode::Replace);

        let this = *self;
        let closure = Closure::wrap(Box::new(move |_event: web_sys::PopStateEvent| {
            this.navigate(&location_url(), HistoryMode::Pop);
        }) as Box<dyn FnMut(_)>);

        if let Some(w) = window() {
            if w
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref())
                .is_err()
            {
                log::warn!("router: failed to register popstate listener");
            }
        }
        // Lives for the whole page.
        closure.forget();
    }

    /// Current route, tracked.
    pub fn current(&self) -> Option<ResolvedRoute> {
        self.current.get()
    }

    pub fn path_of(&self, name: &str) -> Option<String> {
        self.table.with_value(|t| t.path_of(name).map(str::to_string))
    }

    pub fn push(&self, url: &str) -> NavigationDecision {
        self.navigate(url, HistoryMode::Push)
    }

    pub fn back(&self) {
        if let Some(history) = window().and_then(|w| w.history().ok()) {
            if history.back().is_err() {
                log::warn!("router: history.back failed");
            }
        }
    }

    fn navigate(&self, url: &str, mode: HistoryMode) -> NavigationDecision {
        let Some(route) = self.table.with_value(|t| t.resolve(url)) else {
            log::warn!("router: no route for '{}'", url);
            return NavigationDecision::Cancel {
                alert: String::new(),
            };
        };

        let decision = self.store.run_guard(&route);

        match &decision {
            NavigationDecision::Proceed => {
                log::debug!("router: {:?} -> {}", mode, route.full_path());
                match mode {
                    HistoryMode::Push => write_history(&route.full_path(), false),
                    HistoryMode::Replace => write_history(&route.full_path(), true),
                    // Redirects still have to show up in the address bar.
                    HistoryMode::Pop if route.redirected_from.is_some() => {
                        write_history(&route.full_path(), true)
                    }
                    HistoryMode::Pop => {}
                }
                self.current.set(Some(route));
            }
            NavigationDecision::Cancel { alert } => {
                show_alert(alert);
                let previous = self
                    .current
                    .with_untracked(|c| c.as_ref().map(ResolvedRoute::full_path));
                match previous {
                    // The browser already moved to the blocked entry; restore the URL.
                    Some(previous) if mode == HistoryMode::Pop => {
                        write_history(&previous, true)
                    }
                    Some(_) => {}
                    None => {
                        let home = self.home_path.get_value();
                        if route.path != home {
                            self.navigate(&home, HistoryMode::Replace);
                        }
                    }
                }
            }
        }

        decision
    }
}

pub fn use_router() -> Router {
    use_context::<Router>().expect("Router context not found")
}

fn location_url() -> String {
    let Some(w) = window() else {
        return "/".to_string();
    };
    let location = w.location();
    let path = location.pathname().unwrap_or_else(|_| "/".to_string());
    let search = location.search().unwrap_or_default();
    format!("{}{}", path, search)
}

fn write_history(url: &str, replace: bool) {
    let Some(history) = window().and_then(|w| w.history().ok()) else {
        return;
    };
    let result = if replace {
        history.replace_state_with_url(&JsValue::NULL, "", Some(url))
    } else {
        history.push_state_with_url(&JsValue::NULL, "", Some(url))
    };
    if result.is_err() {
        log::warn!("router: failed to write history entry '{}'", url);
    }
}

fn show_alert(message: &str) {
    if message.is_empty() {
        return;
    }
    if let Some(w) = window() {
        let _ = w.alert_with_message(message);
    }
}
