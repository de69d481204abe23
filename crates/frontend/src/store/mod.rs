//! Shared client store.
//!
//! [`AppState`] is plain data so the getters and the navigation guard can be
//! exercised without a reactive runtime. [`AppStore`] wraps it in a signal and
//! is provided to the component tree as context.

pub mod getters;
pub mod state;

use contracts::shared::menu::MenuDescriptor;
use leptos::prelude::*;

pub use state::AppState;

use crate::router::guard::{before_each, NavigationDecision};
use crate::router::matcher::ResolvedRoute;
use crate::router::table::initial_menu_index;

#[derive(Clone, Copy)]
pub struct AppStore {
    pub state: RwSignal<AppState>,
}

impl AppStore {
    pub fn new(menus: MenuDescriptor) -> Self {
        Self {
            state: RwSignal::new(AppState::new(menus)),
        }
    }

    /// Set the active menu the way route-table construction used to leave it:
    /// on the last menu key that produces a route.
    pub fn init_active_menu(&self) {
        let index = self.state.with_untracked(|s| initial_menu_index(&s.menus));
        if let Some(index) = index {
            log::debug!("init_active_menu: index={}", index);
            self.set_menu_active(index);
        }
    }

    /// Run the navigation guard against the live state. A disposed store
    /// blocks navigation rather than skipping the login check.
    pub fn run_guard(&self, to: &ResolvedRoute) -> NavigationDecision {
        self.state
            .try_update(|state| before_each(to, state))
            .unwrap_or_else(|| {
                log::warn!("store is gone, blocking navigation");
                NavigationDecision::Cancel {
                    alert: String::new(),
                }
            })
    }

    /// Tracked read through one of the [`getters`].
    pub fn read<T>(&self, getter: impl FnOnce(&AppState) -> T) -> T {
        self.state.with(getter)
    }

    pub fn read_untracked<T>(&self, getter: impl FnOnce(&AppState) -> T) -> T {
        self.state.with_untracked(getter)
    }

    pub fn set_menu_active(&self, index: usize) {
        self.state.update(|s| s.set_menu_active(index));
    }

    pub fn set_is_desktop_platform(&self, value: bool) {
        self.state.update(|s| s.set_is_desktop_platform(value));
    }

    pub fn set_token(&self, token: String) {
        self.state.update(|s| s.set_token(token));
    }

    pub fn clear_token(&self) {
        self.state.update(AppState::clear_token);
    }

    pub fn set_email(&self, email: Option<String>) {
        self.state.update(|s| s.set_email(email));
    }

    pub fn set_profile(&self, profile: Option<String>) {
        self.state.update(|s| s.set_profile(profile));
    }

    pub fn set_user_hashtag(&self, hashtags: Vec<String>) {
        self.state.update(|s| s.set_user_hashtag(hashtags));
    }

    pub fn set_alarm(&self, value: bool) {
        self.state.update(|s| s.set_alarm(value));
    }

    pub fn set_loading_status(&self, value: bool) {
        self.state.update(|s| s.set_loading_status(value));
    }

    pub fn set_active_category(&self, category: String) {
        self.state.update(|s| s.set_active_category(category));
    }

    pub fn set_search_word(&self, word: Option<String>) {
        self.state.update(|s| s.set_search_word(word));
    }

    pub fn set_room_id(&self, room_id: Option<String>) {
        self.state.update(|s| s.set_room_id(room_id));
    }
}

pub fn use_store() -> AppStore {
    use_context::<AppStore>().expect("AppStore context not found")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::guard::LOGIN_REQUIRED_MESSAGE;

    fn route(name: &str) -> ResolvedRoute {
        ResolvedRoute {
            name: Some(name.to_string()),
            ..ResolvedRoute::default()
        }
    }

    #[test]
    fn test_run_guard_uses_live_state() {
        let owner = Owner::new();
        owner.set();

        let store = AppStore::new(MenuDescriptor::default());
        assert_eq!(
            store.run_guard(&route("history1")),
            NavigationDecision::Cancel {
                alert: LOGIN_REQUIRED_MESSAGE.to_string()
            }
        );

        store.set_token("token".to_string());
        assert_eq!(store.run_guard(&route("history1")), NavigationDecision::Proceed);

        store.run_guard(&route("pet"));
        assert_eq!(
            store.read_untracked(|s| s.active_category.clone()).as_deref(),
            Some("pet")
        );
    }

    #[test]
    fn test_disposed_store_blocks_navigation() {
        let owner = Owner::new();
        owner.set();

        let store = AppStore::new(MenuDescriptor::default());
        store.state.dispose();
        assert_eq!(
            store.run_guard(&route("home")),
            NavigationDecision::Cancel {
                alert: String::new()
            }
        );
    }
}
