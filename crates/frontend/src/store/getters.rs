//! Read-only accessors over [`AppState`].
//!
//! Every function here is a plain read: no mutation, no validation.

use contracts::shared::menu::MenuDescriptor;

use super::state::AppState;
use crate::config::AppConfig;

pub fn get_is_desktop_platform(state: &AppState) -> bool {
    state.is_desktop_platform
}

pub fn get_menus(state: &AppState) -> &MenuDescriptor {
    &state.menus
}

/// Position of the active menu key among the menu-table keys.
/// `None` when no menu is active or the active key is not in the table.
pub fn get_active_menu_index(state: &AppState) -> Option<usize> {
    let active = state.active_menu.as_deref()?;
    state.menus.keys().position(|key| key == active)
}

pub fn get_token(state: &AppState) -> Option<&str> {
    state.token.as_deref()
}

pub fn get_email(state: &AppState) -> Option<&str> {
    state.email.as_deref()
}

/// URL of the user's profile image under the configured image base.
pub fn get_profile(state: &AppState, config: &AppConfig) -> Option<String> {
    state
        .profile
        .as_deref()
        .map(|file| config.profile_image_url(file))
}

pub fn get_user_hashtag(state: &AppState) -> &[String] {
    &state.user_hashtag
}

pub fn get_user_hashtag_length(state: &AppState) -> usize {
    state.user_hashtag.len()
}

pub fn get_alarm(state: &AppState) -> bool {
    state.alarm_value
}

pub fn get_loading_status(state: &AppState) -> bool {
    state.loading_status
}

pub fn get_active_category(state: &AppState) -> Option<&str> {
    state.active_category.as_deref()
}

pub fn get_search_word(state: &AppState) -> Option<&str> {
    state.search_word.as_deref()
}

/// Id of the room the user is entering.
pub fn get_room_id(state: &AppState) -> Option<&str> {
    state.room_id.as_deref()
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::menu::MenuEntry;

    fn state() -> AppState {
        AppState::new(MenuDescriptor::new(vec![
            ("home".to_string(), MenuEntry::new("/")),
            ("category".to_string(), MenuEntry::new("/category")),
            ("mypage".to_string(), MenuEntry::new("/mypage")),
            ("logout".to_string(), MenuEntry::new("/logout")),
        ]))
    }

    #[test]
    fn test_active_menu_index() {
        let mut state = state();
        assert_eq!(get_active_menu_index(&state), None);

        state.active_menu = Some("mypage".to_string());
        assert_eq!(get_active_menu_index(&state), Some(2));

        state.active_menu = Some("unknown".to_string());
        assert_eq!(get_active_menu_index(&state), None);
    }

    #[test]
    fn test_hashtags() {
        let mut state = state();
        assert_eq!(get_user_hashtag_length(&state), 0);
        state.set_user_hashtag(vec!["music".to_string(), "pet".to_string()]);
        assert_eq!(get_user_hashtag(&state), ["music", "pet"]);
        assert_eq!(get_user_hashtag_length(&state), 2);
    }

    #[test]
    fn test_profile_uses_configured_base() {
        let mut state = state();
        let config = AppConfig::new("https://cdn.example.com/images/users/");
        assert_eq!(get_profile(&state, &config), None);

        state.set_profile(Some("me.png".to_string()));
        assert_eq!(
            get_profile(&state, &config).as_deref(),
            Some("https://cdn.example.com/images/users/me.png")
        );
    }

    #[test]
    fn test_verbatim_reads() {
        let mut state = state();
        state.set_token("t0k3n");
        state.set_email(Some("user@babble.io".to_string()));
        state.set_alarm(true);
        state.set_loading_status(true);
        state.set_is_desktop_platform(true);
        state.set_active_category("game");
        state.set_search_word(Some("jazz".to_string()));
        state.set_room_id(Some("room-42".to_string()));

        assert_eq!(get_token(&state), Some("t0k3n"));
        assert_eq!(get_email(&state), Some("user@babble.io"));
        assert!(get_alarm(&state));
        assert!(get_loading_status(&state));
        assert!(get_is_desktop_platform(&state));
        assert_eq!(get_active_category(&state), Some("game"));
        assert_eq!(get_search_word(&state), Some("jazz"));
        assert_eq!(get_room_id(&state), Some("room-42"));
        assert_eq!(get_menus(&state).len(), 4);
    }
}
