use contracts::shared::menu::MenuDescriptor;

/// Process-wide client state.
///
/// Reads go through [`super::getters`]; writes go through the mutation methods
/// below, usually via [`super::AppStore`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    pub is_desktop_platform: bool,
    pub menus: MenuDescriptor,
    /// Key of the active menu entry.
    pub active_menu: Option<String>,
    pub token: Option<String>,
    pub email: Option<String>,
    /// Profile image file name, relative to the configured image base.
    pub profile: Option<String>,
    pub user_hashtag: Vec<String>,
    pub alarm_value: bool,
    pub loading_status: bool,
    pub active_category: Option<String>,
    pub search_word: Option<String>,
    pub room_id: Option<String>,
}

impl AppState {
    pub fn new(menus: MenuDescriptor) -> Self {
        Self {
            menus,
            ..Self::default()
        }
    }

    /// Activate the menu entry at `index` in menu-table order.
    /// An index past the end clears the active menu.
    pub fn set_menu_active(&mut self, index: usize) {
        self.active_menu = self.menus.key_at(index).map(str::to_string);
    }

    pub fn set_is_desktop_platform(&mut self, value: bool) {
        self.is_desktop_platform = value;
    }

    pub fn set_token(&mut self, token: impl Into<String>) {
        self.token = Some(token.into());
    }

    pub fn clear_token(&mut self) {
        self.token = None;
    }

    pub fn set_email(&mut self, email: Option<String>) {
        self.email = email;
    }

    pub fn set_profile(&mut self, profile: Option<String>) {
        self.profile = profile;
    }

    pub fn set_user_hashtag(&mut self, hashtags: Vec<String>) {
        self.user_hashtag = hashtags;
    }

    pub fn set_alarm(&mut self, value: bool) {
        self.alarm_value = value;
    }

    pub fn set_loading_status(&mut self, value: bool) {
        self.loading_status = value;
    }

    pub fn set_active_category(&mut self, category: impl Into<String>) {
        self.active_category = Some(category.into());
    }

    pub fn set_search_word(&mut self, word: Option<String>) {
        self.search_word = word;
    }

    pub fn set_room_id(&mut self, room_id: Option<String>) {
        self.room_id = room_id;
    }
}
