//! Route table built from the menu descriptor.
//!
//! Menu keys map to views through a fixed lookup; a few routes that never
//! appear in the menu (conference detail, error page, OAuth callbacks and the
//! catch-all) are appended after them. The catch-all is always last.

use contracts::shared::category::CATEGORIES;
use contracts::shared::menu::{MenuDescriptor, LOGOUT_KEY};

use crate::views::ViewKind;

pub const CONFERENCE_DETAIL: &str = "conference-detail";
pub const ERROR: &str = "error";
pub const ERROR_PATH: &str = "/error";

/// OAuth provider callbacks. They render nothing; they only have to match so
/// the provider redirect does not fall through to the error page.
pub const KAKAO_CALLBACK_PATH: &str = "/oauth/:pathMatch(.*)*";
pub const GOOGLE_CALLBACK_PATH: &str = "/login/oauth2/code/google/:pathMatch(.*)*";
pub const CATCH_ALL_PATH: &str = "/:pathMatch(.*)*";

/// Children of the my page route, all of which require login.
pub const MYPAGE_CHILDREN: [(&str, ViewKind); 4] = [
    ("keyword", ViewKind::Keyword),
    ("history1", ViewKind::History1),
    ("history2", ViewKind::History2),
    ("user-info", ViewKind::UserInfo),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteDescriptor {
    /// Path pattern. Child paths are relative to their parent.
    pub path: String,
    pub name: Option<String>,
    pub view: Option<ViewKind>,
    pub redirect: Option<String>,
    pub children: Vec<RouteDescriptor>,
}

impl RouteDescriptor {
    pub fn new(path: impl Into<String>, name: impl Into<String>, view: ViewKind) -> Self {
        Self {
            path: path.into(),
            name: Some(name.into()),
            view: Some(view),
            redirect: None,
            children: Vec::new(),
        }
    }

    /// A route that matches but renders nothing.
    pub fn passthrough(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            name: None,
            view: None,
            redirect: None,
            children: Vec::new(),
        }
    }

    pub fn redirect(path: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            redirect: Some(to.into()),
            ..Self::passthrough(path)
        }
    }

    pub fn with_children(mut self, children: Vec<RouteDescriptor>) -> Self {
        self.children = children;
        self
    }
}

/// Menu index of a routed menu key.
pub fn menu_index(key: &str) -> Option<usize> {
    match key {
        "home" => Some(0),
        "category" => Some(1),
        "mypage" => Some(2),
        "search-result" => Some(3),
        "about-us" => Some(4),
        _ => None,
    }
}

/// Active menu index after startup: that of the last routed key in the menu.
pub fn initial_menu_index(menu: &MenuDescriptor) -> Option<usize> {
    menu.keys().filter_map(menu_index).last()
}

fn category_children() -> Vec<RouteDescriptor> {
    CATEGORIES
        .iter()
        .map(|c| RouteDescriptor::new(*c, *c, ViewKind::CategoryResult))
        .collect()
}

fn mypage_children() -> Vec<RouteDescriptor> {
    MYPAGE_CHILDREN
        .iter()
        .map(|(name, view)| RouteDescriptor::new(*name, *name, *view))
        .collect()
}

fn route_for_menu(key: &str, path: &str) -> Option<RouteDescriptor> {
    let route = match key {
        "home" => RouteDescriptor::new(path, key, ViewKind::Home),
        "category" => RouteDescriptor::new(path, key, ViewKind::Category)
            .with_children(category_children()),
        "mypage" => {
            RouteDescriptor::new(path, key, ViewKind::MyPage).with_children(mypage_children())
        }
        "search-result" => RouteDescriptor::new(path, key, ViewKind::SearchResult),
        "about-us" => RouteDescriptor::new(path, key, ViewKind::AboutUs),
        _ => return None,
    };
    Some(route)
}

/// Build the full, ordered route table.
pub fn build_routes(menu: &MenuDescriptor) -> Vec<RouteDescriptor> {
    let mut routes: Vec<RouteDescriptor> = menu
        .iter()
        .filter_map(|(key, entry)| {
            let route = route_for_menu(key, &entry.path);
            if route.is_none() && key != LOGOUT_KEY {
                log::warn!("menu key '{}' has no route, skipping", key);
            }
            route
        })
        .collect();

    routes.push(RouteDescriptor::new(
        "/conferences/:conferenceId",
        CONFERENCE_DETAIL,
        ViewKind::ConferenceDetail,
    ));
    routes.push(RouteDescriptor::new(ERROR_PATH, ERROR, ViewKind::ErrorPage));
    routes.push(RouteDescriptor::passthrough(KAKAO_CALLBACK_PATH));
    routes.push(RouteDescriptor::passthrough(GOOGLE_CALLBACK_PATH));
    routes.push(RouteDescriptor::redirect(CATCH_ALL_PATH, ERROR_PATH));

    routes
}
