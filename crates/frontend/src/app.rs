use contracts::shared::menu::MenuDescriptor;
use leptos::prelude::*;

use crate::config::{is_desktop_platform, AppConfig};
use crate::router::matcher::RouteTable;
use crate::router::table::build_routes;
use crate::router::Router;
use crate::routes::routes::AppRoutes;
use crate::store::AppStore;

const MENU_JSON: &str = include_str!("../menu.json");

fn load_menu() -> MenuDescriptor {
    match MenuDescriptor::from_json(MENU_JSON) {
        Ok(menu) => menu,
        Err(e) => {
            log::error!("{:#}", e);
            MenuDescriptor::default()
        }
    }
}

#[component]
pub fn App() -> impl IntoView {
    let menu = load_menu();
    let table = RouteTable::new(&build_routes(&menu));

    // Provide the shared store to the whole app via context.
    let store = AppStore::new(menu);
    store.init_active_menu();
    store.set_is_desktop_platform(is_desktop_platform());
    provide_context(store);

    provide_context(AppConfig::load());
    provide_context(Router::new(table, store));

    view! {
        <AppRoutes />
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::guard::{before_each, NavigationDecision, LOGIN_REQUIRED_MESSAGE};
    use crate::router::table::initial_menu_index;
    use crate::store::AppState;

    fn bundled_table() -> RouteTable {
        RouteTable::new(&build_routes(&load_menu()))
    }

    fn navigate(table: &RouteTable, url: &str, state: &mut AppState) -> NavigationDecision {
        let route = table.resolve(url).unwrap();
        before_each(&route, state)
    }

    #[test]
    fn test_bundled_menu_parses() {
        let menu = MenuDescriptor::from_json(MENU_JSON).unwrap();
        let keys: Vec<&str> = menu.keys().collect();
        assert_eq!(
            keys,
            vec!["home", "category", "mypage", "search-result", "about-us", "logout"]
        );
        assert_eq!(initial_menu_index(&menu), Some(4));
    }

    #[test]
    fn test_bundled_menu_routes() {
        let table = RouteTable::new(&build_routes(&load_menu()));
        let route = table.resolve("/search-result/festival").unwrap();
        assert_eq!(route.param("searchword"), Some("festival"));
        assert_eq!(table.resolve("/logout").unwrap().name(), Some("error"));
    }

    #[test]
    fn test_bundled_mypage_requires_login() {
        let table = bundled_table();
        let mut state = AppState::new(load_menu());

        assert_eq!(
            navigate(&table, "/mypage/keyword", &mut state),
            NavigationDecision::Cancel {
                alert: LOGIN_REQUIRED_MESSAGE.to_string()
            }
        );

        state.set_token("token".to_string());
        assert_eq!(
            navigate(&table, "/mypage/keyword", &mut state),
            NavigationDecision::Proceed
        );
    }

    #[test]
    fn test_bundled_category_sets_active_category() {
        let table = bundled_table();
        let mut state = AppState::new(load_menu());

        assert_eq!(
            navigate(&table, "/category/sports", &mut state),
            NavigationDecision::Proceed
        );
        assert_eq!(state.active_category.as_deref(), Some("sports"));
    }

    #[test]
    fn test_bundled_search_word_from_query() {
        let table = bundled_table();
        let mut state = AppState::new(load_menu());

        let route = table.resolve("/search-result?searchword=jazz%20bar").unwrap();
        assert_eq!(route.name(), Some("search-result"));
        assert_eq!(before_each(&route, &mut state), NavigationDecision::Proceed);
        assert_eq!(state.search_word.as_deref(), Some("jazz bar"));

        navigate(&table, "/search-result/festival", &mut state);
        assert_eq!(state.search_word.as_deref(), Some("festival"));
    }
}
