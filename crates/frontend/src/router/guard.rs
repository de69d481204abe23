//! Pre-navigation guard.
//!
//! Runs before a navigation is committed and returns exactly one decision.
//! Besides the login check it mirrors the target's category and search word
//! into the store.

use contracts::shared::category::is_category;

use super::matcher::ResolvedRoute;
use crate::store::getters::get_token;
use crate::store::AppState;

/// Route names that need a logged-in user.
pub const PROTECTED_ROUTES: [&str; 4] = ["keyword", "history1", "history2", "user-info"];

pub const SEARCH_RESULT: &str = "search-result";
pub const SEARCH_WORD_PARAM: &str = "searchword";

pub const LOGIN_REQUIRED_MESSAGE: &str = "로그인이 필요한 페이지입니다.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationDecision {
    Proceed,
    /// Stay where we are and tell the user why.
    Cancel { alert: String },
}

pub fn requires_auth(name: &str) -> bool {
    PROTECTED_ROUTES.contains(&name)
}

pub fn before_each(to: &ResolvedRoute, state: &mut AppState) -> NavigationDecision {
    let Some(name) = to.name() else {
        return NavigationDecision::Proceed;
    };

    let decision = if requires_auth(name) && get_token(state).is_none() {
        log::info!("navigation to '{}' blocked: not logged in", name);
        NavigationDecision::Cancel {
            alert: LOGIN_REQUIRED_MESSAGE.to_string(),
        }
    } else {
        NavigationDecision::Proceed
    };

    if is_category(name) {
        state.set_active_category(name);
    }

    if name == SEARCH_RESULT {
        let word = to
            .param(SEARCH_WORD_PARAM)
            .or_else(|| to.query(SEARCH_WORD_PARAM))
            .map(str::to_string);
        state.set_search_word(word);
    }

    decision
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn route(name: &str) -> ResolvedRoute {
        ResolvedRoute {
            name: Some(name.to_string()),
            ..ResolvedRoute::default()
        }
    }

    #[test]
    fn test_protected_without_token_is_cancelled() {
        let mut state = AppState::default();
        for name in PROTECTED_ROUTES {
            assert_eq!(
                before_each(&route(name), &mut state),
                NavigationDecision::Cancel {
                    alert: LOGIN_REQUIRED_MESSAGE.to_string()
                }
            );
        }
    }

    #[test]
    fn test_protected_with_token_proceeds() {
        let mut state = AppState::default();
        state.set_token("token");
        assert_eq!(
            before_each(&route("keyword"), &mut state),
            NavigationDecision::Proceed
        );
    }

    #[test]
    fn test_public_routes_proceed_without_token() {
        let mut state = AppState::default();
        for name in ["home", "mypage", "about-us", "error", "conference-detail"] {
            assert_eq!(before_each(&route(name), &mut state), NavigationDecision::Proceed);
        }
        let passthrough = ResolvedRoute::default();
        assert_eq!(before_each(&passthrough, &mut state), NavigationDecision::Proceed);
    }

    #[test]
    fn test_category_is_mirrored() {
        let mut state = AppState::default();
        before_each(&route("cooking"), &mut state);
        assert_eq!(state.active_category.as_deref(), Some("cooking"));

        before_each(&route("home"), &mut state);
        assert_eq!(state.active_category.as_deref(), Some("cooking"));
    }

    #[test]
    fn test_search_word_from_path_param() {
        let mut state = AppState::default();
        let mut to = route(SEARCH_RESULT);
        to.params = HashMap::from([(SEARCH_WORD_PARAM.to_string(), "jazz".to_string())]);
        assert_eq!(before_each(&to, &mut state), NavigationDecision::Proceed);
        assert_eq!(state.search_word.as_deref(), Some("jazz"));
    }

    #[test]
    fn test_search_word_from_query() {
        let mut state = AppState::default();
        let mut to = route(SEARCH_RESULT);
        to.query = HashMap::from([(SEARCH_WORD_PARAM.to_string(), "X".to_string())]);
        before_each(&to, &mut state);
        assert_eq!(state.search_word.as_deref(), Some("X"));

        before_each(&route(SEARCH_RESULT), &mut state);
        assert_eq!(state.search_word, None);
    }
}
