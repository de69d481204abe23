use contracts::shared::menu::LOGOUT_KEY;
use leptos::prelude::*;
use thaw::*;

use crate::router::guard::{SEARCH_RESULT, SEARCH_WORD_PARAM};
use crate::router::table::menu_index;
use crate::router::{use_router, Link};
use crate::store::getters::{get_active_menu_index, get_menus, get_token};
use crate::store::use_store;

/// Top navigation bar, one item per menu-table entry.
#[component]
pub fn TopNav() -> impl IntoView {
    let store = use_store();
    let entries: Vec<(String, String, String)> = store.read_untracked(|s| {
        get_menus(s)
            .iter()
            .map(|(key, entry)| {
                let label = entry.name.clone().unwrap_or_else(|| key.to_string());
                (key.to_string(), entry.path.clone(), label)
            })
            .collect()
    });

    let items = entries
        .into_iter()
        .enumerate()
        .map(|(position, (key, path, label))| {
            let class = move || {
                if store.read(get_active_menu_index) == Some(position) {
                    "top-nav__item top-nav__item--active"
                } else {
                    "top-nav__item"
                }
            };
            let index = menu_index(&key);
            let on_click = move |_: leptos::ev::MouseEvent| {
                if let Some(index) = index {
                    store.set_menu_active(index);
                }
            };

            let content = match key.as_str() {
                LOGOUT_KEY => view! { <LogoutButton label=label /> }.into_any(),
                SEARCH_RESULT => view! { <SearchBox /> }.into_any(),
                _ => view! { <Link href=path>{label}</Link> }.into_any(),
            };

            view! { <li class=class on:click=on_click>{content}</li> }
        })
        .collect_view();

    view! {
        <nav class="top-nav">
            <ul>{items}</ul>
        </nav>
    }
}

#[component]
fn LogoutButton(label: String) -> impl IntoView {
    let label = StoredValue::new(label);
    let store = use_store();
    let router = use_router();
    let logged_in = move || store.read(|s| get_token(s).is_some());

    let on_logout = move |_: leptos::ev::MouseEvent| {
        log::info!("logout");
        store.clear_token();
        store.set_email(None);
        store.set_profile(None);
        store.set_user_hashtag(Vec::new());
        let home = router.path_of("home").unwrap_or_else(|| "/".to_string());
        router.push(&home);
    };

    view! {
        <Show when=logged_in>
            <Button appearance=ButtonAppearance::Subtle on_click=on_logout>
                {label.get_value()}
            </Button>
        </Show>
    }
}

#[component]
fn SearchBox() -> impl IntoView {
    let router = use_router();
    let (word, set_word) = signal(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let value = word.get_untracked();
        let value = value.trim();
        if value.is_empty() {
            return;
        }
        let pattern = router
            .path_of(SEARCH_RESULT)
            .unwrap_or_else(|| format!("/{}", SEARCH_RESULT));
        router.push(&search_url(&pattern, value));
    };

    view! {
        <form class="top-nav__search" on:submit=on_submit>
            <input
                type="search"
                placeholder="검색"
                prop:value=move || word.get()
                on:input=move |ev| set_word.set(event_target_value(&ev))
            />
        </form>
    }
}

/// Fill the search word into the search route, as a path parameter when the
/// route declares one and as a query parameter otherwise.
fn search_url(pattern: &str, word: &str) -> String {
    let encoded = urlencoding::encode(word);
    let required = format!(":{}", SEARCH_WORD_PARAM);
    let optional = format!(":{}?", SEARCH_WORD_PARAM);

    let mut filled = false;
    let path = pattern
        .split('/')
        .map(|seg| {
            if seg == required || seg == optional {
                filled = true;
                encoded.as_ref()
            } else {
                seg
            }
        })
        .collect::<Vec<_>>()
        .join("/");

    if filled {
        path
    } else {
        format!("{}?{}={}", pattern, SEARCH_WORD_PARAM, encoded)
    }
}
