use leptos::prelude::*;

use super::history::use_router;

/// Anchor that navigates through the router instead of reloading the page.
#[component]
pub fn Link(#[prop(into)] href: String, children: Children) -> impl IntoView {
    let router = use_router();
    let target = href.clone();

    let on_click = move |ev: leptos::ev::MouseEvent| {
        // Let the browser handle modified clicks (new tab etc).
        if ev.ctrl_key() || ev.meta_key() || ev.shift_key() || ev.button() != 0 {
            return;
        }
        ev.prevent_default();
        router.push(&target);
    };

    view! {
        <a href=href on:click=on_click>
            {children()}
        </a>
    }
}
