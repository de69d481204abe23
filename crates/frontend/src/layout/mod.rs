pub mod top_nav;

use leptos::prelude::*;
use thaw::*;
use top_nav::TopNav;

use crate::store::getters::{get_is_desktop_platform, get_loading_status};
use crate::store::use_store;

/// Application shell: navigation bar on top, routed content below.
#[component]
pub fn Shell<C>(center: C) -> impl IntoView
where
    C: Fn() -> AnyView + 'static + Send,
{
    let store = use_store();
    let class = move || {
        if store.read(get_is_desktop_platform) {
            "app-layout app-layout--desktop"
        } else {
            "app-layout"
        }
    };
    let loading = move || store.read(get_loading_status);

    view! {
        <div class=class>
            <TopNav />
            <Show when=loading>
                <div class="app-loading">
                    <Spinner />
                </div>
            </Show>
            <main class="app-main">
                {center()}
            </main>
        </div>
    }
}
