use leptos::prelude::*;

use crate::layout::Shell;
use crate::router::use_router;
use crate::views::render_views;

/// Renders the view chain of the current route inside the shell.
#[component]
fn RouterOutlet() -> impl IntoView {
    let router = use_router();

    move || match router.current() {
        Some(route) => render_views(&route.views, &route),
        None => ().into_any(),
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let router = use_router();

    // Resolve the initial URL once the router is reachable through context.
    router.start();

    view! {
        <Shell center=|| view! { <RouterOutlet /> }.into_any() />
    }
}
