//! Page wrappers shared by every routed view.

use leptos::prelude::*;

/// Root wrapper for a routed page. `page_id` ends up as the DOM id,
/// e.g. `"mypage--keyword"`.
#[component]
pub fn PageFrame(
    page_id: &'static str,
    #[prop(optional)] class: &'static str,
    children: Children,
) -> impl IntoView {
    let full_class = if class.is_empty() {
        "page".to_string()
    } else {
        format!("page {}", class)
    };

    view! {
        <div id=page_id class=full_class>
            {children()}
        </div>
    }
}

#[component]
pub fn PageHeader(
    #[prop(into)] title: String,
    #[prop(optional, into)] subtitle: MaybeProp<String>,
) -> impl IntoView {
    view! {
        <div class="page__header">
            <h1 class="page__title">{title}</h1>
            {move || subtitle.get().map(|s| view! {
                <div class="page__subtitle">{s}</div>
            })}
        </div>
    }
}
