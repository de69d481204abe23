use contracts::shared::category::CATEGORIES;
use leptos::prelude::*;

use super::page::{PageFrame, PageHeader};
use crate::router::{use_router, Link};
use crate::store::getters::get_active_category;
use crate::store::use_store;

/// Category page: a tab per category and the selected category's results.
#[component]
pub fn Category(outlet: AnyView) -> impl IntoView {
    let router = use_router();
    let store = use_store();

    let tabs = CATEGORIES
        .iter()
        .filter_map(|name| router.path_of(name).map(|path| (*name, path)))
        .map(|(name, path)| {
            let class = move || {
                let active = store.read(|s| get_active_category(s) == Some(name));
                if active {
                    "category-tab category-tab--active".to_string()
                } else {
                    "category-tab".to_string()
                }
            };
            view! {
                <span class=class>
                    <Link href=path>{name}</Link>
                </span>
            }
        })
        .collect_view();

    view! {
        <PageFrame page_id="category">
            <PageHeader title="카테고리" />
            <nav class="category-tabs">{tabs}</nav>
            <div class="page__content">{outlet}</div>
        </PageFrame>
    }
}

#[component]
pub fn CategoryResult() -> impl IntoView {
    let store = use_store();
    let category = move || store.read(|s| get_active_category(s).unwrap_or("all").to_string());

    view! {
        <div class="category-result">
            <h2>{category}</h2>
        </div>
    }
}
