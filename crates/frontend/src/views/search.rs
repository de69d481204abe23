use leptos::prelude::*;

use super::page::{PageFrame, PageHeader};
use crate::store::getters::get_search_word;
use crate::store::use_store;

#[component]
pub fn SearchResult() -> impl IntoView {
    let store = use_store();
    let subtitle = Signal::derive(move || {
        store.read(|s| get_search_word(s).map(|w| format!("'{}' 검색 결과", w)))
    });

    view! {
        <PageFrame page_id="search-result">
            <PageHeader title="검색" subtitle=subtitle />
        </PageFrame>
    }
}
