use leptos::prelude::*;

use super::page::{PageFrame, PageHeader};
use crate::store::use_store;

#[component]
pub fn ConferenceDetail(#[prop(into)] conference_id: String) -> impl IntoView {
    let store = use_store();
    store.set_room_id(Some(conference_id.clone()));

    view! {
        <PageFrame page_id="conference-detail" class="page--detail">
            <PageHeader title="컨퍼런스" subtitle=format!("#{}", conference_id) />
        </PageFrame>
    }
}
