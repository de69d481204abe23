use leptos::prelude::*;

use super::page::{PageFrame, PageHeader};

#[component]
pub fn AboutUs() -> impl IntoView {
    view! {
        <PageFrame page_id="about-us">
            <PageHeader title="About us" />
        </PageFrame>
    }
}
