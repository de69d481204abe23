use leptos::prelude::*;

use super::page::{PageFrame, PageHeader};

#[component]
pub fn Home() -> impl IntoView {
    view! {
        <PageFrame page_id="home">
            <PageHeader title="Babble" subtitle="관심사가 같은 사람들과 이야기해 보세요" />
        </PageFrame>
    }
}
