use leptos::prelude::*;
use thaw::*;

use super::page::{PageFrame, PageHeader};
use crate::router::{use_router, Link};

#[component]
pub fn ErrorPage() -> impl IntoView {
    let router = use_router();
    let home = router.path_of("home").unwrap_or_else(|| "/".to_string());

    view! {
        <PageFrame page_id="error" class="page--error">
            <PageHeader title="페이지를 찾을 수 없습니다" />
            <Space>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| router.back()>
                    "이전 페이지"
                </Button>
                <Link href=home>"홈으로"</Link>
            </Space>
        </PageFrame>
    }
}
