//! My page and its login-only children.

use leptos::prelude::*;
use thaw::{Badge, BadgeAppearance, BadgeColor};

use super::page::{PageFrame, PageHeader};
use crate::config::AppConfig;
use crate::router::table::MYPAGE_CHILDREN;
use crate::router::{use_router, Link};
use crate::store::getters::{
    get_alarm, get_email, get_profile, get_user_hashtag, get_user_hashtag_length,
};
use crate::store::use_store;

fn child_label(name: &str) -> &'static str {
    match name {
        "keyword" => "관심 키워드",
        "history1" => "참여한 방",
        "history2" => "만든 방",
        "user-info" => "회원 정보",
        _ => "",
    }
}

#[component]
pub fn MyPage(outlet: AnyView) -> impl IntoView {
    let router = use_router();

    let links = MYPAGE_CHILDREN
        .iter()
        .filter_map(|(name, _)| router.path_of(name).map(|path| (*name, path)))
        .map(|(name, path)| view! { <li><Link href=path>{child_label(name)}</Link></li> })
        .collect_view();

    view! {
        <PageFrame page_id="mypage">
            <PageHeader title="마이페이지" />
            <div class="mypage">
                <ul class="mypage__menu">{links}</ul>
                <div class="page__content">{outlet}</div>
            </div>
        </PageFrame>
    }
}

#[component]
pub fn Keyword() -> impl IntoView {
    let store = use_store();
    let count = move || store.read(get_user_hashtag_length);
    let hashtags = move || {
        store
            .read(|s| get_user_hashtag(s).to_vec())
            .into_iter()
            .map(|tag| {
                view! {
                    <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Informative>
                        {format!("#{}", tag)}
                    </Badge>
                }
            })
            .collect_view()
    };
    let alarm = move || if store.read(get_alarm) { "알림 켜짐" } else { "알림 꺼짐" };

    view! {
        <div id="mypage--keyword">
            <h2>{child_label("keyword")} " (" {count} ")"</h2>
            <div class="keyword__tags">{hashtags}</div>
            <div class="keyword__alarm">{alarm}</div>
        </div>
    }
}

#[component]
pub fn History1() -> impl IntoView {
    view! {
        <div id="mypage--history1">
            <h2>{child_label("history1")}</h2>
        </div>
    }
}

#[component]
pub fn History2() -> impl IntoView {
    view! {
        <div id="mypage--history2">
            <h2>{child_label("history2")}</h2>
        </div>
    }
}

#[component]
pub fn UserInfo() -> impl IntoView {
    let store = use_store();
    let config = use_context::<AppConfig>().expect("AppConfig context not found");

    let email = move || store.read(|s| get_email(s).unwrap_or_default().to_string());
    let profile = move || {
        store
            .read(|s| get_profile(s, &config))
            .map(|src| view! { <img class="user-info__profile" src=src alt="profile" /> })
    };

    view! {
        <div id="mypage--user-info">
            <h2>{child_label("user-info")}</h2>
            {profile}
            <div class="user-info__email">{email}</div>
        </div>
    }
}
