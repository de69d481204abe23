//! ViewKind → view mapping. The only place that knows which component backs
//! which route.

use leptos::prelude::*;

use super::about::AboutUs;
use super::category::{Category, CategoryResult};
use super::conference::ConferenceDetail;
use super::error::ErrorPage;
use super::home::Home;
use super::mypage::{History1, History2, Keyword, MyPage, UserInfo};
use super::search::SearchResult;
use super::ViewKind;
use crate::router::matcher::ResolvedRoute;

/// Render the matched view chain. Each view receives the rest of the chain as
/// its outlet; an empty chain renders nothing.
pub fn render_views(views: &[ViewKind], route: &ResolvedRoute) -> AnyView {
    let Some((kind, rest)) = views.split_first() else {
        return ().into_any();
    };
    let outlet = render_views(rest, route);

    match kind {
        ViewKind::Home => view! { <Home /> }.into_any(),
        ViewKind::Category => view! { <Category outlet=outlet /> }.into_any(),
        ViewKind::CategoryResult => view! { <CategoryResult /> }.into_any(),
        ViewKind::MyPage => view! { <MyPage outlet=outlet /> }.into_any(),
        ViewKind::Keyword => view! { <Keyword /> }.into_any(),
        ViewKind::History1 => view! { <History1 /> }.into_any(),
        ViewKind::History2 => view! { <History2 /> }.into_any(),
        ViewKind::UserInfo => view! { <UserInfo /> }.into_any(),
        ViewKind::ConferenceDetail => {
            let conference_id = route.param("conferenceId").unwrap_or_default().to_string();
            view! { <ConferenceDetail conference_id=conference_id /> }.into_any()
        }
        ViewKind::SearchResult => view! { <SearchResult /> }.into_any(),
        ViewKind::ErrorPage => view! { <ErrorPage /> }.into_any(),
        ViewKind::AboutUs => view! { <AboutUs /> }.into_any(),
    }
}
