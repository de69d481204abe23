//! Views rendered by the router.

pub mod about;
pub mod category;
pub mod conference;
pub mod error;
pub mod home;
pub mod mypage;
pub mod page;
pub mod registry;
pub mod search;

pub use registry::render_views;

/// View reference held by a route descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewKind {
    Home,
    Category,
    CategoryResult,
    MyPage,
    Keyword,
    History1,
    History2,
    UserInfo,
    ConferenceDetail,
    SearchResult,
    ErrorPage,
    AboutUs,
}
