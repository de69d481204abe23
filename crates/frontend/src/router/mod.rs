pub mod guard;
pub mod history;
pub mod link;
pub mod matcher;
pub mod table;

pub use history::{use_router, Router};
pub use link::Link;
