//! Conference categories.
//!
//! The list is fixed and ordered: it drives both the child routes under the
//! category page and the check that decides whether a navigation target is a
//! category.

/// Category identifiers in display order. `all` always comes first.
pub const CATEGORIES: [&str; 11] = [
    "all",
    "sports",
    "cooking",
    "handcraft",
    "music",
    "finance",
    "game",
    "movie",
    "drawing",
    "book",
    "pet",
];

/// Returns `true` if `name` is one of [`CATEGORIES`].
pub fn is_category(name: &str) -> bool {
    CATEGORIES.contains(&name)
}

/// Position of `name` in [`CATEGORIES`].
pub fn category_index(name: &str) -> Option<usize> {
    CATEGORIES.iter().position(|c| *c == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_order() {
        assert_eq!(CATEGORIES.len(), 11);
        assert_eq!(CATEGORIES[0], "all");
        assert_eq!(CATEGORIES[10], "pet");
        assert_eq!(category_index("music"), Some(4));
    }

    #[test]
    fn test_is_category() {
        assert!(is_category("sports"));
        assert!(!is_category("keyword"));
        assert!(!is_category("Sports"));
        assert_eq!(category_index("search-result"), None);
    }
}
