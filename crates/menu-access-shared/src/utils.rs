//! Utility functions

/// Case-insensitive substring match. An empty needle matches everything.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    let needle = needle.trim();
    if needle.is_empty() {
        return true;
    }
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Joins a base URL and a path without doubling the slash.
pub fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_ignore_case() {
        assert!(contains_ignore_case("Stock List", "stock"));
        assert!(contains_ignore_case("/inventory/stock", "INVENTORY"));
        assert!(contains_ignore_case("Anything", "  "));
        assert!(!contains_ignore_case("Vendors", "stock"));
    }

    #[test]
    fn test_join_url() {
        assert_eq!(join_url("http://api/", "/menus"), "http://api/menus");
        assert_eq!(join_url("http://api", "menus"), "http://api/menus");
    }
}
