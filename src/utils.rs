// Utility functions
use std::collections::HashSet;

/// Removes repeated strings, keeping the first occurrence of each.
pub fn unique_in_order(items: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::with_capacity(items.len());
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}

/// True if either lowercase string contains the other.
pub fn contains_either_way(a: &str, b: &str) -> bool {
    a.contains(b) || b.contains(a)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unique_keeps_first_occurrence_order() {
        let items = ["b", "a", "b", "c", "a"].map(String::from).to_vec();
        assert_eq!(unique_in_order(items), vec!["b", "a", "c"]);
    }

    #[test]
    fn containment_is_symmetric() {
        assert!(contains_either_way("canon", "canon inc."));
        assert!(contains_either_way("canon inc.", "canon"));
        assert!(!contains_either_way("canon", "nikon"));
    }
}
