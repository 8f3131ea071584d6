pub const MAX_RECENT_SEARCHES: usize = 15;

/// Most-recent-first list of distinct search keywords, capped at
/// [`MAX_RECENT_SEARCHES`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecentSearches {
    keywords: Vec<String>,
}

impl RecentSearches {
    /// Rebuilds the list from stored keywords, dropping blanks, duplicates and
    /// anything past the cap.
    pub fn from_stored(stored: Vec<String>) -> Self {
        let mut searches = Self::default();
        for keyword in stored.into_iter().rev() {
            searches.record(&keyword);
        }
        searches
    }

    /// Moves `keyword` to the front. Returns `false` for blank keywords.
    pub fn record(&mut self, keyword: &str) -> bool {
        let keyword = keyword.trim();
        if keyword.is_empty() {
            return false;
        }
        self.keywords.retain(|existing| existing != keyword);
        self.keywords.insert(0, keyword.to_string());
        self.keywords.truncate(MAX_RECENT_SEARCHES);
        true
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn into_keywords(self) -> Vec<String> {
        self.keywords
    }

    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn should_keep_single_occurrence_moved_to_front() {
        let mut searches = RecentSearches::default();
        searches.record("iphone");
        searches.record("samsung");

        searches.record("iphone");

        assert_eq!(searches.keywords(), ["iphone", "samsung"]);
    }

    #[test]
    fn should_drop_oldest_on_overflow() {
        let mut searches = RecentSearches::default();
        for i in 0..16 {
            searches.record(&format!("kw{}", i));
        }

        assert_eq!(searches.len(), MAX_RECENT_SEARCHES);
        assert_eq!(searches.keywords()[0], "kw15");
        assert!(!searches.keywords().contains(&"kw0".to_string()));
    }

    #[test]
    fn should_ignore_blank_keyword() {
        let mut searches = RecentSearches::default();

        assert!(!searches.record("   "));
        assert!(searches.is_empty());
    }

    #[test]
    fn should_preserve_order_when_rebuilt_from_storage() {
        let stored = vec!["c".to_string(), "b".to_string(), "c".to_string(), "a".to_string()];

        let searches = RecentSearches::from_stored(stored);

        assert_eq!(searches.keywords(), ["c", "b", "a"]);
    }

    proptest! {
        #[test]
        fn never_exceeds_cap_and_never_duplicates(keywords in prop::collection::vec("[a-e]{1,2}", 0..60)) {
            let mut searches = RecentSearches::default();
            for keyword in &keywords {
                searches.record(keyword);
            }

            prop_assert!(searches.len() <= MAX_RECENT_SEARCHES);
            let mut seen = std::collections::HashSet::new();
            for keyword in searches.keywords() {
                prop_assert!(seen.insert(keyword.clone()));
            }
            if let Some(last) = keywords.last() {
                prop_assert_eq!(&searches.keywords()[0], last);
            }
        }
    }
}
