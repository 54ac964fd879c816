//! Client-side list filtering and load-more pagination.
//!
//! Every catalog and table in the app works the same way: the server
//! hands over the full collection, and the page narrows it in memory by
//! search text and category tab, showing the first `visible_count`
//! matches. This module is the single implementation of that pattern.

/// Number of items shown when a list first renders.
pub const INITIAL_VISIBLE: usize = 6;

/// How many more items each "load more" click reveals.
pub const LOAD_MORE_STEP: usize = 6;

/// Anything that can appear in a filterable list.
pub trait Listable {
    fn title(&self) -> &str;

    fn category(&self) -> Option<&str> {
        None
    }
}

/// The visible portion of a filtered collection.
pub struct ListSlice<'a, T> {
    pub items: Vec<&'a T>,
    pub total_matches: usize,
}

impl<T> ListSlice<'_, T> {
    /// True while more matches exist beyond the visible slice. Call
    /// sites must hide the load-more control when this is false.
    pub fn has_more(&self) -> bool {
        self.items.len() < self.total_matches
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Filter `items` by case-insensitive title substring and exact category
/// match, then truncate to the first `visible_count` matches. Input
/// order is preserved; the result is always a subsequence of `items`.
pub fn filter_and_paginate<'a, T: Listable>(
    items: &'a [T],
    search_text: &str,
    category: Option<&str>,
    visible_count: usize,
) -> ListSlice<'a, T> {
    let needle = search_text.trim().to_lowercase();

    let matched: Vec<&T> = items
        .iter()
        .filter(|item| {
            let text_ok = needle.is_empty() || item.title().to_lowercase().contains(&needle);
            let category_ok = category.is_none_or(|c| item.category() == Some(c));
            text_ok && category_ok
        })
        .collect();

    let total_matches = matched.len();
    let mut items = matched;
    items.truncate(visible_count);

    ListSlice {
        items,
        total_matches,
    }
}

/// Distinct categories in first-seen order, for building the tab row.
pub fn unique_categories<T: Listable>(items: &[T]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for item in items {
        if let Some(category) = item.category() {
            if !seen.iter().any(|c| c == category) {
                seen.push(category.to_string());
            }
        }
    }
    seen
}

/// Transient filter state for one list view. Created at mount, mutated
/// by input events, dropped on unmount. Changing the search text or the
/// category tab resets the visible count so the truncation never ends
/// up inconsistent with the new filter.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterState {
    pub search_text: String,
    pub selected_category: Option<String>,
    pub visible_count: usize,
}

impl FilterState {
    pub fn new() -> Self {
        Self {
            search_text: String::new(),
            selected_category: None,
            visible_count: INITIAL_VISIBLE,
        }
    }

    pub fn set_search(&mut self, text: String) {
        self.search_text = text;
        self.visible_count = INITIAL_VISIBLE;
    }

    pub fn set_category(&mut self, category: Option<String>) {
        self.selected_category = category;
        self.visible_count = INITIAL_VISIBLE;
    }

    pub fn load_more(&mut self) {
        self.visible_count += LOAD_MORE_STEP;
    }

    pub fn slice<'a, T: Listable>(&self, items: &'a [T]) -> ListSlice<'a, T> {
        filter_and_paginate(
            items,
            &self.search_text,
            self.selected_category.as_deref(),
            self.visible_count,
        )
    }
}

impl Default for FilterState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Entry {
        title: &'static str,
        category: &'static str,
    }

    impl Listable for Entry {
        fn title(&self) -> &str {
            self.title
        }

        fn category(&self) -> Option<&str> {
            Some(self.category)
        }
    }

    fn make_entries() -> Vec<Entry> {
        vec![
            Entry { title: "Rust for Beginners", category: "programming" },
            Entry { title: "Advanced Rust", category: "programming" },
            Entry { title: "UI Design Basics", category: "design" },
            Entry { title: "Figma Masterclass", category: "design" },
            Entry { title: "Digital Marketing 101", category: "marketing" },
        ]
    }

    fn titles<'a>(slice: &ListSlice<'a, Entry>) -> Vec<&'a str> {
        slice.items.iter().map(|e| e.title).collect()
    }

    #[test]
    fn test_empty_search_matches_everything() {
        let entries = make_entries();
        let slice = filter_and_paginate(&entries, "", None, 10);
        assert_eq!(slice.total_matches, 5);
        assert_eq!(slice.items.len(), 5);
        assert!(!slice.has_more());
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let entries = make_entries();
        let slice = filter_and_paginate(&entries, "rUsT", None, 10);
        assert_eq!(titles(&slice), vec!["Rust for Beginners", "Advanced Rust"]);
    }

    #[test]
    fn test_category_is_exact_match() {
        let entries = make_entries();
        let slice = filter_and_paginate(&entries, "", Some("design"), 10);
        assert_eq!(titles(&slice), vec!["UI Design Basics", "Figma Masterclass"]);

        let slice = filter_and_paginate(&entries, "", Some("desig"), 10);
        assert_eq!(slice.total_matches, 0);
    }

    #[test]
    fn test_predicates_combine() {
        let entries = make_entries();
        let slice = filter_and_paginate(&entries, "basics", Some("design"), 10);
        assert_eq!(titles(&slice), vec!["UI Design Basics"]);
    }

    #[test]
    fn test_order_preserved_not_resorted() {
        let entries = vec![
            Entry { title: "zebra", category: "a" },
            Entry { title: "apple", category: "a" },
            Entry { title: "mango", category: "a" },
        ];
        let slice = filter_and_paginate(&entries, "", None, 10);
        assert_eq!(titles(&slice), vec!["zebra", "apple", "mango"]);
    }

    #[test]
    fn test_truncates_to_visible_count() {
        let entries = make_entries();
        let slice = filter_and_paginate(&entries, "", None, 2);
        assert_eq!(titles(&slice), vec!["Rust for Beginners", "Advanced Rust"]);
        assert_eq!(slice.total_matches, 5);
        assert!(slice.has_more());
    }

    #[test]
    fn test_visible_count_at_total_suppresses_load_more() {
        let entries = make_entries();
        let slice = filter_and_paginate(&entries, "", None, 5);
        assert_eq!(slice.items.len(), 5);
        assert!(!slice.has_more());

        let slice = filter_and_paginate(&entries, "", None, 50);
        assert!(!slice.has_more());
    }

    #[test]
    fn test_empty_input_yields_empty_slice() {
        let entries: Vec<Entry> = vec![];
        let slice = filter_and_paginate(&entries, "anything", None, 10);
        assert!(slice.is_empty());
        assert_eq!(slice.total_matches, 0);
        assert!(!slice.has_more());
    }

    #[test]
    fn test_unique_categories_first_seen_order() {
        let entries = make_entries();
        assert_eq!(
            unique_categories(&entries),
            vec!["programming", "design", "marketing"]
        );
    }

    #[test]
    fn test_load_more_increments_by_step() {
        let mut state = FilterState::new();
        assert_eq!(state.visible_count, INITIAL_VISIBLE);
        state.load_more();
        assert_eq!(state.visible_count, INITIAL_VISIBLE + LOAD_MORE_STEP);
        state.load_more();
        assert_eq!(state.visible_count, INITIAL_VISIBLE + 2 * LOAD_MORE_STEP);
    }

    #[test]
    fn test_search_change_resets_visible_count() {
        let mut state = FilterState::new();
        state.load_more();
        state.set_search("rust".to_string());
        assert_eq!(state.visible_count, INITIAL_VISIBLE);
        assert_eq!(state.search_text, "rust");
    }

    #[test]
    fn test_category_change_resets_visible_count() {
        let mut state = FilterState::new();
        state.load_more();
        state.set_category(Some("design".to_string()));
        assert_eq!(state.visible_count, INITIAL_VISIBLE);
        assert_eq!(state.selected_category.as_deref(), Some("design"));
    }
}
