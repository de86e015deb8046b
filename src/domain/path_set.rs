//! Ordered, deduplicated collection of URL paths.

use serde::Serialize;

/// An insertion-ordered set of `/`-rooted URL paths.
///
/// Guarantees:
/// - No duplicate entries; the first occurrence wins
/// - Every entry starts with `/`
/// - No empty entries
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PathSet(Vec<String>);

impl PathSet {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Insert a path, returning `false` when it was already present or blank.
    ///
    /// Surrounding whitespace is trimmed and a missing leading `/` is added.
    pub fn insert(&mut self, path: impl AsRef<str>) -> bool {
        let Some(path) = normalize(path.as_ref()) else {
            return false;
        };
        if self.0.contains(&path) {
            return false;
        }
        self.0.push(path);
        true
    }

    pub fn contains(&self, path: &str) -> bool {
        normalize(path).is_some_and(|path| self.0.contains(&path))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0
    }

    /// Entries of `self` followed by entries of `other` not already present.
    pub fn union(&self, other: &PathSet) -> PathSet {
        let mut merged = self.clone();
        merged.extend(other.iter());
        merged
    }

    /// Entries of `self` that are absent from `other`, in `self` order.
    pub fn difference(&self, other: &PathSet) -> PathSet {
        self.iter().filter(|path| !other.contains(path)).collect()
    }

    /// Whether no entry appears in both sets.
    pub fn is_disjoint(&self, other: &PathSet) -> bool {
        self.iter().all(|path| !other.contains(path))
    }
}

fn normalize(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    if trimmed.starts_with('/') {
        Some(trimmed.to_string())
    } else {
        Some(format!("/{trimmed}"))
    }
}

impl<S: AsRef<str>> Extend<S> for PathSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for path in iter {
            self.insert(path);
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for PathSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = PathSet::new();
        set.extend(iter);
        set
    }
}

impl IntoIterator for PathSet {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a PathSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn dedup_keeps_first_occurrence() {
        let set: PathSet = ["/a", "/b", "/a"].into_iter().collect();
        assert_eq!(set.as_slice(), ["/a", "/b"]);
    }

    #[test]
    fn insert_reports_duplicates() {
        let mut set = PathSet::new();
        assert!(set.insert("/apps/foo"));
        assert!(!set.insert("/apps/foo"));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn blank_entries_are_skipped() {
        let set: PathSet = ["", "   ", "/x"].into_iter().collect();
        assert_eq!(set.as_slice(), ["/x"]);
    }

    #[test]
    fn missing_leading_slash_is_added() {
        let set: PathSet = ["apps/foo", " /apps/foo "].into_iter().collect();
        assert_eq!(set.as_slice(), ["/apps/foo"]);
    }

    #[test]
    fn difference_preserves_order() {
        let all: PathSet = ["/a", "/b", "/c"].into_iter().collect();
        let drop: PathSet = ["/b"].into_iter().collect();
        assert_eq!(all.difference(&drop).as_slice(), ["/a", "/c"]);
    }

    #[test]
    fn union_appends_new_entries_only() {
        let left: PathSet = ["/a", "/b"].into_iter().collect();
        let right: PathSet = ["/b", "/c"].into_iter().collect();
        assert_eq!(left.union(&right).as_slice(), ["/a", "/b", "/c"]);
    }

    #[test]
    fn serializes_as_plain_list() {
        let set: PathSet = ["/a", "/b"].into_iter().collect();
        assert_eq!(serde_json::to_string(&set).unwrap(), r#"["/a","/b"]"#);
    }

    proptest! {
        #[test]
        fn collected_set_has_no_duplicates_and_keeps_first_order(
            paths in proptest::collection::vec("/[a-c]{1,2}", 0..20)
        ) {
            let set: PathSet = paths.iter().collect();

            let mut expected: Vec<String> = Vec::new();
            for path in &paths {
                if !expected.contains(path) {
                    expected.push(path.clone());
                }
            }
            prop_assert_eq!(set.as_slice(), expected.as_slice());
        }
    }
}
