use std::collections::btree_map;
use std::collections::BTreeMap;
use std::fmt;

/// Minimum number of characters before free text is treated as a search term.
pub const SEARCH_MIN_CHARS: usize = 3;

/// The closed set of structured filter parameters the remote API accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FilterKey {
    Order,
    Orientation,
    ImageType,
    Colors,
}

impl FilterKey {
    /// Wire name of the filter as it appears in the request query string.
    pub fn as_param(self) -> &'static str {
        match self {
            FilterKey::Order => "order",
            FilterKey::Orientation => "orientation",
            FilterKey::ImageType => "image_type",
            FilterKey::Colors => "colors",
        }
    }

    pub fn from_param(name: &str) -> Option<Self> {
        match name {
            "order" => Some(FilterKey::Order),
            "orientation" => Some(FilterKey::Orientation),
            "image_type" => Some(FilterKey::ImageType),
            "colors" => Some(FilterKey::Colors),
            _ => None,
        }
    }
}

impl fmt::Display for FilterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_param())
    }
}

/// Ordered filter mapping. Iteration order is fixed by `FilterKey`, which
/// keeps request construction deterministic. Empty-string values are kept;
/// callers remove keys they want excluded.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterSet {
    entries: BTreeMap<FilterKey, String>,
}

impl FilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: FilterKey, value: impl Into<String>) {
        self.entries.insert(key, value.into());
    }

    pub fn with(mut self, key: FilterKey, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    /// Removes one filter, returning its previous value if present.
    pub fn remove(&mut self, key: FilterKey) -> Option<String> {
        self.entries.remove(&key)
    }

    pub fn get(&self, key: FilterKey) -> Option<&str> {
        self.entries.get(&key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, FilterKey, String> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a FilterSet {
    type Item = (&'a FilterKey, &'a String);
    type IntoIter = btree_map::Iter<'a, FilterKey, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// What result set is wanted, independent of pagination: free text, category
/// and structured filters. Replaced as one atomic value whenever any part of
/// it changes, so no intermediate mix of old and new fields is observable.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QueryIdentity {
    pub term: Option<String>,
    pub category: Option<String>,
    pub filters: FilterSet,
}

/// Immutable snapshot of one fetch: an identity plus the requested page.
/// A new `Query` is constructed on every state change, never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub page: u32,
    pub identity: QueryIdentity,
}

impl Query {
    pub fn new(page: u32, identity: QueryIdentity) -> Self {
        Self { page, identity }
    }

    /// Page 1 of the given identity.
    pub fn first_page(identity: QueryIdentity) -> Self {
        Self { page: 1, identity }
    }
}

impl Default for Query {
    fn default() -> Self {
        Self {
            page: 1,
            identity: QueryIdentity::default(),
        }
    }
}
