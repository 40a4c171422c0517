use crate::{FilterKey, FilterSet, LoadMode, Query, ResultPage};

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// Screen mounted; load page 1 of the baseline query.
    SessionStarted,
    /// Search text settled after the debounce quiet period.
    SearchChanged(String),
    /// User picked a category chip, or `None` to deselect.
    CategorySelected(Option<String>),
    /// Filters modal applied a full filter set.
    FiltersApplied(FilterSet),
    /// Filters modal reset all filters.
    FiltersReset,
    /// One filter chip was dismissed.
    FilterCleared(FilterKey),
    /// Scroll position crossed the bottom threshold.
    ScrollHitBottom,
    /// Scroll position moved back above the bottom threshold.
    ScrollLeftBottom,
    /// A fetch issued for `query` finished.
    FetchDone {
        query: Query,
        mode: LoadMode,
        result: Result<ResultPage, String>,
    },
    /// Fallback for placeholder wiring.
    NoOp,
}
