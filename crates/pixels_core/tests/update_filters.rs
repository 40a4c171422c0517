mod common;

use common::{init_logging, loaded_state, page, single_fetch};
use pixels_core::{update, FilterKey, FilterSet, LoadMode, Msg};

#[test]
fn search_clears_category_and_resets_page() {
    init_logging();
    let state = loaded_state(&[1, 2]);
    let (state, _) = update(state, Msg::CategorySelected(Some("nature".to_string())));

    let (state, effects) = update(state, Msg::SearchChanged("sunset".to_string()));

    let (query, mode) = single_fetch(&effects);
    assert_eq!(mode, LoadMode::Replace);
    assert_eq!(query.page, 1);
    assert_eq!(query.identity.term.as_deref(), Some("sunset"));
    assert_eq!(query.identity.category, None);
    assert!(state.items().is_empty());
    assert_eq!(state.current_page(), 1);
}

#[test]
fn short_search_text_is_ignored() {
    init_logging();
    let before = loaded_state(&[1, 2]);

    let (state, effects) = update(before.clone(), Msg::SearchChanged("su".to_string()));

    assert!(effects.is_empty());
    assert_eq!(state, before);
}

#[test]
fn cleared_search_resets_term_and_category_but_keeps_filters() {
    init_logging();
    let filters = FilterSet::new().with(FilterKey::Order, "popular");
    let state = loaded_state(&[1]);
    let (state, _) = update(state, Msg::FiltersApplied(filters.clone()));
    let (state, _) = update(state, Msg::SearchChanged("sunset".to_string()));

    let (state, effects) = update(state, Msg::SearchChanged(String::new()));

    let (query, mode) = single_fetch(&effects);
    assert_eq!(mode, LoadMode::Replace);
    assert_eq!(query.page, 1);
    assert_eq!(query.identity.term, None);
    assert_eq!(query.identity.category, None);
    assert_eq!(query.identity.filters, filters);
    assert!(state.items().is_empty());
}

#[test]
fn category_change_clears_term() {
    init_logging();
    let state = loaded_state(&[1, 2]);
    let (state, _) = update(state, Msg::SearchChanged("sunset".to_string()));

    let (state, effects) = update(state, Msg::CategorySelected(Some("travel".to_string())));

    let (query, mode) = single_fetch(&effects);
    assert_eq!(mode, LoadMode::Replace);
    assert_eq!(query.identity.category.as_deref(), Some("travel"));
    assert_eq!(query.identity.term, None);
    assert_eq!(state.current_page(), 1);
    assert!(state.items().is_empty());
}

#[test]
fn applying_filters_replaces_list_and_keeps_term_and_category() {
    init_logging();
    let state = loaded_state(&[1, 2, 3]);
    let (state, _) = update(state, Msg::CategorySelected(Some("nature".to_string())));

    let filters = FilterSet::new()
        .with(FilterKey::Order, "popular")
        .with(FilterKey::Colors, "red");
    let (state, effects) = update(state, Msg::FiltersApplied(filters.clone()));

    let (query, mode) = single_fetch(&effects);
    assert_eq!(mode, LoadMode::Replace);
    assert_eq!(query.page, 1);
    assert_eq!(query.identity.filters, filters);
    assert_eq!(query.identity.category.as_deref(), Some("nature"));
    assert!(state.items().is_empty());
}

#[test]
fn resetting_filters_clears_the_whole_set() {
    init_logging();
    let filters = FilterSet::new()
        .with(FilterKey::Order, "popular")
        .with(FilterKey::Orientation, "vertical");
    let state = loaded_state(&[1]);
    let (state, _) = update(state, Msg::FiltersApplied(filters));

    let (state, effects) = update(state, Msg::FiltersReset);

    let (query, _) = single_fetch(&effects);
    assert!(query.identity.filters.is_empty());
    assert_eq!(state.current_page(), 1);
    assert!(state.items().is_empty());
}

#[test]
fn clearing_one_filter_keeps_the_others() {
    init_logging();
    let filters = FilterSet::new()
        .with(FilterKey::Order, "popular")
        .with(FilterKey::Colors, "red");
    let state = loaded_state(&[1, 2]);
    let (state, effects) = update(state, Msg::FiltersApplied(filters));
    let (query, mode) = single_fetch(&effects);
    let (state, _) = update(
        state,
        Msg::FetchDone {
            query,
            mode,
            result: Ok(page(&[5, 6], 1)),
        },
    );

    let (state, effects) = update(state, Msg::FilterCleared(FilterKey::Colors));

    let (query, mode) = single_fetch(&effects);
    assert_eq!(mode, LoadMode::Replace);
    assert_eq!(query.page, 1);
    assert_eq!(query.identity.filters.get(FilterKey::Order), Some("popular"));
    assert_eq!(query.identity.filters.get(FilterKey::Colors), None);
    assert_eq!(query.identity.filters.len(), 1);
    assert!(state.items().is_empty());
    assert_eq!(state.current_page(), 1);
}

#[test]
fn view_model_marks_color_chips_for_swatch_rendering() {
    init_logging();
    let filters = FilterSet::new()
        .with(FilterKey::Order, "latest")
        .with(FilterKey::Colors, "turquoise");
    let state = loaded_state(&[1]);
    let (state, _) = update(state, Msg::FiltersApplied(filters));

    let view = state.view();
    let chips: Vec<(FilterKey, bool)> = view
        .filter_chips
        .iter()
        .map(|chip| (chip.key, chip.is_color))
        .collect();
    assert_eq!(
        chips,
        vec![(FilterKey::Order, false), (FilterKey::Colors, true)]
    );
    assert!(view.fetching);
}
