use crate::{
    ClientState, Effect, FilterSet, LoadMode, Msg, QueryIdentity, ResultPage, SEARCH_MIN_CHARS,
};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: ClientState, msg: Msg) -> (ClientState, Vec<Effect>) {
    let effects = match msg {
        Msg::SessionStarted => replace_fetch(&mut state, QueryIdentity::default()),
        Msg::SearchChanged(text) => {
            if text.is_empty() {
                // Cleared search: back to the filtered baseline, category
                // deselected along with the term.
                let identity = QueryIdentity {
                    term: None,
                    category: None,
                    filters: state.identity().filters.clone(),
                };
                replace_fetch(&mut state, identity)
            } else if text.chars().count() >= SEARCH_MIN_CHARS {
                let identity = QueryIdentity {
                    term: Some(text),
                    category: None,
                    filters: state.identity().filters.clone(),
                };
                replace_fetch(&mut state, identity)
            } else {
                // One or two characters: too short to search on.
                Vec::new()
            }
        }
        Msg::CategorySelected(category) => {
            let identity = QueryIdentity {
                term: None,
                category,
                filters: state.identity().filters.clone(),
            };
            replace_fetch(&mut state, identity)
        }
        Msg::FiltersApplied(filters) => {
            let identity = QueryIdentity {
                term: state.identity().term.clone(),
                category: state.identity().category.clone(),
                filters,
            };
            replace_fetch(&mut state, identity)
        }
        Msg::FiltersReset => {
            let identity = QueryIdentity {
                term: state.identity().term.clone(),
                category: state.identity().category.clone(),
                filters: FilterSet::new(),
            };
            replace_fetch(&mut state, identity)
        }
        Msg::FilterCleared(key) => {
            let mut filters = state.identity().filters.clone();
            filters.remove(key);
            let identity = QueryIdentity {
                term: state.identity().term.clone(),
                category: state.identity().category.clone(),
                filters,
            };
            replace_fetch(&mut state, identity)
        }
        Msg::ScrollHitBottom => {
            if state.end_reached() {
                // Latch already set for this scroll position; one append per
                // bottom crossing.
                Vec::new()
            } else {
                state.latch_end();
                let query = state.next_page_query();
                state.begin_fetch();
                vec![Effect::Fetch {
                    query,
                    mode: LoadMode::Append,
                }]
            }
        }
        Msg::ScrollLeftBottom => {
            state.release_end();
            Vec::new()
        }
        Msg::FetchDone {
            query,
            mode,
            result,
        } => {
            match result {
                Ok(page) => {
                    // The page counter follows the query that was actually
                    // answered, so it only advances once the page landed.
                    state.apply_page(
                        mode,
                        ResultPage {
                            requested_page: query.page,
                            items: page.items,
                        },
                    );
                }
                Err(message) => state.fail_fetch(message),
            }
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn replace_fetch(state: &mut ClientState, identity: QueryIdentity) -> Vec<Effect> {
    let query = state.replace_identity(identity);
    state.begin_fetch();
    vec![Effect::Fetch {
        query,
        mode: LoadMode::Replace,
    }]
}
