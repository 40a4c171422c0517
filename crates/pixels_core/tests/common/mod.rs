use std::sync::Once;

use pixels_core::{update, ClientState, Effect, LoadMode, Msg, Query, ResultItem, ResultPage};

pub fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(grid_logging::initialize_for_tests);
}

pub fn item(id: u64) -> ResultItem {
    ResultItem {
        id,
        preview_url: format!("https://cdn.example.com/photo/{id}_150.jpg"),
        webformat_url: format!("https://cdn.example.com/photo/{id}_640.jpg"),
        image_width: 640,
        image_height: 480,
        tags: String::new(),
        extra: serde_json::Map::new(),
    }
}

pub fn page(ids: &[u64], requested_page: u32) -> ResultPage {
    ResultPage {
        items: ids.iter().copied().map(item).collect(),
        requested_page,
    }
}

/// Runs the initial load and lands `ids` as page 1.
pub fn loaded_state(ids: &[u64]) -> ClientState {
    let (state, effects) = update(ClientState::new(), Msg::SessionStarted);
    let (query, mode) = single_fetch(&effects);
    update(
        state,
        Msg::FetchDone {
            query,
            mode,
            result: Ok(page(ids, 1)),
        },
    )
    .0
}

/// Asserts exactly one fetch effect and returns its parts.
pub fn single_fetch(effects: &[Effect]) -> (Query, LoadMode) {
    assert_eq!(effects.len(), 1, "expected exactly one effect");
    let Effect::Fetch { query, mode } = &effects[0];
    (query.clone(), *mode)
}
