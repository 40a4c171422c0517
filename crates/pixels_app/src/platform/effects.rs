use grid_logging::grid_info;
use pixels_core::Effect;
use pixels_engine::{EngineEvent, EngineHandle};

/// Executes the effects emitted by `update` against the engine and hands
/// engine events back to the event loop.
pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(engine: EngineHandle) -> Self {
        Self { engine }
    }

    pub fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Fetch { query, mode } => {
                    grid_info!(
                        "fetch page={} term={:?} category={:?} filters={} mode={:?}",
                        query.page,
                        query.identity.term,
                        query.identity.category,
                        query.identity.filters.len(),
                        mode
                    );
                    self.engine.fetch(query, mode);
                }
            }
        }
    }

    /// Downloads bypass the aggregator entirely; failures come back as an
    /// alert-style event.
    pub fn request_download(&self, url: impl Into<String>, file_name: impl Into<String>) {
        self.engine.download(url, file_name);
    }

    pub fn try_event(&self) -> Option<EngineEvent> {
        self.engine.try_recv()
    }
}
