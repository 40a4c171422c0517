use crate::{LoadMode, Query, QueryIdentity, ResultItem, ResultPage};

/// Fetch lifecycle. `Error` is transient: a failed fetch records its message
/// and drops straight back to `Idle`, so the phase only ever observes these
/// two values between messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchPhase {
    #[default]
    Idle,
    Fetching,
}

/// The single mutable session object: the accumulated result list plus
/// pagination and query-identity bookkeeping. Created once per browsing
/// session and mutated only through `update`.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientState {
    accumulated: Vec<ResultItem>,
    current_page: u32,
    identity: QueryIdentity,
    end_reached: bool,
    phase: FetchPhase,
    last_error: Option<String>,
}

impl ClientState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[ResultItem] {
        &self.accumulated
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn identity(&self) -> &QueryIdentity {
        &self.identity
    }

    pub fn end_reached(&self) -> bool {
        self.end_reached
    }

    pub fn phase(&self) -> FetchPhase {
        self.phase
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Takes the pending error message, if any, clearing it.
    pub fn consume_error(&mut self) -> Option<String> {
        self.last_error.take()
    }

    /// Atomically installs a new query identity and discards the session's
    /// accumulated results. All replace-triggering actions go through here
    /// so no intermediate mix of old and new fields is ever visible.
    pub(crate) fn replace_identity(&mut self, identity: QueryIdentity) -> Query {
        self.identity = identity;
        self.accumulated.clear();
        self.current_page = 1;
        self.end_reached = false;
        Query::first_page(self.identity.clone())
    }

    /// Next page of the current identity, for an append fetch.
    pub(crate) fn next_page_query(&self) -> Query {
        Query::new(self.current_page + 1, self.identity.clone())
    }

    pub(crate) fn begin_fetch(&mut self) {
        self.phase = FetchPhase::Fetching;
    }

    pub(crate) fn latch_end(&mut self) {
        self.end_reached = true;
    }

    pub(crate) fn release_end(&mut self) {
        self.end_reached = false;
    }

    /// Applies a successful page. Replace overwrites the list; append
    /// concatenates in arrival order, duplicates and all.
    pub(crate) fn apply_page(&mut self, mode: LoadMode, page: ResultPage) {
        match mode {
            LoadMode::Replace => self.accumulated = page.items,
            LoadMode::Append => self.accumulated.extend(page.items),
        }
        self.current_page = page.requested_page;
        self.phase = FetchPhase::Idle;
    }

    /// Records a failed fetch. Nothing else changes: the list, page counter
    /// and identity all keep their pre-fetch values.
    pub(crate) fn fail_fetch(&mut self, message: String) {
        self.last_error = Some(message);
        self.phase = FetchPhase::Idle;
    }
}

impl Default for ClientState {
    fn default() -> Self {
        Self {
            accumulated: Vec::new(),
            current_page: 1,
            identity: QueryIdentity::default(),
            end_reached: false,
            phase: FetchPhase::Idle,
            last_error: None,
        }
    }
}
