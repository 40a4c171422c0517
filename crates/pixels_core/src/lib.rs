//! Pixels core: pure query construction and result-aggregation state machine.
mod debounce;
mod effect;
mod item;
mod msg;
mod query;
mod request;
mod state;
mod update;
mod view_model;

pub use debounce::{SearchDebouncer, DEBOUNCE_QUIET};
pub use effect::{Effect, LoadMode};
pub use item::{ResultItem, ResultPage};
pub use msg::Msg;
pub use query::{FilterKey, FilterSet, Query, QueryIdentity, SEARCH_MIN_CHARS};
pub use request::{build_request, BaselineConfig};
pub use state::{ClientState, FetchPhase};
pub use update::update;
pub use view_model::{FilterChipView, GridItemView, GridViewModel};
