use crate::Query;

/// Whether a finished page extends or overwrites the accumulated list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadMode {
    Replace,
    Append,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    Fetch { query: Query, mode: LoadMode },
}
