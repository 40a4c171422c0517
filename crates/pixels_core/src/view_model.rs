use crate::{ClientState, FetchPhase, FilterKey};

/// Read-only projection of `ClientState` for rendering.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GridViewModel {
    pub items: Vec<GridItemView>,
    pub fetching: bool,
    pub current_page: u32,
    pub term: Option<String>,
    pub category: Option<String>,
    pub filter_chips: Vec<FilterChipView>,
    pub error: Option<String>,
}

/// What the masonry grid needs per cell: the image and its aspect data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridItemView {
    pub id: u64,
    pub image_url: String,
    pub width: u32,
    pub height: u32,
}

/// One active-filter chip. The color filter renders as a swatch rather than
/// a text label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterChipView {
    pub key: FilterKey,
    pub value: String,
    pub is_color: bool,
}

impl ClientState {
    pub fn view(&self) -> GridViewModel {
        GridViewModel {
            items: self
                .items()
                .iter()
                .map(|item| GridItemView {
                    id: item.id,
                    image_url: item.webformat_url.clone(),
                    width: item.image_width,
                    height: item.image_height,
                })
                .collect(),
            fetching: self.phase() == FetchPhase::Fetching,
            current_page: self.current_page(),
            term: self.identity().term.clone(),
            category: self.identity().category.clone(),
            filter_chips: self
                .identity()
                .filters
                .iter()
                .map(|(key, value)| FilterChipView {
                    key: *key,
                    value: value.clone(),
                    is_color: *key == FilterKey::Colors,
                })
                .collect(),
            error: self.last_error().map(ToOwned::to_owned),
        }
    }
}
