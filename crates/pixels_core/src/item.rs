use serde::{Deserialize, Serialize};

/// One record from the remote search source. The aggregator treats it as an
/// opaque bag: the named fields are the ones consumed downstream for layout
/// and download, everything else rides along verbatim in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultItem {
    pub id: u64,
    #[serde(rename = "previewURL")]
    pub preview_url: String,
    #[serde(rename = "webformatURL")]
    pub webformat_url: String,
    #[serde(rename = "imageWidth")]
    pub image_width: u32,
    #[serde(rename = "imageHeight")]
    pub image_height: u32,
    #[serde(default)]
    pub tags: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl ResultItem {
    /// Local file name for a download: the last path segment of the preview
    /// URL, or a fixed fallback when the URL has no usable segment.
    pub fn download_file_name(&self) -> String {
        self.preview_url
            .rsplit('/')
            .next()
            .filter(|segment| !segment.is_empty())
            .unwrap_or("image")
            .to_string()
    }
}

/// One page of items returned for a query.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResultPage {
    pub items: Vec<ResultItem>,
    pub requested_page: u32,
}
