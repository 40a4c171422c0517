//! Pixels engine: remote search execution and image downloads.
mod client;
mod download;
mod engine;
mod types;

pub use client::{ClientSettings, PixabayClient, SearchApi};
pub use download::{DownloadError, DownloadSettings, ImageDownloader};
pub use engine::EngineHandle;
pub use types::{ApiError, EngineEvent, FailureKind};
