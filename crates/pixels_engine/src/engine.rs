use std::sync::{mpsc, Arc};
use std::thread;

use pixels_core::{LoadMode, Query};

use crate::client::SearchApi;
use crate::{EngineEvent, ImageDownloader, PixabayClient};

enum EngineCommand {
    Fetch { query: Query, mode: LoadMode },
    Download { url: String, file_name: String },
}

/// Bridge between the synchronous event loop and the async IO side: commands
/// go in over a channel, results come back as `EngineEvent`s. A dedicated
/// thread owns the tokio runtime.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(api: PixabayClient, downloader: ImageDownloader) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel::<EngineEvent>();
        let api = Arc::new(api);
        let downloader = Arc::new(downloader);

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            while let Ok(command) = cmd_rx.recv() {
                let api = api.clone();
                let downloader = downloader.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(api.as_ref(), &downloader, command, event_tx).await;
                });
            }
        });

        Self { cmd_tx, event_rx }
    }

    pub fn fetch(&self, query: Query, mode: LoadMode) {
        let _ = self.cmd_tx.send(EngineCommand::Fetch { query, mode });
    }

    pub fn download(&self, url: impl Into<String>, file_name: impl Into<String>) {
        let _ = self.cmd_tx.send(EngineCommand::Download {
            url: url.into(),
            file_name: file_name.into(),
        });
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }
}

async fn handle_command(
    api: &dyn SearchApi,
    downloader: &ImageDownloader,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::Fetch { query, mode } => {
            let result = api.search(&query).await;
            let _ = event_tx.send(EngineEvent::SearchCompleted {
                query,
                mode,
                result,
            });
        }
        EngineCommand::Download { url, file_name } => {
            let result = downloader
                .download(&url, &file_name)
                .await
                .map_err(|err| err.to_string());
            let _ = event_tx.send(EngineEvent::DownloadCompleted { url, result });
        }
    }
}
