use std::io;
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use catalog_logging::{catalog_debug, catalog_info};

use crate::fetch::{CatalogSettings, PageFetcher, ReqwestPageFetcher};
use crate::{EngineEvent, PageQuery, RequestId};

enum EngineCommand {
    FetchPage { request_id: RequestId, query: PageQuery },
}

/// Runs catalog requests on a background tokio runtime.
///
/// Requests are independent: a later request does not cancel an earlier one,
/// and results arrive in completion order. Callers tag requests to tell them apart.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(settings: CatalogSettings) -> io::Result<Self> {
        let fetcher = ReqwestPageFetcher::new(settings).map_err(io::Error::other)?;
        Self::with_fetcher(Arc::new(fetcher))
    }

    pub fn with_fetcher(fetcher: Arc<dyn PageFetcher>) -> io::Result<Self> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()?;

        thread::Builder::new()
            .name("artwork-engine".to_string())
            .spawn(move || {
                while let Ok(command) = cmd_rx.recv() {
                    let fetcher = fetcher.clone();
                    let event_tx = event_tx.clone();
                    runtime.spawn(async move {
                        handle_command(fetcher.as_ref(), command, event_tx).await;
                    });
                }
                catalog_info!("Engine command channel closed; shutting down");
            })?;

        Ok(Self { cmd_tx, event_rx })
    }

    pub fn fetch_page(&self, request_id: RequestId, query: PageQuery) {
        let _ = self
            .cmd_tx
            .send(EngineCommand::FetchPage { request_id, query });
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }
}

async fn handle_command(
    fetcher: &dyn PageFetcher,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::FetchPage { request_id, query } => {
            catalog_debug!(
                "Request {} fetching page {} limit {}",
                request_id,
                query.page,
                query.limit
            );
            let result = fetcher.fetch_page(query).await;
            let _ = event_tx.send(EngineEvent::PageFetched { request_id, result });
        }
    }
}
