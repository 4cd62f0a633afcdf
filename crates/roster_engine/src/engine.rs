use std::sync::{mpsc, Arc};
use std::thread;

use roster_logging::{roster_debug, roster_warn};

use crate::fetch::{FetchSettings, PageFetcher, ReqwestFetcher};
use crate::{EngineEvent, FetchError, RequestId};

enum EngineCommand {
    FetchPage { request: RequestId, page: u32 },
}

/// Handle to the engine thread. Commands go in over a channel; results
/// come back as [`EngineEvent`]s on the receiver returned by
/// [`EngineHandle::start`].
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
}

impl EngineHandle {
    /// Spawns the engine thread with its own tokio runtime.
    pub fn start(
        settings: FetchSettings,
    ) -> Result<(Self, mpsc::Receiver<EngineEvent>), FetchError> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let fetcher = Arc::new(ReqwestFetcher::new(settings)?);

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            while let Ok(command) = cmd_rx.recv() {
                let fetcher = fetcher.clone();
                let event_tx = event_tx.clone();
                // Commands are spawned, not awaited: several fetches may
                // be in flight at once, and resolutions arrive in
                // whatever order the network produces them.
                runtime.spawn(async move {
                    handle_command(fetcher.as_ref(), command, event_tx).await;
                });
            }
        });

        Ok((Self { cmd_tx }, event_rx))
    }

    pub fn fetch_page(&self, request: RequestId, page: u32) {
        let _ = self.cmd_tx.send(EngineCommand::FetchPage { request, page });
    }
}

async fn handle_command(
    fetcher: &dyn PageFetcher,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::FetchPage { request, page } => {
            roster_debug!("fetching page {page} (request {request})");
            let result: Result<_, FetchError> = fetcher.fetch_page(page).await;
            if let Err(err) = &result {
                roster_warn!("page {page} fetch failed: {err}");
            }
            let _ = event_tx.send(EngineEvent::PageFetched {
                request,
                page,
                result,
            });
        }
    }
}
