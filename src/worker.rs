use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;

use crate::action::Action;
use crate::client::QuakeSource;
use crate::connectivity;

#[derive(Debug)]
pub enum FeedRequest {
    Load { request_id: u64, url: String },
}

#[derive(Clone)]
pub struct FeedHandle {
    tx: mpsc::UnboundedSender<FeedRequest>,
}

impl FeedHandle {
    pub fn send(&self, request: FeedRequest) {
        let _ = self.tx.send(request);
    }
}

/// Runs fetches off the UI task, one at a time. Loads queued behind a running
/// fetch collapse into the newest one.
pub struct FeedWorker {
    source: Arc<dyn QuakeSource>,
    rx: mpsc::UnboundedReceiver<FeedRequest>,
    action_tx: mpsc::UnboundedSender<Action>,
    connectivity_timeout: Option<Duration>,
}

impl FeedWorker {
    /// `connectivity_timeout` of `None` skips the reachability probe.
    pub fn new(
        source: Arc<dyn QuakeSource>,
        action_tx: mpsc::UnboundedSender<Action>,
        connectivity_timeout: Option<Duration>,
    ) -> (Self, FeedHandle) {
        let (tx, rx) = mpsc::unbounded_channel();
        let handle = FeedHandle { tx };
        let worker = Self {
            source,
            rx,
            action_tx,
            connectivity_timeout,
        };
        (worker, handle)
    }

    pub async fn run(mut self) {
        while let Some(mut request) = self.rx.recv().await {
            while let Ok(newer) = self.rx.try_recv() {
                let FeedRequest::Load { request_id, .. } = &request;
                tracing::debug!(request_id, "skipping superseded feed request");
                request = newer;
            }
            let action = self.process(request).await;
            if self.action_tx.send(action).is_err() {
                break;
            }
        }
    }

    async fn process(&self, request: FeedRequest) -> Action {
        match request {
            FeedRequest::Load { request_id, url } => {
                if let Some(timeout) = self.connectivity_timeout {
                    if !connectivity::is_online(&url, timeout).await {
                        return Action::Offline { request_id };
                    }
                }
                let quakes = self.source.fetch(&url).await;
                Action::QuakesLoaded { request_id, quakes }
            }
        }
    }
}
