//! Side-channel signalling that a project's child collection changed.
//!
//! Managers call [`ChangeNotifier::children_changed`] after every successful
//! mutation. Downstream consumers (cache invalidation, live previews) decide
//! what to do with it; a notifier must never fail the mutation itself.

use folio_core::ChildKind;

use serde::Serialize;
use tokio::sync::broadcast::{self, error::RecvError};
use tokio::task::JoinHandle;
use uuid::Uuid;

pub const DEFAULT_CHANNEL_CAPACITY: usize = 256;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeEvent {
    pub parent_id: Uuid,
    pub kind: ChildKind,
}

pub trait ChangeNotifier: Send + Sync {
    fn children_changed(&self, parent_id: Uuid, kind: ChildKind);
}

/// Fans events out to every live subscriber.
#[derive(Clone)]
pub struct BroadcastNotifier {
    sender: broadcast::Sender<ChangeEvent>,
}

impl BroadcastNotifier {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ChangeEvent> {
        self.sender.subscribe()
    }

    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }

    /// Subscribe now and log every event from a background task.
    ///
    /// The task ends once every sender is dropped and yields how many events
    /// it logged.
    pub fn spawn_change_logger(&self) -> JoinHandle<u64> {
        let mut rx = self.subscribe();

        tokio::spawn(async move {
            let mut logged: u64 = 0;
            loop {
                match rx.recv().await {
                    Ok(event) => {
                        logged += 1;
                        log::info!(
                            "Children changed: project={} kind={}",
                            event.parent_id,
                            event.kind
                        );
                    }
                    Err(RecvError::Lagged(skipped)) => {
                        log::warn!("Change logger lagged, skipped {} events", skipped);
                    }
                    Err(RecvError::Closed) => break,
                }
            }
            logged
        })
    }
}

impl Default for BroadcastNotifier {
    fn default() -> Self {
        Self::new(DEFAULT_CHANNEL_CAPACITY)
    }
}

impl ChangeNotifier for BroadcastNotifier {
    fn children_changed(&self, parent_id: Uuid, kind: ChildKind) {
        let event = ChangeEvent { parent_id, kind };

        // Err only means nobody is listening
        match self.sender.send(event) {
            Ok(receivers) => log::debug!(
                "Broadcast {} change for project {} to {} subscribers",
                kind,
                parent_id,
                receivers
            ),
            Err(_) => log::trace!("No subscribers for {} change on {}", kind, parent_id),
        }
    }
}

pub struct LogNotifier;

impl ChangeNotifier for LogNotifier {
    fn children_changed(&self, parent_id: Uuid, kind: ChildKind) {
        log::debug!("Children changed: project={} kind={}", parent_id, kind);
    }
}
