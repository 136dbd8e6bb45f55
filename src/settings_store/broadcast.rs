use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use tokio::{
    sync::mpsc::{self, Receiver, Sender},
    task::JoinHandle,
};
use tracing::{debug, trace};

use super::{SettingsChange, SettingsError, path_ops::path_matches};

const COMMAND_BUFFER: usize = 100;
const SUBSCRIBER_BUFFER: usize = 100;

/// Commands sent to the broadcast actor task
enum BroadcastCommand {
    Subscribe {
        id: usize,
        pattern: String,
        sender: Sender<SettingsChange>,
    },
    Unsubscribe {
        id: usize,
    },
    /// Changes from one update, delivered in order
    Broadcast(Vec<SettingsChange>),
}

struct ActorSubscription {
    id: usize,
    pattern: String,
    sender: Sender<SettingsChange>,
}

/// A subscription to settings changes.
///
/// Dropping the handle unsubscribes, so a torn-down view stops receiving
/// notifications without explicit cleanup.
pub struct Subscription {
    id: usize,
    service: BroadcastService,
    receiver: Receiver<SettingsChange>,
}

/// Handle to the broadcast actor.
///
/// The actor task owns all subscriber state and processes commands
/// sequentially, so subscribe, unsubscribe and broadcast never race.
#[derive(Clone)]
pub(super) struct BroadcastService {
    command_tx: Sender<BroadcastCommand>,
    next_id: Arc<AtomicUsize>,
    _handle: Arc<JoinHandle<()>>,
}

impl BroadcastService {
    /// Spawns the actor task. Must be called inside a tokio runtime.
    pub(super) fn new() -> Self {
        let (command_tx, mut command_rx) = mpsc::channel(COMMAND_BUFFER);

        let handle = tokio::spawn(async move {
            broadcast_actor_loop(&mut command_rx).await;
        });

        Self {
            command_tx,
            next_id: Arc::new(AtomicUsize::new(1)),
            _handle: Arc::new(handle),
        }
    }

    /// Subscribe to changes whose path matches `pattern`.
    ///
    /// # Errors
    /// Returns `SettingsError::ServiceUnavailable` if the actor is not running.
    pub(super) async fn subscribe(&self, pattern: &str) -> Result<Subscription, SettingsError> {
        let (tx, rx) = mpsc::channel(SUBSCRIBER_BUFFER);
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);

        self.command_tx
            .send(BroadcastCommand::Subscribe {
                id,
                pattern: pattern.to_string(),
                sender: tx,
            })
            .await
            .map_err(|_| unavailable())?;

        Ok(Subscription {
            id,
            service: self.clone(),
            receiver: rx,
        })
    }

    /// Deliver a batch of changes to all matching subscribers.
    ///
    /// # Errors
    /// Returns `SettingsError::ServiceUnavailable` if the actor is not running.
    pub(super) async fn broadcast(&self, changes: Vec<SettingsChange>) -> Result<(), SettingsError> {
        self.command_tx
            .send(BroadcastCommand::Broadcast(changes))
            .await
            .map_err(|_| unavailable())
    }
}

fn unavailable() -> SettingsError {
    SettingsError::ServiceUnavailable {
        service: "broadcast".to_string(),
        details: "Broadcast service is not running".to_string(),
    }
}

impl Subscription {
    /// Waits for the next matching change.
    ///
    /// Returns `None` once the store has shut down.
    pub async fn recv(&mut self) -> Option<SettingsChange> {
        self.receiver.recv().await
    }

    /// Takes a change that is already queued, without waiting.
    pub fn try_recv(&mut self) -> Option<SettingsChange> {
        self.receiver.try_recv().ok()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        let _ = self
            .service
            .command_tx
            .try_send(BroadcastCommand::Unsubscribe { id: self.id });
    }
}

async fn broadcast_actor_loop(command_rx: &mut Receiver<BroadcastCommand>) {
    let mut subscriptions: Vec<ActorSubscription> = Vec::new();

    while let Some(command) = command_rx.recv().await {
        match command {
            BroadcastCommand::Subscribe {
                id,
                pattern,
                sender,
            } => {
                debug!(id, %pattern, "Settings subscriber added");
                subscriptions.push(ActorSubscription {
                    id,
                    pattern,
                    sender,
                });
            }

            BroadcastCommand::Unsubscribe { id } => {
                debug!(id, "Settings subscriber removed");
                subscriptions.retain(|sub| sub.id != id);
            }

            BroadcastCommand::Broadcast(changes) => {
                for change in changes {
                    trace!(path = %change.path, "Broadcasting settings change");
                    subscriptions.retain(|sub| {
                        if path_matches(&change.path, &sub.pattern) {
                            sub.sender.try_send(change.clone()).is_ok()
                        } else {
                            true
                        }
                    });
                }
            }
        }
    }
}
