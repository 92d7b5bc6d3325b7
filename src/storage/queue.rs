//! Serialized background saves
//!
//! Every save is a read-modify-write of the whole history, so two saves must
//! never overlap. A single worker task owns the store and drains one channel
//! in FIFO order.

use super::{Snapshot, Store};
use std::sync::Arc;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;

enum Command {
    Save { key: String, snapshot: Snapshot },
    Flush(oneshot::Sender<()>),
}

/// Handle for queuing saves onto the worker
///
/// Cloning shares the same worker. The worker exits once every handle is
/// dropped and the queue is drained.
#[derive(Debug, Clone)]
pub struct SaveQueue {
    tx: mpsc::UnboundedSender<Command>,
}

impl SaveQueue {
    /// Spawn the save worker on the current tokio runtime
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime context.
    pub fn spawn(store: Arc<dyn Store>) -> (Self, JoinHandle<()>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let handle = tokio::spawn(run_worker(store, rx));
        (Self { tx }, handle)
    }

    /// Queue a save without waiting for it
    ///
    /// Safe to call from synchronous code. Returns `false` if the worker has
    /// already shut down.
    pub fn enqueue(&self, key: impl Into<String>, snapshot: Snapshot) -> bool {
        let sent = self
            .tx
            .send(Command::Save {
                key: key.into(),
                snapshot,
            })
            .is_ok();
        if !sent {
            tracing::warn!("save worker is gone, snapshot dropped");
        }
        sent
    }

    /// Wait until every save queued before this call has finished
    pub async fn flush(&self) {
        let (done_tx, done_rx) = oneshot::channel();
        if self.tx.send(Command::Flush(done_tx)).is_ok() {
            let _ = done_rx.await;
        }
    }
}

async fn run_worker(store: Arc<dyn Store>, mut rx: mpsc::UnboundedReceiver<Command>) {
    while let Some(command) = rx.recv().await {
        match command {
            Command::Save { key, snapshot } => {
                if let Err(err) = store.save(&key, &snapshot).await {
                    tracing::warn!(%key, error = %err, "failed to persist session");
                } else {
                    tracing::debug!(%key, row = snapshot.cur_row, col = snapshot.cur_col, "session persisted");
                }
            }
            Command::Flush(done) => {
                let _ = done.send(());
            }
        }
    }
    tracing::debug!("save worker stopped");
}
