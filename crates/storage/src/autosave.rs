//! Debounced background persistence.
//!
//! The [`AutoSaver`] task listens to repository change events and writes
//! each touched collection once the event stream has been quiet for the
//! debounce window. `Cleared` collections are removed from storage instead.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

use habitally_store::{ChangeEvent, ChangeKind, Collection, Repository};
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::sync::{oneshot, Mutex};
use tokio::task::JoinHandle;
use tokio::time::{sleep_until, Instant};
use tracing::{debug, info, warn};

use super::codec::encode;
use super::{Result, Storage};

/// Repository shared between the front-end and the autosaver.
pub type SharedRepository = Arc<Mutex<Repository>>;

/// Configuration for the autosaver.
#[derive(Debug, Clone)]
pub struct AutoSaveConfig {
    /// Quiet period required before pending changes are written
    pub debounce: Duration,
}

impl Default for AutoSaveConfig {
    fn default() -> Self {
        Self {
            debounce: Duration::from_millis(500),
        }
    }
}

/// Handle to a running autosave task.
pub struct AutoSaver {
    handle: JoinHandle<()>,
    shutdown: oneshot::Sender<()>,
}

impl AutoSaver {
    /// Subscribe to `repo` and start persisting its changes to `storage`.
    pub async fn attach<S>(repo: SharedRepository, storage: Arc<S>, config: AutoSaveConfig) -> Self
    where
        S: Storage + 'static,
    {
        let events = repo.lock().await.subscribe();
        let (shutdown, stop) = oneshot::channel();
        let handle = tokio::spawn(run(repo, events, storage, config, stop));
        Self { handle, shutdown }
    }

    /// Stop the task after writing anything still pending.
    pub async fn shutdown(self) {
        let _ = self.shutdown.send(());
        if let Err(e) = self.handle.await {
            warn!("Autosave task failed: {}", e);
        }
    }
}

async fn run<S: Storage + ?Sized>(
    repo: SharedRepository,
    mut events: UnboundedReceiver<ChangeEvent>,
    storage: Arc<S>,
    config: AutoSaveConfig,
    mut stop: oneshot::Receiver<()>,
) {
    let mut pending: BTreeMap<Collection, ChangeKind> = BTreeMap::new();
    let mut deadline = Instant::now();

    loop {
        tokio::select! {
            event = events.recv() => match event {
                Some(event) => {
                    pending.insert(event.collection, event.kind);
                    deadline = Instant::now() + config.debounce;
                }
                None => break,
            },
            _ = sleep_until(deadline), if !pending.is_empty() => {
                flush(&repo, storage.as_ref(), &mut pending).await;
            }
            _ = &mut stop => break,
        }
    }

    while let Ok(event) = events.try_recv() {
        pending.insert(event.collection, event.kind);
    }
    flush(&repo, storage.as_ref(), &mut pending).await;
    info!("Autosave stopped");
}

/// Write or remove every pending collection, logging failures.
async fn flush<S: Storage + ?Sized>(
    repo: &SharedRepository,
    storage: &S,
    pending: &mut BTreeMap<Collection, ChangeKind>,
) {
    if pending.is_empty() {
        return;
    }

    // Encode under the lock, write after releasing it.
    let batch: Vec<(Collection, Option<Result<Vec<u8>>>)> = {
        let repo = repo.lock().await;
        std::mem::take(pending)
            .into_iter()
            .map(|(collection, kind)| match kind {
                ChangeKind::Updated => (collection, Some(encode(&repo, collection))),
                ChangeKind::Cleared => (collection, None),
            })
            .collect()
    };

    for (collection, bytes) in batch {
        let outcome = match bytes {
            Some(Ok(bytes)) => storage.save(collection.key(), &bytes).await,
            Some(Err(e)) => Err(e),
            None => storage.remove(collection.key()).await,
        };
        match outcome {
            Ok(()) => debug!("Persisted {}", collection),
            Err(e) => warn!("Failed to persist {}: {}", collection, e),
        }
    }
}
