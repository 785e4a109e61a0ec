use std::sync::Arc;
use std::time::Duration;

use recordseal_canonical::Fingerprint;
use recordseal_record::{transform_form, ProfileForm};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::debug;

/// Default settle delay before a fingerprint is recomputed.
pub const DEFAULT_SETTLE_DELAY: Duration = Duration::from_millis(300);

/// Recomputes a profile fingerprint after input settles.
///
/// Each [`submit`](Self::submit) aborts the in-flight timer task and starts
/// a fresh one; only a task that sleeps through the full delay uninterrupted
/// publishes its fingerprint on the watch channel. A superseded submission
/// therefore never emits, and the caller is never blocked.
pub struct DebouncedFingerprint {
    delay: Duration,
    tx: Arc<watch::Sender<Option<Fingerprint>>>,
    task: Option<JoinHandle<()>>,
}

impl DebouncedFingerprint {
    /// Creates a debouncer with the given settle delay.
    pub fn new(delay: Duration) -> Self {
        let (tx, _rx) = watch::channel(None);
        Self {
            delay,
            tx: Arc::new(tx),
            task: None,
        }
    }

    /// Subscribes to published fingerprints.
    ///
    /// The value is `None` until a submission settles, and reverts to `None`
    /// after [`reset`](Self::reset) or when a submission fails to transform.
    pub fn subscribe(&self) -> watch::Receiver<Option<Fingerprint>> {
        self.tx.subscribe()
    }

    /// Restarts the settle timer with a new form snapshot.
    pub fn submit(&mut self, form: ProfileForm) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
        let tx = Arc::clone(&self.tx);
        let delay = self.delay;
        self.task = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            match transform_form(&form) {
                Ok(record) => {
                    let _ = tx.send(Some(record.fingerprint()));
                }
                Err(err) => {
                    debug!(error = %err, "form rejected before fingerprinting");
                    let _ = tx.send(None);
                }
            }
        }));
    }

    /// Abandons any in-flight computation and clears the published value.
    pub fn reset(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
        let _ = self.tx.send(None);
    }
}

impl Default for DebouncedFingerprint {
    fn default() -> Self {
        Self::new(DEFAULT_SETTLE_DELAY)
    }
}

impl Drop for DebouncedFingerprint {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}
