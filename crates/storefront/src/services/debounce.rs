//! Debounced query submission.
//!
//! Interactive clients re-run the catalog query on every keystroke. The
//! debouncer absorbs that burst: each submission restarts the window, and
//! only the spec still pending when the window elapses is released. Queries
//! themselves stay cheap and stateless; coalescing is purely a client-side
//! concern, so it lives here rather than in the query pipeline.

use std::time::Duration;

use tokio::sync::mpsc;

use roastline_catalog::QuerySpec;

/// Default debounce window for search-as-you-type input.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(400);

/// Coalesces a burst of query specs down to the last one.
#[derive(Debug, Clone)]
pub struct QueryDebouncer {
    tx: mpsc::UnboundedSender<QuerySpec>,
}

impl QueryDebouncer {
    /// Spawn the debouncer task.
    ///
    /// Returns the handle for submitting specs and the receiver that yields
    /// one spec per settled burst. The task exits when the handle is dropped,
    /// flushing any still-pending spec first.
    #[must_use]
    pub fn spawn(window: Duration) -> (Self, mpsc::UnboundedReceiver<QuerySpec>) {
        let (tx, mut rx) = mpsc::unbounded_channel::<QuerySpec>();
        let (out_tx, out_rx) = mpsc::unbounded_channel();

        tokio::spawn(async move {
            let mut pending: Option<QuerySpec> = None;
            loop {
                match pending.take() {
                    None => match rx.recv().await {
                        Some(spec) => pending = Some(spec),
                        None => break,
                    },
                    Some(spec) => {
                        tokio::select! {
                            () = tokio::time::sleep(window) => {
                                if out_tx.send(spec).is_err() {
                                    break;
                                }
                            }
                            next = rx.recv() => match next {
                                // A newer spec restarts the window.
                                Some(newer) => pending = Some(newer),
                                None => {
                                    let _ = out_tx.send(spec);
                                    break;
                                }
                            }
                        }
                    }
                }
            }
        });

        (Self { tx }, out_rx)
    }

    /// Submit a spec, restarting the debounce window.
    pub fn submit(&self, spec: QuerySpec) {
        // Receiver only drops when the task has exited; nothing to do then.
        let _ = self.tx.send(spec);
    }
}
