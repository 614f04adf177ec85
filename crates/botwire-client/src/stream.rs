//! Bounded update stream (one producer, any number of consumers).
//!
//! Built as an explicit locked queue with two wakeup latches rather than an
//! mpsc channel: the bulk-discard operation must be race-free against a
//! live producer and complete in time bounded by the current buffer depth,
//! which a receive-and-discard loop over a channel cannot guarantee.
//!
//! Lifecycle: Open (producer writing) → Draining (producer gone, backlog
//! still readable) → Closed (empty and ended). There is no reopening.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};

use tokio::sync::Notify;
use tracing::debug;

use botwire_core::error::{BotWireError, Result};
use botwire_core::protocol::update::Update;

/// Creates a bounded update stream. Returns the single producer handle and
/// one consumer handle; clone the receiver for additional consumers.
pub fn update_channel(capacity: usize) -> (UpdatesSender, UpdatesReceiver) {
    let shared = Arc::new(Shared {
        capacity: capacity.max(1),
        inner: Mutex::new(Inner {
            buf: VecDeque::new(),
            closed: false,
            receivers: 1,
        }),
        readable: Notify::new(),
        writable: Notify::new(),
    });
    (
        UpdatesSender {
            shared: Arc::clone(&shared),
        },
        UpdatesReceiver { shared },
    )
}

struct Inner {
    buf: VecDeque<Update>,
    /// Producer gone (explicit close or drop). Buffered items stay readable.
    closed: bool,
    /// Live consumer handles. At zero, sends can never be observed.
    receivers: usize,
}

struct Shared {
    capacity: usize,
    inner: Mutex<Inner>,
    /// Signalled on push and on close.
    readable: Notify,
    /// Signalled on pop, on drain, and when the last receiver goes away.
    writable: Notify,
}

impl Shared {
    /// A poisoned lock only means a panic elsewhere while holding it; the
    /// queue state itself stays consistent, so keep going.
    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}

/// Producer half. Not cloneable: the stream has exactly one writer.
pub struct UpdatesSender {
    shared: Arc<Shared>,
}

impl UpdatesSender {
    /// Queue one update, FIFO. Suspends while the buffer is at capacity
    /// (back-pressure). Fails with [`BotWireError::StreamClosed`] once the
    /// stream can no longer deliver.
    pub async fn send(&self, update: Update) -> Result<()> {
        loop {
            let writable = self.shared.writable.notified();
            tokio::pin!(writable);
            // Register interest before re-checking state, so a pop/drain
            // between the check and the await cannot be missed.
            writable.as_mut().enable();
            {
                let mut inner = self.shared.lock();
                if inner.closed || inner.receivers == 0 {
                    return Err(BotWireError::StreamClosed);
                }
                if inner.buf.len() < self.shared.capacity {
                    inner.buf.push_back(update);
                    drop(inner);
                    self.shared.readable.notify_one();
                    return Ok(());
                }
            }
            writable.as_mut().await;
        }
    }

    /// Stop the stream: Open → Draining. Buffered items remain readable;
    /// consumers blocked in `recv` wake and observe end-of-stream once the
    /// backlog is gone.
    pub fn close(&self) {
        let mut inner = self.shared.lock();
        if !inner.closed {
            inner.closed = true;
            drop(inner);
            debug!("update stream closed");
            self.shared.readable.notify_waiters();
        }
    }
}

impl Drop for UpdatesSender {
    fn drop(&mut self) {
        self.close();
    }
}

/// Consumer half. Cloneable; all clones drain the same buffer.
pub struct UpdatesReceiver {
    shared: Arc<Shared>,
}

impl UpdatesReceiver {
    /// Next update in arrival order. Suspends until an item is available;
    /// `None` means the stream reached Closed with an empty buffer.
    pub async fn recv(&self) -> Option<Update> {
        loop {
            let readable = self.shared.readable.notified();
            tokio::pin!(readable);
            readable.as_mut().enable();
            {
                let mut inner = self.shared.lock();
                if let Some(update) = inner.buf.pop_front() {
                    drop(inner);
                    self.shared.writable.notify_one();
                    return Some(update);
                }
                if inner.closed {
                    return None;
                }
            }
            readable.as_mut().await;
        }
    }

    /// Discard everything currently buffered, without blocking. Items the
    /// producer queues after this returns are untouched. Returns how many
    /// updates were dropped; zero on an already-empty buffer.
    pub fn drain_all(&self) -> usize {
        let dropped = {
            let mut inner = self.shared.lock();
            let n = inner.buf.len();
            inner.buf.clear();
            n
        };
        if dropped > 0 {
            debug!(dropped, "drained update backlog");
            // The producer may be parked on a full buffer; it has room now.
            self.shared.writable.notify_waiters();
        }
        dropped
    }

    /// Number of updates currently buffered.
    pub fn len(&self) -> usize {
        self.shared.lock().buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Clone for UpdatesReceiver {
    fn clone(&self) -> Self {
        self.shared.lock().receivers += 1;
        Self {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl Drop for UpdatesReceiver {
    fn drop(&mut self) {
        let mut inner = self.shared.lock();
        inner.receivers -= 1;
        let last = inner.receivers == 0;
        drop(inner);
        if last {
            // A producer parked on a full buffer must observe the closure.
            self.shared.writable.notify_waiters();
        }
    }
}
