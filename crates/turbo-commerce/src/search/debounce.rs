//! Debouncing for search input.
//!
//! Every keystroke restarts the window; the value that is current when the
//! window finally elapses is the one that gets through.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::Instant;

/// Delay between the last keystroke and the search filter updating.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

/// Deadline-based debounce state, driven by an explicit clock.
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    window: Duration,
    pending: Option<(T, Instant)>,
}

impl<T> Debouncer<T> {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            pending: None,
        }
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    /// Replace the pending value and restart the window from `now`.
    pub fn push(&mut self, value: T, now: Instant) {
        self.pending = Some((value, now + self.window));
    }

    /// Take the pending value if its window has elapsed at `now`.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        match &self.pending {
            Some((_, deadline)) if *deadline <= now => self.pending.take().map(|(v, _)| v),
            _ => None,
        }
    }

    /// When the pending value becomes ready, if there is one.
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|(_, deadline)| *deadline)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Take the pending value without waiting for the window.
    pub fn flush(&mut self) -> Option<T> {
        self.pending.take().map(|(v, _)| v)
    }

    /// Drop the pending value.
    pub fn cancel(&mut self) {
        self.pending = None;
    }
}

/// Input side of a [`debounce`] channel.
#[derive(Debug)]
pub struct DebounceSender<T> {
    tx: mpsc::UnboundedSender<T>,
}

impl<T> Clone for DebounceSender<T> {
    fn clone(&self) -> Self {
        Self {
            tx: self.tx.clone(),
        }
    }
}

impl<T> DebounceSender<T> {
    /// Push a new value. Returns `false` once the output side is gone.
    pub fn send(&self, value: T) -> bool {
        self.tx.send(value).is_ok()
    }
}

/// Spawn a debouncing task on the current tokio runtime.
///
/// Values sent to the returned sender come out of the receiver only after
/// `window` has passed without a newer value. When every sender is dropped
/// the pending value (if any) is delivered immediately and the receiver
/// then closes.
///
/// # Panics
///
/// Panics if called outside a tokio runtime.
pub fn debounce<T: Send + 'static>(
    window: Duration,
) -> (DebounceSender<T>, mpsc::UnboundedReceiver<T>) {
    let (in_tx, mut in_rx) = mpsc::unbounded_channel::<T>();
    let (out_tx, out_rx) = mpsc::unbounded_channel::<T>();

    tokio::spawn(async move {
        let mut state = Debouncer::new(window);
        loop {
            let deadline = state.deadline();
            tokio::select! {
                msg = in_rx.recv() => match msg {
                    Some(value) => state.push(value, Instant::now()),
                    None => {
                        if let Some(value) = state.flush() {
                            let _ = out_tx.send(value);
                        }
                        break;
                    }
                },
                _ = tokio::time::sleep_until(deadline.unwrap_or_else(Instant::now)), if deadline.is_some() => {
                    if let Some(value) = state.poll(Instant::now()) {
                        if out_tx.send(value).is_err() {
                            break;
                        }
                    }
                }
            }
        }
        tracing::trace!("debounce task finished");
    });

    (DebounceSender { tx: in_tx }, out_rx)
}
