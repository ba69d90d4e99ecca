// src/debounce/debouncer.rs
// =============================================================================
// Timer-based debouncer running as a background tokio task.
//
// How it works:
// 1. Wait for a raw value
// 2. Keep waiting for newer values; each one restarts the quiet period
// 3. When the quiet period passes with no new value, emit the last value
//    (unless it equals the previously emitted one)
// 4. When the input side is dropped, flush any pending value and stop
//
// The last value of a burst is never lost: it is either emitted after the
// quiet period or flushed when the input closes.
// =============================================================================

use std::time::Duration;
use tokio::sync::mpsc;
use tracing::trace;

pub struct Debouncer;

impl Debouncer {
    // Starts a debouncer task and returns its two ends
    //
    // `initial` counts as already emitted, so setting the input back to it
    // does not produce a value (nothing changed).
    //
    // Must be called from inside a tokio runtime.
    pub fn new<T>(initial: T, delay: Duration) -> (DebounceInput<T>, DebouncedValues<T>)
    where
        T: Clone + PartialEq + Send + 'static,
    {
        let (raw_tx, raw_rx) = mpsc::unbounded_channel();
        let (out_tx, out_rx) = mpsc::unbounded_channel();

        tokio::spawn(run(raw_rx, out_tx, initial, delay));

        (DebounceInput { tx: raw_tx }, DebouncedValues { rx: out_rx })
    }
}

/// Write end: feed every raw input value here
#[derive(Debug)]
pub struct DebounceInput<T> {
    tx: mpsc::UnboundedSender<T>,
}

impl<T> DebounceInput<T> {
    pub fn set(&self, value: T) {
        // Only fails if the task is gone, which means nobody is listening
        let _ = self.tx.send(value);
    }
}

/// Read end: yields stabilized values
#[derive(Debug)]
pub struct DebouncedValues<T> {
    rx: mpsc::UnboundedReceiver<T>,
}

impl<T> DebouncedValues<T> {
    // Next stabilized value, or None once the input is closed and drained
    pub async fn next(&mut self) -> Option<T> {
        self.rx.recv().await
    }
}

async fn run<T>(
    mut raw: mpsc::UnboundedReceiver<T>,
    out: mpsc::UnboundedSender<T>,
    mut last: T,
    delay: Duration,
) where
    T: Clone + PartialEq,
{
    let mut pending: Option<T> = None;

    loop {
        let Some(value) = pending.take() else {
            match raw.recv().await {
                Some(value) => pending = Some(value),
                None => return,
            }
            continue;
        };

        match tokio::time::timeout(delay, raw.recv()).await {
            // Newer value inside the window: restart the quiet period
            Ok(Some(newer)) => pending = Some(newer),
            // Input closed: flush what we have
            Ok(None) => {
                emit(&out, &mut last, value);
                return;
            }
            // Quiet period elapsed
            Err(_) => {
                if !emit(&out, &mut last, value) {
                    return;
                }
            }
        }
    }
}

// Sends `value` if it differs from the last emitted one.
// Returns false when the receiver is gone.
fn emit<T: Clone + PartialEq>(out: &mpsc::UnboundedSender<T>, last: &mut T, value: T) -> bool {
    if value == *last {
        trace!("debounced value unchanged, skipping");
        return true;
    }
    *last = value.clone();
    out.send(value).is_ok()
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why a background task instead of a timer per keystroke?
//    - One task owns the "pending" value, so there is no shared state to lock
//    - Each new value simply restarts the wait inside the loop
//
// 2. What does tokio::time::timeout do here?
//    - It races `raw.recv()` against the quiet period
//    - Ok(..) means a message (or channel close) came first
//    - Err(Elapsed) means the input stayed quiet for `delay`
//
// 3. What is `let ... else`?
//    - Like `if let`, but the else branch must leave the scope
//      (return, break or continue)
//    - It keeps the happy path unindented
//
// 4. Why unbounded channels?
//    - Input arrives at typing speed, so the queue never gets large
//    - `send` on an unbounded channel never waits, so `set` can stay sync
// -----------------------------------------------------------------------------
