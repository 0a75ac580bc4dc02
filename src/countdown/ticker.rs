//! Live countdown session with an explicit start/stop lifecycle.
//!
//! A [`CountdownTicker`] owns at most one session: a worker thread that wakes
//! once per interval, reads the injected [`TimeSource`] and hands a fresh
//! [`CountdownState`] to the session's callback. Starting again replaces the
//! session, stopping joins the worker, and dropping the ticker stops it.

use chrono::{DateTime, Utc};
use std::any::Any;
use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use super::CountdownState;
use crate::constants::TICK_INTERVAL;
use crate::time_source::TimeSource;

struct Session {
    target: DateTime<Utc>,
    stop_tx: Sender<()>,
    worker: JoinHandle<()>,
    latest: Arc<Mutex<Option<CountdownState>>>,
}

/// Owned handle for the countdown of one display context.
pub struct CountdownTicker {
    time_source: Arc<dyn TimeSource>,
    interval: Duration,
    session: Option<Session>,
}

impl CountdownTicker {
    pub fn new(time_source: Arc<dyn TimeSource>) -> Self {
        Self {
            time_source,
            interval: TICK_INTERVAL,
            session: None,
        }
    }

    /// Override the tick cadence.
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Start counting down to `target`.
    ///
    /// Any running session is stopped first, so one ticker never drives two
    /// tick streams. The first reading is delivered before this returns, on
    /// the caller's thread; later readings come from the worker.
    pub fn start<F>(&mut self, target: DateTime<Utc>, mut on_tick: F)
    where
        F: FnMut(&CountdownState) + Send + 'static,
    {
        self.stop();

        let latest = Arc::new(Mutex::new(None));
        let initial = CountdownState::at(target, self.time_source.now());
        on_tick(&initial);
        store(&latest, initial);

        let (stop_tx, stop_rx) = mpsc::channel::<()>();
        let time_source = Arc::clone(&self.time_source);
        let interval = self.interval;
        let worker_latest = Arc::clone(&latest);

        let worker = thread::spawn(move || {
            loop {
                match stop_rx.recv_timeout(interval) {
                    Err(RecvTimeoutError::Timeout) => {
                        let state = CountdownState::at(target, time_source.now());
                        on_tick(&state);
                        store(&worker_latest, state);
                    }
                    Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                }
            }
        });

        self.session = Some(Session {
            target,
            stop_tx,
            worker,
            latest,
        });
    }

    /// Cancel the running session, if any.
    ///
    /// Idempotent. Once this returns no further callback runs.
    pub fn stop(&mut self) {
        if let Some(session) = self.session.take() {
            let _ = session.stop_tx.send(());
            if let Err(payload) = session.worker.join() {
                log_warning!("Countdown worker panicked: {}", panic_message(payload));
            }
        }
    }

    pub fn is_running(&self) -> bool {
        self.session.is_some()
    }

    /// Target of the running session.
    pub fn target(&self) -> Option<DateTime<Utc>> {
        self.session.as_ref().map(|s| s.target)
    }

    /// Most recent reading of the running session; `None` when stopped.
    pub fn latest(&self) -> Option<CountdownState> {
        let session = self.session.as_ref()?;
        session.latest.lock().ok().and_then(|state| state.clone())
    }
}

impl Drop for CountdownTicker {
    fn drop(&mut self) {
        self.stop();
    }
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "no message".to_string()
    }
}

fn store(slot: &Mutex<Option<CountdownState>>, state: CountdownState) {
    if let Ok(mut guard) = slot.lock() {
        *guard = Some(state);
    }
}
