//! Signal handling for the live countdown.
//!
//! A background thread turns SIGINT, SIGTERM and SIGHUP into a
//! [`LoopMessage::Shutdown`] on the main loop's channel, so the loop can stop
//! its ticker and restore the terminal before exiting.

use anyhow::{Context, Result};
use signal_hook::{
    consts::signal::{SIGHUP, SIGINT, SIGTERM},
    iterator::Signals,
};
use std::sync::mpsc::Sender;
use std::thread;

use crate::countdown::CountdownState;

/// Everything the live loop reacts to.
#[derive(Debug, Clone)]
pub enum LoopMessage {
    /// A countdown reading from the active ticker session
    Tick(CountdownState),
    /// Termination requested
    Shutdown,
}

/// Forward termination signals to `sender` as [`LoopMessage::Shutdown`].
pub fn setup_signal_handler(sender: Sender<LoopMessage>) -> Result<()> {
    let mut signals =
        Signals::new([SIGINT, SIGTERM, SIGHUP]).context("failed to register signal handlers")?;

    thread::spawn(move || {
        for sig in signals.forever() {
            log_debug!("Received signal {sig}");
            if sender.send(LoopMessage::Shutdown).is_err() {
                break;
            }
        }
    });

    Ok(())
}
