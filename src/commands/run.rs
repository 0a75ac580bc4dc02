//! Run command: live board and a countdown redrawn once per second.
//!
//! Each cycle resolves a fresh board, arms the ticker on the next prayer and
//! consumes ticks from a channel shared with the signal thread. When the
//! countdown expires or the calendar date changes, the ticker is stopped and
//! a new cycle starts. On shutdown the ticker is stopped before returning.

use anyhow::{Context, Result};
use crossterm::{
    cursor, execute,
    style::Print,
    terminal::{Clear, ClearType},
};
use std::io::{Write, stdout};
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender};

use super::CommandContext;
use crate::args::CommonOptions;
use crate::board::PrayerBoard;
use crate::countdown::CountdownTicker;
use crate::display::{countdown_line, next_headline, print_board};
use crate::signals::{LoopMessage, setup_signal_handler};

pub fn handle_run_command(options: &CommonOptions) -> Result<()> {
    let ctx = CommandContext::prepare(options, true)?;

    log_version!();
    if options.debug_enabled {
        ctx.config.log_config(&ctx.config_path);
    }
    if ctx.time_source.is_simulated() {
        log_pipe!();
        log_info!(
            "Starting from {}",
            ctx.request
                .zone
                .format(ctx.time_source.now(), "%Y-%m-%d %H:%M:%S")
        );
    }

    let (tx, rx) = mpsc::channel::<LoopMessage>();
    setup_signal_handler(tx.clone())?;

    let mut ticker = CountdownTicker::new(Arc::clone(&ctx.time_source));
    let result = {
        let _cursor = CursorGuard::hide();
        run_cycles(&ctx, &mut ticker, &tx, &rx)
    };
    ticker.stop();

    log_end!();
    result
}

enum CycleEnd {
    Reresolve,
    Shutdown,
}

fn run_cycles(
    ctx: &CommandContext,
    ticker: &mut CountdownTicker,
    tx: &Sender<LoopMessage>,
    rx: &Receiver<LoopMessage>,
) -> Result<()> {
    loop {
        let board = PrayerBoard::resolve(&ctx.oracle, &ctx.request, ctx.time_source.now())
            .context("Failed to resolve prayer times")?;

        print_board(&board, &ctx.request.zone, ctx.config.time_format());
        log_block_start!(
            "Next: {}",
            next_headline(&board, &ctx.request.zone, ctx.config.time_format())
        );

        // Ticks of the previous session must not leak into this cycle
        ticker.stop();
        if drain_stale_ticks(rx) {
            return Ok(());
        }

        let sender = tx.clone();
        ticker.start(board.next().event.instant(), move |state| {
            let _ = sender.send(LoopMessage::Tick(state.clone()));
        });

        match watch_countdown(ctx, &board, rx)? {
            CycleEnd::Reresolve => {
                ticker.stop();
                log_pipe!();
                log_info!("Next prayer changed, updating");
            }
            CycleEnd::Shutdown => return Ok(()),
        }
    }
}

fn watch_countdown(
    ctx: &CommandContext,
    board: &PrayerBoard,
    rx: &Receiver<LoopMessage>,
) -> Result<CycleEnd> {
    while let Ok(message) = rx.recv() {
        match message {
            LoopMessage::Tick(state) => {
                draw_line(&countdown_line(&state))?;
                let date_changed = !board.is_current(&ctx.request.zone, ctx.time_source.now());
                if state.is_expired() || date_changed {
                    finish_line();
                    return Ok(CycleEnd::Reresolve);
                }
            }
            LoopMessage::Shutdown => {
                finish_line();
                return Ok(CycleEnd::Shutdown);
            }
        }
    }
    // Every sender is gone; nothing can wake us again
    finish_line();
    Ok(CycleEnd::Shutdown)
}

/// Discard queued ticks. Returns true if a shutdown was queued among them.
fn drain_stale_ticks(rx: &Receiver<LoopMessage>) -> bool {
    while let Ok(message) = rx.try_recv() {
        if matches!(message, LoopMessage::Shutdown) {
            return true;
        }
    }
    false
}

fn draw_line(line: &str) -> Result<()> {
    execute!(
        stdout(),
        cursor::MoveToColumn(0),
        Clear(ClearType::CurrentLine),
        Print(format!("┣ {line}"))
    )?;
    Ok(())
}

fn finish_line() {
    let mut out = stdout();
    let _ = writeln!(out);
    let _ = out.flush();
}

/// Hides the terminal cursor while the countdown redraws; shows it on drop.
struct CursorGuard;

impl CursorGuard {
    fn hide() -> Self {
        let _ = execute!(stdout(), cursor::Hide);
        CursorGuard
    }
}

impl Drop for CursorGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), cursor::Show);
    }
}
