//! Next command: the upcoming prayer and a single countdown reading.

use anyhow::{Context, Result};

use super::CommandContext;
use crate::args::CommonOptions;
use crate::board::PrayerBoard;
use crate::countdown::CountdownState;
use crate::display::{BoardView, countdown_line, next_headline};

pub fn handle_next_command(options: &CommonOptions) -> Result<()> {
    let ctx = CommandContext::prepare(options, false)?;
    let now = ctx.time_source.now();
    let board = PrayerBoard::resolve(&ctx.oracle, &ctx.request, now)
        .context("Failed to resolve prayer times")?;

    if options.json {
        let view = BoardView::new(&board, &ctx.request.zone, now);
        println!("{}", serde_json::to_string_pretty(&view.next)?);
        return Ok(());
    }

    let state = CountdownState::at(board.next().event.instant(), now);
    log_version!();
    log_block_start!(
        "{}",
        next_headline(&board, &ctx.request.zone, ctx.config.time_format())
    );
    log_decorated!("{}", countdown_line(&state));
    log_end!();
    Ok(())
}
