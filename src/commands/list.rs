//! List command: today's and tomorrow's prayers with the next one marked.

use anyhow::{Context, Result};

use super::CommandContext;
use crate::args::CommonOptions;
use crate::board::PrayerBoard;
use crate::display::{BoardView, next_headline, print_board};

pub fn handle_list_command(options: &CommonOptions) -> Result<()> {
    let ctx = CommandContext::prepare(options, false)?;
    let now = ctx.time_source.now();
    let board = PrayerBoard::resolve(&ctx.oracle, &ctx.request, now)
        .context("Failed to resolve prayer times")?;

    if options.json {
        let view = BoardView::new(&board, &ctx.request.zone, now);
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }

    log_version!();
    if options.debug_enabled {
        ctx.config.log_config(&ctx.config_path);
    }
    print_board(&board, &ctx.request.zone, ctx.config.time_format());
    log_block_start!(
        "Next: {}",
        next_headline(&board, &ctx.request.zone, ctx.config.time_format())
    );
    log_end!();
    Ok(())
}
