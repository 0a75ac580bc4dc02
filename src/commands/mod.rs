//! Command handlers for the adhanr CLI.
//!
//! - [`run`]: live board with a countdown that re-resolves as prayers pass
//! - [`list`]: one-shot print of today's and tomorrow's prayers
//! - [`next`]: one-shot print of the next prayer

pub mod list;
pub mod next;
pub mod run;

use anyhow::Result;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::args::CommonOptions;
use crate::board::BoardRequest;
use crate::config::Config;
use crate::logger::Log;
use crate::oracle::SolarOracle;
use crate::time_source::{RealTimeSource, SimulatedTimeSource, TimeSource};

/// Everything a command needs after configuration has been loaded.
pub struct CommandContext {
    pub config: Config,
    pub config_path: PathBuf,
    pub request: BoardRequest,
    pub oracle: SolarOracle,
    pub time_source: Arc<dyn TimeSource>,
}

impl CommandContext {
    /// Apply logging flags, load configuration and pick the clock.
    ///
    /// With `--at`, one-shot commands freeze the clock at that instant while
    /// the live view starts there and keeps running at normal speed.
    pub fn prepare(options: &CommonOptions, live: bool) -> Result<Self> {
        Log::set_enabled(!options.json);
        Log::set_debug(options.debug_enabled);

        let config_dir = options.config_dir.as_deref().map(Path::new);
        let config_path = Config::get_config_path(config_dir)?;
        let config = Config::load(config_dir)?;
        let request = config.board_request()?;

        let time_source: Arc<dyn TimeSource> = match options.at.as_deref() {
            Some(at) => {
                let start = request.zone.parse_datetime(at)?;
                if live {
                    Arc::new(SimulatedTimeSource::new(start, 1.0))
                } else {
                    Arc::new(SimulatedTimeSource::fixed(start))
                }
            }
            None => Arc::new(RealTimeSource),
        };

        Ok(Self {
            config,
            config_path,
            request,
            oracle: SolarOracle::new(),
            time_source,
        })
    }
}
