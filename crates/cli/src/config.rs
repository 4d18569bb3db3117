//! Runtime configuration assembled from command-line flags.

use std::path::PathBuf;
use std::time::Duration;

use chrono::Weekday;
use clap::Args;
use habitally_core::Calendar;
use habitally_progress::StatsConfig;
use habitally_storage::AutoSaveConfig;

/// Flags shared by every subcommand.
#[derive(Debug, Clone, Args)]
pub struct GlobalArgs {
    /// Directory holding the JSON data files
    #[arg(long, global = true, default_value = ".habitally")]
    pub data_dir: PathBuf,

    /// Quiet period before changes are written, in milliseconds
    #[arg(long, global = true, default_value = "500")]
    pub debounce_ms: u64,

    /// First day of the week for weekly counters
    #[arg(long, global = true, default_value = "Sun")]
    pub week_start: Weekday,

    /// Days in the success-rate and meditation windows
    #[arg(long, global = true, default_value = "30")]
    pub window_days: u32,
}

/// Settings for one run of the binary.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Where the data files live
    pub data_dir: PathBuf,
    /// Autosave timing
    pub autosave: AutoSaveConfig,
    /// Statistics windows
    pub stats: StatsConfig,
    /// First weekday
    pub week_start: Weekday,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(".habitally"),
            autosave: AutoSaveConfig::default(),
            stats: StatsConfig::default(),
            week_start: Weekday::Sun,
        }
    }
}

impl From<&GlobalArgs> for AppConfig {
    fn from(args: &GlobalArgs) -> Self {
        let defaults = Self::default();
        Self {
            data_dir: args.data_dir.clone(),
            autosave: AutoSaveConfig {
                debounce: Duration::from_millis(args.debounce_ms),
            },
            stats: StatsConfig {
                completion_window_days: args.window_days,
                meditation_window_days: args.window_days,
                ..defaults.stats
            },
            week_start: args.week_start,
        }
    }
}

impl AppConfig {
    /// Local calendar honouring the configured week start.
    pub fn calendar(&self) -> Calendar {
        Calendar::local().with_week_start(self.week_start)
    }
}
