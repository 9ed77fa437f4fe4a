//! Tui command implementation

use crate::cli::TuiArgs;
use crate::config::Config;
use crate::error::Result;

/// Run the interactive list with CLI overrides applied
pub fn run(args: TuiArgs, config: &Config) -> Result<()> {
    let config = apply_overrides(&args, config.clone());
    tracing::debug!(?config, "Effective TUI configuration");
    crate::tui::run(&config)
}

/// Layer command-line flags over the loaded configuration
pub fn apply_overrides(args: &TuiArgs, mut config: Config) -> Config {
    if let Some(count) = args.count {
        config.list.initial_count = count;
    }
    if args.seed.is_some() {
        config.list.seed = args.seed;
    }
    if args.no_smooth {
        config.tui.smooth_scroll = false;
    }
    if args.no_mouse {
        config.tui.mouse_capture = false;
    }
    config
}
