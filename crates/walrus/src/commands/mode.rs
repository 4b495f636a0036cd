//! `walrus mode` command implementation.

use std::path::PathBuf;

use clap::Args;
use walrus_config::DisplayMode;
use walrus_reader::save_mode;

use super::preferences;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the mode command.
#[derive(Args)]
pub(crate) struct ModeArgs {
    /// Display mode to persist: light or dark.
    mode: DisplayMode,

    /// Directory holding persisted preferences.
    #[arg(long, env = "WALRUS_STATE_DIR", default_value = ".walrus")]
    state: PathBuf,
}

impl ModeArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let prefs = preferences(Some(self.state.as_path()))?;
        save_mode(prefs.as_ref(), self.mode);
        Output::new().success(&format!("Display mode set to {}", self.mode));
        Ok(())
    }
}
