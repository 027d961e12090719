//! CLI command implementations, one module per step of the flow

mod create;
mod edit;
mod export;
mod generate;
mod preview;

pub use create::create;
pub use edit::{edit, EditCommands};
pub use export::export;
pub use generate::generate;
pub use preview::preview;

use anyhow::{anyhow, Result};
use fabula_core::{FabulaError, LocalStore, Relay, StorageError};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::time::Duration;

/// Fixed artificial delays standing in for network/AI latency.
/// These match the original demo's pacing; nothing real happens during them.
pub(crate) const SUBMIT_DELAY: Duration = Duration::from_millis(800);
pub(crate) const IMAGE_REGEN_DELAY: Duration = Duration::from_millis(1500);
pub(crate) const ALL_IMAGES_DELAY: Duration = Duration::from_millis(2000);
pub(crate) const DOWNLOAD_DELAY: Duration = Duration::from_millis(1500);

/// Open the session relay over the session directory
pub fn open_relay(session_dir: &Path) -> Relay {
    Relay::new(LocalStore::new(session_dir))
}

/// Map an empty-slot read onto a message pointing at the step to run first.
///
/// Missing state always sends the user back to the earlier step; no
/// command fabricates a placeholder object.
pub(crate) fn or_earlier_step<T>(
    result: fabula_core::Result<T>,
    missing: &str,
    run_first: &str,
) -> Result<T> {
    match result {
        Ok(value) => Ok(value),
        Err(FabulaError::Storage(StorageError::SlotEmpty(_))) => Err(anyhow!(
            "{}. Run `fabula-cli {}` first.",
            missing,
            run_first
        )),
        Err(err) => Err(err.into()),
    }
}

/// Spinner used for the short simulated waits
pub(crate) fn spinner(message: impl Into<String>) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_message(message.into());
    pb
}
