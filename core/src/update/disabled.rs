//! Updater used when self-update is switched off.

use super::{UpdateCheck, UpdateStatus};
use crate::constants::DISABLE_UPDATE_CHECK_ENV;
use crate::Result;

/// Skips the lookup entirely and reports that nothing was checked.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledUpdater;

impl UpdateCheck for DisabledUpdater {
    fn check(&self, tool: &str, version: &str) -> Result<UpdateStatus> {
        tracing::info!("update check for {} is disabled", tool);
        Ok(UpdateStatus::Skipped { version: version.to_string() })
    }
}

/// Whether `KATANA_DISABLE_UPDATE_CHECK` asks for the check to be skipped.
pub fn update_check_disabled() -> bool {
    std::env::var(DISABLE_UPDATE_CHECK_ENV)
        .map(|value| is_truthy(&value))
        .unwrap_or(false)
}

fn is_truthy(value: &str) -> bool {
    matches!(value.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes")
}
