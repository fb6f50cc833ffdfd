//! Katana Core - banner and self-update plumbing
//!
//! Provides the startup banner and the deferred update action the katana
//! command line wires to its `-update` flag.

pub mod banner;
pub mod constants;
pub mod update;

mod error;

pub use error::{Error, Result};

/// Configuration for the GitHub release updater
#[derive(Debug, Clone)]
pub struct UpdateConfig {
    /// GitHub account publishing the releases
    pub repo_owner: String,
    /// Repository holding the releases, the tool name when unset
    pub repo_name: Option<String>,
    /// Binary inside the release archive, the tool name when unset
    pub bin_name: Option<String>,
    /// Render a progress bar while downloading the new binary
    pub show_download_progress: bool,
    /// Replace the binary without asking for confirmation
    pub no_confirm: bool,
}

impl Default for UpdateConfig {
    fn default() -> Self {
        Self {
            repo_owner: constants::RELEASE_REPO_OWNER.to_string(),
            repo_name: None,
            bin_name: None,
            show_download_progress: true,
            no_confirm: true,
        }
    }
}

// Re-export key types for convenience
pub use banner::{show_banner, OutputSink, StderrSink};
pub use constants::{TOOL_NAME, VERSION};
pub use update::{update_callback, update_callback_with, UpdateCallback, UpdateCheck, UpdateStatus};
