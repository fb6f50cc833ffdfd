//! Self-update callback.
//!
//! [`update_callback`] hands back a deferred action. Building it does
//! nothing; every invocation prints the banner and then asks the updater
//! once for `(TOOL_NAME, VERSION)`. Whatever the updater returns is passed
//! back untouched.

mod disabled;
mod github;

use std::fmt;
use std::sync::Arc;

use crate::banner::{show_banner_to, OutputSink, StderrSink};
use crate::constants::{TOOL_NAME, VERSION};
use crate::{Result, UpdateConfig};

pub use disabled::{update_check_disabled, DisabledUpdater};
pub use github::{normalize_version, GithubUpdater};

/// Outcome of an update check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateStatus {
    /// Already on the latest release
    UpToDate { version: String },
    /// Binary was replaced with a newer release
    Updated { from: String, to: String },
    /// No lookup was made because the check is switched off
    Skipped { version: String },
}

impl fmt::Display for UpdateStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpdateStatus::UpToDate { version } => write!(f, "{} is the latest version", version),
            UpdateStatus::Updated { from, to } => write!(f, "updated from {} to {}", from, to),
            UpdateStatus::Skipped { version } => {
                write!(f, "update check disabled, staying on {}", version)
            }
        }
    }
}

/// Something that can check for, and apply, a newer release of a tool.
pub trait UpdateCheck: Send + Sync {
    fn check(&self, tool: &str, version: &str) -> Result<UpdateStatus>;
}

/// Deferred update action returned by the factories below
pub type UpdateCallback = Box<dyn Fn() -> Result<UpdateStatus> + Send + Sync>;

/// Update callback printing to stderr and checking GitHub releases.
pub fn update_callback() -> UpdateCallback {
    let updater = GithubUpdater::new(UpdateConfig::default());
    update_callback_with(Arc::new(StderrSink), Arc::new(updater))
}

/// Update callback with an explicit sink and updater.
pub fn update_callback_with(
    sink: Arc<dyn OutputSink>,
    updater: Arc<dyn UpdateCheck>,
) -> UpdateCallback {
    Box::new(move || {
        show_banner_to(sink.as_ref());
        updater.check(TOOL_NAME, VERSION)
    })
}
