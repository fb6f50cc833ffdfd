//! Update command implementation.

use std::sync::Arc;

use katana_core::update::{update_callback, update_callback_with, DisabledUpdater};
use katana_core::{StderrSink, UpdateCallback, UpdateStatus};

/// Build the update callback and run it on the blocking pool.
///
/// The release download uses a blocking HTTP client, which must not run on
/// an async worker thread.
pub async fn run_update(disabled: bool) -> anyhow::Result<()> {
    let callback = build_callback(disabled);
    let status = tokio::task::spawn_blocking(move || callback()).await??;

    match status {
        UpdateStatus::Skipped { .. } => eprintln!("\x1b[1;33m-\x1b[0m katana {}", status),
        UpdateStatus::UpToDate { .. } => eprintln!("\x1b[1;32m✓\x1b[0m katana {}", status),
        UpdateStatus::Updated { .. } => {
            eprintln!("\x1b[1;32m✓\x1b[0m katana {}", status);
            eprintln!("\x1b[2mRestart katana to use the new version.\x1b[0m");
        }
    }

    Ok(())
}

fn build_callback(disabled: bool) -> UpdateCallback {
    if disabled {
        tracing::debug!("self-update disabled, using offline updater");
        update_callback_with(Arc::new(StderrSink), Arc::new(DisabledUpdater))
    } else {
        update_callback()
    }
}
