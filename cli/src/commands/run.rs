//! Default command implementation.

use katana_core::show_banner;

/// Print the banner and point at the available actions.
pub fn show_intro(silent: bool) {
    if silent {
        return;
    }
    show_banner();
    eprintln!("\n\x1b[2mRun `katana --update` to fetch the latest release.\x1b[0m\n");
}
