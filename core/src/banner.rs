//! Banner printing.
//!
//! The banner is written through an [`OutputSink`] so the destination can be
//! swapped out. The default sink is standard error, which keeps stdout free
//! for crawl results.

use std::io::Write;

use crate::constants::LABEL;

/// ASCII art shown at startup and before an update
pub const BANNER: &str = concat!(
    "\n",
    r"   __                                           ", "\n",
    r"  _____ _____  ______ ______   ___________ ", "\n",
    r" /     \\__  \ \____ \\____ \_/ __ \_  __ \", "\n",
    r"|  Y Y  \/ __ \|  |_> >  |_> >  ___/|  | \/", "\n",
    r"|__|_|  (____  /   __/|   __/ \___  >__|   ", "\n",
    r"      \/     \/|__|   |__|        \/       ",
);

/// Destination for informational output.
pub trait OutputSink: Send + Sync {
    /// Write `text` as-is. Failures are swallowed by the sink.
    fn print(&self, text: &str);
}

/// Sink writing to standard error.
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrSink;

impl OutputSink for StderrSink {
    fn print(&self, text: &str) {
        let _ = std::io::stderr().lock().write_all(text.as_bytes());
    }
}

/// Print the banner to standard error.
pub fn show_banner() {
    show_banner_to(&StderrSink);
}

/// Print the banner block, then the label line, to `sink`.
pub fn show_banner_to(sink: &dyn OutputSink) {
    sink.print(&format!("{}\n", BANNER));
    sink.print(&format!("\t\t{}\n", LABEL));
}
