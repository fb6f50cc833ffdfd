//! CLI command implementations.

mod run;
mod update;

pub use run::show_intro;
pub use update::run_update;
