//! Katana CLI - banner and self-update entry point.

mod commands;

use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "katana")]
#[command(version = katana_core::VERSION)]
#[command(about = "A next-generation crawling and spidering framework", long_about = None)]
struct Cli {
    /// Update katana to the latest released version
    #[arg(short = 'u', long = "update", visible_alias = "up")]
    update: bool,

    /// Skip the release lookup performed by --update
    #[arg(long = "disable-update-check", visible_alias = "duc")]
    disable_update_check: bool,

    /// Do not print the banner
    #[arg(long)]
    silent: bool,
}

impl Cli {
    fn update_check_disabled(&self) -> bool {
        self.disable_update_check || katana_core::update::update_check_disabled()
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("katana_cli=info".parse()?)
                .add_directive("katana_core=info".parse()?),
        )
        .init();

    let cli = Cli::parse();

    if cli.update {
        commands::run_update(cli.update_check_disabled()).await?;
    } else {
        commands::show_intro(cli.silent);
    }

    Ok(())
}
