//! CLI entry point for patch planning and workflow file management

use clap::Parser;
use tomotile::io::cli::{Cli, CommandRunner};
use tomotile::io::logging::init_logging;

fn main() -> tomotile::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;
    CommandRunner::new(cli).run()
}
