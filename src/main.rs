use clap::Parser;
use ufo_sightings::cli::{run, Cli};
use ufo_sightings::error::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();
    run(cli)
}
