//! CLI entry point for the headless sketch runner

use clap::Parser;
use sketchkit::io::cli::{Cli, SketchRunner};

fn main() -> sketchkit::Result<()> {
    let cli = Cli::parse();
    let runner = SketchRunner::new(cli);
    runner.run()
}
