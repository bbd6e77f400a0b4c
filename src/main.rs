//! CLI entry point for the fractal noise generation pipeline

use clap::Parser;
use noisestack::io::cli::{Cli, PipelineRunner};

fn main() -> noisestack::Result<()> {
    let cli = Cli::parse();
    let mut runner = PipelineRunner::new(cli);
    runner.run()
}
