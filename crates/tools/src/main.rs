use std::io;

use anyhow::Result;
use clap::Parser;
use tools::{Args, run};

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(&args, &mut out)?;
    Ok(())
}
