use std::os::fd::AsRawFd;

use anyhow::{Context, Result};
use log::debug;
use perf_probe::config::{Cpu, Opts, Proc};
use perf_probe::count::Counter;
use perf_probe::event::hw::Hardware;

// One counter lifecycle: configure, open, reset, read. Prints the number
// of instructions the probe itself retired between reset and read.
fn main() -> Result<()> {
    env_logger::init();

    let event = Hardware::Instr;
    let target = (Proc::CURRENT, Cpu::ALL);

    let counter = Counter::new(event, target, Opts::default())
        .context("failed to open retired instruction counter")?;
    debug!("counter open on fd {}", counter.file().as_raw_fd());

    counter.reset().context("failed to reset counter")?;
    let instrs = counter.count().context("failed to read counter")?;

    println!("{instrs} instructions retired");
    Ok(())
}
