//! Minimal diagnostic probe for Linux hardware performance counters.
//!
//! The crate wraps one lifecycle of the `perf_event_open` syscall:
//! configure an attribute record, open a counter, reset it, read its value.
//! The counter fd is owned by [`Counter`][count::Counter] and closed on
//! drop, and every syscall result is checked.
//!
//! ## Example
//!
//! Count how many instructions the (inefficient) fibonacci calculation
//! retires on the current process, all CPUs:
//!
//! ```rust,no_run
//! use perf_probe::config::{Cpu, Opts, Proc};
//! use perf_probe::count::Counter;
//! use perf_probe::event::hw::Hardware;
//!
//! let event = Hardware::Instr;
//! let target = (Proc::CURRENT, Cpu::ALL);
//!
//! let counter = Counter::new(event, target, Opts::default())?;
//! counter.reset()?;
//!
//! fn fib(n: u64) -> u64 {
//!     match n {
//!         0 => 0,
//!         1 => 1,
//!         n => fib(n - 1) + fib(n - 2),
//!     }
//! }
//! std::hint::black_box(fib(30));
//!
//! let instrs = counter.count()?;
//! println!("{instrs} instructions retired");
//! # Ok::<_, Box<dyn std::error::Error>>(())
//! ```
//!
//! Opening a counter needs counter access on the host: a PMU exposed to the
//! guest and a permissive `/proc/sys/kernel/perf_event_paranoid`. A denied
//! open is reported as a typed [`OpenError`][count::OpenError] rather than
//! an unusable fd.

pub mod config;
pub mod count;
pub mod event;
mod ffi;
