//! Discrete-time CPU scheduling simulator.
//!
//! A fixed set of processes with known burst times competes for a single
//! CPU, one tick at a time, under a pluggable scheduling policy.
//!
//! ```
//! use schedsim::{FcfsScheduler, Sim, workload};
//!
//! let jobs = workload::staggered(&[4, 3, 1, 2]);
//! let mut sim = Sim::new(jobs, FcfsScheduler::new());
//! let trace = sim.run();
//! assert_eq!(trace.len(), 10);
//! ```

pub mod core;
pub mod scheduler;
pub mod sim;
pub mod workload;

pub use scheduler::{FcfsScheduler, RoundRobinScheduler, Scheduler, SjfScheduler};
pub use sim::{Sim, Summary, TickEvent, TraceRecord};
pub use workload::Job;
