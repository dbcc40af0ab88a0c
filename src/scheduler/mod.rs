pub mod fcfs;
pub mod round_robin;
pub mod sjf;

use crate::core::{ProcId, SimCtx};

pub use fcfs::FcfsScheduler;
pub use round_robin::RoundRobinScheduler;
pub use sjf::SjfScheduler;

/// A scheduling policy. The driver notifies it of arrivals, asks it for
/// the process to occupy the CPU each tick, and reports back after the
/// tick has executed. Policies own their ready structures; the driver
/// owns the process table.
pub trait Scheduler {
    /// `proc` became eligible at the current tick.
    fn enqueue(&mut self, ctx: &SimCtx, proc: ProcId);

    /// Pick the process to run for the tick at `ctx.now()`, or None to
    /// leave the CPU idle.
    fn dispatch(&mut self, ctx: &SimCtx) -> Option<ProcId>;

    /// The dispatched process has executed for one tick. `runnable` is
    /// false when it completed its burst on this tick.
    fn stopping(&mut self, ctx: &SimCtx, proc: ProcId, runnable: bool);
}
