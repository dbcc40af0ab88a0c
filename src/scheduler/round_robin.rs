use std::collections::VecDeque;
use std::num::NonZeroU64;

use super::Scheduler;
use crate::core::{ProcId, SimCtx, Ticks};

/// Round-Robin with a fixed time quantum. Processes rotate through a
/// FIFO ready queue; a process that exhausts its quantum re-enters at
/// the back, a process that completes leaves the rotation. An empty
/// queue is an idle tick, which keeps the loop finite when arrivals
/// have gaps.
pub struct RoundRobinScheduler {
    quantum: Ticks,
    ready: VecDeque<ProcId>,
    current: Option<ProcId>,
    slice_used: Ticks,
}

impl RoundRobinScheduler {
    pub fn new(quantum: NonZeroU64) -> Self {
        Self {
            quantum: quantum.get(),
            ready: VecDeque::new(),
            current: None,
            slice_used: 0,
        }
    }
}

impl Scheduler for RoundRobinScheduler {
    fn enqueue(&mut self, _ctx: &SimCtx, proc: ProcId) {
        self.ready.push_back(proc);
    }

    fn dispatch(&mut self, _ctx: &SimCtx) -> Option<ProcId> {
        if self.current.is_none() {
            self.current = self.ready.pop_front();
            self.slice_used = 0;
        }
        self.current
    }

    fn stopping(&mut self, _ctx: &SimCtx, proc: ProcId, runnable: bool) {
        debug_assert_eq!(self.current, Some(proc), "stopping a process never dispatched");
        self.slice_used += 1;
        if !runnable {
            self.current = None;
            self.slice_used = 0;
        } else if self.slice_used == self.quantum {
            // Back of the rotation, behind anything that arrived earlier
            // this tick.
            self.ready.push_back(proc);
            self.current = None;
            self.slice_used = 0;
        }
    }
}
