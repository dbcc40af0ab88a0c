use std::collections::VecDeque;

use super::Scheduler;
use crate::core::{ProcId, SimCtx};

/// First-Come-First-Served: processes run to completion in arrival
/// order. Non-preemptive.
pub struct FcfsScheduler {
    ready: VecDeque<ProcId>,
    current: Option<ProcId>,
}

impl FcfsScheduler {
    pub fn new() -> Self {
        Self {
            ready: VecDeque::new(),
            current: None,
        }
    }
}

impl Default for FcfsScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler for FcfsScheduler {
    fn enqueue(&mut self, _ctx: &SimCtx, proc: ProcId) {
        self.ready.push_back(proc);
    }

    fn dispatch(&mut self, _ctx: &SimCtx) -> Option<ProcId> {
        if self.current.is_none() {
            self.current = self.ready.pop_front();
        }
        self.current
    }

    fn stopping(&mut self, _ctx: &SimCtx, proc: ProcId, runnable: bool) {
        debug_assert_eq!(self.current, Some(proc), "stopping a process never dispatched");
        if !runnable {
            self.current = None;
        }
    }
}
