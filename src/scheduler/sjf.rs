use keyed_priority_queue::KeyedPriorityQueue;

use super::Scheduler;
use crate::core::{ProcId, SimCtx, Ticks};

// KeyedPriorityQueue is a max-heap, so Ord is flipped: the "largest"
// priority is the shortest remaining time, lowest id on ties.
#[derive(PartialEq, Eq, Hash, Debug, Copy, Clone)]
struct SrtPriority {
    remaining: Ticks,
    proc: ProcId,
}

impl PartialOrd for SrtPriority {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SrtPriority {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        other
            .remaining
            .cmp(&self.remaining)
            .then_with(|| other.proc.cmp(&self.proc))
    }
}

/// Shortest Job First, preemptive on remaining time: every tick the CPU
/// goes to the eligible process with the least work left, so a newly
/// arrived shorter process displaces the running one at the next tick
/// boundary. Ties go to the lowest id.
pub struct SjfScheduler {
    ready: KeyedPriorityQueue<ProcId, SrtPriority>,
}

impl SjfScheduler {
    pub fn new() -> Self {
        Self {
            ready: KeyedPriorityQueue::new(),
        }
    }
}

impl Default for SjfScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler for SjfScheduler {
    fn enqueue(&mut self, ctx: &SimCtx, proc: ProcId) {
        let remaining = ctx.proc(proc).remaining_time;
        self.ready.push(proc, SrtPriority { remaining, proc });
    }

    fn dispatch(&mut self, _ctx: &SimCtx) -> Option<ProcId> {
        self.ready.peek().map(|(&proc, _)| proc)
    }

    fn stopping(&mut self, ctx: &SimCtx, proc: ProcId, runnable: bool) {
        if runnable {
            let remaining = ctx.proc(proc).remaining_time;
            self.ready
                .set_priority(&proc, SrtPriority { remaining, proc })
                .expect("stopping a process that is not enqueued");
        } else {
            // The process just dispatched is still the queue maximum.
            let popped = self.ready.pop().map(|(p, _)| p);
            debug_assert_eq!(popped, Some(proc), "completed process must be at the front");
        }
    }
}
