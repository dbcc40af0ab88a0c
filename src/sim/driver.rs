use super::stats::Summary;
use super::trace::TraceRecord;
use crate::core::{Observer, SimCtx};
use crate::scheduler::Scheduler;
use crate::workload::Job;

/// Drives one simulation run: feeds arrivals to the policy, executes its
/// pick for one tick at a time, and keeps the per-tick accounting and
/// invariant auditing in lockstep until every process completes.
pub struct Sim<S: Scheduler> {
    ctx: SimCtx,
    scheduler: S,
    observer: Observer,
}

impl<S: Scheduler> Sim<S> {
    pub fn new(jobs: Vec<Job>, scheduler: S) -> Self {
        assert!(!jobs.is_empty(), "Simulation requires at least one process");
        Self {
            ctx: SimCtx::new(jobs),
            scheduler,
            observer: Observer::new(),
        }
    }

    /// Simulate one tick. The returned record snapshots the running
    /// process's counters as of the start of the tick.
    pub fn step(&mut self) -> TraceRecord {
        self.handle_arrivals();

        let active = self.scheduler.dispatch(&self.ctx);
        if let Some(id) = active {
            debug_assert!(
                self.ctx.proc(id).is_eligible(self.ctx.now()),
                "Scheduler dispatched an ineligible process"
            );
        }
        let record = TraceRecord::capture(&self.ctx, active);

        self.ctx.account_tick(active);
        if let Some(id) = active {
            let completed = self.ctx.execute(id);
            self.scheduler.stopping(&self.ctx, id, !completed);
        }

        self.ctx.advance_time(1);
        self.observer.observe(&self.ctx);
        record
    }

    /// Run to completion, returning the full trace.
    pub fn run(&mut self) -> Vec<TraceRecord> {
        let mut trace = Vec::new();
        while !self.all_complete() {
            trace.push(self.step());
        }
        trace
    }

    pub fn all_complete(&self) -> bool {
        self.ctx.all_complete()
    }

    pub fn summary(&self) -> Summary {
        Summary::new(self.ctx.procs())
    }

    pub fn ctx(&self) -> &SimCtx {
        &self.ctx
    }

    fn handle_arrivals(&mut self) {
        let now = self.ctx.now();
        // Scan in id order so same-tick arrivals enqueue deterministically.
        for id in 0..self.ctx.procs().len() {
            if self.ctx.proc(id).arrival_time == now {
                self.scheduler.enqueue(&self.ctx, id);
            }
        }
    }
}
