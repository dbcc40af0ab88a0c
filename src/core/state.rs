use crate::workload::Job;

// Index into the process Vec
pub type ProcId = usize;
pub type Ticks = u64;

/// Simulation state of a single process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Process {
    pub id: ProcId,
    pub burst_time: Ticks,
    pub remaining_time: Ticks,
    pub arrival_time: Ticks,
    pub wait_time: Ticks,
    pub turnaround_time: Ticks,
    pub completed: bool,
    pub completion_time: Option<Ticks>,
}

impl Process {
    fn from_job(job: Job) -> Self {
        Self {
            id: job.id,
            burst_time: job.burst_time,
            remaining_time: job.burst_time,
            arrival_time: job.arrival_time,
            wait_time: 0,
            turnaround_time: 0,
            completed: false,
            completion_time: None,
        }
    }

    /// Whether the process can occupy the CPU at `now`: it has arrived
    /// and still has work left.
    pub fn is_eligible(&self, now: Ticks) -> bool {
        !self.completed && self.arrival_time <= now
    }
}

/// The machine state a scheduling policy operates on: one CPU's clock and
/// the full process table, owned for the duration of a run.
#[derive(Debug)]
pub struct SimCtx {
    now: Ticks,
    procs: Vec<Process>,
}

impl SimCtx {
    pub fn new(jobs: Vec<Job>) -> Self {
        let procs: Vec<Process> = jobs.into_iter().map(Process::from_job).collect();
        for (index, proc) in procs.iter().enumerate() {
            debug_assert_eq!(proc.id, index, "ProcId must match Vec index");
            debug_assert!(proc.burst_time > 0, "Process {index} has a zero burst");
        }
        Self { now: 0, procs }
    }

    pub fn now(&self) -> Ticks {
        self.now
    }

    pub fn advance_time(&mut self, delta: Ticks) {
        self.now = self.now.saturating_add(delta);
    }

    pub fn procs(&self) -> &[Process] {
        &self.procs
    }

    pub fn proc(&self, id: ProcId) -> &Process {
        &self.procs[id]
    }

    pub fn proc_mut(&mut self, id: ProcId) -> &mut Process {
        &mut self.procs[id]
    }

    pub fn all_complete(&self) -> bool {
        self.procs.iter().all(|p| p.completed)
    }

    /// Per-tick wait/turnaround bookkeeping. Must run once per tick,
    /// against start-of-tick state (before the active process's
    /// decrement): every eligible process accrues a turnaround tick, and
    /// every eligible process except the one on the CPU accrues a wait
    /// tick. Running it before `execute` means the completion tick still
    /// counts toward turnaround, so the final turnaround equals
    /// completion tick minus arrival tick.
    pub fn account_tick(&mut self, active: Option<ProcId>) {
        let now = self.now;
        for proc in &mut self.procs {
            if !proc.is_eligible(now) {
                continue;
            }
            proc.turnaround_time += 1;
            if active != Some(proc.id) {
                proc.wait_time += 1;
            }
        }
    }

    /// Grant `id` the CPU for one tick. Returns true if the process
    /// finished its burst on this tick.
    pub fn execute(&mut self, id: ProcId) -> bool {
        let now = self.now;
        let proc = &mut self.procs[id];
        debug_assert!(
            proc.is_eligible(now),
            "Executing process {id} that is not eligible at tick {now}"
        );
        proc.remaining_time -= 1;
        if proc.remaining_time == 0 {
            proc.completed = true;
            // The tick occupies [now, now + 1); the process is done at its end.
            proc.completion_time = Some(now + 1);
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workload;

    #[test]
    fn eligibility_requires_arrival_and_work_left() {
        let mut ctx = SimCtx::new(workload::staggered(&[1, 2]));
        assert!(ctx.proc(0).is_eligible(0));
        assert!(!ctx.proc(1).is_eligible(0));
        assert!(ctx.proc(1).is_eligible(1));

        assert!(ctx.execute(0));
        assert!(!ctx.proc(0).is_eligible(5));
        assert_eq!(ctx.proc(0).completion_time, Some(1));
    }

    #[test]
    fn accounting_splits_wait_and_run() {
        let mut ctx = SimCtx::new(workload::staggered(&[2, 2]));
        ctx.account_tick(Some(0)); // tick 0: only P0 arrived
        ctx.execute(0);
        ctx.advance_time(1);
        ctx.account_tick(Some(0)); // tick 1: P1 arrived and waits
        ctx.execute(0);
        ctx.advance_time(1);

        assert_eq!(ctx.proc(0).wait_time, 0);
        assert_eq!(ctx.proc(0).turnaround_time, 2);
        assert!(ctx.proc(0).completed);
        assert_eq!(ctx.proc(1).wait_time, 1);
        assert_eq!(ctx.proc(1).turnaround_time, 1);
    }

    #[test]
    fn completed_processes_stop_accruing() {
        let mut ctx = SimCtx::new(workload::staggered(&[1, 3]));
        ctx.account_tick(Some(0));
        ctx.execute(0);
        ctx.advance_time(1);
        ctx.account_tick(Some(1));
        ctx.execute(1);
        ctx.advance_time(1);

        assert_eq!(ctx.proc(0).turnaround_time, 1);
        assert_eq!(ctx.proc(0).wait_time, 0);
    }
}
