use super::state::{SimCtx, Ticks};

/// Audits cross-field invariants of the process table after every tick.
/// All checks are debug assertions; release builds pay nothing.
#[derive(Debug)]
pub struct Observer {
    ticks_seen: Ticks,
}

impl Observer {
    pub fn new() -> Self {
        Self { ticks_seen: 0 }
    }

    pub fn observe(&mut self, ctx: &SimCtx) {
        self.ticks_seen += 1;
        debug_assert_eq!(
            self.ticks_seen,
            ctx.now(),
            "Observer must run exactly once per tick"
        );

        for proc in ctx.procs() {
            let id = proc.id;
            debug_assert!(
                proc.remaining_time <= proc.burst_time,
                "Process {id} remaining time exceeds its burst"
            );
            debug_assert_eq!(
                proc.completed,
                proc.remaining_time == 0,
                "Process {id} completion flag out of sync with remaining time"
            );
            debug_assert_eq!(
                proc.completed,
                proc.completion_time.is_some(),
                "Process {id} completion time must be set exactly on completion"
            );

            if proc.arrival_time >= ctx.now() {
                debug_assert_eq!(proc.wait_time, 0, "Process {id} waited before arriving");
                debug_assert_eq!(
                    proc.turnaround_time, 0,
                    "Process {id} accrued turnaround before arriving"
                );
                continue;
            }

            // Every eligible tick is spent either waiting or executing.
            let executed = proc.burst_time - proc.remaining_time;
            debug_assert_eq!(
                proc.turnaround_time,
                proc.wait_time + executed,
                "Process {id} turnaround must equal wait plus executed ticks"
            );

            if let Some(done) = proc.completion_time {
                debug_assert_eq!(
                    proc.turnaround_time,
                    done - proc.arrival_time,
                    "Process {id} turnaround must span arrival to completion"
                );
            }
        }
    }
}

impl Default for Observer {
    fn default() -> Self {
        Self::new()
    }
}
