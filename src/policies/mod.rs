//! Scheduling policies.
//!
//! Four dispatching policies over a fixed batch of processes. Each consumes
//! an ordered snapshot, simulates on a private copy, and returns the
//! completed processes plus the run's timeline as a [`SimulationRun`].
//! Runs are synchronous and deterministic; nothing is stored between calls.
//!
//! # Policies
//!
//! - [`run_shortest_job_first`]: non-preemptive, smallest burst dispatched
//!   first
//! - [`run_priority_non_preemptive`]: non-preemptive, lowest priority value
//!   dispatched first
//! - [`run_priority_preemptive`]: re-selects the most urgent eligible
//!   process at every tick
//! - [`run_round_robin`]: time-sliced FIFO dispatch with a fixed quantum
//!
//! # Selection ties
//!
//! Priority and burst-time selection scan candidates in arrival order and
//! replace the incumbent only on a strictly smaller key, so the
//! earliest-arriving process wins equal-key ties.
//!
//! # Usage
//!
//! ```
//! use ticksched::policies::run_shortest_job_first;
//! use ticksched::registry::ProcessRegistry;
//!
//! let mut registry = ProcessRegistry::new();
//! registry.add(0, 4);
//! registry.add(0, 2);
//!
//! let run = run_shortest_job_first(&registry.snapshot()).unwrap();
//! assert_eq!(run.timeline.segments()[0].pid, 1); // shorter burst first
//! ```

mod nonpreemptive;
mod preemptive;
mod round_robin;

pub use nonpreemptive::{run_priority_non_preemptive, run_shortest_job_first};
pub use preemptive::run_priority_preemptive;
pub use round_robin::run_round_robin;

use serde::{Deserialize, Serialize};

use crate::metrics::RunMetrics;
use crate::models::{Process, Timeline};

/// Completed result of one policy run.
///
/// Owns the run's private process copies (result fields filled in) and its
/// timeline. Nothing ambient survives the call that produced it: a second
/// run yields a fresh, independent value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationRun {
    /// The run's process copies with completion, turnaround, and waiting
    /// times set.
    pub processes: Vec<Process>,
    /// Execution segments in start order.
    pub timeline: Timeline,
}

impl SimulationRun {
    /// Aggregate metrics for this run.
    pub fn metrics(&self) -> RunMetrics {
        RunMetrics::calculate(&self.processes, &self.timeline)
    }
}

/// Priority dispatch key: lower = more urgent. Unset priorities sort last;
/// validation rejects them before a priority run starts.
pub(crate) fn urgency(process: &Process) -> u32 {
    process.priority.unwrap_or(u32::MAX)
}
