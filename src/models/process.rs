//! Process descriptor model.
//!
//! A process is the unit of scheduling: it arrives at a tick, needs a fixed
//! number of CPU ticks, and optionally carries an urgency for the
//! priority-based policies. Scheduling results live on the process itself
//! and are filled in by a policy run.

use serde::{Deserialize, Serialize};

/// Process identifier. The registry assigns pids in creation order.
pub type Pid = u32;

/// Discrete simulation time. One tick is the smallest schedulable unit.
pub type Tick = u32;

/// A process to be scheduled.
///
/// Policies operate on a private copy per run: the result fields
/// (`completion_time`, `turnaround_time`, `waiting_time`) are cleared at
/// the start of a run and written when the copy finishes executing, so a
/// process can be re-run under any number of policies without the runs
/// contaminating each other.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Process {
    /// Unique identifier.
    pub pid: Pid,
    /// Tick at which the process becomes eligible to run.
    pub arrival_time: Tick,
    /// Total CPU ticks required. Must be positive (see [`crate::validation`]).
    pub burst_time: Tick,
    /// Urgency for the priority policies: lower = more urgent.
    /// `None` = not yet assigned; priority runs reject unset priorities.
    pub priority: Option<u32>,
    /// Tick at which the process finished. `None` until a run completes it.
    pub completion_time: Option<Tick>,
    /// `completion_time - arrival_time`. `None` until a run completes it.
    pub turnaround_time: Option<Tick>,
    /// `turnaround_time - burst_time`: ticks spent eligible but not
    /// running. `None` until a run completes it.
    pub waiting_time: Option<Tick>,
}

impl Process {
    /// Creates a process with no priority and no results.
    pub fn new(pid: Pid, arrival_time: Tick, burst_time: Tick) -> Self {
        Self {
            pid,
            arrival_time,
            burst_time,
            priority: None,
            completion_time: None,
            turnaround_time: None,
            waiting_time: None,
        }
    }

    /// Sets the priority (lower = more urgent).
    pub fn with_priority(mut self, priority: u32) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Whether a run has completed this process.
    pub fn is_complete(&self) -> bool {
        self.completion_time.is_some()
    }

    /// Clears the result fields. Every run does this on its private copy
    /// before simulating.
    pub(crate) fn reset_results(&mut self) {
        self.completion_time = None;
        self.turnaround_time = None;
        self.waiting_time = None;
    }

    /// Closes the process out at tick `t`.
    ///
    /// The three result fields are always written together. Callers
    /// guarantee `t >= arrival_time + burst_time` (a process cannot finish
    /// before it has arrived and received its full burst).
    pub(crate) fn finish_at(&mut self, t: Tick) {
        let turnaround = t - self.arrival_time;
        self.completion_time = Some(t);
        self.turnaround_time = Some(turnaround);
        self.waiting_time = Some(turnaround - self.burst_time);
    }
}
