//! Non-preemptive policies: shortest job first and priority.
//!
//! Both run the same selection discipline and differ only in the dispatch
//! key, so the loop is written once and the key is a trait.
//!
//! # Algorithm
//!
//! 1. Take a private copy, reset results, sort by arrival time (the sort
//!    is stable, so equal arrivals keep their snapshot order).
//! 2. Among processes that have arrived and not completed, dispatch the
//!    one with the smallest key.
//! 3. If nothing is eligible, advance the clock one idle tick and retry.
//! 4. Run the dispatched process to completion atomically: one segment,
//!    clock advanced by the full burst, results written.
//!
//! Once dispatched, a process always finishes before the next selection.

use crate::models::{Process, Tick, Timeline};
use crate::validation::{validate_priorities, validate_processes, ValidationError};

use super::{urgency, SimulationRun};

/// Dispatch key for the selection scan: lower = dispatched first.
///
/// Candidates are scanned in arrival order and the incumbent is replaced
/// only on a strictly smaller key, which makes the earliest-arriving
/// process win equal-key ties.
trait DispatchKey {
    fn key(&self, process: &Process) -> u32;
}

/// Keys on total burst time: shortest job first.
struct ShortestBurst;

impl DispatchKey for ShortestBurst {
    fn key(&self, process: &Process) -> u32 {
        process.burst_time
    }
}

/// Keys on priority: lowest value (most urgent) first.
struct MostUrgent;

impl DispatchKey for MostUrgent {
    fn key(&self, process: &Process) -> u32 {
        urgency(process)
    }
}

/// Runs the shortest-job-first policy.
///
/// Among arrived, incomplete processes the smallest burst time is
/// dispatched and runs to completion. Minimizes average waiting time for
/// a batch with known bursts.
///
/// Returned processes are in arrival order.
pub fn run_shortest_job_first(
    processes: &[Process],
) -> Result<SimulationRun, Vec<ValidationError>> {
    validate_processes(processes)?;
    Ok(simulate(processes, &ShortestBurst))
}

/// Runs the non-preemptive priority policy.
///
/// Among arrived, incomplete processes the lowest priority value (most
/// urgent) is dispatched and runs to completion. Every process must have
/// a priority assigned.
///
/// Returned processes are in arrival order.
pub fn run_priority_non_preemptive(
    processes: &[Process],
) -> Result<SimulationRun, Vec<ValidationError>> {
    let mut errors = Vec::new();
    if let Err(e) = validate_processes(processes) {
        errors.extend(e);
    }
    if let Err(e) = validate_priorities(processes) {
        errors.extend(e);
    }
    if !errors.is_empty() {
        return Err(errors);
    }
    Ok(simulate(processes, &MostUrgent))
}

fn simulate(processes: &[Process], rule: &dyn DispatchKey) -> SimulationRun {
    let mut processes = processes.to_vec();
    for p in &mut processes {
        p.reset_results();
    }
    processes.sort_by_key(|p| p.arrival_time);

    let mut timeline = Timeline::new();
    let mut t: Tick = 0;
    let mut completed = 0;

    while completed < processes.len() {
        let mut selected: Option<usize> = None;
        for (i, p) in processes.iter().enumerate() {
            if p.arrival_time <= t && !p.is_complete() {
                match selected {
                    Some(s) if rule.key(p) >= rule.key(&processes[s]) => {}
                    _ => selected = Some(i),
                }
            }
        }

        let Some(i) = selected else {
            t += 1; // idle tick
            continue;
        };

        let start = t;
        t += processes[i].burst_time;
        timeline.record(processes[i].pid, start, t);
        processes[i].finish_at(t);
        completed += 1;
    }

    SimulationRun { processes, timeline }
}
