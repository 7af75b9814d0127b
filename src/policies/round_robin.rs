//! Round-robin policy.
//!
//! Time-sliced FIFO dispatch: the process at the head of the ready queue
//! runs for at most one quantum, then goes to the back of the queue if
//! unfinished. Admission order is snapshot order, and a process that
//! arrives while another runs enters the queue before the preempted
//! process re-enters it — the just-ran process cannot cut back in line
//! ahead of a new arrival.
//!
//! When the queue empties before all processes have arrived, the clock
//! advances one tick at a time, admitting arrivals as it goes.

use std::collections::VecDeque;

use crate::models::{Process, Tick, Timeline};
use crate::validation::{validate_processes, validate_quantum, ValidationError};

use super::SimulationRun;

/// Runs the round-robin policy with the given quantum (in ticks).
///
/// Returned processes stay in snapshot order.
pub fn run_round_robin(
    processes: &[Process],
    quantum: Tick,
) -> Result<SimulationRun, Vec<ValidationError>> {
    let mut errors = Vec::new();
    if let Err(e) = validate_processes(processes) {
        errors.extend(e);
    }
    if let Err(e) = validate_quantum(quantum) {
        errors.extend(e);
    }
    if !errors.is_empty() {
        return Err(errors);
    }
    Ok(simulate(processes, quantum))
}

fn simulate(processes: &[Process], quantum: Tick) -> SimulationRun {
    let mut processes = processes.to_vec();
    for p in &mut processes {
        p.reset_results();
    }

    let n = processes.len();
    let mut remaining: Vec<Tick> = processes.iter().map(|p| p.burst_time).collect();
    // True while a process is in the ready queue or holding the CPU;
    // guards against duplicate queue membership.
    let mut admitted = vec![false; n];
    let mut ready: VecDeque<usize> = VecDeque::new();
    let mut timeline = Timeline::new();
    let mut t: Tick = 0;
    let mut completed = 0;

    admit_arrivals(&processes, &remaining, &mut admitted, &mut ready, t);

    while completed < n {
        let Some(i) = ready.pop_front() else {
            t += 1; // idle tick
            admit_arrivals(&processes, &remaining, &mut admitted, &mut ready, t);
            continue;
        };

        let exec = remaining[i].min(quantum);
        timeline.record(processes[i].pid, t, t + exec);
        t += exec;
        remaining[i] -= exec;

        // The dispatched process is still flagged admitted here, so new
        // arrivals queue up ahead of it.
        admit_arrivals(&processes, &remaining, &mut admitted, &mut ready, t);

        if remaining[i] == 0 {
            processes[i].finish_at(t);
            admitted[i] = false;
            completed += 1;
        } else {
            ready.push_back(i);
        }
    }

    SimulationRun { processes, timeline }
}

/// Enqueues every arrived, unfinished, not-yet-admitted process in
/// snapshot order.
fn admit_arrivals(
    processes: &[Process],
    remaining: &[Tick],
    admitted: &mut [bool],
    ready: &mut VecDeque<usize>,
    t: Tick,
) {
    for i in 0..processes.len() {
        if processes[i].arrival_time <= t && remaining[i] > 0 && !admitted[i] {
            ready.push_back(i);
            admitted[i] = true;
        }
    }
}
