//! Preemptive priority policy.
//!
//! Re-selects the most urgent eligible process at every tick, so an
//! arriving process with a lower priority value takes the CPU from the one
//! currently holding it. Selection uses the same arrival-order tie-break
//! as the non-preemptive family, evaluated against remaining (not total)
//! burst, which also keeps the running process on the CPU through an
//! equal-priority arrival.
//!
//! Segments come out of [`Timeline::record`] one tick at a time:
//! back-to-back ticks of one process collapse into a single segment, and
//! an idle tick emits nothing, so no segment ever spans an idle gap.

use crate::models::{Process, Tick, Timeline};
use crate::validation::{validate_priorities, validate_processes, ValidationError};

use super::{urgency, SimulationRun};

/// Runs the preemptive priority policy.
///
/// Every process must have a priority assigned (lower = more urgent).
/// Returned processes are in arrival order.
pub fn run_priority_preemptive(
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
    Ok(simulate(processes))
}

fn simulate(processes: &[Process]) -> SimulationRun {
    let mut processes = processes.to_vec();
    for p in &mut processes {
        p.reset_results();
    }
    processes.sort_by_key(|p| p.arrival_time);

    let mut remaining: Vec<Tick> = processes.iter().map(|p| p.burst_time).collect();
    let mut timeline = Timeline::new();
    let mut t: Tick = 0;
    let mut completed = 0;

    while completed < processes.len() {
        let mut selected: Option<usize> = None;
        for (i, p) in processes.iter().enumerate() {
            if p.arrival_time <= t && remaining[i] > 0 {
                match selected {
                    Some(s) if urgency(p) >= urgency(&processes[s]) => {}
                    _ => selected = Some(i),
                }
            }
        }

        let Some(i) = selected else {
            t += 1; // idle tick, no segment
            continue;
        };

        timeline.record(processes[i].pid, t, t + 1);
        t += 1;
        remaining[i] -= 1;

        if remaining[i] == 0 {
            processes[i].finish_at(t);
            completed += 1;
        }
    }

    SimulationRun { processes, timeline }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;

    fn make_process(pid: u32, arrival: u32, burst: u32, priority: u32) -> Process {
        Process::new(pid, arrival, burst).with_priority(priority)
    }

    fn result_for(run: &SimulationRun, pid: u32) -> &Process {
        run.processes.iter().find(|p| p.pid == pid).unwrap()
    }

    #[test]
    fn test_arrival_preempts_running_process() {
        // P0 starts at t=0; P1 (more urgent) arrives at t=1, runs to
        // completion, then P0 resumes.
        let processes = vec![make_process(0, 0, 5, 2), make_process(1, 1, 3, 1)];
        let run = run_priority_preemptive(&processes).unwrap();

        let segments = run.timeline.segments();
        assert_eq!(segments.len(), 3);
        assert_eq!((segments[0].pid, segments[0].start, segments[0].end), (0, 0, 1));
        assert_eq!((segments[1].pid, segments[1].start, segments[1].end), (1, 1, 4));
        assert_eq!((segments[2].pid, segments[2].start, segments[2].end), (0, 4, 8));

        assert_eq!(result_for(&run, 1).completion_time, Some(4));
        assert_eq!(result_for(&run, 1).waiting_time, Some(0));
        assert_eq!(result_for(&run, 0).completion_time, Some(8));
        assert_eq!(result_for(&run, 0).waiting_time, Some(3));
    }

    #[test]
    fn test_equal_priority_does_not_preempt() {
        // P1 arrives mid-run with the same priority: the running process
        // keeps the CPU (strictly-smaller-key rule).
        let processes = vec![make_process(0, 0, 4, 1), make_process(1, 2, 2, 1)];
        let run = run_priority_preemptive(&processes).unwrap();

        let segments = run.timeline.segments();
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].end, 4);
        assert_eq!(segments[1].pid, 1);
    }

    #[test]
    fn test_unit_ticks_merge_into_one_segment() {
        let processes = vec![make_process(0, 0, 6, 1)];
        let run = run_priority_preemptive(&processes).unwrap();
        assert_eq!(run.timeline.segments().len(), 1);
        assert_eq!(run.timeline.last_end(), 6);
    }

    #[test]
    fn test_no_segment_spans_an_idle_gap() {
        // P0 finishes at t=2; nothing arrives until t=5. The gap must not
        // be absorbed into either neighbor segment.
        let processes = vec![make_process(0, 0, 2, 1), make_process(1, 5, 2, 2)];
        let run = run_priority_preemptive(&processes).unwrap();

        let segments = run.timeline.segments();
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].end, 2);
        assert_eq!(segments[1].start, 5);
        assert_eq!(run.timeline.busy_ticks(), 4);
    }

    #[test]
    fn test_no_adjacent_segments_share_a_pid() {
        let processes = vec![
            make_process(0, 0, 4, 3),
            make_process(1, 1, 2, 1),
            make_process(2, 2, 3, 2),
        ];
        let run = run_priority_preemptive(&processes).unwrap();

        let segments = run.timeline.segments();
        for pair in segments.windows(2) {
            assert_ne!(pair[0].pid, pair[1].pid);
            assert!(pair[0].end <= pair[1].start);
        }
    }

    #[test]
    fn test_conservation_across_preemptions() {
        let processes = vec![
            make_process(0, 0, 5, 2),
            make_process(1, 1, 3, 1),
            make_process(2, 2, 4, 3),
        ];
        let run = run_priority_preemptive(&processes).unwrap();

        for p in &run.processes {
            let executed: u32 = run
                .timeline
                .segments_for(p.pid)
                .iter()
                .map(|s| s.duration())
                .sum();
            assert_eq!(executed, p.burst_time);
            assert_eq!(
                p.waiting_time.unwrap() + p.burst_time,
                p.turnaround_time.unwrap()
            );
        }
    }

    #[test]
    fn test_completion_uses_tick_of_final_unit() {
        // Preempted twice; completion time is when the last tick ran.
        let processes = vec![
            make_process(0, 0, 3, 3),
            make_process(1, 1, 1, 1),
            make_process(2, 2, 1, 2),
        ];
        let run = run_priority_preemptive(&processes).unwrap();

        // P0 runs [0,1), yields to P1 [1,2), then P2 [2,3), resumes [3,5).
        assert_eq!(result_for(&run, 0).completion_time, Some(5));
        assert_eq!(result_for(&run, 1).completion_time, Some(2));
        assert_eq!(result_for(&run, 2).completion_time, Some(3));
    }

    #[test]
    fn test_rejects_missing_priorities() {
        let processes = vec![Process::new(0, 0, 3)];
        let errors = run_priority_preemptive(&processes).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::MissingPriority));
    }

    #[test]
    fn test_rejects_empty_set_and_reports_nothing_else() {
        let errors = run_priority_preemptive(&[]).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::EmptyProcessSet);
    }
}
