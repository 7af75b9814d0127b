//! Run performance metrics.
//!
//! One calculation shared by every policy — there is no per-policy metric
//! logic. Turnaround and waiting aggregates come from the finished
//! processes; CPU utilization comes from the timeline.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Avg Turnaround | mean(completion − arrival) |
//! | Avg Waiting | mean(turnaround − burst) |
//! | CPU Utilization | Σ burst / last segment end × 100 |

use crate::models::{Process, Timeline};

/// Aggregate performance of one policy run.
///
/// Times are in ticks; `cpu_utilization` is a percentage. Created fresh
/// per run and discarded with it.
#[derive(Debug, Clone)]
pub struct RunMetrics {
    /// Sum of turnaround times across all processes.
    pub total_turnaround: u64,
    /// Sum of waiting times across all processes.
    pub total_waiting: u64,
    /// Mean turnaround time.
    pub avg_turnaround: f64,
    /// Mean waiting time.
    pub avg_waiting: f64,
    /// Fraction of the run's elapsed span during which some process was
    /// executing, as a percentage. 0 for an empty timeline.
    pub cpu_utilization: f64,
}

impl RunMetrics {
    /// Computes metrics from a finished run's processes and timeline.
    ///
    /// A policy run sets every result field before returning; a result
    /// field that is still unset contributes zero here.
    pub fn calculate(processes: &[Process], timeline: &Timeline) -> Self {
        let total_turnaround: u64 = processes
            .iter()
            .filter_map(|p| p.turnaround_time)
            .map(u64::from)
            .sum();
        let total_waiting: u64 = processes
            .iter()
            .filter_map(|p| p.waiting_time)
            .map(u64::from)
            .sum();

        let n = processes.len();
        let (avg_turnaround, avg_waiting) = if n == 0 {
            (0.0, 0.0)
        } else {
            (
                total_turnaround as f64 / n as f64,
                total_waiting as f64 / n as f64,
            )
        };

        let cpu_utilization = if timeline.is_empty() {
            0.0
        } else {
            let total_burst: u64 = processes.iter().map(|p| u64::from(p.burst_time)).sum();
            total_burst as f64 / f64::from(timeline.last_end()) * 100.0
        };

        Self {
            total_turnaround,
            total_waiting,
            avg_turnaround,
            avg_waiting,
            cpu_utilization,
        }
    }
}
