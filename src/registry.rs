//! Process registry.
//!
//! Owns the canonical process list and hands each policy run an ordered
//! snapshot. The registry is an explicit value, deliberately not a global:
//! independent registries never share state, and a snapshot taken for one
//! run is untouched by later edits to the registry.

use serde::{Deserialize, Serialize};

use crate::models::{Pid, Process, Tick};

/// The canonical, ordered collection of process descriptors.
///
/// Pids are assigned in creation order and double as indices into the
/// collection. Result fields on the registry's own processes stay unset;
/// results belong to the per-run copies inside a
/// [`crate::policies::SimulationRun`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProcessRegistry {
    processes: Vec<Process>,
}

impl ProcessRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a process and returns its pid (the creation index).
    ///
    /// Input rules (`burst_time > 0`) are enforced by
    /// [`crate::validation::validate_processes`] at run time, not here.
    pub fn add(&mut self, arrival_time: Tick, burst_time: Tick) -> Pid {
        let pid = self.processes.len() as Pid;
        self.processes.push(Process::new(pid, arrival_time, burst_time));
        pid
    }

    /// Number of registered processes.
    pub fn len(&self) -> usize {
        self.processes.len()
    }

    /// Whether the registry holds no processes.
    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }

    /// The processes in creation order.
    pub fn processes(&self) -> &[Process] {
        &self.processes
    }

    /// Looks up a process by pid.
    pub fn get(&self, pid: Pid) -> Option<&Process> {
        self.processes.iter().find(|p| p.pid == pid)
    }

    /// Sets the priority used by the priority policies (lower = more
    /// urgent). Returns `false` for an unknown pid.
    pub fn set_priority(&mut self, pid: Pid, priority: u32) -> bool {
        match self.processes.iter_mut().find(|p| p.pid == pid) {
            Some(p) => {
                p.priority = Some(priority);
                true
            }
            None => false,
        }
    }

    /// Removes every process.
    pub fn clear(&mut self) {
        self.processes.clear();
    }

    /// Ordered private copy for one policy run.
    ///
    /// The copy is fully detached: a policy mutates its result fields
    /// without touching the registry, and registry edits after the
    /// snapshot do not reach a run already in flight.
    pub fn snapshot(&self) -> Vec<Process> {
        self.processes.clone()
    }
}
