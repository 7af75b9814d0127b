//! Discrete-tick CPU scheduling simulator.
//!
//! Simulates classic dispatching policies over a fixed batch of processes,
//! producing a Gantt timeline and per-process completion, turnaround, and
//! waiting times, plus aggregate performance metrics. A teaching and
//! analysis tool: it answers "in what order, and for how long, does each
//! process run under policy P — and how good is that schedule?"
//!
//! # Modules
//!
//! - **`models`**: Core types — `Process`, `Segment`, `Timeline`
//! - **`registry`**: `ProcessRegistry` — canonical process list, one ordered
//!   snapshot per run
//! - **`policies`**: The four dispatching policies and `SimulationRun`
//! - **`metrics`**: `RunMetrics` — aggregate statistics shared by all policies
//! - **`validation`**: Precondition checks run by every policy entry point
//!
//! # Model
//!
//! Time is a discrete tick counter starting at 0. A run consumes an ordered
//! snapshot of processes, simulates on a private copy, and returns a
//! self-contained [`policies::SimulationRun`] — no state survives the call,
//! so repeated or concurrent runs never interfere.
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2015), "Modern Operating Systems", Ch. 2.4

pub mod metrics;
pub mod models;
pub mod policies;
pub mod registry;
pub mod validation;
