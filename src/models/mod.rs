//! Simulation domain models.
//!
//! Core data types shared by every policy: the process descriptor and the
//! Gantt timeline. A policy run consumes an ordered snapshot of processes
//! and produces a timeline plus filled-in result fields; the types here
//! carry no policy logic of their own.

mod process;
mod timeline;

pub use process::{Pid, Process, Tick};
pub use timeline::{Segment, Timeline};
