//! Gantt timeline model.
//!
//! One policy run produces one `Timeline`: execution segments ordered by
//! start time, non-overlapping, with idle time appearing as a gap between
//! segments rather than as a segment. All four policies share this one
//! segment shape.

use serde::{Deserialize, Serialize};

use super::process::{Pid, Tick};

/// A contiguous run of one process on the CPU: `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    /// Process that was executing.
    pub pid: Pid,
    /// First tick of the run (inclusive).
    pub start: Tick,
    /// Tick the run ended (exclusive). Always greater than `start`.
    pub end: Tick,
}

impl Segment {
    /// Creates a segment.
    pub fn new(pid: Pid, start: Tick, end: Tick) -> Self {
        Self { pid, start, end }
    }

    /// Ticks covered by this segment.
    #[inline]
    pub fn duration(&self) -> Tick {
        self.end - self.start
    }
}

/// Ordered execution segments from one policy run.
///
/// Built through [`Timeline::record`], which merges back-to-back intervals
/// of the same process into a single segment. Owned by the run that
/// produced it and replaced wholesale on the next run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Timeline {
    segments: Vec<Segment>,
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an execution interval `[start, end)` for `pid`.
    ///
    /// Extends the last segment when it belongs to the same process and
    /// ends exactly at `start`; otherwise appends a new segment. The
    /// preemptive policies call this once per tick or dispatch, so
    /// back-to-back runs of one process collapse into a single segment,
    /// while an idle gap breaks contiguity and forces a fresh one.
    ///
    /// Callers record in simulation-clock order with `start < end`.
    pub fn record(&mut self, pid: Pid, start: Tick, end: Tick) {
        if let Some(last) = self.segments.last_mut() {
            if last.pid == pid && last.end == start {
                last.end = end;
                return;
            }
        }
        self.segments.push(Segment::new(pid, start, end));
    }

    /// The segments in start order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Segments belonging to one process.
    pub fn segments_for(&self, pid: Pid) -> Vec<&Segment> {
        self.segments.iter().filter(|s| s.pid == pid).collect()
    }

    /// Whether the run executed nothing.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// End of the last segment: the run's total elapsed span.
    /// 0 when the timeline is empty.
    pub fn last_end(&self) -> Tick {
        self.segments.last().map(|s| s.end).unwrap_or(0)
    }

    /// Total ticks during which some process was executing.
    pub fn busy_ticks(&self) -> Tick {
        self.segments.iter().map(Segment::duration).sum()
    }
}
