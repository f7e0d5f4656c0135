//! Per-instruction record of a simulation run.

use std::fmt;

use crate::common::{FrameId, PageId};

/// Marker used in rendered rows for an empty slot or an absent value.
pub const EMPTY_MARKER: &str = "-";

/// Outcome of a single instruction reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    /// 1-based position in the run.
    pub step: u64,

    /// Referenced instruction address.
    pub instruction: u32,

    /// Frame occupancy after this step, in slot order.
    pub frames: Vec<Option<PageId>>,

    /// Whether the reference faulted.
    pub is_fault: bool,

    /// Slot that received the faulting page (0-based). None on a hit.
    pub inserted_frame: Option<FrameId>,

    /// Page displaced from `inserted_frame`. None on a hit or a cold fill.
    pub evicted: Option<PageId>,
}

impl LogEntry {
    /// 1-based slot number of the inserted frame, for display.
    pub fn inserted_slot(&self) -> Option<usize> {
        self.inserted_frame.map(|frame| frame.slot_number())
    }
}

fn write_or_marker<T: fmt::Display>(f: &mut fmt::Formatter<'_>, value: Option<T>) -> fmt::Result {
    match value {
        Some(v) => write!(f, "{}", v),
        None => f.write_str(EMPTY_MARKER),
    }
}

/// Renders as `step instruction [p0 p1 - -] fault|hit slot evicted`.
impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:>3} {:>3} [", self.step, self.instruction)?;
        for (i, slot) in self.frames.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write_or_marker(f, slot.map(|page| page.0))?;
        }
        write!(f, "] {} ", if self.is_fault { "fault" } else { "hit" })?;
        write_or_marker(f, self.inserted_slot())?;
        f.write_str(" ")?;
        write_or_marker(f, self.evicted.map(|page| page.0))
    }
}

/// Append-only log of a run, one entry per processed instruction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExecutionLog {
    entries: Vec<LogEntry>,
}

impl ExecutionLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Record one step.
    pub fn append(
        &mut self,
        step: u64,
        instruction: u32,
        frames: Vec<Option<PageId>>,
        is_fault: bool,
        inserted_frame: Option<FrameId>,
        evicted: Option<PageId>,
    ) {
        self.entries.push(LogEntry {
            step,
            instruction,
            frames,
            is_fault,
            inserted_frame,
            evicted,
        });
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LogEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of entries that faulted.
    pub fn fault_count(&self) -> usize {
        self.entries.iter().filter(|e| e.is_fault).count()
    }

    /// Number of entries that displaced a resident page.
    pub fn eviction_count(&self) -> usize {
        self.entries.iter().filter(|e| e.evicted.is_some()).count()
    }
}

impl<'a> IntoIterator for &'a ExecutionLog {
    type Item = &'a LogEntry;
    type IntoIter = std::slice::Iter<'a, LogEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
