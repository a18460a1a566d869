use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use crate::model::ids::CourseId;

/// Rounded completion percentage, `round(100 * done / total)` with halves rounded up.
///
/// A course without chapters reports 0.
#[must_use]
pub fn completion_percent(done: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let done = done.min(total) as u64;
    let total = total as u64;
    let pct = (200 * done + total) / (2 * total);
    u8::try_from(pct).unwrap_or(100)
}

//
// ─── ENTRY ─────────────────────────────────────────────────────────────────────
//

/// Per-course record of completed chapter indices and the derived percentage.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressEntry {
    completed: BTreeSet<usize>,
    percent: u8,
}

impl ProgressEntry {
    #[must_use]
    pub fn completed(&self) -> &BTreeSet<usize> {
        &self.completed
    }

    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.completed.len()
    }

    #[must_use]
    pub fn is_chapter_completed(&self, index: usize) -> bool {
        self.completed.contains(&index)
    }

    #[must_use]
    pub fn percent(&self) -> u8 {
        self.percent
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.percent == 100
    }

    /// Marks or unmarks a chapter and recomputes the percentage.
    ///
    /// Returns `true` when the completed set changed. The caller is
    /// responsible for checking `index < chapter_count`.
    pub fn set_chapter(&mut self, index: usize, complete: bool, chapter_count: usize) -> bool {
        let changed = if complete {
            self.completed.insert(index)
        } else {
            self.completed.remove(&index)
        };
        self.recompute(chapter_count);
        changed
    }

    /// Drops indices that no longer exist and refreshes the percentage.
    pub fn reconcile(&mut self, chapter_count: usize) {
        self.completed.retain(|index| *index < chapter_count);
        self.recompute(chapter_count);
    }

    fn recompute(&mut self, chapter_count: usize) {
        self.percent = completion_percent(self.completed.len(), chapter_count);
    }
}

//
// ─── MAP ───────────────────────────────────────────────────────────────────────
//

/// Progress entries keyed by course id. Entries are created lazily and never removed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProgressMap(BTreeMap<CourseId, ProgressEntry>);

impl ProgressMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, id: CourseId) -> Option<&ProgressEntry> {
        self.0.get(&id)
    }

    /// Returns the entry for `id`, creating an empty one on first use.
    pub fn entry_mut(&mut self, id: CourseId) -> &mut ProgressEntry {
        self.0.entry(id).or_default()
    }

    pub fn get_mut(&mut self, id: CourseId) -> Option<&mut ProgressEntry> {
        self.0.get_mut(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (CourseId, &ProgressEntry)> {
        self.0.iter().map(|(id, entry)| (*id, entry))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

//
// ─── GLOBAL ────────────────────────────────────────────────────────────────────
//

/// Aggregate completed/total chapter counts across the catalog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GlobalProgress {
    pub done: usize,
    pub total: usize,
}

impl GlobalProgress {
    #[must_use]
    pub fn percent(&self) -> u8 {
        completion_percent(self.done, self.total)
    }
}

impl fmt::Display for GlobalProgress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.done, self.total)
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
