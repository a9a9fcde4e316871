//! Hooks around the update loop.
//!
//! The engine itself never logs or prints. Callers that want to watch a pass
//! (tracing, reports, test recorders) hand in a [`QualityObserver`].

use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::item::Item;

/// Before/after view of one item's update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemUpdate {
    pub category: Category,
    pub sell_in_before: i64,
    pub quality_before: i64,
    pub sell_in_after: i64,
    pub quality_after: i64,
}

impl ItemUpdate {
    pub fn quality_delta(&self) -> i64 {
        self.quality_after.saturating_sub(self.quality_before)
    }
}

/// Receives engine progress. All methods default to no-ops.
pub trait QualityObserver {
    /// Called before the first item of `day` is updated.
    fn day_started(&mut self, _day: u32, _items: &[Item]) {}

    /// Called once per item, in input order, after it has been updated.
    fn item_updated(&mut self, _item: &Item, _update: &ItemUpdate) {}

    /// Called after every item of `day` has been updated.
    fn day_completed(&mut self, _day: u32, _items: &[Item]) {}
}

/// Observer that ignores everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl QualityObserver for NoopObserver {}

/// Records a snapshot of the whole inventory at the start of every day plus
/// the final state.
///
/// Days are numbered by the recorder, not the caller, so one recorder can be
/// reused across several `simulate` calls and keeps counting.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TrajectoryRecorder {
    days: Vec<Vec<Item>>,
    last: Option<Vec<Item>>,
}

impl TrajectoryRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshots taken at the start of each day, oldest first, followed by the
    /// state after the last completed day.
    pub fn snapshots(&self) -> Vec<(u32, &[Item])> {
        self.days
            .iter()
            .chain(self.last.iter())
            .zip(0u32..)
            .map(|(items, day)| (day, items.as_slice()))
            .collect()
    }

    /// Text report in the classic shop format:
    ///
    /// ```text
    /// -------- day 0 --------
    /// name, sellIn, quality
    /// Aged Brie, 2, 0
    /// ```
    pub fn report(&self) -> String {
        self.to_string()
    }
}

impl core::fmt::Display for TrajectoryRecorder {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        for (day, items) in self.snapshots() {
            writeln!(f, "-------- day {day} --------")?;
            writeln!(f, "name, sellIn, quality")?;
            for item in items {
                writeln!(f, "{item}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl QualityObserver for TrajectoryRecorder {
    fn day_started(&mut self, _day: u32, items: &[Item]) {
        // A resumed run starts from the state the previous run ended on.
        self.last = None;
        self.days.push(items.to_vec());
    }

    fn day_completed(&mut self, _day: u32, items: &[Item]) {
        self.last = Some(items.to_vec());
    }
}
