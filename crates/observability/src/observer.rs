use shelflife_inventory::{Item, ItemUpdate, QualityObserver};

/// Logs every item update at `debug` and a per-day summary at `info`.
#[derive(Debug, Default, Clone)]
pub struct TracingObserver {
    updated: usize,
    expired: usize,
    worthless: usize,
}

/// Counts gathered for the day in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DaySummary {
    pub updated: usize,
    /// Items whose sell date has passed after the update.
    pub expired: usize,
    /// Items that ended the day at quality 0.
    pub worthless: usize,
}

impl TracingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn summary(&self) -> DaySummary {
        DaySummary {
            updated: self.updated,
            expired: self.expired,
            worthless: self.worthless,
        }
    }
}

impl QualityObserver for TracingObserver {
    fn day_started(&mut self, day: u32, items: &[Item]) {
        self.updated = 0;
        self.expired = 0;
        self.worthless = 0;
        tracing::debug!(day, items = items.len(), "day started");
    }

    fn item_updated(&mut self, item: &Item, update: &ItemUpdate) {
        self.updated += 1;
        if update.sell_in_after < 0 {
            self.expired += 1;
        }
        if update.quality_after == 0 {
            self.worthless += 1;
        }

        tracing::debug!(
            name = %item.name,
            category = %update.category,
            sell_in_before = update.sell_in_before,
            sell_in_after = update.sell_in_after,
            quality_before = update.quality_before,
            quality_after = update.quality_after,
            "item updated"
        );
    }

    fn day_completed(&mut self, day: u32, _items: &[Item]) {
        tracing::info!(
            day,
            updated = self.updated,
            expired = self.expired,
            worthless = self.worthless,
            "day completed"
        );
    }
}
