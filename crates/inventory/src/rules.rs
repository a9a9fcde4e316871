//! Per-category quality rules.
//!
//! Every rule is evaluated against the `sell_in` value *before* the day's
//! decrement, then quality is clamped, then `sell_in` advances. Legendary items
//! skip the last two steps.

use serde::{Deserialize, Serialize};

use shelflife_core::{DomainError, DomainResult, ValueObject};

use crate::category::Category;
use crate::item::Item;

/// Event tickets gain +3 per day at or below this many days out.
pub const EVENT_TICKET_SURGE_DAYS: i64 = 5;
/// Event tickets gain +2 per day at or below this many days out.
pub const EVENT_TICKET_RISE_DAYS: i64 = 10;

/// Legal quality range plus the pinned legendary value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QualityBounds {
    pub min: i64,
    pub max: i64,
    pub legendary: i64,
}

impl QualityBounds {
    pub fn clamp(&self, quality: i64) -> i64 {
        quality.max(self.min).min(self.max)
    }
}

impl Default for QualityBounds {
    fn default() -> Self {
        Self {
            min: 0,
            max: 50,
            legendary: 80,
        }
    }
}

impl ValueObject for QualityBounds {
    fn validate(&self) -> DomainResult<()> {
        if self.min > self.max {
            return Err(DomainError::validation(format!(
                "quality min ({}) exceeds max ({})",
                self.min, self.max
            )));
        }
        Ok(())
    }
}

/// What a category does to quality on one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QualityChange {
    /// Add the delta to the current quality.
    Shift(i64),
    /// Drop to the bottom of the legal range.
    Reset,
    /// Pin to the legendary value.
    Pin,
}

/// Quality change for `category` given the pre-decrement `sell_in`.
pub fn quality_change(category: Category, sell_in: i64) -> QualityChange {
    let expired = sell_in <= 0;
    match category {
        Category::Normal => QualityChange::Shift(if expired { -2 } else { -1 }),
        Category::AgesPositively => QualityChange::Shift(if expired { 2 } else { 1 }),
        Category::Legendary => QualityChange::Pin,
        Category::EventTicket => match sell_in {
            s if s <= 0 => QualityChange::Reset,
            s if s <= EVENT_TICKET_SURGE_DAYS => QualityChange::Shift(3),
            s if s <= EVENT_TICKET_RISE_DAYS => QualityChange::Shift(2),
            _ => QualityChange::Shift(1),
        },
        Category::PerishableFast => QualityChange::Shift(if expired { -4 } else { -2 }),
    }
}

/// New quality before clamping.
pub fn adjust_quality(
    category: Category,
    sell_in: i64,
    quality: i64,
    bounds: &QualityBounds,
) -> i64 {
    match quality_change(category, sell_in) {
        QualityChange::Shift(delta) => quality.saturating_add(delta),
        QualityChange::Reset => bounds.min,
        QualityChange::Pin => bounds.legendary,
    }
}

/// Apply one day of `category`'s rule to `item`.
pub fn apply(category: Category, item: &mut Item, bounds: &QualityBounds) {
    let quality = adjust_quality(category, item.sell_in, item.quality, bounds);

    if !category.ages() {
        item.quality = quality;
        return;
    }

    item.quality = bounds.clamp(quality);
    item.sell_in = item.sell_in.saturating_sub(1);
}
