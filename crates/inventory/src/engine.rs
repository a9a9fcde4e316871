use shelflife_core::{DomainResult, ValueObject};

use crate::category::{Category, CategoryResolver};
use crate::config::EngineConfig;
use crate::item::Item;
use crate::observer::{ItemUpdate, NoopObserver, QualityObserver};
use crate::rules::{self, QualityBounds};

/// End-of-day quality update engine.
///
/// Holds only immutable configuration; every method takes the items by
/// mutable slice and touches nothing else. One pass is one simulated day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QualityEngine {
    resolver: CategoryResolver,
    bounds: QualityBounds,
}

impl QualityEngine {
    /// Build an engine, rejecting invalid keyword tables or bounds.
    pub fn new(config: EngineConfig) -> DomainResult<Self> {
        config.bounds.validate()?;
        let resolver = CategoryResolver::new(config.keywords)?;
        tracing::debug!(
            keywords = resolver.rules().len(),
            min = config.bounds.min,
            max = config.bounds.max,
            "quality engine configured"
        );
        Ok(Self {
            resolver,
            bounds: config.bounds,
        })
    }

    /// Engine over the built-in keyword table and default bounds.
    pub fn standard() -> Self {
        Self {
            resolver: CategoryResolver::standard(),
            bounds: QualityBounds::default(),
        }
    }

    pub fn bounds(&self) -> &QualityBounds {
        &self.bounds
    }

    pub fn category_of(&self, name: &str) -> Category {
        self.resolver.resolve(name)
    }

    /// Advance a single item by one day.
    pub fn update_item(&self, item: &mut Item) -> ItemUpdate {
        let category = self.category_of(&item.name);
        let (sell_in_before, quality_before) = (item.sell_in, item.quality);

        rules::apply(category, item, &self.bounds);

        ItemUpdate {
            category,
            sell_in_before,
            quality_before,
            sell_in_after: item.sell_in,
            quality_after: item.quality,
        }
    }

    /// Advance every item by one day, preserving order.
    pub fn update_quality(&self, items: &mut [Item]) {
        self.update_quality_observed(items, &mut NoopObserver);
    }

    pub fn update_quality_observed(&self, items: &mut [Item], observer: &mut dyn QualityObserver) {
        for item in items.iter_mut() {
            let update = self.update_item(item);
            observer.item_updated(item, &update);
        }
    }

    /// Run `days` consecutive passes. Day numbering starts at 0.
    pub fn simulate(&self, items: &mut [Item], days: u32, observer: &mut dyn QualityObserver) {
        for day in 0..days {
            observer.day_started(day, items);
            self.update_quality_observed(items, observer);
            observer.day_completed(day, items);
        }
    }
}

impl Default for QualityEngine {
    fn default() -> Self {
        Self::standard()
    }
}
