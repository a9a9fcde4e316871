//! Inventory quality module.
//!
//! This crate contains the end-of-day quality rules for shop items, implemented
//! purely as deterministic domain logic (no IO, no HTTP, no storage). One call
//! to [`update_quality`] is one simulated day.

use std::sync::OnceLock;

pub mod category;
pub mod config;
pub mod engine;
pub mod fixtures;
pub mod item;
pub mod observer;
pub mod rules;

pub use category::{Category, CategoryResolver, KeywordRule, STANDARD_KEYWORDS, resolve};
pub use config::EngineConfig;
pub use engine::QualityEngine;
pub use item::Item;
pub use observer::{ItemUpdate, NoopObserver, QualityObserver, TrajectoryRecorder};
pub use rules::{QualityBounds, QualityChange};

static STANDARD_ENGINE: OnceLock<QualityEngine> = OnceLock::new();

/// Engine over the built-in rules, built on first use and shared afterwards.
pub fn standard_engine() -> &'static QualityEngine {
    STANDARD_ENGINE.get_or_init(QualityEngine::standard)
}

/// Advance every item by one day using the built-in rules.
pub fn update_quality(items: &mut [Item]) {
    standard_engine().update_quality(items);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_engine_is_built_once() {
        assert!(std::ptr::eq(standard_engine(), standard_engine()));
        assert_eq!(standard_engine(), &QualityEngine::standard());
    }

    #[test]
    fn update_quality_uses_the_standard_engine() {
        let mut shared = fixtures::sample_inventory();
        let mut fresh = fixtures::sample_inventory();

        update_quality(&mut shared);
        QualityEngine::standard().update_quality(&mut fresh);

        assert_eq!(shared, fresh);
    }
}
