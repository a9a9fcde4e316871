use serde::{Deserialize, Serialize};

/// A stock record on the shelf.
///
/// Items are plain mutable records: the engine updates `sell_in` and `quality`
/// in place and never creates, drops or reorders them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    /// Days left to sell the item. May go negative.
    pub sell_in: i64,
    /// Perceived value. Kept within [0, 50] except for legendary items.
    pub quality: i64,
}

impl Item {
    pub fn new(name: impl Into<String>, sell_in: i64, quality: i64) -> Self {
        Self {
            name: name.into(),
            sell_in,
            quality,
        }
    }
}

impl core::fmt::Display for Item {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}, {}, {}", self.name, self.sell_in, self.quality)
    }
}
