use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use shelflife_core::{DomainError, DomainResult, ValueObject};

/// Rule set an item follows, derived from its name on every pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    /// Loses quality over time, twice as fast once the sell date has passed.
    Normal,
    /// Gains quality over time (e.g. cheese).
    AgesPositively,
    /// Never sold, never decays. Quality is pinned to the legendary value.
    Legendary,
    /// Gains quality as the event nears, worthless once it has happened.
    EventTicket,
    /// Degrades twice as fast as `Normal`.
    PerishableFast,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Normal,
        Category::AgesPositively,
        Category::Legendary,
        Category::EventTicket,
        Category::PerishableFast,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Normal => "normal",
            Category::AgesPositively => "ages-positively",
            Category::Legendary => "legendary",
            Category::EventTicket => "event-ticket",
            Category::PerishableFast => "perishable-fast",
        }
    }

    /// Whether items of this category move towards their sell date.
    ///
    /// Legendary items are exempt from both the clamp and the `sell_in` advance.
    pub fn ages(&self) -> bool {
        !matches!(self, Category::Legendary)
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl core::str::FromStr for Category {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| DomainError::validation(format!("unknown category `{s}`")))
    }
}

/// Built-in keyword table, highest priority first.
pub const STANDARD_KEYWORDS: &[(&str, Category)] = &[
    ("Aged Brie", Category::AgesPositively),
    ("Sulfuras", Category::Legendary),
    ("Backstage passes", Category::EventTicket),
    ("Conjured", Category::PerishableFast),
];

/// Resolve a name against the built-in keyword table.
///
/// Matching is case-sensitive substring containment. When a name contains
/// several keywords the earliest entry in [`STANDARD_KEYWORDS`] wins; a name
/// with no keyword is `Normal`.
pub fn resolve(name: &str) -> Category {
    first_match(
        STANDARD_KEYWORDS.iter().map(|(keyword, category)| (*keyword, *category)),
        name,
    )
}

fn first_match<'a>(rules: impl IntoIterator<Item = (&'a str, Category)>, name: &str) -> Category {
    rules
        .into_iter()
        .find(|(keyword, _)| name.contains(keyword))
        .map(|(_, category)| category)
        .unwrap_or(Category::Normal)
}

/// One `(keyword, category)` entry of a resolver table.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KeywordRule {
    pub keyword: String,
    pub category: Category,
}

impl KeywordRule {
    pub fn new(keyword: impl Into<String>, category: Category) -> Self {
        Self {
            keyword: keyword.into(),
            category,
        }
    }
}

impl ValueObject for KeywordRule {
    fn validate(&self) -> DomainResult<()> {
        // A blank keyword would match (nearly) every name and shadow the rest of the table.
        if self.keyword.trim().is_empty() {
            return Err(DomainError::validation("keyword cannot be empty"));
        }
        Ok(())
    }
}

/// Ordered keyword table mapping item names to categories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryResolver {
    rules: Vec<KeywordRule>,
}

impl CategoryResolver {
    /// Build a resolver from a custom table (highest priority first).
    pub fn new(rules: Vec<KeywordRule>) -> DomainResult<Self> {
        let mut seen = HashSet::with_capacity(rules.len());
        for rule in &rules {
            rule.validate()?;
            if !seen.insert(rule.keyword.as_str()) {
                return Err(DomainError::conflict(format!(
                    "duplicate keyword `{}`",
                    rule.keyword
                )));
            }
        }
        Ok(Self { rules })
    }

    /// Resolver over [`STANDARD_KEYWORDS`].
    pub fn standard() -> Self {
        Self {
            rules: standard_rules(),
        }
    }

    pub fn rules(&self) -> &[KeywordRule] {
        &self.rules
    }

    pub fn resolve(&self, name: &str) -> Category {
        first_match(
            self.rules.iter().map(|r| (r.keyword.as_str(), r.category)),
            name,
        )
    }
}

impl Default for CategoryResolver {
    fn default() -> Self {
        Self::standard()
    }
}

pub(crate) fn standard_rules() -> Vec<KeywordRule> {
    STANDARD_KEYWORDS
        .iter()
        .map(|(keyword, category)| KeywordRule::new(*keyword, *category))
        .collect()
}
