use serde::{Deserialize, Serialize};

use shelflife_core::{DomainError, DomainResult, ValueObject};

use crate::category::{CategoryResolver, KeywordRule, standard_rules};
use crate::rules::QualityBounds;

/// Immutable engine configuration: the keyword table and quality bounds.
///
/// Built once at startup and handed to [`crate::QualityEngine::new`]. Missing
/// fields fall back to the built-in table and the 0..=50 / 80 bounds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Keyword rules, highest priority first.
    pub keywords: Vec<KeywordRule>,
    pub bounds: QualityBounds,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            keywords: standard_rules(),
            bounds: QualityBounds::default(),
        }
    }
}

impl EngineConfig {
    /// Parse and validate a JSON document.
    pub fn from_json(json: &str) -> DomainResult<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| DomainError::malformed(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> DomainResult<()> {
        self.bounds.validate()?;
        CategoryResolver::new(self.keywords.clone()).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::Category;

    #[test]
    fn empty_document_yields_standard_config() {
        let config = EngineConfig::from_json("{}").unwrap();
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn partial_bounds_keep_remaining_defaults() {
        let config = EngineConfig::from_json(r#"{"bounds":{"max":40}}"#).unwrap();
        assert_eq!(
            config.bounds,
            QualityBounds {
                min: 0,
                max: 40,
                legendary: 80
            }
        );
        assert_eq!(config.keywords.len(), 4);
    }

    #[test]
    fn custom_keywords_replace_the_table() {
        let config = EngineConfig::from_json(
            r#"{"keywords":[{"keyword":"Vintage","category":"ages-positively"}]}"#,
        )
        .unwrap();
        assert_eq!(
            config.keywords,
            vec![KeywordRule::new("Vintage", Category::AgesPositively)]
        );
    }

    #[test]
    fn malformed_json_is_rejected() {
        match EngineConfig::from_json("{ not json").unwrap_err() {
            DomainError::Malformed(_) => {}
            other => panic!("Expected Malformed error, got {other:?}"),
        }
    }

    #[test]
    fn unknown_category_is_rejected() {
        let err = EngineConfig::from_json(
            r#"{"keywords":[{"keyword":"Ale","category":"fermenting"}]}"#,
        )
        .unwrap_err();
        assert!(matches!(err, DomainError::Malformed(_)));
    }

    #[test]
    fn duplicate_keywords_fail_validation() {
        let err = EngineConfig::from_json(
            r#"{"keywords":[
                {"keyword":"Brie","category":"ages-positively"},
                {"keyword":"Brie","category":"normal"}
            ]}"#,
        )
        .unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
    }

    #[test]
    fn inverted_bounds_fail_validation() {
        let err = EngineConfig::from_json(r#"{"bounds":{"min":60}}"#).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }
}
