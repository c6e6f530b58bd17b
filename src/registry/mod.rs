pub mod pack;

pub use pack::CatalogPack;

use crate::catalog::{FlowStrategy, QuestionCatalog, gastro, verticals};
use crate::error::CatalogError;
use crate::suppress::SuppressionRule;
use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Vertical used when a business category is unknown, so onboarding never
/// dead-ends on a category the registry has not heard of.
pub const DEFAULT_VERTICAL: &str = "gastro";

/// A business vertical: its question bank, flow strategy, and the
/// suppression rules of its narrow sub-types.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerticalDefinition {
    pub key: String,
    pub catalog: QuestionCatalog,
    pub flow: FlowStrategy,
    #[serde(default)]
    pub suppressions: Vec<SuppressionRule>,
}

impl VerticalDefinition {
    pub fn new(key: &str, catalog: QuestionCatalog, flow: FlowStrategy) -> Self {
        Self {
            key: key.to_string(),
            catalog,
            flow,
            suppressions: Vec::new(),
        }
    }

    pub fn with_suppression(mut self, rule: SuppressionRule) -> Self {
        self.suppressions.push(rule);
        self
    }
}

/// Maps business categories to their verticals. Built once at startup and
/// immutable for the process lifetime; lookups never fail.
#[derive(Debug)]
pub struct SectorRegistry {
    verticals: AHashMap<String, VerticalDefinition>,
    default: VerticalDefinition,
}

impl SectorRegistry {
    pub fn builder() -> SectorRegistryBuilder {
        SectorRegistryBuilder::new()
    }

    /// Registry with every built-in vertical registered and gastro as the
    /// documented default.
    pub fn standard() -> Self {
        let builtins = [
            gastro::vertical(),
            verticals::pet_shop(),
            verticals::gym(),
            verticals::psychology(),
            verticals::nutrition(),
            verticals::laboratory(),
            verticals::kinesiology(),
            verticals::electronics(),
        ];
        let default = builtins[0].clone();
        let mut map = AHashMap::new();
        for vertical in builtins {
            map.insert(vertical.key.clone(), vertical);
        }
        Self {
            verticals: map,
            default,
        }
    }

    /// Resolves a business category to its vertical, degrading to the
    /// default vertical for unknown categories.
    pub fn resolve(&self, category: &str) -> &VerticalDefinition {
        match self.verticals.get(category) {
            Some(vertical) => vertical,
            None => {
                debug!(
                    category = %category,
                    fallback = %self.default.key,
                    "unknown business category; using the default vertical"
                );
                &self.default
            }
        }
    }

    pub fn default_key(&self) -> &str {
        &self.default.key
    }

    pub fn verticals(&self) -> impl Iterator<Item = &VerticalDefinition> {
        self.verticals.values()
    }
}

/// Builder for registries over custom verticals.
pub struct SectorRegistryBuilder {
    verticals: Vec<VerticalDefinition>,
    default_key: String,
}

impl SectorRegistryBuilder {
    pub fn new() -> Self {
        Self {
            verticals: Vec::new(),
            default_key: DEFAULT_VERTICAL.to_string(),
        }
    }

    pub fn with_vertical(mut self, vertical: VerticalDefinition) -> Self {
        self.verticals.push(vertical);
        self
    }

    pub fn with_default(mut self, key: &str) -> Self {
        self.default_key = key.to_string();
        self
    }

    /// Fails when the chosen default vertical was never registered, since a
    /// registry without a fallback could dead-end on unknown categories.
    pub fn build(self) -> Result<SectorRegistry, CatalogError> {
        let mut map = AHashMap::new();
        for vertical in self.verticals {
            map.insert(vertical.key.clone(), vertical);
        }
        let default = map
            .get(&self.default_key)
            .cloned()
            .ok_or(CatalogError::MissingDefaultVertical(self.default_key))?;
        Ok(SectorRegistry {
            verticals: map,
            default,
        })
    }
}

impl Default for SectorRegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}
