use super::ui::ChoiceOption;
use ahash::AHashMap;

/// Capability for sourcing per-country option lists at localization time.
///
/// Catalogs reference dynamic sources by an opaque key
/// (`"delivery_platforms"`, `"pos_brands"`); the host injects an
/// implementation that knows its country packs. This replaces runtime
/// string-path reflection into configuration objects with an explicit seam.
pub trait OptionResolver: Send + Sync {
    /// Returns the option list for `source_key` in `country`, or `None`
    /// when the source is unknown there.
    fn resolve(&self, source_key: &str, country: &str) -> Option<Vec<ChoiceOption>>;
}

/// Resolver that never yields options. Dynamic-choice questions degrade to
/// an empty option list under it.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoOptions;

impl OptionResolver for NoOptions {
    fn resolve(&self, _source_key: &str, _country: &str) -> Option<Vec<ChoiceOption>> {
        None
    }
}

/// In-memory resolver backed by per-country source tables.
#[derive(Debug, Default, Clone)]
pub struct StaticOptionResolver {
    sources: AHashMap<(String, String), Vec<ChoiceOption>>,
}

impl StaticOptionResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_source(
        mut self,
        country: &str,
        source_key: &str,
        options: Vec<ChoiceOption>,
    ) -> Self {
        self.sources
            .insert((country.to_string(), source_key.to_string()), options);
        self
    }
}

impl OptionResolver for StaticOptionResolver {
    fn resolve(&self, source_key: &str, country: &str) -> Option<Vec<ChoiceOption>> {
        self.sources
            .get(&(country.to_string(), source_key.to_string()))
            .cloned()
    }
}
