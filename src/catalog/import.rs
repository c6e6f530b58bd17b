use super::{FlowStrategy, QuestionCatalog};
use crate::error::CatalogError;
use crate::question::Question;
use serde::Deserialize;

/// External JSON shape of a question catalog.
///
/// Question definitions deserialize with the camelCase aliases the host
/// tooling emits (`storePath`, `scoreArea`, `channelsAny`, and the legacy
/// `"complete"` mode literal). A definition with curated order lists becomes
/// an [`FlowStrategy::OrderedFlow`] vertical; one without becomes
/// [`FlowStrategy::CatalogOrder`].
#[derive(Debug, Deserialize)]
pub struct CatalogDefinition {
    pub name: String,
    pub questions: Vec<Question>,
    #[serde(default, alias = "quickOrder")]
    pub quick_order: Option<Vec<String>>,
    #[serde(default, alias = "fullAdditionalOrder")]
    pub full_additional: Option<Vec<String>>,
}

impl CatalogDefinition {
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        serde_json::from_str(json).map_err(|e| CatalogError::JsonParseError(e.to_string()))
    }
}

/// A trait for custom catalog formats that can be converted into a validated
/// catalog plus its flow strategy.
///
/// This is the extension point for hosts whose question banks live in an
/// in-house format: implement `IntoCatalog` on the parsed representation and
/// hand the result to a registry builder.
pub trait IntoCatalog {
    fn into_catalog(self) -> Result<(QuestionCatalog, FlowStrategy), CatalogError>;
}

impl IntoCatalog for CatalogDefinition {
    fn into_catalog(self) -> Result<(QuestionCatalog, FlowStrategy), CatalogError> {
        let strategy = match (self.quick_order, self.full_additional) {
            (None, None) => FlowStrategy::CatalogOrder,
            (quick, full) => FlowStrategy::OrderedFlow {
                quick_order: quick.unwrap_or_default(),
                full_additional: full.unwrap_or_default(),
            },
        };
        Ok((QuestionCatalog::new(&self.name, self.questions)?, strategy))
    }
}
