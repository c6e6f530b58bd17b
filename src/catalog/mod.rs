pub mod gastro;
pub mod import;
pub mod verticals;

pub use import::*;

use crate::error::CatalogError;
use crate::question::Question;
use ahash::AHashSet;
use serde::{Deserialize, Serialize};

/// An immutable, declaration-ordered bank of question definitions for one
/// vertical. Loaded once at startup; never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionCatalog {
    name: String,
    questions: Vec<Question>,
}

impl QuestionCatalog {
    /// Builds a catalog, rejecting duplicate question ids.
    pub fn new(name: &str, questions: Vec<Question>) -> Result<Self, CatalogError> {
        let mut seen = AHashSet::new();
        for question in &questions {
            if !seen.insert(question.id.as_str()) {
                return Err(CatalogError::DuplicateQuestionId {
                    question_id: question.id.clone(),
                    catalog: name.to_string(),
                });
            }
        }
        Ok(Self {
            name: name.to_string(),
            questions,
        })
    }

    /// Infallible constructor for the built-in tables, which are fixed at
    /// compile time; duplicate ids there are a programming error, not data
    /// variance.
    pub(crate) fn from_static(name: &str, questions: Vec<Question>) -> Self {
        debug_assert!(
            {
                let mut seen = AHashSet::new();
                questions.iter().all(|q| seen.insert(q.id.as_str()))
            },
            "duplicate question id in built-in catalog '{}'",
            name
        );
        Self {
            name: name.to_string(),
            questions,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Questions in declaration order.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn by_id(&self, id: &str) -> Option<&Question> {
        self.questions.iter().find(|question| question.id == id)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

/// How a vertical orders its questions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum FlowStrategy {
    /// Curated id sequences: `quick_order` always runs; `full_additional`
    /// is appended when the requested mode is full. Ids missing from the
    /// catalog are skipped with a warning, so removing a question from a
    /// catalog never breaks onboarding.
    OrderedFlow {
        quick_order: Vec<String>,
        full_additional: Vec<String>,
    },
    /// Present the catalog in declaration order, filtered by mode,
    /// business-type allow-list, and condition.
    CatalogOrder,
}
