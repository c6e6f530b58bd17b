use crate::question::{InputKind, Question};
use ahash::{AHashMap, AHashSet};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Business-sub-type override removing or narrowing questions whose base
/// condition holds.
///
/// Suppression is a correctness backstop for narrow sub-types (never ask
/// seating capacity of a delivery-only dark kitchen) and always takes
/// precedence over a true condition.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SuppressionRule {
    #[serde(alias = "businessType")]
    pub business_type: String,
    #[serde(default, alias = "questionIds")]
    pub suppressed_ids: AHashSet<String>,
    #[serde(default, alias = "scoreAreas")]
    pub suppressed_areas: AHashSet<String>,
    /// Per-question allow-list of option ids kept on choice inputs.
    #[serde(default, alias = "optionFilters")]
    pub option_filters: AHashMap<String, AHashSet<String>>,
}

impl SuppressionRule {
    pub fn for_type(business_type: &str) -> Self {
        Self {
            business_type: business_type.to_string(),
            ..Self::default()
        }
    }

    pub fn suppress_ids(mut self, ids: &[&str]) -> Self {
        self.suppressed_ids
            .extend(ids.iter().map(|id| id.to_string()));
        self
    }

    pub fn suppress_areas(mut self, areas: &[&str]) -> Self {
        self.suppressed_areas
            .extend(areas.iter().map(|area| area.to_string()));
        self
    }

    pub fn keep_options(mut self, question_id: &str, option_ids: &[&str]) -> Self {
        self.option_filters.insert(
            question_id.to_string(),
            option_ids.iter().map(|id| id.to_string()).collect(),
        );
        self
    }

    fn suppresses(&self, question: &Question) -> bool {
        self.suppressed_ids.contains(&question.id)
            || self.suppressed_areas.contains(&question.score_area)
    }

    fn transform(&self, question: &mut Question) {
        if let Some(kept) = self.option_filters.get(&question.id) {
            if let InputKind::Choice { options, .. } = &mut question.ui.input {
                options.retain(|option| kept.contains(&option.id));
            }
        }
    }
}

/// Applies the suppression layer for one business type over a composed
/// question list. With no type recorded, or no rule for it, the list passes
/// through untouched.
pub fn apply_suppression(
    questions: Vec<Question>,
    rules: &[SuppressionRule],
    business_type: Option<&str>,
) -> Vec<Question> {
    let Some(type_id) = business_type else {
        return questions;
    };
    let Some(rule) = rules.iter().find(|rule| rule.business_type == type_id) else {
        return questions;
    };
    questions
        .into_iter()
        .filter(|question| {
            let dropped = rule.suppresses(question);
            if dropped {
                debug!(
                    question = %question.id,
                    business_type = %type_id,
                    "question suppressed for business type"
                );
            }
            !dropped
        })
        .map(|mut question| {
            rule.transform(&mut question);
            question
        })
        .collect()
}
