use crate::catalog::FlowStrategy;
use crate::condition::{Applicability, evaluator};
use crate::profile::BusinessProfile;
use crate::question::{FollowUp, Mode, Question};
use crate::registry::VerticalDefinition;
use crate::suppress;
use itertools::Itertools;
use tracing::warn;

/// Resolves the ordered, filtered question list for one
/// (vertical, mode, profile) triple.
///
/// Ordered-flow verticals walk their curated id sequences; catalog-order
/// verticals walk declaration order and may splice follow-up questions in
/// after their parents. The output keeps the curated order; it is never
/// re-sorted by weight or score. Suppression for the profile's primary
/// business type runs last and wins over a true condition.
pub fn compose(
    vertical: &VerticalDefinition,
    mode: Mode,
    profile: &BusinessProfile,
) -> Vec<Question> {
    let resolved: Vec<&Question> = match &vertical.flow {
        FlowStrategy::OrderedFlow {
            quick_order,
            full_additional,
        } => {
            let appended: &[String] = if mode == Mode::Full {
                full_additional
            } else {
                &[]
            };
            quick_order
                .iter()
                .chain(appended.iter())
                .unique()
                .filter_map(|id| {
                    let found = vertical.catalog.by_id(id);
                    if found.is_none() {
                        // Intentional tolerance: a question removed from the
                        // catalog must not break every flow list naming it.
                        warn!(
                            question = %id,
                            catalog = %vertical.catalog.name(),
                            "flow id not found in catalog; skipping"
                        );
                    }
                    found
                })
                .collect()
        }
        FlowStrategy::CatalogOrder => vertical.catalog.questions().iter().collect(),
    };

    let splice_follow_ups = matches!(vertical.flow, FlowStrategy::CatalogOrder);
    let mut active: Vec<Question> = Vec::new();
    for question in resolved {
        if !passes(question, mode, profile) {
            continue;
        }
        active.push(question.clone());
        if splice_follow_ups {
            if let Some(follow_up) = &question.follow_up {
                if follow_up_triggered(question, follow_up, profile)
                    && passes(&follow_up.question, mode, profile)
                {
                    active.push((*follow_up.question).clone());
                }
            }
        }
    }

    suppress::apply_suppression(active, &vertical.suppressions, profile.primary_type())
}

/// Question-level applicability: the mode gate first, then the business-type
/// allow-list, then the condition clauses. One rule set serves the active
/// list, the public applicability check, and the precision-score
/// denominator, so the score always agrees with what the user is shown.
pub fn explain(question: &Question, mode: Mode, profile: &BusinessProfile) -> Applicability {
    if !question.availability.matches(mode) {
        return Applicability::ModeMismatch;
    }
    if let Some(types) = &question.business_types {
        let allowed = profile
            .primary_type()
            .is_some_and(|type_id| types.iter().any(|wanted| wanted == type_id));
        if !allowed {
            return Applicability::TypeNotAllowed;
        }
    }
    evaluator::explain(&question.condition, profile)
}

/// Boolean form of [`explain`].
pub fn passes(question: &Question, mode: Mode, profile: &BusinessProfile) -> bool {
    explain(question, mode, profile).is_applicable()
}

fn follow_up_triggered(
    parent: &Question,
    follow_up: &FollowUp,
    profile: &BusinessProfile,
) -> bool {
    profile.get(&parent.store_path).is_some_and(|answer| {
        follow_up
            .trigger_options
            .iter()
            .any(|option| answer.matches_text(option))
    })
}
