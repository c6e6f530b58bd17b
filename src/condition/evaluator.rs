use super::Condition;
use crate::profile::BusinessProfile;
use std::fmt;

/// The reasoned verdict for one question against one profile snapshot.
///
/// The first four variants are applicable outcomes; the rest name the gate
/// that rejected the question. `ModeMismatch` and `TypeNotAllowed` are only
/// produced by the question-level checks in the flow composer, never by the
/// condition clauses themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applicability {
    /// `always` was set.
    Always,
    /// No clause present: no explicit restriction means applicable.
    Unrestricted,
    /// Every AND-gate clause held and no OR-override was present.
    GatesHeld,
    /// The OR-override clause matched.
    OverrideMatched,
    /// The question's declared mode does not match the requested mode.
    ModeMismatch,
    /// The question's business-type allow-list excludes this profile.
    TypeNotAllowed,
    /// The channel intersection clause rejected.
    ChannelGate,
    /// The primary business-type clause rejected.
    TypeGate,
    /// An integration sub-check rejected.
    IntegrationGate,
    /// The OR-override clause was present and none of its sub-checks matched.
    OverrideMiss,
}

impl Applicability {
    pub fn is_applicable(&self) -> bool {
        matches!(
            self,
            Applicability::Always
                | Applicability::Unrestricted
                | Applicability::GatesHeld
                | Applicability::OverrideMatched
        )
    }
}

impl fmt::Display for Applicability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Applicability::Always => "always applicable",
            Applicability::Unrestricted => "no restriction",
            Applicability::GatesHeld => "all gates held",
            Applicability::OverrideMatched => "override matched",
            Applicability::ModeMismatch => "declared mode does not match",
            Applicability::TypeNotAllowed => "business type not in allow-list",
            Applicability::ChannelGate => "no channel overlap",
            Applicability::TypeGate => "business type not covered",
            Applicability::IntegrationGate => "integration check failed",
            Applicability::OverrideMiss => "no override sub-check matched",
        };
        write!(f, "{}", text)
    }
}

/// Pure predicate: does the condition hold against the profile snapshot?
pub fn applies(condition: &Condition, profile: &BusinessProfile) -> bool {
    explain(condition, profile).is_applicable()
}

/// Evaluates the condition clause by clause, in fixed priority order, and
/// returns the verdict together with the deciding clause.
///
/// Clause order: `always` short-circuits; the AND-gates (channels, type,
/// integrations) each reject early; the `any` clause, when present,
/// overrides the fallthrough with the OR of its sub-checks. A condition
/// with no clause at all is permissively true.
pub fn explain(condition: &Condition, profile: &BusinessProfile) -> Applicability {
    if condition.always {
        return Applicability::Always;
    }
    if let Some(rejected) = and_gates(condition, profile) {
        return rejected;
    }
    match any_override(condition, profile) {
        Some(true) => Applicability::OverrideMatched,
        Some(false) => Applicability::OverrideMiss,
        None if has_gates(condition) => Applicability::GatesHeld,
        None => Applicability::Unrestricted,
    }
}

/// AND-gate clauses: channels, primary type, integrations. Returns the first
/// gate that rejects, `None` when every present gate holds.
fn and_gates(condition: &Condition, profile: &BusinessProfile) -> Option<Applicability> {
    if let Some(channels) = &condition.channels_any {
        let overlap = profile
            .channels()
            .iter()
            .any(|channel| channels.iter().any(|wanted| wanted == channel));
        if !overlap {
            return Some(Applicability::ChannelGate);
        }
    }
    if let Some(types) = &condition.type_any {
        let covered = profile
            .primary_type()
            .is_some_and(|type_id| types.iter().any(|wanted| wanted == type_id));
        if !covered {
            return Some(Applicability::TypeGate);
        }
    }
    if let Some(checks) = &condition.integrations_any {
        if !checks.iter().all(|check| check.holds(profile)) {
            return Some(Applicability::IntegrationGate);
        }
    }
    None
}

/// OR-override clause: `Some(or-result)` when present, `None` otherwise.
fn any_override(condition: &Condition, profile: &BusinessProfile) -> Option<bool> {
    condition
        .any
        .as_ref()
        .map(|checks| checks.iter().any(|check| check.holds(profile)))
}

fn has_gates(condition: &Condition) -> bool {
    condition.channels_any.is_some()
        || condition.type_any.is_some()
        || condition.integrations_any.is_some()
}
