pub mod evaluator;

pub use evaluator::*;

use crate::profile::BusinessProfile;
use serde::{Deserialize, Serialize};

/// Applicability rule attached to a question.
///
/// A condition is a bundle of optional clauses evaluated in a fixed priority
/// order (see [`evaluator::explain`]). A condition with no clause at all and
/// `always == false` evaluates to true: no explicit restriction means the
/// question applies.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Condition {
    /// Unconditionally true; short-circuits every other clause.
    pub always: bool,
    /// True only if the profile's channel set intersects this list.
    #[serde(alias = "channelsAny")]
    pub channels_any: Option<Vec<String>>,
    /// True only if the profile's primary business-type id is in this list.
    #[serde(alias = "typeAny")]
    pub type_any: Option<Vec<String>>,
    /// Every sub-check must hold against the profile value at its field.
    #[serde(alias = "integrationsAny")]
    pub integrations_any: Option<Vec<FieldCheck>>,
    /// OR-override: when present, the final result is the OR of these
    /// sub-checks, even if every earlier clause passed.
    pub any: Option<Vec<FieldCheck>>,
}

impl Condition {
    /// No restriction: applies to every profile.
    pub fn unrestricted() -> Self {
        Self::default()
    }

    /// Unconditionally applicable.
    pub fn always() -> Self {
        Self {
            always: true,
            ..Self::default()
        }
    }

    /// Requires the profile's channels to intersect `channels`.
    pub fn for_channels(channels: &[&str]) -> Self {
        Self {
            channels_any: Some(channels.iter().map(|c| c.to_string()).collect()),
            ..Self::default()
        }
    }

    /// Requires the profile's primary business type to be one of `types`.
    pub fn for_types(types: &[&str]) -> Self {
        Self {
            type_any: Some(types.iter().map(|t| t.to_string()).collect()),
            ..Self::default()
        }
    }

    pub fn with_integrations(mut self, checks: Vec<FieldCheck>) -> Self {
        self.integrations_any = Some(checks);
        self
    }

    pub fn with_any(mut self, checks: Vec<FieldCheck>) -> Self {
        self.any = Some(checks);
        self
    }
}

/// One field comparison inside a condition clause.
///
/// Expected values are compared against the profile value's canonical text
/// form; a list-valued answer matches when it contains the expected entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldCheck {
    #[serde(alias = "key")]
    pub field: String,
    #[serde(default)]
    pub equals: Option<String>,
    #[serde(default, alias = "in")]
    pub within: Option<Vec<String>>,
}

impl FieldCheck {
    pub fn equals(field: &str, expected: &str) -> Self {
        Self {
            field: field.to_string(),
            equals: Some(expected.to_string()),
            within: None,
        }
    }

    pub fn within(field: &str, allowed: &[&str]) -> Self {
        Self {
            field: field.to_string(),
            equals: None,
            within: Some(allowed.iter().map(|v| v.to_string()).collect()),
        }
    }

    /// Whether the check holds for the profile. A check with neither `equals`
    /// nor `within` holds vacuously; a missing profile value fails both.
    pub(crate) fn holds(&self, profile: &BusinessProfile) -> bool {
        let value = profile.get(&self.field);
        if let Some(expected) = &self.equals {
            if !value.is_some_and(|v| v.matches_text(expected)) {
                return false;
            }
        }
        if let Some(allowed) = &self.within {
            if !value.is_some_and(|v| allowed.iter().any(|a| v.matches_text(a))) {
                return false;
            }
        }
        true
    }
}
