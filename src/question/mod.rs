pub mod resolver;
pub mod ui;

pub use resolver::*;
pub use ui::*;

use crate::condition::Condition;
use crate::error::ModeParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The requested onboarding run mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// The fast subset of questions.
    Quick,
    /// The exhaustive flow.
    Full,
}

impl FromStr for Mode {
    type Err = ModeParseError;

    fn from_str(literal: &str) -> Result<Self, Self::Err> {
        match literal {
            "quick" => Ok(Mode::Quick),
            "full" => Ok(Mode::Full),
            other => Err(ModeParseError(other.to_string())),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Quick => write!(f, "quick"),
            Mode::Full => write!(f, "full"),
        }
    }
}

/// The modes a question is declared for.
///
/// Older catalogs spell `Both` as `"complete"`; the alias absorbs that
/// naming drift at the serde layer so the engine only ever sees one variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Availability {
    Quick,
    Full,
    #[default]
    #[serde(alias = "complete")]
    Both,
}

impl Availability {
    /// `Both` matches either requested mode; `Quick`/`Full` must match
    /// exactly. This gate runs before condition evaluation and is never
    /// bypassed by a true condition.
    pub fn matches(&self, mode: Mode) -> bool {
        match self {
            Availability::Both => true,
            Availability::Quick => mode == Mode::Quick,
            Availability::Full => mode == Mode::Full,
        }
    }
}

/// One prompt definition: identity, applicability rule, localized UI spec,
/// and the profile path its answer is written to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    /// Globally unique within its catalog.
    pub id: String,
    /// Display/order code shown by the wizard shell.
    pub step: String,
    #[serde(default, alias = "mode")]
    pub availability: Availability,
    /// Grouping tag used by the precision-score breakdown.
    #[serde(alias = "scoreArea")]
    pub score_area: String,
    #[serde(default)]
    pub condition: Condition,
    /// Dot path in the profile where the answer is stored.
    #[serde(alias = "storePath")]
    pub store_path: String,
    pub ui: UiSpec,
    #[serde(default, alias = "impactScore")]
    pub weight: Option<u32>,
    /// Allow-list of business-type ids; when present the question is only
    /// asked when the profile's primary type is in it.
    #[serde(default, alias = "businessTypes")]
    pub business_types: Option<Vec<String>>,
    #[serde(default, alias = "followUp")]
    pub follow_up: Option<FollowUp>,
}

impl Question {
    pub fn new(
        id: &str,
        step: &str,
        availability: Availability,
        score_area: &str,
        store_path: &str,
        ui: UiSpec,
    ) -> Self {
        Self {
            id: id.to_string(),
            step: step.to_string(),
            availability,
            score_area: score_area.to_string(),
            condition: Condition::default(),
            store_path: store_path.to_string(),
            ui,
            weight: None,
            business_types: None,
            follow_up: None,
        }
    }

    pub fn with_condition(mut self, condition: Condition) -> Self {
        self.condition = condition;
        self
    }

    pub fn with_weight(mut self, weight: u32) -> Self {
        self.weight = Some(weight);
        self
    }

    pub fn with_business_types(mut self, types: &[&str]) -> Self {
        self.business_types = Some(types.iter().map(|t| t.to_string()).collect());
        self
    }

    pub fn with_follow_up(mut self, trigger_options: &[&str], question: Question) -> Self {
        self.follow_up = Some(FollowUp {
            trigger_options: trigger_options.iter().map(|o| o.to_string()).collect(),
            question: Box::new(question),
        });
        self
    }

    /// Produces the fully localized, render-ready view of this question.
    /// Dynamic option sources are resolved through the injected `resolver`.
    pub fn localize(
        &self,
        lang: &str,
        resolver: &dyn OptionResolver,
        country: &str,
    ) -> LocalizedQuestion {
        let text = self.ui.text.resolve(lang, &self.id);
        LocalizedQuestion {
            id: self.id.clone(),
            step: self.step.clone(),
            score_area: self.score_area.clone(),
            store_path: self.store_path.clone(),
            title: text.title,
            help: text.help,
            input: self.ui.input.resolve(resolver, country, lang),
        }
    }
}

/// A sub-question spliced in immediately after its parent once the parent's
/// recorded answer matches one of the trigger options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FollowUp {
    #[serde(alias = "optionIds")]
    pub trigger_options: Vec<String>,
    pub question: Box<Question>,
}
