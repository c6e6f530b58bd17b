use crate::compose;
use crate::condition::Applicability;
use crate::error::AnswerError;
use crate::profile::{BusinessProfile, ProfileValue};
use crate::question::{LocalizedQuestion, Mode, NoOptions, OptionResolver, Question};
use crate::registry::SectorRegistry;
use crate::score::{self, AreaScore};

/// The public facade of the question engine.
///
/// An engine owns an immutable [`SectorRegistry`] and an injected
/// [`OptionResolver`] and exposes the four operations the host wizard
/// needs: the active question list, per-question applicability, the
/// precision score, and the pure answer write. Every operation takes the
/// profile as an immutable snapshot; the engine performs no I/O and keeps
/// no cache, so each call reflects exactly the profile it was handed.
pub struct QuestionEngine {
    registry: SectorRegistry,
    resolver: Box<dyn OptionResolver>,
}

impl QuestionEngine {
    /// Engine over the built-in verticals with no dynamic option sources.
    pub fn standard() -> Self {
        Self::builder(SectorRegistry::standard()).build()
    }

    pub fn builder(registry: SectorRegistry) -> QuestionEngineBuilder {
        QuestionEngineBuilder::new(registry)
    }

    pub fn registry(&self) -> &SectorRegistry {
        &self.registry
    }

    /// Ordered, filtered question list for one onboarding render.
    pub fn active_questions(
        &self,
        mode: Mode,
        profile: &BusinessProfile,
        category: &str,
    ) -> Vec<Question> {
        compose::compose(self.registry.resolve(category), mode, profile)
    }

    /// The same list, fully localized for the host UI, with dynamic option
    /// sources resolved for `country`.
    pub fn localized_questions(
        &self,
        mode: Mode,
        profile: &BusinessProfile,
        category: &str,
        lang: &str,
        country: &str,
    ) -> Vec<LocalizedQuestion> {
        self.active_questions(mode, profile, category)
            .iter()
            .map(|question| question.localize(lang, self.resolver.as_ref(), country))
            .collect()
    }

    /// Whether one question currently applies: mode gate, business-type
    /// allow-list, then condition.
    pub fn is_applicable(&self, question: &Question, profile: &BusinessProfile, mode: Mode) -> bool {
        compose::passes(question, mode, profile)
    }

    /// The reasoned verdict behind [`QuestionEngine::is_applicable`], for
    /// host-side diagnostics.
    pub fn applicability(
        &self,
        question: &Question,
        profile: &BusinessProfile,
        mode: Mode,
    ) -> Applicability {
        compose::explain(question, mode, profile)
    }

    /// Profile completeness in [0, 100] over the currently applicable set.
    pub fn precision_score(&self, profile: &BusinessProfile, mode: Mode, category: &str) -> u8 {
        score::precision_score(self.registry.resolve(category), mode, profile)
    }

    /// Per-area answered/total counts over the currently applicable set.
    pub fn score_breakdown(
        &self,
        profile: &BusinessProfile,
        mode: Mode,
        category: &str,
    ) -> Vec<AreaScore> {
        score::score_breakdown(self.registry.resolve(category), mode, profile)
    }

    /// Pure answer write: returns a new profile with `value` stored at the
    /// question's path. The input profile is untouched, which keeps
    /// undo/redo and re-render triggers predictable. Writes are strict: a
    /// question without a store path is rejected.
    pub fn record_answer(
        &self,
        profile: &BusinessProfile,
        question: &Question,
        value: ProfileValue,
    ) -> Result<BusinessProfile, AnswerError> {
        if question.store_path.trim().is_empty() {
            return Err(AnswerError::EmptyStorePath {
                question_id: question.id.clone(),
            });
        }
        Ok(profile.with_value(&question.store_path, value))
    }
}

/// Builder wiring a registry with an option resolver.
pub struct QuestionEngineBuilder {
    registry: SectorRegistry,
    resolver: Box<dyn OptionResolver>,
}

impl QuestionEngineBuilder {
    pub fn new(registry: SectorRegistry) -> Self {
        Self {
            registry,
            resolver: Box::new(NoOptions),
        }
    }

    pub fn with_option_resolver(mut self, resolver: impl OptionResolver + 'static) -> Self {
        self.resolver = Box::new(resolver);
        self
    }

    pub fn build(self) -> QuestionEngine {
        QuestionEngine {
            registry: self.registry,
            resolver: self.resolver,
        }
    }
}
