use super::resolver::OptionResolver;
use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Fallback language used when a requested translation is missing.
pub const FALLBACK_LANG: &str = "en";

/// Title and help copy in one language.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextEntry {
    pub title: String,
    #[serde(default)]
    pub help: Option<String>,
}

/// Question copy keyed by language code.
///
/// Resolution never fails: an unknown language falls back to
/// [`FALLBACK_LANG`], and a text with no entries at all yields the caller's
/// fallback id as the title.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocalizedText {
    entries: AHashMap<String, TextEntry>,
}

impl LocalizedText {
    pub fn new() -> Self {
        Self::default()
    }

    /// English-only copy, the common case for catalogs authored in one language.
    pub fn en(title: &str) -> Self {
        Self::new().with(FALLBACK_LANG, title, None)
    }

    pub fn en_help(title: &str, help: &str) -> Self {
        Self::new().with(FALLBACK_LANG, title, Some(help))
    }

    pub fn with(mut self, lang: &str, title: &str, help: Option<&str>) -> Self {
        self.entries.insert(
            lang.to_string(),
            TextEntry {
                title: title.to_string(),
                help: help.map(str::to_string),
            },
        );
        self
    }

    pub fn resolve(&self, lang: &str, fallback_id: &str) -> TextEntry {
        self.entries
            .get(lang)
            .or_else(|| self.entries.get(FALLBACK_LANG))
            .cloned()
            .unwrap_or_else(|| TextEntry {
                title: fallback_id.to_string(),
                help: None,
            })
    }
}

impl From<&str> for LocalizedText {
    fn from(title: &str) -> Self {
        LocalizedText::en(title)
    }
}

/// One selectable option of a choice input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChoiceOption {
    pub id: String,
    pub label: LocalizedText,
}

impl ChoiceOption {
    pub fn new(id: &str, label_en: &str) -> Self {
        Self {
            id: id.to_string(),
            label: LocalizedText::en(label_en),
        }
    }
}

/// Input specification: a tag plus exactly the parameters that input kind
/// needs. The engine emits the tag and parameters only; rendering belongs to
/// the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputKind {
    Choice {
        options: Vec<ChoiceOption>,
        #[serde(default)]
        multi: bool,
    },
    Scale {
        min: i64,
        max: i64,
        #[serde(default = "default_step")]
        step: i64,
        #[serde(default)]
        unit: Option<String>,
    },
    NumberEntry {
        #[serde(default)]
        min: Option<f64>,
        #[serde(default)]
        max: Option<f64>,
        #[serde(default)]
        unit: Option<String>,
    },
    TextEntry {
        #[serde(default)]
        placeholder: Option<String>,
    },
    Toggle,
    /// Options sourced per country at localization time through the injected
    /// [`OptionResolver`], keyed by an opaque source key.
    DynamicChoice {
        #[serde(alias = "sourceKey")]
        source_key: String,
        #[serde(default)]
        multi: bool,
    },
}

fn default_step() -> i64 {
    1
}

impl InputKind {
    /// Resolves this input into its render-ready form for one language and
    /// country. A dynamic source with no registered options degrades to an
    /// empty option list rather than an error.
    pub fn resolve(
        &self,
        resolver: &dyn OptionResolver,
        country: &str,
        lang: &str,
    ) -> ResolvedInput {
        match self {
            InputKind::Choice { options, multi } => ResolvedInput::Choice {
                options: resolve_options(options, lang),
                multi: *multi,
            },
            InputKind::DynamicChoice { source_key, multi } => {
                let options = resolver.resolve(source_key, country).unwrap_or_else(|| {
                    warn!(
                        source_key = %source_key,
                        country = %country,
                        "no option source registered; emitting an empty option list"
                    );
                    Vec::new()
                });
                ResolvedInput::Choice {
                    options: resolve_options(&options, lang),
                    multi: *multi,
                }
            }
            InputKind::Scale {
                min,
                max,
                step,
                unit,
            } => ResolvedInput::Scale {
                min: *min,
                max: *max,
                step: *step,
                unit: unit.clone(),
            },
            InputKind::NumberEntry { min, max, unit } => ResolvedInput::NumberEntry {
                min: *min,
                max: *max,
                unit: unit.clone(),
            },
            InputKind::TextEntry { placeholder } => ResolvedInput::TextEntry {
                placeholder: placeholder.clone(),
            },
            InputKind::Toggle => ResolvedInput::Toggle,
        }
    }
}

/// UI specification of a question: localized copy plus the input contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiSpec {
    pub text: LocalizedText,
    pub input: InputKind,
}

impl UiSpec {
    pub fn new(text: LocalizedText, input: InputKind) -> Self {
        Self { text, input }
    }

    pub fn single_choice(text: impl Into<LocalizedText>, options: Vec<ChoiceOption>) -> Self {
        Self::new(
            text.into(),
            InputKind::Choice {
                options,
                multi: false,
            },
        )
    }

    pub fn multi_choice(text: impl Into<LocalizedText>, options: Vec<ChoiceOption>) -> Self {
        Self::new(
            text.into(),
            InputKind::Choice {
                options,
                multi: true,
            },
        )
    }

    pub fn scale(text: impl Into<LocalizedText>, min: i64, max: i64, unit: Option<&str>) -> Self {
        Self::new(
            text.into(),
            InputKind::Scale {
                min,
                max,
                step: 1,
                unit: unit.map(str::to_string),
            },
        )
    }

    pub fn number(text: impl Into<LocalizedText>, unit: Option<&str>) -> Self {
        Self::new(
            text.into(),
            InputKind::NumberEntry {
                min: None,
                max: None,
                unit: unit.map(str::to_string),
            },
        )
    }

    pub fn text(text: impl Into<LocalizedText>) -> Self {
        Self::new(text.into(), InputKind::TextEntry { placeholder: None })
    }

    pub fn toggle(text: impl Into<LocalizedText>) -> Self {
        Self::new(text.into(), InputKind::Toggle)
    }

    pub fn dynamic(text: impl Into<LocalizedText>, source_key: &str, multi: bool) -> Self {
        Self::new(
            text.into(),
            InputKind::DynamicChoice {
                source_key: source_key.to_string(),
                multi,
            },
        )
    }
}

/// The render-ready form of an input after localization and option sourcing.
#[derive(Debug, Clone, PartialEq)]
pub enum ResolvedInput {
    Choice {
        options: Vec<ResolvedOption>,
        multi: bool,
    },
    Scale {
        min: i64,
        max: i64,
        step: i64,
        unit: Option<String>,
    },
    NumberEntry {
        min: Option<f64>,
        max: Option<f64>,
        unit: Option<String>,
    },
    TextEntry {
        placeholder: Option<String>,
    },
    Toggle,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedOption {
    pub id: String,
    pub label: String,
}

/// Fully localized, ordered output item handed to the rendering host.
#[derive(Debug, Clone, PartialEq)]
pub struct LocalizedQuestion {
    pub id: String,
    pub step: String,
    pub score_area: String,
    pub store_path: String,
    pub title: String,
    pub help: Option<String>,
    pub input: ResolvedInput,
}

fn resolve_options(options: &[ChoiceOption], lang: &str) -> Vec<ResolvedOption> {
    options
        .iter()
        .map(|option| ResolvedOption {
            id: option.id.clone(),
            label: option.label.resolve(lang, &option.id).title,
        })
        .collect()
}
