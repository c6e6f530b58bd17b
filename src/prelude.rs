//! Prelude module for convenient imports
//!
//! Re-exports the most commonly used types from the monshin crate. Import
//! this module to get access to the core functionality without having to
//! import each type individually.
//!
//! # Example
//!
//! ```rust,no_run
//! use monshin::prelude::*;
//!
//! let engine = QuestionEngine::standard();
//! let profile = BusinessProfile::new();
//! let active = engine.active_questions(Mode::Quick, &profile, "gastro");
//! let score = engine.precision_score(&profile, Mode::Quick, "gastro");
//! println!("{} questions, {}% complete", active.len(), score);
//! ```

// Engine facade
pub use crate::engine::{QuestionEngine, QuestionEngineBuilder};

// Profile and values
pub use crate::profile::{BusinessProfile, ProfileValue};

// Question model
pub use crate::question::{
    Availability, ChoiceOption, FollowUp, InputKind, LocalizedQuestion, LocalizedText, Mode,
    NoOptions, OptionResolver, Question, ResolvedInput, StaticOptionResolver, UiSpec,
};

// Conditions and their evaluation
pub use crate::condition::{Applicability, Condition, FieldCheck};

// Catalogs and registries
pub use crate::catalog::{CatalogDefinition, FlowStrategy, IntoCatalog, QuestionCatalog};
pub use crate::registry::{CatalogPack, SectorRegistry, VerticalDefinition};

// Suppression and scoring
pub use crate::score::AreaScore;
pub use crate::suppress::SuppressionRule;

// Error types
pub use crate::error::{AnswerError, CatalogError, ModeParseError, PackError, ProfileError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
