//! # Monshin - Adaptive Question Engine
//!
//! **Monshin** onboards a business by asking a minimal-but-sufficient set of
//! questions, adapting in real time to what is already known. Given a
//! profile snapshot, a mode, and a business category, the engine decides
//! exactly which questions are relevant, in what order, and how complete
//! the resulting profile is. It is a pure library: no I/O, no rendering,
//! no persistence — those belong to the host application.
//!
//! ## Core Workflow
//!
//! 1.  **Build or load a registry**: use the built-in verticals via
//!     [`registry::SectorRegistry::standard`], register your own through the
//!     builder, or load a pre-built [`registry::CatalogPack`].
//! 2.  **Create the engine**: [`engine::QuestionEngine`] wires the registry
//!     with an optional per-country option resolver.
//! 3.  **Ask**: `active_questions` returns the ordered, filtered list for
//!     the current profile; `localized_questions` adds language/country
//!     resolution for rendering.
//! 4.  **Record and re-ask**: write each answer back with `record_answer`
//!     (pure; returns a new profile) and re-read the active list and the
//!     precision score — a new answer can unlock or retire questions.
//!
//! ## Quick Start
//!
//! ```rust
//! use monshin::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let engine = QuestionEngine::standard();
//!     let profile = BusinessProfile::new();
//!
//!     // An empty profile still yields the unconditional questions.
//!     let questions = engine.active_questions(Mode::Quick, &profile, "gastro");
//!     assert!(!questions.is_empty());
//!
//!     // Record the channel answer; this unlocks channel-gated questions.
//!     let channels = questions
//!         .iter()
//!         .find(|q| q.id == "G01_CHANNELS")
//!         .ok_or("channels question missing")?;
//!     let profile = engine.record_answer(
//!         &profile,
//!         channels,
//!         ProfileValue::from(vec!["dine_in"]),
//!     )?;
//!
//!     let questions = engine.active_questions(Mode::Quick, &profile, "gastro");
//!     assert!(questions.iter().any(|q| q.id == "G30_SEATING_CAPACITY"));
//!
//!     let score = engine.precision_score(&profile, Mode::Quick, "gastro");
//!     println!("profile is {}% complete", score);
//!     Ok(())
//! }
//! ```

pub mod catalog;
pub mod compose;
pub mod condition;
pub mod engine;
pub mod error;
pub mod prelude;
pub mod profile;
pub mod question;
pub mod registry;
pub mod score;
pub mod suppress;
