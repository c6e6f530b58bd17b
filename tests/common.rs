//! Common test utilities for building profiles, catalogs, and engines.
use monshin::prelude::*;

/// Engine over the built-in verticals with no option sources.
#[allow(dead_code)]
pub fn engine() -> QuestionEngine {
    QuestionEngine::standard()
}

/// Profile from flat path/value pairs.
#[allow(dead_code)]
pub fn profile_with(entries: &[(&str, ProfileValue)]) -> BusinessProfile {
    BusinessProfile::from_entries(entries.iter().map(|(path, value)| (*path, value.clone())))
}

/// Profile of a dine-in business with no other facts recorded.
#[allow(dead_code)]
pub fn dine_in_profile() -> BusinessProfile {
    profile_with(&[("business.channels", ProfileValue::from(vec!["dine_in"]))])
}

/// Ids of a composed question list, for order assertions.
#[allow(dead_code)]
pub fn ids(questions: &[Question]) -> Vec<&str> {
    questions.iter().map(|question| question.id.as_str()).collect()
}

/// A minimal two-question catalog used to exercise composer edge cases
/// without depending on the built-in tables.
#[allow(dead_code)]
pub fn tiny_catalog() -> QuestionCatalog {
    QuestionCatalog::new(
        "tiny",
        vec![
            Question::new(
                "T01_NAME",
                "T01",
                Availability::Both,
                "identity",
                "business.name",
                UiSpec::text("What's the business called?"),
            ),
            Question::new(
                "T02_FULL_ONLY",
                "T02",
                Availability::Full,
                "identity",
                "business.founded_year",
                UiSpec::number("When was it founded?", None),
            ),
        ],
    )
    .expect("tiny catalog ids are unique")
}

/// Registry with a single ordered-flow vertical whose quick order names an
/// id the catalog does not contain; the composer must skip it.
#[allow(dead_code)]
pub fn drifted_registry() -> SectorRegistry {
    let vertical = VerticalDefinition::new(
        "tiny",
        tiny_catalog(),
        FlowStrategy::OrderedFlow {
            quick_order: vec![
                "T01_NAME".to_string(),
                "T99_REMOVED".to_string(),
                "T01_NAME".to_string(),
            ],
            full_additional: vec!["T02_FULL_ONLY".to_string()],
        },
    );
    SectorRegistry::builder()
        .with_vertical(vertical)
        .with_default("tiny")
        .build()
        .expect("default vertical is registered")
}
