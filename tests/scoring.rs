//! Tests for the precision scorer and its per-area breakdown.
mod common;

use common::*;
use monshin::prelude::*;
use pretty_assertions::assert_eq;

#[test]
fn score_stays_within_bounds() {
    let engine = engine();
    let profiles = [
        BusinessProfile::new(),
        dine_in_profile(),
        profile_with(&[
            ("business.channels", ProfileValue::from(vec!["dine_in"])),
            ("finance.monthly_revenue", ProfileValue::from(12_000.0)),
            ("team.headcount", ProfileValue::from(4.0)),
        ]),
    ];
    for profile in &profiles {
        for mode in [Mode::Quick, Mode::Full] {
            let score = engine.precision_score(profile, mode, "gastro");
            assert!(score <= 100);
        }
    }
}

#[test]
fn empty_applicable_set_scores_zero() {
    // A full-only catalog asked in quick mode has nothing applicable.
    let catalog = QuestionCatalog::new(
        "full_only",
        vec![Question::new(
            "X01",
            "X01",
            Availability::Full,
            "identity",
            "x.one",
            UiSpec::text("Only in full mode"),
        )],
    )
    .expect("unique ids");
    let registry = SectorRegistry::builder()
        .with_vertical(VerticalDefinition::new(
            "full_only",
            catalog,
            FlowStrategy::CatalogOrder,
        ))
        .with_default("full_only")
        .build()
        .expect("default vertical is registered");
    let engine = QuestionEngine::builder(registry).build();

    assert_eq!(
        engine.precision_score(&BusinessProfile::new(), Mode::Quick, "full_only"),
        0
    );
}

#[test]
fn unanswered_profile_scores_zero() {
    assert_eq!(
        engine().precision_score(&BusinessProfile::new(), Mode::Quick, "gastro"),
        0
    );
}

#[test]
fn score_moves_with_answers_over_the_live_denominator() {
    let engine = engine();

    // Recording the channel answer both answers one question and unlocks
    // another, so the denominator grows alongside the numerator.
    let profile = dine_in_profile();
    assert_eq!(engine.precision_score(&profile, Mode::Quick, "gastro"), 10);

    let profile = profile.with_value("ops.dine_in.capacity", ProfileValue::from(40.0));
    assert_eq!(engine.precision_score(&profile, Mode::Quick, "gastro"), 20);
}

#[test]
fn empty_strings_and_lists_do_not_count_as_answers() {
    let engine = engine();
    let blank = profile_with(&[
        ("business.channels", ProfileValue::List(Vec::new())),
        ("systems.sales_tracking", ProfileValue::from("")),
    ]);
    assert_eq!(engine.precision_score(&blank, Mode::Quick, "gastro"), 0);
}

#[test]
fn score_rounds_to_the_nearest_integer() {
    let catalog = QuestionCatalog::new(
        "thirds",
        vec![
            Question::new("A", "A", Availability::Both, "x", "a", UiSpec::text("a")),
            Question::new("B", "B", Availability::Both, "x", "b", UiSpec::text("b")),
            Question::new("C", "C", Availability::Both, "x", "c", UiSpec::text("c")),
        ],
    )
    .expect("unique ids");
    let registry = SectorRegistry::builder()
        .with_vertical(VerticalDefinition::new(
            "thirds",
            catalog,
            FlowStrategy::CatalogOrder,
        ))
        .with_default("thirds")
        .build()
        .expect("default vertical is registered");
    let engine = QuestionEngine::builder(registry).build();

    let one = profile_with(&[("a", ProfileValue::from("done"))]);
    assert_eq!(engine.precision_score(&one, Mode::Quick, "thirds"), 33);

    let two = one.with_value("b", ProfileValue::from("done"));
    assert_eq!(engine.precision_score(&two, Mode::Quick, "thirds"), 67);
}

#[test]
fn breakdown_covers_the_same_composed_set() {
    let engine = engine();
    let profile = dine_in_profile();

    let breakdown = engine.score_breakdown(&profile, Mode::Quick, "gastro");
    let active = engine.active_questions(Mode::Quick, &profile, "gastro");

    let total: usize = breakdown.iter().map(|area| area.total).sum();
    assert_eq!(total, active.len());

    let channels_area = breakdown
        .iter()
        .find(|area| area.area == "sales_channels")
        .expect("channels area present");
    assert_eq!(channels_area.answered, 1);
    assert_eq!(channels_area.percent(), 100);
}
