//! Tests for the flow composer: ordering, gating, drift tolerance, and
//! follow-up splicing.
mod common;

use common::*;
use monshin::prelude::*;
use pretty_assertions::assert_eq;

#[test]
fn quick_flow_keeps_curated_order() {
    let active = engine().active_questions(Mode::Quick, &BusinessProfile::new(), "gastro");
    let expected = vec![
        "SI01_GOOGLE_CHOICE",
        "SI02_MODE",
        "G01_CHANNELS",
        "G02_BUSINESS_TYPE",
        "G10_MONTHLY_REVENUE",
        "G40_STAFF_COUNT",
        "G41_GROWTH_FOCUS",
        "G50_SALES_TRACKING_METHOD",
        "G60_MARKETING_CHANNELS",
    ];
    assert_eq!(ids(&active), expected);
}

#[test]
fn composition_is_pure_and_idempotent() {
    let profile = dine_in_profile();
    let first = engine().active_questions(Mode::Quick, &profile, "gastro");
    let second = engine().active_questions(Mode::Quick, &profile, "gastro");
    assert_eq!(first, second);
}

#[test]
fn full_mode_appends_the_additional_list() {
    let quick = engine().active_questions(Mode::Quick, &BusinessProfile::new(), "gastro");
    let full = engine().active_questions(Mode::Full, &BusinessProfile::new(), "gastro");

    assert!(full.len() > quick.len());
    // The quick portion leads unchanged; full additions follow it.
    assert_eq!(ids(&full)[..quick.len()], ids(&quick)[..]);
    assert!(ids(&full).contains(&"F10_FOOD_COST_PCT"));
}

#[test]
fn full_only_questions_never_appear_in_quick_mode() {
    let registry = drifted_registry();
    let engine = QuestionEngine::builder(registry).build();

    let quick = engine.active_questions(Mode::Quick, &BusinessProfile::new(), "tiny");
    assert_eq!(ids(&quick), vec!["T01_NAME"]);

    let full = engine.active_questions(Mode::Full, &BusinessProfile::new(), "tiny");
    assert_eq!(ids(&full), vec!["T01_NAME", "T02_FULL_ONLY"]);
}

#[test]
fn unknown_flow_ids_are_skipped_not_fatal() {
    // The drifted quick order names T99_REMOVED, which the catalog does not
    // contain, and repeats T01_NAME; composition tolerates both.
    let engine = QuestionEngine::builder(drifted_registry()).build();
    let active = engine.active_questions(Mode::Quick, &BusinessProfile::new(), "tiny");
    assert_eq!(ids(&active), vec!["T01_NAME"]);
}

#[test]
fn unknown_category_falls_back_to_default_vertical() {
    let active = engine().active_questions(Mode::Quick, &BusinessProfile::new(), "space_travel");
    assert!(ids(&active).contains(&"G01_CHANNELS"));
}

#[test]
fn answering_channels_unlocks_monotonically() {
    let before = engine().active_questions(Mode::Quick, &BusinessProfile::new(), "gastro");
    let after = engine().active_questions(Mode::Quick, &dine_in_profile(), "gastro");

    // Adding a qualifying channel only adds questions; everything previously
    // active stays active.
    for question in &before {
        assert!(
            after.iter().any(|q| q.id == question.id),
            "{} disappeared after unlocking a channel",
            question.id
        );
    }
    assert!(after.iter().any(|q| q.id == "G30_SEATING_CAPACITY"));
    assert_eq!(after.len(), before.len() + 1);
}

#[test]
fn business_type_allow_list_gates_questions() {
    let untyped = engine().active_questions(Mode::Quick, &BusinessProfile::new(), "pet_shop");
    assert!(!ids(&untyped).contains(&"P03_GROOMING_STATIONS"));

    let groomer = profile_with(&[("business.primary_type", ProfileValue::from("pet_groomer"))]);
    let typed = engine().active_questions(Mode::Quick, &groomer, "pet_shop");
    assert!(ids(&typed).contains(&"P03_GROOMING_STATIONS"));
}

#[test]
fn follow_up_splices_directly_after_its_parent() {
    let profile = profile_with(&[(
        "assortment.species",
        ProfileValue::from(vec!["dogs", "fish"]),
    )]);
    let active = engine().active_questions(Mode::Quick, &profile, "pet_shop");
    let listed = ids(&active);

    let parent = listed
        .iter()
        .position(|id| *id == "P02_SPECIES_FOCUS")
        .expect("parent question is active");
    assert_eq!(listed[parent + 1], "P02F_AQUARIUM_SERVICES");
}

#[test]
fn follow_up_stays_out_until_the_trigger_answer_lands() {
    let unanswered = engine().active_questions(Mode::Quick, &BusinessProfile::new(), "pet_shop");
    assert!(!ids(&unanswered).contains(&"P02F_AQUARIUM_SERVICES"));

    let other_species = profile_with(&[("assortment.species", ProfileValue::from(vec!["dogs"]))]);
    let active = engine().active_questions(Mode::Quick, &other_species, "pet_shop");
    assert!(!ids(&active).contains(&"P02F_AQUARIUM_SERVICES"));
}

#[test]
fn catalog_order_vertical_filters_by_mode() {
    let quick = engine().active_questions(Mode::Quick, &BusinessProfile::new(), "gym");
    assert!(!ids(&quick).contains(&"Y20_MONTHLY_CHURN_PCT"));

    let full = engine().active_questions(Mode::Full, &BusinessProfile::new(), "gym");
    assert!(ids(&full).contains(&"Y20_MONTHLY_CHURN_PCT"));
}

#[test]
fn applicability_names_the_deciding_gate() {
    let engine = engine();
    let catalog_questions =
        engine.active_questions(Mode::Full, &dine_in_profile(), "gastro");
    let seating = catalog_questions
        .iter()
        .find(|q| q.id == "G30_SEATING_CAPACITY")
        .expect("seating question active for dine-in");

    assert_eq!(
        engine.applicability(seating, &BusinessProfile::new(), Mode::Quick),
        Applicability::ChannelGate
    );
    assert_eq!(
        engine.applicability(seating, &dine_in_profile(), Mode::Quick),
        Applicability::GatesHeld
    );
    assert!(engine.is_applicable(seating, &dine_in_profile(), Mode::Quick));
}
