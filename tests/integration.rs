//! End-to-end tests that walk the engine the way a host wizard would,
//! plus catalog import and pack round-trips.
mod common;

use common::*;
use monshin::prelude::*;
use pretty_assertions::assert_eq;

#[test]
fn scenario_empty_profile_quick_gastro() {
    let active = engine().active_questions(Mode::Quick, &BusinessProfile::new(), "gastro");
    let listed = ids(&active);

    assert!(listed.contains(&"SI01_GOOGLE_CHOICE"));
    assert!(listed.contains(&"SI02_MODE"));
    assert!(listed.contains(&"G01_CHANNELS"));
    assert!(listed.contains(&"G50_SALES_TRACKING_METHOD"));
    assert!(!listed.contains(&"G30_SEATING_CAPACITY"));
}

#[test]
fn scenario_dine_in_unlocks_seating_and_shifts_the_score() {
    let engine = engine();

    let empty = BusinessProfile::new();
    let before = engine.active_questions(Mode::Quick, &empty, "gastro");

    let dine_in = dine_in_profile();
    let after = engine.active_questions(Mode::Quick, &dine_in, "gastro");

    assert!(ids(&after).contains(&"G30_SEATING_CAPACITY"));
    assert_eq!(after.len(), before.len() + 1);

    // The new question arrives unanswered, but the channels answer itself
    // counts, so the score moves from 0 to answered/total.
    assert_eq!(engine.precision_score(&empty, Mode::Quick, "gastro"), 0);
    assert_eq!(engine.precision_score(&dine_in, Mode::Quick, "gastro"), 10);
}

#[test]
fn scenario_answering_the_unlocked_question_raises_the_score() {
    let engine = engine();
    let dine_in = dine_in_profile();
    let with_capacity = dine_in.with_value("ops.dine_in.capacity", ProfileValue::from(40.0));

    let before = engine.precision_score(&dine_in, Mode::Quick, "gastro");
    let after = engine.precision_score(&with_capacity, Mode::Quick, "gastro");
    assert_eq!(after, before + 10);
}

#[test]
fn scenario_full_mode_surfaces_delivery_app_questions() {
    let engine = engine();
    let apps = profile_with(&[(
        "business.channels",
        ProfileValue::from(vec!["delivery_apps"]),
    )]);

    let full = engine.active_questions(Mode::Full, &apps, "gastro");
    assert!(ids(&full).contains(&"G20_DELIVERY_APPS_USED"));
    assert!(ids(&full).contains(&"G21_DELIVERY_APPS_SHARE"));

    let quick = engine.active_questions(Mode::Quick, &apps, "gastro");
    assert!(ids(&quick).contains(&"G20_DELIVERY_APPS_USED"));
    assert!(!ids(&quick).contains(&"G21_DELIVERY_APPS_SHARE"));
}

#[test]
fn scenario_suppression_beats_a_true_condition() {
    let dark_kitchen = profile_with(&[
        ("business.primary_type", ProfileValue::from("dark_kitchen")),
        ("business.channels", ProfileValue::from(vec!["dine_in"])),
    ]);
    let active = engine().active_questions(Mode::Full, &dark_kitchen, "gastro");
    assert!(!ids(&active).iter().any(|id| id.contains("SEATING")));
}

#[test]
fn record_answer_returns_a_new_profile() {
    let engine = engine();
    let original = BusinessProfile::new();
    let questions = engine.active_questions(Mode::Quick, &original, "gastro");
    let channels = questions
        .iter()
        .find(|q| q.id == "G01_CHANNELS")
        .expect("channels question active");

    let updated = engine
        .record_answer(&original, channels, ProfileValue::from(vec!["dine_in"]))
        .expect("write succeeds");

    assert!(original.is_empty());
    assert_eq!(updated.channels(), ["dine_in"]);
}

#[test]
fn record_answer_rejects_an_empty_store_path() {
    let engine = engine();
    let broken = Question::new(
        "BROKEN",
        "B00",
        Availability::Both,
        "identity",
        "  ",
        UiSpec::text("Question with nowhere to write"),
    );

    let err = engine
        .record_answer(&BusinessProfile::new(), &broken, ProfileValue::from("x"))
        .expect_err("empty store path is a validation error");
    assert!(err.to_string().contains("BROKEN"));
}

#[test]
fn localization_resolves_language_with_fallback() {
    let engine = engine();
    let localized =
        engine.localized_questions(Mode::Quick, &BusinessProfile::new(), "gastro", "es", "US");

    let channels = localized
        .iter()
        .find(|q| q.id == "G01_CHANNELS")
        .expect("channels question active");
    assert_eq!(channels.title, "¿Cómo vendes?");

    // Questions without a Spanish entry fall back to English.
    let tracking = localized
        .iter()
        .find(|q| q.id == "G50_SALES_TRACKING_METHOD")
        .expect("tracking question active");
    assert_eq!(tracking.title, "How do you track your sales today?");
}

#[test]
fn dynamic_options_come_from_the_injected_resolver() {
    let resolver = StaticOptionResolver::new().with_source(
        "AR",
        "delivery_platforms",
        vec![
            ChoiceOption::new("rappi", "Rappi"),
            ChoiceOption::new("pedidosya", "PedidosYa"),
        ],
    );
    let engine = QuestionEngine::builder(SectorRegistry::standard())
        .with_option_resolver(resolver)
        .build();

    let apps = profile_with(&[(
        "business.channels",
        ProfileValue::from(vec!["delivery_apps"]),
    )]);

    let localized = engine.localized_questions(Mode::Quick, &apps, "gastro", "en", "AR");
    let delivery = localized
        .iter()
        .find(|q| q.id == "G20_DELIVERY_APPS_USED")
        .expect("delivery question active");
    match &delivery.input {
        ResolvedInput::Choice { options, multi } => {
            assert!(*multi);
            assert_eq!(options.len(), 2);
            assert_eq!(options[0].id, "rappi");
        }
        other => panic!("expected a resolved choice input, got {:?}", other),
    }

    // An unknown country degrades to an empty option list.
    let localized = engine.localized_questions(Mode::Quick, &apps, "gastro", "en", "DE");
    let delivery = localized
        .iter()
        .find(|q| q.id == "G20_DELIVERY_APPS_USED")
        .expect("delivery question active");
    match &delivery.input {
        ResolvedInput::Choice { options, .. } => assert!(options.is_empty()),
        other => panic!("expected a resolved choice input, got {:?}", other),
    }
}

#[test]
fn profile_json_flattens_nested_objects() {
    let document = serde_json::json!({
        "business": {
            "channels": ["dine_in", "takeaway"],
            "primary_type": "cafe"
        },
        "finance.monthly_revenue": 9500,
        "ops": { "reservations": { "enabled": true } }
    });
    let profile = BusinessProfile::from_json(document).expect("valid document");

    assert_eq!(profile.channels(), ["dine_in", "takeaway"]);
    assert_eq!(profile.primary_type(), Some("cafe"));
    assert_eq!(
        profile.get("finance.monthly_revenue"),
        Some(&ProfileValue::Number(9500.0))
    );
    assert_eq!(
        profile.get("ops.reservations.enabled"),
        Some(&ProfileValue::Bool(true))
    );
}

#[test]
fn profile_json_rejects_non_objects() {
    let err = BusinessProfile::from_json(serde_json::json!([1, 2, 3]))
        .expect_err("arrays are not profiles");
    assert!(err.to_string().contains("array"));
}

#[test]
fn catalog_definitions_import_with_host_aliases() {
    let json = r#"{
        "name": "imported",
        "quickOrder": ["Q1", "Q2"],
        "questions": [
            {
                "id": "Q1",
                "step": "Q1",
                "mode": "complete",
                "scoreArea": "identity",
                "storePath": "business.name",
                "ui": { "text": { "en": { "title": "Name?" } }, "input": "toggle" }
            },
            {
                "id": "Q2",
                "step": "Q2",
                "mode": "full",
                "scoreArea": "identity",
                "storePath": "business.age",
                "condition": { "channelsAny": ["dine_in"] },
                "ui": { "text": { "en": { "title": "Age?" } }, "input": "toggle" }
            }
        ]
    }"#;

    let (catalog, flow) = CatalogDefinition::from_json(json)
        .expect("valid catalog JSON")
        .into_catalog()
        .expect("unique ids");

    assert_eq!(catalog.len(), 2);
    // The legacy "complete" literal lands on Both.
    assert_eq!(
        catalog.by_id("Q1").expect("imported").availability,
        Availability::Both
    );
    assert!(matches!(flow, FlowStrategy::OrderedFlow { .. }));

    let registry = SectorRegistry::builder()
        .with_vertical(VerticalDefinition::new("imported", catalog, flow))
        .with_default("imported")
        .build()
        .expect("default vertical is registered");
    let engine = QuestionEngine::builder(registry).build();
    let active = engine.active_questions(Mode::Quick, &BusinessProfile::new(), "imported");
    assert_eq!(ids(&active), vec!["Q1"]);
}

#[test]
fn duplicate_ids_are_rejected_at_catalog_build() {
    let duplicate = vec![
        Question::new("D1", "D1", Availability::Both, "x", "a", UiSpec::text("a")),
        Question::new("D1", "D1", Availability::Both, "x", "b", UiSpec::text("b")),
    ];
    let err = QuestionCatalog::new("dupes", duplicate).expect_err("duplicate ids");
    assert!(err.to_string().contains("D1"));
}

#[test]
fn catalog_pack_round_trips_through_bincode() {
    let registry = SectorRegistry::standard();
    let pack = CatalogPack::from_registry(&registry);

    let bytes = pack.to_bytes().expect("pack encodes");
    let restored = CatalogPack::from_bytes(&bytes)
        .expect("pack decodes")
        .into_registry()
        .expect("default vertical survives the round trip");

    let profile = dine_in_profile();
    let original = QuestionEngine::builder(registry).build();
    let reloaded = QuestionEngine::builder(restored).build();
    assert_eq!(
        original.active_questions(Mode::Full, &profile, "gastro"),
        reloaded.active_questions(Mode::Full, &profile, "gastro"),
    );
}

#[test]
fn missing_default_vertical_fails_registry_build() {
    let err = SectorRegistry::builder()
        .with_vertical(VerticalDefinition::new(
            "tiny",
            tiny_catalog(),
            FlowStrategy::CatalogOrder,
        ))
        .with_default("nonexistent")
        .build()
        .expect_err("default must be registered");
    assert!(err.to_string().contains("nonexistent"));
}
