//! Built-in catalog-order verticals. Unlike gastro these have no curated
//! flow lists: declaration order is presentation order, filtered by mode,
//! business-type allow-list, and condition, with follow-up splicing.

use super::{FlowStrategy, QuestionCatalog};
use crate::condition::Condition;
use crate::question::{Availability, ChoiceOption, Question, UiSpec};
use crate::registry::VerticalDefinition;
use crate::suppress::SuppressionRule;

fn catalog_order(key: &str, questions: Vec<Question>) -> VerticalDefinition {
    VerticalDefinition::new(
        key,
        QuestionCatalog::from_static(key, questions),
        FlowStrategy::CatalogOrder,
    )
}

pub fn pet_shop() -> VerticalDefinition {
    catalog_order(
        "pet_shop",
        vec![
            Question::new(
                "P01_STORE_FORMAT",
                "P01",
                Availability::Both,
                "identity",
                "business.primary_type",
                UiSpec::single_choice(
                    "What kind of pet business is it?",
                    vec![
                        ChoiceOption::new("pet_store", "Physical store"),
                        ChoiceOption::new("pet_online", "Online shop"),
                        ChoiceOption::new("pet_groomer", "Grooming salon"),
                    ],
                ),
            ),
            Question::new(
                "P02_SPECIES_FOCUS",
                "P02",
                Availability::Both,
                "assortment",
                "assortment.species",
                UiSpec::multi_choice(
                    "Which animals do you serve?",
                    vec![
                        ChoiceOption::new("dogs", "Dogs"),
                        ChoiceOption::new("cats", "Cats"),
                        ChoiceOption::new("birds", "Birds"),
                        ChoiceOption::new("fish", "Fish"),
                        ChoiceOption::new("exotics", "Exotics"),
                    ],
                ),
            )
            .with_follow_up(
                &["fish"],
                Question::new(
                    "P02F_AQUARIUM_SERVICES",
                    "P02F",
                    Availability::Both,
                    "assortment",
                    "services.aquarium_setup",
                    UiSpec::toggle("Do you offer aquarium setup services?"),
                ),
            ),
            Question::new(
                "P03_GROOMING_STATIONS",
                "P03",
                Availability::Both,
                "operations",
                "ops.grooming.stations",
                UiSpec::number("How many grooming stations do you run?", Some("stations")),
            )
            .with_business_types(&["pet_groomer"]),
            Question::new(
                "P04_FLOOR_AREA",
                "P04",
                Availability::Both,
                "operations",
                "ops.floor_area_m2",
                UiSpec::number("How big is the shop floor?", Some("m²")),
            ),
            Question::new(
                "P10_MONTHLY_REVENUE",
                "P10",
                Availability::Both,
                "finance",
                "finance.monthly_revenue",
                UiSpec::number("Roughly, what's your monthly revenue?", None),
            ),
            Question::new(
                "P20_SUPPLY_BRANDS",
                "P20",
                Availability::Full,
                "assortment",
                "assortment.brands",
                UiSpec::dynamic("Which supply brands do you stock?", "pet_supply_brands", true),
            ),
        ],
    )
    // An online shop has no floor to measure.
    .with_suppression(SuppressionRule::for_type("pet_online").suppress_ids(&["P04_FLOOR_AREA"]))
}

pub fn gym() -> VerticalDefinition {
    catalog_order(
        "gym",
        vec![
            Question::new(
                "Y01_TRAINING_FORMATS",
                "Y01",
                Availability::Both,
                "offer",
                "offer.training_formats",
                UiSpec::multi_choice(
                    "What do you offer?",
                    vec![
                        ChoiceOption::new("free_weights", "Free weights"),
                        ChoiceOption::new("classes", "Group classes"),
                        ChoiceOption::new("personal_training", "Personal training"),
                        ChoiceOption::new("crossfit", "Functional / crossfit"),
                    ],
                ),
            )
            .with_follow_up(
                &["classes"],
                Question::new(
                    "Y01F_WEEKLY_CLASSES",
                    "Y01F",
                    Availability::Both,
                    "offer",
                    "offer.classes_per_week",
                    UiSpec::number("How many classes run per week?", Some("classes")),
                ),
            ),
            Question::new(
                "Y02_ACTIVE_MEMBERS",
                "Y02",
                Availability::Both,
                "members",
                "members.active_count",
                UiSpec::number("How many active members do you have?", Some("members")),
            ),
            Question::new(
                "Y03_MEMBERSHIP_MODEL",
                "Y03",
                Availability::Both,
                "members",
                "members.model",
                UiSpec::single_choice(
                    "How do members pay?",
                    vec![
                        ChoiceOption::new("monthly", "Monthly plan"),
                        ChoiceOption::new("annual", "Annual plan"),
                        ChoiceOption::new("class_packs", "Class packs"),
                        ChoiceOption::new("drop_in", "Drop-in"),
                    ],
                ),
            ),
            Question::new(
                "Y10_BOOKING_SYSTEM",
                "Y10",
                Availability::Both,
                "systems",
                "systems.booking",
                UiSpec::single_choice(
                    "How do members book?",
                    vec![
                        ChoiceOption::new("app", "Booking app"),
                        ChoiceOption::new("whatsapp", "WhatsApp / phone"),
                        ChoiceOption::new("walk_in", "They just walk in"),
                    ],
                ),
            ),
            Question::new(
                "Y20_MONTHLY_CHURN_PCT",
                "Y20",
                Availability::Full,
                "members",
                "members.monthly_churn_pct",
                UiSpec::scale("Roughly, how many members leave per month?", 0, 100, Some("%")),
            ),
        ],
    )
}

pub fn psychology() -> VerticalDefinition {
    catalog_order(
        "psychology",
        vec![
            Question::new(
                "S01_SESSION_FORMATS",
                "S01",
                Availability::Both,
                "practice",
                "practice.session_formats",
                UiSpec::multi_choice(
                    "How do you see patients?",
                    vec![
                        ChoiceOption::new("in_person", "In person"),
                        ChoiceOption::new("online", "Online"),
                    ],
                ),
            ),
            Question::new(
                "S02_WEEKLY_SESSIONS",
                "S02",
                Availability::Both,
                "practice",
                "practice.sessions_per_week",
                UiSpec::number("How many sessions do you hold per week?", Some("sessions")),
            ),
            Question::new(
                "S03_INSURANCE_BILLING",
                "S03",
                Availability::Both,
                "finance",
                "finance.insurance_billing",
                UiSpec::toggle("Do you bill through insurance?"),
            ),
            Question::new(
                "S10_SPECIALTIES",
                "S10",
                Availability::Full,
                "practice",
                "practice.specialties",
                UiSpec::multi_choice(
                    "What are your focus areas?",
                    vec![
                        ChoiceOption::new("anxiety", "Anxiety"),
                        ChoiceOption::new("couples", "Couples therapy"),
                        ChoiceOption::new("children", "Children & adolescents"),
                        ChoiceOption::new("organizational", "Organizational"),
                    ],
                ),
            ),
            Question::new(
                "S20_NO_SHOW_PCT",
                "S20",
                Availability::Full,
                "finance",
                "finance.no_show_pct",
                UiSpec::scale("How many appointments end in a no-show?", 0, 100, Some("%")),
            ),
        ],
    )
}

pub fn nutrition() -> VerticalDefinition {
    catalog_order(
        "nutrition",
        vec![
            Question::new(
                "N01_CONSULT_FORMATS",
                "N01",
                Availability::Both,
                "practice",
                "practice.consult_formats",
                UiSpec::multi_choice(
                    "How do you consult?",
                    vec![
                        ChoiceOption::new("in_person", "In person"),
                        ChoiceOption::new("online", "Online"),
                        ChoiceOption::new("home_visits", "Home visits"),
                    ],
                ),
            ),
            Question::new(
                "N02_ACTIVE_PATIENTS",
                "N02",
                Availability::Both,
                "practice",
                "practice.active_patients",
                UiSpec::number("How many active patients do you follow?", Some("patients")),
            ),
            Question::new(
                "N03_PLAN_SOFTWARE",
                "N03",
                Availability::Both,
                "systems",
                "systems.meal_planning",
                UiSpec::toggle("Do you use meal-planning software?"),
            ),
            Question::new(
                "N10_PACKAGES",
                "N10",
                Availability::Full,
                "finance",
                "finance.package_model",
                UiSpec::single_choice(
                    "How do you charge?",
                    vec![
                        ChoiceOption::new("per_consult", "Per consult"),
                        ChoiceOption::new("monthly_plan", "Monthly follow-up plan"),
                        ChoiceOption::new("programs", "Fixed-length programs"),
                    ],
                ),
            ),
        ],
    )
}

pub fn laboratory() -> VerticalDefinition {
    catalog_order(
        "laboratory",
        vec![
            Question::new(
                "L01_SAMPLE_TYPES",
                "L01",
                Availability::Both,
                "services",
                "services.sample_types",
                UiSpec::multi_choice(
                    "Which analyses do you run?",
                    vec![
                        ChoiceOption::new("blood", "Blood panels"),
                        ChoiceOption::new("imaging", "Imaging"),
                        ChoiceOption::new("pathology", "Pathology"),
                        ChoiceOption::new("covid_pcr", "PCR testing"),
                    ],
                ),
            ),
            Question::new(
                "L02_DAILY_SAMPLES",
                "L02",
                Availability::Both,
                "operations",
                "ops.daily_samples",
                UiSpec::number("How many samples per day?", Some("samples")),
            ),
            Question::new(
                "L03_HOME_COLLECTION",
                "L03",
                Availability::Both,
                "services",
                "services.home_collection",
                UiSpec::toggle("Do you collect samples at home?"),
            ),
            Question::new(
                "L10_LIS_SYSTEM",
                "L10",
                Availability::Full,
                "systems",
                "systems.lis",
                UiSpec::dynamic("Which lab information system do you use?", "lis_vendors", false),
            ),
        ],
    )
}

pub fn kinesiology() -> VerticalDefinition {
    catalog_order(
        "kinesiology",
        vec![
            Question::new(
                "K01_TREATMENT_AREAS",
                "K01",
                Availability::Both,
                "practice",
                "practice.treatment_areas",
                UiSpec::multi_choice(
                    "What do you treat most?",
                    vec![
                        ChoiceOption::new("sports_injury", "Sports injuries"),
                        ChoiceOption::new("post_surgery", "Post-surgery rehab"),
                        ChoiceOption::new("chronic_pain", "Chronic pain"),
                        ChoiceOption::new("neurological", "Neurological rehab"),
                    ],
                ),
            ),
            Question::new(
                "K02_WEEKLY_PATIENTS",
                "K02",
                Availability::Both,
                "practice",
                "practice.weekly_patients",
                UiSpec::number("How many patients per week?", Some("patients")),
            ),
            Question::new(
                "K03_EQUIPMENT_LEVEL",
                "K03",
                Availability::Full,
                "operations",
                "ops.equipment_level",
                UiSpec::single_choice(
                    "How equipped is your practice?",
                    vec![
                        ChoiceOption::new("hands_on", "Mostly hands-on"),
                        ChoiceOption::new("basic_machines", "Basic machines"),
                        ChoiceOption::new("full_gym", "Full rehab gym"),
                    ],
                ),
            ),
        ],
    )
}

pub fn electronics() -> VerticalDefinition {
    catalog_order(
        "electronics",
        vec![
            Question::new(
                "E01_SALES_CHANNELS",
                "E01",
                Availability::Both,
                "sales_channels",
                "business.channels",
                UiSpec::multi_choice(
                    "Where do you sell?",
                    vec![
                        ChoiceOption::new("storefront", "Storefront"),
                        ChoiceOption::new("marketplace", "Marketplaces"),
                        ChoiceOption::new("own_webshop", "Own webshop"),
                    ],
                ),
            ),
            Question::new(
                "E02_REPAIR_SERVICES",
                "E02",
                Availability::Both,
                "services",
                "services.repairs",
                UiSpec::toggle("Do you also repair devices?"),
            ),
            Question::new(
                "E03_MARKETPLACE_SHARE",
                "E03",
                Availability::Both,
                "sales_channels",
                "channels.marketplace.revenue_share",
                UiSpec::scale("How much revenue comes from marketplaces?", 0, 100, Some("%")),
            )
            .with_condition(Condition::for_channels(&["marketplace"])),
            Question::new(
                "E10_INVENTORY_SYSTEM",
                "E10",
                Availability::Full,
                "systems",
                "systems.inventory",
                UiSpec::single_choice(
                    "How do you track inventory?",
                    vec![
                        ChoiceOption::new("erp", "ERP / inventory software"),
                        ChoiceOption::new("spreadsheet", "Spreadsheet"),
                        ChoiceOption::new("none", "Not tracked"),
                    ],
                ),
            ),
        ],
    )
}
