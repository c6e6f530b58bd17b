//! The gastro vertical: the primary catalog, presented through curated
//! quick/full order lists rather than declaration order.

use super::{FlowStrategy, QuestionCatalog};
use crate::condition::{Condition, FieldCheck};
use crate::question::{Availability, ChoiceOption, LocalizedText, Question, UiSpec};
use crate::registry::VerticalDefinition;
use crate::suppress::SuppressionRule;

pub const KEY: &str = "gastro";

/// Builds the gastro vertical with its curated flow and the dark-kitchen
/// suppression rule.
pub fn vertical() -> VerticalDefinition {
    let catalog = QuestionCatalog::from_static(KEY, questions());
    VerticalDefinition::new(KEY, catalog, flow()).with_suppression(dark_kitchen_rule())
}

fn flow() -> FlowStrategy {
    FlowStrategy::OrderedFlow {
        quick_order: [
            "SI01_GOOGLE_CHOICE",
            "SI02_MODE",
            "G01_CHANNELS",
            "G02_BUSINESS_TYPE",
            "G03_CUISINE_TYPE",
            "G10_MONTHLY_REVENUE",
            "G20_DELIVERY_APPS_USED",
            "G30_SEATING_CAPACITY",
            "G40_STAFF_COUNT",
            "G41_GROWTH_FOCUS",
            "G50_SALES_TRACKING_METHOD",
            "G51_POS_BRAND",
            "G60_MARKETING_CHANNELS",
        ]
        .iter()
        .map(|id| id.to_string())
        .collect(),
        full_additional: [
            "G11_AVG_TICKET",
            "G21_DELIVERY_APPS_SHARE",
            "G31_TABLE_SERVICE_STYLE",
            "G32_RESERVATIONS",
            "F10_FOOD_COST_PCT",
            "F11_RENT_PCT",
            "F20_SUPPLIER_COUNT",
            "F21_WASTE_TRACKING",
            "F31_LOYALTY_PROGRAM",
            "F40_TEAM_ROLES",
            "F50_ACCOUNTING_TOOL",
            "F60_GOOGLE_RATING",
        ]
        .iter()
        .map(|id| id.to_string())
        .collect(),
    }
}

/// Delivery-only dark kitchens never get dine-in questions, even when the
/// profile claims a dine-in channel, and their growth options narrow to the
/// delivery-centric subset.
fn dark_kitchen_rule() -> SuppressionRule {
    SuppressionRule::for_type("dark_kitchen")
        .suppress_areas(&["dine_in_ops"])
        .keep_options(
            "G41_GROWTH_FOCUS",
            &["delivery_radius", "menu_optimization", "app_visibility"],
        )
}

fn questions() -> Vec<Question> {
    vec![
        Question::new(
            "SI01_GOOGLE_CHOICE",
            "SI01",
            Availability::Both,
            "identity",
            "links.google_place",
            UiSpec::single_choice(
                LocalizedText::en_help(
                    "Connect your Google Business Profile?",
                    "We can prefill opening hours, photos and reviews.",
                )
                .with(
                    "es",
                    "¿Conectar tu Perfil de Empresa de Google?",
                    Some("Podemos precargar horarios, fotos y reseñas."),
                ),
                vec![
                    ChoiceOption::new("connect_now", "Connect now"),
                    ChoiceOption::new("later", "Maybe later"),
                    ChoiceOption::new("no_profile", "I don't have one"),
                ],
            ),
        ),
        Question::new(
            "SI02_MODE",
            "SI02",
            Availability::Both,
            "identity",
            "onboarding.depth",
            UiSpec::single_choice(
                LocalizedText::en("How deep should we go today?").with(
                    "es",
                    "¿Qué tan profundo vamos hoy?",
                    None,
                ),
                vec![
                    ChoiceOption::new("quick_scan", "Quick scan (5 min)"),
                    ChoiceOption::new("deep_dive", "Deep dive (20 min)"),
                ],
            ),
        ),
        Question::new(
            "G01_CHANNELS",
            "G01",
            Availability::Both,
            "sales_channels",
            "business.channels",
            UiSpec::multi_choice(
                LocalizedText::en("How do you sell?").with("es", "¿Cómo vendes?", None),
                vec![
                    ChoiceOption::new("dine_in", "Dine-in"),
                    ChoiceOption::new("takeaway", "Takeaway"),
                    ChoiceOption::new("delivery_own", "Own delivery"),
                    ChoiceOption::new("delivery_apps", "Delivery apps"),
                    ChoiceOption::new("catering", "Catering"),
                ],
            ),
        ),
        Question::new(
            "G02_BUSINESS_TYPE",
            "G02",
            Availability::Both,
            "identity",
            "business.primary_type",
            UiSpec::single_choice(
                "What kind of place is it?",
                vec![
                    ChoiceOption::new("restaurant", "Restaurant"),
                    ChoiceOption::new("cafe", "Café"),
                    ChoiceOption::new("bar", "Bar"),
                    ChoiceOption::new("bakery", "Bakery"),
                    ChoiceOption::new("food_truck", "Food truck"),
                    ChoiceOption::new("dark_kitchen", "Dark kitchen"),
                ],
            ),
        ),
        Question::new(
            "G03_CUISINE_TYPE",
            "G03",
            Availability::Both,
            "identity",
            "business.cuisine",
            UiSpec::single_choice(
                "What's your main cuisine?",
                vec![
                    ChoiceOption::new("local", "Local / traditional"),
                    ChoiceOption::new("italian", "Italian"),
                    ChoiceOption::new("asian", "Asian"),
                    ChoiceOption::new("burgers", "Burgers & fast food"),
                    ChoiceOption::new("other", "Other"),
                ],
            ),
        )
        .with_condition(Condition::for_types(&[
            "restaurant",
            "food_truck",
            "dark_kitchen",
        ])),
        Question::new(
            "G10_MONTHLY_REVENUE",
            "G10",
            Availability::Both,
            "finance",
            "finance.monthly_revenue",
            UiSpec::number("Roughly, what's your monthly revenue?", None),
        )
        .with_weight(3),
        Question::new(
            "G20_DELIVERY_APPS_USED",
            "G20",
            Availability::Both,
            "sales_channels",
            "channels.delivery_apps.platforms",
            UiSpec::dynamic("Which delivery apps do you use?", "delivery_platforms", true),
        )
        .with_condition(Condition::for_channels(&["delivery_apps"])),
        Question::new(
            "G30_SEATING_CAPACITY",
            "G30",
            Availability::Both,
            "dine_in_ops",
            "ops.dine_in.capacity",
            UiSpec::number(
                LocalizedText::en("How many seats do you have?").with(
                    "es",
                    "¿Cuántos asientos tienes?",
                    None,
                ),
                Some("seats"),
            ),
        )
        .with_condition(Condition::for_channels(&["dine_in"])),
        Question::new(
            "G40_STAFF_COUNT",
            "G40",
            Availability::Both,
            "team",
            "team.headcount",
            UiSpec::number("How many people work here, including you?", Some("people")),
        ),
        Question::new(
            "G41_GROWTH_FOCUS",
            "G41",
            Availability::Both,
            "strategy",
            "strategy.growth_focus",
            UiSpec::single_choice(
                "Where do you want to grow first?",
                vec![
                    ChoiceOption::new("dine_in_experience", "Dine-in experience"),
                    ChoiceOption::new("delivery_radius", "Delivery reach"),
                    ChoiceOption::new("menu_optimization", "Menu & margins"),
                    ChoiceOption::new("app_visibility", "Visibility on apps"),
                    ChoiceOption::new("catering_contracts", "Catering contracts"),
                ],
            ),
        ),
        Question::new(
            "G50_SALES_TRACKING_METHOD",
            "G50",
            Availability::Both,
            "systems",
            "systems.sales_tracking",
            UiSpec::single_choice(
                "How do you track your sales today?",
                vec![
                    ChoiceOption::new("pos_system", "POS system"),
                    ChoiceOption::new("spreadsheet", "Spreadsheet"),
                    ChoiceOption::new("paper", "Paper / notebook"),
                    ChoiceOption::new("none", "I don't"),
                ],
            ),
        ),
        Question::new(
            "G51_POS_BRAND",
            "G51",
            Availability::Both,
            "systems",
            "systems.pos.brand",
            UiSpec::dynamic("Which POS do you use?", "pos_brands", false),
        )
        .with_condition(Condition::unrestricted().with_integrations(vec![
            FieldCheck::equals("systems.sales_tracking", "pos_system"),
        ])),
        Question::new(
            "G60_MARKETING_CHANNELS",
            "G60",
            Availability::Both,
            "marketing",
            "marketing.channels",
            UiSpec::multi_choice(
                "Where do you promote the business?",
                vec![
                    ChoiceOption::new("instagram", "Instagram"),
                    ChoiceOption::new("facebook", "Facebook"),
                    ChoiceOption::new("google_ads", "Google Ads"),
                    ChoiceOption::new("flyers", "Flyers / local press"),
                    ChoiceOption::new("none", "Nowhere yet"),
                ],
            ),
        ),
        // Full-mode additions
        Question::new(
            "G11_AVG_TICKET",
            "G11",
            Availability::Full,
            "finance",
            "finance.avg_ticket",
            UiSpec::number("What's your average ticket?", None),
        ),
        Question::new(
            "G21_DELIVERY_APPS_SHARE",
            "G21",
            Availability::Full,
            "sales_channels",
            "channels.delivery_apps.revenue_share",
            UiSpec::scale("How much of your revenue comes through apps?", 0, 100, Some("%")),
        )
        .with_condition(Condition::for_channels(&["delivery_apps"])),
        Question::new(
            "G31_TABLE_SERVICE_STYLE",
            "G31",
            Availability::Full,
            "dine_in_ops",
            "ops.dine_in.service_style",
            UiSpec::single_choice(
                "How do guests get served?",
                vec![
                    ChoiceOption::new("counter", "Order at the counter"),
                    ChoiceOption::new("table_service", "Table service"),
                    ChoiceOption::new("self_service", "Self service"),
                    ChoiceOption::new("buffet", "Buffet"),
                ],
            ),
        )
        .with_condition(Condition::for_channels(&["dine_in"])),
        Question::new(
            "G32_RESERVATIONS",
            "G32",
            Availability::Full,
            "dine_in_ops",
            "ops.reservations.enabled",
            UiSpec::toggle("Do you take reservations?"),
        )
        .with_condition(Condition::for_channels(&["dine_in"])),
        Question::new(
            "F10_FOOD_COST_PCT",
            "F10",
            Availability::Full,
            "finance",
            "finance.food_cost_pct",
            UiSpec::scale("Roughly, food cost as a share of revenue?", 0, 100, Some("%")),
        ),
        Question::new(
            "F11_RENT_PCT",
            "F11",
            Availability::Full,
            "finance",
            "finance.rent_pct",
            UiSpec::scale("And rent as a share of revenue?", 0, 100, Some("%")),
        ),
        Question::new(
            "F20_SUPPLIER_COUNT",
            "F20",
            Availability::Full,
            "operations",
            "ops.suppliers.count",
            UiSpec::number("How many suppliers do you buy from?", Some("suppliers")),
        ),
        Question::new(
            "F21_WASTE_TRACKING",
            "F21",
            Availability::Full,
            "operations",
            "ops.waste.tracking",
            UiSpec::toggle("Do you track food waste?"),
        ),
        Question::new(
            "F31_LOYALTY_PROGRAM",
            "F31",
            Availability::Full,
            "marketing",
            "marketing.loyalty.enabled",
            UiSpec::toggle("Do you run any loyalty program?"),
        )
        .with_condition(Condition::unrestricted().with_any(vec![
            FieldCheck::equals("marketing.channels", "instagram"),
            FieldCheck::equals("systems.sales_tracking", "pos_system"),
        ])),
        Question::new(
            "F40_TEAM_ROLES",
            "F40",
            Availability::Full,
            "team",
            "team.roles",
            UiSpec::multi_choice(
                "Which roles exist on your team?",
                vec![
                    ChoiceOption::new("kitchen", "Kitchen"),
                    ChoiceOption::new("service", "Service"),
                    ChoiceOption::new("delivery", "Delivery riders"),
                    ChoiceOption::new("admin", "Admin / back office"),
                ],
            ),
        ),
        Question::new(
            "F50_ACCOUNTING_TOOL",
            "F50",
            Availability::Full,
            "systems",
            "systems.accounting.tool",
            UiSpec::dynamic("What do you use for accounting?", "accounting_tools", false),
        ),
        Question::new(
            "F60_GOOGLE_RATING",
            "F60",
            Availability::Full,
            "marketing",
            "marketing.google.rating",
            UiSpec::scale("What's your current Google rating?", 1, 5, Some("stars")),
        )
        .with_condition(Condition::unrestricted().with_integrations(vec![
            FieldCheck::equals("links.google_place", "connect_now"),
        ])),
    ]
}
