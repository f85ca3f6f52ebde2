//! End-to-end classification scenarios over the built-in lexicon.

use portfolio_domain::{
    builtin_profiles, evaluate, BusinessUnit, ClassificationResult, ClassificationTier,
    DisruptionRisk, Evaluator, InnovationCapability, PortfolioReport,
};
use pretty_assertions::assert_eq;
use test_case::test_case;

fn eval(description: &str, years: i64) -> ClassificationResult {
    evaluate(description, years).expect("valid input")
}

#[test]
fn stable_long_lived_unit_is_core() {
    let r = eval(
        "The unit enjoys stable demand under long-term contracts.",
        25,
    );
    assert_eq!(r.breakdown.disruption_label, DisruptionRisk::Low);
    assert_eq!(r.breakdown.disruption, 5);
    assert_eq!(r.breakdown.maturity, 5);
    assert_eq!(r.breakdown.innovation_label, InnovationCapability::Average);
    assert_eq!(r.breakdown.innovation, 3);
    assert_eq!(r.breakdown.total, 13);
    assert_eq!(r.classification, ClassificationTier::Core);
    assert_eq!(r.investment_mix.as_array(), [70, 20, 10]);
}

#[test]
fn exposed_reactive_newcomer_is_laggard() {
    let r = eval(
        "Faces major regulatory pressure and a reactive posture.",
        1,
    );
    assert_eq!(r.breakdown.disruption_label, DisruptionRisk::High);
    assert_eq!(r.breakdown.disruption, 1);
    assert_eq!(r.breakdown.innovation_label, InnovationCapability::Weak);
    assert_eq!(r.breakdown.innovation, 1);
    assert_eq!(r.breakdown.maturity, 1);
    assert_eq!(r.breakdown.total, 3);
    assert_eq!(r.classification, ClassificationTier::Laggard);
    assert_eq!(r.investment_mix.as_array(), [10, 20, 70]);
}

#[test]
fn empty_description_uses_every_default() {
    let r = eval("", 0);
    assert_eq!(r.detected_unit, BusinessUnit::Unknown);
    assert_eq!(r.breakdown.disruption_label, DisruptionRisk::Medium);
    assert_eq!(r.breakdown.disruption, 3);
    assert_eq!(r.breakdown.innovation_label, InnovationCapability::Average);
    assert_eq!(r.breakdown.innovation, 3);
    assert_eq!(r.breakdown.maturity, 1);
    assert_eq!(r.breakdown.total, 7);
    assert_eq!(r.classification, ClassificationTier::AtRisk);
    assert_eq!(r.investment_mix.as_array(), [20, 30, 50]);
}

#[test]
fn whitespace_description_is_not_an_error() {
    let r = eval("   \n\t ", 0);
    assert_eq!(r, eval("", 0));
}

#[test]
fn young_carbon_capture_unit_is_emerging() {
    let r = eval("A carbon capture venture with strong innovation.", 2);
    assert_eq!(r.detected_unit, BusinessUnit::CarbonCapture);
    assert_eq!(r.breakdown.innovation_label, InnovationCapability::Strong);
    assert_eq!(r.breakdown.innovation, 5);
    assert_eq!(r.breakdown.maturity, 2);
    assert_eq!(r.breakdown.disruption_label, DisruptionRisk::Medium);
    assert_eq!(r.breakdown.total, 10);
    assert_eq!(r.classification, ClassificationTier::Emerging);
    assert_eq!(r.investment_mix.as_array(), [40, 40, 20]);
}

#[test]
fn negative_tenure_is_invalid_input() {
    let err = evaluate("stable demand", -10).unwrap_err();
    assert!(err.is_validation_error());
}

#[test_case("co2 storage next to a natural gas hub", BusinessUnit::CarbonCapture ; "carbon capture beats natural gas")]
#[test_case("natural gas liquids terminal", BusinessUnit::NaturalGasPipelines ; "natural gas beats liquids")]
#[test_case("keystone expansion near the grid", BusinessUnit::LiquidsPipelines ; "liquids beats power")]
#[test_case("utility-scale solar+storage on the grid", BusinessUnit::PowerAndStorage ; "power beats renewables")]
#[test_case("agrivoltaics pilot", BusinessUnit::RenewableEnergy ; "renewables alone")]
#[test_case("corporate head office", BusinessUnit::Unknown ; "no unit keyword")]
fn unit_detection_follows_priority_order(text: &str, expected: BusinessUnit) {
    assert_eq!(eval(text, 5).detected_unit, expected);
}

#[test_case("co2-to-concrete research", BusinessUnit::CarbonCapture ; "co2 inside a compound word")]
#[test_case("The Windsor office", BusinessUnit::RenewableEnergy ; "wind inside a place name")]
#[test_case("Traffic gridlock downtown", BusinessUnit::PowerAndStorage ; "grid inside gridlock")]
fn substring_matches_are_preserved(text: &str, expected: BusinessUnit) {
    assert_eq!(eval(text, 5).detected_unit, expected);
}

#[test_case("geopolitical tension despite stable demand", DisruptionRisk::High ; "high outranks low")]
#[test_case("an oil spill with secured revenue", DisruptionRisk::Medium ; "medium outranks low")]
#[test_case("DEEPLY EMBEDDED supplier", DisruptionRisk::Low ; "uppercase text")]
fn disruption_cascade(text: &str, expected: DisruptionRisk) {
    assert_eq!(eval(text, 5).breakdown.disruption_label, expected);
}

#[test_case("legacy systems but an RFP for new turbines", InnovationCapability::Strong ; "strong outranks weak")]
#[test_case("compliance driven", InnovationCapability::Weak ; "weak")]
#[test_case("steady incremental improvement", InnovationCapability::Average ; "default")]
fn innovation_cascade(text: &str, expected: InnovationCapability) {
    assert_eq!(eval(text, 5).breakdown.innovation_label, expected);
}

#[test]
fn dashboard_sample_description() {
    let text = "Natural Gas Pipelines is a long-standing unit with stable demand.\n\
                It uses legacy systems but has started integrating digital inspection tools.\n\
                There is moderate regulatory pressure.";
    let r = eval(text, 10);
    assert_eq!(r.detected_unit, BusinessUnit::NaturalGasPipelines);
    assert_eq!(r.breakdown.disruption_label, DisruptionRisk::Low);
    assert_eq!(r.breakdown.innovation_label, InnovationCapability::Strong);
    assert_eq!(r.breakdown.total, 14);
    assert_eq!(r.classification, ClassificationTier::Core);
}

#[test]
fn builtin_catalog_classifications() {
    let report = PortfolioReport::evaluate(&Evaluator::standard(), builtin_profiles());
    let got: Vec<(&str, BusinessUnit, u8, ClassificationTier)> = report
        .rows
        .iter()
        .map(|r| {
            (
                r.name.as_str(),
                r.result.detected_unit,
                r.result.breakdown.total,
                r.result.classification,
            )
        })
        .collect();
    assert_eq!(
        got,
        vec![
            (
                "Natural Gas Pipelines",
                BusinessUnit::NaturalGasPipelines,
                13,
                ClassificationTier::Core,
            ),
            (
                "Liquids Pipelines",
                BusinessUnit::LiquidsPipelines,
                10,
                ClassificationTier::Emerging,
            ),
            (
                "Renewable Energy",
                BusinessUnit::RenewableEnergy,
                11,
                ClassificationTier::Emerging,
            ),
            (
                "Power & Storage",
                BusinessUnit::PowerAndStorage,
                13,
                ClassificationTier::Core,
            ),
            (
                "Carbon Capture",
                BusinessUnit::CarbonCapture,
                8,
                ClassificationTier::AtRisk,
            ),
        ]
    );
}

#[test]
fn result_json_shape() {
    let r = eval("A carbon capture venture with strong innovation.", 2);
    let json = serde_json::to_value(r).unwrap();
    assert_eq!(json["detected_unit"], "Carbon Capture");
    assert_eq!(json["classification"], "Emerging");
    assert_eq!(
        json["investment_mix"],
        serde_json::json!({"Core": 40, "Adjacent": 40, "Transformational": 20})
    );
    assert_eq!(json["breakdown"]["innovation_label"], "Strong");
    let back: ClassificationResult = serde_json::from_value(json).unwrap();
    assert_eq!(back, r);
}
