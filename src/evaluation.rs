// Copyright 2025 Cowboy AI, LLC.

//! Evaluation facade
//!
//! [`Evaluator`] is the single entry point from `(description, years_active)`
//! to a [`ClassificationResult`]:
//!
//! ```text
//! description ─┬─ business unit cascade ───────────────────────▶ detected_unit
//!              ├─ disruption cascade ─▶ score_disruption ─┐
//!              └─ innovation cascade ─▶ score_innovation ─┼─▶ total ─▶ tier + mix
//! years_active ─── score_maturity ────────────────────────┘
//! ```
//!
//! Evaluation reads the lexicon by shared reference and has no side effects
//! beyond tracing, so an `Evaluator` can be copied freely across threads.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::classification::{classify_total, ClassificationTier, InvestmentMix};
use crate::errors::{DomainError, DomainResult};
use crate::labels::{BusinessUnit, DisruptionRisk, InnovationCapability};
use crate::lexicon::{normalize, RuleMatch};
use crate::rule_book::Lexicon;
use crate::scoring::{score_disruption, score_innovation, score_maturity};

/// Intermediate labels and scores behind a classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct ScoreBreakdown {
    /// Years the unit has been active
    pub years_active: u64,
    /// Maturity score (1..=5)
    pub maturity: u8,
    /// Disruption label read from the description
    pub disruption_label: DisruptionRisk,
    /// Disruption score (1, 3 or 5)
    pub disruption: u8,
    /// Innovation label read from the description
    pub innovation_label: InnovationCapability,
    /// Innovation score (1, 3 or 5)
    pub innovation: u8,
    /// Sum of the three scores (3..=15)
    pub total: u8,
}

/// Outcome of evaluating one description
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct ClassificationResult {
    /// Unit named by the description, or `Unknown`
    pub detected_unit: BusinessUnit,
    /// Strategic tier
    pub classification: ClassificationTier,
    /// Recommended innovation budget split
    pub investment_mix: InvestmentMix,
    /// How the tier was reached
    pub breakdown: ScoreBreakdown,
}

impl ClassificationResult {
    /// Render as pretty-printed JSON
    pub fn to_json(&self) -> DomainResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Which rule decided each dimension for a description
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchReport {
    /// Business unit decision
    pub business_unit: RuleMatch<BusinessUnit>,
    /// Disruption risk decision
    pub disruption: RuleMatch<DisruptionRisk>,
    /// Innovation capability decision
    pub innovation: RuleMatch<InnovationCapability>,
}

/// Classifies descriptions against a lexicon
#[derive(Debug, Clone, Copy)]
pub struct Evaluator<'a> {
    lexicon: &'a Lexicon,
}

impl Evaluator<'static> {
    /// Evaluator over the built-in lexicon
    pub fn standard() -> Self {
        Self::new(Lexicon::standard())
    }
}

impl<'a> Evaluator<'a> {
    /// Evaluator over `lexicon`
    pub fn new(lexicon: &'a Lexicon) -> Self {
        Self { lexicon }
    }

    /// Lexicon in use
    pub fn lexicon(&self) -> &'a Lexicon {
        self.lexicon
    }

    /// Classify a description. Negative `years_active` is rejected.
    pub fn evaluate(
        &self,
        description: &str,
        years_active: i64,
    ) -> DomainResult<ClassificationResult> {
        let years = u64::try_from(years_active).map_err(|_| {
            warn!(years_active, "rejected negative years_active");
            DomainError::invalid_input(
                "years_active",
                format!("must be non-negative, got {years_active}"),
            )
        })?;
        Ok(self.evaluate_years(description, years))
    }

    /// Classify a description with an already validated tenure
    pub fn evaluate_years(&self, description: &str, years_active: u64) -> ClassificationResult {
        let text = normalize(description);

        let detected_unit = self.lexicon.business_unit().classify_normalized(&text);
        let maturity = score_maturity(years_active);

        let disruption_label = self.lexicon.disruption().classify_normalized(&text);
        let disruption = score_disruption(disruption_label);

        let innovation_label = self.lexicon.innovation().classify_normalized(&text);
        let innovation = score_innovation(innovation_label);

        let total = maturity + disruption + innovation;
        let (classification, investment_mix) = classify_total(total);

        debug!(
            unit = %detected_unit,
            years_active,
            maturity,
            disruption = %disruption_label,
            innovation = %innovation_label,
            total,
            tier = %classification,
            "evaluated description"
        );

        ClassificationResult {
            detected_unit,
            classification,
            investment_mix,
            breakdown: ScoreBreakdown {
                years_active,
                maturity,
                disruption_label,
                disruption,
                innovation_label,
                innovation,
                total,
            },
        }
    }

    /// Report which rule and keyword decided each dimension
    pub fn explain(&self, description: &str) -> MatchReport {
        let text = normalize(description);
        MatchReport {
            business_unit: self.lexicon.business_unit().explain_normalized(&text),
            disruption: self.lexicon.disruption().explain_normalized(&text),
            innovation: self.lexicon.innovation().explain_normalized(&text),
        }
    }
}

/// Classify a description with the built-in lexicon
pub fn evaluate(description: &str, years_active: i64) -> DomainResult<ClassificationResult> {
    Evaluator::standard().evaluate(description, years_active)
}
