// Copyright 2025 Cowboy AI, LLC.

//! # Portfolio Domain
//!
//! Rule-based classification of business-unit descriptions into strategic
//! tiers with an innovation investment mix.
//!
//! A description and a tenure are read along three dimensions:
//! - **Maturity**: years active, banded into a 1..=5 score
//! - **Disruption Risk**: Low / Medium / High, read from keywords
//! - **Innovation Capability**: Weak / Average / Strong, read from keywords
//!
//! The three scores are summed and the total picks a tier (Core, Emerging,
//! At Risk, Laggard), each with a fixed Core / Adjacent / Transformational
//! budget split. The description also names the business unit it belongs to.
//!
//! ## Design Principles
//!
//! 1. **Rules as Data**: keyword cascades are ordered lists with a default,
//!    evaluated by one generic first-match function
//! 2. **Immutability**: lexicons are built once and shared by reference
//! 3. **Totality**: every lookup has a default; only negative tenure fails
//! 4. **Purity**: evaluation is deterministic and free of I/O
//!
//! ```
//! use portfolio_domain::{evaluate, BusinessUnit, ClassificationTier};
//!
//! let result = evaluate("Carbon capture hub with strong innovation", 2).unwrap();
//! assert_eq!(result.detected_unit, BusinessUnit::CarbonCapture);
//! assert_eq!(result.classification, ClassificationTier::Emerging);
//! assert_eq!(result.investment_mix.as_array(), [40, 40, 20]);
//! ```

#![warn(missing_docs)]

mod catalog;
mod classification;
mod errors;
mod evaluation;
mod labels;
mod lexicon;
mod rule_book;
mod scoring;

pub use catalog::{builtin_profiles, BusinessUnitProfile, PortfolioReport, PortfolioRow};
pub use classification::{
    classify_total, ClassificationTier, InvestmentMix, MAX_TOTAL_SCORE, MIN_TOTAL_SCORE,
    TIER_THRESHOLDS,
};
pub use errors::{DomainError, DomainResult};
pub use evaluation::{evaluate, ClassificationResult, Evaluator, MatchReport, ScoreBreakdown};
pub use labels::{BusinessUnit, DisruptionRisk, InnovationCapability};
pub use lexicon::{classify, normalize, KeywordRule, KeywordRuleSet, RuleMatch};
pub use rule_book::{
    Lexicon, BUSINESS_UNIT_KEYWORDS, HIGH_RISK_KEYWORDS, LOW_RISK_KEYWORDS, MEDIUM_RISK_KEYWORDS,
    STRONG_INNOVATION_KEYWORDS, WEAK_INNOVATION_KEYWORDS,
};
pub use scoring::{
    score_disruption, score_disruption_label, score_innovation, score_innovation_label,
    score_maturity, MATURITY_BANDS, NEUTRAL_SCORE,
};
