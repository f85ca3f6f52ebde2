// Copyright 2025 Cowboy AI, LLC.

//! Rule Book
//!
//! The [`Lexicon`] bundles the three keyword cascades the evaluator reads:
//! disruption risk, innovation capability and business unit. The standard
//! lexicon is compiled in and materialized once per process; alternative
//! lexicons can be loaded from TOML with the same shape:
//!
//! ```toml
//! [disruption]
//! default = "Medium"
//!
//! [[disruption.rules]]
//! label = "High"
//! keywords = ["major regulatory", "geopolitical"]
//! ```
//!
//! A lexicon has no mutating API. Share it by reference.

use std::fs;
use std::path::Path;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::{DomainError, DomainResult};
use crate::labels::{BusinessUnit, DisruptionRisk, InnovationCapability};
use crate::lexicon::{KeywordRule, KeywordRuleSet};

/// Major regulatory or reputational exposure
pub const HIGH_RISK_KEYWORDS: &[&str] = &[
    "major regulatory",
    "public scrutiny",
    "geopolitical",
    "high reputational risk",
];

/// Moderate, mixed exposure
pub const MEDIUM_RISK_KEYWORDS: &[&str] = &[
    "moderate disruption",
    "spill",
    "regulatory volatility",
    "esg",
    "indigenous",
    "aging infrastructure",
    "climate policy",
];

/// Contracted, stable revenue
pub const LOW_RISK_KEYWORDS: &[&str] = &[
    "stable demand",
    "long-term contracts",
    "deeply embedded",
    "secured revenue",
];

/// Active modernization programs
pub const STRONG_INNOVATION_KEYWORDS: &[&str] = &[
    "strong innovation",
    "electrification",
    "bifacial",
    "rfp",
    "digital inspection",
    "modernizing",
    "pumped-hydro",
    "solar+storage",
    "robust project",
];

/// Reactive or compliance-driven posture
pub const WEAK_INNOVATION_KEYWORDS: &[&str] = &[
    "reactive",
    "compliance",
    "legacy",
    "not yet mature",
    "minimal capability",
];

/// Business unit keywords in priority order. Earlier units win ties.
pub const BUSINESS_UNIT_KEYWORDS: &[(BusinessUnit, &[&str])] = &[
    (BusinessUnit::CarbonCapture, &["carbon capture", "ccs", "co2"]),
    (BusinessUnit::NaturalGasPipelines, &["natural gas"]),
    (
        BusinessUnit::LiquidsPipelines,
        &["liquids", "keystone", "oil transport"],
    ),
    (
        BusinessUnit::PowerAndStorage,
        &[
            "pumped-hydro",
            "grid",
            "utility-scale solar+storage",
            "energy dispatch",
        ],
    ),
    (
        BusinessUnit::RenewableEnergy,
        &["renewable", "solar", "wind", "agrivoltaics"],
    ),
];

static STANDARD_LEXICON: Lazy<Lexicon> = Lazy::new(Lexicon::build_standard);

/// The three keyword cascades used by evaluation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Lexicon {
    disruption: KeywordRuleSet<DisruptionRisk>,
    innovation: KeywordRuleSet<InnovationCapability>,
    business_unit: KeywordRuleSet<BusinessUnit>,
}

impl Lexicon {
    /// Assemble a lexicon from validated rule sets
    pub fn new(
        disruption: KeywordRuleSet<DisruptionRisk>,
        innovation: KeywordRuleSet<InnovationCapability>,
        business_unit: KeywordRuleSet<BusinessUnit>,
    ) -> Self {
        Self {
            disruption,
            innovation,
            business_unit,
        }
    }

    /// The built-in lexicon, shared for the life of the process
    pub fn standard() -> &'static Lexicon {
        &STANDARD_LEXICON
    }

    fn build_standard() -> Self {
        let disruption = KeywordRuleSet::from_static(
            &[
                (DisruptionRisk::High, HIGH_RISK_KEYWORDS),
                (DisruptionRisk::Medium, MEDIUM_RISK_KEYWORDS),
                (DisruptionRisk::Low, LOW_RISK_KEYWORDS),
            ],
            DisruptionRisk::Medium,
        );
        let innovation = KeywordRuleSet::from_static(
            &[
                (InnovationCapability::Strong, STRONG_INNOVATION_KEYWORDS),
                (InnovationCapability::Weak, WEAK_INNOVATION_KEYWORDS),
            ],
            InnovationCapability::Average,
        );
        let business_unit =
            KeywordRuleSet::from_static(BUSINESS_UNIT_KEYWORDS, BusinessUnit::Unknown);
        Self::new(disruption, innovation, business_unit)
    }

    /// Parse and validate a lexicon from TOML
    pub fn from_toml_str(raw: &str) -> DomainResult<Self> {
        toml::from_str(raw).map_err(|e| {
            // rule set validation failures surface as custom TOML errors
            let reason = e
                .message()
                .strip_prefix("Invalid configuration: ")
                .map(str::to_string);
            match reason {
                Some(reason) => DomainError::InvalidConfiguration(reason),
                None => DomainError::from(e),
            }
        })
    }

    /// Read, parse and validate a lexicon file
    pub fn from_path(path: impl AsRef<Path>) -> DomainResult<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|e| DomainError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let lexicon = Self::from_toml_str(&raw)?;
        info!(
            path = %path.display(),
            disruption_rules = lexicon.disruption.rules().len(),
            innovation_rules = lexicon.innovation.rules().len(),
            unit_rules = lexicon.business_unit.rules().len(),
            "loaded lexicon"
        );
        Ok(lexicon)
    }

    /// Render as TOML in the same shape [`from_toml_str`](Self::from_toml_str) reads
    pub fn to_toml_string(&self) -> DomainResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Disruption risk cascade
    pub fn disruption(&self) -> &KeywordRuleSet<DisruptionRisk> {
        &self.disruption
    }

    /// Innovation capability cascade
    pub fn innovation(&self) -> &KeywordRuleSet<InnovationCapability> {
        &self.innovation
    }

    /// Business unit cascade
    pub fn business_unit(&self) -> &KeywordRuleSet<BusinessUnit> {
        &self.business_unit
    }
}

impl<L: Copy> KeywordRuleSet<L> {
    /// Compiled-in tables are known to be non-empty and non-blank.
    pub(crate) fn from_static(rules: &[(L, &[&str])], default: L) -> Self {
        let rules = rules
            .iter()
            .map(|(label, keywords)| KeywordRule::new(*label, keywords.iter()))
            .collect();
        Self::new_unchecked(rules, default)
    }
}
