// Copyright 2025 Cowboy AI, LLC.

//! Strategic classification
//!
//! The summed dimension score (3..=15) maps to a tier by fixed thresholds,
//! checked highest first. Each tier carries a fixed split of the innovation
//! budget across Core, Adjacent and Transformational bets. Stable units get a
//! conservative split; threatened units are pushed toward transformation.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::{DomainError, DomainResult};

/// Strategic tier of a business unit
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
pub enum ClassificationTier {
    /// Stable, low-risk, innovative
    Core,
    /// Growing but not yet established
    Emerging,
    /// Exposed, needs transformation
    #[serde(rename = "At Risk")]
    AtRisk,
    /// Weak on every dimension
    Laggard,
}

/// Percentage split of the innovation budget.
///
/// Only the four tier splits exist; deserializing any other split fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(try_from = "MixShares")]
pub struct InvestmentMix {
    /// Share for improving the existing business
    #[serde(rename = "Core")]
    core: u8,
    /// Share for adjacent markets and capabilities
    #[serde(rename = "Adjacent")]
    adjacent: u8,
    /// Share for new business models
    #[serde(rename = "Transformational")]
    transformational: u8,
}

#[derive(Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
struct MixShares {
    #[serde(rename = "Core")]
    core: u8,
    #[serde(rename = "Adjacent")]
    adjacent: u8,
    #[serde(rename = "Transformational")]
    transformational: u8,
}

impl TryFrom<MixShares> for InvestmentMix {
    type Error = DomainError;

    fn try_from(shares: MixShares) -> DomainResult<Self> {
        let mix = Self::new(shares.core, shares.adjacent, shares.transformational);
        if ClassificationTier::ALL
            .iter()
            .any(|tier| tier.investment_mix() == mix)
        {
            Ok(mix)
        } else {
            Err(DomainError::invalid_input(
                "investment_mix",
                format!("{mix} is not a tier split"),
            ))
        }
    }
}

impl InvestmentMix {
    const fn new(core: u8, adjacent: u8, transformational: u8) -> Self {
        Self {
            core,
            adjacent,
            transformational,
        }
    }

    /// Share for improving the existing business
    pub fn core(&self) -> u8 {
        self.core
    }

    /// Share for adjacent markets and capabilities
    pub fn adjacent(&self) -> u8 {
        self.adjacent
    }

    /// Share for new business models
    pub fn transformational(&self) -> u8 {
        self.transformational
    }

    /// Sum of the three shares
    pub fn total(&self) -> u16 {
        u16::from(self.core) + u16::from(self.adjacent) + u16::from(self.transformational)
    }

    /// Shares in Core, Adjacent, Transformational order
    pub fn as_array(&self) -> [u8; 3] {
        [self.core, self.adjacent, self.transformational]
    }
}

impl fmt::Display for InvestmentMix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Core {}% / Adjacent {}% / Transformational {}%",
            self.core, self.adjacent, self.transformational
        )
    }
}

/// Lowest possible total (three scores of 1)
pub const MIN_TOTAL_SCORE: u8 = 3;
/// Highest possible total (three scores of 5)
pub const MAX_TOTAL_SCORE: u8 = 15;

/// Minimum total for each tier, highest first. `Laggard` catches the rest.
pub const TIER_THRESHOLDS: [(u8, ClassificationTier); 3] = [
    (13, ClassificationTier::Core),
    (10, ClassificationTier::Emerging),
    (7, ClassificationTier::AtRisk),
];

impl ClassificationTier {
    /// Every tier, most favorable first
    pub const ALL: [ClassificationTier; 4] =
        [Self::Core, Self::Emerging, Self::AtRisk, Self::Laggard];

    /// Display name
    pub fn name(&self) -> &'static str {
        match self {
            ClassificationTier::Core => "Core",
            ClassificationTier::Emerging => "Emerging",
            ClassificationTier::AtRisk => "At Risk",
            ClassificationTier::Laggard => "Laggard",
        }
    }

    /// Fixed investment split for this tier
    pub const fn investment_mix(&self) -> InvestmentMix {
        match self {
            ClassificationTier::Core => InvestmentMix::new(70, 20, 10),
            ClassificationTier::Emerging => InvestmentMix::new(40, 40, 20),
            ClassificationTier::AtRisk => InvestmentMix::new(20, 30, 50),
            ClassificationTier::Laggard => InvestmentMix::new(10, 20, 70),
        }
    }

    /// Tier for a total score
    pub fn from_total(total_score: u8) -> Self {
        TIER_THRESHOLDS
            .iter()
            .find(|(min, _)| total_score >= *min)
            .map_or(ClassificationTier::Laggard, |(_, tier)| *tier)
    }
}

impl fmt::Display for ClassificationTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Map a total score to its tier and investment mix
pub fn classify_total(total_score: u8) -> (ClassificationTier, InvestmentMix) {
    let tier = ClassificationTier::from_total(total_score);
    (tier, tier.investment_mix())
}
