// Copyright 2025 Cowboy AI, LLC.

//! Business unit catalog
//!
//! A [`BusinessUnitProfile`] is the input record the evaluator consumes:
//! a name, a tenure and a free-text description. The built-in catalog holds
//! the five reference units used for demonstrations; any profile works.
//! [`PortfolioReport`] evaluates a slice of profiles in order.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::classification::ClassificationTier;
use crate::errors::{DomainError, DomainResult};
use crate::evaluation::{ClassificationResult, Evaluator};

/// Immutable description of a business unit
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct BusinessUnitProfile {
    name: String,
    years_active: u64,
    description: String,
}

impl BusinessUnitProfile {
    /// Create a profile. The name must not be blank and tenure must be non-negative.
    pub fn new(
        name: impl Into<String>,
        years_active: i64,
        description: impl Into<String>,
    ) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::invalid_input("name", "must not be blank"));
        }
        let years_active = u64::try_from(years_active).map_err(|_| {
            DomainError::invalid_input(
                "years_active",
                format!("must be non-negative, got {years_active}"),
            )
        })?;
        Ok(Self {
            name,
            years_active,
            description: description.into(),
        })
    }

    /// Unit name as given, not as detected
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Years active
    pub fn years_active(&self) -> u64 {
        self.years_active
    }

    /// Free-text description
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Classify this profile
    pub fn evaluate(&self, evaluator: &Evaluator<'_>) -> ClassificationResult {
        evaluator.evaluate_years(&self.description, self.years_active)
    }
}

/// One evaluated profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PortfolioRow {
    /// Profile name
    pub name: String,
    /// Evaluation outcome
    pub result: ClassificationResult,
}

/// Evaluation of a set of profiles, in input order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PortfolioReport {
    /// One row per profile
    pub rows: Vec<PortfolioRow>,
}

impl PortfolioReport {
    /// Evaluate every profile
    pub fn evaluate(evaluator: &Evaluator<'_>, profiles: &[BusinessUnitProfile]) -> Self {
        let rows = profiles
            .iter()
            .map(|p| PortfolioRow {
                name: p.name().to_string(),
                result: p.evaluate(evaluator),
            })
            .collect();
        Self { rows }
    }

    /// Number of profiles per tier; tiers with no profiles are omitted
    pub fn tier_counts(&self) -> BTreeMap<ClassificationTier, usize> {
        let mut counts = BTreeMap::new();
        for row in &self.rows {
            *counts.entry(row.result.classification).or_insert(0) += 1;
        }
        counts
    }

    /// Render as pretty-printed JSON
    pub fn to_json(&self) -> DomainResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Read a report previously written by [`to_json`](Self::to_json)
    pub fn from_json(raw: &str) -> DomainResult<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Rows whose detected unit differs from the profile name
    pub fn mismatched_units(&self) -> impl Iterator<Item = &PortfolioRow> {
        self.rows
            .iter()
            .filter(|r| r.result.detected_unit.name() != r.name)
    }
}

const NATURAL_GAS_DESCRIPTION: &str = "\
    TC Energy began natural gas pipeline operations in 1951 and remains a core \
    provider, delivering ~30% of North America’s clean-burning natural gas. The \
    segment is central to TC Energy’s identity and revenue base. Although demand \
    is forecasted to grow through 2035 (+40 Bcf/d), aging infrastructure, \
    regulatory oversight, Indigenous consultations, and ESG scrutiny introduce \
    medium-term risks. TC Energy is actively modernizing its network through \
    initiatives like hybrid electric compression, digital inspection tools, and \
    the $900M Northwoods Expansion. These investments show a strong but not yet \
    industry-leading innovation posture.";

const LIQUIDS_DESCRIPTION: &str = "\
    TC Energy’s Liquids Pipelines division has been operational since the \
    mid-2000s, with its oldest pipelines (e.g., Keystone) starting service in \
    2010. While less mature than the gas segment, it remains a key unit with \
    long-term contracts securing 88% of EBITDA. The division navigates \
    regulatory volatility and occasional environmental incidents, such as \
    spills, which contribute to moderate disruption risk. Capacity limits and \
    shifting market dynamics also impact operations. Public sentiment varies \
    across regions. The team has implemented industry-standard practices such as \
    API 1173, remote sensing, and advanced inspection tools. While these efforts \
    ensure operational integrity, broader innovation remains at an average \
    level, with a focus on incremental improvements rather than transformational \
    shifts.";

const RENEWABLE_DESCRIPTION: &str = "\
    The company has a stake in Bruce Power, which is longstanding (nuclear), but \
    wind/solar/storage investments only ramped up after 2020. Much of the \
    current renewable strategy is still under development or early execution \
    (e.g., RFIs, pilot projects). Faces moderate disruption risk: regulatory \
    volatility, market fluctuations, and project complexity. However, this is \
    supported by strong long-term trends in demand and contracts. Bruce Power \
    offers some stability, though there are nuclear maintenance issues. Strong \
    innovation pipeline: utility-scale storage, electrification of operations, \
    bifacial solar panels, strategic integration of renewables such as wind, and \
    robust project development across Canada and the U.S.";

const POWER_AND_STORAGE_DESCRIPTION: &str = "\
    TC Energy’s Power division spans decades, including its 48.4% stake in Bruce \
    Power (nuclear since 1967) and ~4,650 MW across seven generation plants \
    (nuclear, gas-fired, etc.). The division plays a central role in regional \
    energy systems but faces regulatory volatility, fuel price fluctuations, and \
    nuclear maintenance outages (e.g., Bruce Unit 5). Integrating intermittent \
    renewables adds operational complexity and introduces moderate disruption \
    risk. High innovation maturity is evident through pumped-hydro storage \
    projects (1,000 MW in Ontario, 75 MW at Canyon Creek), utility-scale \
    solar+storage (Saddlebrook ~100 MW), electrification of gas fleets, and RFPs \
    for renewables for pipeline loads—demonstrating strong cross-technological \
    capabilities.";

const CARBON_CAPTURE_DESCRIPTION: &str = "\
    The Alberta Carbon Grid (ACG) is in advanced development and aims to capture \
    up to 20 Mt CO₂/year in Alberta. Operational efforts are just beginning, \
    including initial ACG hubs and feasibility studies such as TVA. Strong \
    technical ambition (large-scale CCS infrastructure and feasibility work), \
    but the unit is still building execution capacity. The unit faces regulatory \
    volatility, evolving climate policy, and economic uncertainty—resulting in \
    medium disruption risk. While projects are capital-intensive and subject to \
    public and environmental review, they align with long-term energy transition \
    goals. The team has outlined a clear roadmap for delivery, supported by \
    partnerships and technical planning. Innovation efforts are underway, with \
    foundational technologies being explored and frameworks taking shape.";

static BUILTIN_PROFILES: Lazy<Vec<BusinessUnitProfile>> = Lazy::new(|| {
    [
        ("Natural Gas Pipelines", 30, NATURAL_GAS_DESCRIPTION),
        ("Liquids Pipelines", 14, LIQUIDS_DESCRIPTION),
        ("Renewable Energy", 5, RENEWABLE_DESCRIPTION),
        ("Power & Storage", 40, POWER_AND_STORAGE_DESCRIPTION),
        ("Carbon Capture", 2, CARBON_CAPTURE_DESCRIPTION),
    ]
    .into_iter()
    .map(|(name, years_active, description)| BusinessUnitProfile {
        name: name.to_string(),
        years_active,
        description: description.to_string(),
    })
    .collect()
});

/// The five reference business units
pub fn builtin_profiles() -> &'static [BusinessUnitProfile] {
    &BUILTIN_PROFILES
}
