// Copyright 2025 Cowboy AI, LLC.

//! Dimension labels
//!
//! Each scoring dimension reads free text down to one label from a small,
//! closed set. Labels serialize as their display names ("Power & Storage",
//! "High") so that lexicon files and JSON output read like the business
//! vocabulary rather than Rust identifiers.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Exposure of a unit to regulatory, market or reputational shocks
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
pub enum DisruptionRisk {
    /// Stable demand, contracted revenue
    Low,
    /// Moderate or mixed exposure
    Medium,
    /// Major regulatory or reputational exposure
    High,
}

impl DisruptionRisk {
    /// Every label, lowest risk first
    pub const ALL: [DisruptionRisk; 3] = [Self::Low, Self::Medium, Self::High];

    /// Display name
    pub fn name(&self) -> &'static str {
        match self {
            DisruptionRisk::Low => "Low",
            DisruptionRisk::Medium => "Medium",
            DisruptionRisk::High => "High",
        }
    }

    /// Parse a display name, case-insensitively
    pub fn parse(label: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|l| l.name().eq_ignore_ascii_case(label.trim()))
    }
}

/// Technology-adoption posture of a unit
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
pub enum InnovationCapability {
    /// Reactive, compliance-driven, legacy systems
    Weak,
    /// Incremental improvement
    Average,
    /// Active modernization and new technology programs
    Strong,
}

impl InnovationCapability {
    /// Every label, weakest first
    pub const ALL: [InnovationCapability; 3] = [Self::Weak, Self::Average, Self::Strong];

    /// Display name
    pub fn name(&self) -> &'static str {
        match self {
            InnovationCapability::Weak => "Weak",
            InnovationCapability::Average => "Average",
            InnovationCapability::Strong => "Strong",
        }
    }

    /// Parse a display name, case-insensitively
    pub fn parse(label: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|l| l.name().eq_ignore_ascii_case(label.trim()))
    }
}

/// Business unit detected from a description
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
pub enum BusinessUnit {
    /// Carbon capture and storage
    #[serde(rename = "Carbon Capture")]
    CarbonCapture,
    /// Natural gas transmission
    #[serde(rename = "Natural Gas Pipelines")]
    NaturalGasPipelines,
    /// Crude oil and liquids transport
    #[serde(rename = "Liquids Pipelines")]
    LiquidsPipelines,
    /// Generation, storage and dispatch
    #[serde(rename = "Power & Storage")]
    PowerAndStorage,
    /// Wind, solar and other renewables
    #[serde(rename = "Renewable Energy")]
    RenewableEnergy,
    /// No unit keyword matched
    Unknown,
}

impl BusinessUnit {
    /// Every label, including `Unknown`
    pub const ALL: [BusinessUnit; 6] = [
        Self::CarbonCapture,
        Self::NaturalGasPipelines,
        Self::LiquidsPipelines,
        Self::PowerAndStorage,
        Self::RenewableEnergy,
        Self::Unknown,
    ];

    /// Stable id
    pub fn id(&self) -> &'static str {
        match self {
            BusinessUnit::CarbonCapture => "carbon_capture",
            BusinessUnit::NaturalGasPipelines => "natural_gas_pipelines",
            BusinessUnit::LiquidsPipelines => "liquids_pipelines",
            BusinessUnit::PowerAndStorage => "power_and_storage",
            BusinessUnit::RenewableEnergy => "renewable_energy",
            BusinessUnit::Unknown => "unknown",
        }
    }

    /// Display name
    pub fn name(&self) -> &'static str {
        match self {
            BusinessUnit::CarbonCapture => "Carbon Capture",
            BusinessUnit::NaturalGasPipelines => "Natural Gas Pipelines",
            BusinessUnit::LiquidsPipelines => "Liquids Pipelines",
            BusinessUnit::PowerAndStorage => "Power & Storage",
            BusinessUnit::RenewableEnergy => "Renewable Energy",
            BusinessUnit::Unknown => "Unknown",
        }
    }

    /// Parse either the display name or the stable id
    pub fn parse(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ALL
            .into_iter()
            .find(|u| u.name().eq_ignore_ascii_case(label) || u.id() == label)
    }

    /// Whether a unit keyword matched
    pub fn is_known(&self) -> bool {
        !matches!(self, BusinessUnit::Unknown)
    }
}

macro_rules! display_by_name {
    ($($t:ty),*) => {
        $(impl fmt::Display for $t {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.name())
            }
        })*
    };
}

display_by_name!(DisruptionRisk, InnovationCapability, BusinessUnit);
