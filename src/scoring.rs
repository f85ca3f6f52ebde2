// Copyright 2025 Cowboy AI, LLC.

//! Dimension scorers
//!
//! Pure functions turning labels and tenure into small integer scores. A
//! higher score always favors the stable Core strategy: long tenure, low
//! disruption and strong innovation all score high, so the aggregator can
//! simply add them.

use crate::labels::{DisruptionRisk, InnovationCapability};

/// Score used for any label the scorers do not recognize
pub const NEUTRAL_SCORE: u8 = 3;

/// Lower bound (inclusive, in years) and score of each maturity band,
/// highest band first
pub const MATURITY_BANDS: [(u64, u8); 5] = [(20, 5), (10, 4), (5, 3), (2, 2), (0, 1)];

/// Maturity from years active: [0,2)→1, [2,5)→2, [5,10)→3, [10,20)→4, 20+→5
pub fn score_maturity(years_active: u64) -> u8 {
    MATURITY_BANDS
        .iter()
        .find(|(lower, _)| years_active >= *lower)
        .map_or(1, |(_, score)| *score)
}

/// Low→5, Medium→3, High→1
pub fn score_disruption(label: DisruptionRisk) -> u8 {
    match label {
        DisruptionRisk::Low => 5,
        DisruptionRisk::Medium => 3,
        DisruptionRisk::High => 1,
    }
}

/// Score a disruption label given as text; unrecognized labels are neutral
pub fn score_disruption_label(label: &str) -> u8 {
    DisruptionRisk::parse(label).map_or(NEUTRAL_SCORE, score_disruption)
}

/// Strong→5, Average→3, Weak→1
pub fn score_innovation(label: InnovationCapability) -> u8 {
    match label {
        InnovationCapability::Strong => 5,
        InnovationCapability::Average => 3,
        InnovationCapability::Weak => 1,
    }
}

/// Score an innovation label given as text; unrecognized labels are neutral
pub fn score_innovation_label(label: &str) -> u8 {
    InnovationCapability::parse(label).map_or(NEUTRAL_SCORE, score_innovation)
}
