//! Data models for scenarios, inputs and calculation results

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, InputError};

/// One of the fixed business contexts the estimator knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScenarioId {
    Content,
    #[default]
    Consulting,
    Therapy,
    Legal,
    Education,
}

impl ScenarioId {
    /// All scenarios, in catalog order
    pub const ALL: [ScenarioId; 5] = [
        ScenarioId::Content,
        ScenarioId::Consulting,
        ScenarioId::Therapy,
        ScenarioId::Legal,
        ScenarioId::Education,
    ];

    pub fn key(self) -> &'static str {
        match self {
            ScenarioId::Content => "content",
            ScenarioId::Consulting => "consulting",
            ScenarioId::Therapy => "therapy",
            ScenarioId::Legal => "legal",
            ScenarioId::Education => "education",
        }
    }
}

impl fmt::Display for ScenarioId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ScenarioId {
    type Err = CatalogError;

    /// Exact match on the lowercase key; no trimming or case folding
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ScenarioId::ALL
            .into_iter()
            .find(|id| id.key() == s)
            .ok_or_else(|| CatalogError::UnknownScenario(s.to_string()))
    }
}

/// The five numeric inputs a visitor can adjust
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputSet {
    pub recordings_per_month: f64,
    pub minutes_manual: f64, // per recording, old workflow
    pub minutes_auto: f64,   // per recording, automated workflow
    pub hourly_rate: f64,
    pub avg_recording_minutes: f64,
}

/// Names one field of an [`InputSet`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputField {
    RecordingsPerMonth,
    AvgRecordingMinutes,
    MinutesManual,
    MinutesAuto,
    HourlyRate,
}

/// Slider metadata for an input field. Display only; never used to clamp.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldRange {
    pub label: &'static str,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub prefix: &'static str,
    pub suffix: &'static str,
}

impl InputField {
    /// Fields in slider order
    pub const ALL: [InputField; 5] = [
        InputField::RecordingsPerMonth,
        InputField::AvgRecordingMinutes,
        InputField::MinutesManual,
        InputField::MinutesAuto,
        InputField::HourlyRate,
    ];

    /// camelCase key, matching the serialized [`InputSet`]
    pub fn key(self) -> &'static str {
        match self {
            InputField::RecordingsPerMonth => "recordingsPerMonth",
            InputField::AvgRecordingMinutes => "avgRecordingMinutes",
            InputField::MinutesManual => "minutesManual",
            InputField::MinutesAuto => "minutesAuto",
            InputField::HourlyRate => "hourlyRate",
        }
    }

    pub fn range(self) -> FieldRange {
        let (label, min, max, step, prefix, suffix) = match self {
            InputField::RecordingsPerMonth => ("Recordings / Month", 1.0, 200.0, 1.0, "", ""),
            InputField::AvgRecordingMinutes => ("Avg Recording Length", 1.0, 120.0, 1.0, "", " min"),
            InputField::MinutesManual => ("Manual Processing Time", 1.0, 240.0, 1.0, "", " min"),
            InputField::MinutesAuto => ("Automated Processing Time", 1.0, 60.0, 1.0, "", " min"),
            InputField::HourlyRate => ("Your Hourly Rate", 10.0, 1000.0, 5.0, "$", ""),
        };
        FieldRange {
            label,
            min,
            max,
            step,
            prefix,
            suffix,
        }
    }

    pub fn get(self, inputs: &InputSet) -> f64 {
        match self {
            InputField::RecordingsPerMonth => inputs.recordings_per_month,
            InputField::AvgRecordingMinutes => inputs.avg_recording_minutes,
            InputField::MinutesManual => inputs.minutes_manual,
            InputField::MinutesAuto => inputs.minutes_auto,
            InputField::HourlyRate => inputs.hourly_rate,
        }
    }

    pub fn set(self, inputs: &mut InputSet, value: f64) {
        let slot = match self {
            InputField::RecordingsPerMonth => &mut inputs.recordings_per_month,
            InputField::AvgRecordingMinutes => &mut inputs.avg_recording_minutes,
            InputField::MinutesManual => &mut inputs.minutes_manual,
            InputField::MinutesAuto => &mut inputs.minutes_auto,
            InputField::HourlyRate => &mut inputs.hourly_rate,
        };
        *slot = value;
    }
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for InputField {
    type Err = InputError;

    /// Accepts camelCase, snake_case and kebab-case spellings, case-insensitively
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .map(|c| c.to_ascii_lowercase())
            .collect();
        InputField::ALL
            .into_iter()
            .find(|field| field.key().to_ascii_lowercase() == normalized)
            .ok_or_else(|| InputError::UnknownField(s.trim().to_string()))
    }
}

/// Static catalog entry for a scenario
#[derive(Debug, Clone, Serialize)]
pub struct ScenarioDefinition {
    pub id: ScenarioId,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub defaults: InputSet,
}

/// Scenario-specific constants that do not depend on the inputs
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioCostProfile {
    pub setup_hours: f64,
    pub vps_yearly_cost: f64,
}

/// Everything derived from one (inputs, scenario) pair.
///
/// Recomputed from scratch on every change; never cached or patched.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResult {
    pub time_saved_per_month: f64, // hours
    pub money_saved_per_month: f64,
    pub money_saved_per_year: f64,
    pub api_cost_per_month: f64,
    pub api_cost_per_year: f64,
    pub setup_hours: f64,
    pub setup_time_cost: f64,
    pub vps_yearly_cost: f64,
    pub vps_monthly_cost: f64,
    pub setup_cost: f64,
    pub net_savings: f64,
    /// Non-finite when there are no monthly savings at all
    pub break_even_months: f64,
}

impl CalculationResult {
    /// Break-even in months, or `None` when there is no break-even point
    pub fn break_even(&self) -> Option<f64> {
        self.break_even_months
            .is_finite()
            .then_some(self.break_even_months)
    }

    /// Combined savings per month (time value plus avoided API spend)
    pub fn monthly_savings(&self) -> f64 {
        self.money_saved_per_year / 12.0 + self.api_cost_per_year / 12.0
    }
}

/// One bar of the 12-month cumulative trajectory chart
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrajectoryPoint {
    pub month: u32,
    pub cumulative: f64,
    /// Bar height in 0..=1 relative to the year's range
    pub height_fraction: f64,
    pub profitable: bool,
    pub is_break_even_month: bool,
}
