//! Static scenario catalog and per-scenario cost profiles

use log::debug;

use crate::error::CatalogError;
use crate::models::{InputSet, ScenarioCostProfile, ScenarioDefinition, ScenarioId};

static CATALOG: [ScenarioDefinition; 5] = [
    ScenarioDefinition {
        id: ScenarioId::Content,
        name: "Content Creator",
        description: "Voice memos → polished content",
        icon: "✦",
        defaults: InputSet {
            recordings_per_month: 20.0,
            minutes_manual: 35.0,
            minutes_auto: 8.0,
            hourly_rate: 35.0,
            avg_recording_minutes: 5.0,
        },
    },
    ScenarioDefinition {
        id: ScenarioId::Consulting,
        name: "Consulting Firm",
        description: "Client calls → documented insights",
        icon: "◈",
        defaults: InputSet {
            recordings_per_month: 40.0,
            minutes_manual: 30.0,
            minutes_auto: 10.0,
            hourly_rate: 150.0,
            avg_recording_minutes: 45.0,
        },
    },
    ScenarioDefinition {
        id: ScenarioId::Therapy,
        name: "Private Practice",
        description: "Session notes without typing",
        icon: "◎",
        defaults: InputSet {
            recordings_per_month: 75.0,
            minutes_manual: 18.0,
            minutes_auto: 5.0,
            hourly_rate: 160.0,
            avg_recording_minutes: 50.0,
        },
    },
    ScenarioDefinition {
        id: ScenarioId::Legal,
        name: "Legal Team",
        description: "Privileged calls → secure transcripts",
        icon: "⬡",
        defaults: InputSet {
            recordings_per_month: 30.0,
            minutes_manual: 15.0,
            minutes_auto: 5.0,
            hourly_rate: 315.0,
            avg_recording_minutes: 35.0,
        },
    },
    ScenarioDefinition {
        id: ScenarioId::Education,
        name: "Education Business",
        description: "Course content → materials",
        icon: "◇",
        defaults: InputSet {
            recordings_per_month: 12.0,
            minutes_manual: 180.0,
            minutes_auto: 45.0,
            hourly_rate: 50.0,
            avg_recording_minutes: 60.0,
        },
    },
];

const FALLBACK_PROFILE: ScenarioCostProfile = ScenarioCostProfile {
    setup_hours: 5.0,
    vps_yearly_cost: 175.0,
};

/// All scenarios, in display order
pub fn catalog() -> &'static [ScenarioDefinition] {
    &CATALOG
}

/// Look up a scenario by id. Total over [`ScenarioId`].
pub fn lookup(id: ScenarioId) -> &'static ScenarioDefinition {
    match id {
        ScenarioId::Content => &CATALOG[0],
        ScenarioId::Consulting => &CATALOG[1],
        ScenarioId::Therapy => &CATALOG[2],
        ScenarioId::Legal => &CATALOG[3],
        ScenarioId::Education => &CATALOG[4],
    }
}

/// Look up a scenario by its string key, failing on anything outside the fixed set
pub fn lookup_key(key: &str) -> Result<&'static ScenarioDefinition, CatalogError> {
    key.parse::<ScenarioId>().map(lookup)
}

/// Setup effort and hosting cost for a scenario
pub fn cost_profile(id: ScenarioId) -> ScenarioCostProfile {
    // Hosting figures are midpoints of the quoted VPS price ranges
    let (setup_hours, vps_yearly_cost) = match id {
        ScenarioId::Content => (5.0, 175.0),
        ScenarioId::Consulting => (6.0, 400.0),
        ScenarioId::Therapy => (5.0, 525.0),
        ScenarioId::Legal => (4.0, 450.0),
        ScenarioId::Education => (5.0, 350.0),
    };
    ScenarioCostProfile {
        setup_hours,
        vps_yearly_cost,
    }
}

/// Cost profile for a raw key. Unknown keys get the content-tier constants.
pub fn cost_profile_for_key(key: &str) -> ScenarioCostProfile {
    match key.parse::<ScenarioId>() {
        Ok(id) => cost_profile(id),
        Err(_) => {
            debug!("No cost profile for scenario '{}', using content tier", key);
            FALLBACK_PROFILE
        }
    }
}

/// Extra context shown alongside the numbers for some scenarios
pub fn scenario_note(id: ScenarioId) -> Option<&'static str> {
    match id {
        ScenarioId::Legal => Some(
            "Time savings understates true value. Primary benefit is maintaining \
             attorney-client privilege by keeping communications on your infrastructure, \
             with no third-party subpoena risk.",
        ),
        _ => None,
    }
}
