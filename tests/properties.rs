//! Behavioral properties of the calculator and the interactive session

use roi_calculator::models::InputField;
use roi_calculator::{InputSet, ScenarioId, Session, compute};

fn base() -> InputSet {
    InputSet {
        recordings_per_month: 40.0,
        minutes_manual: 30.0,
        minutes_auto: 10.0,
        hourly_rate: 150.0,
        avg_recording_minutes: 45.0,
    }
}

#[test]
fn time_saved_grows_with_recordings() {
    let mut previous = f64::NEG_INFINITY;
    for recordings in [0.0, 1.0, 5.0, 40.0, 199.0, 200.0] {
        let inputs = InputSet {
            recordings_per_month: recordings,
            ..base()
        };
        let saved = compute(&inputs, ScenarioId::Consulting).time_saved_per_month;
        assert!(saved >= previous, "{recordings}: {saved} < {previous}");
        previous = saved;
    }
}

#[test]
fn time_saved_grows_with_minutes_gap() {
    let mut previous = f64::NEG_INFINITY;
    for auto in [60.0, 30.0, 20.0, 10.0, 1.0, 0.0] {
        let inputs = InputSet {
            minutes_auto: auto,
            ..base()
        };
        let saved = compute(&inputs, ScenarioId::Legal).time_saved_per_month;
        assert!(saved >= previous, "auto={auto}: {saved} < {previous}");
        previous = saved;
    }
}

#[test]
fn break_even_is_missing_exactly_when_savings_are_zero() {
    let cases = [
        (base(), true),
        (InputSet { recordings_per_month: 0.0, ..base() }, false),
        (
            InputSet {
                minutes_auto: 30.0,
                avg_recording_minutes: 0.0,
                ..base()
            },
            false,
        ),
        (InputSet { hourly_rate: 0.0, ..base() }, true),
        (InputSet { minutes_auto: 30.0, ..base() }, true),
    ];
    for (inputs, has_break_even) in cases {
        let r = compute(&inputs, ScenarioId::Therapy);
        let yearly = r.money_saved_per_year + r.api_cost_per_year;
        assert_eq!(r.break_even().is_some(), has_break_even, "{inputs:?}");
        assert_eq!(r.break_even_months.is_finite(), yearly != 0.0, "{inputs:?}");
    }
}

#[test]
fn negative_rate_propagates_without_panicking() {
    let r = compute(&InputSet { hourly_rate: -50.0, ..base() }, ScenarioId::Education);
    assert!(r.money_saved_per_year < 0.0);
    assert!(r.setup_time_cost < 0.0);
}

#[test]
fn switching_scenario_resets_every_field() {
    let mut session = Session::new(ScenarioId::Consulting);
    for field in InputField::ALL {
        session.set_field(field, 1.0);
    }
    session.select_scenario(ScenarioId::Legal);
    assert_eq!(session.active(), ScenarioId::Legal);
    assert_eq!(
        *session.inputs(),
        InputSet {
            recordings_per_month: 30.0,
            minutes_manual: 15.0,
            minutes_auto: 5.0,
            hourly_rate: 315.0,
            avg_recording_minutes: 35.0,
        }
    );
}

#[test]
fn editing_one_field_leaves_the_rest_alone() {
    for field in InputField::ALL {
        let mut session = Session::new(ScenarioId::Education);
        let before = *session.inputs();
        session.set_field(field, 77.0);
        let after = *session.inputs();
        for other in InputField::ALL {
            let expected = if other == field { 77.0 } else { other.get(&before) };
            assert_eq!(other.get(&after), expected, "edited {field}, checked {other}");
        }
    }
}

#[test]
fn session_result_tracks_every_edit() {
    let mut session = Session::new(ScenarioId::Consulting);
    assert_eq!(session.result().net_savings.round(), 23_240.0);
    session.set_field_raw(InputField::RecordingsPerMonth, "0");
    assert_eq!(session.result(), compute(session.inputs(), ScenarioId::Consulting));
    assert!(session.result().break_even().is_none());
}
