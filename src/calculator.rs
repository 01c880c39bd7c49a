//! Savings calculator logic

use std::fmt;

use log::info;

use crate::models::{
    CalculationResult, InputSet, ScenarioCostProfile, ScenarioId, TrajectoryPoint,
};
use crate::scenarios;

/// Blended external transcription + summarization API price, per recorded minute
pub const API_COST_PER_MINUTE: f64 = 0.025;

/// Number of months shown in the trajectory chart
pub const TRAJECTORY_MONTHS: usize = 12;

/// Calculate the year-one comparison for a scenario
///
/// Total over finite inputs: nothing is validated or clamped, and a zero
/// monthly saving produces a non-finite `break_even_months`.
pub fn compute(inputs: &InputSet, scenario: ScenarioId) -> CalculationResult {
    let result = compute_with_profile(inputs, scenarios::cost_profile(scenario));
    if result.break_even().is_none() {
        info!("{} scenario has no break-even point for {:?}", scenario, inputs);
    }
    result
}

/// Same as [`compute`], resolving the cost profile from a raw scenario key.
/// Unknown keys use the fallback profile instead of failing.
pub fn compute_for_key(inputs: &InputSet, scenario_key: &str) -> CalculationResult {
    compute_with_profile(inputs, scenarios::cost_profile_for_key(scenario_key))
}

fn compute_with_profile(inputs: &InputSet, profile: ScenarioCostProfile) -> CalculationResult {
    let time_saved_per_month =
        (inputs.minutes_manual - inputs.minutes_auto) * inputs.recordings_per_month / 60.0;
    let money_saved_per_year = time_saved_per_month * inputs.hourly_rate * 12.0;
    let api_cost_per_year =
        inputs.avg_recording_minutes * API_COST_PER_MINUTE * inputs.recordings_per_month * 12.0;

    let setup_time_cost = profile.setup_hours * inputs.hourly_rate;
    let setup_cost = setup_time_cost + profile.vps_yearly_cost;
    let net_savings = money_saved_per_year + api_cost_per_year - setup_cost;
    let break_even_months = setup_cost / (money_saved_per_year / 12.0 + api_cost_per_year / 12.0);

    CalculationResult {
        time_saved_per_month,
        money_saved_per_month: money_saved_per_year / 12.0,
        money_saved_per_year,
        api_cost_per_month: api_cost_per_year / 12.0,
        api_cost_per_year,
        setup_hours: profile.setup_hours,
        setup_time_cost,
        vps_yearly_cost: profile.vps_yearly_cost,
        vps_monthly_cost: (profile.vps_yearly_cost / 12.0).round(),
        setup_cost,
        net_savings,
        break_even_months,
    }
}

/// Cumulative position at the end of each of the first twelve months
pub fn trajectory(result: &CalculationResult) -> [TrajectoryPoint; TRAJECTORY_MONTHS] {
    let monthly = result.monthly_savings();
    let max_val = result.money_saved_per_year + result.api_cost_per_year - result.setup_cost;
    let min_val = -result.setup_cost;
    let range = match max_val - min_val {
        r if r == 0.0 || r.is_nan() => 1.0,
        r => r,
    };
    let break_even_month = result.break_even_months.ceil();

    std::array::from_fn(|i| {
        let month = i as u32 + 1;
        let cumulative = monthly * f64::from(month) - result.setup_cost;
        TrajectoryPoint {
            month,
            cumulative,
            height_fraction: ((cumulative - min_val) / range).max(0.0),
            profitable: cumulative >= 0.0,
            is_break_even_month: f64::from(month) == break_even_month,
        }
    })
}

/// How much faster the automated workflow is, as a rounded percentage
pub fn speedup_percent(inputs: &InputSet) -> f64 {
    ((1.0 - inputs.minutes_auto / inputs.minutes_manual) * 100.0).round()
}

/// Format a currency amount with thousands separators and no decimals
pub fn format_money(value: f64) -> String {
    if !value.is_finite() {
        return format!("${}", value);
    }
    let rounded = value.round();
    let digits = format!("{:.0}", rounded.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let sign = if rounded < 0.0 { "-" } else { "" };
    format!("{}${}", sign, grouped)
}

/// Human-readable break-even, e.g. "0.6 months" or "no break-even"
pub fn format_break_even(result: &CalculationResult) -> String {
    match result.break_even() {
        Some(months) => format!("{:.1} months", months),
        None => "no break-even".to_string(),
    }
}

/// Summary of a scenario calculation, ready for display
#[derive(Debug)]
pub struct Summary {
    pub scenario: ScenarioId,
    pub inputs: InputSet,
    pub result: CalculationResult,
    pub trajectory: [TrajectoryPoint; TRAJECTORY_MONTHS],
}

/// Generate a summary for a scenario and input set
pub fn summarize(inputs: &InputSet, scenario: ScenarioId) -> Summary {
    let result = compute(inputs, scenario);
    Summary {
        scenario,
        inputs: *inputs,
        trajectory: trajectory(&result),
        result,
    }
}

const CHART_ROWS: usize = 6;

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let def = scenarios::lookup(self.scenario);
        let r = &self.result;

        writeln!(f, "=== Year-One ROI ===")?;
        writeln!(f, "Scenario: {} {} ({})", def.icon, def.name, def.description)?;
        writeln!(f)?;

        let outcome = if r.net_savings > 0.0 {
            "saved"
        } else if r.net_savings < 0.0 {
            "lost"
        } else {
            "even"
        };
        writeln!(f, "Net savings: {} ({})", format_money(r.net_savings), outcome)?;
        writeln!(f, "Break-even:  {}", format_break_even(r))?;
        writeln!(f)?;

        writeln!(f, "Time freed:  {:.1}h / month", r.time_saved_per_month)?;
        writeln!(f, "Annual value: {}", format_money(r.money_saved_per_year))?;
        writeln!(
            f,
            "  Manual {} min/recording vs automated {} min/recording ({}% faster)",
            self.inputs.minutes_manual,
            self.inputs.minutes_auto,
            speedup_percent(&self.inputs)
        )?;
        writeln!(f)?;

        writeln!(f, "Cost breakdown:")?;
        let lines = [
            ("Time value recovered / year", r.money_saved_per_year, "at your hourly rate".to_string()),
            ("API costs avoided / year", r.api_cost_per_year, "vs. SaaS pricing".to_string()),
            ("Setup time cost", -r.setup_time_cost, format!("{} hrs one-time", r.setup_hours)),
            ("VPS / year", -r.vps_yearly_cost, format!("~${}/mo hosting", r.vps_monthly_cost)),
        ];
        for (label, value, note) in lines {
            let sign = if value > 0.0 { "+" } else { "" };
            writeln!(
                f,
                "  {:<30} {:>12}  {}",
                label,
                format!("{}{}", sign, format_money(value)),
                note
            )?;
        }
        writeln!(f)?;

        writeln!(f, "12-month trajectory:")?;
        for row in (1..=CHART_ROWS).rev() {
            let threshold = row as f64 / CHART_ROWS as f64;
            let mut line = String::from("  ");
            for point in &self.trajectory {
                // Every bar gets at least one row
                let height = point.height_fraction.max(1.0 / CHART_ROWS as f64);
                let cell = if height + 1e-9 < threshold {
                    ' '
                } else if point.profitable {
                    '#'
                } else {
                    '.'
                };
                line.push(cell);
                line.push(' ');
            }
            writeln!(f, "{}", line.trim_end())?;
        }
        let mut axis = String::from("  ");
        for point in &self.trajectory {
            axis.push(if point.is_break_even_month { '^' } else { '-' });
            axis.push(' ');
        }
        writeln!(f, "{}", axis.trim_end())?;
        writeln!(f, "  '.' pre-breakeven  '#' profitable  '^' break-even month")?;

        if let Some(note) = scenarios::scenario_note(self.scenario) {
            writeln!(f)?;
            writeln!(f, "Note: {}", note)?;
        }

        Ok(())
    }
}
