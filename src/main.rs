//! Transcription ROI Calculator
//!
//! Command-line front end: one-shot calculations and an interactive session.

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use log::{debug, info};
use serde_json::json;

use roi_calculator::CatalogError;
use roi_calculator::animate::AnimatedNumber;
use roi_calculator::calculator::{self, format_money};
use roi_calculator::models::{InputField, InputSet, ScenarioId};
use roi_calculator::scenarios;
use roi_calculator::session::{Command, HELP, Outcome, Session};

#[derive(Parser)]
#[command(name = "roi-calculator")]
#[command(about = "Year-one ROI of self-hosted transcription versus metered APIs")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the available scenarios and their default inputs
    List,

    /// Show the adjustable inputs and their slider ranges
    Fields,

    /// Calculate year-one savings for a scenario
    Calc {
        /// Scenario (content, consulting, therapy, legal, education)
        #[arg(value_parser = parse_scenario)]
        scenario: ScenarioId,

        /// JSON file holding a full input set (camelCase keys)
        #[arg(long)]
        inputs: Option<PathBuf>,

        #[command(flatten)]
        overrides: Overrides,
    },

    /// Adjust inputs line by line and watch the results update
    Interactive {
        /// Scenario to start on
        #[arg(short, long, default_value = "consulting", value_parser = parse_scenario)]
        scenario: ScenarioId,

        /// Count up to the new net savings after each change
        #[arg(long)]
        animate: bool,
    },
}

/// Per-field overrides. Values are coerced, so junk becomes zero.
#[derive(Args)]
struct Overrides {
    /// Recordings processed per month
    #[arg(long, allow_hyphen_values = true)]
    recordings_per_month: Option<String>,

    /// Minutes of manual processing per recording
    #[arg(long, allow_hyphen_values = true)]
    minutes_manual: Option<String>,

    /// Minutes of automated processing per recording
    #[arg(long, allow_hyphen_values = true)]
    minutes_auto: Option<String>,

    /// Hourly rate in dollars
    #[arg(long, allow_hyphen_values = true)]
    hourly_rate: Option<String>,

    /// Average recording length in minutes
    #[arg(long, allow_hyphen_values = true)]
    avg_recording_minutes: Option<String>,
}

impl Overrides {
    fn apply(&self, session: &mut Session) {
        let pairs = [
            (InputField::RecordingsPerMonth, &self.recordings_per_month),
            (InputField::MinutesManual, &self.minutes_manual),
            (InputField::MinutesAuto, &self.minutes_auto),
            (InputField::HourlyRate, &self.hourly_rate),
            (InputField::AvgRecordingMinutes, &self.avg_recording_minutes),
        ];
        for (field, raw) in pairs {
            if let Some(raw) = raw {
                session.set_field_raw(field, raw);
            }
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::List => {
            if cli.json {
                println!("{}", serde_json::to_string_pretty(scenarios::catalog())?);
            } else {
                println!(
                    "{:<12} {:<20} {:>6} {:>7} {:>5} {:>6} {:>7}",
                    "Key", "Scenario", "Rec/mo", "Manual", "Auto", "Rate", "Avg len"
                );
                println!("{}", "-".repeat(70));
                for s in scenarios::catalog() {
                    let d = &s.defaults;
                    println!(
                        "{:<12} {:<20} {:>6} {:>7} {:>5} {:>6} {:>7}",
                        s.id.key(),
                        s.name,
                        d.recordings_per_month,
                        d.minutes_manual,
                        d.minutes_auto,
                        d.hourly_rate,
                        d.avg_recording_minutes
                    );
                }
            }
        }

        Commands::Fields => {
            if cli.json {
                let fields: Vec<_> = InputField::ALL
                    .iter()
                    .map(|f| {
                        let r = f.range();
                        json!({
                            "key": f.key(),
                            "label": r.label,
                            "min": r.min,
                            "max": r.max,
                            "step": r.step,
                        })
                    })
                    .collect();
                println!("{}", serde_json::to_string_pretty(&fields)?);
            } else {
                for field in InputField::ALL {
                    let r = field.range();
                    println!(
                        "{:<22} {:<26} {}{}{} .. {}{}{} (step {})",
                        field.key(),
                        r.label,
                        r.prefix,
                        r.min,
                        r.suffix,
                        r.prefix,
                        r.max,
                        r.suffix,
                        r.step
                    );
                }
            }
        }

        Commands::Calc {
            scenario,
            inputs,
            overrides,
        } => {
            let mut session = Session::new(scenario);
            if let Some(path) = inputs {
                let loaded = load_inputs(&path)?;
                for field in InputField::ALL {
                    session.set_field(field, field.get(&loaded));
                }
            }
            overrides.apply(&mut session);

            let summary = session.summary();
            if cli.json {
                let report = json!({
                    "scenario": summary.scenario,
                    "inputs": summary.inputs,
                    "result": summary.result,
                    "breakEven": summary.result.break_even(),
                    "speedupPercent": calculator::speedup_percent(&summary.inputs),
                    "trajectory": summary.trajectory,
                    "note": scenarios::scenario_note(summary.scenario),
                });
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("{}", summary);
            }
        }

        Commands::Interactive { scenario, animate } => {
            run_interactive(Session::new(scenario), animate, cli.json)?;
        }
    }

    Ok(())
}

/// Scenario names on the command line are case-insensitive
fn parse_scenario(raw: &str) -> Result<ScenarioId, CatalogError> {
    raw.trim().to_ascii_lowercase().parse()
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

/// Read a full input set from a JSON file
fn load_inputs(path: &Path) -> Result<InputSet> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let inputs: InputSet = serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse input set from {}", path.display()))?;
    info!("Loaded inputs from {}", path.display());
    Ok(inputs)
}

const FRAME: Duration = Duration::from_millis(16);

fn run_interactive(mut session: Session, animate: bool, json: bool) -> Result<()> {
    let origin = Instant::now();
    let mut display = AnimatedNumber::new(session.result().net_savings, origin.elapsed());
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    print_scenarios();
    println!();
    println!("{}", session.summary());
    println!("Type 'help' for commands.");

    loop {
        write!(stdout, "> ")?;
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                println!("Error: {}", e);
                continue;
            }
        };
        debug!("Command: {:?}", command);

        match session.apply(command) {
            Outcome::Summary(summary) => {
                if animate {
                    play_net_savings(&mut display, summary.result.net_savings, origin)?;
                }
                if json {
                    println!("{}", serde_json::to_string_pretty(&summary.result)?);
                } else {
                    println!("{}", summary);
                }
            }
            Outcome::Scenarios => print_scenarios(),
            Outcome::Help => println!("{}", HELP),
            Outcome::Quit => break,
        }
    }

    Ok(())
}

fn print_scenarios() {
    for s in scenarios::catalog() {
        println!("  {} {:<12} {:<20} {}", s.icon, s.id.key(), s.name, s.description);
    }
}

/// Count the net savings figure up (or down) to its new value
fn play_net_savings(display: &mut AnimatedNumber, target: f64, origin: Instant) -> Result<()> {
    let mut stdout = io::stdout();
    display.retarget(target, origin.elapsed());
    while !display.is_settled(origin.elapsed()) {
        let shown = display.sample(origin.elapsed());
        write!(stdout, "\rNet savings: {:>14}", format_money(shown))?;
        stdout.flush()?;
        thread::sleep(FRAME);
    }
    writeln!(stdout, "\rNet savings: {:>14}", format_money(display.target()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parses_calc_overrides() {
        let cli = Cli::try_parse_from([
            "roi-calculator",
            "calc",
            "legal",
            "--hourly-rate",
            "200",
            "--minutes-auto",
            "junk",
        ])
        .unwrap();
        let Commands::Calc {
            scenario,
            overrides,
            inputs,
        } = cli.command
        else {
            panic!("expected calc");
        };
        assert_eq!(scenario, ScenarioId::Legal);
        assert!(inputs.is_none());

        let mut session = Session::new(scenario);
        overrides.apply(&mut session);
        assert_eq!(session.inputs().hourly_rate, 200.0);
        assert_eq!(session.inputs().minutes_auto, 0.0);
        assert_eq!(session.inputs().minutes_manual, 15.0);
    }

    #[test]
    fn cli_accepts_negative_override_values() {
        let cli = Cli::try_parse_from([
            "roi-calculator",
            "calc",
            "consulting",
            "--hourly-rate",
            "-5",
            "--minutes-auto",
            "-2.5",
        ])
        .unwrap();
        let Commands::Calc { overrides, .. } = cli.command else {
            panic!("expected calc");
        };
        let mut session = Session::new(ScenarioId::Consulting);
        overrides.apply(&mut session);
        assert_eq!(session.inputs().hourly_rate, -5.0);
        assert_eq!(session.inputs().minutes_auto, -2.5);
    }

    #[test]
    fn cli_folds_scenario_case() {
        let cli = Cli::try_parse_from(["roi-calculator", "calc", "LEGAL"]).unwrap();
        let Commands::Calc { scenario, .. } = cli.command else {
            panic!("expected calc");
        };
        assert_eq!(scenario, ScenarioId::Legal);
        assert_eq!(parse_scenario(" Therapy "), Ok(ScenarioId::Therapy));
    }

    #[test]
    fn cli_rejects_unknown_scenario() {
        assert!(Cli::try_parse_from(["roi-calculator", "calc", "retail"]).is_err());
    }
}
