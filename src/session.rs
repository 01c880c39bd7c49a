//! Interactive session state: active scenario plus current inputs
//!
//! The session is the single owner of the mutable UI state. Every change is
//! applied synchronously and the result is recomputed on demand.

use std::str::FromStr;

use log::debug;

use crate::calculator::{self, Summary};
use crate::error::InputError;
use crate::input::{coerce_number, parse_assignment};
use crate::models::{CalculationResult, InputField, InputSet, ScenarioId};
use crate::scenarios;

#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    active: ScenarioId,
    inputs: InputSet,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(ScenarioId::default())
    }
}

impl Session {
    /// Start a session on `scenario` with its default inputs
    pub fn new(scenario: ScenarioId) -> Self {
        Self {
            active: scenario,
            inputs: scenarios::lookup(scenario).defaults,
        }
    }

    pub fn active(&self) -> ScenarioId {
        self.active
    }

    pub fn inputs(&self) -> &InputSet {
        &self.inputs
    }

    /// Switch scenario. Always discards manual edits, even when re-selecting
    /// the active scenario.
    pub fn select_scenario(&mut self, scenario: ScenarioId) {
        debug!("Switching scenario {} -> {}", self.active, scenario);
        self.active = scenario;
        self.inputs = scenarios::lookup(scenario).defaults;
    }

    /// Restore the active scenario's defaults
    pub fn reset(&mut self) {
        self.select_scenario(self.active);
    }

    /// Update a single field, leaving the other four untouched
    pub fn set_field(&mut self, field: InputField, value: f64) {
        debug!("Setting {} = {}", field, value);
        field.set(&mut self.inputs, value);
    }

    /// Update a single field from user text, coercing unparseable input to zero
    pub fn set_field_raw(&mut self, field: InputField, raw: &str) {
        self.set_field(field, coerce_number(raw));
    }

    /// Fresh calculation for the current state
    pub fn result(&self) -> CalculationResult {
        calculator::compute(&self.inputs, self.active)
    }

    pub fn summary(&self) -> Summary {
        calculator::summarize(&self.inputs, self.active)
    }

    /// Apply one interactive command and describe what should be shown
    pub fn apply(&mut self, command: Command) -> Outcome {
        match command {
            Command::Select(id) => {
                self.select_scenario(id);
                Outcome::Summary(Box::new(self.summary()))
            }
            Command::Set(field, value) => {
                self.set_field(field, value);
                Outcome::Summary(Box::new(self.summary()))
            }
            Command::Reset => {
                self.reset();
                Outcome::Summary(Box::new(self.summary()))
            }
            Command::Show => Outcome::Summary(Box::new(self.summary())),
            Command::List => Outcome::Scenarios,
            Command::Help => Outcome::Help,
            Command::Quit => Outcome::Quit,
        }
    }
}

/// A single line of interactive input
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    Select(ScenarioId),
    Set(InputField, f64),
    Show,
    Reset,
    List,
    Help,
    Quit,
}

/// What the front end should render after a command
#[derive(Debug)]
pub enum Outcome {
    Summary(Box<Summary>),
    Scenarios,
    Help,
    Quit,
}

pub const HELP: &str = "\
Commands:
  scenario <name>       switch scenario (resets all inputs)
  set <field>=<value>   change one input, e.g. set hourlyRate=200
  <field>=<value>       shorthand for set
  show                  print the current results
  reset                 restore the scenario defaults
  list                  list scenarios
  help                  show this help
  quit                  exit";

impl FromStr for Command {
    type Err = InputError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        match word.to_ascii_lowercase().as_str() {
            "" => Err(InputError::EmptyCommand),
            "scenario" | "select" | "use" => Ok(Command::Select(rest.to_ascii_lowercase().parse()?)),
            "set" => {
                let (field, value) = parse_assignment(rest)?;
                Ok(Command::Set(field, value))
            }
            "show" | "calc" => Ok(Command::Show),
            "reset" => Ok(Command::Reset),
            "list" | "scenarios" => Ok(Command::List),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            _ if line.contains('=') => {
                let (field, value) = parse_assignment(line)?;
                Ok(Command::Set(field, value))
            }
            _ => Err(InputError::UnknownCommand(word.to_string())),
        }
    }
}
