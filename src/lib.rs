//! Transcription ROI Calculator
//!
//! Year-one comparison between a self-hosted transcription workflow and a
//! pay-per-use external API, for a handful of fixed business scenarios.

pub mod animate;
pub mod calculator;
pub mod error;
pub mod input;
pub mod models;
pub mod scenarios;
pub mod session;

pub use calculator::{compute, trajectory};
pub use error::{CatalogError, InputError};
pub use models::{CalculationResult, InputField, InputSet, ScenarioDefinition, ScenarioId};
pub use session::Session;
