//! Error types for catalog lookups and input parsing

use thiserror::Error;

/// Raised when a scenario identifier is outside the fixed set
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("unknown scenario '{0}' (expected one of: content, consulting, therapy, legal, education)")]
    UnknownScenario(String),
}

/// Raised when an interactive command or field assignment cannot be understood
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("unknown input field '{0}'")]
    UnknownField(String),

    #[error("empty command")]
    EmptyCommand,

    #[error("unknown command '{0}' (try 'help')")]
    UnknownCommand(String),

    #[error("malformed assignment '{0}' (expected field=value)")]
    MalformedAssignment(String),

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}
