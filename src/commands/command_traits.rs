//! Command pattern interfaces
//!
//! This module defines the core Command pattern interfaces
//! for the CLI application.

use crate::errors::ExtractResult;

/// How a command finished when it did not hit a fatal error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    /// Everything the command attempted succeeded
    Success,
    /// Some items failed and the caller asked for that to be an error
    PartialFailure,
}

/// Represents an executable command in the application
pub trait Command {
    /// Execute the command
    ///
    /// # Returns
    /// The outcome, or an error for fatal failures
    fn execute(&self) -> ExtractResult<CommandOutcome>;
}

/// Factory for creating commands from CLI arguments
pub trait CommandFactory {
    /// Create a new Command instance based on CLI arguments
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    ///
    /// # Returns
    /// A command that implements the Command trait, or an error
    fn create_command(&self, args: &clap::ArgMatches) -> ExtractResult<Box<dyn Command>>;
}
