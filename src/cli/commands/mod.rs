//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations. Running `flowgate` without a
//! subcommand is the same as `flowgate check`.

pub mod check;
pub mod dispatcher;
pub mod rules;

pub use check::CheckCommand;
pub use dispatcher::{Command, CommandDispatcher, CommandResult};
pub use rules::RulesCommand;
