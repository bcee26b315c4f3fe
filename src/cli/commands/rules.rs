//! Rules command implementation.
//!
//! `flowgate rules` lists the built-in rules in the order they run.

use std::io::Write;

use crate::error::Result;
use crate::lint::RuleRegistry;

use super::dispatcher::{Command, CommandResult};

/// The rules command implementation.
#[derive(Debug, Default)]
pub struct RulesCommand;

impl RulesCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for RulesCommand {
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult> {
        let registry = RuleRegistry::with_builtins();
        for (index, rule) in registry.iter().enumerate() {
            writeln!(
                out,
                "{:>2}. {:<22} {:<8} {}",
                index + 1,
                rule.id().0,
                rule.default_severity().to_string(),
                rule.description()
            )?;
        }
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_rules_in_execution_order() {
        let mut out = Vec::new();
        let result = RulesCommand::new().execute(&mut out).unwrap();
        let output = String::from_utf8(out).unwrap();

        assert!(result.success);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 7);
        assert!(lines[0].starts_with(" 1. required-keys"));
        assert!(lines[6].starts_with(" 7. repo-references"));
        assert!(lines[2].contains("warning"));
    }
}
