#![cfg(feature = "std")]

use core::fmt;

use crate::scenario::Outcome;

/// Printable report of a finished run: the final board followed by every
/// ability pattern.
pub struct Report<'a> {
    outcome: &'a Outcome,
}

impl<'a> Report<'a> {
    pub fn new(outcome: &'a Outcome) -> Self {
        Self { outcome }
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "===== FINAL BOARD (0=water, 3=ship, 5=effect) =====")?;
        writeln!(f)?;
        write!(f, "{}", self.outcome.display)?;
        for (ability, pattern) in self.outcome.patterns.iter() {
            writeln!(f)?;
            writeln!(
                f,
                "{} PATTERN (1 = affected):",
                ability.name().to_uppercase()
            )?;
            write!(f, "{}", pattern)?;
        }
        Ok(())
    }
}
