use std::io::{self, Write};

use crossterm::style::Stylize;
use gverify_lib::{Outcome, Report, Verdict};

/// Prints one colored line per verdict to stdout
pub struct Console;

impl Console {
    fn render(verdict: &Verdict) -> String {
        let glyph = match verdict.outcome {
            Outcome::Valid => format!("{:>4}", "✓").green(),
            Outcome::Invalid => format!("{:>4}", "⨯").red(),
            Outcome::Error(_) => format!("{:>4}", "!").yellow(),
        };
        format!("{glyph} {verdict}")
    }
}

impl Report for Console {
    fn report(&self, verdict: &Verdict) {
        let line = Self::render(verdict);
        // a single write on the locked handle keeps lines from interleaving
        let mut stdout = io::stdout().lock();
        if let Err(e) = writeln!(stdout, "{line}") {
            tracing::error!(error = %e, "unable to write to stdout");
        }
    }
}
