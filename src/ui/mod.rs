//! Operator-facing output
//!
//! Status lines go to stdout, warnings to stderr. Detail lines are only shown
//! with `--verbose`.

use console::Style;

/// Prints progress and results for one command run
#[derive(Debug, Clone, Copy, Default)]
pub struct Reporter {
    verbose: bool,
}

impl Reporter {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    /// A regular progress line
    pub fn step(&self, message: impl AsRef<str>) {
        println!("{}", message.as_ref());
    }

    /// A line shown only in verbose mode
    pub fn detail(&self, message: impl AsRef<str>) {
        if self.verbose {
            println!("  {}", Style::new().dim().apply_to(message.as_ref()));
        }
    }

    pub fn success(&self, message: impl AsRef<str>) {
        println!(
            "{} {}",
            Style::new().green().bold().apply_to("✓"),
            message.as_ref()
        );
    }

    pub fn failure(&self, message: impl AsRef<str>) {
        println!(
            "{} {}",
            Style::new().red().bold().apply_to("✗"),
            message.as_ref()
        );
    }

    pub fn warn(&self, message: impl AsRef<str>) {
        eprintln!(
            "{} {}",
            Style::new().yellow().bold().apply_to("Warning:"),
            message.as_ref()
        );
    }

    /// A section heading followed by numbered entries
    pub fn numbered_list<I, S>(&self, heading: &str, entries: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        println!();
        println!("{}", Style::new().bold().apply_to(heading));
        println!();
        for (i, entry) in entries.into_iter().enumerate() {
            println!("  {}. {}", i + 1, entry.as_ref());
        }
        println!();
    }
}
