use threatmodel::{compare::unified_diff, render, Registry, Section};
use tracing::instrument;

use super::terminal::Colorize;

/// Show a unified diff between two threat models
#[derive(Debug, clap::Parser)]
pub struct Command {
    /// The first profile
    profile_a: String,

    /// The second profile
    profile_b: String,

    /// Compare a single section instead of the full threat model
    #[arg(short, long, value_name = "NAME")]
    section: Option<String>,

    /// Lowercase both sides before comparing
    #[arg(short, long)]
    ignore_case: bool,

    /// Number of context lines around each change
    #[arg(short = 'C', long, value_name = "N", default_value_t = 3)]
    context_lines: usize,

    /// Hide the ---/+++ header lines
    #[arg(long)]
    no_header: bool,
}

impl Command {
    #[instrument(level = "debug", skip(registry))]
    pub fn run(self, registry: &Registry) -> anyhow::Result<()> {
        let lines = self.diff(registry)?;
        if lines.is_empty() {
            println!("Profiles are identical (under the chosen options).");
            return Ok(());
        }
        for line in lines {
            println!("{}", colorize(&line));
        }
        Ok(())
    }

    fn diff(&self, registry: &Registry) -> anyhow::Result<Vec<String>> {
        let section: Section = self
            .section
            .as_deref()
            .map(str::parse::<Section>)
            .transpose()?
            .unwrap_or_default();

        let text = |key: &str| -> anyhow::Result<String> {
            let text = render(registry.get(key)?, section).to_string();
            Ok(if self.ignore_case {
                text.to_lowercase()
            } else {
                text
            })
        };
        let a = text(&self.profile_a)?;
        let b = text(&self.profile_b)?;
        let a: Vec<_> = a.lines().collect();
        let b: Vec<_> = b.lines().collect();

        let label = |key: &str| match &self.section {
            Some(_) => format!("{key} ({section})"),
            None => key.to_string(),
        };

        let mut lines = unified_diff(
            &a,
            &b,
            &label(&self.profile_a),
            &label(&self.profile_b),
            self.context_lines,
        );
        if self.no_header {
            lines.retain(|line| !line.starts_with("--- ") && !line.starts_with("+++ "));
        }
        Ok(lines)
    }
}

fn colorize(line: &str) -> String {
    if line.starts_with("+++") || line.starts_with("---") {
        line.to_string()
    } else if line.starts_with('+') {
        line.success()
    } else if line.starts_with('-') {
        line.error()
    } else if line.starts_with("@@") {
        line.info()
    } else {
        line.to_string()
    }
}
