use std::fmt::Write;

use threatmodel::{domain::RiskLevel, RiskProfile};
use tracing::instrument;

use super::terminal::Colorize;

/// Print a qualitative risk matrix for a profile
#[derive(Debug, clap::Parser)]
pub struct Command {
    /// Profile to show
    #[arg(short, long, value_name = "KEY", default_value = "aztec")]
    profile: String,

    /// List the profiles that have a risk matrix and exit
    #[arg(long)]
    list_profiles: bool,

    /// Print the matrix as JSON
    #[arg(long)]
    json: bool,
}

impl Command {
    #[instrument(level = "debug")]
    pub fn run(self) -> anyhow::Result<()> {
        print!("{}", self.output()?);
        Ok(())
    }

    fn output(&self) -> anyhow::Result<String> {
        let mut out = String::new();

        if self.list_profiles {
            writeln!(out, "Available profiles:")?;
            for profile in RiskProfile::builtin() {
                writeln!(out, "  {:10} - {}", profile.key, profile.name)?;
            }
            return Ok(out);
        }

        let profile = RiskProfile::lookup(&self.profile)?;
        if self.json {
            writeln!(out, "{}", serde_json::to_string_pretty(&profile)?)?;
            return Ok(out);
        }

        writeln!(out, "Profile : {} ({})", profile.name, profile.key)?;
        writeln!(out, "Summary : {}", profile.summary)?;
        writeln!(out)?;
        writeln!(out, "Risk matrix (likelihood x impact):")?;
        writeln!(out)?;
        for (index, cell) in profile.matrix.iter().enumerate() {
            writeln!(out, "{}. Asset      : {}", index + 1, cell.asset)?;
            writeln!(out, "   Threat     : {}", cell.threat)?;
            writeln!(out, "   Likelihood : {}", level(cell.likelihood))?;
            writeln!(out, "   Impact     : {}", level(cell.impact))?;
            writeln!(out, "   Notes      : {}", cell.notes)?;
            writeln!(out)?;
        }
        Ok(out)
    }
}

fn level(level: RiskLevel) -> String {
    let label = level.label();
    match level {
        RiskLevel::Low => label.success(),
        RiskLevel::Medium => label.warning(),
        RiskLevel::High => label.error(),
    }
}
