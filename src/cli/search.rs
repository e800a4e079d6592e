use std::fmt::Write;

use anyhow::Context;
use threatmodel::{
    render,
    search::{search, Matcher, Scope},
    Config, Registry, Section,
};
use tracing::instrument;

/// Search the rendered threat models for a query string
#[derive(Debug, clap::Parser)]
pub struct Command {
    /// Text to search for
    query: String,

    /// Limit the search to a profile (repeatable)
    #[arg(short = 'p', long = "profile", value_name = "KEY")]
    profiles: Vec<String>,

    /// Limit the search to a single section
    #[arg(short, long, value_name = "NAME")]
    section: Option<String>,

    /// Case-insensitive search
    #[arg(short, long)]
    ignore_case: bool,

    /// Treat the query as a regular expression
    #[arg(long)]
    regex: bool,

    /// Print the whole threat model of every matching profile
    #[arg(long)]
    show_context: bool,

    /// Print the searched profile keys before the results
    #[arg(long)]
    show_profiles: bool,
}

impl Command {
    #[instrument(level = "debug", skip(registry, config))]
    pub fn run(self, registry: &Registry, config: &Config) -> anyhow::Result<()> {
        if self.show_profiles {
            println!("{}", self.searched_profiles(registry)?);
        }
        print!("{}", self.report(registry, config)?);
        Ok(())
    }

    /// The `Profiles: ...` line naming every profile in scope.
    fn searched_profiles(&self, registry: &Registry) -> anyhow::Result<String> {
        let scope = Scope {
            profiles: self.profiles.clone(),
            section: Section::Full,
        };
        let keys: Vec<_> = scope
            .select(registry)?
            .into_iter()
            .map(|profile| profile.key())
            .collect();
        Ok(format!("Profiles: {}", keys.join(", ")))
    }

    fn report(&self, registry: &Registry, config: &Config) -> anyhow::Result<String> {
        let section: Section = self
            .section
            .as_deref()
            .map(str::parse::<Section>)
            .transpose()?
            .unwrap_or_default();
        let ignore_case = self.ignore_case || config.ignore_case;
        let matcher = if self.regex {
            Matcher::regex(&self.query, ignore_case)
                .with_context(|| format!("invalid regular expression '{}'", self.query))?
        } else {
            Matcher::substring(&self.query, ignore_case)
        };
        let scope = Scope {
            profiles: self.profiles.clone(),
            section,
        };

        let mut out = String::new();
        let hits = search(registry, &matcher, &scope)?;
        if hits.is_empty() {
            anyhow::bail!("no matches for '{}' in the selected profiles", self.query);
        }

        for profile in scope.select(registry)? {
            let matching: Vec<_> = hits
                .iter()
                .filter(|hit| hit.profile == profile.key())
                .collect();
            if matching.is_empty() {
                continue;
            }

            write!(out, "=== Profile: {}", profile.key())?;
            if self.section.is_some() {
                write!(out, " | Section: {section}")?;
            }
            writeln!(out, " ===")?;

            if self.show_context {
                write!(out, "{}", render(profile, section))?;
            } else {
                for hit in matching {
                    writeln!(out, "  [{}] {}", hit.part, hit.line)?;
                }
            }
            writeln!(out)?;
        }
        Ok(out)
    }
}
