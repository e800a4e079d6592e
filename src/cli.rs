use std::path::PathBuf;

mod compare;
mod completions;
mod export;
mod risk;
mod search;
mod table;
mod terminal;

use clap::ArgAction;
use threatmodel::{render, render_named, Config, Registry, Section};
use tracing::{debug, instrument};

#[derive(Debug, clap::Parser)]
#[command(name = "web3-threatmodel", version, about)]
pub struct Cli {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a TOML file with output preferences
    #[arg(long, value_name = "PATH", global = true)]
    config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(flatten)]
    print: Print,

    #[command(subcommand)]
    command: Option<Command>,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        Self::setup_logging(self.verbose);

        if self.no_color {
            terminal::disable_color();
        }

        let config = match &self.config {
            Some(path) => Config::load(path)?,
            None => Config::default(),
        };
        let registry = Registry::builtin()?;

        match self.command {
            Some(command) => command.run(&registry, &config),
            None => {
                print!("{}", self.print.output(&registry)?);
                Ok(())
            }
        }
    }

    fn setup_logging(verbosity: u8) {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let level = match verbosity {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        };

        let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

        // stdout carries the threat model text, so logs go to stderr
        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_thread_names(false)
            .with_line_number(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}

#[derive(Debug, Default, clap::Args)]
pub struct Print {
    /// List available profile keys and exit
    #[arg(long)]
    list_profiles: bool,

    /// Profile to print (see --list-profiles)
    #[arg(short, long, value_name = "KEY")]
    profile: Option<String>,

    /// Print only a single section instead of the full threat model
    ///
    /// One of: overview, assets, adversaries, attack_surfaces, mitigations,
    /// full. Case-insensitive.
    #[arg(short, long, value_name = "NAME")]
    section: Option<String>,
}

impl Print {
    #[instrument(level = "debug", skip(registry))]
    fn output(&self, registry: &Registry) -> anyhow::Result<String> {
        if self.list_profiles {
            if self.profile.is_some() || self.section.is_some() {
                debug!("--list-profiles takes precedence; ignoring --profile and --section");
            }
            return Ok(registry
                .list_keys()
                .into_iter()
                .map(|key| format!("{key}\n"))
                .collect());
        }

        let key = self
            .profile
            .as_deref()
            .ok_or(MissingArgumentError("--profile"))?;
        let profile = registry.get(key)?;

        let rendered = match &self.section {
            Some(section) => render_named(profile, section)?,
            None => render(profile, Section::Full),
        };
        Ok(rendered.to_string())
    }
}

/// A required command-line option was not given.
#[derive(Debug, thiserror::Error)]
#[error("missing required option '{0}' (use --list-profiles to see the available profiles)")]
pub struct MissingArgumentError(&'static str);

#[derive(Debug, clap::Parser)]
pub enum Command {
    /// Search the rendered threat models for a query string
    Search(search::Command),

    /// Export every threat model to its own file
    Export(export::Command),

    /// Show a unified diff between two threat models
    Compare(compare::Command),

    /// Print a Markdown table of the available profiles
    Table(table::Command),

    /// Print a qualitative risk matrix for a profile
    Risk(risk::Command),

    /// Generate shell completion scripts
    Completions(completions::Command),
}

impl Command {
    fn run(self, registry: &Registry, config: &Config) -> anyhow::Result<()> {
        match self {
            Self::Search(command) => command.run(registry, config)?,
            Self::Export(command) => command.run(registry, config)?,
            Self::Compare(command) => command.run(registry)?,
            Self::Table(command) => command.run(registry)?,
            Self::Risk(command) => command.run()?,
            Self::Completions(command) => command.run(),
        }
        Ok(())
    }
}
