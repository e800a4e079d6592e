use std::path::{Path, PathBuf};

use threatmodel::{
    storage::export::{plan, prepare_dir},
    Config, ExportFormat, ExportOptions, Registry,
};
use tracing::instrument;

use super::terminal::Colorize;

/// Export every threat model to its own file
///
/// Files are named after the profile key. Existing files are overwritten
/// unless --interactive is given.
#[derive(Debug, clap::Parser)]
pub struct Command {
    /// Directory to write files into [default: exports]
    #[arg(long, value_name = "DIR")]
    out_dir: Option<PathBuf>,

    /// File format [default: txt]
    #[arg(long, value_enum)]
    format: Option<ExportFormat>,

    /// Do not wrap Markdown exports in a ```text code block
    #[arg(long)]
    no_code_block: bool,

    /// Heading level for Markdown exports (1-6)
    #[arg(long, value_name = "N")]
    heading_level: Option<u8>,

    /// Ask before overwriting existing files
    #[arg(long)]
    interactive: bool,
}

impl Command {
    #[instrument(level = "debug", skip(registry, config))]
    pub fn run(self, registry: &Registry, config: &Config) -> anyhow::Result<()> {
        let dir = self
            .out_dir
            .clone()
            .unwrap_or_else(|| config.out_dir().to_path_buf());
        let options = self.options(config);

        println!("Found profiles: {}", registry.list_keys().join(", "));
        prepare_dir(&dir)?;
        let shown = std::fs::canonicalize(&dir).unwrap_or_else(|_| dir.clone());
        println!("Writing exports to: {}", shown.display());

        for job in plan(registry, &dir, &options) {
            if self.interactive && job.path().exists() && !confirm_overwrite(job.path())? {
                println!("{}", format!("  - skipped {}", job.path().display()).dim());
                continue;
            }
            job.write()?;
            println!("  - wrote {}", job.path().display());
        }

        println!("{}", "Done.".success());
        Ok(())
    }

    fn options(&self, config: &Config) -> ExportOptions {
        ExportOptions {
            format: self.format.unwrap_or_else(|| config.format()),
            code_block: config.code_block && !self.no_code_block,
            heading_level: self
                .heading_level
                .unwrap_or_else(|| config.heading_level())
                .clamp(1, 6),
        }
    }
}

fn confirm_overwrite(path: &Path) -> anyhow::Result<bool> {
    let confirmed = dialoguer::Confirm::new()
        .with_prompt(format!("Overwrite {}?", path.display()))
        .default(false)
        .interact()?;
    Ok(confirmed)
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use tempfile::tempdir;

    use super::*;

    fn parse(args: &[&str]) -> Command {
        Command::try_parse_from(std::iter::once("export").chain(args.iter().copied()))
            .expect("arguments should parse")
    }

    #[test]
    fn flags_override_config() {
        let mut config = Config::default();
        config.set_format(ExportFormat::Md);

        let options = parse(&["--format", "txt", "--heading-level", "3"]).options(&config);

        assert_eq!(options.format, ExportFormat::Txt);
        assert_eq!(options.heading_level, 3);
        assert!(options.code_block);
    }

    #[test]
    fn config_supplies_defaults() {
        let mut config = Config::default();
        config.set_format(ExportFormat::Md);

        let options = parse(&["--no-code-block"]).options(&config);

        assert_eq!(options.format, ExportFormat::Md);
        assert_eq!(options.heading_level, 1);
        assert!(!options.code_block);
    }

    #[test]
    fn run_writes_into_out_dir() {
        let tmp = tempdir().unwrap();
        let dir = tmp.path().join("out");
        let command = parse(&["--out-dir", dir.to_str().unwrap()]);

        command
            .run(&Registry::builtin().unwrap(), &Config::default())
            .unwrap();

        for key in ["aztec", "zama", "soundness"] {
            assert!(dir.join(format!("{key}.txt")).is_file());
        }
    }
}
