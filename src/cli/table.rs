use std::{fs, path::PathBuf};

use anyhow::Context;
use threatmodel::{storage::markdown::profile_table, Registry};
use tracing::{info, instrument};

/// Print a Markdown table of the available profiles
#[derive(Debug, clap::Parser)]
pub struct Command {
    /// Output file path, or '-' for stdout
    #[arg(short, long, value_name = "PATH", default_value = "-")]
    output: PathBuf,
}

impl Command {
    #[instrument(level = "debug", skip(registry))]
    pub fn run(self, registry: &Registry) -> anyhow::Result<()> {
        let table = profile_table(registry);
        if self.output.as_os_str().is_empty() || self.output.as_os_str() == "-" {
            print!("{table}");
            return Ok(());
        }

        fs::write(&self.output, table)
            .with_context(|| format!("failed to write {}", self.output.display()))?;
        info!(path = %self.output.display(), "wrote profile table");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn writes_table_to_file() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("profiles.md");
        let command =
            Command::try_parse_from(["table", "--output", path.to_str().unwrap()]).unwrap();

        command.run(&Registry::builtin().unwrap()).unwrap();

        let contents = fs::read_to_string(path).unwrap();
        assert!(contents.starts_with("| Profile | Description |\n"));
        assert_eq!(contents.lines().count(), 5);
    }

    #[test]
    fn unwritable_path_is_an_error() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("missing").join("profiles.md");
        let command =
            Command::try_parse_from(["table", "--output", path.to_str().unwrap()]).unwrap();

        let error = command.run(&Registry::builtin().unwrap()).unwrap_err();
        assert!(error.to_string().starts_with("failed to write"));
    }
}
