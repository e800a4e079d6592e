use std::io::{self, Write};

use clap::CommandFactory;
use clap_complete::Shell;

const BIN_NAME: &str = "web3-threatmodel";

/// Print a shell completion script for web3-threatmodel
///
/// Save the output wherever your shell loads completions from, e.g.
/// `web3-threatmodel completions zsh > ~/.zfunc/_web3-threatmodel`.
#[derive(Debug, clap::Parser)]
pub struct Command {
    /// Target shell
    #[arg(value_enum)]
    shell: Shell,
}

impl Command {
    pub fn run(self) {
        self.write(&mut io::stdout());
    }

    fn write(&self, out: &mut dyn Write) {
        let mut cli = super::Cli::command();
        clap_complete::generate(self.shell, &mut cli, BIN_NAME, out);
    }
}
