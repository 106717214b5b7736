// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, io};

use clap::{ArgMatches, Command, ValueEnum, arg, value_parser};
use clap_complete::{Generator, generate};

use crate::Cli;

/// Print a completion script for the `calcmd` binary.
#[derive(Debug, Clone, Copy)]
pub struct CmdGenerateCompletion {
    pub shell: Shell,
}

impl CmdGenerateCompletion {
    pub const NAME: &str = "generate-completion";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Print a calcmd completion script for a shell")
            .hide(true)
            .arg(arg!(shell: <SHELL> "Target shell").value_parser(value_parser!(Shell)))
    }

    pub fn from(matches: &ArgMatches) -> Self {
        let shell = matches.get_one::<Shell>("shell").copied();
        Self {
            shell: shell.unwrap_or(Shell::Bash),
        }
    }

    pub fn run(self) -> Result<(), Box<dyn Error>> {
        self.generate(&mut io::stdout());
        Ok(())
    }

    /// Writes the script for `self.shell` covering every flag of [`Cli::command`].
    pub fn generate(self, buf: &mut impl io::Write) {
        use clap_complete::Shell::{Bash, Elvish, Fish, PowerShell, Zsh};

        match self.shell {
            Shell::Bash => write_script(Bash, buf),
            Shell::Elvish => write_script(Elvish, buf),
            Shell::Fish => write_script(Fish, buf),
            Shell::Nushell => write_script(clap_complete_nushell::Nushell, buf),
            Shell::PowerShell => write_script(PowerShell, buf),
            Shell::Zsh => write_script(Zsh, buf),
        }
    }
}

fn write_script(generator: impl Generator, buf: &mut impl io::Write) {
    let mut cli = Cli::command();
    let bin = cli.get_name().to_owned();
    generate(generator, &mut cli, bin, buf);
}

/// Shells with a completion generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    Bash,
    Elvish,
    Fish,
    Nushell,
    #[clap(name = "powershell")]
    #[allow(clippy::enum_variant_names)]
    PowerShell,
    Zsh,
}
