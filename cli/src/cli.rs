// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, ffi::OsString, io, path::PathBuf, process::ExitCode};

use calcmd_core::{APP_NAME, Config as CoreConfig};
use clap::{
    ArgMatches, Command, ValueEnum, ValueHint, arg, builder::styling, crate_version, value_parser,
};
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use crate::cmd_generate_completion::CmdGenerateCompletion;
use crate::cmd_headless::CmdHeadless;
use crate::cmd_interactive::CmdInteractive;
use crate::config::{Config, parse_config};

/// Run the calcmd command-line interface.
pub fn run() -> ExitCode {
    let cli = Cli::parse();
    match cli.and_then(Cli::run) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "Error:".red(), e);
            ExitCode::FAILURE
        }
    }
}

/// Command-line interface
#[derive(Debug)]
pub struct Cli {
    /// Path to the configuration file
    pub config: Option<PathBuf>,

    /// The command to execute
    pub command: Commands,
}

impl Cli {
    /// Create the command-line interface
    pub fn command() -> Command {
        const STYLES: styling::Styles = styling::Styles::styled()
            .header(styling::AnsiColor::Green.on_default().bold())
            .usage(styling::AnsiColor::Green.on_default().bold())
            .literal(styling::AnsiColor::Blue.on_default().bold())
            .placeholder(styling::AnsiColor::Cyan.on_default());

        Command::new(APP_NAME)
            .about("A line-oriented calendar: create, edit, query and export events.")
            .author("Zexin Yuan <aim@yzx9.xyz>")
            .version(crate_version!())
            .styles(STYLES)
            .arg_required_else_help(true)
            .subcommand_negates_reqs(true)
            .arg(
                arg!(-c --config [CONFIG] "Path to the configuration file")
                    .long_help(
                        "\
Path to the configuration file. Defaults to $CALCMD_CONFIG, then to $XDG_CONFIG_HOME/calcmd/config.toml \
on Linux and MacOS, %APPDATA%/calcmd/config.toml on Windows.",
                    )
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::FilePath),
            )
            .arg(
                arg!(--mode <MODE> "Run mode")
                    .ignore_case(true)
                    .value_parser(value_parser!(Mode)),
            )
            .arg(
                arg!([FILE] "Command file, one command per line")
                    .required_if_eq("mode", "headless")
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::FilePath),
            )
            .subcommand(CmdGenerateCompletion::command())
    }

    /// Parse the command-line arguments
    pub fn parse() -> Result<Self, Box<dyn Error>> {
        let commands = Self::command();
        let matches = commands.get_matches();
        Self::from(&matches)
    }

    /// Parse the specified arguments
    pub fn try_parse_from<I, T>(args: I) -> Result<Self, Box<dyn Error>>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let commands = Self::command();
        let matches = commands.try_get_matches_from(args)?;
        Self::from(&matches)
    }

    /// Create a CLI instance from the `ArgMatches`
    pub fn from(matches: &ArgMatches) -> Result<Self, Box<dyn Error>> {
        use Commands::{GenerateCompletion, Headless, Interactive};

        let command = match matches.subcommand() {
            Some((CmdGenerateCompletion::NAME, matches)) => {
                GenerateCompletion(CmdGenerateCompletion::from(matches))
            }
            _ => match matches.get_one::<Mode>("mode") {
                Some(Mode::Interactive) => Interactive(CmdInteractive),
                Some(Mode::Headless) => match matches.get_one::<PathBuf>("FILE") {
                    Some(file) => Headless(CmdHeadless { file: file.clone() }),
                    None => return Err("headless mode requires a command file".into()),
                },
                None => return Err("missing run mode, use --mode interactive|headless".into()),
            },
        };

        let config = matches.get_one("config").cloned();
        Ok(Cli { config, command })
    }

    /// Run the command
    pub fn run(self) -> Result<(), Box<dyn Error>> {
        self.command.run(self.config)
    }
}

/// How commands are fed to the interpreter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Read commands from a prompt
    Interactive,

    /// Replay commands from a file
    Headless,
}

/// The commands available in the CLI
#[derive(Debug, Clone)]
pub enum Commands {
    /// Read commands from a prompt
    Interactive(CmdInteractive),

    /// Replay a command file
    Headless(CmdHeadless),

    /// Generate shell completion
    GenerateCompletion(CmdGenerateCompletion),
}

impl Commands {
    /// Run the command with the given configuration
    #[rustfmt::skip]
    pub fn run(self, config: Option<PathBuf>) -> Result<(), Box<dyn Error>> {
        use Commands::{GenerateCompletion, Headless, Interactive};
        match self {
            Interactive(a) => Self::run_with(config, |core, cli| a.run(core, cli)),
            Headless(a)    => Self::run_with(config, |core, cli| a.run(core, cli)),
            GenerateCompletion(a) => a.run(),
        }
    }

    fn run_with<F>(config: Option<PathBuf>, f: F) -> Result<(), Box<dyn Error>>
    where
        F: FnOnce(&CoreConfig, &Config) -> Result<(), Box<dyn Error>>,
    {
        let (core_config, config) = parse_config(config)?;
        init_tracing(&config.log_level);
        tracing::debug!(?core_config, ?config, "configuration loaded");
        f(&core_config, &config)
    }
}

/// Install the stderr log subscriber. `RUST_LOG` wins over the configured level.
fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
    if installed.is_err() {
        tracing::debug!("log subscriber already installed");
    }
}
