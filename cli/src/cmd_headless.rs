// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;

use calcmd_core::{Config as CoreConfig, Interpreter};

use crate::Config;

/// Replay a command file, one command per line.
#[derive(Debug, Clone)]
pub struct CmdHeadless {
    pub file: PathBuf,
}

impl CmdHeadless {
    pub fn run(self, core: &CoreConfig, config: &Config) -> Result<(), Box<dyn Error>> {
        let file = File::open(&self.file)
            .map_err(|e| format!("cannot open command file {}: {e}", self.file.display()))?;

        tracing::debug!(file = %self.file.display(), "replaying command file");
        let mut interpreter = Interpreter::stdout(core);
        run_script(&mut interpreter, BufReader::new(file), config.echo)?;
        Ok(())
    }
}

/// Runs every line of `input` until `exit` or end of input.
///
/// Each non-blank line is echoed as `> <line>` when `echo` is set. A failed
/// command prints `Error: <message>` and the remaining lines still run.
pub fn run_script<R: BufRead, W: Write>(
    interpreter: &mut Interpreter<W>,
    input: R,
    echo: bool,
) -> io::Result<()> {
    for (index, line) in input.lines().enumerate() {
        let line = line?;
        let command = line.trim();
        if command.is_empty() {
            continue;
        }

        if echo {
            writeln!(interpreter.output_mut(), "> {line}")?;
        }
        if command.eq_ignore_ascii_case("exit") {
            writeln!(interpreter.output_mut(), "Exiting.")?;
            break;
        }

        if let Err(e) = interpreter.execute(command) {
            tracing::info!(line = index + 1, error = %e, "command failed");
            writeln!(interpreter.output_mut(), "Error: {e}")?;
        }
    }
    Ok(())
}
