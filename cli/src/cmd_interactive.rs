// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::io::{self, BufRead, Write};

use calcmd_core::{Config as CoreConfig, Interpreter};

use crate::Config;

const BANNER: &str = "Calendar App Interactive Mode. Type 'exit' to quit.";

/// Read commands from standard input until `exit` or end of input.
#[derive(Debug, Clone, Copy)]
pub struct CmdInteractive;

impl CmdInteractive {
    pub fn run(self, core: &CoreConfig, config: &Config) -> Result<(), Box<dyn Error>> {
        tracing::debug!("starting interactive session");
        let mut interpreter = Interpreter::stdout(core);
        repl(&mut interpreter, io::stdin().lock(), &config.prompt)?;
        Ok(())
    }
}

/// Runs the prompt loop over `input`, writing to the interpreter's sink.
///
/// A failed command prints `Error: <message>` and the loop goes on. Blank
/// lines are ignored.
pub fn repl<R: BufRead, W: Write>(
    interpreter: &mut Interpreter<W>,
    input: R,
    prompt: &str,
) -> io::Result<()> {
    writeln!(interpreter.output_mut(), "{BANNER}")?;

    let mut lines = input.lines();
    loop {
        let out = interpreter.output_mut();
        write!(out, "{prompt}")?;
        out.flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let command = line.trim();
        if command.eq_ignore_ascii_case("exit") {
            writeln!(interpreter.output_mut(), "Exiting.")?;
            break;
        } else if command.is_empty() {
            continue;
        }

        if let Err(e) = interpreter.execute(command) {
            tracing::debug!(error = %e, "command failed");
            writeln!(interpreter.output_mut(), "Error: {e}")?;
        }
    }
    Ok(())
}
