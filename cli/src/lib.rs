// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Command-line front end for calcmd.
//!
//! Two run modes share one interpreter: `interactive` reads commands from a
//! prompt, `headless` replays a command file.

#![warn(
    trivial_casts,
    trivial_numeric_casts,
    missing_debug_implementations,
    unsafe_code,
    unused_import_braces,
    unused_qualifications,
    clippy::dbg_macro,
    clippy::indexing_slicing,
    clippy::pedantic
)]
#![allow(clippy::missing_errors_doc)]

mod cli;
mod cmd_generate_completion;
mod cmd_headless;
mod cmd_interactive;
mod config;

pub use crate::cli::{Cli, Commands, Mode, run};
pub use crate::cmd_generate_completion::{CmdGenerateCompletion, Shell};
pub use crate::cmd_headless::{CmdHeadless, run_script};
pub use crate::cmd_interactive::{CmdInteractive, repl};
pub use crate::config::{Config, parse_config};
