// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! calcmd - a line-oriented calendar driven by plain text commands

use std::process::ExitCode;

use calcmd_cli::run;

fn main() -> ExitCode {
    run()
}
