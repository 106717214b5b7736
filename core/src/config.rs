// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use crate::ConflictPolicy;

/// The name of the application.
pub const APP_NAME: &str = "calcmd";

/// Configuration for the calendar engine.
#[derive(Debug, Clone, Default, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Decline conflicting events even without `--autodecline`.
    #[serde(default)]
    pub auto_decline: bool,
}

impl Config {
    /// Conflict policy used when a create command does not ask to decline.
    #[must_use]
    pub fn default_policy(&self) -> ConflictPolicy {
        if self.auto_decline {
            ConflictPolicy::Reject
        } else {
            ConflictPolicy::Warn
        }
    }
}
