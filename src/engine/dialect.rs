//! Output dialect: module-style TypeScript or require-style JavaScript.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::types::Error;

/// Header emitted for module-style output.
pub const MODULE_HEADER: &str = "import { test, expect } from '@playwright/test';";

/// Header emitted for require-style output.
pub const REQUIRE_HEADER: &str = "const { test, expect } = require('@playwright/test');";

/// Output language variant. Selects the header and the artifact suffix only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Dialect {
    /// `import … from` header, `.ts` artifact.
    #[default]
    #[serde(rename = "typescript", alias = "ts")]
    Module,
    /// `require(…)` header, `.js` artifact.
    #[serde(rename = "javascript", alias = "js")]
    Require,
}

impl Dialect {
    /// Parse a target-language name as sent by clients.
    pub fn from_language(language: &str) -> Option<Self> {
        match language.trim().to_ascii_lowercase().as_str() {
            "typescript" | "ts" => Some(Self::Module),
            "javascript" | "js" => Some(Self::Require),
            _ => None,
        }
    }

    /// Language name used in prompts and on the wire.
    pub fn language(self) -> &'static str {
        match self {
            Self::Module => "typescript",
            Self::Require => "javascript",
        }
    }

    pub fn header(self) -> &'static str {
        match self {
            Self::Module => MODULE_HEADER,
            Self::Require => REQUIRE_HEADER,
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            Self::Module => "ts",
            Self::Require => "js",
        }
    }

    /// File name of the persisted artifact, e.g. `converted_test.ts`.
    pub fn artifact_name(self) -> String {
        format!("converted_test.{}", self.extension())
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.language())
    }
}

impl FromStr for Dialect {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_language(s)
            .ok_or_else(|| Error::validation(format!("Unsupported target_language: {}", s)))
    }
}
