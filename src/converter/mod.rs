//! Conversion strategies.
//!
//! A [`Converter`] turns a Selenium/Java document into Playwright code for a
//! dialect. Two implementations exist: the deterministic [`RuleConverter`]
//! and the text-generation backed [`LlmConverter`]. [`FallbackChain`] runs
//! the latter first and substitutes the former on any failure.

mod fallback;
mod llm;
mod rule;

pub use fallback::{ChainOutput, FallbackChain};
pub use llm::{strip_code_fences, LlmConverter, SYSTEM_PROMPT};
pub use rule::RuleConverter;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::engine::Dialect;
use crate::types::Result;

/// Which strategy produced a piece of output. Wire names match `mode_used`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    Llm,
    Regex,
    RegexFallback,
}

impl Strategy {
    pub fn as_str(self) -> &'static str {
        match self {
            Strategy::Llm => "llm",
            Strategy::Regex => "regex",
            Strategy::RegexFallback => "regex_fallback",
        }
    }

    /// Prefix of the artifact directory written for this strategy.
    pub fn artifact_prefix(self) -> &'static str {
        match self {
            Strategy::Llm => "llm_conversion",
            Strategy::Regex | Strategy::RegexFallback => "conversion",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Document-to-document conversion capability.
#[async_trait]
pub trait Converter: Send + Sync + fmt::Debug {
    fn strategy(&self) -> Strategy;

    async fn convert(&self, source: &str, dialect: Dialect) -> Result<String>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategy_wire_names() {
        assert_eq!(Strategy::RegexFallback.as_str(), "regex_fallback");
        assert_eq!(
            serde_json::to_string(&Strategy::RegexFallback).unwrap(),
            "\"regex_fallback\""
        );
        assert_eq!(Strategy::Llm.artifact_prefix(), "llm_conversion");
        assert_eq!(Strategy::RegexFallback.artifact_prefix(), "conversion");
    }
}
