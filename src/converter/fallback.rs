use std::time::Duration;
use tracing::{info, warn};

use super::{Converter, RuleConverter, Strategy};
use crate::engine::Dialect;
use crate::types::{Error, Result};

/// Text produced by the chain, tagged with the strategy that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainOutput {
    pub code: String,
    pub strategy: Strategy,
}

/// Two-strategy chain: a fallible primary bounded by a timeout, then the
/// deterministic rule converter.
#[derive(Debug)]
pub struct FallbackChain {
    primary: Box<dyn Converter>,
    fallback: RuleConverter,
    timeout: Duration,
}

impl FallbackChain {
    pub fn new(primary: Box<dyn Converter>, fallback: RuleConverter, timeout: Duration) -> Self {
        Self {
            primary,
            fallback,
            timeout,
        }
    }

    /// Run the primary; on error or timeout run the fallback. Never fails.
    pub async fn run(&self, source: &str, dialect: Dialect) -> ChainOutput {
        match self.try_primary(source, dialect).await {
            Ok(code) => {
                info!(strategy = %self.primary.strategy(), "primary conversion succeeded");
                ChainOutput {
                    code,
                    strategy: self.primary.strategy(),
                }
            }
            Err(err) => {
                warn!(
                    strategy = %self.primary.strategy(),
                    error = %err,
                    "primary conversion failed, falling back to rule engine"
                );
                ChainOutput {
                    code: self.fallback.convert_now(source, dialect),
                    strategy: Strategy::RegexFallback,
                }
            }
        }
    }

    async fn try_primary(&self, source: &str, dialect: Dialect) -> Result<String> {
        tokio::time::timeout(self.timeout, self.primary.convert(source, dialect))
            .await
            .map_err(|_| {
                Error::timeout(format!(
                    "{} conversion exceeded {}",
                    self.primary.strategy(),
                    humantime::format_duration(self.timeout)
                ))
            })?
    }
}
