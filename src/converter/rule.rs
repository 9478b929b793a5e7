use async_trait::async_trait;

use super::{Converter, Strategy};
use crate::engine::{Dialect, Engine};
use crate::types::Result;

/// Deterministic strategy backed by the rule engine. Never fails.
#[derive(Debug, Clone)]
pub struct RuleConverter {
    engine: Engine,
}

impl RuleConverter {
    pub fn new(engine: Engine) -> Self {
        Self { engine }
    }

    pub fn standard() -> Self {
        Self::new(crate::engine::standard_engine().clone())
    }

    /// Synchronous entry point; the trait method only wraps this.
    pub fn convert_now(&self, source: &str, dialect: Dialect) -> String {
        self.engine.convert(source, dialect)
    }
}

#[async_trait]
impl Converter for RuleConverter {
    fn strategy(&self) -> Strategy {
        Strategy::Regex
    }

    async fn convert(&self, source: &str, dialect: Dialect) -> Result<String> {
        Ok(self.convert_now(source, dialect))
    }
}
