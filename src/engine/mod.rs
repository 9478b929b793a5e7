//! Deterministic Selenium/Java → Playwright conversion engine.
//!
//! Pipeline over the lines of one document:
//! Rule Table → Structural Classifier → Post-Processor → Assembler.
//!
//! The engine is pure: no I/O, no shared mutable state, no failure mode.
//! Lines nothing recognizes pass through unchanged.

pub mod args;
pub mod assembler;
pub mod classifier;
pub mod dialect;
pub mod line;
pub mod mappings;
pub mod postprocess;
pub mod rules;

pub use assembler::{assemble, BLOCK_CLOSE, WRAPPER_OPEN};
pub use classifier::{classify, Classified};
pub use dialect::{Dialect, MODULE_HEADER, REQUIRE_HEADER};
pub use line::SourceLine;
pub use postprocess::postprocess;
pub use rules::{RewriteRule, Rewritten, RuleKind, RuleSpec, RuleTable};

use once_cell::sync::Lazy;
use std::sync::Arc;
use tracing::debug;

use crate::types::Result;

static STANDARD_ENGINE: Lazy<Engine> =
    Lazy::new(|| Engine::standard().expect("built-in rule table compiles"));

/// Converts whole documents with a shared, read-only rule table.
#[derive(Debug, Clone)]
pub struct Engine {
    rules: Arc<RuleTable>,
}

impl Engine {
    pub fn new(rules: Arc<RuleTable>) -> Self {
        Self { rules }
    }

    /// Engine over the built-in mappings.
    pub fn standard() -> Result<Self> {
        Ok(Self::new(Arc::new(RuleTable::standard()?)))
    }

    pub fn convert(&self, source: &str, dialect: Dialect) -> String {
        let all = line::split_lines(source);
        let originals = assembler::strip_header(&all);

        let rewritten: Vec<Rewritten> = originals.iter().map(|l| self.rules.rewrite(l)).collect();
        let classified = classify(originals, rewritten);
        let body = postprocess(classified.lines);

        debug!(
            input_lines = originals.len(),
            output_lines = body.len(),
            detected_test_construct = classified.inside_body,
            dialect = %dialect,
            "engine conversion finished"
        );
        assemble(&body, classified.inside_body, dialect)
    }
}

/// Convert with the process-wide standard engine.
pub fn convert(source: &str, dialect: Dialect) -> String {
    STANDARD_ENGINE.convert(source, dialect)
}

/// The process-wide standard engine.
pub fn standard_engine() -> &'static Engine {
    &STANDARD_ENGINE
}
