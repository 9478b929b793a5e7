//! # sel2pw - Selenium/Java to Playwright test converter
//!
//! Rewrites Selenium/Java test code into Playwright TypeScript/JavaScript:
//! - Deterministic, line-oriented rule engine (no parser, no AST)
//! - Optional text-generation strategy (Ollama) with rule-engine fallback
//! - Timestamped artifact persistence
//! - HTTP shim and CLI front ends
//!
//! ## Architecture
//!
//! ```text
//!   HTTP / CLI  →  ConversionService ──→ FallbackChain ──→ LlmConverter (Ollama)
//!                        │                     │
//!                        │                     └─ on failure ─→ RuleConverter
//!                        │                                          │
//!                        └─→ ArtifactStore           Engine: Rule Table → Classifier
//!                                                            → Post-Processor → Assembler
//! ```

// Enforce strict safety at compile time
#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]
#![warn(rust_2018_idioms)]

pub mod converter;
pub mod engine;
pub mod http;
pub mod ollama;
pub mod service;
pub mod storage;
pub mod types;
pub mod validation;

// Internal utilities
pub mod observability;

pub use engine::{convert, Dialect, Engine};
pub use types::{Config, Error, Result};
