//! Level Validator
//!
//! Validation engine for a declarative 2D puzzle level format.
//!
//! This library provides:
//! - Strict document loading (file-size ceiling, schema-shape decode)
//! - Field validation (name rules, whole numbers, coordinate bounds)
//! - Spatial overlap constraints over canonical cell/edge keys
//! - Channel and geometry consistency checks
//!
//! Validation is a pure function from a document to a verdict: either
//! `Accepted` (possibly with advisory warnings) or `Rejected` with the
//! full list of diagnostics. The document is never mutated and no entity
//! is silently dropped or corrected.

pub mod config;
pub mod level;
pub mod loader;
pub mod validation;

// Re-exports for clean public API
pub use config::Config;
pub use level::{Entity, Level};
pub use loader::{LoadError, load_level};
pub use validation::{Diagnostic, Severity, Verdict, validate_bytes, validate_level};
