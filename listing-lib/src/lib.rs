#![allow(clippy::needless_return)]

mod columns;
mod error;
mod normalizer;
mod skills;
mod table;
pub mod transforms;
pub mod utils;

// Test utilities - only compiled when testing or with test feature
// #[cfg(test)] alone doesn't work for integration tests (they're external crates)
// The feature flag makes it available to integration tests via dev-dependencies
#[cfg(any(test, feature = "test"))]
pub mod test_utils;

pub use columns::{ColumnRename, canonical_column_name, canonicalize_columns};
pub use error::{NormalizeError, Result};
pub use normalizer::{
    NormalizationReport, RecordNormalizer, RecordNormalizerBuilder, RuleSet, Stage, StageSummary,
    normalize_table,
};
pub use skills::reconcile_skills;
pub use table::{Cell, Table};

pub const ERRORS_LOG_FILE: &str = "errors.log";

/// The only marker allowed downstream for a missing or invalid value.
pub const SENTINEL: &str = "N/A";
