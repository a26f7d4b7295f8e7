//! Direct operating cost categories and the end-to-end analysis.
//!
//! [`analysis::analyze`] is the entry point: it validates inputs, resolves prices, and
//! combines capital, maintenance, and per-flight cash costs into annual, per-flight, and
//! per-hour views.

pub mod aggregate;
pub mod analysis;
pub mod fixed;
pub mod variable;

pub use aggregate::CostBreakdown;
pub use analysis::{AnalysisError, AnalysisResult, analyze, analyze_default_year};
pub use fixed::FixedCosts;
pub use variable::VariableCosts;
