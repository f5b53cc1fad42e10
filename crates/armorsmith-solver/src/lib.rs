//! Armorsmith Solver Engine
//!
//! This crate turns a search condition into a mixed-integer linear model
//! and enumerates equipment sets from it:
//! - Model builder (variables, constraints, objective)
//! - Solver backend seam, with a HiGHS implementation
//! - Searcher: repeated solves with dominance elimination and exclusion rows
//! - Extra-skill feasibility scanner running independent searches in parallel
//! - Cooperative cancellation

pub mod backend;
pub mod cancel;
pub mod model;
pub mod scanner;
pub mod searcher;

pub use backend::{HighsBackend, SolveOutcome, SolveStatus, SolverBackend};
pub use cancel::CancelFlag;
pub use model::{Column, LinearModel, ModelBuilder, Row, RowTag, VarId};
pub use scanner::{ExtraSkillScanner, ScanOutcome};
pub use searcher::{SearchState, Searcher};
