//! Shared test fixtures for Armorsmith crates.
//!
//! This crate only depends on `armorsmith-core` among the workspace crates,
//! so every crate in the workspace can use it as a dev-dependency.
//!
//! - [`scenario`] - the five-piece "Attack" catalog and its conditions
//! - [`builders`] - small constructors for ad-hoc catalogs
//! - [`logging`] - counting tracing events by level
//!
//! # Usage
//!
//! ```toml
//! [dev-dependencies]
//! armorsmith-test = { workspace = true }
//! ```
//!
//! ```
//! use armorsmith_test::scenario::{attack_catalog, attack_condition};
//!
//! let catalog = attack_catalog();
//! assert_eq!(catalog.len(), 6);
//! assert_eq!(attack_condition().min_defense, Some(100));
//! ```

pub mod builders;
pub mod logging;
pub mod scenario;

pub use builders::{armor, catalog_of, deco};
pub use logging::count_events;
pub use scenario::{attack_catalog, attack_condition, ATTACK, ATTACK_JEWEL, GUARD};
