//! Shared types and planning logic for the inventory planner
//!
//! This crate holds the domain models, the order planner and the shortage
//! reporter. Everything here is pure: the backend loads the feeds and the
//! WASM bindings reuse the planner in the browser.

pub mod models;
pub mod planning;
pub mod reporting;
pub mod types;
pub mod validation;

pub use models::*;
pub use planning::*;
pub use reporting::*;
pub use types::*;
pub use validation::*;
