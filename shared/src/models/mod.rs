//! Domain models for the inventory planner

mod catalog;
mod forecast;
mod order;
mod report;
mod stock;

pub use catalog::*;
pub use forecast::*;
pub use order::*;
pub use report::*;
pub use stock::*;
