//! Business logic services for the inventory planner

pub mod inventory;
pub mod planning;

pub use inventory::InventoryService;
pub use planning::PlanningService;
