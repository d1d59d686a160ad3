//! Business core for the DesignFlow studio backend: the cost-estimation
//! engine, the project progress aggregator, the domain model both operate
//! on, and a JSON document store that keeps derived progress fresh on
//! every save.
//!
//! The calculators in [`pricing`] and [`progress`] are pure functions —
//! no I/O, no shared state — so request handlers can call them from
//! concurrent requests without coordination.

pub mod error;
pub mod io;
pub mod model;
pub mod pricing;
pub mod progress;

pub use error::Error;
pub use io::{export_estimate_csv, DocumentStore};
pub use model::{CostBreakdown, Estimate, Project, ProjectDetails};
pub use pricing::compute_cost_breakdown;
