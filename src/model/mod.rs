pub mod estimate;
pub mod project;

pub use estimate::{
    CostBreakdown, Estimate, EstimateStatus, Gst, LayoutType, MaterialLevel, Milestone,
    ProjectDetails, RoomSpec, RoomType,
};
pub use project::{
    Project, ProjectStatus, SiteLog, SitePhoto, Task, TaskCategory, TaskStatus, Zone, ZoneUpdate,
};
