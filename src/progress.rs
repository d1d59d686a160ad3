//! Progress aggregator: weighted task completion per zone and overall.
//!
//! `overall_progress` and each zone's `progress` are derived values. They
//! are refreshed by [`refresh`] immediately before every project save, so
//! the stored numbers can never go stale relative to task state.

use crate::model::{Project, TaskStatus, Zone};

/// Completion weight a task contributes by status.
pub fn task_weight(status: TaskStatus) -> f64 {
    match status {
        TaskStatus::Done => 1.0,
        TaskStatus::InProgress => 0.5,
        TaskStatus::Delayed => 0.25,
        TaskStatus::NotStarted => 0.0,
    }
}

/// Fractional completion of a zone in [0.0, 1.0]; 0.0 for an empty zone.
///
/// The overall average uses this fractional value directly, so zone-level
/// rounding never leaks into the project number.
pub fn zone_fraction(zone: &Zone) -> f64 {
    if zone.tasks.is_empty() {
        return 0.0;
    }
    let sum: f64 = zone.tasks.iter().map(|t| task_weight(t.status)).sum();
    sum / zone.tasks.len() as f64
}

/// Zone completion as a rounded percentage in [0, 100].
pub fn zone_percent(zone: &Zone) -> u8 {
    (zone_fraction(zone) * 100.0).round() as u8
}

/// Overall project completion as a rounded percentage in [0, 100].
///
/// Zones are averaged unweighted: a one-task zone counts the same as a
/// fifty-task zone. That matches how the studio has always read the
/// number, so it stays.
pub fn overall_percent(project: &Project) -> u8 {
    if project.zones.is_empty() {
        return 0;
    }
    let sum: f64 = project.zones.iter().map(zone_fraction).sum();
    (sum / project.zones.len() as f64 * 100.0).round() as u8
}

/// Recompute every derived progress field from current task state.
///
/// The store calls this unconditionally before writing a project,
/// whatever field actually changed.
pub fn refresh(project: &mut Project) {
    for zone in &mut project.zones {
        zone.progress = zone_percent(zone);
    }
    project.overall_progress = overall_percent(project);
}
