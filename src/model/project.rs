use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Execution state of a single task. Wire names keep the spaces.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskStatus {
    #[default]
    #[serde(rename = "Not Started")]
    NotStarted,
    #[serde(rename = "In Progress")]
    InProgress,
    Delayed,
    Done,
}

/// Work discipline a task belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskCategory {
    Design,
    SiteMarking,
    Furniture,
    Finishing,
}

/// A single unit of work inside a zone.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub due_date: Option<NaiveDate>,
    pub status: TaskStatus,
    pub category: TaskCategory,
    pub assigned_to: Option<Uuid>,
    pub completed_at: Option<DateTime<Utc>>,
    pub created: DateTime<Utc>,
}

impl Task {
    pub fn new(title: impl Into<String>, category: TaskCategory) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            description: String::new(),
            due_date: None,
            status: TaskStatus::default(),
            category,
            assigned_to: None,
            completed_at: None,
            created: Utc::now(),
        }
    }

    /// Change status, stamping `completed_at` when the task lands on Done
    /// and clearing it if the task is reopened.
    pub fn set_status(&mut self, status: TaskStatus) {
        self.status = status;
        self.completed_at = match status {
            TaskStatus::Done => Some(Utc::now()),
            _ => None,
        };
    }
}

/// A photo attached to a site log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SitePhoto {
    pub url: String,
    pub caption: Option<String>,
}

/// A dated site update for a zone: photos plus free-form notes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteLog {
    pub photos: Vec<SitePhoto>,
    pub notes: String,
    pub created_by: Uuid,
    pub created: DateTime<Utc>,
}

impl SiteLog {
    pub fn new(notes: impl Into<String>, created_by: Uuid) -> Self {
        Self {
            photos: Vec::new(),
            notes: notes.into(),
            created_by,
            created: Utc::now(),
        }
    }
}

/// A physical sub-area of a project (e.g. Kitchen) with its own task list,
/// site logs, and derived progress.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Zone {
    pub name: String,
    pub description: String,
    pub tasks: Vec<Task>,
    pub logs: Vec<SiteLog>,
    /// Derived from `tasks` — refreshed before every save, never edited.
    pub progress: u8,
}

impl Zone {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            tasks: Vec::new(),
            logs: Vec::new(),
            progress: 0,
        }
    }
}

/// Lifecycle state of a project.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    #[default]
    Planning,
    InProgress,
    OnHold,
    Completed,
}

/// A site-log entry paired with the zone it came from, for client-facing
/// update feeds.
#[derive(Debug, Clone, Serialize)]
pub struct ZoneUpdate<'a> {
    pub zone: &'a str,
    pub log: &'a SiteLog,
}

/// An execution project for a signed client, broken into zones.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: Uuid,
    pub name: String,
    pub client: Uuid,
    pub lead: Uuid,
    pub status: ProjectStatus,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub zones: Vec<Zone>,
    /// Derived from zone/task state — refreshed before every save.
    pub overall_progress: u8,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
}

impl Project {
    pub fn new(name: impl Into<String>, client: Uuid, lead: Uuid) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            client,
            lead,
            status: ProjectStatus::default(),
            start_date: None,
            end_date: None,
            zones: Vec::new(),
            overall_progress: 0,
            created: now,
            modified: now,
        }
    }

    /// Touch the modified timestamp.
    pub fn touch(&mut self) {
        self.modified = Utc::now();
    }

    /// Find a zone by name.
    pub fn zone(&self, name: &str) -> Option<&Zone> {
        self.zones.iter().find(|z| z.name == name)
    }

    /// Find a zone by name, mutably.
    pub fn zone_mut(&mut self, name: &str) -> Option<&mut Zone> {
        self.zones.iter_mut().find(|z| z.name == name)
    }

    /// Newest `n` site logs across all zones, newest first, tagged with
    /// the zone they belong to.
    pub fn recent_updates(&self, n: usize) -> Vec<ZoneUpdate<'_>> {
        let mut updates: Vec<ZoneUpdate<'_>> = self
            .zones
            .iter()
            .flat_map(|z| z.logs.iter().map(|log| ZoneUpdate { zone: &z.name, log }))
            .collect();
        updates.sort_by(|a, b| b.log.created.cmp(&a.log.created));
        updates.truncate(n);
        updates
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_status_stamps_completed_at() {
        let mut task = Task::new("Wardrobe carcass", TaskCategory::Furniture);
        assert!(task.completed_at.is_none());

        task.set_status(TaskStatus::Done);
        assert!(task.completed_at.is_some());

        // Reopening clears the completion stamp.
        task.set_status(TaskStatus::InProgress);
        assert!(task.completed_at.is_none());
    }

    #[test]
    fn task_status_wire_names() {
        assert_eq!(
            serde_json::to_string(&TaskStatus::NotStarted).unwrap(),
            "\"Not Started\""
        );
        assert_eq!(
            serde_json::to_string(&TaskCategory::SiteMarking).unwrap(),
            "\"site_marking\""
        );
    }

    #[test]
    fn recent_updates_are_newest_first_across_zones() {
        let author = Uuid::new_v4();
        let mut project = Project::new("Villa Marigold", Uuid::new_v4(), Uuid::new_v4());

        let mut kitchen = Zone::new("Kitchen");
        let mut old = SiteLog::new("counter slab in", author);
        old.created = Utc::now() - chrono::Duration::days(3);
        kitchen.logs.push(old);

        let mut living = Zone::new("Living Room");
        living.logs.push(SiteLog::new("false ceiling done", author));

        project.zones.push(kitchen);
        project.zones.push(living);

        let updates = project.recent_updates(3);
        assert_eq!(updates.len(), 2);
        assert_eq!(updates[0].zone, "Living Room");
        assert_eq!(updates[1].zone, "Kitchen");

        assert_eq!(project.recent_updates(1).len(), 1);
    }
}
