//! JSON-file document store for estimates and projects.
//!
//! Stands in for the document database: one pretty-printed JSON file per
//! document, keyed by id. Concurrent saves of the same document are
//! last-writer-wins; there is no versioning.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};
use uuid::Uuid;

use crate::error::Error;
use crate::model::{Estimate, Project};
use crate::progress;

/// On-disk document store rooted at a single directory.
pub struct DocumentStore {
    projects_dir: PathBuf,
    estimates_dir: PathBuf,
}

impl DocumentStore {
    /// Open a store rooted at `dir`, creating the layout if needed.
    pub fn open(dir: impl AsRef<Path>) -> Result<Self, Error> {
        let dir = dir.as_ref();
        let projects_dir = dir.join("projects");
        let estimates_dir = dir.join("estimates");
        fs::create_dir_all(&projects_dir).map_err(|e| Error::io(&projects_dir, e))?;
        fs::create_dir_all(&estimates_dir).map_err(|e| Error::io(&estimates_dir, e))?;
        debug!(dir = %dir.display(), "opened document store");
        Ok(Self {
            projects_dir,
            estimates_dir,
        })
    }

    /// Open the store in the platform data directory.
    pub fn open_default() -> Result<Self, Error> {
        let dir = directories::ProjectDirs::from("", "", "DesignFlow")
            .map(|d| d.data_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from("designflow-data"));
        Self::open(dir)
    }

    /// Save a project, refreshing derived progress first.
    ///
    /// Every zone's `progress` and the project's `overall_progress` are
    /// recomputed from current task state before the write, whatever
    /// field actually changed, so persisted progress is never stale.
    pub fn save_project(&self, project: &mut Project) -> Result<(), Error> {
        progress::refresh(project);
        project.touch();

        let path = self.projects_dir.join(format!("{}.json", project.id));
        write_json(&path, project)?;
        info!(
            id = %project.id,
            overall = project.overall_progress,
            "saved project"
        );
        Ok(())
    }

    /// Load a project by id.
    pub fn load_project(&self, id: Uuid) -> Result<Project, Error> {
        let path = self.projects_dir.join(format!("{id}.json"));
        read_json(&path, id)
    }

    /// Save an estimate document.
    pub fn save_estimate(&self, estimate: &mut Estimate) -> Result<(), Error> {
        estimate.touch();
        let path = self.estimates_dir.join(format!("{}.json", estimate.id));
        write_json(&path, estimate)?;
        info!(id = %estimate.id, total = estimate.costing.total, "saved estimate");
        Ok(())
    }

    /// Load an estimate by id.
    pub fn load_estimate(&self, id: Uuid) -> Result<Estimate, Error> {
        let path = self.estimates_dir.join(format!("{id}.json"));
        read_json(&path, id)
    }
}

fn write_json<T: serde::Serialize>(path: &Path, value: &T) -> Result<(), Error> {
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json).map_err(|e| Error::io(path, e))
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path, id: Uuid) -> Result<T, Error> {
    let json = match fs::read_to_string(path) {
        Ok(s) => s,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Err(Error::NotFound(id)),
        Err(e) => return Err(Error::io(path, e)),
    };
    Ok(serde_json::from_str(&json)?)
}
