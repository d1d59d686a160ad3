use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::Error;

/// Apartment/property layout. Informational only — the cost formula does
/// not depend on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LayoutType {
    #[serde(rename = "1BHK")]
    OneBhk,
    #[serde(rename = "2BHK")]
    TwoBhk,
    #[serde(rename = "3BHK")]
    ThreeBhk,
    #[serde(rename = "4BHK")]
    FourBhk,
    Villa,
    Commercial,
}

/// Material tier selected for the project; drives the base rate per sqft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MaterialLevel {
    Basic,
    Standard,
    Premium,
    Luxury,
}

/// Room category. Wire names keep the spaces the client sends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoomType {
    #[serde(rename = "Living Room")]
    LivingRoom,
    Bedroom,
    Kitchen,
    Bathroom,
    #[serde(rename = "Dining Room")]
    DiningRoom,
    Study,
    Balcony,
    Other,
}

impl RoomType {
    /// Human-readable label, matching the wire name.
    pub fn label(&self) -> &'static str {
        match self {
            RoomType::LivingRoom => "Living Room",
            RoomType::Bedroom => "Bedroom",
            RoomType::Kitchen => "Kitchen",
            RoomType::Bathroom => "Bathroom",
            RoomType::DiningRoom => "Dining Room",
            RoomType::Study => "Study",
            RoomType::Balcony => "Balcony",
            RoomType::Other => "Other",
        }
    }
}

/// A room type and how many of it the project has.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoomSpec {
    #[serde(rename = "type")]
    pub room: RoomType,
    pub count: u32,
}

/// Physical description of the project; input to the cost estimator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectDetails {
    pub sqft: f64,
    #[serde(rename = "layoutType")]
    pub layout: LayoutType,
    #[serde(rename = "materialLevel")]
    pub material: MaterialLevel,
    pub rooms: Vec<RoomSpec>,
}

impl ProjectDetails {
    /// Sum of `count` across all room entries.
    pub fn total_room_count(&self) -> u32 {
        self.rooms.iter().map(|r| r.count).sum()
    }

    /// Reject degenerate input before it reaches the estimator.
    ///
    /// The room counts are used as a divisor, so an empty room list or a
    /// zero total count is an error, as is a non-positive area.
    pub fn validate(&self) -> Result<(), Error> {
        if !(self.sqft > 0.0) {
            return Err(Error::InvalidArea(self.sqft));
        }
        if let Some(bad) = self.rooms.iter().find(|r| r.count == 0) {
            return Err(Error::InvalidRoomCount(bad.room.label().to_string()));
        }
        if self.total_room_count() == 0 {
            return Err(Error::EmptyRooms);
        }
        Ok(())
    }
}

/// GST portion of a cost breakdown. Rate is a percentage (fixed at 18).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gst {
    pub rate: f64,
    pub amount: f64,
}

/// A scheduled partial payment tied to a percentage of the project total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Milestone {
    pub name: String,
    pub percentage: f64,
    pub amount: f64,
    /// Filled in later by scheduling, never by the estimator.
    #[serde(rename = "dueDate", skip_serializing_if = "Option::is_none", default)]
    pub due_date: Option<NaiveDate>,
}

/// Full costing produced by the estimator and persisted verbatim.
///
/// Computed once at estimate creation and replaced wholesale whenever the
/// project details change — never partially mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    #[serde(rename = "baseCost")]
    pub base_cost: f64,
    pub gst: Gst,
    pub total: f64,
    /// Always three entries: Initial 40%, Mid-Project 40%, Final 20%.
    pub milestones: Vec<Milestone>,
}

/// Workflow status of an estimate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EstimateStatus {
    #[default]
    Draft,
    Sent,
    Approved,
    Rejected,
}

/// An estimate document: a costed proposal attached to a lead, or a
/// reusable template when `is_template` is set (templates have no lead).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Estimate {
    pub id: Uuid,
    pub lead: Option<Uuid>,
    pub name: String,
    pub description: String,
    pub status: EstimateStatus,
    pub details: ProjectDetails,
    pub costing: CostBreakdown,
    pub is_template: bool,
    pub template_name: Option<String>,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
}

impl Estimate {
    /// Create a new estimate for a lead, computing the cost breakdown from
    /// the supplied details.
    pub fn new(lead: Uuid, name: impl Into<String>, details: ProjectDetails) -> Result<Self, Error> {
        details.validate()?;
        let costing = crate::pricing::compute_cost_breakdown(&details)?;
        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            lead: Some(lead),
            name: name.into(),
            description: String::new(),
            status: EstimateStatus::default(),
            details,
            costing,
            is_template: false,
            template_name: None,
            created: now,
            modified: now,
        })
    }

    /// Replace the project details and recompute the full breakdown.
    ///
    /// The previous breakdown is discarded entirely so the stored costing
    /// can never drift from the details it was computed from.
    pub fn update_details(&mut self, details: ProjectDetails) -> Result<(), Error> {
        details.validate()?;
        self.costing = crate::pricing::compute_cost_breakdown(&details)?;
        self.details = details;
        self.touch();
        Ok(())
    }

    /// Clone this estimate into a reusable template: fresh id and
    /// timestamps, no lead attached.
    pub fn as_template(&self, template_name: impl Into<String>) -> Self {
        let name = template_name.into();
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            lead: None,
            name: name.clone(),
            is_template: true,
            template_name: Some(name),
            created: now,
            modified: now,
            ..self.clone()
        }
    }

    /// Touch the modified timestamp.
    pub fn touch(&mut self) {
        self.modified = Utc::now();
    }
}
