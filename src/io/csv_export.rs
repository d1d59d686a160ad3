use std::path::Path;

use crate::error::Error;
use crate::model::Estimate;
use crate::pricing;

/// Export an estimate's cost breakdown to a semicolon-delimited CSV file.
///
/// One line per room entry (with its area share and cost), followed by
/// base cost, GST, total, and the milestone schedule. Amounts are written
/// with two decimals; the stored breakdown itself stays unrounded.
/// Returns the number of data rows written.
pub fn export_estimate_csv(estimate: &Estimate, path: &Path) -> Result<usize, Error> {
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(b';')
        .has_headers(false)
        .from_path(path)?;

    wtr.write_record(["Line", "Detail", "Amount"])?;

    let details = &estimate.details;
    let total_rooms = details.total_room_count();
    if total_rooms == 0 {
        return Err(Error::EmptyRooms);
    }

    let rate = pricing::base_rate(details.material);
    let mut rows = 0usize;

    for spec in &details.rooms {
        let share = f64::from(spec.count) / f64::from(total_rooms);
        let area = details.sqft * share;
        let cost = area * rate * pricing::room_multiplier(spec.room);
        wtr.write_record([
            format!("{} x{}", spec.room.label(), spec.count),
            format!("{area:.1} sqft"),
            format!("{cost:.2}"),
        ])?;
        rows += 1;
    }

    let costing = &estimate.costing;
    wtr.write_record([
        "Base Cost".to_string(),
        String::new(),
        format!("{:.2}", costing.base_cost),
    ])?;
    wtr.write_record([
        format!("GST ({}%)", costing.gst.rate),
        String::new(),
        format!("{:.2}", costing.gst.amount),
    ])?;
    wtr.write_record([
        "Total".to_string(),
        String::new(),
        format!("{:.2}", costing.total),
    ])?;
    rows += 3;

    for m in &costing.milestones {
        wtr.write_record([
            m.name.clone(),
            format!("{}%", m.percentage),
            format!("{:.2}", m.amount),
        ])?;
        rows += 1;
    }

    wtr.flush().map_err(|e| Error::io(path, e))?;
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{LayoutType, MaterialLevel, ProjectDetails, RoomSpec, RoomType};
    use uuid::Uuid;

    #[test]
    fn export_writes_rooms_totals_and_milestones() {
        let details = ProjectDetails {
            sqft: 1000.0,
            layout: LayoutType::TwoBhk,
            material: MaterialLevel::Standard,
            rooms: vec![
                RoomSpec { room: RoomType::LivingRoom, count: 1 },
                RoomSpec { room: RoomType::Bedroom, count: 2 },
            ],
        };
        let estimate = Estimate::new(Uuid::new_v4(), "Flat 4B", details).unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("estimate.csv");
        // 2 room rows + 3 total rows + 3 milestones.
        let rows = export_estimate_csv(&estimate, &path).unwrap();
        assert_eq!(rows, 8);

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("Living Room x1;333.3 sqft;720000.00"));
        assert!(contents.contains("GST (18%);;345600.00"));
        assert!(contents.contains("Initial Payment;40%;906240.00"));
        assert!(contents.contains("Final Payment;20%;453120.00"));
    }
}
