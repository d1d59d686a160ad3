//! Cost estimator: room-wise pricing, GST, and the payment milestone split.
//!
//! Pure functions over [`ProjectDetails`] — same input, same output, no
//! side effects. Handlers validate input, call
//! [`compute_cost_breakdown`], and persist the result verbatim.

use crate::error::Error;
use crate::model::{CostBreakdown, Gst, MaterialLevel, Milestone, ProjectDetails, RoomType};

/// GST applied as a flat percentage of the base cost.
pub const GST_RATE: f64 = 18.0;

/// Fixed 40-40-20 payment schedule applied to every estimate.
const MILESTONE_SPLIT: [(&str, f64); 3] = [
    ("Initial Payment", 40.0),
    ("Mid-Project Payment", 40.0),
    ("Final Payment", 20.0),
];

/// Base rate per sqft for a material tier.
pub fn base_rate(material: MaterialLevel) -> f64 {
    match material {
        MaterialLevel::Basic => 1200.0,
        MaterialLevel::Standard => 1800.0,
        MaterialLevel::Premium => 2500.0,
        MaterialLevel::Luxury => 3500.0,
    }
}

/// Cost multiplier for a room type.
pub fn room_multiplier(room: RoomType) -> f64 {
    match room {
        RoomType::LivingRoom => 1.2,
        RoomType::Bedroom => 1.0,
        RoomType::Kitchen => 1.5,
        RoomType::Bathroom => 1.3,
        RoomType::DiningRoom => 1.1,
        RoomType::Study => 1.0,
        RoomType::Balcony => 0.8,
        RoomType::Other => 1.0,
    }
}

/// Compute the full cost breakdown for a project.
///
/// Floor area is apportioned to each room entry by its share of the total
/// room count, priced at the material base rate times the room multiplier,
/// then GST and the milestone schedule are derived from the sum. No
/// rounding is applied — display rounding belongs to the presentation
/// layer, not the stored breakdown.
///
/// Callers are expected to have run [`ProjectDetails::validate`]; a zero
/// total room count still returns [`Error::EmptyRooms`] rather than
/// dividing by zero.
pub fn compute_cost_breakdown(details: &ProjectDetails) -> Result<CostBreakdown, Error> {
    let total_rooms = details.total_room_count();
    if total_rooms == 0 {
        return Err(Error::EmptyRooms);
    }

    let rate = base_rate(details.material);
    let mut base_cost = 0.0;
    for spec in &details.rooms {
        let room_area = details.sqft * (f64::from(spec.count) / f64::from(total_rooms));
        base_cost += room_area * rate * room_multiplier(spec.room);
    }

    let gst_amount = base_cost * (GST_RATE / 100.0);
    let total = base_cost + gst_amount;

    let milestones = MILESTONE_SPLIT
        .iter()
        .map(|&(name, percentage)| Milestone {
            name: name.to_string(),
            percentage,
            amount: total * (percentage / 100.0),
            due_date: None,
        })
        .collect();

    Ok(CostBreakdown {
        base_cost,
        gst: Gst {
            rate: GST_RATE,
            amount: gst_amount,
        },
        total,
        milestones,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{LayoutType, RoomSpec};

    const EPS: f64 = 1e-6;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() <= EPS * b.abs().max(1.0)
    }

    fn details(material: MaterialLevel, sqft: f64, rooms: &[(RoomType, u32)]) -> ProjectDetails {
        ProjectDetails {
            sqft,
            layout: LayoutType::TwoBhk,
            material,
            rooms: rooms
                .iter()
                .map(|&(room, count)| RoomSpec { room, count })
                .collect(),
        }
    }

    #[test]
    fn worked_example_standard_1000_sqft() {
        // 1 Living Room + 2 Bedrooms at Standard rate: living gets a third
        // of the area, bedrooms two thirds.
        let d = details(
            MaterialLevel::Standard,
            1000.0,
            &[(RoomType::LivingRoom, 1), (RoomType::Bedroom, 2)],
        );
        let b = compute_cost_breakdown(&d).unwrap();

        assert!(close(b.base_cost, 1_920_000.0), "base {}", b.base_cost);
        assert!(close(b.gst.amount, 345_600.0), "gst {}", b.gst.amount);
        assert!(close(b.total, 2_265_600.0), "total {}", b.total);
        assert!(close(b.milestones[0].amount, 906_240.0));
        assert!(close(b.milestones[1].amount, 906_240.0));
        assert!(close(b.milestones[2].amount, 453_120.0));
    }

    #[test]
    fn milestones_are_fixed_40_40_20() {
        let d = details(MaterialLevel::Basic, 450.0, &[(RoomType::Kitchen, 1)]);
        let b = compute_cost_breakdown(&d).unwrap();

        let names: Vec<&str> = b.milestones.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(
            names,
            ["Initial Payment", "Mid-Project Payment", "Final Payment"]
        );
        let pct: f64 = b.milestones.iter().map(|m| m.percentage).sum();
        assert_eq!(pct, 100.0);

        let amounts: f64 = b.milestones.iter().map(|m| m.amount).sum();
        assert!(close(amounts, b.total));
        assert!(b.milestones.iter().all(|m| m.due_date.is_none()));
    }

    #[test]
    fn total_is_base_times_one_point_eighteen() {
        let d = details(
            MaterialLevel::Premium,
            1275.5,
            &[
                (RoomType::LivingRoom, 1),
                (RoomType::Kitchen, 1),
                (RoomType::Bathroom, 2),
                (RoomType::Balcony, 1),
            ],
        );
        let b = compute_cost_breakdown(&d).unwrap();
        assert!(close(b.total, b.base_cost * 1.18));
        assert_eq!(b.gst.rate, 18.0);
    }

    #[test]
    fn single_room_type_collapses_to_flat_rate() {
        // All area in one multiplier-1.0 room type: base = sqft * rate.
        let d = details(MaterialLevel::Luxury, 600.0, &[(RoomType::Bedroom, 3)]);
        let b = compute_cost_breakdown(&d).unwrap();
        assert!(close(b.base_cost, 600.0 * 3500.0));
    }

    #[test]
    fn deterministic_and_bitwise_identical() {
        let d = details(
            MaterialLevel::Standard,
            987.25,
            &[(RoomType::DiningRoom, 1), (RoomType::Study, 2)],
        );
        let a = compute_cost_breakdown(&d).unwrap();
        let b = compute_cost_breakdown(&d).unwrap();
        assert_eq!(a.base_cost.to_bits(), b.base_cost.to_bits());
        assert_eq!(a.total.to_bits(), b.total.to_bits());
        assert_eq!(a, b);
    }

    #[test]
    fn zero_room_count_is_an_error() {
        let d = details(MaterialLevel::Basic, 500.0, &[]);
        assert!(matches!(compute_cost_breakdown(&d), Err(Error::EmptyRooms)));
    }

    #[test]
    fn layout_type_does_not_affect_cost() {
        let mut d = details(MaterialLevel::Standard, 800.0, &[(RoomType::Bedroom, 2)]);
        let a = compute_cost_breakdown(&d).unwrap();
        d.layout = LayoutType::Commercial;
        let b = compute_cost_breakdown(&d).unwrap();
        assert_eq!(a, b);
    }
}
