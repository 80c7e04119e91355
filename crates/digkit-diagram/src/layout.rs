//! Layout engine: leg selection to square placements in the drawing frame.

use crate::geometry::{polar_to_cartesian, square_corners};
use digkit_core::{DiagramError, Leg, LegSelection, Result};

/// A placed excavation square for one leg.
#[derive(Debug, Clone)]
pub struct LegPlacement {
    /// The leg this square belongs to.
    pub leg: Leg,
    /// Square center in drawing units.
    pub center: (f64, f64),
    /// Closed corner sequence (first point repeated last).
    pub corners: [(f64, f64); 5],
    /// Leg type text from the source row, used by annotations.
    pub leg_type: String,
}

/// Computed placements for all present legs, in label order, plus the
/// shared square side in drawing units.
#[derive(Debug, Clone)]
pub struct Layout {
    /// Present legs only; absent legs produce no placement.
    pub placements: Vec<LegPlacement>,
    /// Common square side in drawing units.
    pub side: f64,
}

/// Compute square placements for the selected legs.
///
/// `scale` converts the table's meters into drawing units: 1000 for a
/// millimeter drawing, 1 for a meter drawing. Absent legs are skipped; a
/// present leg without a numeric distance is an error, and nothing is
/// emitted for the render in that case.
pub fn plan_layout(selection: &LegSelection, side: f64, scale: f64) -> Result<Layout> {
    let mut placements = Vec::new();
    for (leg, record) in selection.iter_present() {
        let distance_m = record.distance_m.ok_or_else(|| {
            DiagramError::InvalidGeometry(format!("distance to center is missing for leg {}", leg))
        })?;
        let center = polar_to_cartesian(distance_m * scale, leg.angle_deg());
        let corners = square_corners(center.0, center.1, side)?;
        placements.push(LegPlacement {
            leg,
            center,
            corners,
            leg_type: record.leg_type.clone(),
        });
    }
    Ok(Layout { placements, side })
}

#[cfg(test)]
mod tests {
    use super::*;
    use digkit_core::LegRecord;

    const EPS: f64 = 1e-6;

    fn record(leg_type: &str, distance_m: Option<f64>) -> LegRecord {
        LegRecord {
            tower_type: "T1".to_string(),
            leg_type: leg_type.to_string(),
            distance_m,
            square_side_m: Some(1.0),
        }
    }

    #[test]
    fn test_two_leg_scenario() {
        // Legs a (5 m) and b (3 m), side 1 m, millimeter drawing.
        let mut selection = LegSelection::new();
        selection.set(Leg::A, record("a", Some(5.0)));
        selection.set(Leg::B, record("b", Some(3.0)));

        let layout = plan_layout(&selection, 1000.0, 1000.0).unwrap();
        assert_eq!(layout.placements.len(), 2);

        let a = &layout.placements[0];
        assert_eq!(a.leg, Leg::A);
        assert!((a.center.0 - -3535.533905932738).abs() < EPS);
        assert!((a.center.1 - -3535.533905932738).abs() < EPS);

        let b = &layout.placements[1];
        assert_eq!(b.leg, Leg::B);
        assert!((b.center.0 - -2121.320343559643).abs() < EPS);
        assert!((b.center.1 - 2121.320343559643).abs() < EPS);

        // Axis-aligned 1000 mm squares.
        for placement in &layout.placements {
            let (cx, cy) = placement.center;
            assert_eq!(placement.corners[0], (cx - 500.0, cy - 500.0));
            assert_eq!(placement.corners[2], (cx + 500.0, cy + 500.0));
            assert_eq!(placement.corners[0], placement.corners[4]);
        }
    }

    #[test]
    fn test_absent_legs_produce_no_placement() {
        let mut selection = LegSelection::new();
        selection.set(Leg::C, record("c", Some(2.0)));

        let layout = plan_layout(&selection, 1000.0, 1000.0).unwrap();
        assert_eq!(layout.placements.len(), 1);
        assert_eq!(layout.placements[0].leg, Leg::C);
    }

    #[test]
    fn test_empty_selection_yields_empty_layout() {
        let layout = plan_layout(&LegSelection::new(), 1000.0, 1000.0).unwrap();
        assert!(layout.placements.is_empty());
    }

    #[test]
    fn test_missing_distance_is_invalid_geometry() {
        let mut selection = LegSelection::new();
        selection.set(Leg::A, record("a", None));

        let err = plan_layout(&selection, 1000.0, 1000.0).unwrap_err();
        match err {
            DiagramError::InvalidGeometry(msg) => assert!(msg.contains("leg a")),
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_distinct_legs_never_share_a_center() {
        let mut selection = LegSelection::new();
        for leg in Leg::ALL {
            selection.set(leg, record(leg.label(), Some(4.0)));
        }
        let layout = plan_layout(&selection, 1000.0, 1000.0).unwrap();
        for i in 0..layout.placements.len() {
            for j in (i + 1)..layout.placements.len() {
                let a = layout.placements[i].center;
                let b = layout.placements[j].center;
                assert!((a.0 - b.0).abs() > EPS || (a.1 - b.1).abs() > EPS);
            }
        }
    }
}
