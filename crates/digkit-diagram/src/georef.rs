//! Geo-referencing into the EGSA-87 / Greek Grid coordinate system.
//!
//! The local layout is rotated about its origin and translated to the site
//! center. Azimuth is measured clockwise from North; drawing math uses
//! angles counter-clockwise from +X, so the applied rotation is
//! 90° − azimuth. An azimuth of 0 aligns local +Y with North.

use crate::geometry::rotate_about_origin;
use crate::layout::{Layout, LegPlacement};
use serde::{Deserialize, Serialize};

/// Coordinate reference system identifier recorded in drawing metadata.
pub const EGSA87_CRS: &str = "EPSG:2100 (HGRS87 / Greek Grid)";

/// Length of the north indicator line, in drawing units.
pub const NORTH_INDICATOR_LENGTH: f64 = 5.0;

/// Real-world placement of the diagram origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoOrigin {
    /// EGSA-87 Easting of the site center (meters).
    pub easting: f64,
    /// EGSA-87 Northing of the site center (meters).
    pub northing: f64,
    /// Rotation clockwise from North (degrees).
    pub azimuth_deg: f64,
}

impl GeoOrigin {
    /// Create a new origin.
    pub fn new(easting: f64, northing: f64, azimuth_deg: f64) -> Self {
        Self {
            easting,
            northing,
            azimuth_deg,
        }
    }

    /// The rotation applied to local geometry, in degrees CCW from +X.
    pub fn rotation_from_x(&self) -> f64 {
        90.0 - self.azimuth_deg
    }

    /// Map a local point into world coordinates: rotate about the local
    /// origin, then translate to the site center.
    pub fn to_world(&self, x: f64, y: f64) -> (f64, f64) {
        let (xr, yr) = rotate_about_origin(x, y, self.rotation_from_x());
        (self.easting + xr, self.northing + yr)
    }

    /// Rigidly transform a whole layout into world coordinates.
    pub fn transform_layout(&self, layout: &Layout) -> Layout {
        let placements = layout
            .placements
            .iter()
            .map(|p| {
                let center = self.to_world(p.center.0, p.center.1);
                let mut corners = p.corners;
                for corner in &mut corners {
                    *corner = self.to_world(corner.0, corner.1);
                }
                LegPlacement {
                    leg: p.leg,
                    center,
                    corners,
                    leg_type: p.leg_type.clone(),
                }
            })
            .collect();
        Layout {
            placements,
            side: layout.side,
        }
    }

    /// Endpoints of the fixed-length north indicator line at the site
    /// center, independent of square sizes.
    pub fn north_indicator(&self) -> ((f64, f64), (f64, f64)) {
        (
            (self.easting, self.northing),
            (self.easting, self.northing + NORTH_INDICATOR_LENGTH),
        )
    }

    /// Provenance strings recorded as non-graphical drawing metadata.
    pub fn provenance(&self) -> Vec<String> {
        vec![
            format!("CRS={}", EGSA87_CRS),
            format!("Origin_E={}", self.easting),
            format!("Origin_N={}", self.northing),
            format!("Azimuth_clockwise_from_North_deg={}", self.azimuth_deg),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use digkit_core::Leg;

    const EPS: f64 = 1e-6;

    #[test]
    fn test_rotation_from_x() {
        assert_eq!(GeoOrigin::new(0.0, 0.0, 0.0).rotation_from_x(), 90.0);
        assert_eq!(GeoOrigin::new(0.0, 0.0, 90.0).rotation_from_x(), 0.0);
        assert_eq!(GeoOrigin::new(0.0, 0.0, 270.0).rotation_from_x(), -180.0);
    }

    #[test]
    fn test_world_center_scenario() {
        // Leg a at 5 m, azimuth 0: local center (5·cos225°, 5·sin225°),
        // rotated 90° CCW, then translated to the site center.
        let origin = GeoOrigin::new(500000.0, 4500000.0, 0.0);
        let local = (
            5.0 * 225.0_f64.to_radians().cos(),
            5.0 * 225.0_f64.to_radians().sin(),
        );
        let (x, y) = origin.to_world(local.0, local.1);
        assert!((x - 500003.5355339059).abs() < EPS);
        assert!((y - 4499996.4644660941).abs() < EPS);
    }

    #[test]
    fn test_azimuth_ninety_is_identity_rotation() {
        let origin = GeoOrigin::new(100.0, 200.0, 90.0);
        let (x, y) = origin.to_world(3.0, 4.0);
        assert!((x - 103.0).abs() < EPS);
        assert!((y - 204.0).abs() < EPS);
    }

    #[test]
    fn test_transform_layout_preserves_closure_and_side() {
        let placement = LegPlacement {
            leg: Leg::A,
            center: (-3.5, -3.5),
            corners: [
                (-4.0, -4.0),
                (-3.0, -4.0),
                (-3.0, -3.0),
                (-4.0, -3.0),
                (-4.0, -4.0),
            ],
            leg_type: "+4".to_string(),
        };
        let layout = Layout {
            placements: vec![placement],
            side: 1.0,
        };

        let origin = GeoOrigin::new(500000.0, 4500000.0, 37.0);
        let world = origin.transform_layout(&layout);

        assert_eq!(world.side, 1.0);
        let corners = world.placements[0].corners;
        assert_eq!(corners[0], corners[4]);

        // Rigid transform: edge lengths survive.
        let edge = |a: (f64, f64), b: (f64, f64)| (a.0 - b.0).hypot(a.1 - b.1);
        for i in 0..4 {
            assert!((edge(corners[i], corners[i + 1]) - 1.0).abs() < EPS);
        }
    }

    #[test]
    fn test_north_indicator() {
        let origin = GeoOrigin::new(500000.0, 4500000.0, 45.0);
        let (from, to) = origin.north_indicator();
        assert_eq!(from, (500000.0, 4500000.0));
        assert_eq!(to, (500000.0, 4500005.0));
    }

    #[test]
    fn test_provenance_strings() {
        let origin = GeoOrigin::new(500000.0, 4500000.0, 12.5);
        let provenance = origin.provenance();
        assert_eq!(provenance[0], "CRS=EPSG:2100 (HGRS87 / Greek Grid)");
        assert_eq!(provenance[1], "Origin_E=500000");
        assert_eq!(provenance[2], "Origin_N=4500000");
        assert_eq!(provenance[3], "Azimuth_clockwise_from_North_deg=12.5");
    }
}
