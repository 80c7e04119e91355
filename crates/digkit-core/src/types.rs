//! Domain types for excavation diagrams.
//!
//! A tower foundation has four legs at fixed angular offsets from the tower
//! center. A diagram is generated for any non-empty subset of them; each
//! selected leg carries one spreadsheet row with its distances.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the four structural legs of a tower foundation.
///
/// Each leg sits at a fixed polar angle from the tower center. The mapping
/// is global: it is never overridden per tower type or per render call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Leg {
    A,
    B,
    C,
    D,
}

impl Leg {
    /// All legs in label order.
    pub const ALL: [Leg; 4] = [Leg::A, Leg::B, Leg::C, Leg::D];

    /// Fixed angle of this leg in degrees, counter-clockwise from +X.
    pub fn angle_deg(self) -> f64 {
        match self {
            Leg::A => 225.0,
            Leg::B => 135.0,
            Leg::C => 45.0,
            Leg::D => 315.0,
        }
    }

    /// Lowercase label as used in spreadsheets and label text.
    pub fn label(self) -> &'static str {
        match self {
            Leg::A => "a",
            Leg::B => "b",
            Leg::C => "c",
            Leg::D => "d",
        }
    }

    fn index(self) -> usize {
        match self {
            Leg::A => 0,
            Leg::B => 1,
            Leg::C => 2,
            Leg::D => 3,
        }
    }
}

impl fmt::Display for Leg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Leg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "a" => Ok(Leg::A),
            "b" => Ok(Leg::B),
            "c" => Ok(Leg::C),
            "d" => Ok(Leg::D),
            _ => Err(format!("Unknown leg label: {}", s)),
        }
    }
}

/// One spreadsheet row describing a leg of a tower type.
///
/// Numeric fields are `None` when the source cell was empty or not numeric;
/// the render boundary decides whether that is an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegRecord {
    /// Tower type the row belongs to.
    pub tower_type: String,
    /// Descriptive leg type text (e.g. "+4/+0,7").
    pub leg_type: String,
    /// Distance from the tower center to the leg center (meters).
    pub distance_m: Option<f64>,
    /// Excavation square side (meters), shared across the tower type.
    pub square_side_m: Option<f64>,
}

/// Sparse selection of leg records: one optional record per leg.
///
/// Any subset of the four legs may be present. Iteration is always in label
/// order so repeated renders see the legs in the same sequence.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LegSelection {
    records: [Option<LegRecord>; 4],
}

impl LegSelection {
    /// Create an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign a record to a leg, replacing any previous one.
    pub fn set(&mut self, leg: Leg, record: LegRecord) {
        self.records[leg.index()] = Some(record);
    }

    /// The record selected for a leg, if any.
    pub fn get(&self, leg: Leg) -> Option<&LegRecord> {
        self.records[leg.index()].as_ref()
    }

    /// Present legs with their records, in label order.
    pub fn iter_present(&self) -> impl Iterator<Item = (Leg, &LegRecord)> {
        Leg::ALL
            .into_iter()
            .filter_map(move |leg| self.get(leg).map(|record| (leg, record)))
    }

    /// Number of present legs.
    pub fn len(&self) -> usize {
        self.records.iter().filter(|r| r.is_some()).count()
    }

    /// True when no leg has a record.
    pub fn is_empty(&self) -> bool {
        self.records.iter().all(Option::is_none)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(leg_type: &str) -> LegRecord {
        LegRecord {
            tower_type: "T1".to_string(),
            leg_type: leg_type.to_string(),
            distance_m: Some(5.0),
            square_side_m: Some(1.0),
        }
    }

    #[test]
    fn test_leg_angles() {
        assert_eq!(Leg::A.angle_deg(), 225.0);
        assert_eq!(Leg::B.angle_deg(), 135.0);
        assert_eq!(Leg::C.angle_deg(), 45.0);
        assert_eq!(Leg::D.angle_deg(), 315.0);
    }

    #[test]
    fn test_leg_parsing() {
        assert_eq!("a".parse::<Leg>().unwrap(), Leg::A);
        assert_eq!(" B ".parse::<Leg>().unwrap(), Leg::B);
        assert_eq!("d".parse::<Leg>().unwrap(), Leg::D);
        assert!("e".parse::<Leg>().is_err());
        assert!("".parse::<Leg>().is_err());
    }

    #[test]
    fn test_leg_display_round_trip() {
        for leg in Leg::ALL {
            assert_eq!(leg.to_string().parse::<Leg>().unwrap(), leg);
        }
    }

    #[test]
    fn test_selection_iterates_in_label_order() {
        let mut selection = LegSelection::new();
        selection.set(Leg::D, record("d-type"));
        selection.set(Leg::B, record("b-type"));

        let present: Vec<Leg> = selection.iter_present().map(|(leg, _)| leg).collect();
        assert_eq!(present, vec![Leg::B, Leg::D]);
    }

    #[test]
    fn test_selection_empty_and_len() {
        let mut selection = LegSelection::new();
        assert!(selection.is_empty());
        assert_eq!(selection.len(), 0);

        selection.set(Leg::A, record("a-type"));
        assert!(!selection.is_empty());
        assert_eq!(selection.len(), 1);

        // Re-assigning the same leg does not grow the selection.
        selection.set(Leg::A, record("other"));
        assert_eq!(selection.len(), 1);
        assert_eq!(selection.get(Leg::A).unwrap().leg_type, "other");
    }
}
