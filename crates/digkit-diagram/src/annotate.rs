//! Annotation planning: dimension lines, the shared side note, and per-leg
//! notes.
//!
//! Dimension labels are offset along the perpendicular of their construction
//! line; leg notes are offset along the perpendicular of the leg's radial
//! direction. The two directions differ so both labels stay readable when
//! enabled together. This is a placement heuristic, not a collision solver;
//! dense configurations can still overlap.

use crate::geometry::{perpendicular, unit_vector};
use crate::layout::Layout;

/// Text heights and offsets used when placing annotations.
#[derive(Debug, Clone)]
pub struct AnnotationStyle {
    /// Height of leg note text.
    pub text_height: f64,
    /// Height of dimension label text.
    pub dim_text_height: f64,
    /// Height of the side note text.
    pub note_text_height: f64,
    /// Offset of dimension labels from their construction line.
    pub dim_offset: f64,
    /// Offset of leg notes from square centers.
    pub leg_note_offset: f64,
    /// Unit suffix for distance labels.
    pub unit_label: &'static str,
    /// Decimal places for distance labels.
    pub unit_precision: usize,
}

impl AnnotationStyle {
    /// Style for millimeter drawings.
    pub fn millimeters() -> Self {
        Self {
            text_height: 150.0,
            dim_text_height: 160.0,
            note_text_height: 150.0,
            dim_offset: 250.0,
            leg_note_offset: 200.0,
            unit_label: "mm",
            unit_precision: 0,
        }
    }

    /// Style for meter drawings: the millimeter constants scaled by 1/1000.
    pub fn meters() -> Self {
        Self {
            text_height: 0.15,
            dim_text_height: 0.16,
            note_text_height: 0.15,
            dim_offset: 0.25,
            leg_note_offset: 0.2,
            unit_label: "m",
            unit_precision: 2,
        }
    }
}

/// A text label destined for the annotation layer.
#[derive(Debug, Clone)]
pub struct Label {
    /// Insertion point in drawing units.
    pub position: (f64, f64),
    /// Label content.
    pub text: String,
    /// Text height in drawing units.
    pub height: f64,
}

/// A construction line destined for the annotation layer.
#[derive(Debug, Clone, Copy)]
pub struct ConstructionLine {
    /// Line start in drawing units.
    pub from: (f64, f64),
    /// Line end in drawing units.
    pub to: (f64, f64),
}

/// All annotations planned for one diagram.
#[derive(Debug, Clone, Default)]
pub struct AnnotationPlan {
    /// Construction lines from the diagram origin to each square center.
    pub lines: Vec<ConstructionLine>,
    /// Dimension labels, the side note, and per-leg notes.
    pub labels: Vec<Label>,
}

/// Plan all annotation passes for a layout.
///
/// `origin` is the point the dimension lines radiate from: the local origin
/// for millimeter drawings, the site center for geo-referenced drawings.
pub fn plan_annotations(
    layout: &Layout,
    origin: (f64, f64),
    style: &AnnotationStyle,
) -> AnnotationPlan {
    let mut plan = AnnotationPlan::default();

    // 1) Distance dimensions: a line from the origin to each center, with
    //    the length labelled at the midpoint, offset perpendicular to the
    //    line for readability.
    for placement in &layout.placements {
        let (cx, cy) = placement.center;
        plan.lines.push(ConstructionLine {
            from: origin,
            to: (cx, cy),
        });

        let dx = cx - origin.0;
        let dy = cy - origin.1;
        let distance = dx.hypot(dy);
        let mid = (origin.0 + dx * 0.5, origin.1 + dy * 0.5);
        let (ux, uy) = unit_vector(dx, dy);
        let (px, py) = perpendicular(ux, uy);
        plan.labels.push(Label {
            position: (
                mid.0 + px * style.dim_offset,
                mid.1 + py * style.dim_offset,
            ),
            text: format!(
                "d_{} = {:.prec$} {}",
                placement.leg,
                distance,
                style.unit_label,
                prec = style.unit_precision
            ),
            height: style.dim_text_height,
        });
    }

    // 2) One common side note, placed above-left of the first placed
    //    square's center.
    if let Some(first) = layout.placements.first() {
        let (cx, cy) = first.center;
        plan.labels.push(Label {
            position: (cx - 0.6 * layout.side, cy + 0.6 * layout.side),
            text: format!(
                "Square side = {:.prec$} {}",
                layout.side,
                style.unit_label,
                prec = style.unit_precision
            ),
            height: style.note_text_height,
        });
    }

    // 3) Per-leg notes with the leg type text, offset along the
    //    perpendicular of the leg's radial direction.
    for placement in &layout.placements {
        let (cx, cy) = placement.center;
        let angle = placement.leg.angle_deg().to_radians();
        let (ox, oy) = perpendicular(angle.cos(), angle.sin());
        plan.labels.push(Label {
            position: (
                cx + ox * style.leg_note_offset,
                cy + oy * style.leg_note_offset,
            ),
            text: format!("Σκέλος {}: {}", placement.leg, placement.leg_type),
            height: style.text_height,
        });
    }

    plan
}
