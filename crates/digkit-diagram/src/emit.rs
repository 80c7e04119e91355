//! Drawing emission: turn layouts and annotation plans into a DXF document.
//!
//! The document is assembled fully in memory and saved exactly once, so a
//! failing render never leaves a partial file behind. Every entity lands in
//! one of two fixed layers: geometry on [`LAYER_SQUARES`], everything else
//! on [`LAYER_ANNOTATIONS`].

use crate::annotate::{plan_annotations, AnnotationPlan, AnnotationStyle};
use crate::georef::GeoOrigin;
use crate::layout::{plan_layout, Layout};
use digkit_core::units::MM_PER_M;
use digkit_core::{DiagramError, LegSelection, Result};
use dxf::entities::{Entity, EntityType, Line, LwPolyline, Text};
use dxf::enums::{AcadVersion, Units};
use dxf::tables::{AppId, Layer};
use dxf::{Drawing, LwPolylineVertex, Point, XData, XDataItem};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Layer holding the excavation square polygons.
pub const LAYER_SQUARES: &str = "Squares";
/// Layer holding construction lines, labels, and the north indicator.
pub const LAYER_ANNOTATIONS: &str = "Annotations";

/// Registered application name for the CRS provenance metadata.
pub const GEODATA_APP_ID: &str = "GEODATA";

/// Options for a render call.
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    /// Include dimension lines, the side note, and per-leg notes.
    pub annotations: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { annotations: true }
    }
}

/// Render the local millimeter-unit diagram.
///
/// Refuses an empty selection; nothing is written in that case.
pub fn render_local(
    selection: &LegSelection,
    side_mm: f64,
    options: RenderOptions,
) -> Result<Drawing> {
    let layout = plan_layout(selection, side_mm, MM_PER_M)?;
    if layout.placements.is_empty() {
        return Err(DiagramError::NoSelection);
    }

    let mut drawing = new_drawing(Units::Millimeters);
    add_squares(&mut drawing, &layout);
    if options.annotations {
        let plan = plan_annotations(&layout, (0.0, 0.0), &AnnotationStyle::millimeters());
        add_annotations(&mut drawing, &plan);
    }
    info!(legs = layout.placements.len(), "Rendered local diagram");
    Ok(drawing)
}

/// Render the meter-unit, EGSA-87 geo-referenced diagram.
///
/// The local layout is rotated by the azimuth-derived angle and translated
/// to the site center; the drawing carries the CRS provenance metadata and
/// a fixed-length north indicator.
pub fn render_geo(
    selection: &LegSelection,
    side_m: f64,
    origin: &GeoOrigin,
    options: RenderOptions,
) -> Result<Drawing> {
    let layout = plan_layout(selection, side_m, 1.0)?;
    if layout.placements.is_empty() {
        return Err(DiagramError::NoSelection);
    }
    let world = origin.transform_layout(&layout);

    let mut drawing = new_drawing(Units::Meters);
    drawing.header.insertion_base = Point::new(origin.easting, origin.northing, 0.0);
    add_squares(&mut drawing, &world);
    if options.annotations {
        let plan = plan_annotations(
            &world,
            (origin.easting, origin.northing),
            &AnnotationStyle::meters(),
        );
        add_annotations(&mut drawing, &plan);
    }
    add_north_indicator(&mut drawing, origin);
    info!(legs = world.placements.len(), "Rendered geo-referenced diagram");
    Ok(drawing)
}

/// Persist a finished drawing, creating parent directories on demand.
/// Returns the path the file was written to.
pub fn write_drawing(drawing: &mut Drawing, path: &Path) -> Result<PathBuf> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    drawing
        .save_file(path)
        .map_err(|e| DiagramError::Dxf(e.to_string()))?;
    info!("Wrote {}", path.display());
    Ok(path.to_path_buf())
}

fn new_drawing(units: Units) -> Drawing {
    let mut drawing = Drawing::new();
    drawing.header.version = AcadVersion::R2010;
    drawing.header.default_drawing_units = units;
    ensure_layers(&mut drawing);
    drawing
}

/// Get-or-create the two fixed layers. Safe to call more than once.
fn ensure_layers(drawing: &mut Drawing) {
    for name in [LAYER_SQUARES, LAYER_ANNOTATIONS] {
        if !drawing.layers().any(|layer| layer.name == name) {
            let mut layer = Layer::default();
            layer.name = name.to_string();
            drawing.add_layer(layer);
        }
    }
}

fn add_squares(drawing: &mut Drawing, layout: &Layout) {
    for placement in &layout.placements {
        let mut polyline = LwPolyline::default();
        polyline.vertices = placement
            .corners
            .iter()
            .map(|&(x, y)| LwPolylineVertex {
                x,
                y,
                ..Default::default()
            })
            .collect();
        polyline.set_is_closed(true);

        let mut entity = Entity::new(EntityType::LwPolyline(polyline));
        entity.common.layer = LAYER_SQUARES.to_string();
        drawing.add_entity(entity);
    }
}

fn add_annotations(drawing: &mut Drawing, plan: &AnnotationPlan) {
    for line in &plan.lines {
        add_line(drawing, line.from, line.to);
    }
    for label in &plan.labels {
        add_text(drawing, label.position, &label.text, label.height);
    }
}

/// North indicator line and label, with the CRS provenance attached as
/// XDATA to the line under the registered GEODATA application.
fn add_north_indicator(drawing: &mut Drawing, origin: &GeoOrigin) {
    let mut app_id = AppId::default();
    app_id.name = GEODATA_APP_ID.to_string();
    drawing.add_app_id(app_id);

    let (from, to) = origin.north_indicator();
    let line = Line::new(
        Point::new(from.0, from.1, 0.0),
        Point::new(to.0, to.1, 0.0),
    );
    let mut entity = Entity::new(EntityType::Line(line));
    entity.common.layer = LAYER_ANNOTATIONS.to_string();
    entity.common.x_data.push(XData {
        application_name: GEODATA_APP_ID.to_string(),
        items: origin
            .provenance()
            .into_iter()
            .map(XDataItem::Str)
            .collect(),
    });
    drawing.add_entity(entity);

    add_text(drawing, (to.0, to.1 + 0.5), "N", 1.0);
}

fn add_line(drawing: &mut Drawing, from: (f64, f64), to: (f64, f64)) {
    let line = Line::new(Point::new(from.0, from.1, 0.0), Point::new(to.0, to.1, 0.0));
    let mut entity = Entity::new(EntityType::Line(line));
    entity.common.layer = LAYER_ANNOTATIONS.to_string();
    drawing.add_entity(entity);
}

fn add_text(drawing: &mut Drawing, position: (f64, f64), value: &str, height: f64) {
    let mut text = Text::default();
    text.location = Point::new(position.0, position.1, 0.0);
    text.text_height = height;
    text.value = value.to_string();

    let mut entity = Entity::new(EntityType::Text(text));
    entity.common.layer = LAYER_ANNOTATIONS.to_string();
    drawing.add_entity(entity);
}
