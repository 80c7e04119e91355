//! # DigKit Diagram
//!
//! The geometry-to-DXF rendering pipeline: turns a leg selection and a
//! square side into a drawing document.
//!
//! ## Pipeline stages
//!
//! 1. **geometry** - pure 2D helpers (polar conversion, square corners,
//!    perpendiculars, rotation)
//! 2. **layout** - leg selection to square placements in the drawing frame
//! 3. **annotate** - dimension lines, the shared side note, per-leg notes
//! 4. **georef** - optional rigid transform into EGSA-87 world coordinates
//! 5. **emit** - drawing-document assembly and persistence
//! 6. **output** - destination resolution for generated files
//!
//! Each render call is self-contained: it builds its own document in memory
//! and persists it exactly once at the end, so a failing render never
//! leaves a partial file behind.

pub mod annotate;
pub mod emit;
pub mod geometry;
pub mod georef;
pub mod layout;
pub mod output;

pub use annotate::{plan_annotations, AnnotationPlan, AnnotationStyle};
pub use emit::{render_geo, render_local, write_drawing, RenderOptions};
pub use georef::{GeoOrigin, EGSA87_CRS};
pub use layout::{plan_layout, Layout, LegPlacement};
pub use output::{destination_path, ensure_dxf_extension};
