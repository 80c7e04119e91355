//! # DigKit
//!
//! Generates 2D DXF diagrams of excavation squares for electrical
//! transmission tower legs, from a leg table spreadsheet.
//!
//! ## Architecture
//!
//! DigKit is organized as a workspace with multiple crates:
//!
//! 1. **digkit-core** - domain types, error taxonomy, spreadsheet ingestion
//! 2. **digkit-diagram** - geometry, annotation, and DXF emission pipeline
//! 3. **digkit** - the CLI binary that integrates both
//!
//! Two diagram variants exist: a local millimeter-unit drawing around the
//! tower center, and a meter-unit drawing geo-referenced into the EGSA-87 /
//! Greek Grid coordinate system (EPSG:2100).

pub use digkit_core::{DiagramError, DiagramTable, Leg, LegRecord, LegSelection, Result};
pub use digkit_diagram::{
    destination_path, ensure_dxf_extension, render_geo, render_local, write_drawing, GeoOrigin,
    RenderOptions, EGSA87_CRS,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output on stderr with pretty formatting
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    Ok(())
}
