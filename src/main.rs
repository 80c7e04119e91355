//! DigKit CLI - excavation diagram generation from the command line.

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use digkit::init_logging;
use digkit_core::units::m_to_mm;
use digkit_core::{DiagramError, DiagramTable, Leg, LegSelection};
use digkit_diagram::{
    destination_path, ensure_dxf_extension, render_geo, render_local, write_drawing, GeoOrigin,
    RenderOptions, EGSA87_CRS,
};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::warn;

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (built ",
    env!("BUILD_DATE"),
    ")"
);

#[derive(Parser)]
#[command(name = "digkit", version, long_version = LONG_VERSION)]
#[command(about = "Excavation layout diagrams for tower foundations", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Draw a local millimeter-unit diagram for the selected legs
    Local(LocalArgs),
    /// Draw a geo-referenced diagram in EGSA-87 / Greek Grid coordinates
    Geo(GeoArgs),
}

#[derive(Args)]
struct LocalArgs {
    /// Path to the leg table spreadsheet
    #[arg(long, default_value = "diagrams.xlsx")]
    excel: PathBuf,
    /// Tower type, exactly as written in the spreadsheet
    #[arg(long)]
    tower: String,
    /// Leg type drawn at position a
    #[arg(long, value_name = "LEG_TYPE")]
    leg_a: Option<String>,
    /// Leg type drawn at position b
    #[arg(long, value_name = "LEG_TYPE")]
    leg_b: Option<String>,
    /// Leg type drawn at position c
    #[arg(long, value_name = "LEG_TYPE")]
    leg_c: Option<String>,
    /// Leg type drawn at position d
    #[arg(long, value_name = "LEG_TYPE")]
    leg_d: Option<String>,
    /// Skip dimension lines and notes
    #[arg(long)]
    no_annotations: bool,
    /// Output file name, resolved to the desktop or ./output
    #[arg(long)]
    name: Option<String>,
}

#[derive(Args)]
struct GeoArgs {
    /// Path to the leg table spreadsheet
    #[arg(long, default_value = "diagrams.xlsx")]
    excel: PathBuf,
    /// Tower type, exactly as written in the spreadsheet
    #[arg(long)]
    tower: String,
    /// Legs to include, e.g. --legs a b c
    #[arg(long, required = true, num_args = 1..)]
    legs: Vec<Leg>,
    /// EGSA-87 Easting of the site center (meters); prompted when omitted
    #[arg(long)]
    easting: Option<f64>,
    /// EGSA-87 Northing of the site center (meters); prompted when omitted
    #[arg(long)]
    northing: Option<f64>,
    /// Rotation clockwise from North (degrees); 0 aligns +Y with North
    #[arg(long, default_value_t = 0.0)]
    azimuth: f64,
    /// Output DXF path
    #[arg(long, default_value = "excavations_egsa87.dxf")]
    out: PathBuf,
    /// Include dimension lines and notes
    #[arg(long)]
    annotations: bool,
}

fn main() -> Result<()> {
    init_logging()?;

    let cli = Cli::parse();
    match &cli.command {
        Commands::Local(args) => run_local(args),
        Commands::Geo(args) => run_geo(args),
    }
}

fn run_local(args: &LocalArgs) -> Result<()> {
    let table = DiagramTable::load(&args.excel)?;
    require_tower(&table, &args.tower)?;
    let side_m = table
        .side_for_tower(&args.tower)
        .ok_or_else(|| DiagramError::MissingSide {
            tower: args.tower.clone(),
        })?;

    let mut selection = LegSelection::new();
    let choices = [
        (Leg::A, &args.leg_a),
        (Leg::B, &args.leg_b),
        (Leg::C, &args.leg_c),
        (Leg::D, &args.leg_d),
    ];
    for (leg, choice) in choices {
        if let Some(leg_type) = choice {
            match table.record_for(&args.tower, leg_type) {
                Some(record) => selection.set(leg, record.clone()),
                None => bail!(
                    "No row with leg type '{}' for tower '{}'",
                    leg_type,
                    args.tower
                ),
            }
        }
    }
    if selection.is_empty() {
        bail!("Select at least one leg (--leg-a/--leg-b/--leg-c/--leg-d)");
    }

    let options = RenderOptions {
        annotations: !args.no_annotations,
    };
    let mut drawing = render_local(&selection, m_to_mm(side_m), options)?;

    let filename = args
        .name
        .clone()
        .unwrap_or_else(|| format!("{}.dxf", args.tower.replace(' ', "_")));
    let path = destination_path(&ensure_dxf_extension(&filename))?;
    let written = write_drawing(&mut drawing, &path)?;
    println!("DXF created: {}", written.display());
    Ok(())
}

fn run_geo(args: &GeoArgs) -> Result<()> {
    let easting = match args.easting {
        Some(value) => value,
        None => prompt_f64("Center Easting (EGSA-87, m): ")?,
    };
    let northing = match args.northing {
        Some(value) => value,
        None => prompt_f64("Center Northing (EGSA-87, m): ")?,
    };
    let origin = GeoOrigin::new(easting, northing, args.azimuth);

    let table = DiagramTable::load(&args.excel)?;
    require_tower(&table, &args.tower)?;
    let side_m = table
        .side_for_tower(&args.tower)
        .ok_or_else(|| DiagramError::MissingSide {
            tower: args.tower.clone(),
        })?;

    // The geo table convention keys rows by the leg label itself.
    let mut selection = LegSelection::new();
    for &leg in &args.legs {
        match table.record_for(&args.tower, leg.label()) {
            Some(record) => selection.set(leg, record.clone()),
            None => warn!("No row for leg '{}' in tower '{}', skipping", leg, args.tower),
        }
    }

    let options = RenderOptions {
        annotations: args.annotations,
    };
    let mut drawing = render_geo(&selection, side_m, &origin, options)?;
    let written = write_drawing(&mut drawing, &args.out)?;

    println!("Wrote {}", written.display());
    println!(
        "CRS: {}. Origin: E={}, N={}. Azimuth cw from North: {}°",
        EGSA87_CRS, easting, northing, args.azimuth
    );
    Ok(())
}

fn require_tower(table: &DiagramTable, tower: &str) -> Result<()> {
    if table.rows_for_tower(tower).is_empty() {
        return Err(DiagramError::TowerNotFound {
            tower: tower.to_string(),
        }
        .into());
    }
    Ok(())
}

fn prompt_f64(prompt: &str) -> Result<f64> {
    print!("{}", prompt);
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    let trimmed = line.trim();
    trimmed
        .parse::<f64>()
        .with_context(|| format!("Invalid number: '{}'", trimmed))
}
