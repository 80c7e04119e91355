//! Destination resolution for generated files.
//!
//! Generated diagrams go to the user's desktop when one exists, otherwise
//! to a local `output/` directory created on demand.

use digkit_core::Result;
use std::fs;
use std::path::PathBuf;

/// Fallback output directory relative to the working directory.
const OUTPUT_DIR: &str = "output";

/// Resolve the destination for a generated file: the user desktop if it
/// exists, else `./output` (created on demand).
pub fn destination_path(filename: &str) -> Result<PathBuf> {
    if let Some(desktop) = dirs::desktop_dir() {
        if desktop.exists() {
            return Ok(desktop.join(filename));
        }
    }
    let dir = PathBuf::from(OUTPUT_DIR);
    fs::create_dir_all(&dir)?;
    Ok(dir.join(filename))
}

/// Append the `.dxf` extension when the name does not already carry it.
pub fn ensure_dxf_extension(filename: &str) -> String {
    if filename.to_lowercase().ends_with(".dxf") {
        filename.to_string()
    } else {
        format!("{}.dxf", filename)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_dxf_extension() {
        assert_eq!(ensure_dxf_extension("tower"), "tower.dxf");
        assert_eq!(ensure_dxf_extension("tower.dxf"), "tower.dxf");
        assert_eq!(ensure_dxf_extension("tower.DXF"), "tower.DXF");
        assert_eq!(ensure_dxf_extension("tower.v2"), "tower.v2.dxf");
    }
}
