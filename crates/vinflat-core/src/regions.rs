//! Region extractor: the ordered list of top-level region names.

use crate::catalog::ManufacturerCatalog;
use crate::error::{Error, Result};
use std::path::Path;

/// Default file the region list is written to.
pub const DEFAULT_REGIONS_FILE: &str = "regions.json";

/// Region names in source order. Names are taken as-is; the table's keys are
/// already unique.
pub fn region_names(catalog: &ManufacturerCatalog) -> Vec<String> {
    catalog.regions().iter().map(|r| r.name.clone()).collect()
}

/// Pretty JSON array with two-space indent and no trailing newline.
pub fn render_regions(names: &[String]) -> Result<String> {
    Ok(serde_json::to_string_pretty(names)?)
}

/// Extract the region names and write them to `path`, replacing any existing
/// file. Returns the names that were written.
pub fn write_regions(catalog: &ManufacturerCatalog, path: &Path) -> Result<Vec<String>> {
    let names = region_names(catalog);
    let json = render_regions(&names)?;
    std::fs::write(path, json).map_err(|source| Error::OutputWrite {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path.display(), count = names.len(), "wrote region list");
    Ok(names)
}
