//! Subcommand bodies.
//!
//! Each command takes the resolved [`Config`], the catalog it should read and
//! a writer for operator-facing output, so integration tests can run them
//! against a buffer instead of stdout.

use anyhow::Context;
use std::io::Write;
use std::path::{Path, PathBuf};
use vinflat_core::{
    check::{check_catalog, CheckReport},
    config::Config,
    regions::write_regions,
    vin::DecodedVin,
    Error, ManufacturerCatalog, NormalizedTables, Normalizer,
};

/// Read the catalog named by `input` (or the config), falling back to the
/// built-in table.
pub fn load_catalog(config: &Config, input: Option<&Path>) -> anyhow::Result<ManufacturerCatalog> {
    let path = input.map(Path::to_path_buf).or_else(|| config.input_path());
    match path {
        Some(path) => ManufacturerCatalog::from_path(&path)
            .with_context(|| format!("loading manufacturer table {}", path.display())),
        None => ManufacturerCatalog::builtin().context("loading built-in manufacturer table"),
    }
}

/// Write the region list and confirm it on `out`.
pub fn regions(
    config: &Config,
    catalog: &ManufacturerCatalog,
    output: Option<PathBuf>,
    out: &mut impl Write,
) -> anyhow::Result<Vec<String>> {
    let path = output.unwrap_or_else(|| config.regions_output());
    let names = write_regions(catalog, &path)?;
    writeln!(out, "Extracted regions: {names:?}")?;
    Ok(names)
}

/// Per-invocation overrides for `normalize`.
#[derive(Debug, Clone, Default)]
pub struct NormalizeArgs {
    pub merge_by_name: bool,
    pub compact: bool,
    pub output: Option<PathBuf>,
}

/// Build the three tables and print them, or write them to a file and print
/// a summary.
pub fn normalize(
    config: &Config,
    catalog: &ManufacturerCatalog,
    args: &NormalizeArgs,
    out: &mut impl Write,
) -> anyhow::Result<NormalizedTables> {
    let strategy = if args.merge_by_name {
        vinflat_core::IdStrategy::MergeByName
    } else {
        config.normalize.strategy
    };
    let tables = Normalizer::new(strategy).normalize(catalog);

    let json = if config.normalize.pretty && !args.compact {
        tables.to_json_pretty()?
    } else {
        tables.to_json()?
    };

    match args.output.clone().or_else(|| config.normalize_output()) {
        Some(path) => {
            std::fs::write(&path, &json).map_err(|source| Error::OutputWrite {
                path: path.clone(),
                source,
            })?;
            writeln!(out, "Wrote {} to {}", tables.summary(), path.display())?;
        }
        None => writeln!(out, "{json}")?,
    }
    Ok(tables)
}

/// Print every issue in the catalog followed by a one-line verdict. With
/// `strict`, any issue is an error.
pub fn check(
    catalog: &ManufacturerCatalog,
    strict: bool,
    out: &mut impl Write,
) -> anyhow::Result<CheckReport> {
    let report = check_catalog(catalog);
    for issue in &report.issues {
        writeln!(out, "  {issue}")?;
    }
    if report.is_clean() {
        writeln!(out, "OK: {} WMI codes checked, no issues", report.codes_checked)?;
    } else {
        writeln!(
            out,
            "{} issue(s) across {} WMI codes",
            report.len(),
            report.codes_checked
        )?;
        if strict {
            anyhow::bail!("manufacturer table failed checks with {} issue(s)", report.len());
        }
    }
    Ok(report)
}

/// Decode one VIN and print it as a labelled block, or as JSON.
pub fn decode(
    catalog: &ManufacturerCatalog,
    vin: &str,
    current_year: i32,
    json: bool,
    out: &mut impl Write,
) -> anyhow::Result<DecodedVin> {
    let decoded = vinflat_core::decode(catalog, vin, current_year)?;
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&decoded)?)?;
        return Ok(decoded);
    }

    let origin = match &decoded.origin {
        Some(o) => format!("{} ({}, {})", o.manufacturer, o.country, o.region),
        None => "unknown manufacturer".to_string(),
    };
    let validity = if decoded.check_digit_valid { "valid" } else { "invalid" };
    let year = decoded
        .model_year
        .map_or_else(|| "unknown".to_string(), |y| y.to_string());

    writeln!(out, "VIN          {}", decoded.vin)?;
    writeln!(out, "WMI          {}  {origin}", decoded.wmi)?;
    writeln!(out, "VDS          {}", decoded.vds)?;
    writeln!(out, "VIS          {}", decoded.vis)?;
    writeln!(out, "Check digit  {} ({validity})", decoded.check_digit)?;
    writeln!(out, "Model year   {year} (code {})", decoded.model_year_code)?;
    writeln!(out, "Plant        {}", decoded.plant_code)?;
    writeln!(out, "Serial       {}", decoded.serial_number)?;
    Ok(decoded)
}
