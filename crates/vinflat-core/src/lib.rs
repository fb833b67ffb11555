//! vinflat-core: WMI manufacturer table flattening.
//!
//! The input is one nested table, `region → country → WMI code → manufacturer`.
//! Two independent transforms read it:
//!
//! ```text
//!                      ┌──► regions    ──► regions.json   (ordered region names)
//! ManufacturerCatalog ─┤
//!                      └──► normalizer ──► regions / countries / manufacturers
//! ```
//!
//! [`check`] lints the same table without producing output, and [`vin`]
//! decodes single VINs against it. Everything is a single synchronous pass
//! over an immutable catalog that callers pass in explicitly.

pub mod catalog;
pub mod check;
pub mod config;
pub mod error;
pub mod normalizer;
pub mod regions;
pub mod types;
pub mod vin;

pub use catalog::{CountryNode, ManufacturerCatalog, ManufacturerEntry, RegionNode, WmiLookup};
pub use error::{Error, Result};
pub use normalizer::{normalize, IdStrategy, Normalizer};
pub use types::{Country, Manufacturer, NormalizedTables, Region, TableSummary};
pub use vin::{decode, DecodedVin, Origin, VinProblem};
