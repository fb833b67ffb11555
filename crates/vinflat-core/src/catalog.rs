//! Typed manufacturer catalog: the three-level table every transform reads.
//!
//! The source table is nested `region → country → WMI code → manufacturer`.
//! [`ManufacturerCatalog`] makes that shape an explicit contract: it is only
//! ever constructed from a value that has already been checked level by level,
//! so the transforms downstream never see a half-shaped table.
//!
//! Order matters. Region, country and manufacturer order is the order of the
//! source document, and every derived ID depends on it.

use crate::error::{Error, Result};
use serde::ser::{Serialize, Serializer};
use serde_json::Value;
use std::path::Path;

/// The compiled-in WMI table shipped with the crate.
pub const BUILTIN_JSON: &str = include_str!("../data/manufacturers.json");

// ---------------------------------------------------------------------------
// Catalog types
// ---------------------------------------------------------------------------

/// A region → country → manufacturer table in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ManufacturerCatalog {
    regions: Vec<RegionNode>,
}

/// One top-level entry of the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionNode {
    pub name: String,
    pub countries: Vec<CountryNode>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryNode {
    pub name: String,
    pub manufacturers: Vec<ManufacturerEntry>,
}

/// A leaf of the table: WMI code and the manufacturer it identifies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManufacturerEntry {
    pub code: String,
    pub name: String,
}

impl RegionNode {
    pub fn new(name: impl Into<String>, countries: Vec<CountryNode>) -> Self {
        Self {
            name: name.into(),
            countries,
        }
    }
}

impl CountryNode {
    pub fn new(name: impl Into<String>, manufacturers: Vec<ManufacturerEntry>) -> Self {
        Self {
            name: name.into(),
            manufacturers,
        }
    }
}

impl ManufacturerEntry {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// Construction
// ---------------------------------------------------------------------------

impl ManufacturerCatalog {
    pub fn new(regions: Vec<RegionNode>) -> Self {
        Self { regions }
    }

    /// The built-in table.
    pub fn builtin() -> Result<Self> {
        Self::from_json_str(BUILTIN_JSON)
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(value)
    }

    /// Read and validate a table from a JSON file on disk.
    pub fn from_path(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| Error::InputRead {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json_str(&json)?;
        tracing::debug!(
            path = %path.display(),
            regions = catalog.region_count(),
            "loaded manufacturer table"
        );
        Ok(catalog)
    }

    /// Check the shape of `value` level by level and build the catalog.
    ///
    /// The first non-conforming value aborts the whole conversion with
    /// [`Error::InputShape`] pointing at its location.
    pub fn from_value(value: Value) -> Result<Self> {
        let root = match value {
            Value::Object(map) => map,
            other => return Err(Error::shape("$", "object of regions", &other)),
        };

        let mut regions = Vec::with_capacity(root.len());
        for (region_name, region_value) in root {
            let region_path = format!("$.{region_name:?}");
            let region_map = match region_value {
                Value::Object(map) => map,
                other => return Err(Error::shape(region_path, "object of countries", &other)),
            };

            let mut countries = Vec::with_capacity(region_map.len());
            for (country_name, country_value) in region_map {
                let country_path = format!("{region_path}.{country_name:?}");
                let country_map = match country_value {
                    Value::Object(map) => map,
                    other => {
                        return Err(Error::shape(
                            country_path,
                            "object of manufacturer codes",
                            &other,
                        ))
                    }
                };

                let mut manufacturers = Vec::with_capacity(country_map.len());
                for (code, name_value) in country_map {
                    let name = match name_value {
                        Value::String(name) => name,
                        other => {
                            return Err(Error::shape(
                                format!("{country_path}.{code:?}"),
                                "manufacturer name string",
                                &other,
                            ))
                        }
                    };
                    manufacturers.push(ManufacturerEntry { code, name });
                }
                countries.push(CountryNode::new(country_name, manufacturers));
            }
            regions.push(RegionNode::new(region_name, countries));
        }

        Ok(Self { regions })
    }
}

// ---------------------------------------------------------------------------
// Accessors
// ---------------------------------------------------------------------------

impl ManufacturerCatalog {
    pub fn regions(&self) -> &[RegionNode] {
        &self.regions
    }

    pub fn region_count(&self) -> usize {
        self.regions.len()
    }

    pub fn country_count(&self) -> usize {
        self.regions.iter().map(|r| r.countries.len()).sum()
    }

    pub fn manufacturer_count(&self) -> usize {
        self.regions
            .iter()
            .flat_map(|r| &r.countries)
            .map(|c| c.manufacturers.len())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// First entry whose code is `wmi`, in table order.
    pub fn find_wmi(&self, wmi: &str) -> Option<WmiLookup<'_>> {
        self.regions.iter().find_map(|region| {
            region.countries.iter().find_map(|country| {
                country
                    .manufacturers
                    .iter()
                    .find(|entry| entry.code == wmi)
                    .map(|entry| WmiLookup {
                        region,
                        country,
                        entry,
                    })
            })
        })
    }
}

/// A manufacturer entry together with the branches it sits under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WmiLookup<'a> {
    pub region: &'a RegionNode,
    pub country: &'a CountryNode,
    pub entry: &'a ManufacturerEntry,
}

// ---------------------------------------------------------------------------
// Serialization back to the nested form
// ---------------------------------------------------------------------------

impl Serialize for ManufacturerCatalog {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_map(
            self.regions
                .iter()
                .map(|r| (&r.name, CountriesAsMap(&r.countries))),
        )
    }
}

struct CountriesAsMap<'a>(&'a [CountryNode]);

impl Serialize for CountriesAsMap<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_map(
            self.0
                .iter()
                .map(|c| (&c.name, ManufacturersAsMap(&c.manufacturers))),
        )
    }
}

struct ManufacturersAsMap<'a>(&'a [ManufacturerEntry]);

impl Serialize for ManufacturersAsMap<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|m| (&m.code, &m.name)))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
