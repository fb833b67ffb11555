//! Row types produced by the normalizer.
//!
//! Regions and countries carry synthetic 1-based IDs. Manufacturers keep their
//! WMI code as the natural key and point at their country by ID.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    pub id: u64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    pub id: u64,
    pub name: String,
    /// Foreign key into [`NormalizedTables::regions`].
    pub region_id: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manufacturer {
    /// WMI code, taken verbatim from the source table.
    pub code: String,
    pub name: String,
    /// Foreign key into [`NormalizedTables::countries`].
    pub country_id: u64,
}

/// The three flat tables, each in emission order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedTables {
    pub regions: Vec<Region>,
    pub countries: Vec<Country>,
    pub manufacturers: Vec<Manufacturer>,
}

/// Row counts per table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TableSummary {
    pub regions: usize,
    pub countries: usize,
    pub manufacturers: usize,
}

impl std::fmt::Display for TableSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} regions, {} countries, {} manufacturers",
            self.regions, self.countries, self.manufacturers
        )
    }
}

impl NormalizedTables {
    pub fn summary(&self) -> TableSummary {
        TableSummary {
            regions: self.regions.len(),
            countries: self.countries.len(),
            manufacturers: self.manufacturers.len(),
        }
    }

    /// Two-space indented JSON, no trailing newline.
    pub fn to_json_pretty(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn region(&self, id: u64) -> Option<&Region> {
        self.regions.iter().find(|r| r.id == id)
    }

    pub fn country(&self, id: u64) -> Option<&Country> {
        self.countries.iter().find(|c| c.id == id)
    }
}
