//! Normalizer: flattens the nested catalog into three relational tables.
//!
//! Traversal is depth-first in source order: each region is emitted, then each
//! of its countries, then each of that country's manufacturers. A row's ID is
//! its 1-based position in its table, so IDs are dense and every foreign key
//! points at a row emitted earlier in the same pass.
//!
//! [`IdStrategy::MergeByName`] swaps positional IDs for a first-sighting
//! name lookup: repeated region or country names reuse the ID of the first
//! row instead of emitting a duplicate.

use crate::catalog::{CountryNode, ManufacturerCatalog};
use crate::types::{Country, Manufacturer, NormalizedTables, Region};
use serde::Deserialize;
use std::collections::HashMap;

/// How region and country IDs are assigned.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IdStrategy {
    /// One row per occurrence; ID is the row's 1-based position.
    #[default]
    Positional,
    /// One row per distinct name; later occurrences reuse the first ID.
    MergeByName,
}

impl std::fmt::Display for IdStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IdStrategy::Positional => write!(f, "positional"),
            IdStrategy::MergeByName => write!(f, "merge-by-name"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Normalizer {
    strategy: IdStrategy,
}

/// Normalize with positional IDs.
pub fn normalize(catalog: &ManufacturerCatalog) -> NormalizedTables {
    Normalizer::default().normalize(catalog)
}

impl Normalizer {
    pub fn new(strategy: IdStrategy) -> Self {
        Self { strategy }
    }

    pub fn strategy(&self) -> IdStrategy {
        self.strategy
    }

    pub fn normalize(&self, catalog: &ManufacturerCatalog) -> NormalizedTables {
        let mut pass = Pass::new(self.strategy);
        for region in catalog.regions() {
            let region_id = pass.region(&region.name);
            tracing::debug!(region = %region.name, region_id, "normalizing region");
            for country in &region.countries {
                pass.country(country, region_id);
            }
        }

        let tables = pass.tables;
        tracing::info!(strategy = %self.strategy, "normalized {}", tables.summary());
        tables
    }
}

// ---------------------------------------------------------------------------
// Single traversal state
// ---------------------------------------------------------------------------

struct Pass {
    strategy: IdStrategy,
    tables: NormalizedTables,
    region_ids: HashMap<String, u64>,
    country_ids: HashMap<String, u64>,
}

impl Pass {
    fn new(strategy: IdStrategy) -> Self {
        Self {
            strategy,
            tables: NormalizedTables::default(),
            region_ids: HashMap::new(),
            country_ids: HashMap::new(),
        }
    }

    fn region(&mut self, name: &str) -> u64 {
        if self.strategy == IdStrategy::MergeByName {
            if let Some(&id) = self.region_ids.get(name) {
                return id;
            }
        }

        let id = next_id(self.tables.regions.len());
        self.tables.regions.push(Region {
            id,
            name: name.to_string(),
        });
        if self.strategy == IdStrategy::MergeByName {
            self.region_ids.insert(name.to_string(), id);
        }
        id
    }

    fn country(&mut self, country: &CountryNode, region_id: u64) {
        let country_id = self.country_id(&country.name, region_id);
        self.tables
            .manufacturers
            .extend(country.manufacturers.iter().map(|m| Manufacturer {
                code: m.code.clone(),
                name: m.name.clone(),
                country_id,
            }));
    }

    fn country_id(&mut self, name: &str, region_id: u64) -> u64 {
        if self.strategy == IdStrategy::MergeByName {
            if let Some(&id) = self.country_ids.get(name) {
                return id;
            }
        }

        let id = next_id(self.tables.countries.len());
        self.tables.countries.push(Country {
            id,
            name: name.to_string(),
            region_id,
        });
        if self.strategy == IdStrategy::MergeByName {
            self.country_ids.insert(name.to_string(), id);
        }
        id
    }
}

/// 1-based ID of the row about to be appended to a table of `len` rows.
fn next_id(len: usize) -> u64 {
    len as u64 + 1
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
