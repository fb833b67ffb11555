//! Test builders: ergonomic constructors for catalogs.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on misuse rather than returning `Result`.

use vinflat::{CountryNode, ManufacturerCatalog, ManufacturerEntry, RegionNode};

// ---------------------------------------------------------------------------
// CatalogBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`ManufacturerCatalog`] fixtures.
///
/// `country` attaches to the last region, `wmi` to the last country. Unlike
/// JSON input, the builder allows repeated region names.
///
/// ```rust
/// let catalog = CatalogBuilder::new()
///     .region("Europe")
///     .country("Germany")
///     .wmi("WBA", "BMW AG")
///     .build();
/// ```
#[derive(Default)]
pub struct CatalogBuilder {
    regions: Vec<RegionNode>,
}

impl CatalogBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn region(mut self, name: impl Into<String>) -> Self {
        self.regions.push(RegionNode::new(name, Vec::new()));
        self
    }

    pub fn country(mut self, name: impl Into<String>) -> Self {
        let region = self
            .regions
            .last_mut()
            .expect("CatalogBuilder::country called before any region");
        region.countries.push(CountryNode::new(name, Vec::new()));
        self
    }

    pub fn wmi(mut self, code: impl Into<String>, name: impl Into<String>) -> Self {
        let country = self
            .regions
            .last_mut()
            .and_then(|r| r.countries.last_mut())
            .expect("CatalogBuilder::wmi called before any country");
        country.manufacturers.push(ManufacturerEntry::new(code, name));
        self
    }

    pub fn build(self) -> ManufacturerCatalog {
        ManufacturerCatalog::new(self.regions)
    }
}

// ---------------------------------------------------------------------------
// Generated catalogs
// ---------------------------------------------------------------------------

/// A catalog of `regions × countries × codes` with predictable names
/// (`R0`, `R0C1`, `R0C1M2`, …).
pub fn grid_catalog(regions: usize, countries: usize, codes: usize) -> ManufacturerCatalog {
    let regions = (0..regions)
        .map(|r| {
            let countries = (0..countries)
                .map(|c| {
                    let entries = (0..codes)
                        .map(|m| ManufacturerEntry::new(format!("R{r}C{c}M{m}"), format!("Maker {r}-{c}-{m}")))
                        .collect();
                    CountryNode::new(format!("R{r}C{c}"), entries)
                })
                .collect();
            RegionNode::new(format!("R{r}"), countries)
        })
        .collect();
    ManufacturerCatalog::new(regions)
}
