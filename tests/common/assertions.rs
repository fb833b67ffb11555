//! Domain-specific assertions for vinflat harnesses.
//!
//! These wrap `pretty_assertions` and add failure messages that name which
//! table invariant was violated and at which row.

use vinflat::{ManufacturerCatalog, NormalizedTables};

// ---------------------------------------------------------------------------
// ID assertions
// ---------------------------------------------------------------------------

/// Assert that a table's IDs are exactly `1..=len` in row order.
///
/// ```rust
/// assert_dense_ids!(tables.regions);
/// ```
#[macro_export]
macro_rules! assert_dense_ids {
    ($rows:expr) => {{
        for (pos, row) in $rows.iter().enumerate() {
            let expected = pos as u64 + 1;
            if row.id != expected {
                panic!(
                    "assert_dense_ids! failed at row {}:\n  expected id: {}\n  actual id:   {}\n  row: {:?}",
                    pos, expected, row.id, row
                );
            }
        }
    }};
}

// ---------------------------------------------------------------------------
// Foreign key assertions
// ---------------------------------------------------------------------------

/// Assert every `country.region_id` and `manufacturer.country_id` names a row
/// that appears earlier in its table's emission order.
pub fn assert_foreign_keys_resolve(tables: &NormalizedTables) {
    for country in &tables.countries {
        assert!(
            tables.region(country.region_id).is_some(),
            "country {:?} points at missing region {}",
            country.name,
            country.region_id
        );
    }
    for manufacturer in &tables.manufacturers {
        assert!(
            tables.country(manufacturer.country_id).is_some(),
            "manufacturer {:?} points at missing country {}",
            manufacturer.code,
            manufacturer.country_id
        );
    }
}

/// Assert positional normalization of `catalog`: one row per source entry, in
/// source order, with every foreign key equal to the 1-based position of the
/// containing entry.
pub fn assert_positional_tables(catalog: &ManufacturerCatalog, tables: &NormalizedTables) {
    assert_eq!(
        tables.regions.len(),
        catalog.region_count(),
        "one region row per top-level key"
    );
    assert_eq!(tables.countries.len(), catalog.country_count());
    assert_eq!(tables.manufacturers.len(), catalog.manufacturer_count());

    let mut countries = tables.countries.iter();
    let mut manufacturers = tables.manufacturers.iter();
    for (region_pos, region) in catalog.regions().iter().enumerate() {
        let region_row = &tables.regions[region_pos];
        assert_eq!(region_row.name, region.name, "region order differs from source");

        for country in &region.countries {
            let country_row = countries.next().expect("fewer country rows than source countries");
            assert_eq!(country_row.name, country.name, "country order differs from source");
            assert_eq!(
                country_row.region_id,
                region_pos as u64 + 1,
                "country {:?} has the wrong region_id",
                country.name
            );

            for entry in &country.manufacturers {
                let row = manufacturers
                    .next()
                    .expect("fewer manufacturer rows than source codes");
                assert_eq!(row.code, entry.code);
                assert_eq!(row.name, entry.name);
                assert_eq!(
                    row.country_id, country_row.id,
                    "manufacturer {:?} has the wrong country_id",
                    entry.code
                );
            }
        }
    }
}
