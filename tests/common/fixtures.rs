//! Static manufacturer tables used across harnesses.
//!
//! Each fixture is a JSON document in the same nested shape as the built-in
//! table. Malformed fixtures pair the document with the location the shape
//! check must report.

use vinflat::ManufacturerCatalog;

/// Two regions, three countries, one manufacturer each.
pub const TABLE_SMALL: &str = r#"{
  "EU": { "Germany": { "BMW": "BMW AG" }, "France": { "RNL": "Renault" } },
  "NA": { "USA": { "FRD": "Ford" } }
}"#;

/// Countries with several codes and one country with none.
pub const TABLE_UNEVEN: &str = r#"{
  "Europe": {
    "Germany": { "WBA": "BMW AG", "WDB": "Mercedes-Benz", "WVW": "Volkswagen" },
    "Luxembourg": {}
  },
  "Oceania": {
    "Australia": { "6FP": "Ford Australia", "6G1": "Holden" }
  },
  "Antarctica": {}
}"#;

/// Russia and Turkey listed under both Europe and Asia, as the raw WMI
/// assignment lists do.
pub const TABLE_STRADDLING: &str = r#"{
  "Europe": {
    "Russia": { "XTA": "AvtoVAZ" },
    "Turkey": { "NM0": "Ford Otosan" }
  },
  "Asia": {
    "Russia": { "X7L": "Renault Russia" },
    "Turkey": { "NMT": "Toyota Turkey" },
    "Japan": { "JHM": "Honda" }
  }
}"#;

/// `(document, expected error location)` pairs that must fail the shape check.
pub const MALFORMED: &[(&str, &str)] = &[
    (r#"["Europe", "Asia"]"#, "$"),
    (r#""Europe""#, "$"),
    (r#"{"Europe": ["Germany"]}"#, r#"$."Europe""#),
    (r#"{"Europe": {"Germany": null}}"#, r#"$."Europe"."Germany""#),
    (r#"{"Europe": {"Germany": {"WBA": {"name": "BMW"}}}}"#, r#"$."Europe"."Germany"."WBA""#),
    (r#"{"Europe": {"Germany": {"WBA": "BMW AG", "WDB": false}}}"#, r#"$."Europe"."Germany"."WDB""#),
];

pub fn catalog(json: &str) -> ManufacturerCatalog {
    ManufacturerCatalog::from_json_str(json).expect("fixture must be a well-formed table")
}

pub fn builtin() -> ManufacturerCatalog {
    ManufacturerCatalog::builtin().expect("built-in table must be well-formed")
}
