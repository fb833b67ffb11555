//! Catalog checks: read-only lint of the manufacturer table.
//!
//! Flags the entries that make the derived tables misleading: WMI codes that
//! cannot appear in a VIN, codes claimed by more than one country, country
//! names repeated across regions (positional IDs duplicate those rows), and
//! empty branches or names.

use crate::catalog::ManufacturerCatalog;
use regex::Regex;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::OnceLock;

/// VIN characters exclude I, O and Q.
const WMI_PATTERN: &str = r"^[A-HJ-NPR-Z0-9]{3}$";

fn wmi_regex() -> &'static Regex {
    static WMI: OnceLock<Regex> = OnceLock::new();
    WMI.get_or_init(|| Regex::new(WMI_PATTERN).expect("WMI pattern must compile"))
}

/// Whether `code` is a syntactically valid World Manufacturer Identifier.
pub fn is_valid_wmi(code: &str) -> bool {
    wmi_regex().is_match(code)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Issue {
    InvalidWmi { code: String, country: String },
    DuplicateWmi { code: String, countries: Vec<String> },
    DuplicateCountry { name: String, regions: Vec<String> },
    EmptyRegion { region: String },
    EmptyCountry { country: String },
    EmptyName { code: String, country: String },
}

impl std::fmt::Display for Issue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Issue::InvalidWmi { code, country } => {
                write!(f, "invalid WMI code {code:?} under {country}")
            }
            Issue::DuplicateWmi { code, countries } => {
                write!(f, "WMI code {code} listed under {}", countries.join(", "))
            }
            Issue::DuplicateCountry { name, regions } => {
                write!(f, "country {name} listed under {}", regions.join(", "))
            }
            Issue::EmptyRegion { region } => write!(f, "region {region} has no countries"),
            Issue::EmptyCountry { country } => write!(f, "country {country} has no manufacturers"),
            Issue::EmptyName { code, country } => {
                write!(f, "WMI code {code} under {country} has an empty manufacturer name")
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CheckReport {
    pub issues: Vec<Issue>,
    pub codes_checked: usize,
}

impl CheckReport {
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn len(&self) -> usize {
        self.issues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }
}

/// First-seen-ordered grouping of `key → values`, so reports are deterministic.
#[derive(Default)]
struct Grouped {
    index: HashMap<String, usize>,
    groups: Vec<(String, Vec<String>)>,
}

impl Grouped {
    fn add(&mut self, key: &str, value: &str) {
        let slot = match self.index.get(key) {
            Some(&slot) => slot,
            None => {
                self.index.insert(key.to_string(), self.groups.len());
                self.groups.push((key.to_string(), Vec::new()));
                self.groups.len() - 1
            }
        };
        self.groups[slot].1.push(value.to_string());
    }

    fn repeated(self) -> impl Iterator<Item = (String, Vec<String>)> {
        self.groups.into_iter().filter(|(_, values)| values.len() > 1)
    }
}

/// Inspect `catalog` and list every issue found, in table order.
pub fn check_catalog(catalog: &ManufacturerCatalog) -> CheckReport {
    let mut report = CheckReport::default();
    let mut codes = Grouped::default();
    let mut countries = Grouped::default();

    for region in catalog.regions() {
        if region.countries.is_empty() {
            report.issues.push(Issue::EmptyRegion {
                region: region.name.clone(),
            });
        }

        for country in &region.countries {
            countries.add(&country.name, &region.name);
            if country.manufacturers.is_empty() {
                report.issues.push(Issue::EmptyCountry {
                    country: country.name.clone(),
                });
            }

            for entry in &country.manufacturers {
                report.codes_checked += 1;
                codes.add(&entry.code, &country.name);
                if !is_valid_wmi(&entry.code) {
                    report.issues.push(Issue::InvalidWmi {
                        code: entry.code.clone(),
                        country: country.name.clone(),
                    });
                }
                if entry.name.trim().is_empty() {
                    report.issues.push(Issue::EmptyName {
                        code: entry.code.clone(),
                        country: country.name.clone(),
                    });
                }
            }
        }
    }

    report.issues.extend(
        codes
            .repeated()
            .map(|(code, countries)| Issue::DuplicateWmi { code, countries }),
    );
    report.issues.extend(
        countries
            .repeated()
            .map(|(name, regions)| Issue::DuplicateCountry { name, regions }),
    );

    tracing::debug!(
        codes = report.codes_checked,
        issues = report.issues.len(),
        "checked manufacturer table"
    );
    report
}
