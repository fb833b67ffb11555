//! VIN decoding against the manufacturer table.
//!
//! A 17-character VIN splits into the WMI (positions 1-3), the VDS (4-9, with
//! the check digit at 9) and the VIS (10-17: model year, plant, serial). The
//! WMI is looked up in the [`ManufacturerCatalog`]; everything else is
//! positional.
//!
//! Decoding is pure: the model year depends on the current year, which the
//! caller passes in.

use crate::catalog::ManufacturerCatalog;
use crate::error::{Error, Result};
use serde::Serialize;

pub const VIN_LENGTH: usize = 17;

/// Position weights for the check-digit sum. Position 9 (the check digit
/// itself) weighs nothing.
const WEIGHTS: [u32; VIN_LENGTH] = [8, 7, 6, 5, 4, 3, 2, 10, 0, 9, 8, 7, 6, 5, 4, 3, 2];

/// Model-year codes in cycle order, starting at 1980 (`A`).
const MODEL_YEAR_CODES: &str = "ABCDEFGHJKLMNPRSTVWXY123456789";
const MODEL_YEAR_EPOCH: i32 = 1980;
const MODEL_YEAR_CYCLE: i32 = 30;

/// Why a string was rejected before decoding.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VinProblem {
    #[error("must be exactly 17 characters, got {0}")]
    Length(usize),
    #[error("invalid character {ch:?} at position {position}")]
    Character { ch: char, position: usize },
}

/// Numeric value of a VIN character. `I`, `O` and `Q` have none.
fn transliterate(ch: char) -> Option<u32> {
    let value = match ch {
        '0'..='9' => ch as u32 - '0' as u32,
        'A' | 'J' => 1,
        'B' | 'K' | 'S' => 2,
        'C' | 'L' | 'T' => 3,
        'D' | 'M' | 'U' => 4,
        'E' | 'N' | 'V' => 5,
        'F' | 'W' => 6,
        'G' | 'P' | 'X' => 7,
        'H' | 'Y' => 8,
        'R' | 'Z' => 9,
        _ => return None,
    };
    Some(value)
}

/// Upper-case and trim `raw`, then check its length and alphabet.
pub fn canonicalize(raw: &str) -> std::result::Result<String, VinProblem> {
    let vin = raw.trim().to_ascii_uppercase();
    let len = vin.chars().count();
    if len != VIN_LENGTH {
        return Err(VinProblem::Length(len));
    }
    if let Some((i, ch)) = vin.chars().enumerate().find(|&(_, ch)| transliterate(ch).is_none()) {
        return Err(VinProblem::Character { ch, position: i + 1 });
    }
    Ok(vin)
}

/// Expected check digit (`0`-`9` or `X`) for `vin`.
///
/// The character at position 9 is ignored, so this works on a VIN with a
/// placeholder there.
pub fn check_digit(vin: &str) -> Result<char> {
    let vin = canonicalize(vin).map_err(|problem| invalid(vin, problem))?;
    let total: u32 = vin
        .chars()
        .zip(WEIGHTS)
        .filter_map(|(ch, weight)| transliterate(ch).map(|v| v * weight))
        .sum();
    Ok(match total % 11 {
        10 => 'X',
        digit => char::from(b'0' + digit as u8),
    })
}

/// Resolve a model-year code to the latest year of its 30-year cycle that
/// is not after `current_year`.
///
/// `None` for characters that are not model-year codes (`0`, `U`, `Z`, ...)
/// or when the only candidate would precede 1980.
pub fn resolve_model_year(code: char, current_year: i32) -> Option<i32> {
    let offset = MODEL_YEAR_CODES.chars().position(|c| c == code)? as i32;
    let first = MODEL_YEAR_EPOCH + offset;
    if first > current_year {
        return None;
    }
    let cycles = (current_year - first) / MODEL_YEAR_CYCLE;
    Some(first + cycles * MODEL_YEAR_CYCLE)
}

/// Manufacturer table entry matched by a VIN's WMI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Origin {
    pub manufacturer: String,
    pub country: String,
    pub region: String,
}

/// A VIN split into its sections, with the check digit verified and the
/// WMI resolved against the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecodedVin {
    pub vin: String,
    pub wmi: String,
    pub vds: String,
    pub vis: String,
    pub check_digit: char,
    pub check_digit_valid: bool,
    pub model_year_code: char,
    /// `None` when the code does not resolve to a year up to the current one.
    pub model_year: Option<i32>,
    pub plant_code: char,
    pub serial_number: String,
    /// `None` when the WMI is not in the catalog.
    pub origin: Option<Origin>,
}

/// Decode `raw` against `catalog`.
///
/// Only malformed input is an error. An unknown WMI, a wrong check digit or
/// an unresolvable model year are reported in the result.
pub fn decode(catalog: &ManufacturerCatalog, raw: &str, current_year: i32) -> Result<DecodedVin> {
    let vin = canonicalize(raw).map_err(|problem| invalid(raw, problem))?;
    let chars: Vec<char> = vin.chars().collect();
    let expected = check_digit(&vin)?;

    let wmi = &vin[..3];
    let origin = catalog.find_wmi(wmi).map(|found| Origin {
        manufacturer: found.entry.name.clone(),
        country: found.country.name.clone(),
        region: found.region.name.clone(),
    });
    if origin.is_none() {
        tracing::debug!(wmi, "WMI not in manufacturer table");
    }

    Ok(DecodedVin {
        wmi: wmi.to_string(),
        vds: vin[3..9].to_string(),
        vis: vin[9..].to_string(),
        check_digit: chars[8],
        check_digit_valid: chars[8] == expected,
        model_year_code: chars[9],
        model_year: resolve_model_year(chars[9], current_year),
        plant_code: chars[10],
        serial_number: vin[11..].to_string(),
        origin,
        vin,
    })
}

fn invalid(raw: &str, problem: VinProblem) -> Error {
    Error::InvalidVin {
        vin: raw.trim().to_string(),
        problem,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
