//! vinflat: WMI manufacturer table flattener.
//!
//! Re-exports [`vinflat_core`] and adds the command layer the binary drives,
//! so integration tests can import both directly.
//!
//! # Commands
//!
//! ```text
//! vinflat regions    ──► regions.json + confirmation on stdout
//! vinflat normalize  ──► { regions, countries, manufacturers } on stdout or file
//! vinflat check      ──► WMI / duplicate report
//! vinflat decode VIN ──► WMI lookup, check digit, model year
//! ```

pub mod commands;

pub use vinflat_core::*;
