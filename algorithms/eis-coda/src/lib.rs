//! # Compositional data transforms
//!
//! `eis-coda` implements log-ratio transforms for compositional data: samples whose parts are
//! strictly positive amounts of a whole, such as the element concentrations of a geochemical
//! assay. Ratios between parts carry the information, absolute magnitudes do not.
//!
//! * [`validation`](validation/index.html) rejects tables with missing columns or with zero,
//!   negative or non-finite parts before any arithmetic runs
//! * [`clr`](clr/index.html) maps compositions, subcompositions and raster band stacks to
//!   centered log-ratio coordinates and back
//!
//! ```rust
//! use eis_coda::clr::{clr_columns, inverse_clr};
//! use eis_toolkit::Table;
//! use ndarray::{array, Axis};
//!
//! let table = Table::new(
//!     array![[0.2f64, 0.3, 0.5, 4.0], [0.1, 0.6, 0.3, 7.0]],
//!     vec!["Cu", "Zn", "Pb", "Au"],
//! )
//! .unwrap();
//!
//! let coords = clr_columns(&table, &["Cu", "Zn", "Pb"]).unwrap();
//! let parts = table.select(&["Cu", "Zn", "Pb"]).unwrap();
//! let restored = inverse_clr(&coords, &parts.records().sum_axis(Axis(1))).unwrap();
//! assert!((restored.records() - parts.records()).iter().all(|d| d.abs() < 1e-12));
//! ```

pub mod clr;
pub mod error;
pub mod validation;

pub use clr::{Clr, ClrParams, ClrValidParams};
pub use error::{CodaError, Result};
