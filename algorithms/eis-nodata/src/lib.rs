//! # Nodata handling
//!
//! Raster bands and tables mark missing samples with sentinel values such as `-9999`, `0` or
//! `255`, often different ones per band. This crate provides
//!
//! * [`NodataValues`](values/struct.NodataValues.html), a non-empty set of markers with a
//!   canonical representative
//! * [`NodataPolicy`](policy/struct.NodataPolicy.html), the markers of every band of a stack
//!   and the value replacing them
//! * [`NodataGuard`](guard/struct.NodataGuard.html), which runs any numeric transform on data
//!   whose markers are hidden behind NaN and restores the markers afterwards
//! * [`RasterNodataMapper`](raster/struct.RasterNodataMapper.html) and
//!   [`set_nodata_raster_meta`](raster/fn.set_nodata_raster_meta.html) to unify the nodata
//!   value of a raster and its metadata
//! * element-wise [`replace`](replace/index.html) and [`table`](table/index.html) helpers
//!
//! No function modifies its input, every result is a new array, table or metadata record.

pub mod error;
pub mod guard;
pub mod policy;
pub mod raster;
pub mod replace;
pub mod table;
pub mod values;

pub use error::{GuardError, NodataError, Result};
pub use guard::{guard, NodataGuard};
pub use policy::{NodataDescription, NodataPolicy, NodataPolicyParams};
pub use raster::{remap_with_policy, set_nodata_raster_meta, RasterNodataMapper};
pub use values::{NodataValues, DEFAULT_NODATA};
