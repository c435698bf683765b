//! `eis-toolkit` provides numeric preprocessing for the tabular and raster datasets used in
//! mineral exploration workflows.
//!
//! This crate holds what every preprocessing step shares:
//!
//! * [`Table`](dataset/struct.Table.html), records with named columns
//! * [`RasterArray`](dataset/type.RasterArray.html) and
//!   [`RasterMeta`](dataset/struct.RasterMeta.html), a band stack and its metadata record
//! * the [`Float`](dataset/trait.Float.html) bound and the
//!   [`Transformer`](traits/trait.Transformer.html) trait
//! * [`ParamGuard`](param_guard/trait.ParamGuard.html) for validated configuration
//! * boolean [`checks`](checks/index.html) on reference systems and geometry types
//!
//! The transformations themselves live in the workspace crates:
//!
//! * `eis-coda` - centered log-ratio transform of compositional data
//! * `eis-nodata` - nodata substitution for arrays, tables and raster bands
//! * `eis-geoprocessing` - raster clipping and vector reprojection on top of caller-supplied
//!   geometry primitives
//!
//! All operations are synchronous and pure: they never modify the arrays or tables they are
//! given and return newly allocated results.

pub mod benchmarks;
pub mod checks;
pub mod dataset;
pub mod error;
pub mod geo;
pub mod param_guard;
pub mod prelude;
pub mod traits;

pub use dataset::{Float, MetaValue, RasterArray, RasterMeta, Table};
pub use error::{Error, Result};
pub use geo::{Crs, GeometryType};
pub use param_guard::ParamGuard;
