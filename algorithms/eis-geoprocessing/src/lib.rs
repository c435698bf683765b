//! # Geoprocessing
//!
//! `eis-geoprocessing` clips rasters with polygons and reprojects vector data. The geometry
//! algorithms themselves come from the caller: implement [`PolygonMask`] on top of a raster
//! I/O backend and [`CrsTransform`] on top of a projection library, and this crate adds the
//! input checks and metadata bookkeeping around them.
//!
//! Rasters are `(bands, rows, cols)` arrays with a [`RasterMeta`](eis_toolkit::RasterMeta)
//! record, geometries live in a [`GeometryCollection`] tagged with one CRS.

pub mod clipping;
mod error;
mod geometry;
pub mod reproject;

pub use clipping::{clip_raster, MaskOptions, Masked, PolygonMask};
pub use error::{GeoprocessingError, Result};
pub use geometry::{Geometry, GeometryCollection};
pub use reproject::{reproject_vector, CrsTransform};
