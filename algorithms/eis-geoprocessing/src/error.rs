//! Error definitions for geoprocessing
use eis_toolkit::{Crs, GeometryType};
use thiserror::Error;
pub type Result<T> = std::result::Result<T, GeoprocessingError>;

#[derive(Error, Debug, Clone)]
pub enum GeoprocessingError {
    #[error("raster is in {raster} but geometries are in {geometries}")]
    CrsMismatch { raster: Crs, geometries: Crs },
    #[error("geometry type {0} is not supported, expected polygons")]
    UnsupportedGeometryType(GeometryType),
    #[error("vector data is already in the target CRS {0}")]
    MatchingCrs(Crs),
    #[error("polygon masking failed: {0}")]
    Mask(String),
    #[error("coordinate transform failed: {0}")]
    Transform(String),
}
