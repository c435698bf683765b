//! Coordinate reference systems and geometry kinds
//!
//! Only identifiers live here. Geometry algorithms and CRS definitions are provided by the
//! caller through the primitives in `eis-geoprocessing`.
use std::fmt;

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

/// Coordinate reference system, identified by its EPSG code
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Crs(pub u32);

impl Crs {
    pub fn epsg(code: u32) -> Self {
        Crs(code)
    }

    pub fn code(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for Crs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EPSG:{}", self.0)
    }
}

/// Simple-features geometry type
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeometryType {
    Point,
    MultiPoint,
    LineString,
    MultiLineString,
    Polygon,
    MultiPolygon,
    GeometryCollection,
}

impl GeometryType {
    /// Geometry types accepted by polygon masking
    pub const POLYGONAL: [GeometryType; 2] = [GeometryType::Polygon, GeometryType::MultiPolygon];
}

impl fmt::Display for GeometryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GeometryType::Point => "Point",
            GeometryType::MultiPoint => "MultiPoint",
            GeometryType::LineString => "LineString",
            GeometryType::MultiLineString => "MultiLineString",
            GeometryType::Polygon => "Polygon",
            GeometryType::MultiPolygon => "MultiPolygon",
            GeometryType::GeometryCollection => "GeometryCollection",
        };
        write!(f, "{}", name)
    }
}
