//! Clipping rasters with polygon geometries
use std::fmt::Display;

use eis_toolkit::checks::{check_geometry_types, check_matching_crs};
use eis_toolkit::{Crs, Float, GeometryType, MetaValue, RasterArray, RasterMeta};
use ndarray::{ArrayBase, ArrayView3, Data, Ix3};

use crate::error::{GeoprocessingError, Result};
use crate::geometry::{Geometry, GeometryCollection};

/// How a polygon mask treats the raster
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaskOptions {
    /// Shrink the output to the bounding box of the geometries
    pub crop: bool,
    /// Keep every pixel touched by a geometry, not only those whose centre lies inside
    pub all_touched: bool,
}

impl Default for MaskOptions {
    fn default() -> Self {
        MaskOptions {
            crop: true,
            all_touched: true,
        }
    }
}

/// Output of a polygon mask
#[derive(Debug, Clone, PartialEq)]
pub struct Masked<F> {
    pub data: RasterArray<F>,
    /// Affine geotransform of `data`, in the six-coefficient order of the input metadata
    pub transform: [f64; 6],
}

/// Polygon masking primitive supplied by a raster I/O backend
pub trait PolygonMask<F, G> {
    type Error: Display;

    fn mask(
        &self,
        raster: ArrayView3<F>,
        meta: &RasterMeta,
        geometries: &[G],
        options: MaskOptions,
    ) -> std::result::Result<Masked<F>, Self::Error>;
}

/// Clips a `(bands, rows, cols)` raster to the area covered by polygon geometries
///
/// The raster and the geometries must share a CRS and every geometry must be a polygon or a
/// multipolygon. Masking crops to the geometries and keeps all touched pixels. Returns the
/// clipped stack and a copy of `meta` whose driver, height, width and transform describe it.
pub fn clip_raster<F, S, G, M>(
    raster: &ArrayBase<S, Ix3>,
    meta: &RasterMeta,
    raster_crs: Crs,
    geometries: &GeometryCollection<G>,
    masker: &M,
) -> Result<(RasterArray<F>, RasterMeta)>
where
    F: Float,
    S: Data<Elem = F>,
    G: Geometry,
    M: PolygonMask<F, G>,
{
    if !check_matching_crs(&[raster_crs, geometries.crs()]) {
        return Err(GeoprocessingError::CrsMismatch {
            raster: raster_crs,
            geometries: geometries.crs(),
        });
    }

    if !check_geometry_types(geometries.geometry_types(), &GeometryType::POLYGONAL) {
        let offending = geometries
            .geometry_types()
            .find(|g| !GeometryType::POLYGONAL.contains(g))
            .unwrap_or(GeometryType::GeometryCollection);
        return Err(GeoprocessingError::UnsupportedGeometryType(offending));
    }

    let Masked { data, transform } = masker
        .mask(
            raster.view(),
            meta,
            geometries.geometries(),
            MaskOptions::default(),
        )
        .map_err(|e| GeoprocessingError::Mask(e.to_string()))?;

    log::debug!(
        "clipped raster from {:?} to {:?} with {} geometries",
        raster.shape(),
        data.shape(),
        geometries.len()
    );

    let out_meta = meta
        .with("driver", "GTiff")
        .with("height", data.shape()[1])
        .with("width", data.shape()[2])
        .with("transform", MetaValue::Affine(transform));

    Ok((data, out_meta))
}
