//! Moving vector data between coordinate reference systems
use std::fmt::Display;

use eis_toolkit::Crs;

use crate::error::{GeoprocessingError, Result};
use crate::geometry::{Geometry, GeometryCollection};

/// Coordinate transformation primitive supplied by a projection library
pub trait CrsTransform<G> {
    type Error: Display;

    fn transform(&self, geometry: &G, from: Crs, to: Crs) -> std::result::Result<G, Self::Error>;
}

/// Reprojects every geometry of `collection` to `target`
///
/// Fails with `MatchingCrs` if the collection is already in the target system. The input is
/// left untouched.
pub fn reproject_vector<G, T>(
    collection: &GeometryCollection<G>,
    target: Crs,
    transformer: &T,
) -> Result<GeometryCollection<G>>
where
    G: Geometry,
    T: CrsTransform<G>,
{
    let source = collection.crs();
    if source == target {
        return Err(GeoprocessingError::MatchingCrs(target));
    }

    let geometries = collection
        .geometries()
        .iter()
        .map(|g| {
            transformer
                .transform(g, source, target)
                .map_err(|e| GeoprocessingError::Transform(e.to_string()))
        })
        .collect::<Result<Vec<_>>>()?;

    log::debug!(
        "reprojected {} geometries from {} to {}",
        geometries.len(),
        source,
        target
    );

    Ok(GeometryCollection::new(target, geometries))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use eis_toolkit::GeometryType;

    #[derive(Debug, Clone, PartialEq)]
    struct Point(f64, f64);

    impl Geometry for Point {
        fn geometry_type(&self) -> GeometryType {
            GeometryType::Point
        }
    }

    /// Shifts points by a fixed offset, rejecting anything but 4326 -> 3857
    struct Shift(f64);

    impl CrsTransform<Point> for Shift {
        type Error = String;

        fn transform(&self, p: &Point, from: Crs, to: Crs) -> std::result::Result<Point, String> {
            if from != Crs(4326) || to != Crs(3857) {
                return Err(format!("unsupported {} -> {}", from, to));
            }
            Ok(Point(p.0 + self.0, p.1 + self.0))
        }
    }

    #[test]
    fn reprojects_all_geometries() {
        let points = GeometryCollection::new(Crs(4326), vec![Point(1., 2.), Point(-3., 0.5)]);
        let out = reproject_vector(&points, Crs(3857), &Shift(10.)).unwrap();

        assert_eq!(out.crs(), Crs(3857));
        assert_eq!(out.len(), 2);
        assert_abs_diff_eq!(out.geometries()[1].0, 7.);
        assert_eq!(points.crs(), Crs(4326));
    }

    #[test]
    fn already_in_target() {
        let points = GeometryCollection::new(Crs(3857), vec![Point(0., 0.)]);
        let res = reproject_vector(&points, Crs(3857), &Shift(1.));
        assert!(matches!(res, Err(GeoprocessingError::MatchingCrs(Crs(3857)))));
    }

    #[test]
    fn transform_failure_is_reported() {
        let points = GeometryCollection::new(Crs(3067), vec![Point(0., 0.)]);
        let res = reproject_vector(&points, Crs(3857), &Shift(1.));
        assert!(matches!(res, Err(GeoprocessingError::Transform(msg)) if msg.contains("EPSG:3067")));
    }
}
