use eis_toolkit::{Crs, GeometryType};

/// A vector geometry the toolkit can classify
///
/// Geometry algorithms are out of scope, implement this for the geometry type of your vector
/// library.
pub trait Geometry {
    fn geometry_type(&self) -> GeometryType;
}

/// Geometries sharing one coordinate reference system
#[derive(Debug, Clone, PartialEq)]
pub struct GeometryCollection<G> {
    crs: Crs,
    geometries: Vec<G>,
}

impl<G: Geometry> GeometryCollection<G> {
    pub fn new(crs: Crs, geometries: Vec<G>) -> Self {
        GeometryCollection { crs, geometries }
    }

    pub fn crs(&self) -> Crs {
        self.crs
    }

    pub fn geometries(&self) -> &[G] {
        &self.geometries
    }

    pub fn len(&self) -> usize {
        self.geometries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.geometries.is_empty()
    }

    pub fn geometry_types(&self) -> impl Iterator<Item = GeometryType> + '_ {
        self.geometries.iter().map(Geometry::geometry_type)
    }
}
