//! Boolean input checks
//!
//! These predicates never fail, callers decide which error to raise.
use crate::geo::{Crs, GeometryType};

/// True if all reference systems are identical. An empty or single-element slice matches.
pub fn check_matching_crs(crs: &[Crs]) -> bool {
    match crs.split_first() {
        Some((first, rest)) => rest.iter().all(|c| c == first),
        None => true,
    }
}

/// True if every geometry type is one of `allowed`
pub fn check_geometry_types<I>(geometries: I, allowed: &[GeometryType]) -> bool
where
    I: IntoIterator<Item = GeometryType>,
{
    geometries.into_iter().all(|g| allowed.contains(&g))
}
