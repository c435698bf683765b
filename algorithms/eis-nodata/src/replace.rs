//! Element-wise value substitution
use eis_toolkit::Float;
use ndarray::{Array, ArrayBase, Data, Dimension};

use crate::values::matches_any;

/// Replaces every element equal to one of `values`, or infinite, with `new_value`
///
/// Works on arrays of any dimensionality and returns a new array. A NaN in `values` matches NaN
/// elements.
///
/// ### Example
///
/// ```rust
/// use eis_nodata::replace::replace_values;
/// use ndarray::array;
///
/// let band = array![[1., -9999.], [f64::INFINITY, 4.]];
/// let replaced = replace_values(&band, &[-9999.], 0.);
/// assert_eq!(replaced, array![[1., 0.], [0., 4.]]);
/// ```
pub fn replace_values<F, S, D>(data: &ArrayBase<S, D>, values: &[F], new_value: F) -> Array<F, D>
where
    F: Float,
    S: Data<Elem = F>,
    D: Dimension,
{
    data.mapv(|x| {
        if x.is_infinite() || matches_any(x, values) {
            new_value
        } else {
            x
        }
    })
}

/// Replaces NaN elements with `new_value`, all other elements are copied
pub fn replace_nan<F, S, D>(data: &ArrayBase<S, D>, new_value: F) -> Array<F, D>
where
    F: Float,
    S: Data<Elem = F>,
    D: Dimension,
{
    data.mapv(|x| if x.is_nan() { new_value } else { x })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{array, Array3};

    #[test]
    fn replaces_listed_values_and_infinities() {
        let data = array![0., 1., -1., f64::NEG_INFINITY, 2.];
        let out = replace_values(&data, &[0., -1.], 9.);
        assert_eq!(out, array![9., 1., 9., 9., 2.]);
        // input untouched
        assert_eq!(data[0], 0.);
    }

    #[test]
    fn nan_can_be_replaced_and_introduced() {
        let data = array![[f32::NAN, 3.]];
        assert_eq!(replace_values(&data, &[f32::NAN], -1.), array![[-1., 3.]]);

        let masked = replace_values(&array![[5f32, 3.]], &[5.], f32::NAN);
        assert!(masked[[0, 0]].is_nan());
        assert_eq!(masked[[0, 1]], 3.);
    }

    #[test]
    fn preserves_dimensionality() {
        let data = Array3::<f64>::from_elem((2, 3, 4), 7.);
        let out = replace_values(&data, &[7.], 0.);
        assert_eq!(out.dim(), (2, 3, 4));
        assert!(out.iter().all(|&v| v == 0.));
    }

    #[test]
    fn nan_restore_leaves_infinities() {
        let data = array![f64::NAN, f64::INFINITY, 1.];
        assert_eq!(replace_nan(&data, -9999.), array![-9999., f64::INFINITY, 1.]);
    }
}
