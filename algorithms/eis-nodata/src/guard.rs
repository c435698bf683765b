//! Running numeric transforms on data with nodata markers
//!
//! A [`NodataGuard`](struct.NodataGuard.html) wraps a transform in three stages:
//!
//! 1. every element matching a nodata marker, or infinite, is replaced by NaN
//! 2. the transform runs on that intermediate array
//! 3. every NaN of the transform's output is replaced by the canonical nodata marker
//!
//! The transform never sees the raw markers and the caller never sees the intermediate NaN.
//! Transforms are expected to propagate NaN, as floating point arithmetic does.
use eis_toolkit::{Float, RasterArray};
use ndarray::{Array, ArrayBase, Axis, Data, Dimension, Ix3};

use crate::error::GuardError;
use crate::policy::NodataPolicy;
use crate::replace::{replace_nan, replace_values};
use crate::values::NodataValues;

/// Nodata-aware wrapper around a numeric transform
///
/// ### Example
///
/// ```rust
/// use eis_nodata::{guard, NodataValues};
/// use ndarray::{array, Array1};
///
/// let standardize = guard(|x: Array1<f64>| {
///     let valid: Vec<f64> = x.iter().copied().filter(|v| !v.is_nan()).collect();
///     let mean = valid.iter().sum::<f64>() / valid.len() as f64;
///     x.mapv(|v| v - mean)
/// });
///
/// let out = standardize.apply(&array![1., -9999., 3.], &NodataValues::single(-9999.));
/// assert_eq!(out, array![-1., -9999., 1.]);
/// ```
#[derive(Debug, Clone)]
pub struct NodataGuard<T> {
    transform: T,
}

/// Wraps `transform` in a [`NodataGuard`](struct.NodataGuard.html)
pub fn guard<T>(transform: T) -> NodataGuard<T> {
    NodataGuard::new(transform)
}

impl<T> NodataGuard<T> {
    pub fn new(transform: T) -> Self {
        NodataGuard { transform }
    }

    /// Unwraps the guarded transform
    pub fn into_inner(self) -> T {
        self.transform
    }

    /// Masks `missing_values`, runs the transform and restores the canonical marker
    pub fn apply<F, S, D, E>(
        &self,
        data: &ArrayBase<S, D>,
        missing_values: &NodataValues<F>,
    ) -> Array<F, E>
    where
        T: Fn(Array<F, D>) -> Array<F, E>,
        F: Float,
        S: Data<Elem = F>,
        D: Dimension,
        E: Dimension,
    {
        let masked = mask(data, missing_values);
        let out = (self.transform)(masked);
        replace_nan(&out, missing_values.canonical())
    }

    /// Like [`apply`](#method.apply) for transforms that can fail; their error is returned
    /// unchanged
    pub fn apply_fallible<F, S, D, E, Err>(
        &self,
        data: &ArrayBase<S, D>,
        missing_values: &NodataValues<F>,
    ) -> Result<Array<F, E>, Err>
    where
        T: Fn(Array<F, D>) -> Result<Array<F, E>, Err>,
        F: Float,
        S: Data<Elem = F>,
        D: Dimension,
        E: Dimension,
    {
        let masked = mask(data, missing_values);
        let out = (self.transform)(masked)?;
        Ok(replace_nan(&out, missing_values.canonical()))
    }

    /// Masks each band with its own markers from `policy`, runs the transform on the whole
    /// stack and writes the policy's replacement value wherever the output is NaN
    ///
    /// Bands without markers enter the transform unchanged. Fails before running the transform
    /// if the policy references a band outside the stack.
    pub fn apply_bands<F, S, E, Err>(
        &self,
        raster: &ArrayBase<S, Ix3>,
        policy: &NodataPolicy<F>,
    ) -> Result<Array<F, E>, GuardError<Err>>
    where
        T: Fn(RasterArray<F>) -> Result<Array<F, E>, Err>,
        F: Float,
        S: Data<Elem = F>,
        E: Dimension,
        Err: std::error::Error + 'static,
    {
        policy.validate_for(raster.len_of(Axis(0)))?;

        let mut masked = raster.to_owned();
        for (index, mut band) in masked.axis_iter_mut(Axis(0)).enumerate() {
            if let Some(values) = policy.describe(index + 1).missing_values {
                let replaced = replace_values(&band, values.as_slice(), F::nan());
                band.assign(&replaced);
            }
        }

        let out = (self.transform)(masked).map_err(GuardError::Transform)?;
        Ok(replace_nan(&out, policy.replacement()))
    }
}

fn mask<F, S, D>(data: &ArrayBase<S, D>, missing_values: &NodataValues<F>) -> Array<F, D>
where
    F: Float,
    S: Data<Elem = F>,
    D: Dimension,
{
    let masked = replace_values(data, missing_values.as_slice(), F::nan());
    log::debug!(
        "masked {} of {} elements as nodata",
        masked.iter().filter(|v| v.is_nan()).count(),
        masked.len()
    );
    masked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NodataError;
    use approx::assert_abs_diff_eq;
    use eis_toolkit::ParamGuard;
    use ndarray::{array, Array1, Array2, Array3};
    use std::cell::RefCell;

    #[test]
    fn transform_never_sees_markers() {
        let seen = RefCell::new(Vec::new());
        let spy = guard(|x: Array1<f64>| {
            seen.borrow_mut().extend(x.iter().copied());
            x
        });

        let missing = NodataValues::new(vec![-9999., -1.]).unwrap();
        let out = spy.apply(&array![1., -1., -9999., f64::INFINITY, 2.], &missing);

        let seen = seen.into_inner();
        assert!(seen.iter().all(|&v| v != -9999. && v != -1. && !v.is_infinite()));
        assert_eq!(seen.iter().filter(|v| v.is_nan()).count(), 3);
        assert_eq!(out, array![1., -9999., -9999., -9999., 2.]);
    }

    #[test]
    fn caller_never_sees_nan() {
        let doubled = guard(|x: Array2<f32>| x * 2f32);
        let data = array![[0f32, 1.], [2., 0.]];
        let out = doubled.apply(&data, &NodataValues::single(0.));

        assert!(out.iter().all(|v| !v.is_nan()));
        assert_eq!(out, array![[0., 2.], [4., 0.]]);
        // input untouched
        assert_eq!(data, array![[0., 1.], [2., 0.]]);
    }

    #[test]
    fn output_shape_may_differ() {
        let row_sums = guard(|x: Array2<f64>| x.sum_axis(Axis(1)));
        let out = row_sums.apply(&array![[1., 2.], [-5., 3.]], &NodataValues::single(-5.));
        assert_eq!(out, array![3., -5.]);
    }

    #[test]
    fn fallible_error_is_passed_through() {
        let failing = guard(|_: Array1<f64>| -> Result<Array1<f64>, NodataError> {
            Err(NodataError::EmptyNodata)
        });
        let res = failing.apply_fallible(&array![1., 2.], &NodataValues::single(0.));
        assert!(matches!(res, Err(NodataError::EmptyNodata)));

        let passing = guard(|x: Array1<f64>| -> Result<Array1<f64>, NodataError> { Ok(x + 1f64) });
        let out = passing
            .apply_fallible(&array![1., 0.], &NodataValues::single(0.))
            .unwrap();
        assert_abs_diff_eq!(out, array![2., 0.]);
    }

    #[test]
    fn bands_use_their_own_markers() {
        let mut raster = Array3::<f64>::ones((2, 2, 2));
        raster[[0, 0, 0]] = 0.;
        raster[[1, 1, 1]] = 255.;
        // 0 is valid data in band 2
        raster[[1, 0, 0]] = 0.;

        let policy = NodataPolicy::<f64>::params(2)
            .band(1, 0.)
            .band(2, 255.)
            .check()
            .unwrap();
        let identity = guard(|x: Array3<f64>| -> Result<Array3<f64>, NodataError> { Ok(x) });
        let out = identity.apply_bands(&raster, &policy).unwrap();

        assert_eq!(out[[0, 0, 0]], -9999.);
        assert_eq!(out[[1, 1, 1]], -9999.);
        assert_eq!(out[[1, 0, 0]], 0.);
        assert_eq!(out[[0, 1, 1]], 1.);
    }

    #[test]
    fn bands_policy_must_fit_raster() {
        let policy = NodataPolicy::<f64>::params(3).band(3, 0.).check().unwrap();
        let identity = guard(|x: Array3<f64>| -> Result<Array3<f64>, NodataError> { Ok(x) });
        let res = identity.apply_bands(&Array3::<f64>::ones((2, 1, 1)), &policy);
        assert!(matches!(
            res,
            Err(GuardError::Nodata(NodataError::InvalidBandIndex {
                band: 3,
                num_bands: 2
            }))
        ));
    }
}
