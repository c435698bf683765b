use approx::assert_abs_diff_eq;
use ndarray::{Array1, Array3, Axis};
use ndarray_rand::rand::{rngs::SmallRng, Rng, SeedableRng};
use ndarray_rand::rand_distr::Uniform;
use ndarray_rand::RandomExt;

use eis_coda::clr::clr_bands;
use eis_coda::CodaError;
use eis_nodata::{guard, GuardError, NodataError, NodataPolicy, NodataValues, RasterNodataMapper};
use eis_toolkit::ParamGuard;

#[test]
fn clr_over_bands_with_nodata() {
    let mut rng = SmallRng::seed_from_u64(21);
    let mut raster = Array3::random_using((3, 16, 16), Uniform::new(0.1, 100.), &mut rng);
    let mut holes = Vec::new();
    for _ in 0..20 {
        let (band, row, col) = (rng.gen_range(0..3), rng.gen_range(0..16), rng.gen_range(0..16));
        raster[[band, row, col]] = if band == 2 { 0. } else { -9999. };
        holes.push((row, col));
    }

    let policy = NodataPolicy::<f64>::params(3)
        .band(1, -9999.)
        .band(2, -9999.)
        .band(3, 0.)
        .check()
        .unwrap();

    let clr = guard(|x: Array3<f64>| clr_bands(&x));
    let coords = clr.apply_bands(&raster, &policy).unwrap();

    for ((row, col), pixel) in coords
        .lanes(Axis(0))
        .into_iter()
        .enumerate()
        .map(|(i, lane)| ((i / 16, i % 16), lane))
    {
        if holes.contains(&(row, col)) {
            assert!(pixel.iter().all(|&v| v == -9999.));
        } else {
            assert!(pixel.iter().all(|v| v.is_finite()));
            assert_abs_diff_eq!(pixel.sum(), 0., epsilon = 1e-10);
        }
    }
}

#[test]
fn guarded_transform_error_is_reported() {
    let raster = Array3::from_elem((2, 2, 2), -1.);
    let policy = NodataPolicy::<f64>::params(2).band(1, 0.).check().unwrap();

    let clr = guard(|x: Array3<f64>| clr_bands(&x));
    let res = clr.apply_bands(&raster, &policy);
    assert!(matches!(
        res,
        Err(GuardError::Transform(CodaError::NonPositiveSample { band: 1, .. }))
    ));

    let policy = NodataPolicy::<f64>::params(3).band(3, 0.).check().unwrap();
    let res = clr.apply_bands(&raster, &policy);
    assert!(matches!(
        res,
        Err(GuardError::Nodata(NodataError::InvalidBandIndex { band: 3, .. }))
    ));
}

#[test]
fn guard_matches_direct_application_off_nodata() {
    let mut rng = SmallRng::seed_from_u64(5);
    let mut data = Array1::random_using(500, Uniform::new(-10., 10.), &mut rng);
    for i in (0..500).step_by(7) {
        data[i] = -9999.;
    }
    for i in (3..500).step_by(11) {
        data[i] = 255.;
    }
    let missing = NodataValues::new(vec![-9999., 255.]).unwrap();

    let square = |x: Array1<f64>| x.mapv(|v| v * v);
    let out = guard(square).apply(&data, &missing);
    let direct = square(data.clone());

    for ((&raw, &guarded), &plain) in data.iter().zip(out.iter()).zip(direct.iter()) {
        if missing.contains(raw) {
            assert_eq!(guarded, -9999.);
        } else {
            assert_eq!(guarded, plain);
        }
    }
}

#[test]
fn remap_then_guard_with_uniform_nodata() {
    let raster = ndarray::array![[[0., 2.]], [[3., 255.]]];
    let mut per_band = std::collections::BTreeMap::new();
    per_band.insert(1, vec![0.]);
    per_band.insert(2, vec![255.]);

    let unified = RasterNodataMapper::new().remap(&raster, &per_band).unwrap();
    let halved = guard(|x: Array3<f64>| x / 2f64).apply(&unified, &NodataValues::single(-9999.));

    assert_eq!(halved, ndarray::array![[[-9999., 1.]], [[1.5, -9999.]]]);
}
