//! Nodata substitution across the bands of a raster stack
use std::collections::BTreeMap;

use eis_toolkit::{Float, MetaValue, RasterArray, RasterMeta};
use ndarray::{ArrayBase, Axis, Data, Ix3};

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

use crate::error::{NodataError, Result};
use crate::policy::NodataPolicy;
use crate::replace::replace_values;
use crate::values::DEFAULT_NODATA;

/// Rewrites band-specific nodata markers of a raster stack to a single nodata value
///
/// ### Example
///
/// ```rust
/// use eis_nodata::RasterNodataMapper;
/// use ndarray::array;
/// use std::collections::BTreeMap;
///
/// let raster = array![[[0., 1.]], [[255., 0.]]];
/// let mut nodata_per_band = BTreeMap::new();
/// nodata_per_band.insert(1, vec![0.]);
/// nodata_per_band.insert(2, vec![255.]);
///
/// let remapped = RasterNodataMapper::new().remap(&raster, &nodata_per_band).unwrap();
/// assert_eq!(remapped, array![[[-9999., 1.]], [[-9999., 0.]]]);
/// ```
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Debug, Clone, PartialEq)]
pub struct RasterNodataMapper<F> {
    new_nodata: F,
}

impl<F: Float> Default for RasterNodataMapper<F> {
    fn default() -> Self {
        RasterNodataMapper {
            new_nodata: F::cast(DEFAULT_NODATA),
        }
    }
}

impl<F: Float> RasterNodataMapper<F> {
    /// Mapper writing the default nodata value `-9999`
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the nodata value written for every replaced marker
    pub fn new_nodata(mut self, new_nodata: F) -> Self {
        self.new_nodata = new_nodata;
        self
    }

    pub fn nodata(&self) -> F {
        self.new_nodata
    }

    /// Replaces, band by band, the markers listed for that band (and infinities) with the
    /// configured nodata value
    ///
    /// Keys of `nodata_per_band` are 1-based band indices. Bands without an entry are copied
    /// unchanged. Fails with `InvalidBandIndex` before touching any band if a key is 0 or
    /// larger than the number of bands.
    pub fn remap<S, V>(
        &self,
        raster: &ArrayBase<S, Ix3>,
        nodata_per_band: &BTreeMap<usize, V>,
    ) -> Result<RasterArray<F>>
    where
        S: Data<Elem = F>,
        V: AsRef<[F]>,
    {
        replace_each_band(
            raster,
            nodata_per_band.iter().map(|(&band, values)| (band, values.as_ref())),
            self.new_nodata,
        )
    }
}

/// Replaces the markers of every band described by `policy` with the policy's replacement
pub fn remap_with_policy<F, S>(
    raster: &ArrayBase<S, Ix3>,
    policy: &NodataPolicy<F>,
) -> Result<RasterArray<F>>
where
    F: Float,
    S: Data<Elem = F>,
{
    let bands = policy.bands().filter_map(|band| {
        policy
            .describe(band)
            .missing_values
            .map(|values| (band, values.as_slice()))
    });
    replace_each_band(raster, bands, policy.replacement())
}

fn replace_each_band<'a, F, S, I>(
    raster: &ArrayBase<S, Ix3>,
    nodata_per_band: I,
    new_nodata: F,
) -> Result<RasterArray<F>>
where
    F: Float,
    S: Data<Elem = F>,
    I: IntoIterator<Item = (usize, &'a [F])>,
{
    let num_bands = raster.len_of(Axis(0));
    let nodata_per_band: Vec<(usize, &[F])> = nodata_per_band.into_iter().collect();
    if let Some(&(band, _)) = nodata_per_band
        .iter()
        .find(|&&(band, _)| band < 1 || band > num_bands)
    {
        return Err(NodataError::InvalidBandIndex { band, num_bands });
    }

    let mut out = raster.to_owned();
    for (band, values) in nodata_per_band {
        let index = band - 1;
        let replaced = replace_values(&raster.index_axis(Axis(0), index), values, new_nodata);
        log::debug!("band {}: nodata markers {:?} -> {}", band, values, new_nodata);
        out.index_axis_mut(Axis(0), index).assign(&replaced);
    }

    Ok(out)
}

/// Copies raster metadata with `nodata` set to `nodata_value`
///
/// Only the record changes, no data values are converted.
pub fn set_nodata_raster_meta<V: Into<MetaValue>>(meta: &RasterMeta, nodata_value: V) -> RasterMeta {
    meta.with("nodata", nodata_value)
}
