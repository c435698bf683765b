//! Per-band description of missing data
use std::collections::BTreeMap;
#[cfg(feature = "serde")]
use std::convert::TryFrom;

use eis_toolkit::{Float, ParamGuard};

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

use crate::error::{NodataError, Result};
use crate::values::{NodataValues, DEFAULT_NODATA};

/// What a policy says about one band
#[derive(Debug, Clone, PartialEq)]
pub struct NodataDescription<'a, F> {
    /// Raw values standing for missing data, `None` if the band has no markers
    pub missing_values: Option<&'a NodataValues<F>>,
    /// Value that replaces every missing marker
    pub replacement: F,
}

/// Validated nodata policy for a stack of `num_bands` bands
///
/// Maps 1-based band indices to the raw values considered missing in that band, together with
/// one replacement value shared by all bands. Build it through
/// [`NodataPolicy::params`](struct.NodataPolicy.html#method.params). A deserialized policy is
/// checked the same way.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(
        crate = "serde_crate",
        try_from = "UncheckedPolicy<F>",
        bound(
            serialize = "F: Float + Serialize",
            deserialize = "F: Float + Deserialize<'de>"
        )
    )
)]
#[derive(Debug, Clone, PartialEq)]
pub struct NodataPolicy<F> {
    num_bands: usize,
    missing: BTreeMap<usize, NodataValues<F>>,
    replacement: F,
}

/// Wire form of a policy before its bands are checked
#[cfg(feature = "serde")]
#[derive(Deserialize)]
#[serde(crate = "serde_crate", bound = "F: Float + Deserialize<'de>")]
struct UncheckedPolicy<F> {
    num_bands: usize,
    missing: BTreeMap<usize, NodataValues<F>>,
    replacement: F,
}

#[cfg(feature = "serde")]
impl<F: Float> TryFrom<UncheckedPolicy<F>> for NodataPolicy<F> {
    type Error = NodataError;

    fn try_from(raw: UncheckedPolicy<F>) -> Result<Self> {
        NodataPolicyParams(NodataPolicy {
            num_bands: raw.num_bands,
            missing: raw.missing,
            replacement: raw.replacement,
        })
        .check()
    }
}

/// Helper struct for building a [nodata policy](struct.NodataPolicy.html)
///
/// ### Example
///
/// ```rust
/// use eis_nodata::{NodataPolicy, NodataValues};
/// use eis_toolkit::ParamGuard;
///
/// let policy = NodataPolicy::<f64>::params(3)
///     .band(1, 0.)
///     .band(3, NodataValues::new(vec![-1., 255.]).unwrap())
///     .check()
///     .unwrap();
///
/// assert_eq!(policy.describe(3).replacement, -9999.);
/// assert!(policy.describe(2).missing_values.is_none());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct NodataPolicyParams<F>(NodataPolicy<F>);

impl<F: Float> NodataPolicy<F> {
    /// Starts a policy for `num_bands` bands, replacing missing data with `-9999`
    pub fn params(num_bands: usize) -> NodataPolicyParams<F> {
        NodataPolicyParams(NodataPolicy {
            num_bands,
            missing: BTreeMap::new(),
            replacement: F::cast(DEFAULT_NODATA),
        })
    }

    /// Missing markers and replacement for `band`
    pub fn describe(&self, band: usize) -> NodataDescription<'_, F> {
        NodataDescription {
            missing_values: self.missing.get(&band),
            replacement: self.replacement,
        }
    }

    /// Bands carrying missing markers, ascending
    pub fn bands(&self) -> impl Iterator<Item = usize> + '_ {
        self.missing.keys().copied()
    }

    pub fn num_bands(&self) -> usize {
        self.num_bands
    }

    pub fn replacement(&self) -> F {
        self.replacement
    }

    /// Checks that every band of the policy exists in a stack of `num_bands` bands
    pub fn validate_for(&self, num_bands: usize) -> Result<()> {
        match self.bands().find(|&band| band < 1 || band > num_bands) {
            Some(band) => Err(NodataError::InvalidBandIndex { band, num_bands }),
            None => Ok(()),
        }
    }
}

impl<F: Float> NodataPolicyParams<F> {
    /// Sets the missing markers of a 1-based band, replacing earlier ones
    pub fn band<V: Into<NodataValues<F>>>(mut self, band: usize, values: V) -> Self {
        self.0.missing.insert(band, values.into());
        self
    }

    /// Sets the value that replaces missing markers in every band
    pub fn replacement(mut self, replacement: F) -> Self {
        self.0.replacement = replacement;
        self
    }
}

impl<F: Float> ParamGuard for NodataPolicyParams<F> {
    type Checked = NodataPolicy<F>;
    type Error = NodataError;

    fn check_ref(&self) -> Result<&Self::Checked> {
        self.0.validate_for(self.0.num_bands)?;
        Ok(&self.0)
    }

    fn check(self) -> Result<Self::Checked> {
        self.check_ref()?;
        Ok(self.0)
    }
}
