use std::collections::BTreeMap;
use std::fmt;
use std::iter::FromIterator;

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

/// A single raster metadata entry
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Debug, Clone, PartialEq)]
pub enum MetaValue {
    Null,
    Integer(i64),
    Float(f64),
    Text(String),
    /// Affine geotransform coefficients `[a, b, c, d, e, f]`
    Affine([f64; 6]),
}

impl MetaValue {
    /// Numeric view on the entry, integers are widened
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            MetaValue::Integer(v) => Some(*v as f64),
            MetaValue::Float(v) => Some(*v),
            _ => None,
        }
    }
}

impl fmt::Display for MetaValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetaValue::Null => write!(f, "null"),
            MetaValue::Integer(v) => write!(f, "{}", v),
            MetaValue::Float(v) => write!(f, "{}", v),
            MetaValue::Text(v) => write!(f, "{}", v),
            MetaValue::Affine(c) => write!(
                f,
                "({}, {}, {}, {}, {}, {})",
                c[0], c[1], c[2], c[3], c[4], c[5]
            ),
        }
    }
}

impl From<i64> for MetaValue {
    fn from(v: i64) -> Self {
        MetaValue::Integer(v)
    }
}

impl From<usize> for MetaValue {
    fn from(v: usize) -> Self {
        MetaValue::Integer(v as i64)
    }
}

impl From<f64> for MetaValue {
    fn from(v: f64) -> Self {
        MetaValue::Float(v)
    }
}

impl From<f32> for MetaValue {
    fn from(v: f32) -> Self {
        MetaValue::Float(v as f64)
    }
}

impl From<&str> for MetaValue {
    fn from(v: &str) -> Self {
        MetaValue::Text(v.to_string())
    }
}

impl From<String> for MetaValue {
    fn from(v: String) -> Self {
        MetaValue::Text(v)
    }
}

impl From<[f64; 6]> for MetaValue {
    fn from(v: [f64; 6]) -> Self {
        MetaValue::Affine(v)
    }
}

/// Raster metadata
///
/// An ordered key/value record describing a raster (driver, dimensions, geotransform, nodata,
/// ...). The toolkit never interprets keys except `nodata` and the ones written by clipping.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RasterMeta {
    entries: BTreeMap<String, MetaValue>,
}

impl RasterMeta {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&MetaValue> {
        self.entries.get(key)
    }

    pub fn insert<K: Into<String>, V: Into<MetaValue>>(&mut self, key: K, value: V) {
        self.entries.insert(key.into(), value.into());
    }

    /// Copies the record and sets `key` on the copy
    pub fn with<K: Into<String>, V: Into<MetaValue>>(&self, key: K, value: V) -> Self {
        let mut out = self.clone();
        out.insert(key, value);
        out
    }

    /// The recorded nodata value, if any
    pub fn nodata(&self) -> Option<f64> {
        self.get("nodata").and_then(MetaValue::as_f64)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &MetaValue)> {
        self.entries.iter()
    }
}

impl<K: Into<String>, V: Into<MetaValue>> FromIterator<(K, V)> for RasterMeta {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        RasterMeta {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
