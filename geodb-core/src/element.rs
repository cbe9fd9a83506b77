//! Spatial element values: WKT/WKB interchange wrappers and the persistent
//! geometry read back from query results.

use geozero::wkb::Wkb;
use geozero::ToGeo;

use crate::error::{GeodbError, Result};

/// A geometry expressed as WKT text plus its SRID.
///
/// Sent to the database through `ST_GeomFromText`; the text itself is never
/// parsed in-process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WktElement {
    pub wkt: String,
    pub srid: i32,
}

impl WktElement {
    pub fn new(wkt: impl Into<String>, srid: i32) -> Self {
        Self {
            wkt: wkt.into(),
            srid,
        }
    }
}

/// A geometry expressed as raw WKB bytes plus its SRID.
///
/// The stored payload carries no SRID of its own; the tag comes from the
/// column declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WkbElement {
    pub data: Vec<u8>,
    pub srid: i32,
}

impl WkbElement {
    pub fn new(data: Vec<u8>, srid: i32) -> Self {
        Self { data, srid }
    }

    /// Decode the payload into an in-process geometry.
    pub fn to_geo(&self) -> Result<geo::Geometry<f64>> {
        if self.data.len() < 5 {
            return Err(GeodbError::InvalidWkb("payload truncated"));
        }
        if self.data[0] > 1 {
            return Err(GeodbError::InvalidWkb("bad byte order marker"));
        }
        Ok(Wkb(self.data.as_slice()).to_geo()?)
    }
}

/// A geometry value as loaded from the database.
///
/// A tagged view of the stored payload with no lifecycle beyond the query
/// result it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistentGeometry {
    desc: WkbElement,
}

impl PersistentGeometry {
    pub fn new(desc: WkbElement) -> Self {
        Self { desc }
    }

    /// The coordinate reference system identifier the value was tagged with.
    pub fn srid(&self) -> i32 {
        self.desc.srid
    }

    /// The raw WKB payload as stored.
    pub fn as_wkb(&self) -> &[u8] {
        &self.desc.data
    }

    /// Decode into an in-process geometry.
    pub fn to_geo(&self) -> Result<geo::Geometry<f64>> {
        self.desc.to_geo()
    }
}
