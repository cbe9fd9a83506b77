use thiserror::Error;

use crate::ops::SpatialOp;

#[derive(Debug, Error)]
pub enum GeodbError {
    #[error("spatial operation `{0}` is not supported by this backend")]
    Unsupported(SpatialOp),

    #[error("invalid WKB: {0}")]
    InvalidWkb(&'static str),

    #[error("geozero error: {0}")]
    Geozero(#[from] geozero::error::GeozeroError),
}

pub type Result<T> = std::result::Result<T, GeodbError>;
