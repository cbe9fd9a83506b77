#![doc = include_str!("../../README.md")]
//! Crate-specific API surface for `geodb-core`.

pub mod column;
pub mod ddl;
pub mod dialect;
pub mod element;
pub mod error;
pub mod ops;

pub use column::GeometryColumn;
pub use dialect::{FunctionMapping, GeoDb, SpatialDialect};
pub use element::{PersistentGeometry, WkbElement, WktElement};
pub use error::{GeodbError, Result};
pub use ops::SpatialOp;
