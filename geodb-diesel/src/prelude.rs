//! Convenience re-exports for geodb-diesel.
//!
//! ```rust,ignore
//! use geodb_diesel::prelude::*;
//! ```

pub use crate::expression_methods::GeodbExpressionMethods;
pub use crate::functions::*;
pub use crate::schema::{handle_ddl_after_create, handle_ddl_before_drop};
pub use crate::types::Geometry;
pub use crate::within_distance::{within_distance, WithinDistance};

pub use geodb_core::{
    FunctionMapping, GeoDb, GeodbError, GeometryColumn, PersistentGeometry, SpatialDialect,
    SpatialOp, WkbElement, WktElement,
};
