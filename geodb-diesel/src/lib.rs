#![doc = include_str!("../../README.md")]
//! Crate-specific API surface for `geodb-diesel`.

pub mod expression_methods;
pub mod functions;
pub mod prelude;
pub mod schema;
pub mod types;
pub mod within_distance;

pub use expression_methods::GeodbExpressionMethods;
pub use schema::{handle_ddl_after_create, handle_ddl_before_drop};
pub use types::Geometry;
pub use within_distance::{within_distance, WithinDistance};
