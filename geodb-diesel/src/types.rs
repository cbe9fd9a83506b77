//! Diesel SQL type definition and `FromSql` / `ToSql` implementations.
//!
//! `Geometry` maps to `Binary` (BLOB) in SQLite, storing WKB-encoded
//! geometry. The stored payload carries no SRID; the column's declared SRID
//! is applied at materialization time via
//! [`SpatialDialect::process_result`](geodb_core::SpatialDialect::process_result).

use diesel::deserialize::{self, FromSql};
use diesel::serialize::{self, IsNull, Output, ToSql};
use diesel::sql_types::Binary;
use diesel::sqlite::Sqlite;

use geodb_core::WkbElement;

/// Diesel SQL type for a geometry column (stored as WKB BLOB).
///
/// ```rust,ignore
/// table! {
///     roads (id) {
///         id   -> Integer,
///         geom -> geodb_diesel::Geometry,
///     }
/// }
/// ```
#[derive(diesel::sql_types::SqlType, diesel::query_builder::QueryId, Debug, Clone, Copy)]
#[diesel(sqlite_type(name = "Binary"))]
pub struct Geometry;

// SQLite Output does NOT implement std::io::Write.
// Binary values are passed via `out.set_value(value)` where value
// implements `Into<SqliteBindValue>` (e.g. &[u8], Vec<u8>).

impl FromSql<Geometry, Sqlite> for Vec<u8> {
    fn from_sql(
        bytes: <Sqlite as diesel::backend::Backend>::RawValue<'_>,
    ) -> deserialize::Result<Self> {
        <Vec<u8> as FromSql<Binary, Sqlite>>::from_sql(bytes)
    }
}

impl ToSql<Geometry, Sqlite> for Vec<u8> {
    fn to_sql<'b>(&'b self, out: &mut Output<'b, '_, Sqlite>) -> serialize::Result {
        out.set_value(self.as_slice());
        Ok(IsNull::No)
    }
}

impl ToSql<Geometry, Sqlite> for [u8] {
    fn to_sql<'b>(&'b self, out: &mut Output<'b, '_, Sqlite>) -> serialize::Result {
        out.set_value(self);
        Ok(IsNull::No)
    }
}

impl ToSql<Geometry, Sqlite> for WkbElement {
    fn to_sql<'b>(&'b self, out: &mut Output<'b, '_, Sqlite>) -> serialize::Result {
        out.set_value(self.data.as_slice());
        Ok(IsNull::No)
    }
}
