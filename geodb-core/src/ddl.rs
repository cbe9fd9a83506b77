//! DDL statement builders for geometry columns and their auxiliary index
//! tables.
//!
//! Statements are returned as text and executed by the integration layer on
//! the caller's connection. Identifiers are double-quote escaped and string
//! literals single-quote escaped.

use crate::column::GeometryColumn;

/// Quote an identifier for SQLite, doubling embedded quotes.
pub fn quote_ident(ident: &str) -> String {
    format!("\"{}\"", ident.replace('"', "\"\""))
}

/// Quote a string literal for SQLite, doubling embedded quotes.
pub fn quote_literal(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}

/// `ALTER TABLE "t" ADD "c" BLOB` — geometry payloads are stored as BLOBs.
pub fn add_geometry_column(column: &GeometryColumn) -> String {
    format!(
        "ALTER TABLE {} ADD {} BLOB",
        quote_ident(&column.table),
        quote_ident(&column.column),
    )
}

/// `SELECT CreateSpatialIndex(NULL, 't', 'c', 'srid')` — builds the R-tree
/// auxiliary table `idx_t_c` and registers its triggers.
pub fn create_spatial_index(column: &GeometryColumn) -> String {
    format!(
        "SELECT CreateSpatialIndex(NULL, {}, {}, {})",
        quote_literal(&column.table),
        quote_literal(&column.column),
        quote_literal(&column.srid.to_string()),
    )
}

/// `SELECT DisableSpatialIndex('t', 'c')` — detaches the index from the
/// owning table without removing the auxiliary table itself.
pub fn disable_spatial_index(column: &GeometryColumn) -> String {
    format!(
        "SELECT DisableSpatialIndex({}, {})",
        quote_literal(&column.table),
        quote_literal(&column.column),
    )
}

/// `DROP TABLE "idx_t_c"` — removes the auxiliary table. Must run after
/// [`disable_spatial_index`] and before the owning table is dropped.
pub fn drop_index_table(column: &GeometryColumn) -> String {
    format!("DROP TABLE {}", quote_ident(&column.index_table()))
}
