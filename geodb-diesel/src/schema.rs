//! Schema lifecycle hooks for geometry columns.
//!
//! The host application calls these while creating or dropping tables that
//! hold geometry columns; the dialect decides which statements the backend
//! needs. Execution errors propagate verbatim — schema operations are not
//! safely retryable, so there is no local catch or retry.

use diesel::prelude::*;
use diesel::sql_query;
use diesel::sqlite::SqliteConnection;
use tracing::debug;

use geodb_core::{GeometryColumn, SpatialDialect};

/// Run the backend's post-create DDL for a freshly declared geometry
/// column: add the BLOB storage column, then build the auxiliary spatial
/// index when the column asks for one and the backend can provide it.
pub fn handle_ddl_after_create<D>(
    conn: &mut SqliteConnection,
    dialect: &D,
    column: &GeometryColumn,
) -> QueryResult<()>
where
    D: SpatialDialect,
{
    for statement in dialect.after_create_statements(column) {
        debug!(sql = %statement, "spatial DDL (after create)");
        sql_query(statement).execute(conn)?;
    }
    Ok(())
}

/// Run the backend's pre-drop DDL for a geometry column: disable the
/// spatial index and drop its auxiliary table, so no orphaned index
/// structure outlives the owning table.
pub fn handle_ddl_before_drop<D>(
    conn: &mut SqliteConnection,
    dialect: &D,
    column: &GeometryColumn,
) -> QueryResult<()>
where
    D: SpatialDialect,
{
    for statement in dialect.before_drop_statements(column) {
        debug!(sql = %statement, "spatial DDL (before drop)");
        sql_query(statement).execute(conn)?;
    }
    Ok(())
}
