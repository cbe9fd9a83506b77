//! Index-aware compilation of the distance-threshold predicate.
//!
//! The predicate `within_distance(col, other, d)` always compiles to the
//! exact comparison `Distance(col, other) <= d`. When the column carries a
//! spatial index and the dialect can maintain R-tree auxiliary tables, a
//! bounding-box pre-filter against `idx_<table>_<column>` is conjoined in
//! front of the candidate rows: cheap filter first, exact refine second.
//! The pre-filter is only ever an additional conjunct, so the result is
//! correct on both paths.

use diesel::expression::{AppearsOnTable, AsExpression, Expression, SelectableExpression, ValidGrouping};
use diesel::query_builder::{AstPass, QueryFragment, QueryId};
use diesel::result::QueryResult;
use diesel::sql_types::{Bool, Double, Nullable};
use diesel::sqlite::Sqlite;

use geodb_core::{GeometryColumn, SpatialDialect};

use crate::types::Geometry;

/// Build the distance predicate for `column`, taking the index-assisted
/// path when `column.spatial_index` is set and the dialect reports R-tree
/// support.
///
/// ```rust,ignore
/// let col = GeometryColumn::new("roads", "geom", 4326, true);
/// roads::table
///     .filter(within_distance(&GeoDb, &col, geom_from_text("POINT(1 2)"), 500.0))
///     .load::<Road>(&mut conn)?;
/// ```
pub fn within_distance<D, G>(
    dialect: &D,
    column: &GeometryColumn,
    other: G,
    distance: f64,
) -> WithinDistance<G::Expression>
where
    D: SpatialDialect,
    G: AsExpression<Nullable<Geometry>>,
{
    WithinDistance {
        use_index: column.spatial_index && dialect.supports_rtree(),
        column: column.clone(),
        other: other.as_expression(),
        distance,
    }
}

/// Distance predicate with an optional bounding-box pre-filter.
#[derive(Debug, Clone)]
pub struct WithinDistance<G> {
    column: GeometryColumn,
    other: G,
    distance: f64,
    use_index: bool,
}

impl<G> Expression for WithinDistance<G>
where
    G: Expression,
{
    type SqlType = Bool;
}

impl<G, GroupByClause> ValidGrouping<GroupByClause> for WithinDistance<G>
where
    G: ValidGrouping<GroupByClause>,
{
    type IsAggregate = G::IsAggregate;
}

impl<G, QS> SelectableExpression<QS> for WithinDistance<G>
where
    Self: AppearsOnTable<QS>,
    G: SelectableExpression<QS>,
{
}

impl<G, QS> AppearsOnTable<QS> for WithinDistance<G>
where
    Self: Expression,
    G: AppearsOnTable<QS>,
{
}

impl<G> QueryId for WithinDistance<G> {
    type QueryId = ();
    // The generated SQL depends on runtime column metadata.
    const HAS_STATIC_QUERY_ID: bool = false;
}

impl<G> QueryFragment<Sqlite> for WithinDistance<G>
where
    G: QueryFragment<Sqlite>,
{
    fn walk_ast<'b>(&'b self, mut out: AstPass<'_, 'b, Sqlite>) -> QueryResult<()> {
        out.unsafe_to_cache_prepared();

        // Exact predicate, always emitted.
        out.push_sql("Distance(");
        out.push_identifier(&self.column.table)?;
        out.push_sql(".");
        out.push_identifier(&self.column.column)?;
        out.push_sql(", ");
        self.other.walk_ast(out.reborrow())?;
        out.push_sql(") <= ");
        out.push_bind_param::<Double, _>(&self.distance)?;

        if self.use_index {
            // Narrow candidates through the R-tree auxiliary table before
            // the exact comparison runs.
            let index_table = self.column.index_table();
            out.push_sql(" AND ");
            out.push_identifier(&self.column.table)?;
            out.push_sql(".rowid IN (SELECT pkid FROM ");
            out.push_identifier(&index_table)?;
            out.push_sql(" WHERE xmin >= MbrMinX(");
            self.other.walk_ast(out.reborrow())?;
            out.push_sql(") - ");
            out.push_bind_param::<Double, _>(&self.distance)?;
            out.push_sql(" AND xmax <= MbrMaxX(");
            self.other.walk_ast(out.reborrow())?;
            out.push_sql(") + ");
            out.push_bind_param::<Double, _>(&self.distance)?;
            out.push_sql(" AND ymin >= MbrMinY(");
            self.other.walk_ast(out.reborrow())?;
            out.push_sql(") - ");
            out.push_bind_param::<Double, _>(&self.distance)?;
            out.push_sql(" AND ymax <= MbrMaxY(");
            self.other.walk_ast(out.reborrow())?;
            out.push_sql(") + ");
            out.push_bind_param::<Double, _>(&self.distance)?;
            out.push_sql(")");
        }

        Ok(())
    }
}
