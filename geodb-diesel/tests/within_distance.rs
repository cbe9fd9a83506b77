//! Compilation behavior of the distance-threshold rewrite: the exact
//! predicate is always present, the bounding-box pre-filter only ever
//! appears as an additional conjunct, and only when the column is indexed
//! on a backend that can use the index.

use diesel::dsl::select;
use diesel::sql_types::Nullable;
use geodb_core::{FunctionMapping, GeoDb, GeometryColumn, Result, SpatialDialect, SpatialOp};
use geodb_diesel::prelude::*;

macro_rules! g {
    () => {
        diesel::dsl::sql::<Nullable<Geometry>>("x")
    };
}

diesel::table! {
    roads (id) {
        id -> Integer,
        geom -> Nullable<diesel::sql_types::Binary>,
    }
}

/// GeoDB mapping with the auxiliary-index capability forced on, standing in
/// for a backend that can actually maintain R-tree index tables.
struct RtreeBackend;

impl SpatialDialect for RtreeBackend {
    fn function(&self, op: SpatialOp) -> Result<FunctionMapping> {
        GeoDb.function(op)
    }

    fn supports_rtree(&self) -> bool {
        true
    }
}

fn indexed() -> GeometryColumn {
    GeometryColumn::new("roads", "geom", 4326, true)
}

fn plain() -> GeometryColumn {
    GeometryColumn::new("roads", "geom", 4326, false)
}

fn sql_of<D: SpatialDialect>(dialect: &D, column: &GeometryColumn) -> String {
    let expr = within_distance(dialect, column, g!(), 1000.0);
    diesel::debug_query::<diesel::sqlite::Sqlite, _>(&select(expr)).to_string()
}

const EXACT: &str = r#"Distance("roads"."geom", x) <= ?"#;

#[test]
fn exact_predicate_always_present() {
    assert!(sql_of(&GeoDb, &plain()).contains(EXACT));
    assert!(sql_of(&GeoDb, &indexed()).contains(EXACT));
    assert!(sql_of(&RtreeBackend, &plain()).contains(EXACT));
    assert!(sql_of(&RtreeBackend, &indexed()).contains(EXACT));
}

#[test]
fn plain_column_never_takes_the_index_path() {
    let sql = sql_of(&RtreeBackend, &plain());
    assert!(!sql.contains("idx_roads_geom"), "unexpected pre-filter: {sql}");
    assert!(!sql.contains("rowid"));
}

#[test]
fn geodb_never_takes_the_index_path() {
    // The capability flag is fixed false, so an indexed column still
    // compiles to the simple predicate.
    let sql = sql_of(&GeoDb, &indexed());
    assert!(!sql.contains("idx_roads_geom"), "unexpected pre-filter: {sql}");
}

#[test]
fn indexed_column_on_capable_backend_adds_prefilter() {
    let sql = sql_of(&RtreeBackend, &indexed());
    assert!(
        sql.contains(r#""roads".rowid IN (SELECT pkid FROM "idx_roads_geom""#),
        "missing pre-filter: {sql}"
    );
    assert!(sql.contains("xmin >= MbrMinX(x) - ?"));
    assert!(sql.contains("xmax <= MbrMaxX(x) + ?"));
    assert!(sql.contains("ymin >= MbrMinY(x) - ?"));
    assert!(sql.contains("ymax <= MbrMaxY(x) + ?"));
}

#[test]
fn prefilter_is_an_additional_conjunct_after_the_exact_predicate() {
    let sql = sql_of(&RtreeBackend, &indexed());
    let exact_at = sql.find(EXACT).expect("exact predicate missing");
    let filter_at = sql.find(" AND ").expect("conjunction missing");
    assert!(exact_at < filter_at, "conjunct order wrong: {sql}");

    // Range probes in x-min, x-max, y-min, y-max order.
    let xmin = sql.find("xmin >=").unwrap();
    let xmax = sql.find("xmax <=").unwrap();
    let ymin = sql.find("ymin >=").unwrap();
    let ymax = sql.find("ymax <=").unwrap();
    assert!(xmin < xmax && xmax < ymin && ymin < ymax, "probe order wrong: {sql}");
}

#[test]
fn usable_in_a_real_filter() {
    use diesel::prelude::*;
    use diesel::sql_query;

    let mut c = SqliteConnection::establish(":memory:").unwrap();
    sql_query("CREATE TABLE roads (id INTEGER PRIMARY KEY, geom BLOB)")
        .execute(&mut c)
        .unwrap();

    // The predicate itself references GeoDB SQL functions that plain SQLite
    // does not provide, so executing it must fail with the backend's own
    // error — but building the query is enough to prove it composes with
    // the query DSL.
    let q = roads::table
        .select(roads::id)
        .filter(within_distance(&GeoDb, &plain(), g!(), 1000.0));
    let err = q.load::<i32>(&mut c).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("Distance"), "unexpected error: {msg}");
}
