//! Verify that every `GeodbExpressionMethods` method produces identical SQL
//! to the corresponding free function in `geodb_diesel::functions`.

use diesel::dsl::select;
use diesel::sql_types::{Integer, Nullable};
use geodb_diesel::prelude::*;

/// Geometry literal helper (not Clone, so create fresh each time via macro).
macro_rules! g {
    () => {
        diesel::dsl::sql::<Nullable<Geometry>>("x")
    };
}

macro_rules! d {
    () => {
        diesel::dsl::sql::<diesel::sql_types::Double>("1.0")
    };
}

macro_rules! i {
    () => {
        diesel::dsl::sql::<Integer>("1")
    };
}

/// Assert method-style and function-style produce identical SQL.
macro_rules! assert_method_eq_func {
    ($method_expr:expr, $func_expr:expr) => {{
        let method_sql =
            diesel::debug_query::<diesel::sqlite::Sqlite, _>(&select($method_expr)).to_string();
        let func_sql =
            diesel::debug_query::<diesel::sqlite::Sqlite, _>(&select($func_expr)).to_string();
        assert_eq!(method_sql, func_sql);
    }};
}

// ── I/O ─────────────────────────────────────────────────────────────────────

#[test]
fn method_as_text() {
    assert_method_eq_func!(g!().as_text(), as_text(g!()));
}

#[test]
fn method_as_binary() {
    assert_method_eq_func!(g!().as_binary(), as_binary(g!()));
}

#[test]
fn method_as_svg() {
    assert_method_eq_func!(g!().as_svg(), as_svg(g!()));
}

#[test]
fn method_as_fgf() {
    assert_method_eq_func!(g!().as_fgf(), as_fgf(g!()));
}

// ── Accessors ───────────────────────────────────────────────────────────────

#[test]
fn method_dimension() {
    assert_method_eq_func!(g!().dimension(), dimension(g!()));
}

#[test]
fn method_srid() {
    assert_method_eq_func!(g!().srid(), srid(g!()));
}

#[test]
fn method_geometry_type() {
    assert_method_eq_func!(g!().geometry_type(), geometry_type(g!()));
}

#[test]
fn method_x() {
    assert_method_eq_func!(g!().x(), x(g!()));
}

#[test]
fn method_y() {
    assert_method_eq_func!(g!().y(), y(g!()));
}

#[test]
fn method_num_points() {
    assert_method_eq_func!(g!().num_points(), num_points(g!()));
}

#[test]
fn method_point_n() {
    assert_method_eq_func!(g!().point_n(i!()), point_n(g!(), i!()));
}

#[test]
fn method_start_point() {
    assert_method_eq_func!(g!().start_point(), start_point(g!()));
}

#[test]
fn method_end_point() {
    assert_method_eq_func!(g!().end_point(), end_point(g!()));
}

#[test]
fn method_envelope() {
    assert_method_eq_func!(g!().envelope(), envelope(g!()));
}

#[test]
fn method_exterior_ring() {
    assert_method_eq_func!(g!().exterior_ring(), exterior_ring(g!()));
}

#[test]
fn method_num_interior_rings() {
    assert_method_eq_func!(g!().num_interior_rings(), num_interior_rings(g!()));
}

#[test]
fn method_interior_ring_n() {
    assert_method_eq_func!(g!().interior_ring_n(i!()), interior_ring_n(g!(), i!()));
}

#[test]
fn method_num_geometries() {
    assert_method_eq_func!(g!().num_geometries(), num_geometries(g!()));
}

#[test]
fn method_geometry_n() {
    assert_method_eq_func!(g!().geometry_n(i!()), geometry_n(g!(), i!()));
}

#[test]
fn method_is_valid() {
    assert_method_eq_func!(g!().is_valid(), is_valid(g!()));
}

#[test]
fn method_is_simple() {
    assert_method_eq_func!(g!().is_simple(), is_simple(g!()));
}

#[test]
fn method_is_empty() {
    assert_method_eq_func!(g!().is_empty(), is_empty(g!()));
}

#[test]
fn method_is_closed() {
    assert_method_eq_func!(g!().is_closed(), is_closed(g!()));
}

#[test]
fn method_is_ring() {
    assert_method_eq_func!(g!().is_ring(), is_ring(g!()));
}

// ── Measurement ─────────────────────────────────────────────────────────────

#[test]
fn method_glength() {
    assert_method_eq_func!(g!().glength(), glength(g!()));
}

#[test]
fn method_area() {
    assert_method_eq_func!(g!().area(), area(g!()));
}

#[test]
fn method_distance() {
    assert_method_eq_func!(g!().distance(g!()), distance(g!(), g!()));
}

#[test]
fn method_centroid() {
    assert_method_eq_func!(g!().centroid(), centroid(g!()));
}

#[test]
fn method_boundary() {
    assert_method_eq_func!(g!().boundary(), boundary(g!()));
}

// ── Operations ──────────────────────────────────────────────────────────────

#[test]
fn method_buffer() {
    assert_method_eq_func!(g!().buffer(d!()), buffer(g!(), d!()));
}

#[test]
fn method_convex_hull() {
    assert_method_eq_func!(g!().convex_hull(), convex_hull(g!()));
}

#[test]
fn method_intersection() {
    assert_method_eq_func!(g!().intersection(g!()), intersection(g!(), g!()));
}

#[test]
fn method_gunion() {
    assert_method_eq_func!(g!().gunion(g!()), gunion(g!(), g!()));
}

#[test]
fn method_difference() {
    assert_method_eq_func!(g!().difference(g!()), difference(g!(), g!()));
}

#[test]
fn method_sym_difference() {
    assert_method_eq_func!(g!().sym_difference(g!()), sym_difference(g!(), g!()));
}

#[test]
fn method_transform() {
    assert_method_eq_func!(g!().transform(i!()), transform(g!(), i!()));
}

// ── Exact predicates ────────────────────────────────────────────────────────

#[test]
fn method_equals() {
    assert_method_eq_func!(g!().equals(g!()), equals(g!(), g!()));
}

#[test]
fn method_disjoint() {
    assert_method_eq_func!(g!().disjoint(g!()), disjoint(g!(), g!()));
}

#[test]
fn method_intersects() {
    assert_method_eq_func!(g!().intersects(g!()), intersects(g!(), g!()));
}

#[test]
fn method_touches() {
    assert_method_eq_func!(g!().touches(g!()), touches(g!(), g!()));
}

#[test]
fn method_crosses() {
    assert_method_eq_func!(g!().crosses(g!()), crosses(g!(), g!()));
}

#[test]
fn method_within() {
    assert_method_eq_func!(g!().within(g!()), within(g!(), g!()));
}

#[test]
fn method_overlaps() {
    assert_method_eq_func!(g!().overlaps(g!()), overlaps(g!(), g!()));
}

#[test]
fn method_contains() {
    assert_method_eq_func!(g!().contains(g!()), contains(g!(), g!()));
}

// ── Bounding-box predicates ─────────────────────────────────────────────────

#[test]
fn method_mbr_equal() {
    assert_method_eq_func!(g!().mbr_equal(g!()), mbr_equal(g!(), g!()));
}

#[test]
fn method_mbr_disjoint() {
    assert_method_eq_func!(g!().mbr_disjoint(g!()), mbr_disjoint(g!(), g!()));
}

#[test]
fn method_mbr_intersects() {
    assert_method_eq_func!(g!().mbr_intersects(g!()), mbr_intersects(g!(), g!()));
}

#[test]
fn method_mbr_touches() {
    assert_method_eq_func!(g!().mbr_touches(g!()), mbr_touches(g!(), g!()));
}

#[test]
fn method_mbr_within() {
    assert_method_eq_func!(g!().mbr_within(g!()), mbr_within(g!(), g!()));
}

#[test]
fn method_mbr_overlaps() {
    assert_method_eq_func!(g!().mbr_overlaps(g!()), mbr_overlaps(g!(), g!()));
}

#[test]
fn method_mbr_contains() {
    assert_method_eq_func!(g!().mbr_contains(g!()), mbr_contains(g!(), g!()));
}
