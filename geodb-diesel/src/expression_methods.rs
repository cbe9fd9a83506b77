//! Extension trait for method-style spatial operations on geometry
//! expressions.
//!
//! Import [`GeodbExpressionMethods`] (or `use geodb_diesel::prelude::*`) to
//! call spatial functions as methods on any `Nullable<Geometry>` expression:
//!
//! ```rust,ignore
//! use geodb_diesel::prelude::*;
//!
//! roads::table
//!     .filter(roads::geom.intersects(geom_from_text("POLYGON((0 0,1 0,1 1,0 1,0 0))")))
//!     .select((roads::id, roads::geom.as_text()))
//!     .load(&mut conn)?;
//! ```

use diesel::expression::{AsExpression, Expression};
use diesel::sql_types::{Double, Integer, Nullable};

use crate::functions;
use crate::types::Geometry;

/// Method-style access to GeoDB spatial functions for `Nullable<Geometry>`
/// expressions.
///
/// Automatically implemented for any Diesel expression with
/// `SqlType = Nullable<Geometry>`; each method delegates to the
/// corresponding free function in [`crate::functions`]. For non-nullable
/// geometry columns, call `.nullable()` first — the standard Diesel pattern.
pub trait GeodbExpressionMethods: Expression<SqlType = Nullable<Geometry>> + Sized {
    // ── I/O ─────────────────────────────────────────────────────────────

    /// Serialize this geometry to WKT text.
    fn as_text(self) -> functions::as_text<Self> {
        functions::as_text(self)
    }

    /// Serialize this geometry to WKB bytes.
    fn as_binary(self) -> functions::as_binary<Self> {
        functions::as_binary(self)
    }

    /// Serialize this geometry to an SVG path fragment.
    fn as_svg(self) -> functions::as_svg<Self> {
        functions::as_svg(self)
    }

    /// Serialize this geometry to FGF bytes.
    fn as_fgf(self) -> functions::as_fgf<Self> {
        functions::as_fgf(self)
    }

    // ── Accessors ───────────────────────────────────────────────────────

    /// Return the topological dimension (0, 1, or 2).
    fn dimension(self) -> functions::dimension<Self> {
        functions::dimension(self)
    }

    /// Return the SRID this geometry was stored with.
    fn srid(self) -> functions::srid<Self> {
        functions::srid(self)
    }

    /// Return the geometry type name (e.g. `POINT`, `POLYGON`).
    fn geometry_type(self) -> functions::geometry_type<Self> {
        functions::geometry_type(self)
    }

    /// Return the X coordinate of a Point geometry.
    fn x(self) -> functions::x<Self> {
        functions::x(self)
    }

    /// Return the Y coordinate of a Point geometry.
    fn y(self) -> functions::y<Self> {
        functions::y(self)
    }

    /// Return the number of points in a LineString.
    fn num_points(self) -> functions::num_points<Self> {
        functions::num_points(self)
    }

    /// Return the 1-based Nth point of this LineString.
    fn point_n<S>(self, n: S) -> functions::point_n<Self, S>
    where
        S: AsExpression<Integer>,
    {
        functions::point_n(self, n)
    }

    /// Return the first point of this LineString.
    fn start_point(self) -> functions::start_point<Self> {
        functions::start_point(self)
    }

    /// Return the last point of this LineString.
    fn end_point(self) -> functions::end_point<Self> {
        functions::end_point(self)
    }

    /// Return the axis-aligned envelope of this geometry.
    fn envelope(self) -> functions::envelope<Self> {
        functions::envelope(self)
    }

    /// Return the exterior ring of this Polygon.
    fn exterior_ring(self) -> functions::exterior_ring<Self> {
        functions::exterior_ring(self)
    }

    /// Return the number of interior rings in this Polygon.
    fn num_interior_rings(self) -> functions::num_interior_rings<Self> {
        functions::num_interior_rings(self)
    }

    /// Return the 1-based Nth interior ring of this Polygon.
    fn interior_ring_n<S>(self, n: S) -> functions::interior_ring_n<Self, S>
    where
        S: AsExpression<Integer>,
    {
        functions::interior_ring_n(self, n)
    }

    /// Return the number of component geometries.
    fn num_geometries(self) -> functions::num_geometries<Self> {
        functions::num_geometries(self)
    }

    /// Return the 1-based Nth geometry from this collection.
    fn geometry_n<S>(self, n: S) -> functions::geometry_n<Self, S>
    where
        S: AsExpression<Integer>,
    {
        functions::geometry_n(self, n)
    }

    /// Return whether this geometry is valid.
    fn is_valid(self) -> functions::is_valid<Self> {
        functions::is_valid(self)
    }

    /// Return whether this geometry has no anomalous points.
    fn is_simple(self) -> functions::is_simple<Self> {
        functions::is_simple(self)
    }

    /// Return whether this geometry is empty.
    fn is_empty(self) -> functions::is_empty<Self> {
        functions::is_empty(self)
    }

    /// Return whether this LineString's start and end points coincide.
    fn is_closed(self) -> functions::is_closed<Self> {
        functions::is_closed(self)
    }

    /// Return whether this LineString is a closed simple ring.
    fn is_ring(self) -> functions::is_ring<Self> {
        functions::is_ring(self)
    }

    // ── Measurement ─────────────────────────────────────────────────────

    /// Return the planar length of this linestring geometry.
    fn glength(self) -> functions::glength<Self> {
        functions::glength(self)
    }

    /// Return the planar area of this polygon geometry.
    fn area(self) -> functions::area<Self> {
        functions::area(self)
    }

    /// Return the minimum Euclidean distance to another geometry.
    fn distance<T>(self, other: T) -> functions::distance<Self, T>
    where
        T: AsExpression<Nullable<Geometry>>,
    {
        functions::distance(self, other)
    }

    /// Return the centroid of this geometry.
    fn centroid(self) -> functions::centroid<Self> {
        functions::centroid(self)
    }

    /// Return the combinatorial boundary of this geometry.
    fn boundary(self) -> functions::boundary<Self> {
        functions::boundary(self)
    }

    // ── Operations ──────────────────────────────────────────────────────

    /// Expand or shrink this geometry by a given distance.
    fn buffer<R>(self, radius: R) -> functions::buffer<Self, R>
    where
        R: AsExpression<Double>,
    {
        functions::buffer(self, radius)
    }

    /// Return the convex hull of this geometry.
    fn convex_hull(self) -> functions::convex_hull<Self> {
        functions::convex_hull(self)
    }

    /// Compute the geometric intersection of this geometry with another.
    fn intersection<T>(self, other: T) -> functions::intersection<Self, T>
    where
        T: AsExpression<Nullable<Geometry>>,
    {
        functions::intersection(self, other)
    }

    /// Compute the geometric union of this geometry with another.
    fn gunion<T>(self, other: T) -> functions::gunion<Self, T>
    where
        T: AsExpression<Nullable<Geometry>>,
    {
        functions::gunion(self, other)
    }

    /// Compute the geometric difference of this geometry minus another.
    fn difference<T>(self, other: T) -> functions::difference<Self, T>
    where
        T: AsExpression<Nullable<Geometry>>,
    {
        functions::difference(self, other)
    }

    /// Compute the symmetric difference of this geometry and another.
    fn sym_difference<T>(self, other: T) -> functions::sym_difference<Self, T>
    where
        T: AsExpression<Nullable<Geometry>>,
    {
        functions::sym_difference(self, other)
    }

    /// Reproject this geometry into another coordinate reference system.
    fn transform<S>(self, srid: S) -> functions::transform<Self, S>
    where
        S: AsExpression<Integer>,
    {
        functions::transform(self, srid)
    }

    // ── Exact predicates ────────────────────────────────────────────────

    /// Return whether this geometry is spatially equal to another.
    fn equals<T>(self, other: T) -> functions::equals<Self, T>
    where
        T: AsExpression<Nullable<Geometry>>,
    {
        functions::equals(self, other)
    }

    /// Return whether this geometry shares no points with another.
    fn disjoint<T>(self, other: T) -> functions::disjoint<Self, T>
    where
        T: AsExpression<Nullable<Geometry>>,
    {
        functions::disjoint(self, other)
    }

    /// Return whether this geometry shares any interior or boundary points with another.
    fn intersects<T>(self, other: T) -> functions::intersects<Self, T>
    where
        T: AsExpression<Nullable<Geometry>>,
    {
        functions::intersects(self, other)
    }

    /// Return whether this geometry shares boundary points but no interior points with another.
    fn touches<T>(self, other: T) -> functions::touches<Self, T>
    where
        T: AsExpression<Nullable<Geometry>>,
    {
        functions::touches(self, other)
    }

    /// Return whether this geometry crosses another.
    fn crosses<T>(self, other: T) -> functions::crosses<Self, T>
    where
        T: AsExpression<Nullable<Geometry>>,
    {
        functions::crosses(self, other)
    }

    /// Return whether this geometry is fully contained within another.
    fn within<T>(self, other: T) -> functions::within<Self, T>
    where
        T: AsExpression<Nullable<Geometry>>,
    {
        functions::within(self, other)
    }

    /// Return whether this geometry overlaps another.
    fn overlaps<T>(self, other: T) -> functions::overlaps<Self, T>
    where
        T: AsExpression<Nullable<Geometry>>,
    {
        functions::overlaps(self, other)
    }

    /// Return whether this geometry fully contains another.
    fn contains<T>(self, other: T) -> functions::contains<Self, T>
    where
        T: AsExpression<Nullable<Geometry>>,
    {
        functions::contains(self, other)
    }

    // ── Bounding-box predicates ─────────────────────────────────────────

    /// Return whether this geometry's bounding box equals another's.
    fn mbr_equal<T>(self, other: T) -> functions::mbr_equal<Self, T>
    where
        T: AsExpression<Nullable<Geometry>>,
    {
        functions::mbr_equal(self, other)
    }

    /// Return whether this geometry's bounding box shares no points with another's.
    fn mbr_disjoint<T>(self, other: T) -> functions::mbr_disjoint<Self, T>
    where
        T: AsExpression<Nullable<Geometry>>,
    {
        functions::mbr_disjoint(self, other)
    }

    /// Return whether this geometry's bounding box intersects another's.
    fn mbr_intersects<T>(self, other: T) -> functions::mbr_intersects<Self, T>
    where
        T: AsExpression<Nullable<Geometry>>,
    {
        functions::mbr_intersects(self, other)
    }

    /// Return whether this geometry's bounding box touches another's.
    fn mbr_touches<T>(self, other: T) -> functions::mbr_touches<Self, T>
    where
        T: AsExpression<Nullable<Geometry>>,
    {
        functions::mbr_touches(self, other)
    }

    /// Return whether this geometry's bounding box is within another's.
    fn mbr_within<T>(self, other: T) -> functions::mbr_within<Self, T>
    where
        T: AsExpression<Nullable<Geometry>>,
    {
        functions::mbr_within(self, other)
    }

    /// Return whether this geometry's bounding box overlaps another's.
    fn mbr_overlaps<T>(self, other: T) -> functions::mbr_overlaps<Self, T>
    where
        T: AsExpression<Nullable<Geometry>>,
    {
        functions::mbr_overlaps(self, other)
    }

    /// Return whether this geometry's bounding box contains another's.
    fn mbr_contains<T>(self, other: T) -> functions::mbr_contains<Self, T>
    where
        T: AsExpression<Nullable<Geometry>>,
    {
        functions::mbr_contains(self, other)
    }
}

impl<E> GeodbExpressionMethods for E where E: Expression<SqlType = Nullable<Geometry>> + Sized {}
