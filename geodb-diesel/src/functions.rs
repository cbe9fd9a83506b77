//! Diesel SQL function declarations for the GeoDB backend.
//!
//! Each declaration carries the backend's SQL spelling via `#[sql_name]`,
//! matching the dialect mapping table in `geodb_core::dialect`. Import the
//! functions you need and use them directly in query builder expressions:
//!
//! ```rust,ignore
//! use diesel::prelude::*;
//! use geodb_diesel::functions::*;
//!
//! let nearby: Vec<Road> = roads::table
//!     .filter(intersects(roads::geom, geom_from_text("POLYGON((0 0,1 0,1 1,0 1,0 0))")))
//!     .load(&mut conn)?;
//! ```
//!
//! `within_distance` has no entry here: it compiles through the
//! index-aware rewrite in [`crate::within_distance`] rather than a single
//! function call.

use crate::types::Geometry;
use diesel::sql_types::{Binary, Bool, Double, Integer, Nullable, Text};

// ── I/O ───────────────────────────────────────────────────────────────────────

diesel::define_sql_function! {
    /// Parse WKT text into a geometry BLOB.
    #[sql_name = "ST_GeomFromText"]
    fn geom_from_text(wkt: Text) -> Nullable<Geometry>;
}

diesel::define_sql_function! {
    /// Parse WKT text with explicit SRID into a geometry BLOB.
    #[sql_name = "ST_GeomFromText"]
    fn geom_from_text_srid(wkt: Text, srid: Integer) -> Nullable<Geometry>;
}

diesel::define_sql_function! {
    /// Parse WKB bytes into a geometry BLOB.
    #[sql_name = "GeomFromWKB"]
    fn geom_from_wkb(wkb: Nullable<Binary>) -> Nullable<Geometry>;
}

diesel::define_sql_function! {
    /// Parse WKB bytes with explicit SRID into a geometry BLOB.
    #[sql_name = "GeomFromWKB"]
    fn geom_from_wkb_srid(wkb: Nullable<Binary>, srid: Integer) -> Nullable<Geometry>;
}

diesel::define_sql_function! {
    /// Serialize a geometry to WKT text.
    #[sql_name = "AsText"]
    fn as_text(geom: Nullable<Geometry>) -> Nullable<Text>;
}

diesel::define_sql_function! {
    /// Serialize a geometry to WKB bytes.
    #[sql_name = "AsBinary"]
    fn as_binary(geom: Nullable<Geometry>) -> Nullable<Binary>;
}

diesel::define_sql_function! {
    /// Serialize a geometry to an SVG path fragment.
    #[sql_name = "AsSVG"]
    fn as_svg(geom: Nullable<Geometry>) -> Nullable<Text>;
}

diesel::define_sql_function! {
    /// Serialize a geometry to FGF bytes.
    #[sql_name = "AsFGF"]
    fn as_fgf(geom: Nullable<Geometry>) -> Nullable<Binary>;
}

// ── Accessors ─────────────────────────────────────────────────────────────────

diesel::define_sql_function! {
    /// Return the topological dimension (0, 1, or 2).
    #[sql_name = "Dimension"]
    fn dimension(geom: Nullable<Geometry>) -> Nullable<Integer>;
}

diesel::define_sql_function! {
    /// Return the SRID the geometry was stored with.
    #[sql_name = "SRID"]
    fn srid(geom: Nullable<Geometry>) -> Nullable<Integer>;
}

diesel::define_sql_function! {
    /// Return the geometry type name (e.g. `POINT`, `POLYGON`).
    #[sql_name = "GeometryType"]
    fn geometry_type(geom: Nullable<Geometry>) -> Nullable<Text>;
}

diesel::define_sql_function! {
    /// Return the X coordinate of a Point geometry.
    #[sql_name = "X"]
    fn x(geom: Nullable<Geometry>) -> Nullable<Double>;
}

diesel::define_sql_function! {
    /// Return the Y coordinate of a Point geometry.
    #[sql_name = "Y"]
    fn y(geom: Nullable<Geometry>) -> Nullable<Double>;
}

diesel::define_sql_function! {
    /// Return the number of points in a LineString.
    #[sql_name = "NumPoints"]
    fn num_points(geom: Nullable<Geometry>) -> Nullable<Integer>;
}

diesel::define_sql_function! {
    /// Return the 1-based Nth point of a LineString.
    #[sql_name = "PointN"]
    fn point_n(geom: Nullable<Geometry>, n: Integer) -> Nullable<Geometry>;
}

diesel::define_sql_function! {
    /// Return the first point of a LineString.
    #[sql_name = "StartPoint"]
    fn start_point(geom: Nullable<Geometry>) -> Nullable<Geometry>;
}

diesel::define_sql_function! {
    /// Return the last point of a LineString.
    #[sql_name = "EndPoint"]
    fn end_point(geom: Nullable<Geometry>) -> Nullable<Geometry>;
}

diesel::define_sql_function! {
    /// Return the axis-aligned envelope of a geometry.
    #[sql_name = "Envelope"]
    fn envelope(geom: Nullable<Geometry>) -> Nullable<Geometry>;
}

diesel::define_sql_function! {
    /// Return the exterior ring of a Polygon.
    #[sql_name = "ExteriorRing"]
    fn exterior_ring(geom: Nullable<Geometry>) -> Nullable<Geometry>;
}

diesel::define_sql_function! {
    /// Return the number of interior rings in a Polygon.
    #[sql_name = "NumInteriorRings"]
    fn num_interior_rings(geom: Nullable<Geometry>) -> Nullable<Integer>;
}

diesel::define_sql_function! {
    /// Return the 1-based Nth interior ring of a Polygon.
    #[sql_name = "InteriorRingN"]
    fn interior_ring_n(geom: Nullable<Geometry>, n: Integer) -> Nullable<Geometry>;
}

diesel::define_sql_function! {
    /// Return the number of component geometries.
    #[sql_name = "NumGeometries"]
    fn num_geometries(geom: Nullable<Geometry>) -> Nullable<Integer>;
}

diesel::define_sql_function! {
    /// Return the 1-based Nth geometry from a collection.
    #[sql_name = "GeometryN"]
    fn geometry_n(geom: Nullable<Geometry>, n: Integer) -> Nullable<Geometry>;
}

diesel::define_sql_function! {
    /// Return whether the geometry is valid.
    #[sql_name = "IsValid"]
    fn is_valid(geom: Nullable<Geometry>) -> Nullable<Bool>;
}

diesel::define_sql_function! {
    /// Return whether the geometry has no anomalous points (self-intersection etc.).
    #[sql_name = "IsSimple"]
    fn is_simple(geom: Nullable<Geometry>) -> Nullable<Bool>;
}

diesel::define_sql_function! {
    /// Return whether the geometry is empty.
    #[sql_name = "IsEmpty"]
    fn is_empty(geom: Nullable<Geometry>) -> Nullable<Bool>;
}

diesel::define_sql_function! {
    /// Return whether a LineString's start and end points coincide.
    #[sql_name = "IsClosed"]
    fn is_closed(geom: Nullable<Geometry>) -> Nullable<Bool>;
}

diesel::define_sql_function! {
    /// Return whether a LineString is a closed simple ring.
    #[sql_name = "IsRing"]
    fn is_ring(geom: Nullable<Geometry>) -> Nullable<Bool>;
}

// ── Measurement ───────────────────────────────────────────────────────────────

diesel::define_sql_function! {
    /// Return the planar length of a linestring geometry.
    #[sql_name = "GLength"]
    fn glength(geom: Nullable<Geometry>) -> Nullable<Double>;
}

diesel::define_sql_function! {
    /// Return the planar area of a polygon geometry.
    #[sql_name = "Area"]
    fn area(geom: Nullable<Geometry>) -> Nullable<Double>;
}

diesel::define_sql_function! {
    /// Return the minimum Euclidean distance between two geometries.
    #[sql_name = "Distance"]
    fn distance(a: Nullable<Geometry>, b: Nullable<Geometry>) -> Nullable<Double>;
}

diesel::define_sql_function! {
    /// Return the centroid of a geometry.
    #[sql_name = "Centroid"]
    fn centroid(geom: Nullable<Geometry>) -> Nullable<Geometry>;
}

diesel::define_sql_function! {
    /// Return the combinatorial boundary of a geometry.
    #[sql_name = "Boundary"]
    fn boundary(geom: Nullable<Geometry>) -> Nullable<Geometry>;
}

// ── Operations ────────────────────────────────────────────────────────────────

diesel::define_sql_function! {
    /// Expand or shrink a geometry by a given distance.
    #[sql_name = "Buffer"]
    fn buffer(geom: Nullable<Geometry>, radius: Double) -> Nullable<Geometry>;
}

diesel::define_sql_function! {
    /// Return the convex hull of a geometry.
    #[sql_name = "ConvexHull"]
    fn convex_hull(geom: Nullable<Geometry>) -> Nullable<Geometry>;
}

diesel::define_sql_function! {
    /// Compute the geometric intersection of two geometries.
    #[sql_name = "Intersection"]
    fn intersection(a: Nullable<Geometry>, b: Nullable<Geometry>) -> Nullable<Geometry>;
}

diesel::define_sql_function! {
    /// Compute the geometric union of two geometries.
    #[sql_name = "GUnion"]
    fn gunion(a: Nullable<Geometry>, b: Nullable<Geometry>) -> Nullable<Geometry>;
}

diesel::define_sql_function! {
    /// Compute the geometric difference (A minus B) of two geometries.
    #[sql_name = "Difference"]
    fn difference(a: Nullable<Geometry>, b: Nullable<Geometry>) -> Nullable<Geometry>;
}

diesel::define_sql_function! {
    /// Compute the symmetric difference (XOR) of two geometries.
    #[sql_name = "SymDifference"]
    fn sym_difference(a: Nullable<Geometry>, b: Nullable<Geometry>) -> Nullable<Geometry>;
}

diesel::define_sql_function! {
    /// Reproject a geometry into another coordinate reference system.
    #[sql_name = "Transform"]
    fn transform(geom: Nullable<Geometry>, srid: Integer) -> Nullable<Geometry>;
}

// ── Exact predicates ──────────────────────────────────────────────────────────

diesel::define_sql_function! {
    /// Return whether geometries are spatially equal.
    #[sql_name = "Equals"]
    fn equals(a: Nullable<Geometry>, b: Nullable<Geometry>) -> Nullable<Bool>;
}

diesel::define_sql_function! {
    /// Return whether geometries share no points.
    #[sql_name = "Disjoint"]
    fn disjoint(a: Nullable<Geometry>, b: Nullable<Geometry>) -> Nullable<Bool>;
}

diesel::define_sql_function! {
    /// Return whether geometries share any interior or boundary points.
    #[sql_name = "Intersects"]
    fn intersects(a: Nullable<Geometry>, b: Nullable<Geometry>) -> Nullable<Bool>;
}

diesel::define_sql_function! {
    /// Return whether geometries share boundary points but no interior points.
    #[sql_name = "Touches"]
    fn touches(a: Nullable<Geometry>, b: Nullable<Geometry>) -> Nullable<Bool>;
}

diesel::define_sql_function! {
    /// Return whether geometries cross each other.
    #[sql_name = "Crosses"]
    fn crosses(a: Nullable<Geometry>, b: Nullable<Geometry>) -> Nullable<Bool>;
}

diesel::define_sql_function! {
    /// Return whether geometry A is fully contained within geometry B.
    #[sql_name = "Within"]
    fn within(a: Nullable<Geometry>, b: Nullable<Geometry>) -> Nullable<Bool>;
}

diesel::define_sql_function! {
    /// Return whether geometries overlap (same dimension, neither contains the other).
    #[sql_name = "Overlaps"]
    fn overlaps(a: Nullable<Geometry>, b: Nullable<Geometry>) -> Nullable<Bool>;
}

diesel::define_sql_function! {
    /// Return whether geometry A fully contains geometry B.
    #[sql_name = "Contains"]
    fn contains(a: Nullable<Geometry>, b: Nullable<Geometry>) -> Nullable<Bool>;
}

// ── Bounding-box predicates ───────────────────────────────────────────────────

diesel::define_sql_function! {
    /// Return whether the bounding boxes are equal.
    #[sql_name = "MBREqual"]
    fn mbr_equal(a: Nullable<Geometry>, b: Nullable<Geometry>) -> Nullable<Bool>;
}

diesel::define_sql_function! {
    /// Return whether the bounding boxes share no points.
    #[sql_name = "MBRDisjoint"]
    fn mbr_disjoint(a: Nullable<Geometry>, b: Nullable<Geometry>) -> Nullable<Bool>;
}

diesel::define_sql_function! {
    /// Return whether the bounding boxes intersect.
    #[sql_name = "MBRIntersects"]
    fn mbr_intersects(a: Nullable<Geometry>, b: Nullable<Geometry>) -> Nullable<Bool>;
}

diesel::define_sql_function! {
    /// Return whether the bounding boxes touch.
    #[sql_name = "MBRTouches"]
    fn mbr_touches(a: Nullable<Geometry>, b: Nullable<Geometry>) -> Nullable<Bool>;
}

diesel::define_sql_function! {
    /// Return whether A's bounding box is within B's.
    #[sql_name = "MBRWithin"]
    fn mbr_within(a: Nullable<Geometry>, b: Nullable<Geometry>) -> Nullable<Bool>;
}

diesel::define_sql_function! {
    /// Return whether the bounding boxes overlap.
    #[sql_name = "MBROverlaps"]
    fn mbr_overlaps(a: Nullable<Geometry>, b: Nullable<Geometry>) -> Nullable<Bool>;
}

diesel::define_sql_function! {
    /// Return whether A's bounding box contains B's.
    #[sql_name = "MBRContains"]
    fn mbr_contains(a: Nullable<Geometry>, b: Nullable<Geometry>) -> Nullable<Bool>;
}

// ── Bounding-box corner accessors ─────────────────────────────────────────────
// Used by the within_distance rewrite to bound the R-tree range probe.

diesel::define_sql_function! {
    /// Return the X coordinate of the bounding-box minimum corner.
    #[sql_name = "MbrMinX"]
    fn mbr_min_x(geom: Nullable<Geometry>) -> Nullable<Double>;
}

diesel::define_sql_function! {
    /// Return the X coordinate of the bounding-box maximum corner.
    #[sql_name = "MbrMaxX"]
    fn mbr_max_x(geom: Nullable<Geometry>) -> Nullable<Double>;
}

diesel::define_sql_function! {
    /// Return the Y coordinate of the bounding-box minimum corner.
    #[sql_name = "MbrMinY"]
    fn mbr_min_y(geom: Nullable<Geometry>) -> Nullable<Double>;
}

diesel::define_sql_function! {
    /// Return the Y coordinate of the bounding-box maximum corner.
    #[sql_name = "MbrMaxY"]
    fn mbr_max_y(geom: Nullable<Geometry>) -> Nullable<Double>;
}
