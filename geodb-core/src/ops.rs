//! Abstract spatial operation identifiers.
//!
//! Every operation the surrounding framework may ask a backend to compile is
//! listed here explicitly. A backend answers each one with a SQL function
//! name, a rewrite marker, or an explicit "unsupported" error — the full set
//! is closed, so there is no open-ended fallback to miss.

use std::fmt;

/// An abstract spatial operation, independent of any backend's SQL spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpatialOp {
    // I/O
    GeomFromText,
    GeomFromWkb,
    AsText,
    AsWkb,
    AsSvg,
    AsFgf,
    // Accessors
    Dimension,
    Srid,
    GeometryType,
    X,
    Y,
    NumPoints,
    PointN,
    StartPoint,
    EndPoint,
    Envelope,
    ExteriorRing,
    NumInteriorRings,
    InteriorRingN,
    NumGeometries,
    GeometryN,
    IsValid,
    IsSimple,
    IsEmpty,
    IsClosed,
    IsRing,
    // Measurement
    Length,
    Area,
    Distance,
    Centroid,
    Boundary,
    // Operations
    Buffer,
    ConvexHull,
    Intersection,
    Union,
    Difference,
    SymDifference,
    Transform,
    // Exact predicates
    Equals,
    Disjoint,
    Intersects,
    Touches,
    Crosses,
    Within,
    Overlaps,
    Contains,
    Covers,
    CoveredBy,
    // Bounding-box predicates
    MbrEqual,
    MbrDisjoint,
    MbrIntersects,
    MbrTouches,
    MbrWithin,
    MbrOverlaps,
    MbrContains,
    // Distance threshold
    WithinDistance,
    // Aggregates
    AggregateUnion,
}

impl SpatialOp {
    /// Every operation, in declaration order. Used to verify that a backend
    /// mapping answers the whole set.
    pub const ALL: &'static [SpatialOp] = &[
        SpatialOp::GeomFromText,
        SpatialOp::GeomFromWkb,
        SpatialOp::AsText,
        SpatialOp::AsWkb,
        SpatialOp::AsSvg,
        SpatialOp::AsFgf,
        SpatialOp::Dimension,
        SpatialOp::Srid,
        SpatialOp::GeometryType,
        SpatialOp::X,
        SpatialOp::Y,
        SpatialOp::NumPoints,
        SpatialOp::PointN,
        SpatialOp::StartPoint,
        SpatialOp::EndPoint,
        SpatialOp::Envelope,
        SpatialOp::ExteriorRing,
        SpatialOp::NumInteriorRings,
        SpatialOp::InteriorRingN,
        SpatialOp::NumGeometries,
        SpatialOp::GeometryN,
        SpatialOp::IsValid,
        SpatialOp::IsSimple,
        SpatialOp::IsEmpty,
        SpatialOp::IsClosed,
        SpatialOp::IsRing,
        SpatialOp::Length,
        SpatialOp::Area,
        SpatialOp::Distance,
        SpatialOp::Centroid,
        SpatialOp::Boundary,
        SpatialOp::Buffer,
        SpatialOp::ConvexHull,
        SpatialOp::Intersection,
        SpatialOp::Union,
        SpatialOp::Difference,
        SpatialOp::SymDifference,
        SpatialOp::Transform,
        SpatialOp::Equals,
        SpatialOp::Disjoint,
        SpatialOp::Intersects,
        SpatialOp::Touches,
        SpatialOp::Crosses,
        SpatialOp::Within,
        SpatialOp::Overlaps,
        SpatialOp::Contains,
        SpatialOp::Covers,
        SpatialOp::CoveredBy,
        SpatialOp::MbrEqual,
        SpatialOp::MbrDisjoint,
        SpatialOp::MbrIntersects,
        SpatialOp::MbrTouches,
        SpatialOp::MbrWithin,
        SpatialOp::MbrOverlaps,
        SpatialOp::MbrContains,
        SpatialOp::WithinDistance,
        SpatialOp::AggregateUnion,
    ];

    /// Stable lower-case identifier, used in error messages.
    pub fn ident(self) -> &'static str {
        match self {
            SpatialOp::GeomFromText => "geom_from_text",
            SpatialOp::GeomFromWkb => "geom_from_wkb",
            SpatialOp::AsText => "as_text",
            SpatialOp::AsWkb => "as_wkb",
            SpatialOp::AsSvg => "as_svg",
            SpatialOp::AsFgf => "as_fgf",
            SpatialOp::Dimension => "dimension",
            SpatialOp::Srid => "srid",
            SpatialOp::GeometryType => "geometry_type",
            SpatialOp::X => "x",
            SpatialOp::Y => "y",
            SpatialOp::NumPoints => "num_points",
            SpatialOp::PointN => "point_n",
            SpatialOp::StartPoint => "start_point",
            SpatialOp::EndPoint => "end_point",
            SpatialOp::Envelope => "envelope",
            SpatialOp::ExteriorRing => "exterior_ring",
            SpatialOp::NumInteriorRings => "num_interior_rings",
            SpatialOp::InteriorRingN => "interior_ring_n",
            SpatialOp::NumGeometries => "num_geometries",
            SpatialOp::GeometryN => "geometry_n",
            SpatialOp::IsValid => "is_valid",
            SpatialOp::IsSimple => "is_simple",
            SpatialOp::IsEmpty => "is_empty",
            SpatialOp::IsClosed => "is_closed",
            SpatialOp::IsRing => "is_ring",
            SpatialOp::Length => "length",
            SpatialOp::Area => "area",
            SpatialOp::Distance => "distance",
            SpatialOp::Centroid => "centroid",
            SpatialOp::Boundary => "boundary",
            SpatialOp::Buffer => "buffer",
            SpatialOp::ConvexHull => "convex_hull",
            SpatialOp::Intersection => "intersection",
            SpatialOp::Union => "union",
            SpatialOp::Difference => "difference",
            SpatialOp::SymDifference => "sym_difference",
            SpatialOp::Transform => "transform",
            SpatialOp::Equals => "equals",
            SpatialOp::Disjoint => "disjoint",
            SpatialOp::Intersects => "intersects",
            SpatialOp::Touches => "touches",
            SpatialOp::Crosses => "crosses",
            SpatialOp::Within => "within",
            SpatialOp::Overlaps => "overlaps",
            SpatialOp::Contains => "contains",
            SpatialOp::Covers => "covers",
            SpatialOp::CoveredBy => "covered_by",
            SpatialOp::MbrEqual => "mbr_equal",
            SpatialOp::MbrDisjoint => "mbr_disjoint",
            SpatialOp::MbrIntersects => "mbr_intersects",
            SpatialOp::MbrTouches => "mbr_touches",
            SpatialOp::MbrWithin => "mbr_within",
            SpatialOp::MbrOverlaps => "mbr_overlaps",
            SpatialOp::MbrContains => "mbr_contains",
            SpatialOp::WithinDistance => "within_distance",
            SpatialOp::AggregateUnion => "aggregate_union",
        }
    }
}

impl fmt::Display for SpatialOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.ident())
    }
}
