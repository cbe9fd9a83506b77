//! Backend dialect interface and the GeoDB implementation.
//!
//! A backend contributes its function-mapping table and capability flags;
//! statement building for the DDL hooks is shared through the default
//! methods so a capability change alone is enough to light up the
//! index-maintenance paths.

use crate::column::GeometryColumn;
use crate::ddl;
use crate::element::{PersistentGeometry, WkbElement};
use crate::error::{GeodbError, Result};
use crate::ops::SpatialOp;

/// Result of resolving an abstract operation against a backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FunctionMapping {
    /// Compiles to a direct call of the named SQL function.
    Name(&'static str),
    /// Compiles through a dialect-specific rewrite instead of a single
    /// function call (see `within_distance` in the integration crate).
    Rewrite,
}

/// Explicit interface a spatial backend exposes to the ORM layer.
pub trait SpatialDialect {
    /// Resolve an abstract operation to its SQL compilation strategy.
    ///
    /// Returns [`GeodbError::Unsupported`] when the backend has no
    /// equivalent — never a silent miss.
    fn function(&self, op: SpatialOp) -> Result<FunctionMapping>;

    /// Whether the backend can maintain an auxiliary R-tree index table.
    fn supports_rtree(&self) -> bool {
        false
    }

    /// Statements to run right after a geometry column was created: add the
    /// BLOB storage column, then build the spatial index when the column
    /// asks for one and the backend can provide it.
    fn after_create_statements(&self, column: &GeometryColumn) -> Vec<String> {
        let mut statements = vec![ddl::add_geometry_column(column)];
        if column.spatial_index && self.supports_rtree() {
            statements.push(ddl::create_spatial_index(column));
        }
        statements
    }

    /// Statements to run before the owning table or column is dropped.
    ///
    /// The index must be disabled before its auxiliary table can be dropped;
    /// both happen before the owning table goes away so no orphaned index
    /// structure remains.
    fn before_drop_statements(&self, column: &GeometryColumn) -> Vec<String> {
        if column.spatial_index && self.supports_rtree() {
            vec![
                ddl::disable_spatial_index(column),
                ddl::drop_index_table(column),
            ]
        } else {
            Vec::new()
        }
    }

    /// Wrap a raw WKB payload read back from the database, tagged with the
    /// column's declared SRID.
    fn process_result(&self, wkb: Vec<u8>, srid: i32) -> PersistentGeometry {
        PersistentGeometry::new(WkbElement::new(wkb, srid))
    }
}

/// The GeoDB backend: SpatiaLite-compatible function names over SQLite BLOB
/// storage. R-tree auxiliary index tables are not available.
#[derive(Debug, Clone, Copy, Default)]
pub struct GeoDb;

impl SpatialDialect for GeoDb {
    fn function(&self, op: SpatialOp) -> Result<FunctionMapping> {
        use FunctionMapping::{Name, Rewrite};
        use SpatialOp::*;

        match op {
            // I/O
            GeomFromText => Ok(Name("ST_GeomFromText")),
            GeomFromWkb => Ok(Name("GeomFromWKB")),
            AsText => Ok(Name("AsText")),
            AsWkb => Ok(Name("AsBinary")),
            AsSvg => Ok(Name("AsSVG")),
            AsFgf => Ok(Name("AsFGF")),
            // Accessors
            Dimension => Ok(Name("Dimension")),
            Srid => Ok(Name("SRID")),
            GeometryType => Ok(Name("GeometryType")),
            X => Ok(Name("X")),
            Y => Ok(Name("Y")),
            NumPoints => Ok(Name("NumPoints")),
            PointN => Ok(Name("PointN")),
            StartPoint => Ok(Name("StartPoint")),
            EndPoint => Ok(Name("EndPoint")),
            Envelope => Ok(Name("Envelope")),
            ExteriorRing => Ok(Name("ExteriorRing")),
            NumInteriorRings => Ok(Name("NumInteriorRings")),
            InteriorRingN => Ok(Name("InteriorRingN")),
            NumGeometries => Ok(Name("NumGeometries")),
            GeometryN => Ok(Name("GeometryN")),
            IsValid => Ok(Name("IsValid")),
            IsSimple => Ok(Name("IsSimple")),
            IsEmpty => Ok(Name("IsEmpty")),
            IsClosed => Ok(Name("IsClosed")),
            IsRing => Ok(Name("IsRing")),
            // Measurement
            Length => Ok(Name("GLength")),
            Area => Ok(Name("Area")),
            Distance => Ok(Name("Distance")),
            Centroid => Ok(Name("Centroid")),
            Boundary => Ok(Name("Boundary")),
            // Operations
            Buffer => Ok(Name("Buffer")),
            ConvexHull => Ok(Name("ConvexHull")),
            Intersection => Ok(Name("Intersection")),
            Union => Ok(Name("GUnion")),
            Difference => Ok(Name("Difference")),
            SymDifference => Ok(Name("SymDifference")),
            Transform => Ok(Name("Transform")),
            // Exact predicates
            Equals => Ok(Name("Equals")),
            Disjoint => Ok(Name("Disjoint")),
            Intersects => Ok(Name("Intersects")),
            Touches => Ok(Name("Touches")),
            Crosses => Ok(Name("Crosses")),
            Within => Ok(Name("Within")),
            Overlaps => Ok(Name("Overlaps")),
            Contains => Ok(Name("Contains")),
            // Bounding-box predicates (MySQL-compatible spellings)
            MbrEqual => Ok(Name("MBREqual")),
            MbrDisjoint => Ok(Name("MBRDisjoint")),
            MbrIntersects => Ok(Name("MBRIntersects")),
            MbrTouches => Ok(Name("MBRTouches")),
            MbrWithin => Ok(Name("MBRWithin")),
            MbrOverlaps => Ok(Name("MBROverlaps")),
            MbrContains => Ok(Name("MBRContains")),
            // Distance threshold: compiled through the index-aware rewrite.
            WithinDistance => Ok(Rewrite),
            // No GeoDB equivalent.
            Covers | CoveredBy | AggregateUnion => Err(GeodbError::Unsupported(op)),
        }
    }
}
