//! Spatial column metadata consumed by DDL generation and the
//! distance-predicate rewrite.

/// Descriptor for a geometry column as declared in the schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeometryColumn {
    /// Owning table name (unqualified).
    pub table: String,
    /// Column name.
    pub column: String,
    /// Declared coordinate reference system identifier.
    pub srid: i32,
    /// Whether an auxiliary spatial index was requested for this column.
    pub spatial_index: bool,
}

impl GeometryColumn {
    pub fn new(
        table: impl Into<String>,
        column: impl Into<String>,
        srid: i32,
        spatial_index: bool,
    ) -> Self {
        Self {
            table: table.into(),
            column: column.into(),
            srid,
            spatial_index,
        }
    }

    /// Name of the auxiliary R-tree index table for this column.
    pub fn index_table(&self) -> String {
        format!("idx_{}_{}", self.table, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_table_name() {
        let col = GeometryColumn::new("roads", "geom", 4326, true);
        assert_eq!(col.index_table(), "idx_roads_geom");
    }
}
