use super::{ColumnAnnotations, ColumnTag, DdlGenerator};
use crate::error::DdlResult;
use crate::schema::{PrimitiveTypeKind, Property};

/// Column fragment plus the tags it contributes to the table comments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDefinition {
    pub sql: String,
    pub annotations: ColumnAnnotations,
}

impl DdlGenerator {
    /// Generate the definition of a single column
    pub fn generate_column(&self, property: &Property) -> DdlResult<ColumnDefinition> {
        let name = self.dialect.quote_identifier(&property.name)?;
        let mut sql = format!(
            "{} {}",
            name,
            self.dialect.column_type(property.kind, &property.facets)?
        );

        let annotations = match property.kind {
            PrimitiveTypeKind::Boolean => {
                sql.push_str(&format!(" CHECK ({} IN (1,0))", name));
                ColumnAnnotations::new().with(property.name.as_str(), ColumnTag::Bool)
            }
            PrimitiveTypeKind::Guid => {
                ColumnAnnotations::new().with(property.name.as_str(), ColumnTag::Guid)
            }
            _ => ColumnAnnotations::new(),
        };

        if !property.nullable {
            sql.push_str(" NOT NULL");
        }

        Ok(ColumnDefinition { sql, annotations })
    }
}
