use tracing::debug;

use super::{ColumnAnnotations, ColumnTag, DdlGenerator};
use crate::error::DdlResult;
use crate::schema::EntitySet;

impl DdlGenerator {
    /// Generate the `RECREATE TABLE` block and column comments for an entity set
    ///
    /// Errors are attributed to the entity set.
    pub fn generate_table(&self, entity_set: &EntitySet) -> DdlResult<String> {
        self.table_block(entity_set)
            .map_err(|err| err.in_entity_set(&entity_set.name))
    }

    fn table_block(&self, entity_set: &EntitySet) -> DdlResult<String> {
        let nl = self.newline();
        let table_name = entity_set.table_name();
        let table = self.dialect.quote_identifier(table_name)?;
        let keys = entity_set.key_properties()?;

        let mut sql = format!("RECREATE TABLE {} ({}", table, nl);
        let mut annotations = ColumnAnnotations::new();

        for property in &entity_set.properties {
            let column = self.generate_column(property)?;
            sql.push_str(&self.config.indent);
            sql.push_str(&column.sql);
            sql.push(',');
            sql.push_str(nl);
            annotations = annotations.merge(column.annotations);
        }

        let key_names: Vec<&str> = keys.iter().map(|p| p.name.as_str()).collect();
        sql.push_str(&format!(
            "CONSTRAINT {} PRIMARY KEY ({}){}",
            self.dialect
                .quote_identifier(&format!("PK_{}", table_name))?,
            self.quote_list(&key_names)?,
            nl
        ));
        sql.push_str(");");
        sql.push_str(nl);

        // Identity keys win over any type tag on the same column
        let annotations = keys
            .iter()
            .filter(|p| p.is_identity())
            .fold(annotations, |acc, p| acc.with(p.name.as_str(), ColumnTag::PkGen));

        for (column, tag) in annotations.iter() {
            sql.push_str(&format!(
                "COMMENT ON COLUMN {}.{} IS '{}';{}",
                table,
                self.dialect.quote_identifier(column)?,
                tag,
                nl
            ));
        }

        debug!(
            table = table_name,
            columns = entity_set.properties.len(),
            annotations = annotations.len(),
            "generated table"
        );

        Ok(sql)
    }
}
