use tracing::debug;

use super::DdlGenerator;
use crate::error::{DdlError, DdlResult};
use crate::schema::{AssociationEnd, DeleteBehavior, EntitySet, RelationshipSet, SchemaModel};

impl DdlGenerator {
    /// Generate the `ALTER TABLE ... ADD CONSTRAINT ... FOREIGN KEY` statement
    /// for a relationship set
    ///
    /// `model` supplies the entity sets the association ends are bound to.
    /// Errors are attributed to the relationship set.
    pub fn generate_foreign_key(
        &self,
        model: &SchemaModel,
        relationship: &RelationshipSet,
    ) -> DdlResult<String> {
        self.foreign_key_statement(model, relationship)
            .map_err(|err| err.in_relationship_set(&relationship.name))
    }

    fn foreign_key_statement(
        &self,
        model: &SchemaModel,
        relationship: &RelationshipSet,
    ) -> DdlResult<String> {
        let nl = self.newline();
        let resolved = relationship.resolve()?;
        let principal = bound_entity_set(model, resolved.principal)?;
        let dependent = bound_entity_set(model, resolved.dependent)?;

        let on_delete = match resolved.principal.delete_behavior {
            DeleteBehavior::Cascade => "CASCADE",
            DeleteBehavior::None => "NO ACTION",
        };

        let sql = format!(
            "ALTER TABLE {} ADD CONSTRAINT {} FOREIGN KEY ({}){}REFERENCES {}({}){}ON DELETE {};",
            self.dialect.quote_identifier(dependent.table_name())?,
            self.dialect
                .quote_identifier(&format!("FK_{}", resolved.name))?,
            self.quote_list(&resolved.constraint.to_properties)?,
            nl,
            self.dialect.quote_identifier(principal.table_name())?,
            self.quote_list(&resolved.constraint.from_properties)?,
            nl,
            on_delete
        );

        debug!(
            relationship = resolved.name,
            principal = principal.table_name(),
            dependent = dependent.table_name(),
            on_delete,
            "generated foreign key"
        );

        Ok(sql)
    }
}

fn bound_entity_set<'a>(model: &'a SchemaModel, end: &AssociationEnd) -> DdlResult<&'a EntitySet> {
    model
        .entity_set(&end.entity_set)
        .ok_or_else(|| DdlError::UnknownEntitySet(end.entity_set.clone()))
}
