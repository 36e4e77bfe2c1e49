//! Store schema model consumed by the DDL generator
//!
//! The model mirrors the storage half of an entity mapping: one entity
//! container holding entity sets (tables) and association sets (foreign
//! keys). It is built by whoever loads the store metadata and is only ever
//! borrowed by the generator.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{DdlError, DdlResult};

/// Store model for a single entity container
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct SchemaModel {
    /// Entity sets in declaration order
    pub entity_sets: Vec<EntitySet>,
    /// Relationship sets in declaration order
    pub relationship_sets: Vec<RelationshipSet>,
}

impl SchemaModel {
    /// Create a new empty model
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entity set
    pub fn add_entity_set(&mut self, entity_set: EntitySet) {
        self.entity_sets.push(entity_set);
    }

    /// Add a relationship set
    pub fn add_relationship_set(&mut self, relationship_set: RelationshipSet) {
        self.relationship_sets.push(relationship_set);
    }

    /// Builder-style variant of [`SchemaModel::add_entity_set`]
    pub fn with_entity_set(mut self, entity_set: EntitySet) -> Self {
        self.add_entity_set(entity_set);
        self
    }

    /// Builder-style variant of [`SchemaModel::add_relationship_set`]
    pub fn with_relationship_set(mut self, relationship_set: RelationshipSet) -> Self {
        self.add_relationship_set(relationship_set);
        self
    }

    /// Get an entity set by name
    pub fn entity_set(&self, name: &str) -> Option<&EntitySet> {
        self.entity_sets.iter().find(|set| set.name == name)
    }
}

/// An entity set, mapped to one table
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct EntitySet {
    /// Entity set name
    pub name: String,
    /// Store table name, when it differs from the set name
    #[cfg_attr(feature = "serde", serde(default))]
    pub table: Option<String>,
    /// Properties of the element type, in declaration order
    #[cfg_attr(feature = "serde", serde(default))]
    pub properties: Vec<Property>,
    /// Names of the key members, in key order
    #[cfg_attr(feature = "serde", serde(default))]
    pub key_members: Vec<String>,
}

impl EntitySet {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            table: None,
            properties: Vec::new(),
            key_members: Vec::new(),
        }
    }

    /// Set the store table name
    pub fn with_table(mut self, table: impl Into<String>) -> Self {
        self.table = Some(table.into());
        self
    }

    /// Add a non-key property
    pub fn with_property(mut self, property: Property) -> Self {
        self.properties.push(property);
        self
    }

    /// Add a property and mark it as the next key member
    pub fn with_key(mut self, property: Property) -> Self {
        self.key_members.push(property.name.clone());
        self.properties.push(property);
        self
    }

    /// Mark an already declared property as the next key member
    pub fn with_key_member(mut self, name: impl Into<String>) -> Self {
        self.key_members.push(name.into());
        self
    }

    /// Name of the table this set is stored in
    pub fn table_name(&self) -> &str {
        self.table.as_deref().unwrap_or(&self.name)
    }

    /// Get a property by name
    pub fn property(&self, name: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.name == name)
    }

    /// Resolve the key members to their properties, in key order
    pub fn key_properties(&self) -> DdlResult<Vec<&Property>> {
        if self.key_members.is_empty() {
            return Err(DdlError::MissingKey);
        }

        self.key_members
            .iter()
            .map(|member| {
                self.property(member)
                    .ok_or_else(|| DdlError::UnknownKeyMember(member.clone()))
            })
            .collect()
    }
}

/// A property of an entity type, mapped to one column
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Property {
    pub name: String,
    pub kind: PrimitiveTypeKind,
    #[cfg_attr(feature = "serde", serde(default))]
    pub facets: Facets,
    #[cfg_attr(feature = "serde", serde(default = "default_nullable"))]
    pub nullable: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    pub store_generated: StoreGeneratedPattern,
}

#[cfg(feature = "serde")]
fn default_nullable() -> bool {
    true
}

impl Property {
    /// Create a new nullable property
    pub fn new(name: impl Into<String>, kind: PrimitiveTypeKind) -> Self {
        Self {
            name: name.into(),
            kind,
            facets: Facets::default(),
            nullable: true,
            store_generated: StoreGeneratedPattern::None,
        }
    }

    /// Set whether the column accepts nulls
    pub fn with_nullable(mut self, nullable: bool) -> Self {
        self.nullable = nullable;
        self
    }

    /// Shorthand for `with_nullable(false)`
    pub fn not_null(self) -> Self {
        self.with_nullable(false)
    }

    /// Mark the value as assigned by the database on insert
    pub fn identity(mut self) -> Self {
        self.store_generated = StoreGeneratedPattern::Identity;
        self
    }

    /// Set the store-generated pattern
    pub fn with_store_generated(mut self, pattern: StoreGeneratedPattern) -> Self {
        self.store_generated = pattern;
        self
    }

    /// Set the maximum length
    pub fn with_max_length(mut self, max_length: MaxLength) -> Self {
        self.facets.max_length = Some(max_length);
        self
    }

    /// Set whether the length is fixed
    pub fn with_fixed_length(mut self, fixed: bool) -> Self {
        self.facets.fixed_length = Some(fixed);
        self
    }

    /// Set whether the text is unicode
    pub fn with_unicode(mut self, unicode: bool) -> Self {
        self.facets.unicode = Some(unicode);
        self
    }

    /// Set the precision and scale
    pub fn with_precision(mut self, precision: u8, scale: u8) -> Self {
        self.facets.precision = Some(precision);
        self.facets.scale = Some(scale);
        self
    }

    pub fn is_identity(&self) -> bool {
        self.store_generated == StoreGeneratedPattern::Identity
    }
}

/// Primitive type of a store property
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PrimitiveTypeKind {
    Binary,
    Boolean,
    Byte,
    SByte,
    Int16,
    Int32,
    Int64,
    Single,
    Double,
    Decimal,
    DateTime,
    DateTimeOffset,
    Time,
    Guid,
    String,
}

/// Type facets that refine a primitive type
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct Facets {
    pub max_length: Option<MaxLength>,
    pub fixed_length: Option<bool>,
    pub unicode: Option<bool>,
    pub precision: Option<u8>,
    pub scale: Option<u8>,
}

/// Maximum length facet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum MaxLength {
    /// Unbounded ("Max")
    Max,
    Bounded(u32),
}

/// How the store assigns a column value
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum StoreGeneratedPattern {
    #[default]
    None,
    Identity,
    Computed,
}

/// A relationship set, mapped to one foreign key
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct RelationshipSet {
    pub name: String,
    /// Association ends, keyed by role name
    #[cfg_attr(feature = "serde", serde(default))]
    pub ends: Vec<AssociationEnd>,
    /// Referential constraints; a well-formed set has exactly one
    #[cfg_attr(feature = "serde", serde(default))]
    pub constraints: Vec<ReferentialConstraint>,
}

impl RelationshipSet {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ends: Vec::new(),
            constraints: Vec::new(),
        }
    }

    /// Add an association end
    pub fn with_end(mut self, end: AssociationEnd) -> Self {
        self.ends.push(end);
        self
    }

    /// Add a referential constraint
    pub fn with_constraint(mut self, constraint: ReferentialConstraint) -> Self {
        self.constraints.push(constraint);
        self
    }

    /// Get an association end by role name
    pub fn end(&self, role: &str) -> Option<&AssociationEnd> {
        self.ends.iter().find(|end| end.role == role)
    }

    /// Validate the set and bind its constraint roles to concrete ends
    pub fn resolve(&self) -> DdlResult<ResolvedRelationship<'_>> {
        let constraint = match self.constraints.as_slice() {
            [constraint] => constraint,
            other => {
                return Err(DdlError::ReferentialConstraintCount {
                    found: other.len(),
                })
            }
        };

        if constraint.from_properties.len() != constraint.to_properties.len() {
            return Err(DdlError::ConstraintArity {
                from: constraint.from_properties.len(),
                to: constraint.to_properties.len(),
            });
        }

        let principal = self.role_end(&constraint.from_role)?;
        let dependent = self.role_end(&constraint.to_role)?;

        Ok(ResolvedRelationship {
            name: &self.name,
            principal,
            dependent,
            constraint,
        })
    }

    fn role_end(&self, role: &str) -> DdlResult<&AssociationEnd> {
        self.end(role)
            .ok_or_else(|| DdlError::UnknownRole(role.to_string()))
    }
}

/// One end of a relationship set
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct AssociationEnd {
    pub role: String,
    /// Name of the entity set bound to this end
    pub entity_set: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub delete_behavior: DeleteBehavior,
}

impl AssociationEnd {
    pub fn new(role: impl Into<String>, entity_set: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            entity_set: entity_set.into(),
            delete_behavior: DeleteBehavior::None,
        }
    }

    /// Cascade deletes from this end to the other
    pub fn cascade(mut self) -> Self {
        self.delete_behavior = DeleteBehavior::Cascade;
        self
    }
}

/// Action taken on the dependent rows when a principal row is deleted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DeleteBehavior {
    #[default]
    None,
    Cascade,
}

/// Column mapping between the principal and dependent ends
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ReferentialConstraint {
    /// Role of the principal (referenced) end
    pub from_role: String,
    /// Role of the dependent (referencing) end
    pub to_role: String,
    pub from_properties: Vec<String>,
    pub to_properties: Vec<String>,
}

impl ReferentialConstraint {
    pub fn new(from_role: impl Into<String>, to_role: impl Into<String>) -> Self {
        Self {
            from_role: from_role.into(),
            to_role: to_role.into(),
            from_properties: Vec::new(),
            to_properties: Vec::new(),
        }
    }

    /// Map a principal property to a dependent property
    pub fn with_pair(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.from_properties.push(from.into());
        self.to_properties.push(to.into());
        self
    }
}

/// A relationship set whose constraint and ends have been validated
#[derive(Debug, Clone, Copy)]
pub struct ResolvedRelationship<'a> {
    pub name: &'a str,
    /// Referenced end
    pub principal: &'a AssociationEnd,
    /// Referencing end
    pub dependent: &'a AssociationEnd,
    pub constraint: &'a ReferentialConstraint,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn customer_order() -> RelationshipSet {
        RelationshipSet::new("CustomerOrder")
            .with_end(AssociationEnd::new("Customer", "Customer").cascade())
            .with_end(AssociationEnd::new("Order", "Order"))
            .with_constraint(
                ReferentialConstraint::new("Customer", "Order").with_pair("Id", "CustomerId"),
            )
    }

    #[test]
    fn test_table_name_falls_back_to_set_name() {
        let set = EntitySet::new("Customer");
        assert_eq!(set.table_name(), "Customer");

        let set = EntitySet::new("Customer").with_table("CUSTOMERS");
        assert_eq!(set.table_name(), "CUSTOMERS");
    }

    #[test]
    fn test_key_properties_in_key_order() {
        let set = EntitySet::new("OrderLine")
            .with_property(Property::new("LineNo", PrimitiveTypeKind::Int32))
            .with_property(Property::new("OrderId", PrimitiveTypeKind::Int32))
            .with_key_member("OrderId")
            .with_key_member("LineNo");

        let keys: Vec<_> = set
            .key_properties()
            .unwrap()
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(keys, vec!["OrderId", "LineNo"]);
    }

    #[test]
    fn test_missing_and_unknown_keys() {
        let set = EntitySet::new("Empty").with_property(Property::new("A", PrimitiveTypeKind::Int32));
        assert_eq!(
            set.key_properties().unwrap_err(),
            DdlError::MissingKey
        );

        let set = set.with_key_member("B");
        assert_eq!(
            set.key_properties().unwrap_err(),
            DdlError::UnknownKeyMember("B".to_string())
        );
    }

    #[test]
    fn test_resolve_binds_principal_and_dependent() {
        let set = customer_order();
        let resolved = set.resolve().unwrap();

        assert_eq!(resolved.name, "CustomerOrder");
        assert_eq!(resolved.principal.entity_set, "Customer");
        assert_eq!(resolved.principal.delete_behavior, DeleteBehavior::Cascade);
        assert_eq!(resolved.dependent.entity_set, "Order");
    }

    #[test]
    fn test_resolve_rejects_constraint_counts() {
        let mut set = customer_order();
        let constraint = set.constraints[0].clone();
        set.constraints.push(constraint);
        assert_eq!(
            set.resolve().unwrap_err(),
            DdlError::ReferentialConstraintCount { found: 2 }
        );

        set.constraints.clear();
        assert!(matches!(
            set.resolve(),
            Err(DdlError::ReferentialConstraintCount { found: 0 })
        ));
    }

    #[test]
    fn test_resolve_rejects_unknown_role() {
        let set = RelationshipSet::new("Broken")
            .with_end(AssociationEnd::new("A", "Customer"))
            .with_constraint(ReferentialConstraint::new("A", "B").with_pair("Id", "AId"));

        assert_eq!(
            set.resolve().unwrap_err(),
            DdlError::UnknownRole("B".to_string())
        );
    }

    #[test]
    fn test_resolve_rejects_mismatched_columns() {
        let mut constraint = ReferentialConstraint::new("A", "B").with_pair("Id", "AId");
        constraint.from_properties.push("Extra".to_string());

        let set = RelationshipSet::new("Uneven")
            .with_end(AssociationEnd::new("A", "X"))
            .with_end(AssociationEnd::new("B", "Y"))
            .with_constraint(constraint);

        assert!(matches!(
            set.resolve(),
            Err(DdlError::ConstraintArity { from: 2, to: 1 })
        ));
    }

    #[test]
    fn test_entity_set_lookup() {
        let model = SchemaModel::new()
            .with_entity_set(EntitySet::new("Customer"))
            .with_entity_set(EntitySet::new("Order"));

        assert!(model.entity_set("Order").is_some());
        assert!(model.entity_set("order").is_none());
    }
}
