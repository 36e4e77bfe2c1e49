//! Error types for DDL generation

use thiserror::Error;

use crate::schema::PrimitiveTypeKind;

/// Errors that can occur while generating a DDL script
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DdlError {
    #[error("No key members declared")]
    MissingKey,

    #[error("Key member '{0}' is not a declared property")]
    UnknownKeyMember(String),

    #[error("Unknown entity set: {0}")]
    UnknownEntitySet(String),

    #[error("Expected exactly one referential constraint (found {found})")]
    ReferentialConstraintCount { found: usize },

    #[error("No association end for role '{0}'")]
    UnknownRole(String),

    #[error("Referential constraint maps {from} principal columns to {to} dependent columns")]
    ConstraintArity { from: usize, to: usize },

    #[error("Primitive type {kind:?} is not supported by this dialect")]
    UnsupportedType { kind: PrimitiveTypeKind },

    #[error("Invalid facets for {kind:?}: {reason}")]
    InvalidFacets {
        kind: PrimitiveTypeKind,
        reason: String,
    },

    #[error("Cannot quote an empty identifier")]
    EmptyIdentifier,

    #[error("Identifier '{name}' exceeds the maximum length of {max}")]
    IdentifierTooLong { name: String, max: usize },

    #[error("Entity set '{entity_set}': {source}")]
    EntitySet {
        entity_set: String,
        #[source]
        source: Box<DdlError>,
    },

    #[error("Relationship set '{relationship}': {source}")]
    RelationshipSet {
        relationship: String,
        #[source]
        source: Box<DdlError>,
    },
}

impl DdlError {
    /// Attribute an error to the entity set being synthesized
    pub fn in_entity_set(self, entity_set: &str) -> Self {
        DdlError::EntitySet {
            entity_set: entity_set.to_string(),
            source: Box::new(self),
        }
    }

    /// Attribute an error to the relationship set being synthesized
    pub fn in_relationship_set(self, relationship: &str) -> Self {
        DdlError::RelationshipSet {
            relationship: relationship.to_string(),
            source: Box::new(self),
        }
    }

    /// The innermost error, with set attribution stripped
    pub fn root_cause(&self) -> &DdlError {
        match self {
            DdlError::EntitySet { source, .. } | DdlError::RelationshipSet { source, .. } => {
                source.root_cause()
            }
            other => other,
        }
    }
}

/// Result type for DDL generation
pub type DdlResult<T> = Result<T, DdlError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attributed_message_names_the_set() {
        let err = DdlError::EmptyIdentifier.in_entity_set("Customer");
        assert_eq!(
            err.to_string(),
            "Entity set 'Customer': Cannot quote an empty identifier"
        );
        assert_eq!(err.root_cause(), &DdlError::EmptyIdentifier);
    }

    #[test]
    fn test_source_chain() {
        use std::error::Error;

        let err = DdlError::UnknownEntitySet("Ghost".to_string()).in_relationship_set("FK_Ghost");
        let source = err.source().map(|s| s.to_string());
        assert_eq!(source.as_deref(), Some("Unknown entity set: Ghost"));
    }
}
