//! Dialect abstraction for identifier quoting and column types

use crate::error::{DdlError, DdlResult};
use crate::schema::{Facets, MaxLength, PrimitiveTypeKind};

/// Supported target servers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SqlDialect {
    Firebird25,
    #[default]
    Firebird3,
    Firebird4,
}

impl SqlDialect {
    /// Parse a provider manifest token such as `"2.5"` or `"4.0"`
    pub fn from_manifest_token(token: &str) -> Option<Self> {
        let mut parts = token.trim().split('.');
        let major: u32 = parts.next()?.parse().ok()?;
        let minor: u32 = parts.next().unwrap_or("0").parse().ok()?;
        match (major, minor) {
            (2, 5..) => Some(SqlDialect::Firebird25),
            (3, _) => Some(SqlDialect::Firebird3),
            (4.., _) => Some(SqlDialect::Firebird4),
            _ => None,
        }
    }
}

/// Quoting and type mapping for a target engine
pub trait DdlDialect: Send + Sync {
    /// Get the dialect type
    fn dialect(&self) -> SqlDialect;

    /// Quote an identifier (table/column/constraint name)
    fn quote_identifier(&self, name: &str) -> DdlResult<String>;

    /// Column type text for a primitive type and its facets
    fn column_type(&self, kind: PrimitiveTypeKind, facets: &Facets) -> DdlResult<String>;
}

/// Longest CHAR/VARCHAR Firebird accepts before a BLOB is needed
const MAX_VARCHAR_LENGTH: u32 = 32765;

const DEFAULT_DECIMAL_PRECISION: u8 = 18;
const DEFAULT_DECIMAL_SCALE: u8 = 2;

/// Firebird dialect implementation
#[derive(Debug, Clone, Copy)]
pub struct FirebirdDialect {
    version: SqlDialect,
    max_identifier_length: usize,
    max_decimal_precision: u8,
}

impl FirebirdDialect {
    pub fn new(version: SqlDialect) -> Self {
        let (max_identifier_length, max_decimal_precision) = match version {
            SqlDialect::Firebird25 | SqlDialect::Firebird3 => (31, 18),
            SqlDialect::Firebird4 => (63, 38),
        };
        Self {
            version,
            max_identifier_length,
            max_decimal_precision,
        }
    }

    /// Override the identifier length limit (bytes before 4.0, characters from 4.0)
    pub fn with_max_identifier_length(mut self, max: usize) -> Self {
        self.max_identifier_length = max;
        self
    }

    pub fn max_identifier_length(&self) -> usize {
        self.max_identifier_length
    }

    /// Length of `name` in the unit the server limits identifiers by
    fn identifier_length(&self, name: &str) -> usize {
        match self.version {
            SqlDialect::Firebird25 | SqlDialect::Firebird3 => name.len(),
            SqlDialect::Firebird4 => name.chars().count(),
        }
    }

    fn character_type(&self, facets: &Facets, charset: Option<&str>, blob: &str) -> String {
        let length = match facets.max_length {
            Some(MaxLength::Bounded(n)) if n <= MAX_VARCHAR_LENGTH => n,
            _ => {
                return match charset {
                    Some(cs) => format!("{} CHARACTER SET {}", blob, cs),
                    None => blob.to_string(),
                }
            }
        };

        let base = if facets.fixed_length.unwrap_or(false) {
            format!("CHAR({})", length)
        } else {
            format!("VARCHAR({})", length)
        };

        match charset {
            Some(cs) => format!("{} CHARACTER SET {}", base, cs),
            None => base,
        }
    }

    fn decimal_type(&self, facets: &Facets) -> DdlResult<String> {
        let precision = facets.precision.unwrap_or(DEFAULT_DECIMAL_PRECISION);
        let scale = facets.scale.unwrap_or(DEFAULT_DECIMAL_SCALE);

        if precision == 0 || precision > self.max_decimal_precision {
            return Err(DdlError::InvalidFacets {
                kind: PrimitiveTypeKind::Decimal,
                reason: format!(
                    "precision {} outside 1..={}",
                    precision, self.max_decimal_precision
                ),
            });
        }
        if scale > precision {
            return Err(DdlError::InvalidFacets {
                kind: PrimitiveTypeKind::Decimal,
                reason: format!("scale {} exceeds precision {}", scale, precision),
            });
        }

        Ok(format!("DECIMAL({},{})", precision, scale))
    }
}

impl Default for FirebirdDialect {
    fn default() -> Self {
        Self::new(SqlDialect::default())
    }
}

impl DdlDialect for FirebirdDialect {
    fn dialect(&self) -> SqlDialect {
        self.version
    }

    fn quote_identifier(&self, name: &str) -> DdlResult<String> {
        if name.is_empty() {
            return Err(DdlError::EmptyIdentifier);
        }
        if self.identifier_length(name) > self.max_identifier_length {
            return Err(DdlError::IdentifierTooLong {
                name: name.to_string(),
                max: self.max_identifier_length,
            });
        }
        Ok(format!("\"{}\"", name.replace('"', "\"\"")))
    }

    fn column_type(&self, kind: PrimitiveTypeKind, facets: &Facets) -> DdlResult<String> {
        let sql = match kind {
            // Firebird booleans are emulated; the finishing pass keys off the #BOOL# tag
            PrimitiveTypeKind::Boolean
            | PrimitiveTypeKind::Byte
            | PrimitiveTypeKind::SByte
            | PrimitiveTypeKind::Int16 => "SMALLINT".to_string(),
            PrimitiveTypeKind::Int32 => "INT".to_string(),
            PrimitiveTypeKind::Int64 => "BIGINT".to_string(),
            PrimitiveTypeKind::Single => "FLOAT".to_string(),
            PrimitiveTypeKind::Double => "DOUBLE PRECISION".to_string(),
            PrimitiveTypeKind::Decimal => self.decimal_type(facets)?,
            PrimitiveTypeKind::DateTime => "TIMESTAMP".to_string(),
            PrimitiveTypeKind::Time => "TIME".to_string(),
            PrimitiveTypeKind::DateTimeOffset => match self.version {
                SqlDialect::Firebird4 => "TIMESTAMP WITH TIME ZONE".to_string(),
                _ => return Err(DdlError::UnsupportedType { kind }),
            },
            PrimitiveTypeKind::Guid => "CHAR(16) CHARACTER SET OCTETS".to_string(),
            PrimitiveTypeKind::String => {
                let charset = facets.unicode.unwrap_or(false).then_some("UTF8");
                self.character_type(facets, charset, "BLOB SUB_TYPE TEXT")
            }
            PrimitiveTypeKind::Binary => {
                if matches!(facets.max_length, Some(MaxLength::Bounded(n)) if n <= MAX_VARCHAR_LENGTH) {
                    self.character_type(facets, Some("OCTETS"), "BLOB SUB_TYPE BINARY")
                } else {
                    "BLOB SUB_TYPE BINARY".to_string()
                }
            }
        };
        Ok(sql)
    }
}

/// Get dialect implementation for a given dialect type
pub fn get_dialect(dialect: SqlDialect) -> Box<dyn DdlDialect> {
    Box::new(FirebirdDialect::new(dialect))
}
