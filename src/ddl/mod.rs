//! Store model to annotated Firebird DDL
//!
//! The generator walks a [`SchemaModel`](crate::schema::SchemaModel) and
//! produces an intermediate script: `RECREATE TABLE` blocks with primary keys,
//! `ALTER TABLE ... ADD CONSTRAINT ... FOREIGN KEY` statements, and
//! `COMMENT ON COLUMN` placeholders (`#BOOL#`, `#GUID#`, `#PK_GEN#`) that a
//! finishing pass later rewrites into generators, triggers and domains.
//!
//! # Example
//!
//! ```rust
//! use storeddl::ddl::{DdlConfig, DdlGenerator};
//! use storeddl::schema::{EntitySet, PrimitiveTypeKind, Property, SchemaModel};
//!
//! let model = SchemaModel::new().with_entity_set(
//!     EntitySet::new("Customer")
//!         .with_key(Property::new("Id", PrimitiveTypeKind::Int32).not_null().identity())
//!         .with_property(Property::new("IsActive", PrimitiveTypeKind::Boolean)),
//! );
//!
//! let generator = DdlGenerator::new(DdlConfig::default());
//! let script = generator.transform(Some(&model)).unwrap();
//! assert!(script.contains("COMMENT ON COLUMN \"Customer\".\"Id\" IS '#PK_GEN#';"));
//! ```

mod annotations;
mod column;
mod foreign_key;
mod script;
mod table;

pub use annotations::{ColumnAnnotations, ColumnTag};
pub use column::ColumnDefinition;

use crate::dialect::{get_dialect, DdlDialect, SqlDialect};

/// Line terminator used between statements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineEnding {
    #[default]
    Lf,
    CrLf,
}

impl LineEnding {
    pub fn as_str(&self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }
}

/// Configuration for DDL generation
#[derive(Debug, Clone)]
pub struct DdlConfig {
    /// Target server version
    pub dialect: SqlDialect,
    /// Line terminator
    pub line_ending: LineEnding,
    /// Prefix for column lines inside `RECREATE TABLE`
    pub indent: String,
}

impl Default for DdlConfig {
    fn default() -> Self {
        Self {
            dialect: SqlDialect::default(),
            line_ending: LineEnding::default(),
            indent: "\t".to_string(),
        }
    }
}

impl DdlConfig {
    pub fn with_dialect(mut self, dialect: SqlDialect) -> Self {
        self.dialect = dialect;
        self
    }

    pub fn with_line_ending(mut self, line_ending: LineEnding) -> Self {
        self.line_ending = line_ending;
        self
    }

    pub fn with_indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = indent.into();
        self
    }
}

/// Generator for annotated DDL scripts
pub struct DdlGenerator {
    dialect: Box<dyn DdlDialect>,
    config: DdlConfig,
}

impl DdlGenerator {
    /// Create a generator using the built-in dialect named by the config
    pub fn new(config: DdlConfig) -> Self {
        Self {
            dialect: get_dialect(config.dialect),
            config,
        }
    }

    /// Create a generator backed by a caller-supplied dialect
    pub fn with_dialect(dialect: Box<dyn DdlDialect>, config: DdlConfig) -> Self {
        Self { dialect, config }
    }

    pub fn config(&self) -> &DdlConfig {
        &self.config
    }

    pub fn dialect(&self) -> &dyn DdlDialect {
        self.dialect.as_ref()
    }

    fn newline(&self) -> &'static str {
        self.config.line_ending.as_str()
    }

    /// Quote each name and join with `", "`
    fn quote_list<S: AsRef<str>>(&self, names: &[S]) -> crate::error::DdlResult<String> {
        let quoted = names
            .iter()
            .map(|name| self.dialect.quote_identifier(name.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(quoted.join(", "))
    }
}

impl Default for DdlGenerator {
    fn default() -> Self {
        Self::new(DdlConfig::default())
    }
}
