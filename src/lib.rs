pub mod ddl;
pub mod dialect;
pub mod error;
pub mod schema;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use ddl::{DdlConfig, DdlGenerator, LineEnding};
pub use dialect::{DdlDialect, FirebirdDialect, SqlDialect};
pub use error::{DdlError, DdlResult};
pub use schema::SchemaModel;

/// Generate the annotated DDL script for `model` with the default configuration
pub fn transform(model: Option<&SchemaModel>) -> DdlResult<String> {
    DdlGenerator::default().transform(model)
}
