use tracing::{debug, info};

use super::DdlGenerator;
use crate::error::DdlResult;
use crate::schema::SchemaModel;

/// Output for an absent model
pub const NO_INPUT: &str = "-- No input.";

const TABLES_HEADER: &str = "-- Tables";
const FOREIGN_KEYS_HEADER: &str = "-- Foreign Key Constraints";
const EOF_MARKER: &str = "-- EOF";

impl DdlGenerator {
    /// Generate the complete annotated script for a store model
    ///
    /// An absent model yields [`NO_INPUT`]. Any failure aborts the whole
    /// script.
    pub fn transform(&self, model: Option<&SchemaModel>) -> DdlResult<String> {
        let Some(model) = model else {
            debug!("no store model supplied");
            return Ok(NO_INPUT.to_string());
        };

        let nl = self.newline();

        let tables = model
            .entity_sets
            .iter()
            .map(|set| self.generate_table(set))
            .collect::<DdlResult<Vec<_>>>()?;

        let foreign_keys = model
            .relationship_sets
            .iter()
            .map(|relationship| self.generate_foreign_key(model, relationship))
            .collect::<DdlResult<Vec<_>>>()?;

        info!(
            tables = tables.len(),
            foreign_keys = foreign_keys.len(),
            "generated DDL script"
        );

        let tables = tables.join(nl);
        let foreign_keys = foreign_keys.join(nl);
        let sections: [&str; 10] = [
            TABLES_HEADER,
            nl,
            &tables,
            nl,
            FOREIGN_KEYS_HEADER,
            nl,
            &foreign_keys,
            nl,
            nl,
            EOF_MARKER,
        ];
        Ok(sections.concat())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ddl::DdlConfig;

    #[test]
    fn test_absent_model() {
        let generator = DdlGenerator::new(DdlConfig::default());
        assert_eq!(generator.transform(None).unwrap(), "-- No input.");
    }

    #[test]
    fn test_empty_model_keeps_section_headers() {
        let generator = DdlGenerator::new(DdlConfig::default());
        let script = generator.transform(Some(&SchemaModel::new())).unwrap();

        assert_eq!(
            script,
            "-- Tables\n\n-- Foreign Key Constraints\n\n\n-- EOF"
        );
    }
}
