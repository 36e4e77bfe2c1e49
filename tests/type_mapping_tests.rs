//! Firebird column type mapping

use rstest::rstest;
use storeddl::dialect::{DdlDialect, FirebirdDialect, SqlDialect};
use storeddl::error::DdlError;
use storeddl::schema::{Facets, MaxLength, PrimitiveTypeKind};

fn text(max_length: Option<MaxLength>, fixed: bool, unicode: bool) -> Facets {
    Facets {
        max_length,
        fixed_length: Some(fixed),
        unicode: Some(unicode),
        ..Facets::default()
    }
}

#[rstest]
#[case(PrimitiveTypeKind::Boolean, "SMALLINT")]
#[case(PrimitiveTypeKind::Byte, "SMALLINT")]
#[case(PrimitiveTypeKind::SByte, "SMALLINT")]
#[case(PrimitiveTypeKind::Int16, "SMALLINT")]
#[case(PrimitiveTypeKind::Int32, "INT")]
#[case(PrimitiveTypeKind::Int64, "BIGINT")]
#[case(PrimitiveTypeKind::Single, "FLOAT")]
#[case(PrimitiveTypeKind::Double, "DOUBLE PRECISION")]
#[case(PrimitiveTypeKind::DateTime, "TIMESTAMP")]
#[case(PrimitiveTypeKind::Time, "TIME")]
#[case(PrimitiveTypeKind::Guid, "CHAR(16) CHARACTER SET OCTETS")]
#[case(PrimitiveTypeKind::String, "BLOB SUB_TYPE TEXT")]
#[case(PrimitiveTypeKind::Binary, "BLOB SUB_TYPE BINARY")]
fn test_types_without_facets(#[case] kind: PrimitiveTypeKind, #[case] expected: &str) {
    let dialect = FirebirdDialect::default();
    assert_eq!(dialect.column_type(kind, &Facets::default()).unwrap(), expected);
}

#[rstest]
#[case(text(Some(MaxLength::Bounded(50)), false, false), "VARCHAR(50)")]
#[case(text(Some(MaxLength::Bounded(2)), true, false), "CHAR(2)")]
#[case(text(Some(MaxLength::Bounded(50)), false, true), "VARCHAR(50) CHARACTER SET UTF8")]
#[case(text(Some(MaxLength::Bounded(32765)), false, false), "VARCHAR(32765)")]
#[case(text(Some(MaxLength::Bounded(32766)), false, false), "BLOB SUB_TYPE TEXT")]
#[case(text(Some(MaxLength::Max), false, true), "BLOB SUB_TYPE TEXT CHARACTER SET UTF8")]
fn test_string_facets(#[case] facets: Facets, #[case] expected: &str) {
    let dialect = FirebirdDialect::default();
    assert_eq!(
        dialect.column_type(PrimitiveTypeKind::String, &facets).unwrap(),
        expected
    );
}

#[rstest]
#[case(text(Some(MaxLength::Bounded(16)), true, false), "CHAR(16) CHARACTER SET OCTETS")]
#[case(text(Some(MaxLength::Bounded(256)), false, false), "VARCHAR(256) CHARACTER SET OCTETS")]
#[case(text(Some(MaxLength::Max), false, false), "BLOB SUB_TYPE BINARY")]
fn test_binary_facets(#[case] facets: Facets, #[case] expected: &str) {
    let dialect = FirebirdDialect::default();
    assert_eq!(
        dialect.column_type(PrimitiveTypeKind::Binary, &facets).unwrap(),
        expected
    );
}

#[rstest]
#[case(SqlDialect::Firebird25, 18, true)]
#[case(SqlDialect::Firebird3, 19, false)]
#[case(SqlDialect::Firebird4, 38, true)]
#[case(SqlDialect::Firebird4, 39, false)]
fn test_decimal_precision_limits(
    #[case] version: SqlDialect,
    #[case] precision: u8,
    #[case] accepted: bool,
) {
    let facets = Facets {
        precision: Some(precision),
        scale: Some(0),
        ..Facets::default()
    };
    let result = FirebirdDialect::new(version).column_type(PrimitiveTypeKind::Decimal, &facets);

    assert_eq!(result.is_ok(), accepted, "{:?}", result);
}

#[test]
fn test_scale_above_precision_is_rejected() {
    let facets = Facets {
        precision: Some(4),
        scale: Some(6),
        ..Facets::default()
    };
    let err = FirebirdDialect::default()
        .column_type(PrimitiveTypeKind::Decimal, &facets)
        .unwrap_err();

    assert_eq!(
        err,
        DdlError::InvalidFacets {
            kind: PrimitiveTypeKind::Decimal,
            reason: "scale 6 exceeds precision 4".to_string(),
        }
    );
}
