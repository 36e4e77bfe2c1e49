use storeddl::schema::{
    AssociationEnd, EntitySet, MaxLength, PrimitiveTypeKind, Property, ReferentialConstraint,
    RelationshipSet, SchemaModel,
};
use storeddl::{DdlConfig, DdlGenerator};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let model = SchemaModel::new()
        .with_entity_set(
            EntitySet::new("Customer")
                .with_table("CUSTOMER")
                .with_key(Property::new("ID", PrimitiveTypeKind::Int32).not_null().identity())
                .with_property(
                    Property::new("NAME", PrimitiveTypeKind::String)
                        .with_max_length(MaxLength::Bounded(100))
                        .with_unicode(true)
                        .not_null(),
                )
                .with_property(Property::new("IS_ACTIVE", PrimitiveTypeKind::Boolean))
                .with_property(Property::new("EXTERNAL_ID", PrimitiveTypeKind::Guid)),
        )
        .with_entity_set(
            EntitySet::new("Order")
                .with_table("ORDER")
                .with_key(Property::new("ID", PrimitiveTypeKind::Int32).not_null().identity())
                .with_property(Property::new("CUSTOMER_ID", PrimitiveTypeKind::Int32).not_null())
                .with_property(Property::new("TOTAL", PrimitiveTypeKind::Decimal).with_precision(12, 2)),
        )
        .with_relationship_set(
            RelationshipSet::new("CustomerOrder")
                .with_end(AssociationEnd::new("Customer", "Customer").cascade())
                .with_end(AssociationEnd::new("Order", "Order"))
                .with_constraint(
                    ReferentialConstraint::new("Customer", "Order").with_pair("ID", "CUSTOMER_ID"),
                ),
        );

    println!("=== Store Model DDL Demo ===\n");

    let generator = DdlGenerator::new(DdlConfig::default());
    match generator.transform(Some(&model)) {
        Ok(script) => println!("{}", script),
        Err(e) => {
            eprintln!("DDL generation error: {}", e);
            std::process::exit(1);
        }
    }
}
