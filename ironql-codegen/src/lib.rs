//! # IronQL Codegen
//!
//! Declaration generation from GraphQL schema models.
//!
//! This crate provides:
//! - Mapping of schema type references to target type descriptors
//! - Supertype and override resolution for objects and interfaces
//! - Property/operation classification of fields and binding of arguments
//! - One [`EmissionRequest`] per top-level definition, handed to an [`Emitter`]
//! - A Kotlin renderer and file emitter

pub mod annotations;
pub mod arguments;
pub mod config;
pub mod declaration;
pub mod descriptor;
pub mod emitter;
pub mod error;
pub mod generator;
pub mod hierarchy;
pub mod kotlin;
pub mod mapper;
pub mod members;
pub mod naming;

pub use annotations::AnnotationPolicy;
pub use arguments::ArgumentBinder;
pub use config::{Configuration, ConfigurationBuilder};
pub use declaration::{
    Annotation, Declaration, DeclarationKind, EmissionRequest, EnumConstantSpec, OperationSpec,
    ParameterSpec, PropertySpec,
};
pub use descriptor::{TargetTypeDescriptor, TargetTypeRef, TypeReference, TypeShape};
pub use emitter::Emitter;
pub use error::CodegenError;
pub use generator::Generator;
pub use hierarchy::HierarchyResolver;
pub use kotlin::{KotlinFileEmitter, KotlinRenderer};
pub use mapper::TypeMapper;
pub use members::{Member, MemberShapeDecider};
pub use naming::declaration_name;

use ironql_schema::SchemaModel;

/// Generates every declaration of a schema into an emitter.
///
/// Each request is emitted as soon as it is assembled; on error, requests
/// emitted before the failing definition stay emitted.
///
/// # Arguments
/// * `schema` - Schema model to generate from
/// * `config` - Generator configuration
/// * `emitter` - Destination for emission requests
///
/// # Returns
/// The number of requests emitted.
///
/// # Errors
/// Returns `CodegenError` for the first definition that cannot be mapped or
/// the first request the emitter rejects.
pub fn generate<E: Emitter>(
    schema: &SchemaModel,
    config: &Configuration,
    emitter: E,
) -> Result<usize, CodegenError> {
    Generator::new(schema, config).generate(emitter)
}

/// Generates every declaration of a schema, all or nothing.
///
/// # Errors
/// Returns `CodegenError` for the first definition that cannot be mapped.
pub fn generate_all(
    schema: &SchemaModel,
    config: &Configuration,
) -> Result<Vec<EmissionRequest>, CodegenError> {
    Generator::new(schema, config).generate_all()
}

/// Generates Kotlin source files below a directory.
///
/// All declarations are assembled before the first file is written, so a
/// schema error leaves the directory untouched.
///
/// # Returns
/// Paths of the written files.
///
/// # Errors
/// Returns `CodegenError` if generation or writing fails.
pub fn generate_to_dir(
    schema: &SchemaModel,
    config: &Configuration,
    root: &std::path::Path,
) -> Result<Vec<std::path::PathBuf>, CodegenError> {
    let requests = generate_all(schema, config)?;
    let mut emitter = KotlinFileEmitter::new(root);
    for request in requests {
        emitter.emit(request)?;
    }
    Ok(emitter.written().to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::TypeShape;
    use ironql_schema::{
        FieldDefinition, InputObjectDef, InputValueDefinition, InterfaceDef, ObjectDef, ScalarDef,
        TypeRef,
    };

    fn hero_schema() -> SchemaModel {
        SchemaModel::new()
            .with_type(InterfaceDef::new("Character"))
            .and_then(|s| {
                s.with_type(
                    ObjectDef::new("Query").field(
                        FieldDefinition::new("hero", TypeRef::named("Character")).argument(
                            InputValueDefinition::new(
                                "id",
                                TypeRef::non_null(TypeRef::named("ID")),
                            ),
                        ),
                    ),
                )
            })
            .expect("Failed to build schema")
    }

    #[test]
    fn test_hero_scenario() {
        let schema = hero_schema();
        let config = Configuration::default();
        let requests = generate_all(&schema, &config).expect("Failed to generate");
        let query = requests
            .iter()
            .find(|r| r.name == "Query")
            .expect("Missing Query");
        let hero = query.declaration.operation("hero").expect("Missing hero");

        assert_eq!(hero.parameters.len(), 2);
        assert_eq!(hero.parameters[0].name, naming::CONTEXT_PARAMETER);
        assert_eq!(hero.parameters[1].name, "id");
        assert_eq!(hero.parameters[1].ty.to_string(), "String");
        assert!(!hero.parameters[1].ty.nullable);
        assert!(hero.return_type.nullable);
        assert_eq!(
            hero.return_type.shape,
            TypeShape::Named(TypeReference::Generated("Character".to_string()))
        );
    }

    #[test]
    fn test_filter_scenario() {
        let schema = SchemaModel::new()
            .with_type(
                InputObjectDef::new("Filter")
                    .field(InputValueDefinition::new("limit", TypeRef::named("Int")).with_default("10")),
            )
            .expect("Failed to build schema");
        let config = Configuration::default();
        let requests = generate_all(&schema, &config).expect("Failed to generate");

        assert_eq!(requests.len(), 1);
        let filter = &requests[0].declaration;
        assert_eq!(filter.properties.len(), 1);
        let limit = filter.property("limit").expect("Missing limit");
        assert!(!limit.ty.is_optional());
        assert_eq!(
            limit.ty.leaf(),
            &TypeReference::External(TargetTypeRef::new("kotlin.Int"))
        );
        assert_eq!(limit.default_value.as_deref(), Some("10"));
    }

    #[test]
    fn test_introspection_only_schema_yields_nothing() {
        let schema = SchemaModel::new()
            .with_type(ObjectDef::new("__Schema"))
            .and_then(|s| s.with_type(ScalarDef::new("__Internal")))
            .expect("Failed to build schema");
        let config = Configuration::default();
        let mut collected: Vec<EmissionRequest> = Vec::new();
        let emitted = generate(&schema, &config, &mut collected).expect("Failed to generate");
        assert_eq!(emitted, 0);
        assert!(collected.is_empty());
    }

    #[test]
    fn test_generate_to_dir() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let schema = hero_schema();
        let config = Configuration::builder().namespace("com.example.heroes").build();
        let written = generate_to_dir(&schema, &config, dir.path()).expect("Failed to generate");

        assert_eq!(written.len(), 2);
        let query = std::fs::read_to_string(dir.path().join("com/example/heroes/Query.kt"))
            .expect("Failed to read");
        assert!(query.contains(
            "fun hero(context: DataFetchingEnvironment, id: String): Character? = TODO()"
        ));
    }

    #[test]
    fn test_generate_to_dir_writes_nothing_on_error() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let schema = SchemaModel::new()
            .with_type(ObjectDef::new("Fine"))
            .and_then(|s| {
                s.with_type(
                    ObjectDef::new("Broken")
                        .field(FieldDefinition::new("at", TypeRef::named("Timestamp"))),
                )
            })
            .and_then(|s| s.with_type(ScalarDef::new("Timestamp")))
            .expect("Failed to build schema");
        let config = Configuration::default();

        assert!(generate_to_dir(&schema, &config, dir.path()).is_err());
        let entries = std::fs::read_dir(dir.path()).expect("Failed to list").count();
        assert_eq!(entries, 0);
    }
}
