//! Supertype and override resolution.

use crate::error::CodegenError;
use ironql_schema::{SchemaModel, TypeDefinition};
use std::collections::BTreeSet;

/// Computes supertypes and inherited field names for objects and interfaces.
#[derive(Debug, Clone, Copy)]
pub struct HierarchyResolver<'a> {
    schema: &'a SchemaModel,
}

impl<'a> HierarchyResolver<'a> {
    /// Creates a new hierarchy resolver.
    #[must_use]
    pub const fn new(schema: &'a SchemaModel) -> Self {
        Self { schema }
    }

    /// Returns the direct supertypes of a definition, in declaration order.
    ///
    /// Objects and interfaces start from their implemented interfaces. Objects
    /// additionally inherit from every union that lists them as a member.
    /// Other definition kinds have no supertypes.
    ///
    /// # Errors
    /// Returns `CodegenError::InvalidImplements` if an implemented name is not
    /// an interface or object type.
    pub fn super_types_of(&self, def: &TypeDefinition) -> Result<Vec<String>, CodegenError> {
        let mut super_types: Vec<String> = Vec::new();

        for interface in def.interfaces() {
            match self.schema.get_type(interface) {
                Some(TypeDefinition::Interface(_) | TypeDefinition::Object(_)) => {}
                _ => {
                    return Err(CodegenError::InvalidImplements {
                        type_name: def.name().to_string(),
                        supertype: interface.clone(),
                    });
                }
            }
            if !super_types.contains(interface) {
                super_types.push(interface.clone());
            }
        }

        if def.is_object() {
            for union in self.schema.unions() {
                if union.contains(def.name()) && !super_types.contains(&union.name) {
                    super_types.push(union.name.clone());
                }
            }
        }

        Ok(super_types)
    }

    /// Returns the field names declared directly on the direct supertypes.
    ///
    /// Only one level is considered: fields a supertype itself inherits are
    /// not included unless it redeclares them.
    ///
    /// # Errors
    /// Same as [`HierarchyResolver::super_types_of`].
    pub fn inherited_field_names(
        &self,
        def: &TypeDefinition,
    ) -> Result<BTreeSet<String>, CodegenError> {
        let mut names = BTreeSet::new();
        for super_type in self.super_types_of(def)? {
            if let Some(super_def) = self.schema.get_type(&super_type) {
                names.extend(super_def.fields().iter().map(|field| field.name.clone()));
            }
        }
        Ok(names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ironql_schema::{EnumDef, FieldDefinition, InterfaceDef, ObjectDef, TypeRef, UnionDef};

    fn field(name: &str) -> FieldDefinition {
        FieldDefinition::new(name, TypeRef::named("String"))
    }

    fn schema() -> SchemaModel {
        SchemaModel::new()
            .with_type(InterfaceDef::new("Node").field(field("id")))
            .and_then(|s| {
                s.with_type(
                    InterfaceDef::new("Character")
                        .implements("Node")
                        .field(field("id"))
                        .field(field("name")),
                )
            })
            .and_then(|s| s.with_type(InterfaceDef::new("Named").field(field("name"))))
            .and_then(|s| {
                s.with_type(
                    ObjectDef::new("Human")
                        .implements("Character")
                        .implements("Named")
                        .field(field("id"))
                        .field(field("name"))
                        .field(field("homePlanet")),
                )
            })
            .and_then(|s| s.with_type(ObjectDef::new("Droid").field(field("id"))))
            .and_then(|s| s.with_type(UnionDef::new("SearchResult", ["Human", "Droid"])))
            .and_then(|s| s.with_type(UnionDef::new("Friend", ["Human"])))
            .and_then(|s| s.with_type(EnumDef::new("Episode")))
            .expect("Failed to build schema")
    }

    fn def<'s>(schema: &'s SchemaModel, name: &str) -> &'s TypeDefinition {
        schema.get_type(name).expect("Type not found")
    }

    #[test]
    fn test_object_super_types_include_unions() {
        let schema = schema();
        let resolver = HierarchyResolver::new(&schema);
        let supers = resolver
            .super_types_of(def(&schema, "Human"))
            .expect("Failed to resolve");
        assert_eq!(supers, ["Character", "Named", "SearchResult", "Friend"]);

        let supers = resolver
            .super_types_of(def(&schema, "Droid"))
            .expect("Failed to resolve");
        assert_eq!(supers, ["SearchResult"]);
    }

    #[test]
    fn test_interface_super_types_skip_unions() {
        let schema = schema();
        let resolver = HierarchyResolver::new(&schema);
        let supers = resolver
            .super_types_of(def(&schema, "Character"))
            .expect("Failed to resolve");
        assert_eq!(supers, ["Node"]);
    }

    #[test]
    fn test_non_composite_kinds_have_no_super_types() {
        let schema = schema();
        let resolver = HierarchyResolver::new(&schema);
        assert!(
            resolver
                .super_types_of(def(&schema, "Episode"))
                .expect("Failed to resolve")
                .is_empty()
        );
    }

    #[test]
    fn test_inherited_field_names_deduplicated() {
        let schema = schema();
        let resolver = HierarchyResolver::new(&schema);
        let names = resolver
            .inherited_field_names(def(&schema, "Human"))
            .expect("Failed to resolve");
        // `name` is declared on both Character and Named.
        assert_eq!(names.into_iter().collect::<Vec<_>>(), ["id", "name"]);
    }

    #[test]
    fn test_inherited_field_names_one_level_only() {
        let schema = SchemaModel::new()
            .with_type(InterfaceDef::new("Node").field(field("id")))
            .and_then(|s| s.with_type(InterfaceDef::new("Entity").implements("Node")))
            .and_then(|s| s.with_type(ObjectDef::new("Thing").implements("Entity").field(field("id"))))
            .expect("Failed to build schema");
        let resolver = HierarchyResolver::new(&schema);
        let names = resolver
            .inherited_field_names(def(&schema, "Thing"))
            .expect("Failed to resolve");
        assert!(names.is_empty());
    }

    #[test]
    fn test_implementing_enum_is_fatal() {
        let schema = SchemaModel::new()
            .with_type(EnumDef::new("Episode"))
            .and_then(|s| s.with_type(ObjectDef::new("Human").implements("Episode")))
            .expect("Failed to build schema");
        let resolver = HierarchyResolver::new(&schema);
        let result = resolver.super_types_of(def(&schema, "Human"));
        assert!(matches!(
            result,
            Err(CodegenError::InvalidImplements { ref type_name, ref supertype })
                if type_name == "Human" && supertype == "Episode"
        ));
    }

    #[test]
    fn test_implementing_undefined_is_fatal() {
        let schema = SchemaModel::new()
            .with_type(ObjectDef::new("Human").implements("Ghost"))
            .expect("Failed to build schema");
        let resolver = HierarchyResolver::new(&schema);
        assert!(resolver.inherited_field_names(def(&schema, "Human")).is_err());
    }
}
