//! # IronQL Schema
//!
//! In-memory GraphQL schema model.
//!
//! This crate provides:
//! - Type references with list and non-null wrappers
//! - Definitions for objects, interfaces, unions, enums, input objects and scalars
//! - An ordered schema model with name lookup and root operation types
//!
//! Parsing schema text is left to external parsers, which populate a
//! [`SchemaModel`] through [`SchemaModel::add_type`].

pub mod error;
pub mod schema;
pub mod types;

pub use error::SchemaError;
pub use schema::{INTROSPECTION_PREFIX, SchemaModel, is_introspection_name};
pub use types::{
    BuiltinScalar, EnumDef, EnumValueDefinition, FieldDefinition, InputObjectDef,
    InputValueDefinition, InterfaceDef, ObjectDef, OperationKind, ScalarDef, TypeDefinition,
    TypeRef, UnionDef,
};
