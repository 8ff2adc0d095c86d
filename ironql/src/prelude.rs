//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and traits.
//!
//! ```ignore
//! use ironql::prelude::*;
//! ```

// Schema model
pub use ironql_schema::{
    BuiltinScalar, EnumDef, EnumValueDefinition, FieldDefinition, InputObjectDef,
    InputValueDefinition, InterfaceDef, ObjectDef, OperationKind, ScalarDef, SchemaError,
    SchemaModel, TypeDefinition, TypeRef, UnionDef,
};

// Generation
pub use ironql_codegen::{
    CodegenError, Configuration, ConfigurationBuilder, EmissionRequest, Emitter, Generator,
    KotlinFileEmitter, KotlinRenderer, TargetTypeDescriptor, TargetTypeRef,
};
