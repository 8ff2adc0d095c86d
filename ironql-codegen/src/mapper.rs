//! Schema type reference to target type descriptor mapping.

use crate::config::Configuration;
use crate::descriptor::{TargetTypeDescriptor, TypeReference};
use crate::error::CodegenError;
use crate::naming::declaration_name;
use ironql_schema::{SchemaModel, TypeRef};

/// Resolves schema type references into target type descriptors.
#[derive(Debug, Clone, Copy)]
pub struct TypeMapper<'a> {
    schema: &'a SchemaModel,
    config: &'a Configuration,
}

impl<'a> TypeMapper<'a> {
    /// Creates a new type mapper.
    #[must_use]
    pub const fn new(schema: &'a SchemaModel, config: &'a Configuration) -> Self {
        Self { schema, config }
    }

    /// Resolves the type of an output field.
    ///
    /// Every level not directly under a non-null marker is nullable. When
    /// `streaming` is set the result is wrapped in the configured stream
    /// container.
    ///
    /// # Errors
    /// Returns `CodegenError::UnknownScalar` for a scalar without a mapping and
    /// `CodegenError::UnknownType` for an undefined name.
    pub fn resolve_output_type(
        &self,
        ty: &TypeRef,
        streaming: bool,
    ) -> Result<TargetTypeDescriptor, CodegenError> {
        let resolved = self.resolve(ty, true)?;
        if streaming {
            Ok(TargetTypeDescriptor::stream(
                self.config.stream_type().clone(),
                resolved,
            ))
        } else {
            Ok(resolved)
        }
    }

    /// Resolves the type of an argument or input field.
    ///
    /// Values that are non-null at the top level or backed by a default are
    /// always present at call time and resolve to the plain type. Anything
    /// else may be omitted entirely and is wrapped in the configured presence
    /// wrapper.
    ///
    /// # Errors
    /// Same as [`TypeMapper::resolve_output_type`].
    pub fn resolve_input_type(
        &self,
        ty: &TypeRef,
        has_default: bool,
    ) -> Result<TargetTypeDescriptor, CodegenError> {
        let resolved = self.resolve(ty, true)?;
        if ty.is_non_null() || has_default {
            Ok(resolved)
        } else {
            Ok(TargetTypeDescriptor::optional(
                self.config.optional_wrapper_type().clone(),
                resolved,
            ))
        }
    }

    /// Returns true if the leaf of the reference is a scalar.
    #[must_use]
    pub fn is_scalar_leaf(&self, ty: &TypeRef) -> bool {
        self.schema.is_scalar(ty.leaf_name())
    }

    /// Resolves one nesting level. `nullable` is false only directly under `NonNull`.
    fn resolve(&self, ty: &TypeRef, nullable: bool) -> Result<TargetTypeDescriptor, CodegenError> {
        match ty {
            TypeRef::NonNull(inner) => self.resolve(inner, false),
            TypeRef::List(inner) => Ok(TargetTypeDescriptor::list(
                self.resolve(inner, true)?,
                nullable,
            )),
            TypeRef::Named(name) => Ok(TargetTypeDescriptor::named(
                self.resolve_leaf(name)?,
                nullable,
            )),
        }
    }

    fn resolve_leaf(&self, name: &str) -> Result<TypeReference, CodegenError> {
        if self.schema.is_scalar(name) {
            return self
                .config
                .scalar_target(name)
                .cloned()
                .map(TypeReference::External)
                .ok_or_else(|| CodegenError::UnknownScalar {
                    scalar: name.to_string(),
                });
        }
        if self.schema.has_type(name) {
            Ok(TypeReference::Generated(declaration_name(name)))
        } else {
            Err(CodegenError::UnknownType {
                type_name: name.to_string(),
            })
        }
    }
}
