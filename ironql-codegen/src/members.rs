//! Classification of output fields into properties and operations.
//!
//! Only identity is treated as cheap, always-available state. Every other
//! field models a resolution step and becomes an operation stub taking the
//! execution context first.

use crate::arguments::ArgumentBinder;
use crate::config::Configuration;
use crate::declaration::{OperationSpec, ParameterSpec, PropertySpec};
use crate::descriptor::{TargetTypeDescriptor, TypeReference};
use crate::error::CodegenError;
use crate::mapper::TypeMapper;
use crate::naming::CONTEXT_PARAMETER;
use ironql_schema::{FieldDefinition, SchemaModel};
use std::collections::BTreeSet;

/// Name of the only field that may become stored state.
pub const IDENTITY_FIELD: &str = "id";

/// A classified member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Member {
    /// Stored property.
    Property(PropertySpec),
    /// Operation stub.
    Operation(OperationSpec),
}

/// Decides the shape of each field on an object or interface.
#[derive(Debug, Clone, Copy)]
pub struct MemberShapeDecider<'a> {
    schema: &'a SchemaModel,
    config: &'a Configuration,
    mapper: TypeMapper<'a>,
    binder: ArgumentBinder<'a>,
}

impl<'a> MemberShapeDecider<'a> {
    /// Creates a new member shape decider.
    #[must_use]
    pub const fn new(
        schema: &'a SchemaModel,
        config: &'a Configuration,
        mapper: TypeMapper<'a>,
        binder: ArgumentBinder<'a>,
    ) -> Self {
        Self {
            schema,
            config,
            mapper,
            binder,
        }
    }

    /// Returns true if the field on `owner` becomes a stored property.
    #[must_use]
    pub fn is_stored_property(&self, owner: &str, field: &FieldDefinition) -> bool {
        !self.schema.is_subscription_root(owner)
            && !field.has_arguments()
            && field.name == IDENTITY_FIELD
            && self.mapper.is_scalar_leaf(&field.ty)
    }

    /// Classifies one field of `owner`.
    ///
    /// Fields whose name is in `inherited` are marked as overrides.
    ///
    /// # Errors
    /// Propagates type resolution errors, located at `Owner.field`.
    pub fn decide(
        &self,
        owner: &str,
        field: &FieldDefinition,
        inherited: &BTreeSet<String>,
    ) -> Result<Member, CodegenError> {
        let location = format!("{owner}.{}", field.name);
        let is_override = inherited.contains(&field.name);

        if self.is_stored_property(owner, field) {
            let ty = self
                .mapper
                .resolve_output_type(&field.ty, false)
                .map_err(|e| e.at(&location))?;
            return Ok(Member::Property(PropertySpec {
                name: field.name.clone(),
                ty,
                description: field.description.clone(),
                is_override,
                is_abstract: false,
                default_value: None,
                annotations: Vec::new(),
            }));
        }

        let streaming = self.schema.is_subscription_root(owner);
        let return_type = self
            .mapper
            .resolve_output_type(&field.ty, streaming)
            .map_err(|e| e.at(&location))?;

        let mut parameters = Vec::with_capacity(field.arguments.len() + 1);
        parameters.push(self.context_parameter());
        parameters.extend(self.binder.bind_all(&location, &field.arguments)?);

        Ok(Member::Operation(OperationSpec {
            name: field.name.clone(),
            parameters,
            return_type,
            description: field.description.clone(),
            is_override,
        }))
    }

    /// Classifies all fields of `owner` in declaration order.
    ///
    /// # Errors
    /// Returns the first error encountered.
    pub fn decide_all(
        &self,
        owner: &str,
        fields: &[FieldDefinition],
        inherited: &BTreeSet<String>,
    ) -> Result<Vec<Member>, CodegenError> {
        fields
            .iter()
            .map(|field| self.decide(owner, field, inherited))
            .collect()
    }

    fn context_parameter(&self) -> ParameterSpec {
        ParameterSpec {
            name: CONTEXT_PARAMETER.to_string(),
            ty: TargetTypeDescriptor::named(
                TypeReference::External(self.config.context_type().clone()),
                false,
            ),
            description: None,
            default_value: None,
            annotations: Vec::new(),
        }
    }
}
