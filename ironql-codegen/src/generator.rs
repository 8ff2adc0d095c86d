//! Per-definition declaration assembly.
//!
//! The [`Generator`] walks every top-level definition of a schema and builds
//! one [`EmissionRequest`] for each, skipping introspection types and
//! built-in scalars. Definitions are independent of each other: only the
//! *names* of other definitions are consulted, never their generated output.

use crate::annotations::AnnotationPolicy;
use crate::arguments::ArgumentBinder;
use crate::config::Configuration;
use crate::declaration::{
    Declaration, DeclarationKind, EmissionRequest, EnumConstantSpec, ParameterSpec, PropertySpec,
};
use crate::emitter::Emitter;
use crate::error::CodegenError;
use crate::hierarchy::HierarchyResolver;
use crate::mapper::TypeMapper;
use crate::members::{Member, MemberShapeDecider};
use crate::naming::declaration_name;
use ironql_schema::{
    BuiltinScalar, EnumDef, InputObjectDef, ScalarDef, SchemaModel, TypeDefinition, UnionDef,
    is_introspection_name,
};

/// Note attached to scalar placeholders.
pub const SCALAR_PLACEHOLDER_NOTE: &str =
    "Coercion for this scalar is not generated and must be supplied externally.";

/// Builds emission requests from a schema model.
#[derive(Debug, Clone, Copy)]
pub struct Generator<'a> {
    schema: &'a SchemaModel,
    config: &'a Configuration,
    hierarchy: HierarchyResolver<'a>,
    decider: MemberShapeDecider<'a>,
    binder: ArgumentBinder<'a>,
    policy: AnnotationPolicy,
}

impl<'a> Generator<'a> {
    /// Creates a new generator over a schema and configuration.
    #[must_use]
    pub fn new(schema: &'a SchemaModel, config: &'a Configuration) -> Self {
        let policy = AnnotationPolicy::new(config.annotation_policy());
        let mapper = TypeMapper::new(schema, config);
        let binder = ArgumentBinder::new(mapper, policy);
        Self {
            schema,
            config,
            hierarchy: HierarchyResolver::new(schema),
            decider: MemberShapeDecider::new(schema, config, mapper, binder),
            binder,
            policy,
        }
    }

    /// Generates every declaration and hands each to `emitter` as soon as it
    /// is assembled.
    ///
    /// Stops at the first error. Requests already emitted are not retracted.
    ///
    /// # Returns
    /// The number of requests emitted.
    ///
    /// # Errors
    /// Returns the first generation or emitter error.
    pub fn generate<E: Emitter>(&self, mut emitter: E) -> Result<usize, CodegenError> {
        tracing::info!(
            types = self.schema.len(),
            namespace = self.config.namespace(),
            "generating declarations"
        );

        let mut emitted = 0;
        for def in self.schema.types() {
            if let Some(request) = self.declaration_for(def)? {
                emitter.emit(request)?;
                emitted += 1;
            }
        }

        tracing::info!(emitted, "generated declarations");
        Ok(emitted)
    }

    /// Generates every declaration before returning any of them.
    ///
    /// # Errors
    /// Returns the first generation error; no requests are returned in that case.
    pub fn generate_all(&self) -> Result<Vec<EmissionRequest>, CodegenError> {
        let mut requests = Vec::with_capacity(self.schema.len());
        self.generate(&mut requests)?;
        Ok(requests)
    }

    /// Builds the request for one definition.
    ///
    /// Returns `None` for introspection types and built-in scalars.
    ///
    /// # Errors
    /// Returns a located `CodegenError` if the definition cannot be mapped.
    pub fn declaration_for(
        &self,
        def: &TypeDefinition,
    ) -> Result<Option<EmissionRequest>, CodegenError> {
        let name = def.name();
        if is_introspection_name(name) {
            tracing::trace!(type_name = name, "skipping introspection type");
            return Ok(None);
        }
        if def.is_scalar() && BuiltinScalar::from_name(name).is_some() {
            tracing::trace!(type_name = name, "skipping built-in scalar");
            return Ok(None);
        }

        let declaration = match def {
            TypeDefinition::Object(_) => self.composite(def, DeclarationKind::Class),
            TypeDefinition::Interface(_) => self.composite(def, DeclarationKind::SealedInterface),
            TypeDefinition::Union(union) => Ok(Self::union(union)),
            TypeDefinition::Enum(enum_def) => Ok(Self::enumeration(enum_def)),
            TypeDefinition::InputObject(input) => self.input_object(input),
            TypeDefinition::Scalar(scalar) => Ok(Self::scalar(scalar)),
        }
        .map_err(|e| e.at(name))?;

        tracing::debug!(
            type_name = name,
            kind = def.kind_label(),
            properties = declaration.properties.len(),
            operations = declaration.operations.len(),
            "assembled declaration"
        );

        Ok(Some(EmissionRequest::new(self.config.namespace(), declaration)))
    }

    /// Objects and interfaces share field classification; interfaces hold no
    /// state, so their properties are abstract and they get no constructor.
    fn composite(
        &self,
        def: &TypeDefinition,
        kind: DeclarationKind,
    ) -> Result<Declaration, CodegenError> {
        let name = def.name();
        let is_interface = kind == DeclarationKind::SealedInterface;

        let mut declaration = Declaration::new(kind, declaration_name(name));
        declaration.description = def.description().map(str::to_string);
        declaration.supertypes = self
            .hierarchy
            .super_types_of(def)?
            .iter()
            .map(|s| declaration_name(s))
            .collect();

        let inherited = self.hierarchy.inherited_field_names(def)?;
        for member in self.decider.decide_all(name, def.fields(), &inherited)? {
            match member {
                Member::Property(mut property) if is_interface => {
                    property.is_abstract = true;
                    declaration.properties.push(property);
                }
                Member::Property(property) => {
                    declaration
                        .constructor_parameters
                        .push(constructor_parameter(&property));
                    declaration.properties.push(property);
                }
                Member::Operation(operation) => declaration.operations.push(operation),
            }
        }

        if !is_interface {
            declaration.annotations = self
                .schema
                .root_kinds_of(name)
                .into_iter()
                .filter_map(|kind| self.policy.root_operation(kind))
                .collect();
        }

        Ok(declaration)
    }

    fn union(union: &UnionDef) -> Declaration {
        let mut declaration =
            Declaration::new(DeclarationKind::SealedInterface, declaration_name(&union.name));
        declaration.description = union.description.clone();
        declaration
    }

    fn enumeration(enum_def: &EnumDef) -> Declaration {
        let mut declaration =
            Declaration::new(DeclarationKind::EnumClass, declaration_name(&enum_def.name));
        declaration.description = enum_def.description.clone();
        declaration.enum_constants = enum_def
            .values
            .iter()
            .map(|value| EnumConstantSpec {
                name: value.name.clone(),
                description: value.description.clone(),
            })
            .collect();
        declaration
    }

    fn input_object(&self, input: &InputObjectDef) -> Result<Declaration, CodegenError> {
        let mut declaration =
            Declaration::new(DeclarationKind::DataClass, declaration_name(&input.name));
        declaration.description = input.description.clone();
        declaration.constructor_parameters = self.binder.bind_all(&input.name, &input.fields)?;
        declaration.properties = declaration
            .constructor_parameters
            .iter()
            .map(|param| PropertySpec {
                name: param.name.clone(),
                ty: param.ty.clone(),
                description: param.description.clone(),
                is_override: false,
                is_abstract: false,
                default_value: param.default_value.clone(),
                annotations: param.annotations.clone(),
            })
            .collect();
        Ok(declaration)
    }

    fn scalar(scalar: &ScalarDef) -> Declaration {
        let mut declaration = Declaration::new(
            DeclarationKind::ScalarPlaceholder,
            declaration_name(&scalar.name),
        );
        declaration.description = Some(match &scalar.description {
            Some(description) => format!("{description}\n\n{SCALAR_PLACEHOLDER_NOTE}"),
            None => SCALAR_PLACEHOLDER_NOTE.to_string(),
        });
        declaration
    }
}

fn constructor_parameter(property: &PropertySpec) -> ParameterSpec {
    ParameterSpec {
        name: property.name.clone(),
        ty: property.ty.clone(),
        description: property.description.clone(),
        default_value: None,
        annotations: Vec::new(),
    }
}
