//! The in-memory schema model.
//!
//! A [`SchemaModel`] is assembled once by a parser or by hand and is then read
//! by the code generator without further mutation.

use crate::error::SchemaError;
use crate::types::{BuiltinScalar, OperationKind, TypeDefinition, UnionDef};
use std::collections::HashMap;

/// Prefix reserved for introspection types.
pub const INTROSPECTION_PREFIX: &str = "__";

/// Returns true if the name is reserved for introspection.
#[must_use]
pub fn is_introspection_name(name: &str) -> bool {
    name.starts_with(INTROSPECTION_PREFIX)
}

/// Complete schema definition.
#[derive(Debug, Clone, Default)]
pub struct SchemaModel {
    /// Schema description.
    pub description: Option<String>,
    /// Type definitions in declaration order.
    types: Vec<TypeDefinition>,
    /// Type lookup map.
    type_map: HashMap<String, usize>,
    /// Explicitly declared root types.
    roots: HashMap<OperationKind, String>,
}

impl SchemaModel {
    /// Creates a new empty schema.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a type definition to the schema.
    ///
    /// # Errors
    /// Returns `SchemaError::DuplicateDefinition` if a type with the same name
    /// was already added.
    pub fn add_type(&mut self, type_def: TypeDefinition) -> Result<(), SchemaError> {
        let name = type_def.name().to_string();
        if self.type_map.contains_key(&name) {
            return Err(SchemaError::DuplicateDefinition { name });
        }
        let index = self.types.len();
        self.types.push(type_def);
        self.type_map.insert(name, index);
        Ok(())
    }

    /// Adds a type definition, consuming and returning the schema.
    ///
    /// # Errors
    /// Returns `SchemaError::DuplicateDefinition` on a name clash.
    pub fn with_type(mut self, type_def: impl Into<TypeDefinition>) -> Result<Self, SchemaError> {
        self.add_type(type_def.into())?;
        Ok(self)
    }

    /// Declares the root type for an operation kind.
    ///
    /// # Errors
    /// Returns `SchemaError::TypeNotFound` if the type is not defined and
    /// `SchemaError::RootNotObject` if it is not an object type.
    pub fn set_root(
        &mut self,
        kind: OperationKind,
        name: impl Into<String>,
    ) -> Result<(), SchemaError> {
        let name = name.into();
        match self.get_type(&name) {
            None => return Err(SchemaError::TypeNotFound { name }),
            Some(def) if !def.is_object() => {
                return Err(SchemaError::RootNotObject { kind, name });
            }
            Some(_) => {}
        }
        self.roots.insert(kind, name);
        Ok(())
    }

    /// Looks up a type by name.
    #[must_use]
    pub fn get_type(&self, name: &str) -> Option<&TypeDefinition> {
        self.type_map.get(name).map(|&idx| &self.types[idx])
    }

    /// Returns true if a type with the given name exists.
    #[must_use]
    pub fn has_type(&self, name: &str) -> bool {
        self.type_map.contains_key(name)
    }

    /// Iterates over all type definitions in declaration order.
    pub fn types(&self) -> impl Iterator<Item = &TypeDefinition> {
        self.types.iter()
    }

    /// Iterates over all union definitions in declaration order.
    pub fn unions(&self) -> impl Iterator<Item = &UnionDef> {
        self.types.iter().filter_map(|def| match def {
            TypeDefinition::Union(union) => Some(union),
            _ => None,
        })
    }

    /// Returns the number of type definitions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Returns true if the schema defines no types.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Returns the root type name for an operation kind.
    ///
    /// Falls back to the conventional name (`Query`, `Mutation`,
    /// `Subscription`) only when the schema declares no roots at all and an
    /// object with that name exists. Once any root is declared, undeclared
    /// operation kinds have no root.
    #[must_use]
    pub fn root_type_name(&self, kind: OperationKind) -> Option<&str> {
        if !self.roots.is_empty() {
            return self.roots.get(&kind).map(String::as_str);
        }
        let conventional = kind.default_root_name();
        match self.get_type(conventional) {
            Some(def) if def.is_object() => Some(def.name()),
            _ => None,
        }
    }

    /// Returns the operation kinds for which `name` is the root type.
    #[must_use]
    pub fn root_kinds_of(&self, name: &str) -> Vec<OperationKind> {
        OperationKind::ALL
            .into_iter()
            .filter(|&kind| self.root_type_name(kind) == Some(name))
            .collect()
    }

    /// Returns true if `name` is the subscription root type.
    #[must_use]
    pub fn is_subscription_root(&self, name: &str) -> bool {
        self.root_type_name(OperationKind::Subscription) == Some(name)
    }

    /// Returns true if `name` denotes a scalar, built-in or custom.
    #[must_use]
    pub fn is_scalar(&self, name: &str) -> bool {
        match self.get_type(name) {
            Some(def) => def.is_scalar(),
            None => BuiltinScalar::from_name(name).is_some(),
        }
    }
}

macro_rules! impl_into_type_definition {
    ($($def:ident => $variant:ident),* $(,)?) => {
        $(
            impl From<crate::types::$def> for TypeDefinition {
                fn from(def: crate::types::$def) -> Self {
                    Self::$variant(def)
                }
            }
        )*
    };
}

impl_into_type_definition! {
    ObjectDef => Object,
    InterfaceDef => Interface,
    UnionDef => Union,
    EnumDef => Enum,
    InputObjectDef => InputObject,
    ScalarDef => Scalar,
}
