//! Schema type definitions.
//!
//! This module contains the data structures representing GraphQL schema
//! elements: type references, the six kinds of named type definitions, fields,
//! arguments and enum values.

use std::fmt;

/// A reference to a named type, possibly wrapped in list and non-null markers.
///
/// Unwrapping always ends in exactly one [`TypeRef::Named`] leaf.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeRef {
    /// Reference to a named type.
    Named(String),
    /// List of the inner type.
    List(Box<TypeRef>),
    /// Non-null marker over the inner type.
    NonNull(Box<TypeRef>),
}

impl TypeRef {
    /// Creates a named type reference.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    /// Wraps a type reference in a list.
    #[must_use]
    pub fn list(inner: TypeRef) -> Self {
        Self::List(Box::new(inner))
    }

    /// Wraps a type reference in a non-null marker.
    ///
    /// Wrapping an already non-null reference returns it unchanged.
    #[must_use]
    pub fn non_null(inner: TypeRef) -> Self {
        match inner {
            Self::NonNull(_) => inner,
            other => Self::NonNull(Box::new(other)),
        }
    }

    /// Returns the name of the leaf named type.
    #[must_use]
    pub fn leaf_name(&self) -> &str {
        match self {
            Self::Named(name) => name,
            Self::List(inner) | Self::NonNull(inner) => inner.leaf_name(),
        }
    }

    /// Returns true if the outermost wrapper is non-null.
    #[must_use]
    pub const fn is_non_null(&self) -> bool {
        matches!(self, Self::NonNull(_))
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(name) => f.write_str(name),
            Self::List(inner) => write!(f, "[{inner}]"),
            Self::NonNull(inner) => write!(f, "{inner}!"),
        }
    }
}

/// The five scalars every schema provides without declaring them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuiltinScalar {
    /// UTF-8 character sequence.
    String,
    /// Signed 32-bit integer.
    Int,
    /// Double-precision floating point value.
    Float,
    /// `true` or `false`.
    Boolean,
    /// Opaque unique identifier, serialized as a string.
    Id,
}

impl BuiltinScalar {
    /// All built-in scalars in canonical order.
    pub const ALL: [Self; 5] = [
        Self::String,
        Self::Int,
        Self::Float,
        Self::Boolean,
        Self::Id,
    ];

    /// Returns the schema name of the scalar.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::String => "String",
            Self::Int => "Int",
            Self::Float => "Float",
            Self::Boolean => "Boolean",
            Self::Id => "ID",
        }
    }

    /// Looks up a built-in scalar by its schema name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|scalar| scalar.name() == name)
    }
}

/// The three kinds of root operation types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum OperationKind {
    /// Read-only entry point.
    Query,
    /// Write entry point.
    Mutation,
    /// Event-stream entry point.
    Subscription,
}

impl OperationKind {
    /// All operation kinds in canonical order.
    pub const ALL: [Self; 3] = [Self::Query, Self::Mutation, Self::Subscription];

    /// Returns the conventional root type name for this kind.
    #[must_use]
    pub const fn default_root_name(self) -> &'static str {
        match self {
            Self::Query => "Query",
            Self::Mutation => "Mutation",
            Self::Subscription => "Subscription",
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.default_root_name())
    }
}

/// Type definition variants.
#[derive(Debug, Clone)]
pub enum TypeDefinition {
    /// Object type definition.
    Object(ObjectDef),
    /// Interface type definition.
    Interface(InterfaceDef),
    /// Union type definition.
    Union(UnionDef),
    /// Enum type definition.
    Enum(EnumDef),
    /// Input object type definition.
    InputObject(InputObjectDef),
    /// Custom scalar type definition.
    Scalar(ScalarDef),
}

impl TypeDefinition {
    /// Returns the name of the type.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Object(o) => &o.name,
            Self::Interface(i) => &i.name,
            Self::Union(u) => &u.name,
            Self::Enum(e) => &e.name,
            Self::InputObject(i) => &i.name,
            Self::Scalar(s) => &s.name,
        }
    }

    /// Returns the description of the type, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        match self {
            Self::Object(o) => o.description.as_deref(),
            Self::Interface(i) => i.description.as_deref(),
            Self::Union(u) => u.description.as_deref(),
            Self::Enum(e) => e.description.as_deref(),
            Self::InputObject(i) => i.description.as_deref(),
            Self::Scalar(s) => s.description.as_deref(),
        }
    }

    /// Returns the output fields for objects and interfaces.
    #[must_use]
    pub fn fields(&self) -> &[FieldDefinition] {
        match self {
            Self::Object(o) => &o.fields,
            Self::Interface(i) => &i.fields,
            _ => &[],
        }
    }

    /// Returns the directly implemented interface names for objects and interfaces.
    #[must_use]
    pub fn interfaces(&self) -> &[String] {
        match self {
            Self::Object(o) => &o.interfaces,
            Self::Interface(i) => &i.interfaces,
            _ => &[],
        }
    }

    /// Returns a short lowercase label for the definition kind.
    #[must_use]
    pub const fn kind_label(&self) -> &'static str {
        match self {
            Self::Object(_) => "object",
            Self::Interface(_) => "interface",
            Self::Union(_) => "union",
            Self::Enum(_) => "enum",
            Self::InputObject(_) => "input",
            Self::Scalar(_) => "scalar",
        }
    }

    /// Returns true if this is an object type.
    #[must_use]
    pub const fn is_object(&self) -> bool {
        matches!(self, Self::Object(_))
    }

    /// Returns true if this is an interface type.
    #[must_use]
    pub const fn is_interface(&self) -> bool {
        matches!(self, Self::Interface(_))
    }

    /// Returns true if this is a custom scalar type.
    #[must_use]
    pub const fn is_scalar(&self) -> bool {
        matches!(self, Self::Scalar(_))
    }
}

/// Object type definition.
#[derive(Debug, Clone, Default)]
pub struct ObjectDef {
    /// Type name.
    pub name: String,
    /// Description.
    pub description: Option<String>,
    /// Names of directly implemented interfaces.
    pub interfaces: Vec<String>,
    /// Fields in declaration order.
    pub fields: Vec<FieldDefinition>,
}

impl ObjectDef {
    /// Creates a new object definition with no fields.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Declares an implemented interface.
    #[must_use]
    pub fn implements(mut self, interface: impl Into<String>) -> Self {
        self.interfaces.push(interface.into());
        self
    }

    /// Appends a field.
    #[must_use]
    pub fn field(mut self, field: FieldDefinition) -> Self {
        self.fields.push(field);
        self
    }
}

/// Interface type definition.
#[derive(Debug, Clone, Default)]
pub struct InterfaceDef {
    /// Type name.
    pub name: String,
    /// Description.
    pub description: Option<String>,
    /// Names of interfaces this interface extends.
    pub interfaces: Vec<String>,
    /// Fields in declaration order.
    pub fields: Vec<FieldDefinition>,
}

impl InterfaceDef {
    /// Creates a new interface definition with no fields.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Declares an implemented interface.
    #[must_use]
    pub fn implements(mut self, interface: impl Into<String>) -> Self {
        self.interfaces.push(interface.into());
        self
    }

    /// Appends a field.
    #[must_use]
    pub fn field(mut self, field: FieldDefinition) -> Self {
        self.fields.push(field);
        self
    }
}

/// Union type definition.
#[derive(Debug, Clone, Default)]
pub struct UnionDef {
    /// Type name.
    pub name: String,
    /// Description.
    pub description: Option<String>,
    /// Member object type names.
    pub members: Vec<String>,
}

impl UnionDef {
    /// Creates a new union over the given members.
    #[must_use]
    pub fn new<I, S>(name: impl Into<String>, members: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            description: None,
            members: members.into_iter().map(Into::into).collect(),
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Returns true if the named object is a member of this union.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.members.iter().any(|member| member == name)
    }
}

/// Enum type definition.
#[derive(Debug, Clone, Default)]
pub struct EnumDef {
    /// Type name.
    pub name: String,
    /// Description.
    pub description: Option<String>,
    /// Values in declaration order.
    pub values: Vec<EnumValueDefinition>,
}

impl EnumDef {
    /// Creates a new enum definition with no values.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Appends a value.
    #[must_use]
    pub fn value(mut self, value: EnumValueDefinition) -> Self {
        self.values.push(value);
        self
    }
}

/// A single enum value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumValueDefinition {
    /// Value name.
    pub name: String,
    /// Description.
    pub description: Option<String>,
}

impl EnumValueDefinition {
    /// Creates a new enum value.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Input object type definition.
#[derive(Debug, Clone, Default)]
pub struct InputObjectDef {
    /// Type name.
    pub name: String,
    /// Description.
    pub description: Option<String>,
    /// Input fields in declaration order.
    pub fields: Vec<InputValueDefinition>,
}

impl InputObjectDef {
    /// Creates a new input object definition with no fields.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Appends an input field.
    #[must_use]
    pub fn field(mut self, field: InputValueDefinition) -> Self {
        self.fields.push(field);
        self
    }
}

/// Custom scalar type definition.
#[derive(Debug, Clone, Default)]
pub struct ScalarDef {
    /// Type name.
    pub name: String,
    /// Description.
    pub description: Option<String>,
}

impl ScalarDef {
    /// Creates a new scalar definition.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Field on an object or interface.
#[derive(Debug, Clone)]
pub struct FieldDefinition {
    /// Field name.
    pub name: String,
    /// Field type.
    pub ty: TypeRef,
    /// Arguments in declaration order.
    pub arguments: Vec<InputValueDefinition>,
    /// Description.
    pub description: Option<String>,
}

impl FieldDefinition {
    /// Creates a new field without arguments.
    #[must_use]
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
            arguments: Vec::new(),
            description: None,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Appends an argument.
    #[must_use]
    pub fn argument(mut self, argument: InputValueDefinition) -> Self {
        self.arguments.push(argument);
        self
    }

    /// Returns true if the field takes arguments.
    #[must_use]
    pub fn has_arguments(&self) -> bool {
        !self.arguments.is_empty()
    }
}

/// Argument of a field, or field of an input object.
#[derive(Debug, Clone)]
pub struct InputValueDefinition {
    /// Name.
    pub name: String,
    /// Declared type.
    pub ty: TypeRef,
    /// Default value literal in schema syntax.
    pub default_value: Option<String>,
    /// Description.
    pub description: Option<String>,
}

impl InputValueDefinition {
    /// Creates a new input value without a default.
    #[must_use]
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
            default_value: None,
            description: None,
        }
    }

    /// Sets the raw default value literal.
    #[must_use]
    pub fn with_default(mut self, literal: impl Into<String>) -> Self {
        self.default_value = Some(literal.into());
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_ref_leaf_name() {
        let ty = TypeRef::non_null(TypeRef::list(TypeRef::non_null(TypeRef::named("Droid"))));
        assert_eq!(ty.leaf_name(), "Droid");
        assert!(ty.is_non_null());
    }

    #[test]
    fn test_non_null_is_idempotent() {
        let once = TypeRef::non_null(TypeRef::named("Int"));
        let twice = TypeRef::non_null(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_type_ref_display() {
        let ty = TypeRef::list(TypeRef::non_null(TypeRef::named("String")));
        assert_eq!(ty.to_string(), "[String!]");
        let ty = TypeRef::non_null(TypeRef::list(TypeRef::named("String")));
        assert_eq!(ty.to_string(), "[String]!");
    }

    #[test]
    fn test_builtin_scalar_lookup() {
        assert_eq!(BuiltinScalar::from_name("ID"), Some(BuiltinScalar::Id));
        assert_eq!(BuiltinScalar::from_name("Float"), Some(BuiltinScalar::Float));
        assert_eq!(BuiltinScalar::from_name("Id"), None);
        assert_eq!(BuiltinScalar::from_name("DateTime"), None);
    }

    #[test]
    fn test_type_definition_accessors() {
        let def = TypeDefinition::Object(
            ObjectDef::new("Human")
                .implements("Character")
                .field(FieldDefinition::new("id", TypeRef::named("ID"))),
        );
        assert_eq!(def.name(), "Human");
        assert_eq!(def.kind_label(), "object");
        assert_eq!(def.interfaces(), ["Character".to_string()]);
        assert_eq!(def.fields().len(), 1);

        let def = TypeDefinition::Enum(EnumDef::new("Episode"));
        assert!(def.fields().is_empty());
        assert!(def.interfaces().is_empty());
    }

    #[test]
    fn test_union_contains() {
        let union = UnionDef::new("SearchResult", ["Human", "Droid"]);
        assert!(union.contains("Droid"));
        assert!(!union.contains("Starship"));
    }
}
