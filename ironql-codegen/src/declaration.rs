//! Assembled declarations handed to emitters.
//!
//! An [`EmissionRequest`] is self-contained: it carries every name, type and
//! annotation an emitter needs, so it can be rendered without access to the
//! schema model.

use crate::descriptor::TargetTypeDescriptor;
use ironql_schema::OperationKind;

/// Round-trip metadata annotation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Annotation {
    /// Default value in raw schema syntax.
    DefaultValue(String),
    /// Marks the declaration as a root operation type.
    RootOperation(OperationKind),
}

/// Declaration shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeclarationKind {
    /// Concrete class for an object type.
    Class,
    /// Closed polymorphic interface for interfaces and unions.
    SealedInterface,
    /// Plain data holder for input objects.
    DataClass,
    /// Enumeration.
    EnumClass,
    /// Placeholder for a custom scalar.
    ScalarPlaceholder,
}

/// Stored property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertySpec {
    /// Property name.
    pub name: String,
    /// Resolved type.
    pub ty: TargetTypeDescriptor,
    /// Description.
    pub description: Option<String>,
    /// Redeclares a member of a direct supertype.
    pub is_override: bool,
    /// Declared without state or initializer.
    pub is_abstract: bool,
    /// Default value in raw schema syntax.
    pub default_value: Option<String>,
    /// Attached annotations.
    pub annotations: Vec<Annotation>,
}

/// Parameter of an operation or constructor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterSpec {
    /// Parameter name.
    pub name: String,
    /// Resolved type.
    pub ty: TargetTypeDescriptor,
    /// Description.
    pub description: Option<String>,
    /// Default value in raw schema syntax, forwarded as documentation.
    pub default_value: Option<String>,
    /// Attached annotations.
    pub annotations: Vec<Annotation>,
}

/// Operation stub with a placeholder body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationSpec {
    /// Operation name.
    pub name: String,
    /// Parameters; the first is always the execution context.
    pub parameters: Vec<ParameterSpec>,
    /// Return type.
    pub return_type: TargetTypeDescriptor,
    /// Description.
    pub description: Option<String>,
    /// Redeclares a member of a direct supertype.
    pub is_override: bool,
}

/// Enum constant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumConstantSpec {
    /// Constant name.
    pub name: String,
    /// Description.
    pub description: Option<String>,
}

/// One declaration in the target language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    /// Declaration shape.
    pub kind: DeclarationKind,
    /// Declaration name.
    pub name: String,
    /// Description.
    pub description: Option<String>,
    /// Direct supertypes, by declaration name.
    pub supertypes: Vec<String>,
    /// Stored properties.
    pub properties: Vec<PropertySpec>,
    /// Operation stubs.
    pub operations: Vec<OperationSpec>,
    /// Primary constructor parameters.
    pub constructor_parameters: Vec<ParameterSpec>,
    /// Enum constants.
    pub enum_constants: Vec<EnumConstantSpec>,
    /// Declaration-level annotations.
    pub annotations: Vec<Annotation>,
}

impl Declaration {
    /// Creates an empty declaration of the given kind.
    #[must_use]
    pub fn new(kind: DeclarationKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            description: None,
            supertypes: Vec::new(),
            properties: Vec::new(),
            operations: Vec::new(),
            constructor_parameters: Vec::new(),
            enum_constants: Vec::new(),
            annotations: Vec::new(),
        }
    }

    /// Looks up a property by name.
    #[must_use]
    pub fn property(&self, name: &str) -> Option<&PropertySpec> {
        self.properties.iter().find(|p| p.name == name)
    }

    /// Looks up an operation by name.
    #[must_use]
    pub fn operation(&self, name: &str) -> Option<&OperationSpec> {
        self.operations.iter().find(|o| o.name == name)
    }

    /// Returns true if the declaration has no members of any kind.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
            && self.operations.is_empty()
            && self.constructor_parameters.is_empty()
            && self.enum_constants.is_empty()
    }
}

/// A single declaration ready for an emitter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmissionRequest {
    /// Target namespace.
    pub namespace: String,
    /// Declaration name, also used as the file stem.
    pub name: String,
    /// The declaration.
    pub declaration: Declaration,
}

impl EmissionRequest {
    /// Creates a request for a declaration.
    #[must_use]
    pub fn new(namespace: impl Into<String>, declaration: Declaration) -> Self {
        Self {
            namespace: namespace.into(),
            name: declaration.name.clone(),
            declaration,
        }
    }
}
