//! Target type descriptors.
//!
//! A [`TargetTypeDescriptor`] is the resolved, target-side view of a schema
//! [`TypeRef`](ironql_schema::TypeRef): every level carries its own nullable
//! flag, and presence and stream containers appear as explicit wrappers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Fully qualified reference to an existing target-language type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TargetTypeRef(String);

impl TargetTypeRef {
    /// Creates a reference from a qualified name such as `kotlin.String`.
    #[must_use]
    pub fn new(qualified_name: impl Into<String>) -> Self {
        Self(qualified_name.into())
    }

    /// Returns the fully qualified name.
    #[must_use]
    pub fn qualified_name(&self) -> &str {
        &self.0
    }

    /// Returns the name without its package prefix.
    #[must_use]
    pub fn simple_name(&self) -> &str {
        self.0.rsplit('.').next().unwrap_or(&self.0)
    }

    /// Returns the package prefix, if any.
    #[must_use]
    pub fn package(&self) -> Option<&str> {
        self.0.rsplit_once('.').map(|(package, _)| package)
    }
}

impl From<&str> for TargetTypeRef {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl fmt::Display for TargetTypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// What a named leaf resolves to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeReference {
    /// An existing target type (mapped scalar, context, wrapper).
    External(TargetTypeRef),
    /// A declaration produced by this run, by declaration name.
    Generated(String),
}

impl TypeReference {
    /// Returns the name as it appears in generated source.
    #[must_use]
    pub fn simple_name(&self) -> &str {
        match self {
            Self::External(target) => target.simple_name(),
            Self::Generated(name) => name,
        }
    }
}

/// Structural shape of a descriptor level.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeShape {
    /// Leaf reference.
    Named(TypeReference),
    /// List of elements, each with its own nullability.
    List(Box<TargetTypeDescriptor>),
    /// Presence wrapper distinguishing "omitted" from "present".
    Optional {
        /// Wrapper type.
        wrapper: TargetTypeRef,
        /// Wrapped descriptor.
        inner: Box<TargetTypeDescriptor>,
    },
    /// Stream container for subscription results.
    Stream {
        /// Container type.
        container: TargetTypeRef,
        /// Element descriptor.
        inner: Box<TargetTypeDescriptor>,
    },
}

/// Resolved target type with per-level nullability.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TargetTypeDescriptor {
    /// Shape at this level.
    pub shape: TypeShape,
    /// Whether this level admits null.
    pub nullable: bool,
}

impl TargetTypeDescriptor {
    /// Creates a leaf descriptor.
    #[must_use]
    pub const fn named(reference: TypeReference, nullable: bool) -> Self {
        Self {
            shape: TypeShape::Named(reference),
            nullable,
        }
    }

    /// Creates a list descriptor.
    #[must_use]
    pub fn list(element: TargetTypeDescriptor, nullable: bool) -> Self {
        Self {
            shape: TypeShape::List(Box::new(element)),
            nullable,
        }
    }

    /// Wraps a descriptor in a presence wrapper. The wrapper itself is never null.
    #[must_use]
    pub fn optional(wrapper: TargetTypeRef, inner: TargetTypeDescriptor) -> Self {
        Self {
            shape: TypeShape::Optional {
                wrapper,
                inner: Box::new(inner),
            },
            nullable: false,
        }
    }

    /// Wraps a descriptor in a stream container. The container itself is never null.
    #[must_use]
    pub fn stream(container: TargetTypeRef, inner: TargetTypeDescriptor) -> Self {
        Self {
            shape: TypeShape::Stream {
                container,
                inner: Box::new(inner),
            },
            nullable: false,
        }
    }

    /// Returns the leaf reference.
    #[must_use]
    pub fn leaf(&self) -> &TypeReference {
        match &self.shape {
            TypeShape::Named(reference) => reference,
            TypeShape::List(inner)
            | TypeShape::Optional { inner, .. }
            | TypeShape::Stream { inner, .. } => inner.leaf(),
        }
    }

    /// Returns the list element descriptor, if this level is a list.
    #[must_use]
    pub fn element(&self) -> Option<&TargetTypeDescriptor> {
        match &self.shape {
            TypeShape::List(inner) => Some(inner),
            _ => None,
        }
    }

    /// Returns the wrapped descriptor for presence and stream wrappers.
    #[must_use]
    pub fn unwrapped(&self) -> Option<&TargetTypeDescriptor> {
        match &self.shape {
            TypeShape::Optional { inner, .. } | TypeShape::Stream { inner, .. } => Some(inner),
            _ => None,
        }
    }

    /// Returns true if this level is a presence wrapper.
    #[must_use]
    pub const fn is_optional(&self) -> bool {
        matches!(self.shape, TypeShape::Optional { .. })
    }

    /// Returns true if this level is a stream container.
    #[must_use]
    pub const fn is_stream(&self) -> bool {
        matches!(self.shape, TypeShape::Stream { .. })
    }
}

impl fmt::Display for TargetTypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.shape {
            TypeShape::Named(reference) => f.write_str(reference.simple_name())?,
            TypeShape::List(inner) => write!(f, "List<{inner}>")?,
            TypeShape::Optional { wrapper, inner } => {
                write!(f, "{}<{inner}>", wrapper.simple_name())?;
            }
            TypeShape::Stream { container, inner } => {
                write!(f, "{}<{inner}>", container.simple_name())?;
            }
        }
        if self.nullable {
            f.write_str("?")?;
        }
        Ok(())
    }
}
