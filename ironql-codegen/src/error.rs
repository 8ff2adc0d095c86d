//! Error types for code generation.

use thiserror::Error;

/// Error type for code generation operations.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A scalar is referenced but has no target mapping.
    #[error("unknown scalar '{scalar}'")]
    UnknownScalar {
        /// Scalar name.
        scalar: String,
    },

    /// A named type is neither defined in the schema nor a built-in scalar.
    #[error("unknown type '{type_name}'")]
    UnknownType {
        /// Type name.
        type_name: String,
    },

    /// A type implements something that is not an interface or object.
    #[error("type '{type_name}' cannot implement '{supertype}': not an interface or object type")]
    InvalidImplements {
        /// Implementing type name.
        type_name: String,
        /// Declared supertype name.
        supertype: String,
    },

    /// An error raised while processing a specific schema element.
    #[error("{location}: {source}")]
    At {
        /// Schema coordinate, e.g. `Query.hero(id)`.
        location: String,
        /// Underlying error.
        #[source]
        source: Box<CodegenError>,
    },
}

impl CodegenError {
    /// Attaches a schema coordinate to the error.
    ///
    /// Errors that already carry a location keep their innermost coordinate.
    #[must_use]
    pub fn at(self, location: impl Into<String>) -> Self {
        match self {
            Self::At { .. } => self,
            other => Self::At {
                location: location.into(),
                source: Box::new(other),
            },
        }
    }

    /// Returns the error with any location wrappers removed.
    #[must_use]
    pub fn root_cause(&self) -> &Self {
        match self {
            Self::At { source, .. } => source.root_cause(),
            other => other,
        }
    }

    /// Returns the schema coordinate, if one was attached.
    #[must_use]
    pub fn location(&self) -> Option<&str> {
        match self {
            Self::At { location, .. } => Some(location),
            _ => None,
        }
    }
}
