//! Error types for building the schema model.

use crate::types::OperationKind;
use thiserror::Error;

/// Error type for schema model construction.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Duplicate definition.
    #[error("duplicate type definition: '{name}'")]
    DuplicateDefinition {
        /// Name of the duplicate.
        name: String,
    },

    /// Type not found.
    #[error("type '{name}' not found")]
    TypeNotFound {
        /// Type name.
        name: String,
    },

    /// Root operation type is not an object type.
    #[error("{kind} root type '{name}' is not an object type")]
    RootNotObject {
        /// Operation kind whose root was being set.
        kind: OperationKind,
        /// Offending type name.
        name: String,
    },
}
