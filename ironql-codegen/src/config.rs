//! Generator configuration.
//!
//! A [`Configuration`] is immutable for the duration of a run. It is obtained
//! from a [`ConfigurationBuilder`], either assembled in code or deserialized
//! from any serde format:
//!
//! ```ignore
//! let config = ConfigurationBuilder::new()
//!     .namespace("com.example.starwars")
//!     .scalar("DateTime", "java.time.OffsetDateTime")
//!     .annotations(false)
//!     .build();
//! ```

use crate::descriptor::TargetTypeRef;
use ironql_schema::BuiltinScalar;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Default namespace for generated declarations.
pub const DEFAULT_NAMESPACE: &str = "com.example.generated";
/// Default presence wrapper for omittable inputs.
pub const DEFAULT_OPTIONAL_WRAPPER: &str =
    "com.expediagroup.graphql.generator.execution.OptionalInput";
/// Default execution context type.
pub const DEFAULT_CONTEXT_TYPE: &str = "graphql.schema.DataFetchingEnvironment";
/// Default stream container for subscription fields.
pub const DEFAULT_STREAM_TYPE: &str = "org.reactivestreams.Publisher";

/// Returns the default target type for a built-in scalar.
#[must_use]
pub fn default_scalar_target(scalar: BuiltinScalar) -> TargetTypeRef {
    TargetTypeRef::new(match scalar {
        BuiltinScalar::String | BuiltinScalar::Id => "kotlin.String",
        BuiltinScalar::Int => "kotlin.Int",
        BuiltinScalar::Float => "kotlin.Double",
        BuiltinScalar::Boolean => "kotlin.Boolean",
    })
}

/// Builder for [`Configuration`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ConfigurationBuilder {
    scalar_mapping: BTreeMap<String, TargetTypeRef>,
    optional_wrapper_type: TargetTypeRef,
    context_type: TargetTypeRef,
    stream_type: TargetTypeRef,
    annotation_policy: bool,
    namespace: String,
}

impl ConfigurationBuilder {
    /// Creates a new builder with default settings and an empty scalar mapping.
    #[must_use]
    pub fn new() -> Self {
        Self {
            scalar_mapping: BTreeMap::new(),
            optional_wrapper_type: TargetTypeRef::new(DEFAULT_OPTIONAL_WRAPPER),
            context_type: TargetTypeRef::new(DEFAULT_CONTEXT_TYPE),
            stream_type: TargetTypeRef::new(DEFAULT_STREAM_TYPE),
            annotation_policy: true,
            namespace: DEFAULT_NAMESPACE.to_string(),
        }
    }

    /// Maps a scalar to a target type, overriding any previous entry.
    #[must_use]
    pub fn scalar(mut self, name: impl Into<String>, target: impl Into<TargetTypeRef>) -> Self {
        self.scalar_mapping.insert(name.into(), target.into());
        self
    }

    /// Sets the presence wrapper used for omittable inputs.
    #[must_use]
    pub fn optional_wrapper(mut self, target: impl Into<TargetTypeRef>) -> Self {
        self.optional_wrapper_type = target.into();
        self
    }

    /// Sets the execution context type passed to every operation.
    #[must_use]
    pub fn context_type(mut self, target: impl Into<TargetTypeRef>) -> Self {
        self.context_type = target.into();
        self
    }

    /// Sets the stream container for subscription fields.
    #[must_use]
    pub fn stream_type(mut self, target: impl Into<TargetTypeRef>) -> Self {
        self.stream_type = target.into();
        self
    }

    /// Enables or disables round-trip metadata annotations.
    #[must_use]
    pub fn annotations(mut self, enabled: bool) -> Self {
        self.annotation_policy = enabled;
        self
    }

    /// Sets the namespace for generated declarations.
    #[must_use]
    pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    /// Builds the configuration, filling in any missing built-in scalar.
    #[must_use]
    pub fn build(self) -> Configuration {
        let mut scalar_mapping = self.scalar_mapping;
        for scalar in BuiltinScalar::ALL {
            scalar_mapping.entry(scalar.name().to_string()).or_insert_with(|| {
                let target = default_scalar_target(scalar);
                tracing::debug!(
                    scalar = scalar.name(),
                    target = %target,
                    "filling missing built-in scalar mapping"
                );
                target
            });
        }

        Configuration {
            scalar_mapping,
            optional_wrapper_type: self.optional_wrapper_type,
            context_type: self.context_type,
            stream_type: self.stream_type,
            annotation_policy: self.annotation_policy,
            namespace: self.namespace,
        }
    }
}

impl Default for ConfigurationBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Immutable generator configuration.
#[derive(Debug, Clone)]
pub struct Configuration {
    scalar_mapping: BTreeMap<String, TargetTypeRef>,
    optional_wrapper_type: TargetTypeRef,
    context_type: TargetTypeRef,
    stream_type: TargetTypeRef,
    annotation_policy: bool,
    namespace: String,
}

impl Configuration {
    /// Returns a builder with default settings.
    #[must_use]
    pub fn builder() -> ConfigurationBuilder {
        ConfigurationBuilder::new()
    }

    /// Looks up the target type for a scalar.
    #[must_use]
    pub fn scalar_target(&self, name: &str) -> Option<&TargetTypeRef> {
        self.scalar_mapping.get(name)
    }

    /// Returns the full scalar mapping.
    #[must_use]
    pub fn scalar_mapping(&self) -> &BTreeMap<String, TargetTypeRef> {
        &self.scalar_mapping
    }

    /// Returns the presence wrapper type.
    #[must_use]
    pub fn optional_wrapper_type(&self) -> &TargetTypeRef {
        &self.optional_wrapper_type
    }

    /// Returns the execution context type.
    #[must_use]
    pub fn context_type(&self) -> &TargetTypeRef {
        &self.context_type
    }

    /// Returns the stream container type.
    #[must_use]
    pub fn stream_type(&self) -> &TargetTypeRef {
        &self.stream_type
    }

    /// Returns true if metadata annotations are emitted.
    #[must_use]
    pub const fn annotation_policy(&self) -> bool {
        self.annotation_policy
    }

    /// Returns the namespace for generated declarations.
    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }
}

impl Default for Configuration {
    fn default() -> Self {
        ConfigurationBuilder::new().build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_configuration_is_total() {
        let config = Configuration::default();
        for scalar in BuiltinScalar::ALL {
            assert!(config.scalar_target(scalar.name()).is_some());
        }
        assert_eq!(
            config.scalar_target("ID").map(TargetTypeRef::qualified_name),
            Some("kotlin.String")
        );
        assert_eq!(config.namespace(), DEFAULT_NAMESPACE);
        assert!(config.annotation_policy());
    }

    #[test]
    fn test_user_mapping_wins_over_default() {
        let config = ConfigurationBuilder::new()
            .scalar("ID", "java.util.UUID")
            .scalar("DateTime", "java.time.OffsetDateTime")
            .build();
        assert_eq!(
            config.scalar_target("ID").map(TargetTypeRef::simple_name),
            Some("UUID")
        );
        assert_eq!(
            config.scalar_target("Int").map(TargetTypeRef::simple_name),
            Some("Int")
        );
        assert!(config.scalar_target("DateTime").is_some());
        assert_eq!(config.scalar_mapping().len(), 6);
    }

    #[test]
    fn test_builder_setters() {
        let config = Configuration::builder()
            .namespace("com.example.starwars")
            .optional_wrapper("com.example.Maybe")
            .context_type("com.example.Context")
            .stream_type("kotlinx.coroutines.flow.Flow")
            .annotations(false)
            .build();
        assert_eq!(config.namespace(), "com.example.starwars");
        assert_eq!(config.optional_wrapper_type().simple_name(), "Maybe");
        assert_eq!(config.context_type().simple_name(), "Context");
        assert_eq!(config.stream_type().simple_name(), "Flow");
        assert!(!config.annotation_policy());
    }

    #[test]
    fn test_deserialize_partial_configuration() {
        let json = r#"{
            "namespace": "com.example.shop",
            "annotationPolicy": false,
            "scalarMapping": { "Float": "java.math.BigDecimal" }
        }"#;
        let builder: ConfigurationBuilder =
            serde_json::from_str(json).expect("Failed to deserialize");
        let config = builder.build();

        assert_eq!(config.namespace(), "com.example.shop");
        assert!(!config.annotation_policy());
        assert_eq!(
            config.scalar_target("Float").map(TargetTypeRef::simple_name),
            Some("BigDecimal")
        );
        assert_eq!(
            config.scalar_target("Boolean").map(TargetTypeRef::simple_name),
            Some("Boolean")
        );
        assert_eq!(
            config.optional_wrapper_type().qualified_name(),
            DEFAULT_OPTIONAL_WRAPPER
        );
    }
}
