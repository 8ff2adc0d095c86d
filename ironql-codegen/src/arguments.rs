//! Binding of arguments and input fields to parameters.

use crate::annotations::AnnotationPolicy;
use crate::declaration::ParameterSpec;
use crate::error::CodegenError;
use crate::mapper::TypeMapper;
use ironql_schema::InputValueDefinition;

/// Resolves arguments and input fields into parameters.
#[derive(Debug, Clone, Copy)]
pub struct ArgumentBinder<'a> {
    mapper: TypeMapper<'a>,
    policy: AnnotationPolicy,
}

impl<'a> ArgumentBinder<'a> {
    /// Creates a new argument binder.
    #[must_use]
    pub const fn new(mapper: TypeMapper<'a>, policy: AnnotationPolicy) -> Self {
        Self { mapper, policy }
    }

    /// Binds one argument or input field.
    ///
    /// A default value is forwarded verbatim as metadata and, if the policy
    /// allows, as a default-value annotation.
    ///
    /// # Errors
    /// Propagates type resolution errors.
    pub fn bind(&self, value: &InputValueDefinition) -> Result<ParameterSpec, CodegenError> {
        let default_value = value.default_value.clone();
        let ty = self
            .mapper
            .resolve_input_type(&value.ty, default_value.is_some())?;
        let annotations = default_value
            .as_deref()
            .and_then(|raw| self.policy.default_value(raw))
            .into_iter()
            .collect();

        Ok(ParameterSpec {
            name: value.name.clone(),
            ty,
            description: value.description.clone(),
            default_value,
            annotations,
        })
    }

    /// Binds a list of values in order, tagging errors with `owner.name`.
    ///
    /// # Errors
    /// Returns the first resolution error, located at the offending value.
    pub fn bind_all(
        &self,
        owner: &str,
        values: &[InputValueDefinition],
    ) -> Result<Vec<ParameterSpec>, CodegenError> {
        values
            .iter()
            .map(|value| {
                self.bind(value)
                    .map_err(|e| e.at(format!("{owner}({})", value.name)))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Configuration;
    use crate::declaration::Annotation;
    use ironql_schema::{SchemaModel, TypeRef};

    #[test]
    fn test_default_value_forwarded_and_annotated() {
        let schema = SchemaModel::new();
        let config = Configuration::default();
        let binder = ArgumentBinder::new(
            TypeMapper::new(&schema, &config),
            AnnotationPolicy::new(true),
        );
        let param = binder
            .bind(&InputValueDefinition::new("limit", TypeRef::named("Int")).with_default("10"))
            .expect("Failed to bind");

        assert_eq!(param.name, "limit");
        assert!(!param.ty.is_optional());
        assert_eq!(param.default_value.as_deref(), Some("10"));
        assert_eq!(param.annotations, [Annotation::DefaultValue("10".to_string())]);
    }

    #[test]
    fn test_default_value_not_annotated_when_disabled() {
        let schema = SchemaModel::new();
        let config = Configuration::default();
        let binder = ArgumentBinder::new(
            TypeMapper::new(&schema, &config),
            AnnotationPolicy::new(false),
        );
        let param = binder
            .bind(
                &InputValueDefinition::new("query", TypeRef::named("String"))
                    .with_default("\"luke\""),
            )
            .expect("Failed to bind");

        assert_eq!(param.default_value.as_deref(), Some("\"luke\""));
        assert!(param.annotations.is_empty());
    }

    #[test]
    fn test_optional_without_default() {
        let schema = SchemaModel::new();
        let config = Configuration::default();
        let binder = ArgumentBinder::new(
            TypeMapper::new(&schema, &config),
            AnnotationPolicy::new(true),
        );
        let param = binder
            .bind(&InputValueDefinition::new("after", TypeRef::named("String")))
            .expect("Failed to bind");

        assert!(param.ty.is_optional());
        assert!(param.default_value.is_none());
        assert!(param.annotations.is_empty());
    }

    #[test]
    fn test_bind_all_locates_error() {
        let schema = SchemaModel::new();
        let config = Configuration::default();
        let binder = ArgumentBinder::new(
            TypeMapper::new(&schema, &config),
            AnnotationPolicy::new(true),
        );
        let values = [
            InputValueDefinition::new("first", TypeRef::named("Int")),
            InputValueDefinition::new("when", TypeRef::named("DateTime")),
        ];
        let err = binder
            .bind_all("Query.reviews", &values)
            .expect_err("Expected failure");

        assert_eq!(err.location(), Some("Query.reviews(when)"));
        assert!(matches!(err.root_cause(), CodegenError::UnknownType { .. }));
    }
}
