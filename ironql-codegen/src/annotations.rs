//! Rules for attaching round-trip metadata annotations.

use crate::declaration::Annotation;
use ironql_schema::OperationKind;

/// Decides which metadata annotations are attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnnotationPolicy {
    enabled: bool,
}

impl AnnotationPolicy {
    /// Creates a policy.
    #[must_use]
    pub const fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Returns true if annotations are emitted.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Annotation carrying a default value verbatim in schema syntax.
    #[must_use]
    pub fn default_value(&self, raw: &str) -> Option<Annotation> {
        self.enabled.then(|| Annotation::DefaultValue(raw.to_string()))
    }

    /// Annotation marking a root operation type.
    #[must_use]
    pub fn root_operation(&self, kind: OperationKind) -> Option<Annotation> {
        self.enabled.then_some(Annotation::RootOperation(kind))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enabled_policy() {
        let policy = AnnotationPolicy::new(true);
        assert_eq!(
            policy.default_value("[EMPIRE, JEDI]"),
            Some(Annotation::DefaultValue("[EMPIRE, JEDI]".to_string()))
        );
        assert_eq!(
            policy.root_operation(OperationKind::Mutation),
            Some(Annotation::RootOperation(OperationKind::Mutation))
        );
    }

    #[test]
    fn test_disabled_policy() {
        let policy = AnnotationPolicy::new(false);
        assert!(!policy.is_enabled());
        assert_eq!(policy.default_value("10"), None);
        assert_eq!(policy.root_operation(OperationKind::Query), None);
    }
}
