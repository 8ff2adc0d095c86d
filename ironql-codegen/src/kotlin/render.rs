//! Kotlin source rendering.

use crate::declaration::{
    Annotation, Declaration, DeclarationKind, EmissionRequest, OperationSpec, ParameterSpec,
    PropertySpec,
};
use crate::descriptor::{TargetTypeDescriptor, TypeReference, TypeShape};
use ironql_schema::OperationKind;
use std::collections::BTreeSet;

/// Package holding the metadata annotation classes.
pub const ANNOTATION_PACKAGE: &str = "ironql.annotations";

const INDENT: &str = "    ";

/// Hard keywords that must be backtick-quoted when used as identifiers.
const KEYWORDS: &[&str] = &[
    "as", "break", "class", "continue", "do", "else", "false", "for", "fun", "if", "in",
    "interface", "is", "null", "object", "package", "return", "super", "this", "throw", "true",
    "try", "typealias", "typeof", "val", "var", "when", "while",
];

/// Renders emission requests as Kotlin source files.
///
/// Supertypes are rendered as interface references, without constructor
/// calls. A schema where an object implements another object therefore
/// renders `open class A : B`, which Kotlin rejects until a `B(...)` call is
/// added by hand: the superclass constructor arguments are not known from the
/// declaration alone, and Kotlin allows neither more than one superclass nor
/// an interface extending a class.
#[derive(Debug, Clone, Copy, Default)]
pub struct KotlinRenderer;

impl KotlinRenderer {
    /// Creates a new renderer.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Renders one request as the full contents of a `.kt` file.
    #[must_use]
    pub fn render(&self, request: &EmissionRequest) -> String {
        let decl = &request.declaration;
        let mut output = String::new();

        output.push_str("// Generated by IronQL. Do not edit.\n");
        output.push_str(&format!("package {}\n\n", request.namespace));

        let imports = collect_imports(decl, &request.namespace);
        if !imports.is_empty() {
            for import in &imports {
                output.push_str(&format!("import {import}\n"));
            }
            output.push('\n');
        }

        output.push_str(&self.render_declaration(decl));
        output
    }

    /// Renders only the declaration body, without package or imports.
    #[must_use]
    pub fn render_declaration(&self, decl: &Declaration) -> String {
        match decl.kind {
            DeclarationKind::Class => self.render_class(decl),
            DeclarationKind::SealedInterface => self.render_interface(decl),
            DeclarationKind::DataClass => self.render_data_class(decl),
            DeclarationKind::EnumClass => self.render_enum(decl),
            DeclarationKind::ScalarPlaceholder => self.render_scalar(decl),
        }
    }

    fn render_class(&self, decl: &Declaration) -> String {
        let mut output = String::new();
        output.push_str(&kdoc("", decl.description.as_deref(), &[]));
        output.push_str(&render_annotations("", &decl.annotations, "\n"));
        output.push_str(&format!("open class {}", escape_identifier(&decl.name)));

        if !decl.properties.is_empty() {
            output.push_str("(\n");
            for property in &decl.properties {
                output.push_str(&format!(
                    "{INDENT}{}val {}: {},\n",
                    if property.is_override { "override " } else { "" },
                    escape_identifier(&property.name),
                    property.ty
                ));
            }
            output.push(')');
        }

        output.push_str(&supertype_clause(&decl.supertypes));
        output.push_str(&self.render_operations(&decl.operations, true));
        output
    }

    fn render_interface(&self, decl: &Declaration) -> String {
        let mut output = String::new();
        output.push_str(&kdoc("", decl.description.as_deref(), &[]));
        output.push_str(&format!("sealed interface {}", escape_identifier(&decl.name)));
        output.push_str(&supertype_clause(&decl.supertypes));

        if decl.properties.is_empty() && decl.operations.is_empty() {
            output.push('\n');
            return output;
        }

        output.push_str(" {\n");
        let mut first = true;
        for property in &decl.properties {
            if !first {
                output.push('\n');
            }
            first = false;
            output.push_str(&render_property_signature(property));
        }
        for operation in &decl.operations {
            if !first {
                output.push('\n');
            }
            first = false;
            output.push_str(&render_operation(operation, false));
        }
        output.push_str("}\n");
        output
    }

    fn render_data_class(&self, decl: &Declaration) -> String {
        let mut output = String::new();
        let defaults: Vec<String> = decl
            .constructor_parameters
            .iter()
            .filter_map(|param| {
                param.default_value.as_ref().map(|raw| {
                    format!("@property {} Defaults to `{raw}`.", param.name)
                })
            })
            .collect();

        output.push_str(&kdoc("", decl.description.as_deref(), &defaults));
        output.push_str(&format!("data class {}(\n", escape_identifier(&decl.name)));
        for param in &decl.constructor_parameters {
            output.push_str(&kdoc(INDENT, param.description.as_deref(), &[]));
            output.push_str(&render_annotations(INDENT, &param.annotations, "\n"));
            output.push_str(&format!(
                "{INDENT}val {}: {},\n",
                escape_identifier(&param.name),
                param.ty
            ));
        }
        output.push_str(")\n");
        output
    }

    fn render_enum(&self, decl: &Declaration) -> String {
        let mut output = String::new();
        output.push_str(&kdoc("", decl.description.as_deref(), &[]));
        output.push_str(&format!("enum class {} {{\n", escape_identifier(&decl.name)));
        for constant in &decl.enum_constants {
            output.push_str(&kdoc(INDENT, constant.description.as_deref(), &[]));
            output.push_str(&format!("{INDENT}{},\n", escape_identifier(&constant.name)));
        }
        output.push_str("}\n");
        output
    }

    fn render_scalar(&self, decl: &Declaration) -> String {
        let mut output = String::new();
        output.push_str(&kdoc("", decl.description.as_deref(), &[]));
        output.push_str(&format!("class {}\n", escape_identifier(&decl.name)));
        output
    }

    fn render_operations(&self, operations: &[OperationSpec], with_body: bool) -> String {
        if operations.is_empty() {
            return "\n".to_string();
        }
        let mut output = String::from(" {\n");
        for (i, operation) in operations.iter().enumerate() {
            if i > 0 {
                output.push('\n');
            }
            output.push_str(&render_operation(operation, with_body));
        }
        output.push_str("}\n");
        output
    }
}

fn render_property_signature(property: &PropertySpec) -> String {
    let mut output = kdoc(INDENT, property.description.as_deref(), &[]);
    output.push_str(&format!(
        "{INDENT}{}val {}: {}\n",
        if property.is_override { "override " } else { "" },
        escape_identifier(&property.name),
        property.ty
    ));
    output
}

fn render_operation(operation: &OperationSpec, with_body: bool) -> String {
    let defaults: Vec<String> = operation
        .parameters
        .iter()
        .filter_map(|param| {
            param
                .default_value
                .as_ref()
                .map(|raw| format!("@param {} Defaults to `{raw}`.", param.name))
        })
        .collect();

    let mut output = kdoc(INDENT, operation.description.as_deref(), &defaults);
    let params: Vec<String> = operation.parameters.iter().map(render_parameter).collect();
    output.push_str(&format!(
        "{INDENT}{}fun {}({}): {}",
        if operation.is_override { "override " } else { "" },
        escape_identifier(&operation.name),
        params.join(", "),
        operation.return_type
    ));
    if with_body {
        output.push_str(" = TODO()");
    }
    output.push('\n');
    output
}

fn render_parameter(param: &ParameterSpec) -> String {
    format!(
        "{}{}: {}",
        render_annotations("", &param.annotations, " "),
        escape_identifier(&param.name),
        param.ty
    )
}

fn render_annotations(indent: &str, annotations: &[Annotation], separator: &str) -> String {
    let mut output = String::new();
    for annotation in annotations {
        let rendered = match annotation {
            Annotation::DefaultValue(raw) => {
                format!("@GraphQLDefault(\"{}\")", escape_string(raw))
            }
            Annotation::RootOperation(kind) => {
                format!("@GraphQLRoot(\"{}\")", root_label(*kind))
            }
        };
        output.push_str(indent);
        output.push_str(&rendered);
        output.push_str(separator);
    }
    output
}

const fn root_label(kind: OperationKind) -> &'static str {
    match kind {
        OperationKind::Query => "query",
        OperationKind::Mutation => "mutation",
        OperationKind::Subscription => "subscription",
    }
}

fn supertype_clause(supertypes: &[String]) -> String {
    if supertypes.is_empty() {
        String::new()
    } else {
        let names: Vec<String> = supertypes.iter().map(|s| escape_identifier(s)).collect();
        format!(" : {}", names.join(", "))
    }
}

/// Renders a KDoc block, or nothing if there is no text.
fn kdoc(indent: &str, description: Option<&str>, tags: &[String]) -> String {
    let description = description.map(str::trim).filter(|d| !d.is_empty());
    if description.is_none() && tags.is_empty() {
        return String::new();
    }

    let mut output = format!("{indent}/**\n");
    if let Some(description) = description {
        for line in description.lines() {
            let line = escape_comment(line);
            if line.trim().is_empty() {
                output.push_str(&format!("{indent} *\n"));
            } else {
                output.push_str(&format!("{indent} * {line}\n"));
            }
        }
        if !tags.is_empty() {
            output.push_str(&format!("{indent} *\n"));
        }
    }
    for tag in tags {
        output.push_str(&format!("{indent} * {}\n", escape_comment(tag)));
    }
    output.push_str(&format!("{indent} */\n"));
    output
}

/// Quotes an identifier with backticks if it is a Kotlin keyword.
#[must_use]
pub fn escape_identifier(name: &str) -> String {
    if KEYWORDS.contains(&name) {
        format!("`{name}`")
    } else {
        name.to_string()
    }
}

fn escape_comment(text: &str) -> String {
    text.replace("*/", "*&#47;").replace("/*", "&#47;*")
}

fn escape_string(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '$' => escaped.push_str("\\$"),
            '\n' => escaped.push_str("\\n"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Collects qualified imports for every external type the declaration uses.
fn collect_imports(decl: &Declaration, namespace: &str) -> BTreeSet<String> {
    let mut imports = BTreeSet::new();

    let descriptors = decl
        .properties
        .iter()
        .map(|p| &p.ty)
        .chain(decl.constructor_parameters.iter().map(|p| &p.ty))
        .chain(decl.operations.iter().flat_map(|o| {
            std::iter::once(&o.return_type).chain(o.parameters.iter().map(|p| &p.ty))
        }));
    for ty in descriptors {
        collect_type_imports(ty, &mut imports);
    }

    let annotations = decl
        .annotations
        .iter()
        .chain(decl.properties.iter().flat_map(|p| &p.annotations))
        .chain(decl.constructor_parameters.iter().flat_map(|p| &p.annotations))
        .chain(
            decl.operations
                .iter()
                .flat_map(|o| o.parameters.iter().flat_map(|p| &p.annotations)),
        );
    for annotation in annotations {
        let class = match annotation {
            Annotation::DefaultValue(_) => "GraphQLDefault",
            Annotation::RootOperation(_) => "GraphQLRoot",
        };
        imports.insert(format!("{ANNOTATION_PACKAGE}.{class}"));
    }

    imports.retain(|import| {
        import
            .rsplit_once('.')
            .is_some_and(|(package, _)| package != "kotlin" && package != namespace)
    });
    imports
}

fn collect_type_imports(ty: &TargetTypeDescriptor, imports: &mut BTreeSet<String>) {
    match &ty.shape {
        TypeShape::Named(TypeReference::External(target)) => {
            imports.insert(target.qualified_name().to_string());
        }
        TypeShape::Named(TypeReference::Generated(_)) => {}
        TypeShape::List(inner) => collect_type_imports(inner, imports),
        TypeShape::Optional { wrapper, inner } => {
            imports.insert(wrapper.qualified_name().to_string());
            collect_type_imports(inner, imports);
        }
        TypeShape::Stream { container, inner } => {
            imports.insert(container.qualified_name().to_string());
            collect_type_imports(inner, imports);
        }
    }
}
