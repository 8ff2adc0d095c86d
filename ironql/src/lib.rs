//! # IronQL
//!
//! Schema-first declaration skeletons for GraphQL services.
//!
//! IronQL reads a validated GraphQL schema model and produces one typed
//! declaration per named type: classes for objects, sealed interfaces for
//! interfaces and unions, data classes for input objects, enum classes, and
//! placeholders for custom scalars. Field resolution steps become operation
//! stubs taking an execution context; only scalar `id` fields become state.
//!
//! ## Quick Start
//!
//! ```ignore
//! use ironql::prelude::*;
//!
//! let schema = SchemaModel::new()
//!     .with_type(InterfaceDef::new("Character"))?
//!     .with_type(
//!         ObjectDef::new("Query").field(
//!             FieldDefinition::new("hero", TypeRef::named("Character"))
//!                 .argument(InputValueDefinition::new("id", TypeRef::non_null(TypeRef::named("ID")))),
//!         ),
//!     )?;
//!
//! let config = Configuration::builder().namespace("com.example.starwars").build();
//! ironql::generate_to_dir(&schema, &config, "generated".as_ref())?;
//! ```
//!
//! ## Crate Organization
//!
//! - [`schema`] - Schema model: type references and definitions
//! - [`codegen`] - Type mapping, declaration assembly, Kotlin output

pub mod prelude;

/// Schema model.
pub mod schema {
    pub use ironql_schema::*;
}

/// Declaration generation.
pub mod codegen {
    pub use ironql_codegen::*;
}

// Re-export commonly used items at the crate root
pub use ironql_codegen::{generate, generate_all, generate_to_dir};
pub use ironql_schema::{SchemaModel, TypeRef};
