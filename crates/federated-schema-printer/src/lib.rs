//! Prints GraphQL schemas as SDL for an [Apollo Federation](https://www.apollographql.com/docs/federation/v1/)
//! gateway: entities carry their `@key` directives, fields their `@external`, `@provides` and `@requires`
//! directives, and the federation plumbing (`_Any`, `_Entity`, `_Service`, `Query._service`,
//! `Query._entities`) is left out.
//!
//! ```
//! # #![allow(unused_crate_dependencies)]
//! use federated_schema_printer::{print, EntityObjectType, Field, ObjectType, PrintOptions, Schema, TypeRef};
//!
//! let schema = Schema::builder()
//!     .type_definition(
//!         EntityObjectType::new("Episode")
//!             .key("id".parse().unwrap())
//!             .field(Field::new("id", TypeRef::named("Int").required())),
//!     )
//!     .type_definition(ObjectType::new("Query").field(Field::new("episodes", "[Episode!]!".parse().unwrap())))
//!     .build_federated();
//!
//! let sdl = print(&schema, &PrintOptions::default()).unwrap();
//!
//! assert_eq!(
//!     sdl,
//!     "type Episode @key(fields: \"id\") {\n  id: Int!\n}\n\nextend type Query {\n  episodes: [Episode!]!\n}\n"
//! );
//! ```

mod error;
mod options;
mod render;
mod schema;

pub use self::{
    error::Error,
    options::PrintOptions,
    render::{print, print_filtered_schema, print_introspection_schema, print_named_type, print_type, SchemaFilter},
    schema::*,
};
