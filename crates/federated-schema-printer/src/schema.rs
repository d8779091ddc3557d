//! The schema model read by the printer.
//!
//! A [Schema] is assembled once through a [SchemaBuilder] and is never mutated afterwards, so the same
//! instance can be printed from several threads at once.

mod definitions;
mod directives;
pub mod federation;
pub mod introspection;
mod key_fields;
mod type_ref;
mod value;

pub use self::{
    definitions::*,
    directives::{is_specified_directive, specified_directives, DirectiveDefinition, DirectiveLocation},
    key_fields::{KeyField, KeyFields},
    type_ref::TypeRef,
    value::Value,
};

use indexmap::IndexMap;

/// The reason reported by `@deprecated` when none is given.
pub const DEFAULT_DEPRECATION_REASON: &str = "No longer supported";

/// A GraphQL schema: every named type plus the directive definitions.
///
/// Types keep their declaration order here. Printing sorts them by name.
#[derive(Debug, Clone, Default)]
pub struct Schema {
    types: IndexMap<String, TypeDefinition>,
    directives: Vec<DirectiveDefinition>,
}

impl Schema {
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::default()
    }

    /// All the types, including built-in scalars and introspection types, in declaration order.
    pub fn types(&self) -> impl ExactSizeIterator<Item = &TypeDefinition> {
        self.types.values()
    }

    pub fn type_by_name(&self, name: &str) -> Option<&TypeDefinition> {
        self.types.get(name)
    }

    pub fn directives(&self) -> &[DirectiveDefinition] {
        &self.directives
    }

    pub fn directive_by_name(&self, name: &str) -> Option<&DirectiveDefinition> {
        self.directives.iter().find(|directive| directive.name == name)
    }

    /// Object types resolvable through a `@key`, owned locally or extended.
    pub fn entity_types(&self) -> impl Iterator<Item = &TypeDefinition> {
        self.types().filter(|ty| ty.is_entity())
    }

    pub fn has_entity_types(&self) -> bool {
        self.entity_types().next().is_some()
    }
}

/// Collects the members of a [Schema].
///
/// Registering a type under a name that is already taken replaces the earlier definition.
#[derive(Debug, Default)]
pub struct SchemaBuilder {
    types: Vec<TypeDefinition>,
    directives: Vec<DirectiveDefinition>,
}

impl SchemaBuilder {
    pub fn type_definition(mut self, definition: impl Into<TypeDefinition>) -> Self {
        self.types.push(definition.into());
        self
    }

    pub fn directive(mut self, directive: DirectiveDefinition) -> Self {
        self.directives.push(directive);
        self
    }

    /// A plain GraphQL schema: the user's members plus the standard scalars, the introspection types and the
    /// `@include`, `@skip` and `@deprecated` directives.
    pub fn build(self) -> Schema {
        let SchemaBuilder { types, directives } = self;

        let mut schema = Schema::default();

        schema.directives.extend(specified_directives());
        schema.directives.extend(directives);

        let builtins = introspection::builtin_scalars()
            .into_iter()
            .chain(introspection::introspection_types());

        for definition in builtins.chain(types) {
            schema.types.insert(definition.name().to_owned(), definition);
        }

        schema
    }

    /// Same as [SchemaBuilder::build()], plus the Apollo Federation machinery: the federation directive
    /// definitions, the `_Any`, `_Service` and `_Entity` types and the `_service` and `_entities` query fields.
    pub fn build_federated(self) -> Schema {
        let mut schema = self.build();

        federation::install(&mut schema.types, &mut schema.directives);

        tracing::debug!(
            entities = schema.entity_types().count(),
            "installed the federation types and directives"
        );

        schema
    }
}

/// GraphQL names: `/[_A-Za-z][_0-9A-Za-z]*/`.
pub(crate) fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();

    match chars.next() {
        Some(first) if first == '_' || first.is_ascii_alphabetic() => {
            chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
        }
        _ => false,
    }
}
