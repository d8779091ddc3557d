//! The Apollo Federation v1 additions to a subgraph schema.
//!
//! See <https://www.apollographql.com/docs/federation/v1/federation-spec>.

use indexmap::IndexMap;

use super::{
    DirectiveDefinition, DirectiveLocation, Field, InputValueDefinition, ObjectType, ScalarType, TypeDefinition,
    TypeRef, UnionType,
};

pub const RESERVED_TYPE_ANY: &str = "_Any";
pub const RESERVED_TYPE_ENTITY: &str = "_Entity";
pub const RESERVED_TYPE_SERVICE: &str = "_Service";
pub const RESERVED_TYPE_QUERY: &str = "Query";
pub const RESERVED_TYPE_MUTATION: &str = "Mutation";
pub const RESERVED_FIELD_SERVICE: &str = "_service";
pub const RESERVED_FIELD_ENTITIES: &str = "_entities";

pub const FEDERATION_DIRECTIVES: &[&str] = &["key", "external", "requires", "provides"];

pub fn is_federation_directive(directive: &DirectiveDefinition) -> bool {
    FEDERATION_DIRECTIVES.contains(&directive.name.as_str())
}

/// Query and Mutation are printed as `extend type` in a subgraph.
pub fn is_extended_root_type(name: &str) -> bool {
    name == RESERVED_TYPE_QUERY || name == RESERVED_TYPE_MUTATION
}

/// `@key`, `@external`, `@requires` and `@provides`.
pub fn federation_directives() -> [DirectiveDefinition; 4] {
    let fields = || InputValueDefinition::new("fields", TypeRef::named("String").required());

    [
        DirectiveDefinition::new("key")
            .argument(fields())
            .location(DirectiveLocation::Object)
            .location(DirectiveLocation::Interface),
        DirectiveDefinition::new("external").location(DirectiveLocation::FieldDefinition),
        DirectiveDefinition::new("requires")
            .argument(fields())
            .location(DirectiveLocation::FieldDefinition),
        DirectiveDefinition::new("provides")
            .argument(fields())
            .location(DirectiveLocation::FieldDefinition),
    ]
}

pub(crate) fn install(types: &mut IndexMap<String, TypeDefinition>, directives: &mut Vec<DirectiveDefinition>) {
    directives.retain(|directive| !is_federation_directive(directive));
    directives.extend(federation_directives());

    let entities: Vec<String> = types
        .values()
        .filter(|ty| ty.is_entity())
        .map(|ty| ty.name().to_owned())
        .collect();

    let service = ObjectType::new(RESERVED_TYPE_SERVICE).field(Field::new("sdl", TypeRef::named("String")));

    types.insert(RESERVED_TYPE_ANY.to_owned(), ScalarType::new(RESERVED_TYPE_ANY).into());
    types.insert(RESERVED_TYPE_SERVICE.to_owned(), service.into());

    let mut query_fields = vec![Field::new(
        RESERVED_FIELD_SERVICE,
        TypeRef::named(RESERVED_TYPE_SERVICE).required(),
    )];

    if !entities.is_empty() {
        tracing::trace!(?entities, "exposing entities");

        let entity_union = entities
            .into_iter()
            .fold(UnionType::new(RESERVED_TYPE_ENTITY), |union, name| union.member(name));

        types.insert(RESERVED_TYPE_ENTITY.to_owned(), entity_union.into());

        query_fields.push(
            Field::new(RESERVED_FIELD_ENTITIES, TypeRef::named(RESERVED_TYPE_ENTITY).list().required()).argument(
                InputValueDefinition::new(
                    "representations",
                    TypeRef::named(RESERVED_TYPE_ANY).required().list().required(),
                ),
            ),
        );
    }

    let query = types
        .entry(RESERVED_TYPE_QUERY.to_owned())
        .or_insert_with(|| ObjectType::new(RESERVED_TYPE_QUERY).into());

    match query.fields_mut() {
        Some(fields) => {
            fields.retain(|field| field.name != RESERVED_FIELD_SERVICE && field.name != RESERVED_FIELD_ENTITIES);
            fields.extend(query_fields);
        }
        None => tracing::warn!("`Query` is not an object type, the federation fields were not added"),
    }
}
