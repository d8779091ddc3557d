mod description;
mod directive_definition;
mod display_utils;
mod fields;
mod filter;
mod types;

pub use self::filter::SchemaFilter;

pub(crate) use self::display_utils::write_quoted;

use itertools::Itertools as _;

use crate::{Error, PrintOptions, Schema, TypeDefinition};

/// Render the SDL a federated service publishes to the gateway: the user's types and directives, without the
/// built-in members and the federation plumbing.
pub fn print(schema: &Schema, options: &PrintOptions) -> Result<String, Error> {
    print_filtered_schema(schema, &SchemaFilter::FEDERATED_SDL, options)
}

/// Render the specified directives and the introspection types.
pub fn print_introspection_schema(schema: &Schema, options: &PrintOptions) -> Result<String, Error> {
    print_filtered_schema(schema, &SchemaFilter::INTROSPECTION, options)
}

/// Render a single type definition. The reserved federation types and objects without printable fields
/// render as the empty string.
pub fn print_type(definition: &TypeDefinition, options: &PrintOptions) -> Result<String, Error> {
    let mut sdl = String::new();
    types::write_type(definition, options, &mut sdl)?;
    Ok(sdl)
}

/// Render the type called `name`.
pub fn print_named_type(schema: &Schema, name: &str, options: &PrintOptions) -> Result<String, Error> {
    let definition = schema
        .type_by_name(name)
        .ok_or_else(|| Error::UnknownType(name.to_owned()))?;

    print_type(definition, options)
}

/// Render the directives then the types selected by `filter`, one blank line between each.
pub fn print_filtered_schema(schema: &Schema, filter: &SchemaFilter, options: &PrintOptions) -> Result<String, Error> {
    let directives = filter.filter_directives(schema);
    let types = filter.filter_types(schema);

    tracing::debug!(
        directives = directives.len(),
        types = types.len(),
        comment_descriptions = options.comment_descriptions,
        "printing schema"
    );

    let mut fragments = Vec::with_capacity(directives.len() + types.len());

    for directive in directives {
        let mut sdl = String::new();
        directive_definition::write_directive_definition(directive, options, &mut sdl)?;
        fragments.push(sdl);
    }

    for definition in types {
        fragments.push(print_type(definition, options)?);
    }

    let mut sdl = fragments.into_iter().filter(|fragment| !fragment.is_empty()).join("\n\n");
    sdl.push('\n');

    tracing::debug!(length = sdl.len(), "printed schema");

    Ok(sdl)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        DirectiveDefinition, DirectiveLocation, EntityObjectType, EnumType, Field, InputObjectType,
        InputValueDefinition, InterfaceType, ObjectType, ScalarType, TypeRef, UnionType,
    };
    use indoc::indoc;
    use pretty_assertions::assert_eq;

    fn star_wars() -> Schema {
        Schema::builder()
            .type_definition(
                EntityObjectType::new("Episode")
                    .description("A film in the Star Wars trilogy")
                    .key("id".parse().unwrap())
                    .field(Field::new("id", TypeRef::named("Int").required()))
                    .field(Field::new("title", TypeRef::named("String").required()))
                    .field(
                        Field::new("characters", "[Character!]!".parse().unwrap())
                            .provides("name".parse().unwrap()),
                    ),
            )
            .type_definition(
                ObjectType::new("Character")
                    .field(Field::new("id", TypeRef::named("Int").required()))
                    .field(Field::new("name", TypeRef::named("String").required())),
            )
            .type_definition(
                ObjectType::new("Query")
                    .field(Field::new("episodes", "[Episode!]!".parse().unwrap()))
                    .field(
                        Field::new("episode", TypeRef::named("Episode"))
                            .argument(InputValueDefinition::new("id", TypeRef::named("Int").required())),
                    ),
            )
            .build_federated()
    }

    #[test]
    fn federated_sdl() {
        let sdl = print(&star_wars(), &PrintOptions::default()).unwrap();

        insta::assert_snapshot!(sdl, @r###"
        type Character {
          id: Int!
          name: String!
        }

        """A film in the Star Wars trilogy"""
        type Episode @key(fields: "id") {
          id: Int!
          title: String!
          characters: [Character!]! @provides(fields: "name")
        }

        extend type Query {
          episodes: [Episode!]!
          episode(id: Int!): Episode
        }
        "###);
    }

    #[test]
    fn every_kind_of_type() {
        let schema = Schema::builder()
            .directive(
                DirectiveDefinition::new("cacheControl")
                    .argument(InputValueDefinition::new("maxAge", TypeRef::named("Int")))
                    .location(DirectiveLocation::FieldDefinition)
                    .location(DirectiveLocation::Object),
            )
            .type_definition(ScalarType::new("Date").description("An ISO-8601 calendar date"))
            .type_definition(
                InterfaceType::new("Node").field(Field::new("id", TypeRef::named("ID").required())),
            )
            .type_definition(
                ObjectType::new("Droid")
                    .implements("Node")
                    .field(Field::new("id", TypeRef::named("ID").required()))
                    .field(Field::new("primaryFunction", TypeRef::named("String")).deprecated("Use `function`.")),
            )
            .type_definition(UnionType::new("SearchResult").member("Droid").member("Human"))
            .type_definition(
                EnumType::new("Episode")
                    .value("NEWHOPE")
                    .value("EMPIRE")
                    .value(crate::EnumValue::new("JEDI").deprecated(crate::DEFAULT_DEPRECATION_REASON)),
            )
            .type_definition(
                InputObjectType::new("ReviewInput")
                    .field(InputValueDefinition::new("stars", TypeRef::named("Int").required()))
                    .field(InputValueDefinition::new("commentary", TypeRef::named("String")).default_value("none")),
            )
            .build();

        let sdl = print(&schema, &PrintOptions::default()).unwrap();

        assert_eq!(
            sdl,
            indoc! {r#"
                directive @cacheControl(maxAge: Int) on FIELD_DEFINITION | OBJECT

                """An ISO-8601 calendar date"""
                scalar Date

                type Droid implements Node {
                  id: ID!
                  primaryFunction: String @deprecated(reason: "Use `function`.")
                }

                enum Episode {
                  NEWHOPE
                  EMPIRE
                  JEDI @deprecated
                }

                interface Node {
                  id: ID!
                }

                input ReviewInput {
                  stars: Int!
                  commentary: String = "none"
                }

                union SearchResult = Droid | Human
            "#}
        );
    }

    #[test]
    fn print_named_type_reports_unknown_types() {
        let schema = star_wars();

        let sdl = print_named_type(&schema, "Character", &PrintOptions::default()).unwrap();
        assert_eq!(sdl, "type Character {\n  id: Int!\n  name: String!\n}");

        let error = print_named_type(&schema, "Planet", &PrintOptions::default()).unwrap_err();
        assert_eq!(error.to_string(), "Unknown type: Planet.");
    }

    #[test]
    fn reserved_types_print_nothing() {
        let schema = star_wars();

        for name in ["_Any", "_Service", "_Entity"] {
            assert_eq!(print_named_type(&schema, name, &PrintOptions::default()).unwrap(), "");
        }
    }

    #[test]
    fn empty_schema() {
        let sdl = print(&Schema::builder().build(), &PrintOptions::default()).unwrap();
        assert_eq!(sdl, "\n");
    }
}
