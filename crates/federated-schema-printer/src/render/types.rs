use std::fmt::{self, Write};

use itertools::Itertools as _;

use super::{
    description::Description,
    display_utils::{write_block, FederationDirective, InputValueDisplay, INDENT},
    fields::{printable_fields, write_deprecated, write_fields},
};
use crate::{
    federation::{is_extended_root_type, RESERVED_TYPE_ANY, RESERVED_TYPE_ENTITY, RESERVED_TYPE_SERVICE},
    EnumType, InputObjectType, InterfaceType, KeyFields, ObjectType, PrintOptions, ScalarType, TypeDefinition,
    UnionType,
};

pub(super) fn write_type(definition: &TypeDefinition, options: &PrintOptions, sdl: &mut String) -> fmt::Result {
    match definition {
        TypeDefinition::Scalar(scalar) if scalar.name == RESERVED_TYPE_ANY => skip_reserved(definition),
        TypeDefinition::Scalar(scalar) => write_scalar(scalar, options, sdl),
        TypeDefinition::Object(object) if object.name == RESERVED_TYPE_SERVICE => skip_reserved(definition),
        TypeDefinition::Object(object) if printable_fields(&object.name, &object.fields).next().is_none() => {
            tracing::trace!(name = %object.name, "skipping object type without printable fields");
            Ok(())
        }
        TypeDefinition::Object(object) => {
            let extend = is_extended_root_type(&object.name);
            write_object(object, &[], extend, options, sdl)
        }
        TypeDefinition::EntityObject(entity) => write_object(&entity.object, &entity.keys, false, options, sdl),
        TypeDefinition::EntityRef(entity) => write_object(&entity.object, &entity.keys, true, options, sdl),
        TypeDefinition::Interface(interface) => write_interface(interface, options, sdl),
        TypeDefinition::Union(union) if union.name == RESERVED_TYPE_ENTITY => skip_reserved(definition),
        TypeDefinition::Union(union) => write_union(union, options, sdl),
        TypeDefinition::Enum(r#enum) => write_enum(r#enum, options, sdl),
        TypeDefinition::InputObject(input_object) => write_input_object(input_object, options, sdl),
    }
}

fn skip_reserved(definition: &TypeDefinition) -> fmt::Result {
    tracing::trace!(name = definition.name(), "skipping reserved federation type");
    Ok(())
}

fn write_scalar(scalar: &ScalarType, options: &PrintOptions, sdl: &mut String) -> fmt::Result {
    let description = Description::new(scalar.description.as_deref(), options);
    write!(sdl, "{description}scalar {}", scalar.name)
}

fn write_object(
    object: &ObjectType,
    keys: &[KeyFields],
    extend: bool,
    options: &PrintOptions,
    sdl: &mut String,
) -> fmt::Result {
    write!(sdl, "{}", Description::new(object.description.as_deref(), options))?;

    if extend {
        sdl.push_str("extend ");
    }

    write!(sdl, "type {}", object.name)?;

    if !object.interfaces.is_empty() {
        write!(sdl, " implements {}", object.interfaces.iter().format(" & "))?;
    }

    for key in keys {
        write!(sdl, " {}", FederationDirective::Key(key))?;
    }

    write_block(sdl, |sdl| write_fields(&object.name, &object.fields, options, sdl))
}

fn write_interface(interface: &InterfaceType, options: &PrintOptions, sdl: &mut String) -> fmt::Result {
    write!(sdl, "{}", Description::new(interface.description.as_deref(), options))?;
    write!(sdl, "interface {}", interface.name)?;
    write_block(sdl, |sdl| write_fields(&interface.name, &interface.fields, options, sdl))
}

fn write_union(union: &UnionType, options: &PrintOptions, sdl: &mut String) -> fmt::Result {
    let description = Description::new(union.description.as_deref(), options);
    write!(sdl, "{description}union {} = {}", union.name, union.members.iter().format(" | "))
}

fn write_enum(r#enum: &EnumType, options: &PrintOptions, sdl: &mut String) -> fmt::Result {
    write!(sdl, "{}", Description::new(r#enum.description.as_deref(), options))?;
    write!(sdl, "enum {}", r#enum.name)?;

    write_block(sdl, |sdl| {
        for (idx, value) in r#enum.values.iter().enumerate() {
            if idx > 0 {
                sdl.push('\n');
            }

            let description = Description::new(value.description.as_deref(), options).indented(INDENT, idx == 0);

            write!(sdl, "{description}{INDENT}{}", value.name)?;
            write_deprecated(value.deprecation_reason.as_deref(), sdl)?;
        }

        Ok(())
    })
}

fn write_input_object(input_object: &InputObjectType, options: &PrintOptions, sdl: &mut String) -> fmt::Result {
    write!(sdl, "{}", Description::new(input_object.description.as_deref(), options))?;
    write!(sdl, "input {}", input_object.name)?;

    write_block(sdl, |sdl| {
        for (idx, field) in input_object.fields.iter().enumerate() {
            if idx > 0 {
                sdl.push('\n');
            }

            let description = Description::new(field.description.as_deref(), options).indented(INDENT, idx == 0);

            write!(sdl, "{description}{INDENT}{}", InputValueDisplay(field))?;
        }

        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{print_type, EntityObjectType, EnumValue, Field, InputValueDefinition, TypeRef};
    use pretty_assertions::assert_eq;

    fn render(definition: impl Into<TypeDefinition>) -> String {
        print_type(&definition.into(), &PrintOptions::default()).unwrap()
    }

    fn review() -> EntityObjectType {
        EntityObjectType::new("Review")
            .implements("Node")
            .implements("Timestamped")
            .key("id".parse().unwrap())
            .key("author { id } createdAt".parse().unwrap())
            .field(Field::new("id", TypeRef::named("ID").required()))
    }

    #[test]
    fn entity_keys_follow_the_interfaces() {
        insta::assert_snapshot!(render(review()), @r###"
        type Review implements Node & Timestamped @key(fields: "id") @key(fields: "author { id } createdAt") {
          id: ID!
        }
        "###);
    }

    #[test]
    fn entity_refs_are_extended() {
        let user = EntityObjectType::new("User")
            .key("id".parse().unwrap())
            .field(Field::new("id", TypeRef::named("ID").required()).external())
            .field(Field::new("reviews", "[Review!]!".parse().unwrap()));

        insta::assert_snapshot!(render(user.into_entity_ref()), @r###"
        extend type User @key(fields: "id") {
          id: ID! @external
          reviews: [Review!]!
        }
        "###);
    }

    #[rstest::rstest]
    #[case("Query", "extend type Query {\n  ping: String\n}")]
    #[case("Mutation", "extend type Mutation {\n  ping: String\n}")]
    #[case("Subscription", "type Subscription {\n  ping: String\n}")]
    fn root_types(#[case] name: &str, #[case] expected: &str) {
        let object = ObjectType::new(name).field(Field::new("ping", TypeRef::named("String")));
        assert_eq!(render(object), expected);
    }

    #[test]
    fn objects_without_printable_fields_are_skipped() {
        assert_eq!(render(ObjectType::new("Empty")), "");

        let query = ObjectType::new("Query").field(Field::new("_service", TypeRef::named("_Service").required()));
        assert_eq!(render(query), "");
    }

    #[test]
    fn entities_without_fields_keep_their_keys() {
        let product = EntityObjectType::new("Product").key("upc".parse().unwrap());

        assert_eq!(render(product.clone()), "type Product @key(fields: \"upc\") {\n\n}");
        assert_eq!(
            render(product.into_entity_ref()),
            "extend type Product @key(fields: \"upc\") {\n\n}"
        );
    }

    #[test]
    fn reserved_types_are_skipped() {
        assert_eq!(render(ScalarType::new("_Any")), "");
        assert_eq!(render(UnionType::new("_Entity").member("Review")), "");
        assert_eq!(
            render(ObjectType::new("_Service").field(Field::new("sdl", TypeRef::named("String")))),
            ""
        );
    }

    #[test]
    fn interfaces_keep_their_block_even_when_empty() {
        assert_eq!(render(InterfaceType::new("Marker")), "interface Marker {\n\n}");
    }

    #[test]
    fn enum_values_with_descriptions() {
        let episode = EnumType::new("Episode")
            .description("The original trilogy")
            .value(EnumValue::new("NEWHOPE").description("Released in 1977."))
            .value(EnumValue::new("EMPIRE").description("Released in 1980."))
            .value(EnumValue::new("JEDI").deprecated("Not canon"));

        insta::assert_snapshot!(render(episode), @r###"
        """The original trilogy"""
        enum Episode {
          """Released in 1977."""
          NEWHOPE

          """Released in 1980."""
          EMPIRE
          JEDI @deprecated(reason: "Not canon")
        }
        "###);
    }

    #[test]
    fn input_objects_with_defaults() {
        let input = InputObjectType::new("ReviewFilter")
            .field(InputValueDefinition::new("minStars", TypeRef::named("Int")).default_value(3))
            .field(
                InputValueDefinition::new("episodes", "[Episode!]".parse().unwrap())
                    .description("Restrict to these films")
                    .default_value(vec![crate::Value::Enum("NEWHOPE".into())]),
            );

        insta::assert_snapshot!(render(input), @r###"
        input ReviewFilter {
          minStars: Int = 3

          """Restrict to these films"""
          episodes: [Episode!] = [NEWHOPE]
        }
        "###);
    }

    #[test]
    fn unions_and_scalars() {
        assert_eq!(
            render(UnionType::new("SearchResult").member("Human").member("Droid")),
            "union SearchResult = Human | Droid"
        );
        assert_eq!(
            render(ScalarType::new("Date").description("A calendar date, \"YYYY-MM-DD\"")),
            "\"\"\"\nA calendar date, \"YYYY-MM-DD\"\n\"\"\"\nscalar Date"
        );
    }
}
