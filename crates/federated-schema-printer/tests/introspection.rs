#![allow(unused_crate_dependencies)]

use federated_schema_printer::{
    print_introspection_schema, print_named_type, Field, ObjectType, PrintOptions, ScalarType, Schema, TypeRef,
};
use indoc::indoc;
use pretty_assertions::assert_eq;

fn schema() -> Schema {
    Schema::builder()
        .type_definition(ScalarType::new("Date"))
        .type_definition(ObjectType::new("Query").field(Field::new("today", TypeRef::named("Date"))))
        .build_federated()
}

#[test]
fn only_specified_members_are_printed() {
    let sdl = print_introspection_schema(&schema(), &PrintOptions::default()).unwrap();

    let definitions: Vec<_> = sdl
        .lines()
        .filter(|line| ["directive @", "type ", "enum "].iter().any(|prefix| line.starts_with(prefix)))
        .collect();

    assert_eq!(
        definitions,
        [
            "directive @include(",
            "directive @skip(",
            "directive @deprecated(",
            "type __Directive {",
            "enum __DirectiveLocation {",
            "type __EnumValue {",
            "type __Field {",
            "type __InputValue {",
            "type __Schema {",
            "type __Type {",
            "enum __TypeKind {",
        ]
    );
}

#[test]
fn deprecated_directive() {
    let sdl = print_introspection_schema(&schema(), &PrintOptions::default()).unwrap();

    let expected = indoc! {r#"
        """Marks an element of a GraphQL schema as no longer supported."""
        directive @deprecated(
          """
          Explains why this element was deprecated, usually also including a suggestion
          for how to access supported similar data. Formatted using the Markdown syntax
          (as specified by [CommonMark](https://commonmark.org/).
          """
          reason: String = "No longer supported"
        ) on FIELD_DEFINITION | ENUM_VALUE
    "#};

    assert!(sdl.contains(expected), "{sdl}");
}

#[test]
fn schema_type() {
    let sdl = print_named_type(&schema(), "__Schema", &PrintOptions::default()).unwrap();

    insta::assert_snapshot!(sdl, @r###"
    """
    A GraphQL Schema defines the capabilities of a GraphQL server. It exposes all
    available types and directives on the server, as well as the entry points for
    query, mutation, and subscription operations.
    """
    type __Schema {
      """A list of all types supported by this server."""
      types: [__Type!]!

      """The type that query operations will be rooted at."""
      queryType: __Type!

      """
      If this server supports mutation, the type that mutation operations will be rooted at.
      """
      mutationType: __Type

      """
      If this server support subscription, the type that subscription operations will be rooted at.
      """
      subscriptionType: __Type

      """A list of all directives supported by this server."""
      directives: [__Directive!]!
    }
    "###);
}

#[test]
fn include_deprecated_arguments() {
    let sdl = print_named_type(&schema(), "__Type", &PrintOptions::default()).unwrap();

    assert!(sdl.contains("\n  fields(includeDeprecated: Boolean = false): [__Field!]\n"));
    assert!(sdl.contains("\n  enumValues(includeDeprecated: Boolean = false): [__EnumValue!]\n"));
}

#[test]
fn comment_descriptions() {
    let options = PrintOptions::default().with_comment_descriptions(true);
    let sdl = print_named_type(&schema(), "__TypeKind", &options).unwrap();

    insta::assert_snapshot!(sdl, @r###"
    # An enum describing what kind of type a given `__Type` is.
    enum __TypeKind {
      # Indicates this type is a scalar.
      SCALAR

      # Indicates this type is an object. `fields` and `interfaces` are valid fields.
      OBJECT

      # Indicates this type is an interface. `fields` and `possibleTypes` are valid fields.
      INTERFACE

      # Indicates this type is a union. `possibleTypes` is a valid field.
      UNION

      # Indicates this type is an enum. `enumValues` is a valid field.
      ENUM

      # Indicates this type is an input object. `inputFields` is a valid field.
      INPUT_OBJECT

      # Indicates this type is a list. `ofType` is a valid field.
      LIST

      # Indicates this type is a non-null. `ofType` is a valid field.
      NON_NULL
    }
    "###);
}
