//! The standard scalars and the introspection types every schema carries.

use strum::{EnumMessage, IntoEnumIterator};

use super::{
    DirectiveLocation, EnumType, EnumValue, Field, InputValueDefinition, ObjectType, ScalarType, TypeDefinition,
    TypeRef,
};

pub const BUILTIN_SCALARS: &[&str] = &["ID", "String", "Int", "Float", "Boolean"];

pub const INTROSPECTION_TYPES: &[&str] = &[
    "__Schema",
    "__Type",
    "__TypeKind",
    "__Field",
    "__InputValue",
    "__EnumValue",
    "__Directive",
    "__DirectiveLocation",
];

pub fn is_builtin_scalar(name: &str) -> bool {
    BUILTIN_SCALARS.contains(&name)
}

pub fn is_introspection_type(name: &str) -> bool {
    INTROSPECTION_TYPES.contains(&name)
}

/// Built-in scalars and introspection types.
pub fn is_builtin_type(name: &str) -> bool {
    is_builtin_scalar(name) || is_introspection_type(name)
}

pub fn builtin_scalars() -> Vec<TypeDefinition> {
    vec![
        ScalarType::new("ID")
            .description(
                "The `ID` scalar type represents a unique identifier, often used to refetch an object or as key for \
                 a cache. The ID type appears in a JSON response as a String; however, it is not intended to be \
                 human-readable. When expected as an input type, any string (such as `\"4\"`) or integer (such as \
                 `4`) input value will be accepted as an ID.",
            )
            .into(),
        ScalarType::new("String")
            .description(
                "The `String` scalar type represents textual data, represented as UTF-8 character sequences. The \
                 String type is most often used by GraphQL to represent free-form human-readable text.",
            )
            .into(),
        ScalarType::new("Int")
            .description(
                "The `Int` scalar type represents non-fractional signed whole numeric values. Int can represent \
                 values between -(2^31) and 2^31 - 1.",
            )
            .into(),
        ScalarType::new("Float")
            .description(
                "The `Float` scalar type represents signed double-precision fractional values as specified by [IEEE \
                 754](http://en.wikipedia.org/wiki/IEEE_floating_point).",
            )
            .into(),
        ScalarType::new("Boolean")
            .description("The `Boolean` scalar type represents `true` or `false`.")
            .into(),
    ]
}

fn named(name: &str) -> TypeRef {
    TypeRef::named(name)
}

fn required(name: &str) -> TypeRef {
    TypeRef::named(name).required()
}

/// `[name!]!`
fn required_list(name: &str) -> TypeRef {
    TypeRef::named(name).required().list().required()
}

/// `[name!]`
fn nullable_list(name: &str) -> TypeRef {
    TypeRef::named(name).required().list()
}

fn include_deprecated() -> InputValueDefinition {
    InputValueDefinition::new("includeDeprecated", named("Boolean")).default_value(false)
}

pub fn introspection_types() -> Vec<TypeDefinition> {
    vec![
        schema_type().into(),
        type_type().into(),
        type_kind().into(),
        field_type().into(),
        input_value_type().into(),
        enum_value_type().into(),
        directive_type().into(),
        directive_location().into(),
    ]
}

fn schema_type() -> ObjectType {
    ObjectType::new("__Schema")
        .description(
            "A GraphQL Schema defines the capabilities of a GraphQL server. It exposes all available types and \
             directives on the server, as well as the entry points for query, mutation, and subscription operations.",
        )
        .field(
            Field::new("types", required_list("__Type")).description("A list of all types supported by this server."),
        )
        .field(
            Field::new("queryType", required("__Type"))
                .description("The type that query operations will be rooted at."),
        )
        .field(Field::new("mutationType", named("__Type")).description(
            "If this server supports mutation, the type that mutation operations will be rooted at.",
        ))
        .field(Field::new("subscriptionType", named("__Type")).description(
            "If this server support subscription, the type that subscription operations will be rooted at.",
        ))
        .field(
            Field::new("directives", required_list("__Directive"))
                .description("A list of all directives supported by this server."),
        )
}

fn type_type() -> ObjectType {
    ObjectType::new("__Type")
        .description(
            "The fundamental unit of any GraphQL Schema is the type. There are many kinds of types in GraphQL as \
             represented by the `__TypeKind` enum.\n\nDepending on the kind of a type, certain fields describe \
             information about that type. Scalar types provide no information beyond a name and description, while \
             Enum types provide their values. Object and Interface types provide the fields they describe. Abstract \
             types, Union and Interface, provide the Object types possible at runtime. List and NonNull types \
             compose other types.",
        )
        .field(Field::new("kind", required("__TypeKind")))
        .field(Field::new("name", named("String")))
        .field(Field::new("description", named("String")))
        .field(Field::new("fields", nullable_list("__Field")).argument(include_deprecated()))
        .field(Field::new("interfaces", nullable_list("__Type")))
        .field(Field::new("possibleTypes", nullable_list("__Type")))
        .field(Field::new("enumValues", nullable_list("__EnumValue")).argument(include_deprecated()))
        .field(Field::new("inputFields", nullable_list("__InputValue")))
        .field(Field::new("ofType", named("__Type")))
}

fn type_kind() -> EnumType {
    const KINDS: [(&str, &str); 8] = [
        ("SCALAR", "Indicates this type is a scalar."),
        (
            "OBJECT",
            "Indicates this type is an object. `fields` and `interfaces` are valid fields.",
        ),
        (
            "INTERFACE",
            "Indicates this type is an interface. `fields` and `possibleTypes` are valid fields.",
        ),
        (
            "UNION",
            "Indicates this type is a union. `possibleTypes` is a valid field.",
        ),
        ("ENUM", "Indicates this type is an enum. `enumValues` is a valid field."),
        (
            "INPUT_OBJECT",
            "Indicates this type is an input object. `inputFields` is a valid field.",
        ),
        ("LIST", "Indicates this type is a list. `ofType` is a valid field."),
        ("NON_NULL", "Indicates this type is a non-null. `ofType` is a valid field."),
    ];

    KINDS.into_iter().fold(
        EnumType::new("__TypeKind").description("An enum describing what kind of type a given `__Type` is."),
        |kinds, (name, description)| kinds.value(EnumValue::new(name).description(description)),
    )
}

fn field_type() -> ObjectType {
    ObjectType::new("__Field")
        .description(
            "Object and Interface types are described by a list of Fields, each of which has a name, potentially a \
             list of arguments, and a return type.",
        )
        .field(Field::new("name", required("String")))
        .field(Field::new("description", named("String")))
        .field(Field::new("args", required_list("__InputValue")))
        .field(Field::new("type", required("__Type")))
        .field(Field::new("isDeprecated", required("Boolean")))
        .field(Field::new("deprecationReason", named("String")))
}

fn input_value_type() -> ObjectType {
    ObjectType::new("__InputValue")
        .description(
            "Arguments provided to Fields or Directives and the input fields of an InputObject are represented as \
             Input Values which describe their type and optionally a default value.",
        )
        .field(Field::new("name", required("String")))
        .field(Field::new("description", named("String")))
        .field(Field::new("type", required("__Type")))
        .field(
            Field::new("defaultValue", named("String")).description(
                "A GraphQL-formatted string representing the default value for this input value.",
            ),
        )
}

fn enum_value_type() -> ObjectType {
    ObjectType::new("__EnumValue")
        .description(
            "One possible value for a given Enum. Enum values are unique values, not a placeholder for a string or \
             numeric value. However an Enum value is returned in a JSON response as a string.",
        )
        .field(Field::new("name", required("String")))
        .field(Field::new("description", named("String")))
        .field(Field::new("isDeprecated", required("Boolean")))
        .field(Field::new("deprecationReason", named("String")))
}

fn directive_type() -> ObjectType {
    ObjectType::new("__Directive")
        .description(
            "A Directive provides a way to describe alternate runtime execution and type validation behavior in a \
             GraphQL document.\n\nIn some cases, you need to provide options to alter GraphQL's execution behavior \
             in ways field arguments will not suffice, such as conditionally including or skipping a field. \
             Directives provide this by describing additional information to the executor.",
        )
        .field(Field::new("name", required("String")))
        .field(Field::new("description", named("String")))
        .field(Field::new("isRepeatable", required("Boolean")))
        .field(Field::new("locations", required_list("__DirectiveLocation")))
        .field(Field::new("args", required_list("__InputValue")))
}

fn directive_location() -> EnumType {
    DirectiveLocation::iter().fold(
        EnumType::new("__DirectiveLocation").description(
            "A Directive can be adjacent to many parts of the GraphQL language, a __DirectiveLocation describes one \
             such possible adjacencies.",
        ),
        |locations, location| {
            let value = EnumValue::new(location.to_string());

            locations.value(match location.get_message() {
                Some(message) => value.description(message),
                None => value,
            })
        },
    )
}
