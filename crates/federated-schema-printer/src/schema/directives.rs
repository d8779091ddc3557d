use super::{InputValueDefinition, TypeRef, DEFAULT_DEPRECATION_REASON};

const SPECIFIED_DIRECTIVES: &[&str] = &["include", "skip", "deprecated"];

/// A directive definition, e.g. `directive @key(fields: String!) on OBJECT | INTERFACE`.
#[derive(Debug, Clone, PartialEq)]
pub struct DirectiveDefinition {
    pub name: String,
    pub description: Option<String>,
    pub arguments: Vec<InputValueDefinition>,
    pub locations: Vec<DirectiveLocation>,
}

impl DirectiveDefinition {
    pub fn new(name: impl Into<String>) -> Self {
        DirectiveDefinition {
            name: name.into(),
            description: None,
            arguments: Vec::new(),
            locations: Vec::new(),
        }
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn argument(mut self, argument: InputValueDefinition) -> Self {
        self.arguments.push(argument);
        self
    }

    #[must_use]
    pub fn location(mut self, location: DirectiveLocation) -> Self {
        self.locations.push(location);
        self
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
    strum::EnumMessage,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum DirectiveLocation {
    #[strum(message = "Location adjacent to a query operation.")]
    Query,
    #[strum(message = "Location adjacent to a mutation operation.")]
    Mutation,
    #[strum(message = "Location adjacent to a subscription operation.")]
    Subscription,
    #[strum(message = "Location adjacent to a field.")]
    Field,
    #[strum(message = "Location adjacent to a fragment definition.")]
    FragmentDefinition,
    #[strum(message = "Location adjacent to a fragment spread.")]
    FragmentSpread,
    #[strum(message = "Location adjacent to an inline fragment.")]
    InlineFragment,
    #[strum(message = "Location adjacent to a variable definition.")]
    VariableDefinition,
    #[strum(message = "Location adjacent to a schema definition.")]
    Schema,
    #[strum(message = "Location adjacent to a scalar definition.")]
    Scalar,
    #[strum(message = "Location adjacent to an object type definition.")]
    Object,
    #[strum(message = "Location adjacent to a field definition.")]
    FieldDefinition,
    #[strum(message = "Location adjacent to an argument definition.")]
    ArgumentDefinition,
    #[strum(message = "Location adjacent to an interface definition.")]
    Interface,
    #[strum(message = "Location adjacent to a union definition.")]
    Union,
    #[strum(message = "Location adjacent to an enum definition.")]
    Enum,
    #[strum(message = "Location adjacent to an enum value definition.")]
    EnumValue,
    #[strum(message = "Location adjacent to an input object type definition.")]
    InputObject,
    #[strum(message = "Location adjacent to an input object field definition.")]
    InputFieldDefinition,
}

/// Whether the directive is one of the directives defined by the GraphQL specification.
pub fn is_specified_directive(directive: &DirectiveDefinition) -> bool {
    SPECIFIED_DIRECTIVES.contains(&directive.name.as_str())
}

/// `@include`, `@skip` and `@deprecated`.
pub fn specified_directives() -> [DirectiveDefinition; 3] {
    [
        DirectiveDefinition::new("include")
            .description("Directs the executor to include this field or fragment only when the `if` argument is true.")
            .argument(
                InputValueDefinition::new("if", TypeRef::named("Boolean").required())
                    .description("Included when true."),
            )
            .location(DirectiveLocation::Field)
            .location(DirectiveLocation::FragmentSpread)
            .location(DirectiveLocation::InlineFragment),
        DirectiveDefinition::new("skip")
            .description("Directs the executor to skip this field or fragment when the `if` argument is true.")
            .argument(
                InputValueDefinition::new("if", TypeRef::named("Boolean").required()).description("Skipped when true."),
            )
            .location(DirectiveLocation::Field)
            .location(DirectiveLocation::FragmentSpread)
            .location(DirectiveLocation::InlineFragment),
        DirectiveDefinition::new("deprecated")
            .description("Marks an element of a GraphQL schema as no longer supported.")
            .argument(
                InputValueDefinition::new("reason", TypeRef::named("String"))
                    .description(
                        "Explains why this element was deprecated, usually also including a suggestion for how to \
                         access supported similar data. Formatted using the Markdown syntax (as specified by \
                         [CommonMark](https://commonmark.org/).",
                    )
                    .default_value(DEFAULT_DEPRECATION_REASON),
            )
            .location(DirectiveLocation::FieldDefinition)
            .location(DirectiveLocation::EnumValue),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::{EnumMessage, IntoEnumIterator};

    #[test]
    fn locations_render_in_screaming_snake_case() {
        assert_eq!(DirectiveLocation::FieldDefinition.to_string(), "FIELD_DEFINITION");
        assert_eq!(DirectiveLocation::InputObject.as_ref(), "INPUT_OBJECT");
        assert_eq!(
            "FRAGMENT_SPREAD".parse::<DirectiveLocation>().unwrap(),
            DirectiveLocation::FragmentSpread
        );
    }

    #[test]
    fn every_location_is_documented() {
        assert_eq!(DirectiveLocation::iter().count(), 19);
        assert!(DirectiveLocation::iter().all(|location| location.get_message().is_some()));
    }

    #[test]
    fn specified_directives_are_recognized_by_name() {
        assert!(specified_directives().iter().all(is_specified_directive));
        assert!(!is_specified_directive(&DirectiveDefinition::new("key")));
    }
}
