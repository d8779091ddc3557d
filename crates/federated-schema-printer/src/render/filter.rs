use crate::{
    federation::is_federation_directive,
    introspection::{is_builtin_type, is_introspection_type},
    is_specified_directive, DirectiveDefinition, Schema, TypeDefinition,
};

/// Selects the schema members a printer renders.
#[derive(Clone, Copy)]
pub struct SchemaFilter {
    directives: fn(&DirectiveDefinition) -> bool,
    types: fn(&TypeDefinition) -> bool,
}

impl SchemaFilter {
    /// The user's directives and types: no specified or federation directive, no built-in scalar or
    /// introspection type.
    pub const FEDERATED_SDL: SchemaFilter = SchemaFilter {
        directives: is_user_directive,
        types: is_user_type,
    };

    /// Only the specified directives and the introspection types.
    pub const INTROSPECTION: SchemaFilter = SchemaFilter {
        directives: is_specified_directive,
        types: is_introspection_definition,
    };

    pub fn new(directives: fn(&DirectiveDefinition) -> bool, types: fn(&TypeDefinition) -> bool) -> Self {
        SchemaFilter { directives, types }
    }

    /// The matching directives, in schema order.
    pub fn filter_directives<'a>(&self, schema: &'a Schema) -> Vec<&'a DirectiveDefinition> {
        schema
            .directives()
            .iter()
            .filter(|directive| (self.directives)(directive))
            .collect()
    }

    /// The matching types, sorted by name.
    pub fn filter_types<'a>(&self, schema: &'a Schema) -> Vec<&'a TypeDefinition> {
        let mut types: Vec<_> = schema.types().filter(|ty| (self.types)(ty)).collect();
        types.sort_by(|a, b| a.name().cmp(b.name()));
        types
    }
}

fn is_user_directive(directive: &DirectiveDefinition) -> bool {
    !is_specified_directive(directive) && !is_federation_directive(directive)
}

fn is_user_type(definition: &TypeDefinition) -> bool {
    !is_builtin_type(definition.name())
}

fn is_introspection_definition(definition: &TypeDefinition) -> bool {
    is_introspection_type(definition.name())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{EntityObjectType, ObjectType, ScalarType};

    fn schema() -> Schema {
        Schema::builder()
            .type_definition(ScalarType::new("Date"))
            .type_definition(ObjectType::new("Album"))
            .type_definition(EntityObjectType::new("Track").key("id".parse().unwrap()))
            .directive(DirectiveDefinition::new("cacheControl"))
            .directive(DirectiveDefinition::new("auth"))
            .build_federated()
    }

    fn names(types: Vec<&TypeDefinition>) -> Vec<&str> {
        types.into_iter().map(TypeDefinition::name).collect()
    }

    #[test]
    fn federated_sdl_keeps_user_members() {
        let schema = schema();
        let filter = SchemaFilter::FEDERATED_SDL;

        let directives: Vec<_> = filter
            .filter_directives(&schema)
            .into_iter()
            .map(|directive| directive.name.as_str())
            .collect();

        assert_eq!(directives, ["cacheControl", "auth"]);
        assert_eq!(
            names(filter.filter_types(&schema)),
            ["Album", "Date", "Query", "Track", "_Any", "_Entity", "_Service"]
        );
    }

    #[test]
    fn introspection_keeps_specified_members() {
        let schema = schema();
        let filter = SchemaFilter::INTROSPECTION;

        let directives: Vec<_> = filter
            .filter_directives(&schema)
            .into_iter()
            .map(|directive| directive.name.as_str())
            .collect();

        assert_eq!(directives, ["include", "skip", "deprecated"]);
        assert_eq!(
            names(filter.filter_types(&schema)),
            [
                "__Directive",
                "__DirectiveLocation",
                "__EnumValue",
                "__Field",
                "__InputValue",
                "__Schema",
                "__Type",
                "__TypeKind"
            ]
        );
    }

    #[test]
    fn custom_filters() {
        let schema = schema();
        let filter = SchemaFilter::new(|_| false, TypeDefinition::is_entity);

        assert!(filter.filter_directives(&schema).is_empty());
        assert_eq!(names(filter.filter_types(&schema)), ["Track"]);
    }
}
