use super::{KeyFields, TypeRef, Value};

/// A named type of the schema.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeDefinition {
    Scalar(ScalarType),
    Object(ObjectType),
    /// An entity owned by this service.
    EntityObject(EntityObjectType),
    /// An entity owned by another service and extended by this one.
    EntityRef(EntityObjectType),
    Interface(InterfaceType),
    Union(UnionType),
    Enum(EnumType),
    InputObject(InputObjectType),
}

impl TypeDefinition {
    pub fn name(&self) -> &str {
        match self {
            TypeDefinition::Scalar(scalar) => &scalar.name,
            TypeDefinition::Object(object) => &object.name,
            TypeDefinition::EntityObject(entity) | TypeDefinition::EntityRef(entity) => &entity.object.name,
            TypeDefinition::Interface(interface) => &interface.name,
            TypeDefinition::Union(union) => &union.name,
            TypeDefinition::Enum(r#enum) => &r#enum.name,
            TypeDefinition::InputObject(input_object) => &input_object.name,
        }
    }

    pub fn description(&self) -> Option<&str> {
        match self {
            TypeDefinition::Scalar(scalar) => scalar.description.as_deref(),
            TypeDefinition::Object(object) => object.description.as_deref(),
            TypeDefinition::EntityObject(entity) | TypeDefinition::EntityRef(entity) => {
                entity.object.description.as_deref()
            }
            TypeDefinition::Interface(interface) => interface.description.as_deref(),
            TypeDefinition::Union(union) => union.description.as_deref(),
            TypeDefinition::Enum(r#enum) => r#enum.description.as_deref(),
            TypeDefinition::InputObject(input_object) => input_object.description.as_deref(),
        }
    }

    pub fn is_entity(&self) -> bool {
        matches!(self, TypeDefinition::EntityObject(_) | TypeDefinition::EntityRef(_))
    }

    /// The output fields of objects, entities and interfaces.
    pub fn fields(&self) -> Option<&[Field]> {
        match self {
            TypeDefinition::Object(object) => Some(&object.fields),
            TypeDefinition::EntityObject(entity) | TypeDefinition::EntityRef(entity) => Some(&entity.object.fields),
            TypeDefinition::Interface(interface) => Some(&interface.fields),
            _ => None,
        }
    }

    pub(crate) fn fields_mut(&mut self) -> Option<&mut Vec<Field>> {
        match self {
            TypeDefinition::Object(object) => Some(&mut object.fields),
            TypeDefinition::EntityObject(entity) | TypeDefinition::EntityRef(entity) => {
                Some(&mut entity.object.fields)
            }
            TypeDefinition::Interface(interface) => Some(&mut interface.fields),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScalarType {
    pub name: String,
    pub description: Option<String>,
}

impl ScalarType {
    pub fn new(name: impl Into<String>) -> Self {
        ScalarType {
            name: name.into(),
            description: None,
        }
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

impl From<ScalarType> for TypeDefinition {
    fn from(scalar: ScalarType) -> Self {
        TypeDefinition::Scalar(scalar)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ObjectType {
    pub name: String,
    pub description: Option<String>,
    pub fields: Vec<Field>,
    /// Names of the implemented interfaces.
    pub interfaces: Vec<String>,
}

impl ObjectType {
    pub fn new(name: impl Into<String>) -> Self {
        ObjectType {
            name: name.into(),
            description: None,
            fields: Vec::new(),
            interfaces: Vec::new(),
        }
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    #[must_use]
    pub fn implements(mut self, interface: impl Into<String>) -> Self {
        self.interfaces.push(interface.into());
        self
    }
}

impl From<ObjectType> for TypeDefinition {
    fn from(object: ObjectType) -> Self {
        TypeDefinition::Object(object)
    }
}

/// An object type carrying one or more `@key` field sets.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityObjectType {
    pub object: ObjectType,
    pub keys: Vec<KeyFields>,
}

impl EntityObjectType {
    pub fn new(name: impl Into<String>) -> Self {
        EntityObjectType {
            object: ObjectType::new(name),
            keys: Vec::new(),
        }
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.object = self.object.description(description);
        self
    }

    #[must_use]
    pub fn key(mut self, fields: KeyFields) -> Self {
        self.keys.push(fields);
        self
    }

    #[must_use]
    pub fn field(mut self, field: Field) -> Self {
        self.object = self.object.field(field);
        self
    }

    #[must_use]
    pub fn implements(mut self, interface: impl Into<String>) -> Self {
        self.object = self.object.implements(interface);
        self
    }

    /// Marks the entity as extended from another service (`extend type ...`).
    pub fn into_entity_ref(self) -> TypeDefinition {
        TypeDefinition::EntityRef(self)
    }
}

impl From<EntityObjectType> for TypeDefinition {
    fn from(entity: EntityObjectType) -> Self {
        TypeDefinition::EntityObject(entity)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct InterfaceType {
    pub name: String,
    pub description: Option<String>,
    pub fields: Vec<Field>,
}

impl InterfaceType {
    pub fn new(name: impl Into<String>) -> Self {
        InterfaceType {
            name: name.into(),
            description: None,
            fields: Vec::new(),
        }
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }
}

impl From<InterfaceType> for TypeDefinition {
    fn from(interface: InterfaceType) -> Self {
        TypeDefinition::Interface(interface)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UnionType {
    pub name: String,
    pub description: Option<String>,
    /// Names of the member object types.
    pub members: Vec<String>,
}

impl UnionType {
    pub fn new(name: impl Into<String>) -> Self {
        UnionType {
            name: name.into(),
            description: None,
            members: Vec::new(),
        }
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn member(mut self, member: impl Into<String>) -> Self {
        self.members.push(member.into());
        self
    }
}

impl From<UnionType> for TypeDefinition {
    fn from(union: UnionType) -> Self {
        TypeDefinition::Union(union)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnumType {
    pub name: String,
    pub description: Option<String>,
    pub values: Vec<EnumValue>,
}

impl EnumType {
    pub fn new(name: impl Into<String>) -> Self {
        EnumType {
            name: name.into(),
            description: None,
            values: Vec::new(),
        }
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn value(mut self, value: impl Into<EnumValue>) -> Self {
        self.values.push(value.into());
        self
    }
}

impl From<EnumType> for TypeDefinition {
    fn from(r#enum: EnumType) -> Self {
        TypeDefinition::Enum(r#enum)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnumValue {
    pub name: String,
    pub description: Option<String>,
    pub deprecation_reason: Option<String>,
}

impl EnumValue {
    pub fn new(name: impl Into<String>) -> Self {
        EnumValue {
            name: name.into(),
            description: None,
            deprecation_reason: None,
        }
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn deprecated(mut self, reason: impl Into<String>) -> Self {
        self.deprecation_reason = Some(reason.into());
        self
    }
}

impl From<&str> for EnumValue {
    fn from(name: &str) -> Self {
        EnumValue::new(name)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct InputObjectType {
    pub name: String,
    pub description: Option<String>,
    pub fields: Vec<InputValueDefinition>,
}

impl InputObjectType {
    pub fn new(name: impl Into<String>) -> Self {
        InputObjectType {
            name: name.into(),
            description: None,
            fields: Vec::new(),
        }
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn field(mut self, field: InputValueDefinition) -> Self {
        self.fields.push(field);
        self
    }
}

impl From<InputObjectType> for TypeDefinition {
    fn from(input_object: InputObjectType) -> Self {
        TypeDefinition::InputObject(input_object)
    }
}

/// An output field of an object, entity or interface.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub name: String,
    pub description: Option<String>,
    pub arguments: Vec<InputValueDefinition>,
    pub ty: TypeRef,
    pub deprecation_reason: Option<String>,
    pub federation: FieldFederation,
}

/// The federation directives applied to a field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldFederation {
    /// `@external`: the field is owned by another service.
    pub external: bool,
    /// `@provides(fields: "...")`
    pub provides: Option<KeyFields>,
    /// `@requires(fields: "...")`
    pub requires: Option<KeyFields>,
}

impl Field {
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Field {
            name: name.into(),
            description: None,
            arguments: Vec::new(),
            ty,
            deprecation_reason: None,
            federation: FieldFederation::default(),
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
    pub fn deprecated(mut self, reason: impl Into<String>) -> Self {
        self.deprecation_reason = Some(reason.into());
        self
    }

    #[must_use]
    pub fn external(mut self) -> Self {
        self.federation.external = true;
        self
    }

    #[must_use]
    pub fn provides(mut self, fields: KeyFields) -> Self {
        self.federation.provides = Some(fields);
        self
    }

    #[must_use]
    pub fn requires(mut self, fields: KeyFields) -> Self {
        self.federation.requires = Some(fields);
        self
    }
}

/// A field argument, directive argument or input object field.
#[derive(Debug, Clone, PartialEq)]
pub struct InputValueDefinition {
    pub name: String,
    pub description: Option<String>,
    pub ty: TypeRef,
    /// `None` when there is no default. A `null` default is `Some(Value::Null)`.
    pub default_value: Option<Value>,
}

impl InputValueDefinition {
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        InputValueDefinition {
            name: name.into(),
            description: None,
            ty,
            default_value: None,
        }
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn default_value(mut self, value: impl Into<Value>) -> Self {
        self.default_value = Some(value.into());
        self
    }
}
