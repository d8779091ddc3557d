use std::fmt::{self, Write};

use itertools::Itertools as _;

use super::{
    description::Description,
    display_utils::{write_quoted, FederationDirective, InputValueDisplay, INDENT},
};
use crate::{
    federation::{RESERVED_FIELD_ENTITIES, RESERVED_FIELD_SERVICE, RESERVED_TYPE_QUERY},
    Field, FieldFederation, InputValueDefinition, PrintOptions, DEFAULT_DEPRECATION_REASON,
};

/// The fields of `type_name` that appear in the SDL. The federation entry points of `Query` are hidden.
pub(super) fn printable_fields<'a>(type_name: &str, fields: &'a [Field]) -> impl Iterator<Item = &'a Field> {
    let is_query = type_name == RESERVED_TYPE_QUERY;

    fields
        .iter()
        .filter(move |field| !(is_query && is_federation_entry_point(&field.name)))
}

fn is_federation_entry_point(field_name: &str) -> bool {
    field_name == RESERVED_FIELD_SERVICE || field_name == RESERVED_FIELD_ENTITIES
}

pub(super) fn write_fields(type_name: &str, fields: &[Field], options: &PrintOptions, sdl: &mut String) -> fmt::Result {
    for (idx, field) in printable_fields(type_name, fields).enumerate() {
        if idx > 0 {
            sdl.push('\n');
        }

        let description = Description::new(field.description.as_deref(), options).indented(INDENT, idx == 0);

        write!(sdl, "{description}{INDENT}{}", field.name)?;
        write_arguments(&field.arguments, INDENT, options, sdl)?;
        write!(sdl, ": {}", field.ty)?;
        write_deprecated(field.deprecation_reason.as_deref(), sdl)?;
        write_field_federation(&field.federation, sdl)?;
    }

    Ok(())
}

/// Arguments go on one line unless one of them has a description.
pub(super) fn write_arguments(
    arguments: &[InputValueDefinition],
    indentation: &str,
    options: &PrintOptions,
    sdl: &mut String,
) -> fmt::Result {
    if arguments.is_empty() {
        return Ok(());
    }

    let described = arguments
        .iter()
        .any(|argument| argument.description.as_deref().is_some_and(|description| !description.is_empty()));

    if !described {
        return write!(sdl, "({})", arguments.iter().map(InputValueDisplay).format(", "));
    }

    let nested_indentation = format!("{INDENT}{indentation}");

    sdl.push_str("(\n");

    for (idx, argument) in arguments.iter().enumerate() {
        if idx > 0 {
            sdl.push('\n');
        }

        let description =
            Description::new(argument.description.as_deref(), options).indented(&nested_indentation, idx == 0);

        write!(sdl, "{description}{nested_indentation}{}", InputValueDisplay(argument))?;
    }

    write!(sdl, "\n{indentation})")
}

pub(super) fn write_deprecated(reason: Option<&str>, sdl: &mut String) -> fmt::Result {
    match reason {
        None | Some("") => Ok(()),
        Some(DEFAULT_DEPRECATION_REASON) => {
            sdl.push_str(" @deprecated");
            Ok(())
        }
        Some(reason) => {
            sdl.push_str(" @deprecated(reason: ");
            write_quoted(sdl, reason)?;
            sdl.push(')');
            Ok(())
        }
    }
}

fn write_field_federation(federation: &FieldFederation, sdl: &mut String) -> fmt::Result {
    let external = federation.external.then_some(FederationDirective::External);
    let provides = federation.provides.as_ref().map(FederationDirective::Provides);
    let requires = federation.requires.as_ref().map(FederationDirective::Requires);

    let mut directives = external.into_iter().chain(provides).chain(requires).peekable();

    if directives.peek().is_some() {
        write!(sdl, " {}", directives.format(" "))?;
    }

    Ok(())
}
