use std::fmt::{self, Write};

use itertools::Itertools as _;

use super::{description::Description, fields::write_arguments};
use crate::{DirectiveDefinition, PrintOptions};

pub(super) fn write_directive_definition(
    directive: &DirectiveDefinition,
    options: &PrintOptions,
    sdl: &mut String,
) -> fmt::Result {
    write!(sdl, "{}", Description::new(directive.description.as_deref(), options))?;
    write!(sdl, "directive @{}", directive.name)?;
    write_arguments(&directive.arguments, "", options, sdl)?;
    write!(sdl, " on {}", directive.locations.iter().format(" | "))
}
