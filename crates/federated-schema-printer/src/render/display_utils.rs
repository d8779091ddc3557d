use std::fmt::{self, Display, Write};

use crate::{InputValueDefinition, KeyFields};

pub(super) const INDENT: &str = "  ";

pub(crate) fn write_quoted(sdl: &mut impl Write, s: &str) -> fmt::Result {
    sdl.write_char('"')?;
    for c in s.chars() {
        match c {
            '\r' => sdl.write_str("\\r"),
            '\n' => sdl.write_str("\\n"),
            '\t' => sdl.write_str("\\t"),
            '\\' => sdl.write_str("\\\\"),
            '"' => sdl.write_str("\\\""),
            c if c.is_control() => write!(sdl, "\\u{:04X}", c as u32),
            c => sdl.write_char(c),
        }?
    }
    sdl.write_char('"')
}

/// Writes ` {`, the lines produced by `inner`, then the closing brace on its own line.
pub(super) fn write_block(sdl: &mut String, inner: impl FnOnce(&mut String) -> fmt::Result) -> fmt::Result {
    sdl.push_str(" {\n");
    inner(sdl)?;
    sdl.push_str("\n}");
    Ok(())
}

/// `name: Type = default`
pub(super) struct InputValueDisplay<'a>(pub &'a InputValueDefinition);

impl Display for InputValueDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let InputValueDisplay(input_value) = self;

        write!(f, "{}: {}", input_value.name, input_value.ty)?;

        if let Some(default_value) = &input_value.default_value {
            write!(f, " = {default_value}")?;
        }

        Ok(())
    }
}

/// Displays a field set inside quotes
pub(super) struct FieldSetDisplay<'a>(pub &'a KeyFields);

impl Display for FieldSetDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_quoted(f, &self.0.to_string())
    }
}

#[derive(Debug, Clone, Copy)]
pub(super) enum FederationDirective<'a> {
    Key(&'a KeyFields),
    External,
    Provides(&'a KeyFields),
    Requires(&'a KeyFields),
}

impl Display for FederationDirective<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FederationDirective::Key(fields) => write!(f, "@key(fields: {})", FieldSetDisplay(fields)),
            FederationDirective::External => f.write_str("@external"),
            FederationDirective::Provides(fields) => write!(f, "@provides(fields: {})", FieldSetDisplay(fields)),
            FederationDirective::Requires(fields) => write!(f, "@requires(fields: {})", FieldSetDisplay(fields)),
        }
    }
}
