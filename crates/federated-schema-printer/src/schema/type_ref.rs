use std::{fmt, str::FromStr};

use wrapping::Wrapping;

use crate::Error;

/// A reference to a named type with its list and non-null wrappers, e.g. `[Episode!]!`.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct TypeRef {
    name: String,
    wrapping: Wrapping,
}

impl TypeRef {
    /// A nullable reference to `name`.
    pub fn named(name: impl Into<String>) -> Self {
        TypeRef {
            name: name.into(),
            wrapping: Wrapping::nullable(),
        }
    }

    /// Makes the outermost layer non-null: `Episode` becomes `Episode!`, `[Episode]` becomes `[Episode]!`.
    #[must_use]
    pub fn required(mut self) -> Self {
        self.wrapping = self.wrapping.wrap_required();
        self
    }

    /// Wraps the current type in a nullable list.
    #[must_use]
    pub fn list(mut self) -> Self {
        self.wrapping = self.wrapping.wrapped_by_nullable_list();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn wrapping(&self) -> Wrapping {
        self.wrapping
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.wrapping.type_display(&self.name), f)
    }
}

impl fmt::Debug for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeRef({self})")
    }
}

impl FromStr for TypeRef {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        fn unfurl(source: &str, s: &str) -> Result<(String, Wrapping), Error> {
            let s = s.trim();
            let (s, required) = match s.strip_suffix('!') {
                Some(inner) => (inner.trim_end(), true),
                None => (s, false),
            };

            if let Some(inner) = s.strip_prefix('[').and_then(|s| s.strip_suffix(']')) {
                let (name, wrapping) = unfurl(source, inner)?;
                let wrapping = wrapping
                    .try_wrapped_by_list(required)
                    .ok_or_else(|| Error::InvalidTypeReference(source.to_owned()))?;

                return Ok((name, wrapping));
            }

            if !super::is_valid_name(s) {
                return Err(Error::InvalidTypeReference(source.to_owned()));
            }

            Ok((s.to_owned(), Wrapping::new(required)))
        }

        let (name, wrapping) = unfurl(s, s)?;

        Ok(TypeRef { name, wrapping })
    }
}
