//! Compact representation of the list and non-null wrappers around a named GraphQL type.

use std::fmt;

const INNER_IS_REQUIRED_MASK: u32 = 1;
const LIST_COUNT_SHIFT: u32 = 1;
const LIST_COUNT_MASK: u32 = 0b1_1110;
const LIST_FLAGS_SHIFT: u32 = 5;

/// The maximum number of nested list wrappers a [Wrapping] can hold.
pub const MAX_LIST_WRAPPINGS: u32 = 15;

/// GraphQL wrappers encoded into a single u32
///
/// Bit 0: Whether the inner type is required
/// Bits 1..5: Number of list wrappers
/// Bits 5..20: List wrappers from innermost to outermost, where 0 is nullable and 1 is required
/// The rest: dead bits
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize)]
pub struct Wrapping(u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListWrapping {
    RequiredList,
    NullableList,
}

impl Wrapping {
    pub const fn new(inner_is_required: bool) -> Self {
        if inner_is_required {
            Wrapping(INNER_IS_REQUIRED_MASK)
        } else {
            Wrapping(0)
        }
    }

    pub const fn nullable() -> Self {
        Self::new(false)
    }

    pub const fn required() -> Self {
        Self::new(true)
    }

    pub fn wrapped_by_nullable_list(self) -> Self {
        self.wrapped_by_list(false)
    }

    pub fn wrapped_by_required_list(self) -> Self {
        self.wrapped_by_list(true)
    }

    /// Wraps in one more list, or returns `None` when [MAX_LIST_WRAPPINGS] lists are already there.
    pub fn try_wrapped_by_list(self, required: bool) -> Option<Self> {
        (self.list_count() < MAX_LIST_WRAPPINGS).then(|| self.push_list(required))
    }

    /// # Panics
    ///
    /// When [MAX_LIST_WRAPPINGS] lists are already there.
    fn wrapped_by_list(self, required: bool) -> Self {
        assert!(self.list_count() < MAX_LIST_WRAPPINGS, "list wrapper overflow");
        self.push_list(required)
    }

    fn push_list(self, required: bool) -> Self {
        let index = self.list_count();
        let mut encoded = (self.0 & !LIST_COUNT_MASK) | ((index + 1) << LIST_COUNT_SHIFT);

        if required {
            encoded |= 1 << (LIST_FLAGS_SHIFT + index);
        }

        Wrapping(encoded)
    }

    /// Marks the outermost wrapper, or the inner type when there is no list, as required.
    pub fn wrap_required(self) -> Self {
        match self.list_count() {
            0 => Wrapping(self.0 | INNER_IS_REQUIRED_MASK),
            count => Wrapping(self.0 | (1 << (LIST_FLAGS_SHIFT + count - 1))),
        }
    }

    pub fn inner_is_required(self) -> bool {
        self.0 & INNER_IS_REQUIRED_MASK != 0
    }

    /// Whether the outermost layer of the type is non-null.
    pub fn is_required(self) -> bool {
        match self.list_wrappings().next_back() {
            Some(list) => list == ListWrapping::RequiredList,
            None => self.inner_is_required(),
        }
    }

    pub fn is_nullable(self) -> bool {
        !self.is_required()
    }

    pub fn is_list(self) -> bool {
        self.list_count() > 0
    }

    /// Iterates over the list wrappers from innermost to outermost.
    pub fn list_wrappings(self) -> ListWrappings {
        ListWrappings {
            wrapping: self,
            front: 0,
            back: self.list_count(),
        }
    }

    /// Displays `name` wrapped in these wrappers, e.g. `[Episode!]!`.
    pub fn type_display(self, name: &str) -> TypeDisplay<'_> {
        TypeDisplay { wrapping: self, name }
    }

    fn list_count(self) -> u32 {
        (self.0 & LIST_COUNT_MASK) >> LIST_COUNT_SHIFT
    }

    fn list_is_required(self, index: u32) -> bool {
        self.0 & (1 << (LIST_FLAGS_SHIFT + index)) != 0
    }
}

impl fmt::Debug for Wrapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Wrapping")
            .field("inner_is_required", &self.inner_is_required())
            .field("list_wrappings", &self.list_wrappings().collect::<Vec<_>>())
            .finish()
    }
}

pub struct ListWrappings {
    wrapping: Wrapping,
    front: u32,
    back: u32,
}

impl ListWrappings {
    fn at(&self, index: u32) -> ListWrapping {
        if self.wrapping.list_is_required(index) {
            ListWrapping::RequiredList
        } else {
            ListWrapping::NullableList
        }
    }
}

impl Iterator for ListWrappings {
    type Item = ListWrapping;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }

        let item = self.at(self.front);
        self.front += 1;

        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = (self.back - self.front) as usize;
        (len, Some(len))
    }
}

impl DoubleEndedIterator for ListWrappings {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }

        self.back -= 1;

        Some(self.at(self.back))
    }
}

impl ExactSizeIterator for ListWrappings {}

pub struct TypeDisplay<'a> {
    wrapping: Wrapping,
    name: &'a str,
}

impl fmt::Display for TypeDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let TypeDisplay { wrapping, name } = self;

        for _ in wrapping.list_wrappings() {
            f.write_str("[")?;
        }

        f.write_str(name)?;

        if wrapping.inner_is_required() {
            f.write_str("!")?;
        }

        for list in wrapping.list_wrappings() {
            f.write_str("]")?;

            if list == ListWrapping::RequiredList {
                f.write_str("!")?;
            }
        }

        Ok(())
    }
}
