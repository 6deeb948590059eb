//! Nested traversal results and their flattening.
//!
//! Each directory level of a walk produces a [`Nested`] value: one entry per
//! child, where a child either contributes nothing, a single path, or the
//! nested contributions of a subdirectory. The tree is collapsed once, at
//! the top, by [`compact_flattened_list`].

/// A recursively nested, possibly absent, sequence of items.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Nested<T> {
    /// Nothing contributed at this position.
    Absent,
    /// A single present item.
    Item(T),
    /// An ordered group of nested values.
    List(Vec<Nested<T>>),
}

impl<T> Default for Nested<T> {
    fn default() -> Self {
        Self::List(Vec::new())
    }
}

impl<T> From<Option<T>> for Nested<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(item) => Self::Item(item),
            None => Self::Absent,
        }
    }
}

impl<T> From<Vec<Nested<T>>> for Nested<T> {
    fn from(items: Vec<Nested<T>>) -> Self {
        Self::List(items)
    }
}

impl<T> FromIterator<Nested<T>> for Nested<T> {
    fn from_iter<I: IntoIterator<Item = Nested<T>>>(iter: I) -> Self {
        Self::List(iter.into_iter().collect())
    }
}

impl<T> Nested<T> {
    /// Appends `item` after everything already in this value.
    ///
    /// A non-list value is wrapped into a list first so that the existing
    /// contents keep their position ahead of the new item.
    pub fn push(&mut self, item: T) {
        match self {
            Self::List(items) => items.push(Self::Item(item)),
            _ => {
                let prev = std::mem::replace(self, Self::List(Vec::with_capacity(2)));
                if let Self::List(items) = self {
                    items.push(prev);
                    items.push(Self::Item(item));
                }
            }
        }
    }

    /// Returns `true` if no present item exists anywhere in the tree.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Absent => true,
            Self::Item(_) => false,
            Self::List(items) => items.iter().all(Self::is_empty),
        }
    }

    /// Collapses the tree into its present items, depth-first, left to right.
    pub fn compact_flattened_list(self) -> Vec<T> {
        compact_flattened_list(self)
    }
}

/// Flattens a [`Nested`] value into the ordered list of its present items.
///
/// Absent entries are dropped, duplicates are kept, and relative order is
/// preserved. Uses an explicit stack, so nesting depth is bounded by memory
/// rather than by the call stack.
pub fn compact_flattened_list<T>(tree: Nested<T>) -> Vec<T> {
    let mut out = Vec::new();
    // Iterators are consumed front to back; the innermost open list is on top.
    let mut stack = vec![vec![tree].into_iter()];

    while let Some(top) = stack.last_mut() {
        match top.next() {
            Some(Nested::Absent) => {}
            Some(Nested::Item(item)) => out.push(item),
            Some(Nested::List(items)) => stack.push(items.into_iter()),
            None => {
                stack.pop();
            }
        }
    }

    out
}
