use crate::model::{LogEntry, Message};

/// Ordered, append-only sequence.
///
/// Items can be pushed and read back in insertion order, never removed or
/// replaced. Both halves of a session's state use it.
#[derive(Debug, Clone, PartialEq)]
pub struct AppendLog<T> {
    items: Vec<T>,
}

pub type MessageHistory = AppendLog<Message>;
pub type LogStore = AppendLog<LogEntry>;

impl<T> AppendLog<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Append an item and return a reference to it
    pub fn push(&mut self, item: T) -> &T {
        self.items.push(item);
        &self.items[self.items.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T> Default for AppendLog<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> IntoIterator for &'a AppendLog<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> FromIterator<T> for AppendLog<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}
