//! Always-sorted list
//!
//! Storage is a contiguous vector. Insertion position is found by binary
//! search on `Ord`, while duplicate detection is a linear scan on `PartialEq`,
//! so element types whose equality is coarser than their ordering still get
//! the duplicate check they expect.

use std::fmt;

use super::CollectionError;

/// A list that keeps its elements in ascending order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderedList<T> {
    items: Vec<T>,
}

impl<T> Default for OrderedList<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Ord> OrderedList<T> {
    /// Creates an empty list
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an element at its sorted position
    ///
    /// Equal-comparing elements keep insertion order: the new element goes
    /// after every existing element that is less than or equal to it.
    pub fn add(&mut self, element: T) -> Result<(), CollectionError> {
        if self.contains(&element) {
            return Err(CollectionError::Duplicate);
        }

        let position = self.items.partition_point(|existing| existing <= &element);
        self.items.insert(position, element);
        Ok(())
    }

    /// Returns true if an equal element is present
    pub fn contains(&self, element: &T) -> bool {
        self.items.iter().any(|existing| existing == element)
    }

    /// Returns the position of the first equal element
    pub fn index_of(&self, element: &T) -> Option<usize> {
        self.items.iter().position(|existing| existing == element)
    }
}

impl<T> OrderedList<T> {
    /// Returns the element at `index`
    pub fn get(&self, index: usize) -> Result<&T, CollectionError> {
        let len = self.items.len();
        self.items
            .get(index)
            .ok_or(CollectionError::IndexOutOfRange { index, len })
    }

    /// Returns a mutable reference to the element at `index`
    ///
    /// Callers must not change anything that participates in ordering or
    /// equality; the model types only expose setters for other fields.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, CollectionError> {
        let len = self.items.len();
        self.items
            .get_mut(index)
            .ok_or(CollectionError::IndexOutOfRange { index, len })
    }

    /// Removes and returns the element at `index`
    pub fn remove(&mut self, index: usize) -> Result<T, CollectionError> {
        let len = self.items.len();
        if index >= len {
            return Err(CollectionError::IndexOutOfRange { index, len });
        }
        Ok(self.items.remove(index))
    }

    /// Returns the number of elements
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates front to back in ascending order
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Iterates mutably; the same ordering caveat as [`OrderedList::get_mut`] applies
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.items.iter_mut()
    }
}

impl<'a, T> IntoIterator for &'a OrderedList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T: fmt::Display> fmt::Display for OrderedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut rendered = String::new();
        for item in &self.items {
            rendered.push('-');
            rendered.push_str(&item.to_string());
            rendered.push('\n');
        }
        f.write_str(rendered.trim())
    }
}
