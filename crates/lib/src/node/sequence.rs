//! Ordered sequence views over sequence-shaped nodes.
//!
//! A [`SequenceView`] is what index and iteration operations work against. Views
//! over canonical lists share the list's storage; views over native arrays own a
//! snapshot read element by element, so a view handed out earlier never reflects
//! later changes to the source.

use std::{ops::Index, sync::Arc};

use super::Node;
use crate::record::FixedArray;

/// An ordered, indexable, immutable view of a sequence's elements.
#[derive(Debug, Clone, PartialEq)]
pub struct SequenceView {
    items: Arc<Vec<Node>>,
}

impl SequenceView {
    /// Shares the storage of an existing canonical list.
    pub fn shared(items: Arc<Vec<Node>>) -> Self {
        Self { items }
    }

    /// Reads every element of a native array, in order, into a new view.
    ///
    /// The view stops at the first index the array cannot read, so a
    /// [`FixedArray`] whose `len` overstates its contents yields a shorter view
    /// rather than invented elements.
    pub fn materialize(array: &dyn FixedArray) -> Self {
        let len = array.len();
        let items: Vec<Node> = (0..len).map_while(|index| array.get(index)).collect();
        if items.len() < len {
            tracing::warn!(
                type_name = array.type_name(),
                len,
                readable = items.len(),
                "Native array reported more elements than it could read"
            );
        }
        tracing::trace!(
            type_name = array.type_name(),
            len,
            "Materialized native array view"
        );
        Self {
            items: Arc::new(items),
        }
    }

    /// Returns the number of elements
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the view has no elements
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Gets the element at `index`
    pub fn get(&self, index: usize) -> Option<&Node> {
        self.items.as_slice().get(index)
    }

    /// Iterates over borrowed elements
    pub fn iter(&self) -> std::slice::Iter<'_, Node> {
        self.items.iter()
    }

    /// Borrows the elements as a slice
    pub fn as_slice(&self) -> &[Node] {
        &self.items
    }

    /// Copies the elements out into an owned vector.
    pub fn to_vec(&self) -> Vec<Node> {
        self.items.as_ref().clone()
    }
}

impl Index<usize> for SequenceView {
    type Output = Node;

    fn index(&self, index: usize) -> &Self::Output {
        &self.items[index]
    }
}

impl IntoIterator for SequenceView {
    type Item = Node;
    type IntoIter = Elements;

    fn into_iter(self) -> Self::IntoIter {
        Elements {
            view: self,
            front: 0,
        }
    }
}

impl<'a> IntoIterator for &'a SequenceView {
    type Item = &'a Node;
    type IntoIter = std::slice::Iter<'a, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Owning iterator over the elements of a [`SequenceView`].
///
/// Each call to an iterate operation builds a new `Elements`, so walking one
/// never affects another.
#[derive(Debug, Clone)]
pub struct Elements {
    view: SequenceView,
    front: usize,
}

impl Elements {
    /// Returns the view this iterator walks
    pub fn view(&self) -> &SequenceView {
        &self.view
    }
}

impl Iterator for Elements {
    type Item = Node;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.view.get(self.front)?.clone();
        self.front += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.view.len().saturating_sub(self.front);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Elements {}

impl std::iter::FusedIterator for Elements {}
