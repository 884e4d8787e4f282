//! Introspection capabilities for caller-defined values.
//!
//! Path queries need to look inside values the query layer knows nothing about.
//! Rather than relying on ambient reflection, a type opts in by implementing one
//! of two traits:
//!
//! - [`Record`] - a keyed record whose stored fields can be listed and read by name
//! - [`FixedArray`] - a native array whose elements can be counted and read by index
//!
//! Both are usually derived from a field list with the [`record!`](crate::record!)
//! macro and the [`ToNode`] conversions, but hand-written impls are equally valid.
//!
//! # Encapsulation
//!
//! A record exposes its stored fields regardless of their Rust visibility. The
//! `record!` macro expands inside the module that defines the type, which is what
//! allows it to read private fields. This is the only place where the crate reads
//! past a type's declared encapsulation.

use std::{any::Any, sync::Arc};

use crate::Node;

mod convert;
mod macros;

pub use convert::ToNode;

/// Result of reading a single field from a [`Record`].
#[derive(Debug, Clone, PartialEq)]
pub enum FieldRead {
    /// The field exists and holds this value
    Value(Node),
    /// No stored field has this name
    Missing,
    /// The field exists but its value could not be read
    Denied,
}

impl FieldRead {
    /// Returns true if the field was read
    pub fn is_value(&self) -> bool {
        matches!(self, FieldRead::Value(_))
    }
}

/// Upcasting support so `dyn Record` handles can be downcast to their concrete type.
pub trait AsAny: Any + Send + Sync {
    /// Converts a shared handle into a shared `Any`
    fn into_any(self: Arc<Self>) -> Arc<dyn Any + Send + Sync>;
}

impl<T: Any + Send + Sync> AsAny for T {
    fn into_any(self: Arc<Self>) -> Arc<dyn Any + Send + Sync> {
        self
    }
}

/// A caller-defined keyed record that can be traversed as a map-shaped node.
///
/// Field names are the raw stored-field names: no renaming, no case folding, no
/// accessor conventions.
///
/// # Examples
///
/// ```
/// use structpath::record::{FieldRead, Record, ToNode};
///
/// struct Point {
///     x: i64,
///     y: i64,
/// }
///
/// impl Record for Point {
///     fn fields(&self) -> &'static [&'static str] {
///         &["x", "y"]
///     }
///
///     fn read_field(&self, name: &str) -> FieldRead {
///         match name {
///             "x" => FieldRead::Value(self.x.to_node()),
///             "y" => FieldRead::Value(self.y.to_node()),
///             _ => FieldRead::Missing,
///         }
///     }
/// }
///
/// let point = Point { x: 1, y: 2 };
/// assert_eq!(point.fields(), &["x", "y"]);
/// assert!(point.read_field("z") == FieldRead::Missing);
/// ```
pub trait Record: AsAny {
    /// Name of the concrete type, used in diagnostics.
    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    /// Fields declared directly on this type, in declaration order.
    fn fields(&self) -> &'static [&'static str];

    /// Reads the current value of a directly declared field.
    fn read_field(&self, name: &str) -> FieldRead;

    /// The embedded ancestor record, if this type extends another one.
    ///
    /// Its fields are the "inherited" fields, visible only when the provider is
    /// configured with [`KeyScope::IncludeInherited`](crate::provider::KeyScope).
    fn base(&self) -> Option<&dyn Record> {
        None
    }
}

/// A native array whose elements can be read by position.
///
/// Implemented for `Vec<T>`, `[T; N]`, `Box<[T]>` and `Arc<[T]>` whenever
/// `T: ToNode`.
pub trait FixedArray: Send + Sync + 'static {
    /// Number of elements
    fn len(&self) -> usize;

    /// Returns true if the array has no elements
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Reads the element at `index`, or `None` past the end.
    fn get(&self, index: usize) -> Option<Node>;

    /// Name of the concrete array type, used in diagnostics.
    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    /// Address of the storage holding the elements.
    ///
    /// Two array nodes are the same array when these addresses match. Handles
    /// that point at shared storage report the shared allocation.
    fn storage_ptr(&self) -> *const () {
        self as *const Self as *const ()
    }
}

impl<T: ToNode + Send + Sync + 'static> FixedArray for Vec<T> {
    fn len(&self) -> usize {
        self.as_slice().len()
    }

    fn get(&self, index: usize) -> Option<Node> {
        self.as_slice().get(index).map(ToNode::to_node)
    }
}

impl<T: ToNode + Send + Sync + 'static, const N: usize> FixedArray for [T; N] {
    fn len(&self) -> usize {
        N
    }

    fn get(&self, index: usize) -> Option<Node> {
        self.as_slice().get(index).map(ToNode::to_node)
    }
}

impl<T: ToNode + Send + Sync + 'static> FixedArray for Box<[T]> {
    fn len(&self) -> usize {
        self.as_ref().len()
    }

    fn get(&self, index: usize) -> Option<Node> {
        self.as_ref().get(index).map(ToNode::to_node)
    }
}

impl<T: ToNode + Send + Sync + 'static> FixedArray for Arc<[T]> {
    fn len(&self) -> usize {
        self.as_ref().len()
    }

    fn get(&self, index: usize) -> Option<Node> {
        self.as_ref().get(index).map(ToNode::to_node)
    }

    fn storage_ptr(&self) -> *const () {
        Arc::as_ptr(self) as *const ()
    }
}

/// Lists field names visible on a record, optionally walking the base chain.
///
/// The record's own fields come first, then each ancestor's, nearest first. A name
/// already listed is not repeated.
pub(crate) fn visible_fields(record: &dyn Record, include_inherited: bool) -> Vec<String> {
    let mut names: Vec<String> = record.fields().iter().map(|f| f.to_string()).collect();
    if include_inherited {
        let mut current = record.base();
        while let Some(base) = current {
            for field in base.fields() {
                if !names.iter().any(|n| n == field) {
                    names.push(field.to_string());
                }
            }
            current = base.base();
        }
    }
    names
}

/// Reads a field by name, optionally falling through to the base chain.
pub(crate) fn read_visible_field(
    record: &dyn Record,
    name: &str,
    include_inherited: bool,
) -> FieldRead {
    let read = record.read_field(name);
    if !include_inherited || !matches!(read, FieldRead::Missing) {
        return read;
    }

    let mut current = record.base();
    while let Some(base) = current {
        match base.read_field(name) {
            FieldRead::Missing => current = base.base(),
            found => return found,
        }
    }
    FieldRead::Missing
}
