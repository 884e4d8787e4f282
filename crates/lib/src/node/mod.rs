//! The uniform node model handed to path-query engines.
//!
//! A [`Node`] is a tagged view over whatever the caller already has: canonical
//! JSON-like values (typically decoded through `serde_json`), native arrays, and
//! opaque records. Container variants hold shared handles, so cloning a node never
//! clones the record or array behind it.
//!
//! # Variants
//!
//! ## Scalars
//! - [`Node::Null`] - no value at all
//! - [`Node::Bool`], [`Node::Int`], [`Node::Float`], [`Node::Text`]
//!
//! ## Canonical containers
//! - [`Node::List`] - ordered collection, already in sequence shape
//! - [`Node::Map`] - string-keyed map, already in map shape
//!
//! ## Introspected values
//! - [`Node::Array`] - a native array, exposed through [`FixedArray`]
//! - [`Node::Record`] - an opaque record, exposed through [`Record`]
//!
//! ```
//! # use structpath::Node;
//! let text = Node::from("hello");
//! let number = Node::from(42);
//!
//! assert!(text == "hello");
//! assert!(number == 42);
//! assert!(!(number == "hello"));
//! ```

use std::{collections::BTreeMap, fmt, sync::Arc};

use crate::{
    constants::NULL_TYPE_NAME,
    record::{FixedArray, Record},
};

pub mod sequence;

pub use sequence::{Elements, SequenceView};

/// String-keyed children of a canonical map node.
pub type NodeMap = BTreeMap<String, Node>;

/// A JSON-like view of a caller-supplied value.
#[derive(Clone)]
pub enum Node {
    /// No value
    Null,
    /// Boolean value
    Bool(bool),
    /// Integer value
    Int(i64),
    /// Floating point value
    Float(f64),
    /// Text value
    Text(String),
    /// Canonical ordered collection
    List(Arc<Vec<Node>>),
    /// Canonical keyed map
    Map(Arc<NodeMap>),
    /// Native array
    Array(Arc<dyn FixedArray>),
    /// Opaque record
    Record(Arc<dyn Record>),
}

impl Node {
    /// Wraps a shared record handle without copying the record.
    pub fn record<T: Record>(record: Arc<T>) -> Self {
        Node::Record(record)
    }

    /// Wraps a native array.
    pub fn array<A: FixedArray>(array: A) -> Self {
        Node::Array(Arc::new(array))
    }

    /// Builds a canonical list from nodes.
    pub fn list(items: impl IntoIterator<Item = Node>) -> Self {
        Node::List(Arc::new(items.into_iter().collect()))
    }

    /// Builds a canonical map from key/node pairs.
    pub fn map<K: Into<String>>(entries: impl IntoIterator<Item = (K, Node)>) -> Self {
        Node::Map(Arc::new(
            entries.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        ))
    }

    /// Returns true for [`Node::Null`]
    pub fn is_null(&self) -> bool {
        matches!(self, Node::Null)
    }

    /// Returns true for leaf values
    pub fn is_scalar(&self) -> bool {
        matches!(
            self,
            Node::Bool(_) | Node::Int(_) | Node::Float(_) | Node::Text(_)
        )
    }

    /// Returns the name of the runtime shape behind this node.
    ///
    /// Records and arrays report their own type names, so diagnostics point at
    /// the caller's type rather than at the node wrapper.
    pub fn type_name(&self) -> &'static str {
        match self {
            Node::Null => NULL_TYPE_NAME,
            Node::Bool(_) => "bool",
            Node::Int(_) => "int",
            Node::Float(_) => "float",
            Node::Text(_) => "text",
            Node::List(_) => "list",
            Node::Map(_) => "map",
            Node::Array(array) => array.type_name(),
            Node::Record(record) => record.type_name(),
        }
    }

    /// Returns true if both nodes point at the same record or array allocation.
    ///
    /// Arrays compare by [`FixedArray::storage_ptr`], so two nodes built from
    /// clones of one `Arc<[T]>` are the same array.
    ///
    /// Scalars never share identity, so this returns false for them.
    pub fn same(&self, other: &Node) -> bool {
        match (self, other) {
            (Node::Record(a), Node::Record(b)) => {
                std::ptr::addr_eq(Arc::as_ptr(a), Arc::as_ptr(b))
            }
            (Node::Array(a), Node::Array(b)) => std::ptr::eq(a.storage_ptr(), b.storage_ptr()),
            (Node::List(a), Node::List(b)) => Arc::ptr_eq(a, b),
            (Node::Map(a), Node::Map(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }

    /// Attempts to convert to a boolean
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Node::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Attempts to convert to an integer
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Node::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to convert to a float; integers widen
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Node::Float(n) => Some(*n),
            Node::Int(n) => Some(*n as f64),
            _ => None,
        }
    }

    /// Attempts to convert to a string slice
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Node::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Attempts to borrow the record behind this node
    pub fn as_record(&self) -> Option<&dyn Record> {
        match self {
            Node::Record(record) => Some(record.as_ref()),
            _ => None,
        }
    }

    /// Attempts to downcast the record behind this node to a concrete type.
    pub fn downcast_record<T: Record>(&self) -> Option<Arc<T>> {
        match self {
            Node::Record(record) => {
                let any: Arc<dyn std::any::Any + Send + Sync> = record.clone().into_any();
                any.downcast::<T>().ok()
            }
            _ => None,
        }
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Null => write!(f, "Null"),
            Node::Bool(b) => write!(f, "Bool({b})"),
            Node::Int(n) => write!(f, "Int({n})"),
            Node::Float(n) => write!(f, "Float({n})"),
            Node::Text(s) => write!(f, "Text({s:?})"),
            Node::List(items) => f.debug_tuple("List").field(items).finish(),
            Node::Map(map) => f.debug_tuple("Map").field(map).finish(),
            Node::Array(array) => write!(f, "Array({}; {})", array.type_name(), array.len()),
            Node::Record(record) => write!(f, "Record({})", record.type_name()),
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Null => write!(f, "null"),
            Node::Bool(b) => write!(f, "{b}"),
            Node::Int(n) => write!(f, "{n}"),
            Node::Float(n) => write!(f, "{n}"),
            Node::Text(s) => write!(f, "{s}"),
            Node::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
            Node::Map(map) => {
                write!(f, "{{")?;
                for (i, (key, value)) in map.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                write!(f, "}}")
            }
            Node::Array(array) => write!(f, "<{}; {}>", array.type_name(), array.len()),
            Node::Record(record) => write!(f, "<{}>", record.type_name()),
        }
    }
}

/// Structural equality for scalars and canonical containers, element-wise
/// equality for native arrays, identity for records.
impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Node::Null, Node::Null) => true,
            (Node::Bool(a), Node::Bool(b)) => a == b,
            (Node::Int(a), Node::Int(b)) => a == b,
            (Node::Float(a), Node::Float(b)) => a == b,
            (Node::Text(a), Node::Text(b)) => a == b,
            (Node::List(a), Node::List(b)) => a == b,
            (Node::Map(a), Node::Map(b)) => a == b,
            (Node::Array(a), Node::Array(b)) => {
                a.len() == b.len() && (0..a.len()).all(|i| a.get(i) == b.get(i))
            }
            (Node::Record(_), Node::Record(_)) => self.same(other),
            _ => false,
        }
    }
}

// Convenient From implementations for common types
impl From<bool> for Node {
    fn from(value: bool) -> Self {
        Node::Bool(value)
    }
}

impl From<i64> for Node {
    fn from(value: i64) -> Self {
        Node::Int(value)
    }
}

impl From<i32> for Node {
    fn from(value: i32) -> Self {
        Node::Int(value as i64)
    }
}

impl From<u32> for Node {
    fn from(value: u32) -> Self {
        Node::Int(value as i64)
    }
}

impl From<f64> for Node {
    fn from(value: f64) -> Self {
        Node::Float(value)
    }
}

impl From<String> for Node {
    fn from(value: String) -> Self {
        Node::Text(value)
    }
}

impl From<&str> for Node {
    fn from(value: &str) -> Self {
        Node::Text(value.to_string())
    }
}

impl From<Vec<Node>> for Node {
    fn from(value: Vec<Node>) -> Self {
        Node::List(Arc::new(value))
    }
}

impl From<NodeMap> for Node {
    fn from(value: NodeMap) -> Self {
        Node::Map(Arc::new(value))
    }
}

/// Decoded JSON becomes canonical nodes: arrays turn into [`Node::List`] and
/// objects into [`Node::Map`].
impl From<serde_json::Value> for Node {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Node::Null,
            serde_json::Value::Bool(b) => Node::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Node::Int(i),
                None => Node::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            serde_json::Value::String(s) => Node::Text(s),
            serde_json::Value::Array(items) => {
                Node::List(Arc::new(items.into_iter().map(Node::from).collect()))
            }
            serde_json::Value::Object(map) => Node::Map(Arc::new(
                map.into_iter().map(|(k, v)| (k, Node::from(v))).collect(),
            )),
        }
    }
}

impl PartialEq<str> for Node {
    fn eq(&self, other: &str) -> bool {
        matches!(self, Node::Text(s) if s == other)
    }
}

impl PartialEq<&str> for Node {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl PartialEq<i64> for Node {
    fn eq(&self, other: &i64) -> bool {
        matches!(self, Node::Int(n) if n == other)
    }
}

impl PartialEq<i32> for Node {
    fn eq(&self, other: &i32) -> bool {
        matches!(self, Node::Int(n) if *n == *other as i64)
    }
}

impl PartialEq<bool> for Node {
    fn eq(&self, other: &bool) -> bool {
        matches!(self, Node::Bool(b) if b == other)
    }
}

/// Result of resolving a key against a node.
///
/// [`Child::Undefined`] is the "no such child" marker. It is distinct from every
/// node, including [`Node::Null`]: a field that exists but holds nothing resolves
/// to `Found(Node::Null)`.
#[derive(Debug, Clone, PartialEq)]
pub enum Child {
    /// The key resolved to a child value
    Found(Node),
    /// The key did not resolve
    Undefined,
}

impl Child {
    /// Returns true for [`Child::Undefined`]
    pub fn is_undefined(&self) -> bool {
        matches!(self, Child::Undefined)
    }

    /// Borrows the resolved node, if any
    pub fn as_node(&self) -> Option<&Node> {
        match self {
            Child::Found(node) => Some(node),
            Child::Undefined => None,
        }
    }

    /// Converts into the resolved node, if any
    pub fn into_node(self) -> Option<Node> {
        match self {
            Child::Found(node) => Some(node),
            Child::Undefined => None,
        }
    }
}

impl From<Option<Node>> for Child {
    fn from(value: Option<Node>) -> Self {
        match value {
            Some(node) => Child::Found(node),
            None => Child::Undefined,
        }
    }
}

impl PartialEq<Node> for Child {
    fn eq(&self, other: &Node) -> bool {
        matches!(self, Child::Found(node) if node == other)
    }
}

/// Implements direct comparison between a resolved child and a primitive
macro_rules! impl_child_eq {
    ($($type:ty),* $(,)?) => {
        $(
            impl PartialEq<$type> for Child {
                fn eq(&self, other: &$type) -> bool {
                    matches!(self, Child::Found(node) if node == other)
                }
            }
        )*
    };
}

impl_child_eq!(&str, i64, i32, bool);
