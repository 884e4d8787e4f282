//! Conversions from stored field values into [`Node`]s.
//!
//! [`ToNode`] decides which shape a field presents to the query layer:
//!
//! | Field type | Node |
//! |---|---|
//! | integers, floats, `bool`, `String`, `&str`, `char` | scalar |
//! | `Option<T>` | `T`'s node, or `Null` |
//! | `Vec<T>`, `[T; N]`, `Box<[T]>` | [`Node::Array`] over a copy of the elements |
//! | `Arc<[T]>` | [`Node::Array`] sharing the same allocation |
//! | `HashMap<String, T>`, `BTreeMap<String, T>` | canonical [`Node::Map`] |
//! | `Arc<T: Record>`, `Weak<T: Record>` | [`Node::Record`] sharing the same allocation |
//! | `RwLock<T>`, `Mutex<T>`, `OnceLock<T>` | `T`'s node, read under the lock |
//! | `Node`, `serde_json::Value` | as-is / decoded canonical shape |
//!
//! Owned collection fields are copied on every lookup, so each read of a
//! `Vec<T>` field is a distinct array node. Store the field as `Arc<[T]>` to
//! have every lookup return the same array.
//!
//! Lock wrappers never wait. A lock that is poisoned or currently held
//! exclusively (including by the thread running the query) reads as
//! [`FieldRead::Denied`].

use std::{
    collections::{BTreeMap, HashMap},
    sync::{Arc, Mutex, OnceLock, RwLock, TryLockError, Weak},
};

use super::{FieldRead, Record};
use crate::Node;

/// Converts a stored value into the node it presents to the query layer.
pub trait ToNode {
    /// Builds the node for this value.
    fn to_node(&self) -> Node;

    /// Reads this value as a record field.
    ///
    /// Wrappers that can fail to produce a value (poisoned locks) report
    /// [`FieldRead::Denied`] here instead of inventing a node.
    fn read_node(&self) -> FieldRead {
        FieldRead::Value(self.to_node())
    }
}

/// Implements ToNode for primitives that convert losslessly into a scalar node
macro_rules! impl_to_node_scalar {
    ($variant:ident as $target:ty: $($type:ty),* $(,)?) => {
        $(
            impl ToNode for $type {
                fn to_node(&self) -> Node {
                    Node::$variant(*self as $target)
                }
            }
        )*
    };
}

impl_to_node_scalar!(Int as i64: i8, i16, i32, i64, u8, u16, u32);
impl_to_node_scalar!(Float as f64: f32, f64);

impl ToNode for u64 {
    fn to_node(&self) -> Node {
        match i64::try_from(*self) {
            Ok(n) => Node::Int(n),
            Err(_) => Node::Float(*self as f64),
        }
    }
}

impl ToNode for usize {
    fn to_node(&self) -> Node {
        (*self as u64).to_node()
    }
}

impl ToNode for bool {
    fn to_node(&self) -> Node {
        Node::Bool(*self)
    }
}

impl ToNode for char {
    fn to_node(&self) -> Node {
        Node::Text(self.to_string())
    }
}

impl ToNode for String {
    fn to_node(&self) -> Node {
        Node::Text(self.clone())
    }
}

impl ToNode for str {
    fn to_node(&self) -> Node {
        Node::Text(self.to_string())
    }
}

impl ToNode for Node {
    fn to_node(&self) -> Node {
        self.clone()
    }
}

impl ToNode for serde_json::Value {
    fn to_node(&self) -> Node {
        Node::from(self.clone())
    }
}

impl<T: ToNode> ToNode for Option<T> {
    fn to_node(&self) -> Node {
        match self {
            Some(value) => value.to_node(),
            None => Node::Null,
        }
    }

    fn read_node(&self) -> FieldRead {
        match self {
            Some(value) => value.read_node(),
            None => FieldRead::Value(Node::Null),
        }
    }
}

impl<T: ToNode + Clone + Send + Sync + 'static> ToNode for Vec<T> {
    fn to_node(&self) -> Node {
        Node::array(self.clone())
    }
}

impl<T: ToNode + Clone + Send + Sync + 'static, const N: usize> ToNode for [T; N] {
    fn to_node(&self) -> Node {
        Node::array(self.clone())
    }
}

impl<T: ToNode + Clone + Send + Sync + 'static> ToNode for Box<[T]> {
    fn to_node(&self) -> Node {
        Node::array(self.clone())
    }
}

impl<T: ToNode + Send + Sync + 'static> ToNode for Arc<[T]> {
    fn to_node(&self) -> Node {
        Node::array(Arc::clone(self))
    }
}

impl<T: ToNode> ToNode for HashMap<String, T> {
    fn to_node(&self) -> Node {
        Node::map(self.iter().map(|(k, v)| (k.clone(), v.to_node())))
    }
}

impl<T: ToNode> ToNode for BTreeMap<String, T> {
    fn to_node(&self) -> Node {
        Node::map(self.iter().map(|(k, v)| (k.clone(), v.to_node())))
    }
}

impl<T: Record> ToNode for Arc<T> {
    fn to_node(&self) -> Node {
        Node::Record(self.clone())
    }
}

impl<T: Record> ToNode for Weak<T> {
    fn to_node(&self) -> Node {
        match self.upgrade() {
            Some(record) => Node::Record(record),
            None => Node::Null,
        }
    }
}

impl<T: ToNode> ToNode for RwLock<T> {
    fn to_node(&self) -> Node {
        match self.read_node() {
            FieldRead::Value(node) => node,
            FieldRead::Missing | FieldRead::Denied => Node::Null,
        }
    }

    fn read_node(&self) -> FieldRead {
        match self.try_read() {
            Ok(guard) => (*guard).read_node(),
            Err(TryLockError::Poisoned(_)) => FieldRead::Denied,
            Err(TryLockError::WouldBlock) => {
                tracing::trace!("Lock held by a writer, field read denied");
                FieldRead::Denied
            }
        }
    }
}

impl<T: ToNode> ToNode for Mutex<T> {
    fn to_node(&self) -> Node {
        match self.read_node() {
            FieldRead::Value(node) => node,
            FieldRead::Missing | FieldRead::Denied => Node::Null,
        }
    }

    fn read_node(&self) -> FieldRead {
        match self.try_lock() {
            Ok(guard) => (*guard).read_node(),
            Err(TryLockError::Poisoned(_)) => FieldRead::Denied,
            Err(TryLockError::WouldBlock) => {
                tracing::trace!("Lock already held, field read denied");
                FieldRead::Denied
            }
        }
    }
}

impl<T: ToNode> ToNode for OnceLock<T> {
    fn to_node(&self) -> Node {
        self.get().to_node()
    }
}

impl<T: ToNode + ?Sized> ToNode for &T {
    fn to_node(&self) -> Node {
        (**self).to_node()
    }

    fn read_node(&self) -> FieldRead {
        (**self).read_node()
    }
}
