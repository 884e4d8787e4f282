/// Implements [`Record`](crate::record::Record) for a struct from a list of its fields.
///
/// Every listed field must implement [`ToNode`](crate::record::ToNode). Fields are
/// read in place, so private fields work as long as the macro is invoked in the
/// module that defines the struct. Field order in the list is the declaration
/// order reported by `fields()`.
///
/// # Syntax
///
/// - `record!(Type { field, other })` - a standalone record
/// - `record!(Type: base { field })` - `base` is an embedded record whose fields are
///   inherited
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use structpath::{Child, NodeProvider, RecordProvider, record};
///
/// struct FooBar {
///     foo: String,
///     bar: i64,
/// }
///
/// record!(FooBar { foo, bar });
///
/// let provider = RecordProvider::new();
/// let node = structpath::Node::record(Arc::new(FooBar {
///     foo: "x".to_string(),
///     bar: 10,
/// }));
///
/// assert_eq!(provider.get_child(&node, "foo"), "x");
/// assert_eq!(provider.get_child(&node, "bar"), 10);
/// assert_eq!(provider.get_child(&node, "baz"), Child::Undefined);
/// ```
#[macro_export]
macro_rules! record {
    ($type:ident { $($field:ident),* $(,)? }) => {
        impl $crate::record::Record for $type {
            fn type_name(&self) -> &'static str {
                stringify!($type)
            }

            fn fields(&self) -> &'static [&'static str] {
                &[$(stringify!($field)),*]
            }

            #[allow(unused_variables)]
            fn read_field(&self, name: &str) -> $crate::record::FieldRead {
                match name {
                    $(
                        stringify!($field) => $crate::record::ToNode::read_node(&self.$field),
                    )*
                    _ => $crate::record::FieldRead::Missing,
                }
            }
        }
    };

    ($type:ident : $base:ident { $($field:ident),* $(,)? }) => {
        impl $crate::record::Record for $type {
            fn type_name(&self) -> &'static str {
                stringify!($type)
            }

            fn fields(&self) -> &'static [&'static str] {
                &[$(stringify!($field)),*]
            }

            #[allow(unused_variables)]
            fn read_field(&self, name: &str) -> $crate::record::FieldRead {
                match name {
                    $(
                        stringify!($field) => $crate::record::ToNode::read_node(&self.$field),
                    )*
                    _ => $crate::record::FieldRead::Missing,
                }
            }

            fn base(&self) -> Option<&dyn $crate::record::Record> {
                Some(&self.$base)
            }
        }
    };
}
