//! A minimal selector evaluator driven by a [`NodeProvider`].
//!
//! The [`Walker`] is the smallest consumer of the provider contract: it applies a
//! [`Selector`] to a root node using only classification, key, element, and
//! iteration operations. It does not parse path text or evaluate filters.
//!
//! # Cycles
//!
//! Providers never detect cycles. The walker bounds recursive steps by
//! [`WalkConfig::max_depth`], so a [`Step::Descendants`] over a cyclic graph stops
//! with [`WalkError::DepthLimitExceeded`] instead of running forever. Definite
//! steps (keys and indexes) are bounded by the selector's own length and can
//! follow a cycle any finite number of times.
//!
//! ```
//! use std::sync::Arc;
//! use structpath::{Node, RecordProvider, record, walk::{Selector, Walker}};
//!
//! struct Item {
//!     name: &'static str,
//!     price: i64,
//! }
//! record!(Item { name, price });
//!
//! struct Order {
//!     items: Vec<Arc<Item>>,
//! }
//! record!(Order { items });
//!
//! let order = Node::record(Arc::new(Order {
//!     items: vec![
//!         Arc::new(Item { name: "pen", price: 2 }),
//!         Arc::new(Item { name: "ink", price: 5 }),
//!     ],
//! }));
//!
//! let walker = Walker::new(RecordProvider::new());
//! let prices = walker.select(&order, &Selector::new().key("items").wildcard().key("price"))?;
//! assert_eq!(prices, vec![2, 5]);
//! # Ok::<(), structpath::Error>(())
//! ```

use serde::{Deserialize, Serialize};

use crate::{Child, Node, Result, constants::DEFAULT_MAX_DEPTH, provider::NodeProvider};

mod errors;
mod selector;

pub use errors::WalkError;
pub use selector::{Selector, Step};

/// Settings for a [`Walker`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WalkConfig {
    /// How many levels below an input node a recursive step may descend
    pub max_depth: usize,
}

impl Default for WalkConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Evaluates selectors against node graphs.
#[derive(Debug, Clone)]
pub struct Walker<P> {
    provider: P,
    config: WalkConfig,
}

impl<P: NodeProvider> Walker<P> {
    /// Creates a walker with default settings
    pub fn new(provider: P) -> Self {
        Self::with_config(provider, WalkConfig::default())
    }

    /// Creates a walker with the given settings
    pub fn with_config(provider: P, config: WalkConfig) -> Self {
        Self { provider, config }
    }

    /// Sets the depth bound for recursive steps
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.config.max_depth = max_depth;
        self
    }

    /// Returns the provider used for introspection
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Returns every node the selector matches, in document order.
    ///
    /// Keys that do not resolve and indexes past the end drop the candidate
    /// rather than failing the whole selection.
    pub fn select(&self, root: &Node, selector: &Selector) -> Result<Vec<Node>> {
        let mut current = vec![root.clone()];
        for step in selector.steps() {
            let mut next = Vec::new();
            for node in &current {
                self.apply(step, node, &mut next)?;
            }
            current = next;
        }
        tracing::trace!(%selector, matches = current.len(), "Selector evaluated");
        Ok(current)
    }

    /// Resolves a definite selector to at most one node.
    ///
    /// Returns [`Child::Undefined`] as soon as a hop misses.
    pub fn read(&self, root: &Node, selector: &Selector) -> Result<Child> {
        if let Some((position, step)) = selector
            .steps()
            .iter()
            .enumerate()
            .find(|(_, step)| !step.is_definite())
        {
            return Err(WalkError::IndefiniteSelector {
                position,
                step: step.to_string(),
            }
            .into());
        }

        let mut current = root.clone();
        for step in selector.steps() {
            current = match step {
                Step::Key(key) if self.provider.is_map(&current) => {
                    match self.provider.get_child(&current, key) {
                        Child::Found(node) => node,
                        Child::Undefined => return Ok(Child::Undefined),
                    }
                }
                Step::Index(index) if self.provider.is_sequence(&current) => {
                    match self.provider.get_element(&current, *index) {
                        Ok(node) => node,
                        Err(e) if e.is_out_of_bounds() => return Ok(Child::Undefined),
                        Err(e) => return Err(e.into()),
                    }
                }
                _ => return Ok(Child::Undefined),
            };
        }
        Ok(Child::Found(current))
    }

    fn apply(&self, step: &Step, node: &Node, out: &mut Vec<Node>) -> Result<()> {
        match step {
            Step::Key(key) => {
                if self.provider.is_map(node) {
                    if let Child::Found(child) = self.provider.get_child(node, key) {
                        out.push(child);
                    }
                }
            }
            Step::Index(index) => {
                if self.provider.is_sequence(node) {
                    match self.provider.get_element(node, *index) {
                        Ok(child) => out.push(child),
                        Err(e) if e.is_out_of_bounds() => {}
                        Err(e) => return Err(e.into()),
                    }
                }
            }
            Step::Wildcard => out.extend(self.children(node)?),
            Step::Slice { start, end } => {
                if self.provider.is_sequence(node) {
                    let view = self.provider.to_sequence_view(node)?;
                    let len = view.len();
                    let end = end.unwrap_or(len).min(len);
                    let start = start.unwrap_or(0).min(end);
                    out.extend(view.as_slice()[start..end].iter().cloned());
                }
            }
            Step::Descendants => self.collect_descendants(node, out)?,
        }
        Ok(())
    }

    fn children(&self, node: &Node) -> Result<Vec<Node>> {
        if self.provider.is_sequence(node) {
            return Ok(self.provider.iterate(node)?.collect());
        }
        if !self.provider.is_map(node) {
            return Ok(Vec::new());
        }
        let keys = self.provider.list_keys(node)?;
        Ok(keys
            .iter()
            .filter_map(|key| self.provider.get_child(node, key).into_node())
            .collect())
    }

    /// Pushes `start` and everything below it onto `out`, depth first.
    ///
    /// Runs on an explicit work stack, so the depth bound is the only limit on
    /// how far a descent can go.
    fn collect_descendants(&self, start: &Node, out: &mut Vec<Node>) -> Result<()> {
        let mut pending = vec![(start.clone(), 0usize)];
        while let Some((node, depth)) = pending.pop() {
            if depth > self.config.max_depth {
                tracing::debug!(
                    limit = self.config.max_depth,
                    type_name = node.type_name(),
                    "Descent aborted at depth limit"
                );
                return Err(WalkError::DepthLimitExceeded {
                    limit: self.config.max_depth,
                }
                .into());
            }

            let children = self.children(&node)?;
            out.push(node);
            pending.extend(children.into_iter().rev().map(|child| (child, depth + 1)));
        }
        Ok(())
    }
}
