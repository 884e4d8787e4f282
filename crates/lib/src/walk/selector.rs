//! Pre-built step lists for the walker.
//!
//! Selectors are assembled in code, never parsed from text.

use std::{
    fmt,
    ops::{Bound, RangeBounds},
};

/// One hop of a [`Selector`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Step {
    /// Child of a map-shaped node by key
    Key(String),
    /// Element of a sequence-shaped node by position
    Index(usize),
    /// Every child of a node
    Wildcard,
    /// Elements `start..end` of a sequence-shaped node, clamped to its length
    Slice {
        start: Option<usize>,
        end: Option<usize>,
    },
    /// The node itself followed by all of its descendants, depth first
    Descendants,
}

impl Step {
    /// Returns true if the step matches at most one node per input node
    pub fn is_definite(&self) -> bool {
        matches!(self, Step::Key(_) | Step::Index(_))
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Key(key) => write!(f, ".{key}"),
            Step::Index(index) => write!(f, "[{index}]"),
            Step::Wildcard => write!(f, "[*]"),
            Step::Slice { start, end } => {
                write!(f, "[")?;
                if let Some(start) = start {
                    write!(f, "{start}")?;
                }
                write!(f, ":")?;
                if let Some(end) = end {
                    write!(f, "{end}")?;
                }
                write!(f, "]")
            }
            Step::Descendants => write!(f, ".."),
        }
    }
}

/// An ordered list of [`Step`]s, built fluently.
///
/// ```
/// # use structpath::walk::Selector;
/// let selector = Selector::new().key("values").slice(1..3).key("bar");
/// assert_eq!(selector.to_string(), "$.values[1:3].bar");
/// assert!(!selector.is_definite());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Selector {
    steps: Vec<Step>,
}

impl Selector {
    /// Creates a selector that matches only the root
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a step
    pub fn push(mut self, step: Step) -> Self {
        self.steps.push(step);
        self
    }

    /// Appends a key step
    pub fn key(self, key: impl Into<String>) -> Self {
        self.push(Step::Key(key.into()))
    }

    /// Appends an index step
    pub fn index(self, index: usize) -> Self {
        self.push(Step::Index(index))
    }

    /// Appends a wildcard step
    pub fn wildcard(self) -> Self {
        self.push(Step::Wildcard)
    }

    /// Appends a slice step from any range of positions
    pub fn slice(self, range: impl RangeBounds<usize>) -> Self {
        let start = match range.start_bound() {
            Bound::Included(&s) => Some(s),
            Bound::Excluded(&s) => Some(s.saturating_add(1)),
            Bound::Unbounded => None,
        };
        let end = match range.end_bound() {
            Bound::Included(&e) => Some(e.saturating_add(1)),
            Bound::Excluded(&e) => Some(e),
            Bound::Unbounded => None,
        };
        self.push(Step::Slice { start, end })
    }

    /// Appends a descendants step
    pub fn descendants(self) -> Self {
        self.push(Step::Descendants)
    }

    /// Returns the steps in evaluation order
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Returns true if every step is definite
    pub fn is_definite(&self) -> bool {
        self.steps.iter().all(Step::is_definite)
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "$")?;
        for step in &self.steps {
            write!(f, "{step}")?;
        }
        Ok(())
    }
}

impl FromIterator<Step> for Selector {
    fn from_iter<I: IntoIterator<Item = Step>>(iter: I) -> Self {
        Self {
            steps: iter.into_iter().collect(),
        }
    }
}
