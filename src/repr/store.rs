use std::{fmt::Debug, hash::Hash};

use fxhash::FxHashMap;

use crate::node::*;

/// Vertex labels are opaque, value-comparable identifiers. Equality and hashing
/// decide uniqueness; two separately allocated but equal labels denote the same
/// vertex (lookups never compare identity). `Debug` is required so that
/// rejected labels can be named in log lines.
pub trait Label: Clone + Eq + Hash + Debug {
    /// Returns *true* if the label may be inserted as a vertex
    fn is_valid(&self) -> bool {
        true
    }
}

impl Label for String {
    fn is_valid(&self) -> bool {
        !self.is_empty()
    }
}

impl Label for &str {
    fn is_valid(&self) -> bool {
        !self.is_empty()
    }
}

macro_rules! impl_trivial_label {
    ($($type:ty),*) => {
        $(
            impl Label for $type {}
        )*
    };
}

impl_trivial_label!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize, char);

/// An ordered sequence of unique labels with dense, reusable indices.
///
/// Maintains `index -> label` (a `Vec`) and `label -> index` (a hash map) in
/// lockstep. Indices are dense in `0..len`: removing a label compacts the
/// sequence, shifting every later label down by one index. This shift is
/// mirrored into the reverse map, so both views agree after every mutation.
#[derive(Clone, Default)]
pub struct VertexStore<L: Label> {
    labels: Vec<L>,
    index: FxHashMap<L, Node>,
}

impl<L: Label> VertexStore<L> {
    /// Creates an empty store
    pub fn new() -> Self {
        Self {
            labels: Vec::new(),
            index: FxHashMap::default(),
        }
    }

    /// Returns the number of stored labels
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Returns the number of stored labels as NumNodes
    pub fn number_of_labels(&self) -> NumNodes {
        self.labels.len() as NumNodes
    }

    /// Returns *true* if no label is stored
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Appends a label and returns its assigned index, or `None` if an equal
    /// label is already present.
    pub fn try_insert(&mut self, label: L) -> Option<Node> {
        if self.index.contains_key(&label) {
            return None;
        }

        let u = self.labels.len() as Node;
        self.index.insert(label.clone(), u);
        self.labels.push(label);
        Some(u)
    }

    /// Removes a label and returns the index it occupied, or `None` if it was
    /// not present. All labels with larger indices shift down by one.
    pub fn remove(&mut self, label: &L) -> Option<Node> {
        let u = self.index.remove(label)?;
        self.labels.remove(u as usize);

        for l in &self.labels[u as usize..] {
            // every label after the gap shifted down by one
            *self.index.get_mut(l).unwrap() -= 1;
        }

        Some(u)
    }

    /// Returns the index of a label, or `None` if it is not present
    pub fn index_of(&self, label: &L) -> Option<Node> {
        self.index.get(label).copied()
    }

    /// Returns *true* if an equal label is stored
    pub fn contains(&self, label: &L) -> bool {
        self.index.contains_key(label)
    }

    /// Returns the label at index `u`
    /// ** Panics if `u >= len` **
    pub fn label_of(&self, u: Node) -> &L {
        &self.labels[u as usize]
    }

    /// Returns an iterator over all labels in index order
    pub fn labels(&self) -> impl Iterator<Item = &L> + '_ {
        self.labels.iter()
    }

    /// Removes all labels
    pub fn clear(&mut self) {
        self.labels.clear();
        self.index.clear();
    }
}
