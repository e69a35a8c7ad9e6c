use bytes::Bytes;
use std::fmt;
use std::sync::{Arc, OnceLock};

use crate::error::{Error, Result};
use crate::tree::{Leaf, Node, Tree};
use crate::util::{self, Leaves};

/// A persistent rope of bytes.
///
/// Cloning a rope clones a reference-counted handle, not the text. Every
/// operation returns a new rope and leaves `self` (and anything sharing its
/// subtrees) unchanged, so ropes can be read from any number of threads.
#[derive(Clone)]
pub struct Rope {
    root: Arc<Tree>,
}

impl Rope {
    /// An empty rope. All empty ropes share one leaf.
    pub fn new() -> Self {
        static EMPTY: OnceLock<Rope> = OnceLock::new();
        EMPTY.get_or_init(|| Self::from(Leaf::new(Bytes::new()))).clone()
    }

    pub fn len(&self) -> usize {
        self.root.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn as_leaf(&self) -> Option<&Leaf> {
        match self.root.as_ref() {
            Tree::Leaf(leaf) => Some(leaf),
            Tree::Node(_) => None,
        }
    }

    pub fn as_node(&self) -> Option<&Node> {
        match self.root.as_ref() {
            Tree::Node(node) => Some(node),
            Tree::Leaf(_) => None,
        }
    }

    pub fn ptr_eq(a: &Rope, b: &Rope) -> bool {
        Arc::ptr_eq(&a.root, &b.root)
    }

    pub(crate) fn tree(&self) -> &Tree {
        &self.root
    }

    pub(crate) fn take(&mut self) -> Rope {
        std::mem::replace(self, Rope::new())
    }

    /// Gives up this handle, returning the tree if no other handle shares it.
    pub(crate) fn into_tree(self) -> Option<Tree> {
        Arc::into_inner(self.root)
    }

    pub fn concat(&self, other: &Rope) -> Rope {
        Self::from(Node::join(self.clone(), other.clone()))
    }

    /// Concatenates two or more ropes into a left-associated chain,
    /// `((a + b) + rest[0]) + ...`.
    pub fn concat_many<I>(a: Rope, b: Rope, rest: I) -> Rope
    where
        I: IntoIterator<Item = Rope>,
    {
        rest.into_iter().fold(a.concat(&b), |acc, rope| acc.concat(&rope))
    }

    /// Like [`Rope::concat_many`], for operand lists whose length is only
    /// known at runtime. Fewer than two operands is an error.
    pub fn try_concat<I>(ropes: I) -> Result<Rope>
    where
        I: IntoIterator<Item = Rope>,
    {
        let mut ropes = ropes.into_iter();
        match (ropes.next(), ropes.next()) {
            (Some(a), Some(b)) => Ok(Self::concat_many(a, b, ropes)),
            (first, _) => {
                let count = usize::from(first.is_some());
                tracing::debug!(count, "rejected concat with too few operands");
                Err(Error::InvalidArgument(format!(
                    "concat needs at least two ropes, got {count}"
                )))
            }
        }
    }

    pub fn split_at(&self, index: usize) -> Result<(Rope, Rope)> {
        self.check_offset(index)?;
        Ok(self.split_unchecked(index))
    }

    pub(crate) fn split_unchecked(&self, index: usize) -> (Rope, Rope) {
        match self.tree() {
            Tree::Leaf(leaf) => leaf.split_at(index),
            Tree::Node(node) => node.split_at(index),
        }
    }

    pub fn slice(&self, start: usize, end: usize) -> Result<Rope> {
        self.check_range(start, end)?;
        Ok(match self.tree() {
            Tree::Leaf(leaf) => leaf.slice(start, end),
            Tree::Node(node) => node.slice(start, end),
        })
    }

    pub fn byte_at(&self, index: usize) -> Result<u8> {
        if index >= self.len() {
            return Err(Error::IndexOutOfRange { index, length: self.len() });
        }
        Ok(self.byte_at_unchecked(index))
    }

    fn byte_at_unchecked(&self, index: usize) -> u8 {
        let mut rope = self;
        let mut index = index;
        loop {
            match rope.tree() {
                Tree::Leaf(leaf) => return leaf.byte_at(index),
                Tree::Node(node) => (rope, index) = node.child_at(index),
            }
        }
    }

    /// Offset of the first occurrence of `byte`, scanning every leaf in order.
    pub fn index(&self, byte: u8) -> Option<usize> {
        let mut offset = 0;
        for leaf in self.leaves() {
            if let Some(found) = leaf.index(byte) {
                return Some(offset + found);
            }
            offset += leaf.len();
        }
        None
    }

    /// Flattens the rope. Nothing is cached, each call walks the whole tree.
    pub fn value(&self) -> Vec<u8> {
        let mut value = Vec::with_capacity(self.len());
        for leaf in self.leaves() {
            value.extend_from_slice(leaf.value());
        }
        value
    }

    pub fn bytes(&self) -> impl Iterator<Item = u8> + '_ {
        self.leaves().flat_map(|leaf| leaf.value().iter().copied())
    }

    pub fn to_string_lossy(&self) -> String {
        String::from_utf8_lossy(&self.value()).into_owned()
    }

    /// Rebuilds the tree so its depth is logarithmic in the leaf count. The
    /// value is unchanged.
    pub fn rebalance(&self) -> Rope {
        match self.tree() {
            Tree::Leaf(_) => self.clone(),
            Tree::Node(_) => util::rebalance(self),
        }
    }

    pub fn insert(&self, index: usize, text: impl Into<Rope>) -> Result<Rope> {
        let (left, right) = self.split_at(index)?;
        Ok(Self::concat_many(left, text.into(), [right]))
    }

    /// Returns a rope with the bytes `[start, end)` removed.
    pub fn delete(&self, start: usize, end: usize) -> Result<Rope> {
        self.check_range(start, end)?;
        let (left, tail) = self.split_unchecked(start);
        let (_, right) = tail.split_unchecked(end - start);
        Ok(left.concat(&right))
    }

    /// Height of the tree; a leaf has depth 0.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(self, 0)];
        while let Some((rope, depth)) = stack.pop() {
            match rope.tree() {
                Tree::Leaf(_) => deepest = deepest.max(depth),
                Tree::Node(node) => {
                    stack.push((node.left(), depth + 1));
                    stack.push((node.right(), depth + 1));
                }
            }
        }
        deepest
    }

    pub fn leaf_count(&self) -> usize {
        self.leaves().count()
    }

    fn leaves(&self) -> impl Iterator<Item = &Leaf> + '_ {
        Leaves::new(self).filter_map(Rope::as_leaf)
    }

    fn check_offset(&self, index: usize) -> Result<()> {
        if index > self.len() {
            return Err(Error::IndexOutOfRange { index, length: self.len() });
        }
        Ok(())
    }

    fn check_range(&self, start: usize, end: usize) -> Result<()> {
        if start > end {
            return Err(Error::InvalidArgument(format!(
                "range start {start} is greater than end {end}"
            )));
        }
        self.check_offset(end)
    }
}

impl Default for Rope {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Leaf> for Rope {
    fn from(leaf: Leaf) -> Self {
        Self { root: Arc::new(Tree::Leaf(leaf)) }
    }
}

impl From<Node> for Rope {
    fn from(node: Node) -> Self {
        Self { root: Arc::new(Tree::Node(node)) }
    }
}

impl From<Bytes> for Rope {
    fn from(value: Bytes) -> Self {
        Self::from(Leaf::new(value))
    }
}

impl From<Vec<u8>> for Rope {
    fn from(value: Vec<u8>) -> Self {
        Self::from(Bytes::from(value))
    }
}

impl From<String> for Rope {
    fn from(value: String) -> Self {
        Self::from(Bytes::from(value))
    }
}

impl From<&[u8]> for Rope {
    fn from(value: &[u8]) -> Self {
        Self::from(Bytes::copy_from_slice(value))
    }
}

impl From<&str> for Rope {
    fn from(value: &str) -> Self {
        Self::from(value.as_bytes())
    }
}

impl PartialEq for Rope {
    fn eq(&self, other: &Self) -> bool {
        Rope::ptr_eq(self, other) || (self.len() == other.len() && self.bytes().eq(other.bytes()))
    }
}

impl Eq for Rope {}

// The derived form would recurse through every node.
impl fmt::Debug for Rope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rope")
            .field("len", &self.len())
            .field("value", &self.to_string_lossy())
            .finish()
    }
}

impl fmt::Display for Rope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_lossy())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rope;
    use color_eyre::Result;

    #[test]
    fn concat_identity() {
        let rope = rope!["abc", "def", "ghi"];
        assert_eq!(rope.value(), b"abcdefghi");
        assert_eq!(rope.len(), 9);
    }

    #[test]
    fn concat_many_is_left_associated() {
        let rope = Rope::concat_many("a".into(), "b".into(), [Rope::from("c"), Rope::from("d")]);
        let node = rope.as_node().unwrap();
        assert_eq!(node.left().to_string(), "abc");
        assert_eq!(node.right().to_string(), "d");
        assert_eq!(rope.depth(), 3);
    }

    #[test]
    fn try_concat_requires_two_operands() -> Result<()> {
        assert!(matches!(Rope::try_concat(Vec::new()), Err(Error::InvalidArgument(_))));
        assert!(matches!(Rope::try_concat([Rope::from("a")]), Err(Error::InvalidArgument(_))));

        let rope = Rope::try_concat(["a", "b", "c"].map(Rope::from))?;
        assert_eq!(rope.to_string(), "abc");
        Ok(())
    }

    #[test]
    fn out_of_range_offsets_are_rejected() {
        let rope = rope!["abc", "def"];
        let out_of_range = |index| Error::IndexOutOfRange { index, length: 6 };

        assert_eq!(rope.byte_at(6), Err(out_of_range(6)));
        assert_eq!(rope.split_at(7).unwrap_err(), out_of_range(7));
        assert_eq!(rope.slice(2, 9).unwrap_err(), out_of_range(9));
        assert_eq!(rope.insert(8, "x").unwrap_err(), out_of_range(8));
        assert_eq!(rope.delete(0, 7).unwrap_err(), out_of_range(7));
        assert!(Rope::new().byte_at(0).is_err());
    }

    #[test]
    fn reversed_range_is_invalid() {
        let rope = rope!["abc", "def"];
        assert!(matches!(rope.slice(4, 2), Err(Error::InvalidArgument(_))));
        assert!(matches!(rope.delete(4, 2), Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn leaf_slice_and_split() -> Result<()> {
        let rope = Rope::from("hello");
        assert_eq!(rope.slice(1, 3)?.to_string(), "el");
        let (left, right) = rope.split_at(5)?;
        assert_eq!(left, rope);
        assert!(right.is_empty());
        Ok(())
    }

    #[test]
    fn insert_and_delete_are_persistent() -> Result<()> {
        let original = rope!["hello", "world"];
        let spaced = original.insert(5, " ")?;
        let trimmed = spaced.delete(0, 6)?;

        assert_eq!(original.to_string(), "helloworld");
        assert_eq!(spaced.to_string(), "hello world");
        assert_eq!(trimmed.to_string(), "world");
        Ok(())
    }

    #[test]
    fn equality_ignores_shape() {
        let chain = rope!["a", "b", "c", "d"];
        let flat = Rope::from("abcd");
        assert_eq!(chain, flat);
        assert_ne!(chain, Rope::from("abce"));
        assert_ne!(chain, Rope::from("abc"));
    }

    #[test]
    fn display_is_lossy_utf8() {
        let rope = rope![&b"caf\xc3"[..], &b"\xa9 \xff"[..]];
        assert_eq!(rope.to_string(), "café \u{fffd}");
        assert_eq!(rope.len(), 7);
    }

    #[test]
    fn rebalancing_a_leaf_is_identity() {
        let leaf = Rope::from("abc");
        assert!(Rope::ptr_eq(&leaf.rebalance(), &leaf));
    }

    #[test]
    fn empty_rope() {
        let rope = Rope::default();
        assert!(rope.is_empty());
        assert_eq!(rope.depth(), 0);
        assert_eq!(rope.leaf_count(), 1);
        assert_eq!(rope.index(b'a'), None);
        assert_eq!(rope.to_string(), "");
    }
}
