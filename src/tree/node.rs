use super::Tree;
use crate::rope::Rope;

/// An internal rope node joining two child ropes.
///
/// The combined length is computed once when the node is built. Children are
/// never reassigned afterwards, so the cached length can't go stale.
#[derive(Debug, Clone)]
pub struct Node {
    left: Rope,
    right: Rope,
    length: usize,
}

impl Node {
    pub(crate) fn join(left: Rope, right: Rope) -> Self {
        let length = left.len() + right.len();
        Self { left, right, length }
    }

    pub fn left(&self) -> &Rope {
        &self.left
    }

    pub fn right(&self) -> &Rope {
        &self.right
    }

    pub fn len(&self) -> usize {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Splits the subtree so that the left piece holds the first `index`
    /// bytes. Splitting exactly between the children hands them back as-is.
    ///
    /// Descends in a loop and remembers the siblings passed on the way down,
    /// so append chains of any depth split without recursion.
    pub(crate) fn split_at(&self, index: usize) -> (Rope, Rope) {
        debug_assert!(index <= self.length);
        let mut lefts: Vec<&Rope> = Vec::new();
        let mut rights: Vec<&Rope> = Vec::new();
        let mut node = self;
        let mut index = index;

        let (mut left, mut right) = loop {
            let mid = node.left.len();
            let next = if index == mid {
                break (node.left.clone(), node.right.clone());
            } else if index < mid {
                rights.push(&node.right);
                &node.left
            } else {
                lefts.push(&node.left);
                index -= mid;
                &node.right
            };

            match next.tree() {
                Tree::Leaf(leaf) => break leaf.split_at(index),
                Tree::Node(child) => node = child,
            }
        };

        // Innermost siblings were pushed last and join first.
        for sibling in rights.into_iter().rev() {
            right = right.concat(sibling);
        }
        for sibling in lefts.into_iter().rev() {
            left = sibling.concat(&left);
        }
        (left, right)
    }

    pub(crate) fn slice(&self, start: usize, end: usize) -> Rope {
        debug_assert!(start <= end && end <= self.length);
        let (_, tail) = self.split_at(start);
        // `tail` starts at `start`, so the end offset has to be rebased onto it.
        let (slice, _) = tail.split_unchecked(end - start);
        slice
    }

    /// The child holding byte `index`, and the offset rebased onto it.
    pub(crate) fn child_at(&self, index: usize) -> (&Rope, usize) {
        let mid = self.left.len();
        if index < mid {
            (&self.left, index)
        } else {
            (&self.right, index - mid)
        }
    }
}

impl Drop for Node {
    // Tear down uniquely owned descendants with a work list. The derived drop
    // glue would recurse once per level and overflow on long append chains.
    fn drop(&mut self) {
        let mut pending = vec![self.left.take(), self.right.take()];
        while let Some(rope) = pending.pop() {
            if let Some(Tree::Node(mut node)) = rope.into_tree() {
                pending.push(node.left.take());
                pending.push(node.right.take());
            }
        }
    }
}
