use crate::rope::Rope;
use crate::tree::Tree;

/// In-order walk over the leaf handles of a rope.
///
/// Yields the rope handles themselves rather than the `Leaf` payloads so
/// callers can keep sharing them.
pub(crate) struct Leaves<'a> {
    stack: Vec<&'a Rope>,
}

impl<'a> Leaves<'a> {
    pub(crate) fn new(root: &'a Rope) -> Self {
        Self { stack: vec![root] }
    }
}

impl<'a> Iterator for Leaves<'a> {
    type Item = &'a Rope;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(rope) = self.stack.pop() {
            match rope.tree() {
                Tree::Leaf(_) => return Some(rope),
                Tree::Node(node) => {
                    self.stack.push(node.right());
                    self.stack.push(node.left());
                }
            }
        }

        None
    }
}
