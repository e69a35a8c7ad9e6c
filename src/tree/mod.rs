mod leaf;
mod node;

pub use self::leaf::Leaf;
pub use self::node::Node;

/// The two shapes a rope root can take.
#[derive(Debug)]
pub(crate) enum Tree {
    Leaf(Leaf),
    Node(Node),
}

impl Tree {
    pub(crate) fn len(&self) -> usize {
        match self {
            Tree::Leaf(leaf) => leaf.len(),
            Tree::Node(node) => node.len(),
        }
    }
}
