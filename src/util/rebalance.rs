use crate::rope::Rope;
use crate::util::Leaves;

/// Rebuilds `rope` from its leaves, merging runs of equal weight the way a
/// binary counter carries. Weight is the number of leaves under a subtree.
///
/// After every leaf the stack weights are strictly decreasing from bottom to
/// top, so the stack never holds more than `log2(leaves) + 1` entries and
/// each entry is a perfectly balanced tree.
#[tracing::instrument(level = "trace", skip_all, fields(len = rope.len()))]
pub(crate) fn rebalance(rope: &Rope) -> Rope {
    let mut stack: Vec<(Rope, usize)> = Vec::new();

    for leaf in Leaves::new(rope) {
        let mut subtree = leaf.clone();
        let mut weight = 1;

        while let Some((top, top_weight)) = stack.pop() {
            // A leaf shared with itself stays unmerged.
            if top_weight != weight || Rope::ptr_eq(&top, &subtree) {
                stack.push((top, top_weight));
                break;
            }
            subtree = top.concat(&subtree);
            weight += top_weight;
        }

        stack.push((subtree, weight));
    }

    let leaves: usize = stack.iter().map(|(_, weight)| weight).sum();
    let mut subtrees = stack.into_iter().map(|(subtree, _)| subtree);
    let Some(first) = subtrees.next() else {
        return rope.clone();
    };
    let balanced = subtrees.fold(first, |root, subtree| root.concat(&subtree));

    tracing::trace!(leaves, depth = balanced.depth(), "rebalanced rope");
    balanced
}
