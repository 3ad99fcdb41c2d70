//! Linear-time construction of a tree from an ordered sequence

use super::node::{Link, Node};
use rand::Rng;

/// Builds a subtree holding `values` in order, drawing each node's priority from `rng`
///
/// The usual way to do this -- merging one single-node tree at a time onto the end -- costs
/// `O(log n)` per element. Because every new node is appended at the far right, we can do better:
/// keep the right spine of the tree on a stack, and for each new node pop everything on the spine
/// with a lower priority. The popped chain becomes the new node's left subtree, and the new node
/// goes on top of the spine. Each node is pushed and popped once, so the whole thing is `O(n)`.
pub(super) fn build<T, R, I>(values: I, rng: &mut R) -> Link<T>
where
    R: Rng,
    I: IntoIterator<Item = T>,
{
    // Invariant: priorities are non-increasing from the bottom of the stack to the top, and each
    // entry's right child is still unset (it'll be the entry above it, once collapsed).
    let mut spine: Vec<Box<Node<T>>> = Vec::new();

    for value in values {
        let mut node = Node::new(value, rng.gen());

        // The chain of popped nodes, already linked up: each one is the right child of the next.
        let mut chain: Link<T> = None;
        while let Some(mut top) = spine.pop() {
            if top.priority >= node.priority {
                spine.push(top);
                break;
            }

            top.right = chain;
            top.update();
            chain = Some(top);
        }

        node.left = chain;
        node.update();
        spine.push(node);
    }

    debug_println!("build: right spine has {} nodes", spine.len());

    let mut root: Link<T> = None;
    while let Some(mut top) = spine.pop() {
        top.right = root;
        top.update();
        root = Some(top);
    }

    root
}
