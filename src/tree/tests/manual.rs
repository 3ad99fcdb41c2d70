use crate::{Error, PositionalTree};
use rand::rngs::{mock::StepRng, StdRng};
use rand::SeedableRng;

#[test]
fn reversed_bounds_are_rejected() {
    let mut tree = PositionalTree::build([1, 2, 3]);
    assert_eq!(
        tree.move_range_to_front(2, 1),
        Err(Error::InvalidRange { left: 2, right: 1, len: 3 })
    );
    tree.validate();
    assert_eq!(tree.to_sequence(), [1, 2, 3]);
}

#[test]
fn out_of_bounds_ranges_are_not_clamped() {
    let mut tree = PositionalTree::build([1, 2, 3]);
    assert_eq!(
        tree.move_range_to_front(0, 2),
        Err(Error::InvalidRange { left: 0, right: 2, len: 3 })
    );
    assert_eq!(
        tree.move_range_to_front(2, 4),
        Err(Error::InvalidRange { left: 2, right: 4, len: 3 })
    );
    assert_eq!(
        tree.move_to_front(1..=3),
        Err(Error::InvalidRange { left: 2, right: 4, len: 3 })
    );
    assert_eq!(tree.to_sequence(), [1, 2, 3]);
}

#[test]
fn range_errors_read_the_same_from_both_indexings() {
    let mut tree = PositionalTree::build([1, 2, 3]);
    let one_indexed = tree.move_range_to_front(2, 4).unwrap_err();
    let zero_indexed = tree.move_to_front(1..=3).unwrap_err();
    assert_eq!(one_indexed, zero_indexed);
    assert_eq!(
        zero_indexed.to_string(),
        "invalid 1-indexed range [2, 4] for a sequence of length 3"
    );
    assert_eq!(
        tree.move_to_front(2..1).unwrap_err().to_string(),
        "invalid 1-indexed range [3, 1] for a sequence of length 3"
    );
}

#[test]
fn empty_tree_underflow() {
    let mut tree: PositionalTree<u32> = PositionalTree::new_empty();
    assert_eq!(
        tree.move_range_to_front(1, 1),
        Err(Error::EmptyTreeUnderflow { position: 1, len: 0 })
    );
    assert_eq!(
        tree.move_to_front(..),
        Err(Error::EmptyTreeUnderflow { position: 0, len: 0 })
    );

    // building from nothing is the same as never building at all
    let mut built: PositionalTree<u32> = PositionalTree::build(None);
    assert!(built.is_empty());
    assert!(built.move_range_to_front(1, 1).is_err());
}

#[test]
fn split_out_of_bounds_panics() {
    assert!(std::panic::catch_unwind(|| {
        let tree = PositionalTree::build(0..4);
        tree.split(5)
    })
    .is_err());
}

#[test]
fn split_off_out_of_bounds_keeps_tree() {
    let mut tree = PositionalTree::build(0..4);
    assert_eq!(
        tree.split_off(5).err(),
        Some(Error::EmptyTreeUnderflow { position: 5, len: 4 })
    );
    assert_eq!(tree.to_sequence(), [0, 1, 2, 3]);

    let mut empty: PositionalTree<u8> = PositionalTree::new_empty();
    assert!(empty.split_off(0).unwrap().is_empty());
}

#[test]
fn merge_with_empty() {
    let tree = PositionalTree::build(0..3);
    let merged = PositionalTree::merge(PositionalTree::new_empty(), tree);
    let merged = PositionalTree::merge(merged, PositionalTree::new_empty());
    merged.validate();
    assert_eq!(merged.to_sequence(), [0, 1, 2]);
}

#[test]
fn single_element() {
    let mut tree = PositionalTree::build(["only"]);
    tree.move_range_to_front(1, 1).unwrap();
    assert_eq!(tree.to_sequence(), ["only"]);
    assert_eq!(tree.get(0), Some(&"only"));
    assert_eq!(tree.get(1), None);
}

// Non-`Clone` payloads work for everything that doesn't copy values out.
#[test]
fn non_clone_values() {
    struct Opaque(u32);

    let mut tree = PositionalTree::build((0..5).map(Opaque));
    tree.move_range_to_front(4, 5).unwrap();
    let seen: Vec<u32> = tree.iter().map(|o| o.0).collect();
    assert_eq!(seen, [3, 4, 0, 1, 2]);
}

// Sorted input used to be the worst case when priorities were taken from the values themselves.
// With independent priorities, the depth stays logarithmic no matter the order.
#[test]
fn sorted_input_stays_shallow() {
    fn height<T>(node: Option<&super::super::node::Node<T>>) -> usize {
        match node {
            None => 0,
            Some(n) => 1 + height(n.left.as_deref()).max(height(n.right.as_deref())),
        }
    }

    let n = 1 << 16;
    let mut rng = StdRng::seed_from_u64(1);
    let mut tree = PositionalTree::build_with_rng(0..n, &mut rng);
    for i in 1..200 {
        tree.move_range_to_front(i * 100, i * 100 + i).unwrap();
    }

    // expected height is about 2.99 * ln(n), so ~33 here
    let h = height(tree.root.as_deref());
    assert!(h < 100, "height {h} is far too large for {n} elements");
    tree.validate();
}

#[test]
fn degenerate_tree_drops_cleanly() {
    // Strictly decreasing priorities: every node ends up as the right child of the one before it
    let mut rng = StepRng::new(u64::MAX, u64::MAX);
    let n = 1_000_000_u32;

    enable_debug!();
    let tree = PositionalTree::build_with_rng(0..n, &mut rng);
    disable_debug!();

    let mut depth = 0;
    let mut node = tree.root.as_deref();
    while let Some(spine) = node {
        assert!(spine.left.is_none());
        depth += 1;
        node = spine.right.as_deref();
    }
    assert_eq!(depth, n as usize);
    assert_eq!(tree.len(), n as usize);
    assert_eq!(tree.get(n as usize - 1), Some(&(n - 1)));
    assert!(tree.iter().copied().eq(0..n));

    // A recursive drop would need a stack frame per level here
    drop(tree);
}

#[test]
fn debug_output_is_per_thread() {
    enable_debug!();
    let elsewhere = std::thread::spawn(|| crate::macros::DEBUG.with(|d| d.get()))
        .join()
        .unwrap();
    assert!(crate::macros::DEBUG.with(|d| d.get()));
    disable_debug!();
    assert!(!elsewhere);
}
