//! Random workloads, replayed against the [`Mock`]
//!
//! All of these use fixed seeds, so any failure is reproducible.

use crate::mock::Mock;
use crate::PositionalTree;
use rand::{rngs::StdRng, Rng, SeedableRng};

fn check(tree: &PositionalTree<u32>, mock: &Mock<u32>) {
    tree.validate();
    assert_eq!(tree.len(), mock.len());
    assert_eq!(tree.to_sequence(), mock.as_slice());
}

#[test]
fn random_reorders() {
    for seed in 0..20 {
        let mut rng = StdRng::seed_from_u64(seed);
        let n = rng.gen_range(1..=200_u32);

        let mut tree = PositionalTree::build_with_rng(1..=n, &mut rng);
        let mut mock = Mock::build(1..=n);
        check(&tree, &mock);

        for _ in 0..100 {
            let left = rng.gen_range(1..=n as usize);
            let right = rng.gen_range(left..=n as usize);
            tree.move_range_to_front(left, right).unwrap();
            mock.move_range_to_front(left, right).unwrap();
            check(&tree, &mock);
        }
    }
}

#[test]
fn random_requests_with_failures() {
    let mut rng = StdRng::seed_from_u64(0xbad);
    let n = 64_usize;
    let mut tree = PositionalTree::build_with_rng(0..n as u32, &mut rng);
    let mut mock = Mock::build(0..n as u32);

    for _ in 0..500 {
        // deliberately allow out-of-range and backwards requests
        let left = rng.gen_range(0..=n + 1);
        let right = rng.gen_range(0..=n + 1);
        assert_eq!(
            tree.move_range_to_front(left, right),
            mock.move_range_to_front(left, right)
        );
        check(&tree, &mock);
    }
}

#[test]
fn random_split_merge() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut tree = PositionalTree::build_with_rng(0..300_u32, &mut rng);
    let mut mock = Mock::build(0..300_u32);

    for _ in 0..200 {
        let position = rng.gen_range(0..=tree.len());
        let (lhs, rhs) = tree.split(position);
        let (mock_lhs, mock_rhs) = mock.split(position);
        check(&lhs, &mock_lhs);
        check(&rhs, &mock_rhs);

        // put them back together the other way around
        tree = PositionalTree::merge(rhs, lhs);
        mock = Mock::merge(mock_rhs, mock_lhs);
        check(&tree, &mock);
    }
}

#[test]
fn idempotent_prefix_moves() {
    let mut rng = StdRng::seed_from_u64(9);
    let mut tree = PositionalTree::build_with_rng(0..128_u32, &mut rng);
    tree.move_range_to_front(40, 90).unwrap();
    let before = tree.to_sequence();

    for k in 1..=128 {
        tree.move_range_to_front(1, k).unwrap();
        assert_eq!(tree.to_sequence(), before);
    }
    tree.validate();
}
