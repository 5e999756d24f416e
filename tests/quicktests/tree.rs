use int_bst::{Slot, Tree};

use std::collections::BTreeSet;

use quickcheck::quickcheck;

use crate::Op;

/// Applies a set of operations to a tree and a set, checking after each one
/// that copies never leak inserts back into the tree they came from.
fn do_ops(ops: &[Op<i16>], bst: &mut Tree, set: &mut BTreeSet<i64>) {
    for op in ops {
        match *op {
            Op::Insert(value) => {
                bst.insert(value.into());
                set.insert(value.into());
            }
            Op::InsertIntoCopy(value) => {
                let before = bst.copy();
                let mut copy = bst.copy();
                copy.insert(value.into());

                assert_eq!(*bst, before);
                assert_eq!(copy.is_equal(bst), bst.contains(value.into()));
            }
        }
    }
}

/// Checks that every node's left subtree holds only smaller values and its
/// right subtree only larger ones.
fn is_ordered(tree: &Tree) -> bool {
    let values: Vec<_> = tree.iter().collect();
    values.len() == tree.size() && values.windows(2).all(|pair| pair[0] < pair[1])
}

quickcheck! {
    fn fuzz_multiple_operations_i16(root: i16, ops: Vec<Op<i16>>) -> bool {
        let mut tree = Tree::new(root.into());
        let mut set = BTreeSet::new();
        set.insert(i64::from(root));

        do_ops(&ops, &mut tree, &mut set);
        is_ordered(&tree) && tree.iter().eq(set.iter().copied())
    }
}

quickcheck! {
    fn size_counts_distinct_values(root: i64, xs: Vec<i64>) -> bool {
        let mut tree = Tree::new(root);
        let mut distinct = BTreeSet::new();
        distinct.insert(root);

        for x in &xs {
            assert_eq!(tree.insert(*x), distinct.insert(*x));
        }

        tree.size() == distinct.len()
    }
}

quickcheck! {
    fn contains(root: i64, xs: Vec<i64>) -> bool {
        let mut tree = Tree::new(root);
        tree.extend(xs.iter().copied());

        tree.contains(root) && xs.iter().all(|x| tree.contains(*x))
    }
}

quickcheck! {
    fn contains_not(root: i8, xs: Vec<i8>, nots: Vec<i8>) -> bool {
        let mut tree = Tree::new(root.into());
        tree.extend(xs.iter().map(|x| i64::from(*x)));

        let mut added: BTreeSet<_> = xs.into_iter().collect();
        added.insert(root);
        let nots: BTreeSet<_> = nots.into_iter().collect();
        let mut nots = nots.difference(&added);

        nots.all(|x| !tree.contains((*x).into()))
    }
}

quickcheck! {
    fn min_and_max(root: i64, xs: Vec<i64>) -> bool {
        let mut tree = Tree::new(root);
        tree.extend(xs.iter().copied());

        let min = xs.iter().copied().fold(root, i64::min);
        let max = xs.iter().copied().fold(root, i64::max);
        tree.min() == min && tree.max() == max
    }
}

quickcheck! {
    fn closest_value_is_no_further_than_the_root(root: i32, xs: Vec<i32>, probe: i32) -> bool {
        let mut tree = Tree::new(root.into());
        tree.extend(xs.iter().map(|x| i64::from(*x)));

        let probe = i64::from(probe);
        let found = tree.find_closest_value_node(probe).value();
        tree.contains(found) && found.abs_diff(probe) <= i64::from(root).abs_diff(probe)
    }
}

quickcheck! {
    fn copies_are_equal(root: i64, xs: Vec<i64>) -> bool {
        let mut tree = Tree::new(root);
        tree.extend(xs);

        let copy = tree.copy();
        copy == tree && tree == copy && copy.size() == tree.size()
    }
}

#[test]
fn same_values_different_shapes() {
    let balanced = Tree::from_values([2, 1, 3]).unwrap();
    let chain = Tree::from_values([1, 2, 3]).unwrap();

    assert!(balanced.iter().eq(chain.iter()));
    assert_ne!(balanced, chain);
    assert_ne!(chain, balanced);
}

#[test]
fn right_only_inserts_leave_a_gap_on_the_left() {
    let tree: Tree = "10 15 13".parse().unwrap();

    assert_eq!(tree.values_at_depth(1), vec![Slot::Vacant, Slot::Occupied(15)]);
    assert_eq!(
        tree.level_grid(),
        vec![
            vec![Slot::Occupied(10)],
            vec![Slot::Vacant, Slot::Occupied(15)],
            vec![Slot::Vacant, Slot::Vacant, Slot::Occupied(13), Slot::Vacant],
        ]
    );
}
