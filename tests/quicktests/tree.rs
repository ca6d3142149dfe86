use keytree::Tree;
use quickcheck_macros::quickcheck;

use std::collections::{BTreeSet, HashSet};

use crate::Op;

/// Applies a set of operations to a tree and a set.
/// This way we can ensure that after a random smattering of inserts
/// and deletes we have the same set of keys in both.
fn do_ops<K>(ops: &[Op<K>], bst: &mut Tree<K>, set: &mut BTreeSet<K>)
where
    K: Ord + Clone + std::fmt::Debug,
{
    for op in ops {
        match op {
            Op::Insert(k) => {
                bst.insert(k.clone());
                set.insert(k.clone());
            }
            Op::Delete(k) => {
                bst.delete(k);
                set.remove(k);
            }
            Op::Clear => {
                bst.clear();
                set.clear();
            }
        }
    }
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    let mut set = BTreeSet::new();

    do_ops(&ops, &mut tree, &mut set);
    let mut keys = tree.level_order();
    keys.sort_unstable();

    tree.len() == set.len()
        && set.iter().all(|key| tree.contains_key(key))
        && keys.into_iter().eq(set.into_iter())
}

#[quickcheck]
fn clear_between_operations(before: Vec<Op<i8>>, after: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    let mut set = BTreeSet::new();

    do_ops(&before, &mut tree, &mut set);
    do_ops(&[Op::Clear], &mut tree, &mut set);
    let cleared = tree.is_empty() && tree.len() == 0 && tree.minimum_depth() == 0;

    do_ops(&after, &mut tree, &mut set);
    cleared
        && tree.len() == set.len()
        && set.iter().all(|key| tree.contains_key(key))
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree = xs.iter().copied().collect::<Tree<_>>();

    xs.iter().all(|x| tree.contains_key(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree = xs.iter().copied().collect::<Tree<_>>();
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !tree.contains_key(x))
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree = xs.iter().copied().collect::<Tree<_>>();
    for delete in &deletes {
        tree.delete(delete);
    }

    let mut still_present = xs;
    for delete in &deletes {
        // We may have inserted the same value multiple times - delete each one.
        while let Some(pos) = still_present.iter().position(|x| x == delete) {
            still_present.swap_remove(pos);
        }
    }

    deletes.iter().all(|x| !tree.contains_key(x))
        && still_present.iter().all(|x| tree.contains_key(x))
}

#[quickcheck]
fn level_order_starts_at_root(xs: Vec<i8>) -> bool {
    let tree = xs.iter().copied().collect::<Tree<_>>();

    tree.level_order().first() == xs.first()
}

#[quickcheck]
fn level_order_is_restartable(xs: Vec<i8>) -> bool {
    let tree = xs.iter().copied().collect::<Tree<_>>();

    tree.level_order() == tree.level_order()
}
