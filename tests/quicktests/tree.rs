use bst::traverse;
use bst::tree::Tree;
use quickcheck_macros::quickcheck;

use std::collections::{BTreeSet, HashSet};

/// Builds a tree by inserting `xs` in order.
fn build(xs: &[i8]) -> Tree<i8> {
    xs.iter().copied().collect()
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree = build(&xs);

    xs.iter().all(|x| tree.search(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree = build(&xs);
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !tree.search(x))
}

#[quickcheck]
fn in_order_is_sorted_and_distinct(xs: Vec<i8>) -> bool {
    let tree = build(&xs);
    let expected: Vec<_> = xs.iter().copied().collect::<BTreeSet<_>>().into_iter().collect();

    tree.in_order().copied().eq(expected)
}

#[quickcheck]
fn len_counts_distinct_values(xs: Vec<i8>) -> bool {
    let tree = build(&xs);
    let distinct: HashSet<_> = xs.iter().collect();

    tree.len() == distinct.len()
}

#[quickcheck]
fn reinsert_is_idempotent(xs: Vec<i8>) -> bool {
    let mut tree = build(&xs);
    let before: Vec<_> = tree.pre_order().copied().collect();
    for x in &xs {
        tree.insert(*x);
    }

    tree.pre_order().copied().eq(before)
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree = build(&xs);
    let mut still_present: BTreeSet<_> = xs.into_iter().collect();

    for delete in &deletes {
        let expected = still_present.remove(delete).then(|| *delete);
        if tree.delete(delete) != expected {
            return false;
        }
    }

    // Deletion can leave values off their search path, so check membership
    // through a full walk rather than `search`.
    let mut walked: Vec<_> = tree.pre_order().copied().collect();
    walked.sort_unstable();

    tree.len() == still_present.len() && walked.into_iter().eq(still_present)
}

#[quickcheck]
fn insert_then_delete_restores_in_order(xs: Vec<i8>, x: i8) -> bool {
    let mut tree = build(&xs);
    if tree.search(&x) {
        return true;
    }
    let before: Vec<_> = tree.in_order().copied().collect();

    tree.insert(x);
    let deleted = tree.delete(&x);

    deleted == Some(x) && !tree.search(&x) && tree.in_order().copied().eq(before)
}

#[quickcheck]
fn walks_visit_every_node_once(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree = build(&xs);
    for delete in &deletes {
        tree.delete(delete);
    }

    let sorted = |walk: Vec<i8>| {
        let mut walk = walk;
        walk.sort_unstable();
        walk
    };
    let pre = sorted(tree.pre_order().copied().collect());
    let post = sorted(tree.post_order().copied().collect());
    let level = sorted(tree.level_order().copied().collect());
    let in_order = sorted(tree.in_order().copied().collect());

    pre.len() == tree.len() && pre == post && pre == level && pre == in_order
}

#[quickcheck]
fn height_bounds(xs: Vec<i8>) -> bool {
    let tree = build(&xs);
    let len = tree.len();
    let height = tree.height();

    if len == 0 {
        return height == 0;
    }

    // A chain is as tall as a tree gets; a perfectly full tree is as short.
    let min_height = (usize::BITS - len.leading_zeros() - 1) as usize;
    height < len && height >= min_height && height == traverse::height(tree.root())
}
