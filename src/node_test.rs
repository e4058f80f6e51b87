use super::*;

fn leaf(prefix: &[Nibble], value: &[u8]) -> Tree {
    Tree::new_leaf(prefix.to_vec(), value.to_vec())
}

#[test]
fn empty_hash_is_zero() {
    assert_eq!(Tree::empty().hash(), Hash::ZERO);
    assert!(Tree::empty().is_empty());
    assert_eq!(Tree::empty().size(), 0);
}

#[test]
fn leaf_hash_ignores_prefix() {
    let a = leaf(&[1, 2, 3], b"value");
    let b = leaf(&[], b"value");
    assert_eq!(a.hash(), b.hash());
    assert_eq!(a.hash(), digest(b"value"));
    assert_eq!(a.size(), 1);
}

#[test]
#[should_panic(expected = "at least two children")]
fn branch_requires_two_children() {
    let mut children: [Option<Box<Tree>>; 16] = Default::default();
    children[3] = Some(Box::new(leaf(&[], b"only one")));
    Tree::new_branch(vec![], children);
}

#[test]
#[should_panic(expected = "must not be Empty")]
fn branch_rejects_empty_child() {
    let mut children: [Option<Box<Tree>>; 16] = Default::default();
    children[1] = Some(Box::new(leaf(&[], b"a")));
    children[2] = Some(Box::new(Tree::empty()));
    Tree::new_branch(vec![], children);
}

#[test]
fn branch_hash_depends_on_slot_not_just_hash_set() {
    let mut a: [Option<Box<Tree>>; 16] = Default::default();
    a[1] = Some(Box::new(leaf(&[], b"x")));
    a[2] = Some(Box::new(leaf(&[], b"y")));

    let mut b: [Option<Box<Tree>>; 16] = Default::default();
    b[3] = Some(Box::new(leaf(&[], b"x")));
    b[4] = Some(Box::new(leaf(&[], b"y")));

    let ta = Tree::new_branch(vec![], a);
    let tb = Tree::new_branch(vec![], b);
    assert_ne!(ta.hash(), tb.hash());
}

#[test]
fn branch_size_sums_children() {
    let mut children: [Option<Box<Tree>>; 16] = Default::default();
    children[0] = Some(Box::new(leaf(&[], b"a")));
    children[1] = Some(Box::new(leaf(&[], b"b")));
    let branch = Tree::new_branch(vec![], children);
    assert_eq!(branch.size(), 2);
}

#[test]
fn child_at_consumes_prefix_then_nibble() {
    let mut children: [Option<Box<Tree>>; 16] = Default::default();
    children[0xa] = Some(Box::new(leaf(&[0xc, 0xd], b"a")));
    children[0xb] = Some(Box::new(leaf(&[0xe, 0xf], b"b")));
    let branch = Tree::new_branch(vec![1, 2], children);

    let found = branch.child_at(&[1, 2, 0xa]).unwrap();
    assert_eq!(found.hash(), digest(b"a"));

    assert!(branch.child_at(&[1, 2, 0xc]).is_none());
    assert!(branch.child_at(&[9, 9, 0xa]).is_none());
}

#[test]
fn child_at_empty_path_returns_self() {
    let t = leaf(&[1, 2], b"a");
    assert_eq!(t.child_at(&[]).unwrap().hash(), t.hash());
}
