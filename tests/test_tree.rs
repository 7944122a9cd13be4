use data_structures::{StructureError, Tree, Visitor};
use itertools::Itertools;

/// Records every visited payload
#[derive(Default)]
struct Recorder(Vec<&'static str>);

impl Visitor<&'static str> for Recorder {
    fn visit(&mut self, data: &&'static str) {
        self.0.push(*data);
    }
}

fn leaf_pair() -> Tree<&'static str> {
    let mut tree = Tree::with_root("R");
    tree.add_subtree(Tree::with_root("A")).unwrap();
    tree.add_subtree(Tree::with_root("B")).unwrap();
    tree
}

#[test_log::test]
fn test_preorder_and_postorder_of_two_leaves() {
    let tree = leaf_pair();

    let mut recorder = Recorder::default();
    tree.preorder(&mut recorder);
    assert_eq!(recorder.0, &["R", "A", "B"]);

    let mut recorder = Recorder::default();
    tree.postorder(&mut recorder);
    assert_eq!(recorder.0, &["A", "B", "R"]);

    let mut recorder = Recorder::default();
    tree.inorder(&mut recorder);
    assert_eq!(recorder.0, &["A", "R", "B", "R"]);
}

#[test_log::test]
fn test_size_counts_every_grafted_node() {
    // Layout of the tree
    //       a
    //     /   \
    //    b     e
    //   / \    |
    //  c   d   f
    //          |
    //          g
    let mut b = Tree::with_root("b");
    b.add_subtree(Tree::with_root("c")).unwrap();
    b.add_subtree(Tree::with_root("d")).unwrap();
    assert_eq!(b.size(), 3);

    let mut f = Tree::with_root("f");
    f.add_subtree(Tree::with_root("g")).unwrap();
    let mut e = Tree::with_root("e");
    e.add_subtree(f).unwrap();

    let mut a = Tree::with_root("a");
    a.add_subtree(b).unwrap();
    a.add_subtree(e).unwrap();
    assert_eq!(a.size(), 7);

    assert_eq!(a.iter_preorder().copied().join(""), "abcdefg");
    assert_eq!(a.iter_postorder().copied().join(""), "cdbgfea");
    // Subtrees below the root are walked in preorder, the root follows each of them
    assert_eq!(a.iter_inorder().copied().join(""), "bcdaefga");
}

#[test]
fn test_empty_tree_is_never_visited() {
    let tree: Tree<&'static str> = Tree::default();
    let mut recorder = Recorder::default();
    tree.preorder(&mut recorder);
    tree.postorder(&mut recorder);
    tree.inorder(&mut recorder);
    assert!(recorder.0.is_empty());
    assert_eq!(tree.size(), 0);
}

#[test]
fn test_graft_onto_empty_tree() {
    let mut tree = Tree::new();
    assert_eq!(
        tree.add_subtree(leaf_pair()),
        Err(StructureError::InvalidOperation("cannot add a subtree to a tree without root"))
    );
    assert_eq!(tree.size(), 0);
}

#[test]
fn test_closure_visitor_sums_payloads() {
    let mut tree = Tree::with_root(10);
    let mut child = Tree::with_root(20);
    child.add_subtree(Tree::with_root(30)).unwrap();
    tree.add_subtree(child).unwrap();

    let mut sum = 0;
    tree.postorder(&mut |value: &i32| sum += value);
    assert_eq!(sum, 60);
}
