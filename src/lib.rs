#![no_std]

extern crate alloc;

#[cfg(test)]
#[macro_use]
extern crate std;

#[cfg(test)]
extern crate quickcheck;

#[cfg(test)]
#[macro_use(quickcheck)]
extern crate quickcheck_macros;

pub mod avl_tree;
pub mod bst;
pub mod ordered_map;
pub mod rb_tree;

pub use avl_tree::AvlTree;
pub use bst::BinarySearchTree;
pub use ordered_map::OrderedMap;
pub use rb_tree::RBTree;
