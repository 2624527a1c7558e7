// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `aabb_tree`: a dynamic axis-aligned bounding-box tree.
//!
//! This is a self-balancing binary BVH used by simulation and
//! collision-detection workloads to answer: *which stored objects have an
//! AABB overlapping a query AABB?* Objects may be inserted, removed, and
//! moved at runtime; the tree rebalances incrementally so queries stay
//! close to logarithmic in the number of leaves.
//!
//! - Insert, remove, and update AABBs with a user payload per leaf.
//! - Query by intersecting AABB, visiting matches via a stop/continue
//!   callback.
//! - A "fat AABB" update policy absorbs small motions without touching
//!   tree structure.
//!
//! It is generic over the dimension `N`, the scalar element type `T`, and
//! the payload type `V`; it does not depend on any geometry crate. A
//! caller's own vector/AABB types can be used directly by implementing the
//! [`AabbAdapter`]/[`VecAdapter`] extractor traits rather than converting.
//!
//! # Example
//!
//! ```rust
//! use aabb_tree::{Aabb, Tree, Vector};
//!
//! let mut tree: Tree<2, f64, &str> = Tree::default();
//! let a = tree.insert(&Aabb::new(Vector::new([0.0, 0.0]), Vector::new([1.0, 1.0])), "a").unwrap();
//! let _b = tree.insert(&Aabb::new(Vector::new([5.0, 5.0]), Vector::new([6.0, 6.0])), "b").unwrap();
//!
//! let mut hits = Vec::new();
//! tree.query(&Aabb::new(Vector::new([0.0, 0.0]), Vector::new([2.0, 2.0])), |_, v| {
//!     hits.push(*v);
//!     true
//! });
//! assert_eq!(hits, vec!["a"]);
//!
//! tree.remove(a);
//! assert_eq!(tree.len(), 1);
//! ```
//!
//! A tree tuned for moving objects pre-pays a fat margin and predicted
//! displacement so small motions are free:
//!
//! ```rust
//! use aabb_tree::{Aabb, Tree, Vector};
//!
//! let mut tree: Tree<2, f64, u32> = Tree::new(0.1, 2.0);
//! let h = tree.insert(&Aabb::new(Vector::new([0.0, 0.0]), Vector::new([1.0, 1.0])), 1).unwrap();
//! // A move smaller than the fat margin is absorbed without reinsertion.
//! tree.update(h, &Aabb::new(Vector::new([0.01, 0.0]), Vector::new([1.01, 1.0])), None);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod arena;
mod error;
mod geometry;
mod stack;
mod tree;

pub use arena::{Arena, Handle};
pub use error::TreeError;
pub use geometry::{Aabb, AabbAdapter, Scalar, VecAdapter, Vector};
pub use tree::Tree;
