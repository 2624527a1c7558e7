// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The crate's error type, surfaced only from the allocation-failure paths
//! described in the tree's error handling design. Precondition violations
//! (a stale handle, a non-leaf handle passed to indexed access, removing a
//! vacant slot) are programmer errors and are asserted against instead,
//! not represented here.

use core::fmt;

/// An error surfaced from a fallible arena or stack growth.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[non_exhaustive]
pub enum TreeError {
    /// The backing allocator could not satisfy a growth request.
    AllocFailed,
}

impl fmt::Display for TreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AllocFailed => write!(f, "allocation failed while growing the tree"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for TreeError {}
