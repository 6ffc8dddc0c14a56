//! Typed handles for nodes of a budget tree.
//!
//! A handle is the position of a node inside its parent's ordered sequence.
//! Typed handles prevent accidentally passing a `SchemeId` where a
//! `DepartmentId` is expected.

use serde::{Deserialize, Serialize};

/// Macro to generate typed index wrappers.
macro_rules! typed_index {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub usize);

        impl $name {
            /// Creates a handle from a position.
            #[must_use]
            pub const fn new(index: usize) -> Self {
                Self(index)
            }

            /// Returns the position this handle points at.
            #[must_use]
            pub const fn index(self) -> usize {
                self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "#{}", self.0)
            }
        }
    };
}

typed_index!(DepartmentId, "Position of a department within its government.");
typed_index!(SchemeId, "Position of a scheme within its department.");
