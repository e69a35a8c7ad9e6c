//! An immutable, persistent byte rope.
//!
//! Ropes are built bottom-up from leaves by concatenation. Splitting,
//! slicing and concatenating never copy leaf bytes or touch existing nodes;
//! each operation returns a new root that shares every unchanged subtree
//! with its operands.
//!
//! ```
//! use text_rope::{rope, Rope};
//!
//! let greeting = rope!["hello", ", ", "world"];
//! let (head, tail) = greeting.split_at(5).unwrap();
//! assert_eq!(head.to_string(), "hello");
//! assert_eq!(tail.to_string(), ", world");
//! assert_eq!(greeting.byte_at(7).unwrap(), b'w');
//! assert_eq!(greeting.index(b'o'), Some(4));
//! ```
//!
//! All offsets are byte offsets. Rebalancing is never automatic; call
//! [`Rope::rebalance`] after a long run of edits.

mod error;
mod macros;
mod rope;
mod tree;
mod util;

pub use self::error::{Error, Result};
pub use self::rope::Rope;
pub use self::tree::{Leaf, Node};
