//! # Overview
//!
//! This crate finds the shortest edit script between two tokenized texts,
//! the minimal ordered sequence of insertions, deletions and common runs
//! that transforms one text into the other, implementing the greedy search
//! described in ["An O(ND) Difference Algorithm and its Variations"][myers]
//! (Myers, 1986).
//!
//! Tokenization, token equality and value reconstruction are pluggable
//! through [DiffOptions]; ready-made flavors cover character, word, line,
//! sentence, css and json comparison, and [diff_slices] diffs arbitrary
//! [Token] slices.
//!
//! [myers]: http://citeseerx.ist.psu.edu/viewdoc/summary?doi=10.1.1.4.6927
//!
//! # Example
//!
//! ```rust
//! use text_edit_script::*;
//!
//! let changes = diff_words("the quick brown fox", "the slow brown cat");
//!
//! let script: Vec<_> = changes.iter().map(|c| (c.tag, c.value.as_str())).collect();
//!
//! assert_eq!(script, [
//!     (Tag::Common, "the "),
//!     (Tag::Removed, "quick"),
//!     (Tag::Added, "slow"),
//!     (Tag::Common, " brown "),
//!     (Tag::Removed, "fox"),
//!     (Tag::Added, "cat"),
//! ]);
//! ```

mod change;
mod convert;
mod diff;
mod flavor;
mod json;
mod options;
mod policy;
mod token;

pub mod tokenize;

pub use change::*;
pub use convert::*;
pub use diff::*;
pub use flavor::*;
pub use json::*;
pub use options::*;
pub use policy::*;
pub use token::*;

mod assemble;
mod engine;

pub(crate) use assemble::*;
pub(crate) use engine::*;
