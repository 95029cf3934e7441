//! # triff-patch
//!
//! Consumers of [`triff`] diffs.
//!
//! - [`reduce`] turns a diff into positional [`BinaryDiff`] edits, and
//!   [`apply`] / [`patched`] replay them on a [`Patchable`] sequence
//! - [`perform_updates`] drives a sectioned [`ListView`] through the section and
//!   row changes of a diff
//!
//! ```
//! use triff::{Diff, DiffConfig, diff_eq};
//! use triff_patch::{patched, reduce};
//!
//! let before = vec!['a', 'b', 'c', 'd'];
//! let after = vec!['d', 'a', 'x', 'c'];
//!
//! let diffs = diff_eq(&before, &after, &DiffConfig::default()).unwrap();
//! let ops = reduce(diffs.iter().map(Diff::cloned));
//! assert_eq!(patched(&before, ops).unwrap(), after);
//! ```

#![warn(missing_docs)]

mod tracing_macros;

mod apply;
mod batch;
mod binary;
mod error;

pub use apply::{Patchable, apply, patched};
pub use batch::{IndexPath, ListUpdate, ListView, perform_updates};
pub use binary::{BinaryDiff, reduce, sort};
pub use error::PatchError;
