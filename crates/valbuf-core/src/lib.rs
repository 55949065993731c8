//! Owning fixed-length `f32` buffers with value semantics.
//!
//! [`ValueBuffer`] owns one contiguous heap block exclusively. Copies are
//! deep, moves are constant-time and leave the source empty, and the
//! block is released exactly once when its owner goes away.
//!
//! # States
//!
//! ```text
//! ValueBuffer
//! ├── empty    len == 0, no allocation
//! └── holding  len == N > 0, Box<[f32]> of exactly N elements
//! ```
//!
//! # Operations
//!
//! | operation | Rust surface | allocates |
//! |---|---|---|
//! | construct | [`ValueBuffer::from_slice`], `From`, `FromIterator` | iff non-empty |
//! | copy | [`Clone::clone`], [`ValueBuffer::try_clone`] | iff non-empty |
//! | copy-assign | [`Clone::clone_from`] (copy-and-swap) | iff source non-empty |
//! | move | language move, [`ValueBuffer::take`], [`ValueBuffer::move_from`] | never |
//! | swap | [`ValueBuffer::swap`] | never |
//! | destroy | `Drop`, [`ValueBuffer::clear`] | never |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod buffer;
pub mod error;

pub use buffer::ValueBuffer;
pub use error::BufferError;
