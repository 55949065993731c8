//! Test utilities for valbuf development.
//!
//! Provides [`CountingAlloc`], a global allocator wrapper that keeps
//! per-thread allocation counters for leak and double-release accounting,
//! and a handful of buffer fixtures.

#![deny(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod alloc;
pub mod fixtures;

pub use alloc::{measure, thread_stats, AllocStats, CountingAlloc};
