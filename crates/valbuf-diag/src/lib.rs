//! Diagnostics for valbuf buffers.
//!
//! Two independent, read-only collaborators:
//!
//! - [`BufferDump`] renders a buffer's name, length, storage identity,
//!   and elements. [`dump!`] names the dump after the expression.
//! - [`CallSite`] records where a call came from. [`call_site!`] also
//!   captures the module path.
//!
//! Neither touches buffer state.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod dump;
pub mod location;

pub use config::{DumpConfig, DumpConfigError};
pub use dump::{BufferDump, Dump};
pub use location::CallSite;
