//! valbuf: owning `f32` buffers with value semantics.
//!
//! This is the facade crate that re-exports the public API from the
//! valbuf sub-crates.
//!
//! # Quick start
//!
//! ```rust
//! use valbuf::prelude::*;
//!
//! let mut b1 = ValueBuffer::from([1.0, 2.0, 3.0]);
//! assert_eq!(b1.len(), 3);
//! assert_eq!(b1.at(2), 3.0);
//!
//! // Copies are deep.
//! let b2 = b1.clone();
//! assert_eq!(b2, b1);
//! assert_ne!(b2.as_ptr(), b1.as_ptr());
//!
//! // Moving out leaves the source empty.
//! let b3 = b1.take();
//! assert_eq!(b1.len(), 0);
//! assert_eq!(b3.as_slice(), &[1.0, 2.0, 3.0]);
//!
//! let text = dump!(b3).to_string();
//! assert!(text.starts_with("Buffer (b3):"));
//! ```
//!
//! # Modules
//!
//! | module | crate | contents |
//! |---|---|---|
//! | [`buffer`] | `valbuf-core` | `ValueBuffer`, `BufferError` |
//! | [`diag`] | `valbuf-diag` | dumps, dump config, call sites |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// The buffer type and its errors (`valbuf-core`).
pub use valbuf_core as buffer;

/// Debug dumps and call-site reporting (`valbuf-diag`).
pub use valbuf_diag as diag;

pub use valbuf_diag::{call_site, dump};

/// Common imports.
///
/// ```rust
/// use valbuf::prelude::*;
/// ```
pub mod prelude {
    // Core
    pub use valbuf_core::{BufferError, ValueBuffer};

    // Diagnostics
    pub use valbuf_diag::{BufferDump, CallSite, Dump, DumpConfig, DumpConfigError};

    // Macros
    pub use valbuf_diag::{call_site, dump};
}
