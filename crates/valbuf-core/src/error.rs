//! Buffer-specific error types.

use std::error::Error;
use std::fmt;

/// Errors from the fallible construction and copy paths.
///
/// The infallible paths (`from_slice`, `clone`) treat allocation failure
/// as fatal and abort. `try_from_slice` and `try_clone` report it here
/// instead, and never leave a half-built buffer behind.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BufferError {
    /// The element count cannot be expressed as an allocation size.
    CapacityOverflow {
        /// Number of elements requested.
        len: usize,
    },
    /// The allocator refused the request.
    AllocationFailed {
        /// Number of bytes requested.
        requested_bytes: usize,
    },
}

impl fmt::Display for BufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CapacityOverflow { len } => {
                write!(f, "capacity overflow: {len} elements exceed the addressable size")
            }
            Self::AllocationFailed { requested_bytes } => {
                write!(f, "allocation failed: requested {requested_bytes} bytes")
            }
        }
    }
}

impl Error for BufferError {}
