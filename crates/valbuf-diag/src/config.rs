//! Dump formatting configuration.

use std::error::Error;
use std::fmt;

/// Controls how a [`BufferDump`](crate::BufferDump) renders a buffer.
///
/// Validated with [`DumpConfig::validate`]; rendering itself never fails,
/// so an unvalidated config still prints something sensible.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DumpConfig {
    /// Print at most this many elements, eliding the rest.
    ///
    /// `None` prints every element. Must not be `Some(0)`.
    pub max_elements: Option<usize>,

    /// Fixed number of decimal places.
    ///
    /// `None` uses the shortest representation that round-trips.
    /// At most [`DumpConfig::MAX_PRECISION`].
    pub precision: Option<usize>,

    /// Whether to print the storage address line.
    pub show_address: bool,
}

impl DumpConfig {
    /// Largest accepted `precision`. `f32` carries fewer significant
    /// digits than this; anything beyond is noise.
    pub const MAX_PRECISION: usize = 16;

    /// Default config: all elements, shortest form, address shown.
    pub const fn new() -> Self {
        Self {
            max_elements: None,
            precision: None,
            show_address: true,
        }
    }

    /// Check the config's invariants.
    pub fn validate(&self) -> Result<(), DumpConfigError> {
        if self.max_elements == Some(0) {
            return Err(DumpConfigError::ZeroElementLimit);
        }
        if let Some(precision) = self.precision {
            if precision > Self::MAX_PRECISION {
                return Err(DumpConfigError::PrecisionTooLarge { precision });
            }
        }
        Ok(())
    }
}

impl Default for DumpConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Errors detected by [`DumpConfig::validate`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DumpConfigError {
    /// `max_elements` is `Some(0)`; use `None` or at least 1.
    ZeroElementLimit,
    /// `precision` exceeds [`DumpConfig::MAX_PRECISION`].
    PrecisionTooLarge {
        /// The configured precision.
        precision: usize,
    },
}

impl fmt::Display for DumpConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroElementLimit => write!(f, "max_elements must be at least 1"),
            Self::PrecisionTooLarge { precision } => write!(
                f,
                "precision {precision} exceeds maximum of {}",
                DumpConfig::MAX_PRECISION
            ),
        }
    }
}

impl Error for DumpConfigError {}
