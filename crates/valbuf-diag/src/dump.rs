//! Textual dumps of a buffer's length, storage identity, and contents.
//!
//! A [`BufferDump`] borrows the buffer and renders on `Display`, so it
//! costs nothing unless printed and never mutates the buffer:
//!
//! ```text
//! Buffer (b1):
//!   size: 3
//!   storage: 0x55d0c6a8b2a0
//!   values: 1 2 3
//! ```

use std::fmt;

use valbuf_core::ValueBuffer;

use crate::config::DumpConfig;

/// Name used when a dump is not given one.
pub const UNNAMED: &str = "<unnamed>";

/// A displayable view of one buffer.
#[derive(Clone, Debug)]
pub struct BufferDump<'a> {
    buffer: &'a ValueBuffer,
    name: &'a str,
    config: DumpConfig,
}

impl<'a> BufferDump<'a> {
    /// Dump `buffer` under the default name and config.
    pub fn new(buffer: &'a ValueBuffer) -> Self {
        Self {
            buffer,
            name: UNNAMED,
            config: DumpConfig::new(),
        }
    }

    /// Set the display name.
    pub fn named(mut self, name: &'a str) -> Self {
        self.name = name;
        self
    }

    /// Replace the formatting config.
    pub fn with_config(mut self, config: DumpConfig) -> Self {
        self.config = config;
        self
    }

    /// The display name.
    pub fn name(&self) -> &str {
        self.name
    }

    fn write_value(&self, f: &mut fmt::Formatter<'_>, value: f32) -> fmt::Result {
        match self.config.precision {
            Some(precision) => write!(f, "{value:.precision$}"),
            None => write!(f, "{value}"),
        }
    }
}

impl fmt::Display for BufferDump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let len = self.buffer.len();
        writeln!(f, "Buffer ({}):", self.name)?;
        writeln!(f, "  size: {len}")?;
        if self.config.show_address {
            let ptr = self.buffer.as_ptr();
            if ptr.is_null() {
                writeln!(f, "  storage: (none)")?;
            } else {
                writeln!(f, "  storage: {ptr:p}")?;
            }
        }
        write!(f, "  values:")?;
        if len == 0 {
            return write!(f, " (none)");
        }
        let shown = self.config.max_elements.map_or(len, |max| max.min(len));
        for &value in &self.buffer.as_slice()[..shown] {
            write!(f, " ")?;
            self.write_value(f, value)?;
        }
        if shown < len {
            write!(f, " ... ({} more)", len - shown)?;
        }
        Ok(())
    }
}

/// Extension trait adding dump constructors to [`ValueBuffer`].
pub trait Dump {
    /// Dump under the default name.
    fn dump(&self) -> BufferDump<'_>;

    /// Dump under `name`.
    fn dump_named<'a>(&'a self, name: &'a str) -> BufferDump<'a>;
}

impl Dump for ValueBuffer {
    fn dump(&self) -> BufferDump<'_> {
        BufferDump::new(self)
    }

    fn dump_named<'a>(&'a self, name: &'a str) -> BufferDump<'a> {
        BufferDump::new(self).named(name)
    }
}

/// Dump a buffer named after the expression that produced it.
///
/// ```
/// use valbuf_core::ValueBuffer;
///
/// let b1 = ValueBuffer::from_slice(&[1.0, 2.0]);
/// let text = valbuf_diag::dump!(b1).to_string();
/// assert!(text.starts_with("Buffer (b1):"));
/// ```
#[macro_export]
macro_rules! dump {
    ($buffer:expr) => {
        $crate::BufferDump::new(&$buffer).named(stringify!($buffer))
    };
    ($buffer:expr, $config:expr) => {
        $crate::BufferDump::new(&$buffer)
            .named(stringify!($buffer))
            .with_config($config)
    };
}
