//! Call-site reporting.

use std::fmt;
use std::panic::Location;

/// Where a call originated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CallSite {
    /// Source file path, as the compiler saw it.
    pub file: &'static str,
    /// 1-based line.
    pub line: u32,
    /// 1-based column.
    pub column: u32,
    /// Enclosing module path, when captured by [`call_site!`](crate::call_site).
    pub module: Option<&'static str>,
}

impl CallSite {
    /// The location of the caller of the function this is invoked from,
    /// propagated through any chain of `#[track_caller]` functions.
    ///
    /// The module is not known on this path.
    #[track_caller]
    pub fn caller() -> Self {
        Self::from(Location::caller())
    }
}

impl From<&'static Location<'static>> for CallSite {
    fn from(loc: &'static Location<'static>) -> Self {
        Self {
            file: loc.file(),
            line: loc.line(),
            column: loc.column(),
            module: None,
        }
    }
}

impl fmt::Display for CallSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.column)?;
        if let Some(module) = self.module {
            write!(f, " in {module}")?;
        }
        Ok(())
    }
}

/// Capture the current file, line, column, and module path.
#[macro_export]
macro_rules! call_site {
    () => {
        $crate::CallSite {
            file: file!(),
            line: line!(),
            column: column!(),
            module: Some(module_path!()),
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caller_reports_this_line() {
        let expected_line = line!() + 1;
        let site = CallSite::caller();
        assert_eq!(site.line, expected_line);
        assert_eq!(site.file, file!());
        assert_eq!(site.module, None);
    }

    #[track_caller]
    fn relay() -> CallSite {
        CallSite::caller()
    }

    #[test]
    fn caller_propagates_through_track_caller() {
        let expected_line = line!() + 1;
        let site = relay();
        assert_eq!(site.line, expected_line);
    }

    #[test]
    fn macro_captures_module() {
        let site = call_site!();
        assert_eq!(site.module, Some(module_path!()));
        assert_eq!(site.file, file!());
    }

    #[test]
    fn display_with_and_without_module() {
        let mut site = CallSite {
            file: "src/main.rs",
            line: 12,
            column: 5,
            module: None,
        };
        assert_eq!(site.to_string(), "src/main.rs:12:5");
        site.module = Some("demo::run");
        assert_eq!(site.to_string(), "src/main.rs:12:5 in demo::run");
    }
}
